use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("results file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("duplicate grid cell: leg length {leg_length}, frequency {frequency}")]
    DuplicateCell { leg_length: f64, frequency: f64 },

    #[error("no grid row for leg length {leg_length} at {frequency} Hz")]
    MissingRow { leg_length: f64, frequency: f64 },

    #[error("grid is empty")]
    Empty,

    #[error("render error: {0}")]
    Render(String),
}

pub type ResultsResult<T> = Result<T, ResultsError>;
