use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("<{element}> has invalid {attribute}={value:?}")]
    InvalidAttribute {
        element:   &'static str,
        attribute: &'static str,
        value:     String,
    },

    #[error("include error: {0}")]
    Include(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;
