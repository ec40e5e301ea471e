use std::path::PathBuf;

use hop_core::HopError;
use hop_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("showcase configuration error: {0}")]
    Config(#[from] HopError),

    #[error("scene file {} not found", .0.display())]
    SceneNotFound(PathBuf),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;
