use hop_engine::EngineError;
use hop_scene::SceneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("sweep configuration error: {0}")]
    Config(String),

    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

pub type SweepResult<T> = Result<T, SweepError>;
