use hop_scene::SceneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("unsupported model: {0}")]
    Unsupported(String),

    #[error("control vector has {got} entries, model has {expected} actuators")]
    CtrlLength { expected: usize, got: usize },

    #[error("material id {0} out of range")]
    MaterialOutOfRange(usize),
}

pub type EngineResult<T> = Result<T, EngineError>;
