//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `HopError` as one
//! variant where configuration problems can surface.

use thiserror::Error;

/// The top-level error type for `hop-core`.
#[derive(Debug, Error)]
pub enum HopError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `hop-core`.
pub type HopResult<T> = Result<T, HopError>;
