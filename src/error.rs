//! Error types for xornet.

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A vector passed to a layer or network has the wrong length.
    #[error("invalid shape for {context}: expected {expected} values, got {got}")]
    InvalidShape {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// An operation was called out of sequence.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Invalid hyperparameters or training configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn shape(context: &'static str, expected: usize, got: usize) -> Error {
        Error::InvalidShape { context, expected, got }
    }
}
