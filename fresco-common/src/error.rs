//! Common error types for Fresco

use thiserror::Error;

/// Common result type for Fresco operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Fresco service
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading the recipe data document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The recipe data document is not valid JSON / does not match the model
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
