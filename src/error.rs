// Error types for snaptodo.
// Covers configuration, picker gateway, and terminal errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Image picker failed: {0}")]
    Picker(String),

    #[error("Terminal setup failed: {0}")]
    TerminalSetup(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnapError>;
