//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The browser needs an interactive terminal
    #[error("khana browse needs an interactive terminal; try `khana search` instead")]
    NotATerminal,

    /// Clipboard could not be opened or written
    #[error("Clipboard unavailable: {0}")]
    ClipboardError(String),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
