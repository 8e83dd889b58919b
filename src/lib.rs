//! Khana - a terminal recipe-video browser
//!
//! Pick a cooking method, a cuisine category and a dish; khana derives a
//! search query from the selection, asks the YouTube Data API for matching
//! videos and shows them as cards with an embeddable player.

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod facets;
pub mod logging;
pub mod output;
pub mod search;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum KhanaError {
    /// Search provider error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// A search ran and the provider reported a failure
    #[error("Search for \"{query}\" failed: {message}")]
    SearchFailed { query: String, message: String },
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, KhanaError>;
