//! Error types for txt2latex.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for txt2latex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during text to LaTeX conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// The source text file does not exist.
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A translation backend call failed.
    ///
    /// Never escapes [`Translator::translate`](crate::translate::Translator::translate);
    /// backends return it and the translator degrades to the original text.
    #[error("Translation failed: {0}")]
    Translation(String),

    /// HTTP transport error from the online translation backend.
    #[cfg(feature = "online")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A classification pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}
