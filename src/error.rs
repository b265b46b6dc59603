//! Error types for the concealment engine.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during conceal/reveal operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist.
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Cover image has too few samples for the framed payload.
    #[error("Cover image too small: need {needed} bits, have {available} bits")]
    Capacity { needed: usize, available: usize },

    /// The end-of-payload delimiter never appeared during extraction.
    #[error("No hidden data found in image")]
    NoHiddenData,

    /// Authentication failure: wrong passphrase or corrupted data.
    /// The two causes are deliberately indistinguishable.
    #[error("Decryption failed: wrong passphrase or corrupted data")]
    Authentication,

    /// Image decode or encode error.
    #[error("Image error: {0}")]
    Image(String),

    /// The operation was cancelled between pipeline stages.
    #[error("Operation cancelled")]
    Cancelled,

    /// Any other failure that does not fit the taxonomy.
    #[error("{0}")]
    Unclassified(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}
