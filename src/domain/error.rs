//! Error types for the shelfie plugin.
//!
//! This module defines the centralized error type [`ShelfieError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// The main error type for shelfie operations.
///
/// Covers dataset loading, filesystem access, theme parsing and configuration.
///
/// # Examples
///
/// ```
/// use shelfie::ShelfieError;
///
/// let err = ShelfieError::Catalog("duplicate book id: b1".to_string());
/// assert_eq!(err.to_string(), "Catalog error: duplicate book id: b1");
/// ```
#[derive(Debug, Error)]
pub enum ShelfieError {
    /// The catalog document could not be parsed or failed a sanity check.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for shelfie operations.
pub type Result<T> = std::result::Result<T, ShelfieError>;
