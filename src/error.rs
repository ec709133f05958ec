//! Error types for the recipress library.

use std::io;
use thiserror::Error;

/// Result type alias for recipress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout and export.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when opening or writing the destination file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Required input was missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A string could not be measured or encoded with the selected font.
    #[error("Text measurement error: {0}")]
    Measure(String),

    /// Error while emitting the output document.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("recipe is required".into());
        assert_eq!(err.to_string(), "Invalid argument: recipe is required");

        let err = Error::Measure("no glyph for U+0001".into());
        assert_eq!(
            err.to_string(),
            "Text measurement error: no glyph for U+0001"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
