//! Error types for the smooai-file-properties library.

use thiserror::Error;

/// Errors that can occur while constructing or staging file properties.
#[derive(Error, Debug)]
pub enum PropertiesError {
    /// A required argument was absent or unusable for the requested operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An I/O error occurred while reading a local source for staging.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using PropertiesError.
pub type Result<T> = std::result::Result<T, PropertiesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = PropertiesError::InvalidArgument("source".to_string());
        assert_eq!(err.to_string(), "Invalid argument: source");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PropertiesError = io.into();
        assert!(matches!(err, PropertiesError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
