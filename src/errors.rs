//! Unified error types and result handling.
//!
//! Only the loaders and the configuration layer can fail. The scheduling core is infallible:
//! data problems it notices are reported as [`crate::core::collection::Diagnostic`] values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring the run or loading the collection from disk.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or is inconsistent.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// A record in one of the data files failed validation.
    #[error("Invalid record in {file:?}: {message}")]
    InvalidRecord {
        /// File the record came from
        file: PathBuf,
        /// What was wrong with it
        message: String,
    },

    /// A date string did not match the expected format.
    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// I/O failure while reading a data or config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config() {
        let err = Error::Config {
            message: "horizon must not be negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration error: horizon must not be negative"
        );
    }

    #[test]
    fn test_display_invalid_record() {
        let err = Error::InvalidRecord {
            file: PathBuf::from("plants.toml"),
            message: "health 7 out of range".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid record in \"plants.toml\": health 7 out of range"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
