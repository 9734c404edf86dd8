// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration registry.
//!
//! Only loading and typed unmarshalling can fail. Lookup misses are never
//! errors: they surface as `None` from [`Registry::find`] or as zero values
//! from the typed getters.
//!
//! [`Registry::find`]: crate::service::Registry::find

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for registry operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use layercfg::domain::errors::ConfigError;
/// use std::path::PathBuf;
///
/// let err = ConfigError::UnknownFormat {
///     path: PathBuf::from("confwithoutext"),
/// };
/// assert!(err.to_string().contains("confwithoutext"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file path has no extension, so no format can be chosen.
    #[error("Unable to determine configuration format for '{}': missing file extension", .path.display())]
    UnknownFormat {
        /// The path that was given
        path: PathBuf,
    },

    /// The extension is not handled by any registered decoder.
    ///
    /// Only returned by registries built with strict format checking; the
    /// default behavior is to skip such files silently.
    #[error("Unsupported configuration format '{extension}' for '{}'", .path.display())]
    UnsupportedFormat {
        /// The path that was given
        path: PathBuf,
        /// The unrecognized extension
        extension: String,
    },

    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    IoError {
        /// The path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exceeds the maximum accepted size.
    #[error("Configuration file '{}' too large: {size} bytes (max {max} bytes)", .path.display())]
    FileTooLarge {
        /// The offending path
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        max: u64,
    },

    /// The document could not be decoded into a mapping.
    #[error("Failed to decode configuration: {message}")]
    DecodeError {
        /// The error message
        message: String,
        /// The underlying decoder error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An empty key delimiter was supplied.
    #[error("Key delimiter must not be empty")]
    InvalidDelimiter,

    /// The requested configuration key was not found in any layer.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration location could not be resolved.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `DecodeError` wrapping a decoder's own error type.
    pub fn decode<E>(message: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::DecodeError {
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unknown_format_error() {
        let error = ConfigError::UnknownFormat {
            path: PathBuf::from("conf"),
        };
        assert_eq!(
            error.to_string(),
            "Unable to determine configuration format for 'conf': missing file extension"
        );
    }

    #[test]
    fn test_unsupported_format_error() {
        let error = ConfigError::UnsupportedFormat {
            path: PathBuf::from("conf.toml"),
            extension: "toml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unsupported configuration format 'toml' for 'conf.toml'"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let error = ConfigError::IoError {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert!(error.to_string().contains("missing.yaml"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_file_too_large_error() {
        let error = ConfigError::FileTooLarge {
            path: PathBuf::from("big.yaml"),
            size: 20,
            max: 10,
        };
        assert_eq!(
            error.to_string(),
            "Configuration file 'big.yaml' too large: 20 bytes (max 10 bytes)"
        );
    }

    #[test]
    fn test_decode_helper() {
        let parse_err = "x".parse::<i32>().unwrap_err();
        let error = ConfigError::decode("bad document", parse_err);
        assert!(matches!(error, ConfigError::DecodeError { .. }));
        assert_eq!(
            error.to_string(),
            "Failed to decode configuration: bad document"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_key_not_found_error() {
        let error = ConfigError::ConfigKeyNotFound {
            key: "test.key".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: test.key");
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "invalid value".parse::<i32>().unwrap_err();
        let error = ConfigError::TypeConversionError {
            key: "test.key".to_string(),
            target_type: "i32".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("test.key"));
        assert!(error.to_string().contains("i32"));
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "config-dir".to_string(),
            message: "no home directory".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'config-dir' error: no home directory"
        );
    }
}
