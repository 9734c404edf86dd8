// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded configuration file reader.
//!
//! This module reads the raw bytes of a configuration document, refusing files
//! above a fixed size before reading them.

use crate::domain::{ConfigError, Result};
use directories::ProjectDirs;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration documents (10MB)
pub const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// File name looked up in the OS configuration directory.
pub const DEFAULT_FILE_NAME: &str = "config.yaml";

/// Reads the whole document at `path`.
///
/// # Errors
///
/// * `ConfigError::IoError` - The file is missing or unreadable
/// * `ConfigError::FileTooLarge` - The file exceeds [`MAX_DOCUMENT_SIZE`]
pub fn read_document(path: &Path) -> Result<Vec<u8>> {
    read_bounded(path, MAX_DOCUMENT_SIZE)
}

fn read_bounded(path: &Path, max: u64) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;

    let size = file.metadata().map_err(|e| io_error(path, e))?.len();
    if size > max {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max,
        });
    }

    // The file may grow after the metadata check; never read past the limit.
    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
    file.take(max.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| io_error(path, e))?;

    let read = bytes.len() as u64;
    if read > max {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size: read,
            max,
        });
    }

    Ok(bytes)
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    }
}

/// Returns the path of `config.yaml` in the OS-appropriate configuration
/// directory for the given application.
///
/// # Arguments
///
/// * `app_name` - The application name (e.g., "myapp")
/// * `qualifier` - The organization/qualifier (e.g., "com.example")
///
/// # Examples
///
/// ```rust,no_run
/// use layercfg::adapters::document_file::default_location;
///
/// let path = default_location("myapp", "com.example").unwrap();
/// assert!(path.ends_with("config.yaml"));
/// ```
pub fn default_location(app_name: &str, qualifier: &str) -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
            source_name: "config-dir".to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        })?;

    Ok(proj_dirs.config_dir().join(DEFAULT_FILE_NAME))
}
