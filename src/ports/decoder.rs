// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document decoder trait definition.
//!
//! This module defines the `DocumentDecoder` trait, the interface through which
//! the registry turns the bytes of a configuration file into a value tree.

use crate::domain::{Mapping, Result};

/// A trait for decoding configuration documents.
///
/// Decoders produce the document's top-level mapping as-is: keys keep their
/// original case and may contain the key delimiter. The registry normalizes
/// the result before storing it.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that a registry holding them can
/// be shared behind a lock.
///
/// # Examples
///
/// ```rust
/// use layercfg::domain::{ConfigValue, Mapping, Result};
/// use layercfg::ports::DocumentDecoder;
///
/// struct KeyValueDecoder;
///
/// impl DocumentDecoder for KeyValueDecoder {
///     fn decode(&self, bytes: &[u8]) -> Result<Mapping> {
///         let text = String::from_utf8_lossy(bytes);
///         Ok(text
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim().to_string(), ConfigValue::from(v.trim())))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let doc = KeyValueDecoder.decode(b"Host = localhost").unwrap();
/// assert_eq!(doc["Host"], ConfigValue::from("localhost"));
/// ```
pub trait DocumentDecoder: Send + Sync {
    /// Decodes a complete document into its top-level mapping.
    ///
    /// # Returns
    ///
    /// * `Ok(Mapping)` - The decoded document; an empty document yields an
    ///   empty mapping
    /// * `Err(ConfigError::DecodeError)` - The bytes are not a valid document,
    ///   or the document is not a mapping at the top level
    fn decode(&self, bytes: &[u8]) -> Result<Mapping>;

    /// Returns the file extensions handled by this decoder.
    ///
    /// Extensions are given in lower case without the leading dot. The
    /// registry compares them exactly, unless built with
    /// `case_insensitive_extensions`.
    fn supported_extensions(&self) -> &[&str];
}
