// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing document I/O and decoder implementations.
//!
//! This module contains the bounded file reader used when loading a
//! configuration document, and concrete implementations of the
//! `DocumentDecoder` port.

pub mod document_file;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
#[cfg(feature = "yaml")]
pub use yaml::YamlDecoder;
