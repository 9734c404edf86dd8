// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and algorithms.
//!
//! This module contains the value tree, key handling, key normalization and
//! the key path resolver. It performs no I/O and knows nothing about file
//! formats.

pub mod coerce;
pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod normalize;
pub mod resolve;
pub mod service;

// Re-export commonly used types
pub use coerce::FromConfigValue;
pub use config_key::ConfigKey;
pub use config_value::{ConfigValue, Mapping};
pub use errors::{ConfigError, Result};
pub use service::ConfigReader;
