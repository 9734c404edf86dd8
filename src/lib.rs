// SPDX-License-Identifier: MIT OR Apache-2.0

//! A layered configuration registry with case-insensitive dotted keys.
//!
//! Values come from three layers, consulted in a fixed order:
//!
//! 1. **Overrides** set programmatically with [`Registry::set_override`]
//! 2. **Config**, a single document loaded with [`Registry::load_configuration`]
//! 3. **Defaults** set programmatically with [`Registry::set_default`]
//!
//! Keys are dot-delimited paths (`"database.host"`) compared without regard to
//! case. The config layer additionally resolves literal keys that contain the
//! delimiter (`"database.host": ...` in the document) ahead of the nested form,
//! and indexes sequences with numeric segments (`"servers.0"`).
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Value tree, keys, normalization, path resolution, errors
//! - **Ports**: The `DocumentDecoder` trait for document formats
//! - **Adapters**: Bounded file reading and the YAML decoder
//! - **Service**: The `Registry` that ties the layers together
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML document support (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use layercfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let mut registry = Registry::new();
//! registry.set_override("host", "override value");
//! registry.load_configuration("./conf.yaml")?;
//! registry.set_default("default", "default value");
//!
//! println!("{}", registry.get_string("host"));
//! println!("{}", registry.get_int("port"));
//! println!("{}", registry.get_string("default"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod global;
pub mod ports;
pub mod service;

pub use service::Registry;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigReader, ConfigValue, FromConfigValue, Mapping, Result,
    };
    pub use crate::ports::DocumentDecoder;
    pub use crate::service::{Layer, Registry, RegistryBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlDecoder;
}
