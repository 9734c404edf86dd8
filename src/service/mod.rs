// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the registry implementation.
//!
//! This module contains `Registry`, which stores the override, config and
//! default layers and resolves keys across them.

pub mod registry;

// Re-export commonly used types
pub use registry::{Layer, LoadedFile, Registry, RegistryBuilder};
