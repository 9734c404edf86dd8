// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that the registry uses to
//! talk to the outside world. They are implemented by adapters in the adapters
//! layer.

pub mod decoder;

// Re-export commonly used types
pub use decoder::DocumentDecoder;
