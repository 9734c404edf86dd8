// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide default registry.
//!
//! Convenience functions operating on a single lazily created [`Registry`]
//! guarded by a `RwLock`. Libraries should prefer passing a `Registry` around
//! explicitly; this module is meant for applications that want one shared
//! configuration without threading it through every call.
//!
//! # Examples
//!
//! ```rust
//! use layercfg::global;
//!
//! global::set_default("global_doc.port", 8080);
//! global::set_override("Global_Doc.Host", "example.com");
//!
//! assert_eq!(global::get_int("global_doc.port"), 8080);
//! assert_eq!(global::get_string("global_doc.host"), "example.com");
//! ```

use crate::domain::{ConfigReader, ConfigValue, Result};
use crate::service::Registry;
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::new()));

/// Runs `f` with shared access to the global registry.
///
/// The lock is held while `f` runs. `f` must only use the `&Registry` it is
/// given: calling any other function of this module from inside `f` locks
/// the registry again, which deadlocks or panics.
pub fn with_registry<R>(f: impl FnOnce(&Registry) -> R) -> R {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    f(&registry)
}

/// Runs `f` with exclusive access to the global registry.
///
/// As with [`with_registry`], `f` must only use the `&mut Registry` it is
/// given and never call back into this module.
pub fn with_registry_mut<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut registry)
}

/// Sets an override in the global registry. See [`Registry::set_override`].
pub fn set_override(key: impl AsRef<str>, value: impl Into<ConfigValue>) {
    with_registry_mut(|registry| registry.set_override(key, value));
}

/// Sets a default in the global registry. See [`Registry::set_default`].
pub fn set_default(key: impl AsRef<str>, value: impl Into<ConfigValue>) {
    with_registry_mut(|registry| registry.set_default(key, value));
}

/// Loads a configuration document into the global registry.
/// See [`Registry::load_configuration`].
pub fn load_configuration(path: impl AsRef<Path>) -> Result<()> {
    with_registry_mut(|registry| registry.load_configuration(path))
}

/// Replaces the key delimiter of the global registry.
pub fn set_delimiter(delimiter: impl Into<String>) -> Result<()> {
    with_registry_mut(|registry| registry.set_delimiter(delimiter))
}

/// Returns a copy of the value resolved for `key`.
pub fn get(key: &str) -> Option<ConfigValue> {
    with_registry(|registry| registry.get(key))
}

/// Returns `true` if any layer holds a non-null value for `key`.
pub fn is_set(key: &str) -> bool {
    with_registry(|registry| registry.is_set(key))
}

/// Returns the value for `key` as a string, or `""`.
pub fn get_string(key: &str) -> String {
    with_registry(|registry| registry.get_string(key))
}

/// Returns the value for `key` as an integer, or `0`.
pub fn get_int(key: &str) -> i64 {
    with_registry(|registry| registry.get_int(key))
}

/// Returns the value for `key` as a float, or `0.0`.
pub fn get_float(key: &str) -> f64 {
    with_registry(|registry| registry.get_float(key))
}

/// Returns the value for `key` as a boolean, or `false`.
pub fn get_bool(key: &str) -> bool {
    with_registry(|registry| registry.get_bool(key))
}
