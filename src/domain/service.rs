// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration read trait.
//!
//! This module defines the `ConfigReader` trait, the read side of the registry.
//! Implementors only supply [`ConfigReader::get`]; the typed getters are
//! provided on top of it and never fail.

use crate::domain::coerce::FromConfigValue;
use crate::domain::config_value::{ConfigValue, Mapping};
use std::collections::HashMap;

/// Read access to layered configuration values.
///
/// # Examples
///
/// ```rust
/// use layercfg::domain::{ConfigReader, ConfigValue};
///
/// struct Fixed;
///
/// impl ConfigReader for Fixed {
///     fn get(&self, key: &str) -> Option<ConfigValue> {
///         (key.eq_ignore_ascii_case("port")).then(|| ConfigValue::from("8080"))
///     }
/// }
///
/// let reader = Fixed;
/// assert_eq!(reader.get_int("PORT"), 8080);
/// assert_eq!(reader.get_int("missing"), 0);
/// assert!(reader.is_set("port"));
/// ```
pub trait ConfigReader {
    /// Returns the highest-precedence value set for `key`, if any.
    ///
    /// Keys are case-insensitive.
    fn get(&self, key: &str) -> Option<ConfigValue>;

    /// Returns `true` if any layer holds a non-null value for `key`.
    fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the value for `key`, or `fallback` when it is not set.
    fn get_or(&self, key: &str, fallback: impl Into<ConfigValue>) -> ConfigValue
    where
        Self: Sized,
    {
        self.get(key).unwrap_or_else(|| fallback.into())
    }

    /// Returns the value for `key` converted to `T`, or `T`'s zero value.
    fn get_as<T: FromConfigValue>(&self, key: &str) -> T
    where
        Self: Sized,
    {
        T::from_config_value(self.get(key).as_ref())
    }

    /// Returns the value for `key` as a string.
    fn get_string(&self, key: &str) -> String {
        String::from_config_value(self.get(key).as_ref())
    }

    /// Returns the value for `key` as an `i64`.
    fn get_int(&self, key: &str) -> i64 {
        i64::from_config_value(self.get(key).as_ref())
    }

    /// Returns the value for `key` as an `i32`.
    fn get_i32(&self, key: &str) -> i32 {
        i32::from_config_value(self.get(key).as_ref())
    }

    /// Returns the value for `key` as a `u64`.
    fn get_u64(&self, key: &str) -> u64 {
        u64::from_config_value(self.get(key).as_ref())
    }

    /// Returns the value for `key` as an `f64`.
    fn get_float(&self, key: &str) -> f64 {
        f64::from_config_value(self.get(key).as_ref())
    }

    /// Returns the value for `key` as a `bool`.
    fn get_bool(&self, key: &str) -> bool {
        bool::from_config_value(self.get(key).as_ref())
    }

    /// Returns the value for `key` as a list of strings.
    fn get_string_slice(&self, key: &str) -> Vec<String> {
        Vec::<String>::from_config_value(self.get(key).as_ref())
    }

    /// Returns the value for `key` as a mapping of values.
    fn get_mapping(&self, key: &str) -> Mapping {
        Mapping::from_config_value(self.get(key).as_ref())
    }

    /// Returns the value for `key` as a map of strings.
    fn get_string_map(&self, key: &str) -> HashMap<String, String> {
        HashMap::<String, String>::from_config_value(self.get(key).as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestReader {
        values: HashMap<String, ConfigValue>,
    }

    impl TestReader {
        fn new(entries: Vec<(&str, ConfigValue)>) -> Self {
            Self {
                values: entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            }
        }
    }

    impl ConfigReader for TestReader {
        fn get(&self, key: &str) -> Option<ConfigValue> {
            self.values.get(&key.to_lowercase()).cloned()
        }
    }

    #[test]
    fn test_typed_getters() {
        let reader = TestReader::new(vec![
            ("name", ConfigValue::from("app")),
            ("port", ConfigValue::from(8080)),
            ("ratio", ConfigValue::from(0.5)),
            ("debug", ConfigValue::from("yes")),
            ("tags", ConfigValue::from(vec!["a", "b"])),
        ]);

        assert_eq!(reader.get_string("name"), "app");
        assert_eq!(reader.get_int("port"), 8080);
        assert_eq!(reader.get_i32("port"), 8080);
        assert_eq!(reader.get_u64("port"), 8080);
        assert_eq!(reader.get_float("ratio"), 0.5);
        assert!(reader.get_bool("debug"));
        assert_eq!(reader.get_string_slice("tags"), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_keys_yield_zero_values() {
        let reader = TestReader::new(vec![]);

        assert_eq!(reader.get_string("missing"), "");
        assert_eq!(reader.get_int("missing"), 0);
        assert_eq!(reader.get_float("missing"), 0.0);
        assert!(!reader.get_bool("missing"));
        assert!(reader.get_string_slice("missing").is_empty());
        assert!(reader.get_mapping("missing").is_empty());
        assert!(reader.get_string_map("missing").is_empty());
        assert!(!reader.is_set("missing"));
    }

    #[test]
    fn test_get_or() {
        let reader = TestReader::new(vec![("present", ConfigValue::from(false))]);

        assert_eq!(reader.get_or("present", true), ConfigValue::from(false));
        assert_eq!(reader.get_or("absent", "fallback"), ConfigValue::from("fallback"));
    }

    #[test]
    fn test_get_as() {
        let reader = TestReader::new(vec![("port", ConfigValue::from("443"))]);
        let port: u32 = reader.get_as("port");
        assert_eq!(port, 443);
    }
}
