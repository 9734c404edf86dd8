// SPDX-License-Identifier: MIT OR Apache-2.0

//! Case-insensitive configuration key.
//!
//! This module provides the `ConfigKey` type, a newtype around `String` that is
//! lower-cased on construction and can be split into a key path.

use std::fmt;

/// A lower-cased configuration key.
///
/// Every key entering the registry passes through `ConfigKey`, which is what
/// makes lookups case-insensitive: `"Database.Host"` and `"database.host"`
/// produce equal keys.
///
/// # Examples
///
/// ```
/// use layercfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("Database.Host");
/// assert_eq!(key.as_str(), "database.host");
/// assert_eq!(key.path("."), vec!["database", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey`, lower-casing the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use layercfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::new("App.Name");
    /// assert_eq!(key.as_str(), "app.name");
    /// ```
    pub fn new(key: impl AsRef<str>) -> Self {
        ConfigKey(key.as_ref().to_lowercase())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Splits the key into path segments on `delimiter`.
    ///
    /// An empty key yields a single empty segment, never an empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use layercfg::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::from("a::b").path("::"), vec!["a", "b"]);
    /// assert_eq!(ConfigKey::from("").path("."), vec![""]);
    /// ```
    pub fn path<'a>(&'a self, delimiter: &str) -> Vec<&'a str> {
        self.0.split(delimiter).collect()
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey::new(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey::new(s)
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_key_lowercases() {
        let key = ConfigKey::new("Test.KEY");
        assert_eq!(key.as_str(), "test.key");
    }

    #[test]
    fn test_config_key_from_string() {
        let key = ConfigKey::from("HOST".to_string());
        assert_eq!(key.as_str(), "host");
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::from("Test.Key");
        assert_eq!(key.into_string(), "test.key");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("Test.Key");
        assert_eq!(format!("{}", key), "test.key");
    }

    #[test]
    fn test_config_key_case_insensitive_equality() {
        assert_eq!(ConfigKey::from("HOST"), ConfigKey::from("host"));
        assert_ne!(ConfigKey::from("host"), ConfigKey::from("port"));
    }

    #[test]
    fn test_config_key_hash() {
        let mut map = HashMap::new();
        map.insert(ConfigKey::from("Test.Key"), "value1");

        assert_eq!(map.get(&ConfigKey::from("TEST.KEY")), Some(&"value1"));
        assert_eq!(map.get(&ConfigKey::from("other.key")), None);
    }

    #[test]
    fn test_path_default_delimiter() {
        let key = ConfigKey::from("database.connection.host");
        assert_eq!(key.path("."), vec!["database", "connection", "host"]);
    }

    #[test]
    fn test_path_custom_delimiter() {
        let key = ConfigKey::from("database.url/host");
        assert_eq!(key.path("/"), vec!["database.url", "host"]);
    }

    #[test]
    fn test_path_empty_key() {
        let key = ConfigKey::from("");
        assert_eq!(key.path("."), vec![""]);
    }

    #[test]
    fn test_path_keeps_empty_segments() {
        let key = ConfigKey::from("a..b");
        assert_eq!(key.path("."), vec!["a", "", "b"]);
    }

    #[test]
    fn test_string_from_config_key() {
        let s: String = ConfigKey::from("App").into();
        assert_eq!(s, "app");
    }
}
