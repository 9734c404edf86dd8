// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic configuration value tree.
//!
//! This module provides the `ConfigValue` type, the universal value flowing
//! through every layer of the registry: a scalar, an ordered sequence, or a
//! string-keyed mapping, nested arbitrarily.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A string-keyed mapping of configuration values.
pub type Mapping = BTreeMap<String, ConfigValue>;

/// A node in a configuration tree.
///
/// Scalars, sequences and mappings are explicit variants, so every descent
/// through the tree is an exhaustive match rather than a dynamic type check.
///
/// # Examples
///
/// ```
/// use layercfg::domain::config_value::{ConfigValue, Mapping};
///
/// let mut db = Mapping::new();
/// db.insert("host".to_string(), ConfigValue::from("localhost"));
/// db.insert("port".to_string(), ConfigValue::from(5432));
///
/// let value = ConfigValue::from(db);
/// assert!(value.is_mapping());
/// assert_eq!(value.as_mapping().unwrap()["port"].as_i64(), Some(5432));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// An explicit null, treated as "not set" by lookups
    #[default]
    Null,
    /// A boolean scalar
    Bool(bool),
    /// An integer scalar
    Integer(i64),
    /// A floating point scalar
    Float(f64),
    /// A string scalar
    String(String),
    /// An ordered sequence of values
    Sequence(Vec<ConfigValue>),
    /// A mapping from string keys to values
    Mapping(Mapping),
}

impl ConfigValue {
    /// Returns a short name for the variant, used in log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) => "mapping",
        }
    }

    /// Returns `true` for [`ConfigValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns `true` for [`ConfigValue::Mapping`].
    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_))
    }

    /// Returns `true` for mappings and sequences, the values a key path can
    /// descend into.
    pub fn is_container(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_) | ConfigValue::Sequence(_))
    }

    /// Returns the string slice if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer scalar.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is a float scalar.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the elements if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the entries mutably if this is a mapping.
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        ConfigValue::Integer(i64::from(i))
    }
}

impl From<u32> for ConfigValue {
    fn from(u: u32) -> Self {
        ConfigValue::Integer(i64::from(u))
    }
}

impl From<u16> for ConfigValue {
    fn from(u: u16) -> Self {
        ConfigValue::Integer(i64::from(u))
    }
}

impl From<u64> for ConfigValue {
    /// Values above `i64::MAX` are stored as floats.
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => ConfigValue::Integer(i),
            Err(_) => ConfigValue::Float(u as f64),
        }
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<f32> for ConfigValue {
    fn from(f: f32) -> Self {
        ConfigValue::Float(f64::from(f))
    }
}

impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(ConfigValue::Null, Into::into)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        ConfigValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<ConfigValue>> From<BTreeMap<String, V>> for ConfigValue {
    fn from(map: BTreeMap<String, V>) -> Self {
        ConfigValue::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<V: Into<ConfigValue>> From<HashMap<String, V>> for ConfigValue {
    fn from(map: HashMap<String, V>) -> Self {
        ConfigValue::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => Ok(()),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Sequence(seq) => {
                f.write_str("[")?;
                for (i, item) in seq.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            ConfigValue::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, item)?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(ConfigValue::from("a"), ConfigValue::String("a".to_string()));
        assert_eq!(ConfigValue::from(true), ConfigValue::Bool(true));
        assert_eq!(ConfigValue::from(42), ConfigValue::Integer(42));
        assert_eq!(ConfigValue::from(42u32), ConfigValue::Integer(42));
        assert_eq!(ConfigValue::from(1.5), ConfigValue::Float(1.5));
    }

    #[test]
    fn test_large_u64_becomes_float() {
        assert_eq!(ConfigValue::from(7u64), ConfigValue::Integer(7));
        assert!(matches!(ConfigValue::from(u64::MAX), ConfigValue::Float(_)));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(ConfigValue::from(None::<i64>), ConfigValue::Null);
        assert_eq!(ConfigValue::from(Some("x")), ConfigValue::from("x"));
    }

    #[test]
    fn test_collection_conversions() {
        let seq = ConfigValue::from(vec![10, 20, 30]);
        assert_eq!(seq.as_sequence().map(<[ConfigValue]>::len), Some(3));
        assert!(seq.is_container());
        assert!(!seq.is_mapping());

        let mut map = HashMap::new();
        map.insert("Host".to_string(), "localhost");
        let value = ConfigValue::from(map);
        assert_eq!(
            value.as_mapping().unwrap().get("Host"),
            Some(&ConfigValue::from("localhost"))
        );
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let value = ConfigValue::from("42");
        assert_eq!(value.as_str(), Some("42"));
        assert_eq!(value.as_i64(), None);
        assert_eq!(value.as_f64(), None);
        assert_eq!(value.as_bool(), None);
        assert!(value.as_mapping().is_none());
        assert!(value.as_sequence().is_none());
    }

    #[test]
    fn test_as_mapping_mut() {
        let mut value = ConfigValue::Mapping(Mapping::new());
        value
            .as_mapping_mut()
            .unwrap()
            .insert("k".to_string(), ConfigValue::from(1));
        assert_eq!(value.as_mapping().unwrap().len(), 1);
        assert!(ConfigValue::Null.as_mapping().is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ConfigValue::Null.type_name(), "null");
        assert_eq!(ConfigValue::from(vec![1]).type_name(), "sequence");
        assert_eq!(ConfigValue::Mapping(Mapping::new()).type_name(), "mapping");
    }

    #[test]
    fn test_default_is_null() {
        assert!(ConfigValue::default().is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::Null.to_string(), "");
        assert_eq!(ConfigValue::from(3.0).to_string(), "3");
        assert_eq!(ConfigValue::from(vec!["a", "b"]).to_string(), "[a, b]");

        let mut map = Mapping::new();
        map.insert("a".to_string(), ConfigValue::from(1));
        map.insert("b".to_string(), ConfigValue::from(true));
        assert_eq!(ConfigValue::Mapping(map).to_string(), "{a: 1, b: true}");
    }
}
