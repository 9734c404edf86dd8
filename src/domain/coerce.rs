// SPDX-License-Identifier: MIT OR Apache-2.0

//! Total conversions from configuration values to Rust types.
//!
//! Typed getters never fail: a missing value, or one whose shape does not fit
//! the requested type, converts to that type's zero value.

use crate::domain::config_value::{ConfigValue, Mapping};
use std::collections::HashMap;

/// Conversion from an optional configuration value that always succeeds.
///
/// # Examples
///
/// ```
/// use layercfg::domain::coerce::FromConfigValue;
/// use layercfg::domain::ConfigValue;
///
/// assert_eq!(i64::from_config_value(Some(&ConfigValue::from("42"))), 42);
/// assert_eq!(i64::from_config_value(Some(&ConfigValue::from("nope"))), 0);
/// assert_eq!(String::from_config_value(None), "");
/// ```
pub trait FromConfigValue: Sized {
    /// Converts `value`, falling back to the type's zero value.
    fn from_config_value(value: Option<&ConfigValue>) -> Self;
}

impl FromConfigValue for ConfigValue {
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        value.cloned().unwrap_or_default()
    }
}

impl FromConfigValue for String {
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        match value {
            Some(ConfigValue::String(s)) => s.clone(),
            Some(ConfigValue::Bool(b)) => b.to_string(),
            Some(ConfigValue::Integer(i)) => i.to_string(),
            Some(ConfigValue::Float(f)) => f.to_string(),
            _ => String::new(),
        }
    }
}

impl FromConfigValue for i64 {
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        match value {
            Some(ConfigValue::Integer(i)) => *i,
            Some(ConfigValue::Float(f)) if f.is_finite() => f.trunc() as i64,
            Some(ConfigValue::Bool(b)) => i64::from(*b),
            Some(ConfigValue::String(s)) => s.trim().parse().unwrap_or_default(),
            _ => 0,
        }
    }
}

impl FromConfigValue for i32 {
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        i32::try_from(i64::from_config_value(value)).unwrap_or_default()
    }
}

impl FromConfigValue for u64 {
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        match value {
            Some(ConfigValue::String(s)) => s.trim().parse().unwrap_or_default(),
            Some(ConfigValue::Float(f)) if f.is_finite() && *f >= 0.0 => f.trunc() as u64,
            other => u64::try_from(i64::from_config_value(other)).unwrap_or_default(),
        }
    }
}

impl FromConfigValue for u32 {
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        u32::try_from(u64::from_config_value(value)).unwrap_or_default()
    }
}

impl FromConfigValue for f64 {
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        match value {
            Some(ConfigValue::Float(f)) => *f,
            Some(ConfigValue::Integer(i)) => *i as f64,
            Some(ConfigValue::Bool(b)) => f64::from(u8::from(*b)),
            Some(ConfigValue::String(s)) => s.trim().parse().unwrap_or_default(),
            _ => 0.0,
        }
    }
}

impl FromConfigValue for bool {
    /// Strings are matched case-insensitively against `true`, `yes`, `1`,
    /// `on` and `false`, `no`, `0`, `off`.
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        match value {
            Some(ConfigValue::Bool(b)) => *b,
            Some(ConfigValue::Integer(i)) => *i != 0,
            Some(ConfigValue::Float(f)) => *f != 0.0,
            Some(ConfigValue::String(s)) => matches!(
                s.trim().to_lowercase().as_str(),
                "true" | "yes" | "1" | "on"
            ),
            _ => false,
        }
    }
}

impl FromConfigValue for Vec<String> {
    /// A string is split on whitespace; sequence elements are converted one
    /// by one.
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        match value {
            Some(ConfigValue::Sequence(seq)) => seq
                .iter()
                .map(|item| String::from_config_value(Some(item)))
                .collect(),
            Some(ConfigValue::String(s)) => s.split_whitespace().map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }
}

impl FromConfigValue for Mapping {
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        match value {
            Some(ConfigValue::Mapping(map)) => map.clone(),
            _ => Mapping::new(),
        }
    }
}

impl FromConfigValue for HashMap<String, String> {
    fn from_config_value(value: Option<&ConfigValue>) -> Self {
        match value {
            Some(ConfigValue::Mapping(map)) => map
                .iter()
                .map(|(k, v)| (k.clone(), String::from_config_value(Some(v))))
                .collect(),
            _ => HashMap::new(),
        }
    }
}
