// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document decoder.
//!
//! This module provides a decoder that turns YAML documents into value trees,
//! keeping nesting intact so that dotted literal keys and nested mappings can
//! both be resolved.

use crate::domain::{ConfigError, ConfigValue, Mapping, Result};
use crate::ports::DocumentDecoder;
use serde_yaml::Value;

/// YAML decoder implementation.
///
/// Merge keys (`<<: *anchor`) are resolved before conversion. Mapping keys
/// that are numbers or booleans are converted to their string form. Tagged
/// values are decoded as their untagged content.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::YamlDecoder;
/// use layercfg::domain::ConfigValue;
/// use layercfg::ports::DocumentDecoder;
///
/// let decoder = YamlDecoder::new();
/// let doc = decoder.decode(b"database:\n  host: localhost\n  port: 5432").unwrap();
/// let db = doc["database"].as_mapping().unwrap();
/// assert_eq!(db["port"], ConfigValue::from(5432));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlDecoder;

impl YamlDecoder {
    /// Creates a new YAML decoder.
    pub fn new() -> Self {
        YamlDecoder
    }
}

impl DocumentDecoder for YamlDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Mapping> {
        let mut value: Value = serde_yaml::from_slice(bytes)
            .map_err(|e| ConfigError::decode(format!("Failed to parse YAML: {}", e), e))?;
        value.apply_merge().map_err(|e| {
            ConfigError::decode(format!("Failed to apply YAML merge keys: {}", e), e)
        })?;

        match ConfigValue::try_from(value)? {
            ConfigValue::Mapping(map) => Ok(map),
            ConfigValue::Null => Ok(Mapping::new()),
            other => Err(ConfigError::DecodeError {
                message: format!(
                    "YAML document must be a mapping at the top level, found {}",
                    other.type_name()
                ),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

impl TryFrom<Value> for ConfigValue {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self> {
        Ok(match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                None => n
                    .as_u64()
                    .map(ConfigValue::from)
                    .unwrap_or_else(|| ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            Value::String(s) => ConfigValue::String(s),
            Value::Sequence(seq) => ConfigValue::Sequence(
                seq.into_iter()
                    .map(ConfigValue::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Mapping(map) => {
                let mut out = Mapping::new();
                for (key, val) in map {
                    out.insert(mapping_key(key)?, ConfigValue::try_from(val)?);
                }
                ConfigValue::Mapping(out)
            }
            Value::Tagged(tagged) => ConfigValue::try_from(tagged.value)?,
        })
    }
}

fn mapping_key(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Tagged(tagged) => mapping_key(tagged.value),
        other => Err(ConfigError::DecodeError {
            message: format!("Unsupported YAML mapping key: {:?}", other),
            source: None,
        }),
    }
}
