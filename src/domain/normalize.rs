// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key normalization for case-insensitive storage.
//!
//! Every write into the registry lower-cases mapping keys so that lookups can
//! compare segments exactly. Only mapping keys are touched: sequences, and any
//! mappings nested inside sequences, are stored as given.

use crate::domain::config_value::{ConfigValue, Mapping};

/// Returns `value` with every mapping key lower-cased, recursively.
///
/// A mapping is rebuilt into a fresh mapping; any other value is returned
/// unchanged. Normalizing an already-normalized value yields an equal value.
///
/// If two keys differ only by case (`"A"` and `"a"`) they collapse into one
/// entry, and which of the two values survives is unspecified.
///
/// # Examples
///
/// ```
/// use layercfg::domain::config_value::{ConfigValue, Mapping};
/// use layercfg::domain::normalize::normalize;
///
/// let mut inner = Mapping::new();
/// inner.insert("Port".to_string(), ConfigValue::from(5432));
/// let mut outer = Mapping::new();
/// outer.insert("DataBase".to_string(), ConfigValue::Mapping(inner));
///
/// let normalized = normalize(ConfigValue::Mapping(outer));
/// let db = normalized.as_mapping().unwrap()["database"].as_mapping().unwrap();
/// assert_eq!(db["port"], ConfigValue::from(5432));
/// ```
pub fn normalize(value: ConfigValue) -> ConfigValue {
    match value {
        ConfigValue::Mapping(map) => ConfigValue::Mapping(
            map.into_iter()
                .map(|(key, val)| (key.to_lowercase(), normalize(val)))
                .collect(),
        ),
        other => other,
    }
}

/// Lower-cases every key of `map` in place, recursing into nested mappings.
///
/// Keys already in lower case stay where they are; any other key is removed
/// and its value re-inserted under the lower-case form. Intended for freshly
/// decoded documents owned by the caller, where rebuilding the whole tree
/// would double peak memory.
pub fn normalize_in_place(map: &mut Mapping) {
    for value in map.values_mut() {
        if let ConfigValue::Mapping(nested) = value {
            normalize_in_place(nested);
        }
    }

    let mixed_case: Vec<String> = map
        .keys()
        .filter(|key| key.to_lowercase() != **key)
        .cloned()
        .collect();

    for key in mixed_case {
        if let Some(value) = map.remove(&key) {
            map.insert(key.to_lowercase(), value);
        }
    }
}
