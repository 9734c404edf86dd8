// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key path resolution over configuration trees.
//!
//! Two strategies are provided:
//!
//! - [`search_map`] treats every path segment as one exact mapping key. It is
//!   used for values set programmatically, whose keys never embed the
//!   delimiter.
//! - [`search_with_path_prefixes`] prefers the longest run of segments that
//!   matches a single literal key, so a document containing both `"foo.bar"`
//!   and `foo: {bar: ...}` resolves `foo.bar` to the former. Sequences are
//!   indexed by numeric segments.
//!
//! Both assume keys and path segments are already lower-cased. A `Null` leaf
//! counts as not found.

use crate::domain::config_value::{ConfigValue, Mapping};

/// Resolves `path` by exact descent through nested mappings.
///
/// An empty path resolves to `source` itself. Reaching a scalar or a
/// sequence before the path is exhausted is a miss.
///
/// # Examples
///
/// ```
/// use layercfg::domain::config_value::{ConfigValue, Mapping};
/// use layercfg::domain::resolve::search_map;
///
/// let mut db = Mapping::new();
/// db.insert("host".to_string(), ConfigValue::from("localhost"));
/// let mut root = Mapping::new();
/// root.insert("database".to_string(), ConfigValue::Mapping(db));
/// let root = ConfigValue::Mapping(root);
///
/// assert_eq!(
///     search_map(&root, &["database", "host"]),
///     Some(&ConfigValue::from("localhost"))
/// );
/// assert_eq!(search_map(&root, &["database", "host", "name"]), None);
/// ```
pub fn search_map<'a>(source: &'a ConfigValue, path: &[&str]) -> Option<&'a ConfigValue> {
    let mut current = source;
    for segment in path {
        current = current.as_mapping()?.get(*segment)?;
    }
    present(current)
}

/// Resolves `path` preferring the longest prefix that matches a literal key.
///
/// For each prefix length from `path.len()` down to 1, the prefix segments
/// are joined with `delimiter` into a candidate key. Within a mapping the
/// candidate is looked up exactly; within a sequence it must parse as an
/// in-bounds index. A match that consumes the whole path is returned at once.
/// A match that leaves segments over is descended into when it is a mapping
/// or sequence; if that descent misses, or the match is a scalar, the next
/// shorter prefix is tried.
///
/// # Examples
///
/// ```
/// use layercfg::domain::config_value::{ConfigValue, Mapping};
/// use layercfg::domain::resolve::search_with_path_prefixes;
///
/// let mut nested = Mapping::new();
/// nested.insert("b".to_string(), ConfigValue::from(2));
/// let mut root = Mapping::new();
/// root.insert("a.b".to_string(), ConfigValue::from(1));
/// root.insert("a".to_string(), ConfigValue::Mapping(nested));
/// let root = ConfigValue::Mapping(root);
///
/// assert_eq!(
///     search_with_path_prefixes(&root, &["a", "b"], "."),
///     Some(&ConfigValue::from(1))
/// );
/// ```
pub fn search_with_path_prefixes<'a>(
    source: &'a ConfigValue,
    path: &[&str],
    delimiter: &str,
) -> Option<&'a ConfigValue> {
    if path.is_empty() {
        return present(source);
    }

    (1..=path.len()).rev().find_map(|consumed| {
        let candidate = path[..consumed].join(delimiter);
        let next = match source {
            ConfigValue::Mapping(map) => lookup_key(map, &candidate),
            ConfigValue::Sequence(seq) => lookup_index(seq, &candidate),
            _ => None,
        }?;

        if consumed == path.len() {
            return present(next);
        }

        if next.is_container() {
            search_with_path_prefixes(next, &path[consumed..], delimiter)
        } else {
            None
        }
    })
}

fn lookup_key<'a>(map: &'a Mapping, candidate: &str) -> Option<&'a ConfigValue> {
    map.get(candidate)
}

fn lookup_index<'a>(seq: &'a [ConfigValue], candidate: &str) -> Option<&'a ConfigValue> {
    candidate.parse::<usize>().ok().and_then(|index| seq.get(index))
}

fn present(value: &ConfigValue) -> Option<&ConfigValue> {
    (!value.is_null()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: Vec<(&str, ConfigValue)>) -> ConfigValue {
        ConfigValue::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_search_map_empty_path_returns_source() {
        let root = map(vec![("a", ConfigValue::from(1))]);
        assert_eq!(search_map(&root, &[]), Some(&root));
    }

    #[test]
    fn test_search_map_single_segment() {
        let root = map(vec![("a", ConfigValue::from(1))]);
        assert_eq!(search_map(&root, &["a"]), Some(&ConfigValue::from(1)));
        assert_eq!(search_map(&root, &["b"]), None);
    }

    #[test]
    fn test_search_map_nested() {
        let root = map(vec![("a", map(vec![("b", map(vec![("c", ConfigValue::from(3))]))]))]);
        assert_eq!(search_map(&root, &["a", "b", "c"]), Some(&ConfigValue::from(3)));
        assert!(search_map(&root, &["a", "b"]).unwrap().is_mapping());
    }

    #[test]
    fn test_search_map_early_leaf_is_a_miss() {
        let root = map(vec![("a", ConfigValue::from("scalar"))]);
        assert_eq!(search_map(&root, &["a", "b"]), None);
    }

    #[test]
    fn test_search_map_does_not_index_sequences() {
        let root = map(vec![("list", ConfigValue::from(vec![10, 20]))]);
        assert_eq!(search_map(&root, &["list", "0"]), None);
    }

    #[test]
    fn test_search_map_ignores_dotted_literal_keys() {
        let root = map(vec![("a.b", ConfigValue::from(1))]);
        assert_eq!(search_map(&root, &["a", "b"]), None);
    }

    #[test]
    fn test_search_map_null_is_a_miss() {
        let root = map(vec![("a", ConfigValue::Null)]);
        assert_eq!(search_map(&root, &["a"]), None);
    }

    #[test]
    fn test_prefix_search_prefers_longest_literal_key() {
        let root = map(vec![
            ("a.b", ConfigValue::from(1)),
            ("a", map(vec![("b", ConfigValue::from(2))])),
        ]);
        assert_eq!(
            search_with_path_prefixes(&root, &["a", "b"], "."),
            Some(&ConfigValue::from(1))
        );
    }

    #[test]
    fn test_prefix_search_falls_back_to_nested() {
        let root = map(vec![("a", map(vec![("b", ConfigValue::from(2))]))]);
        assert_eq!(
            search_with_path_prefixes(&root, &["a", "b"], "."),
            Some(&ConfigValue::from(2))
        );
    }

    #[test]
    fn test_prefix_search_literal_key_in_the_middle() {
        let root = map(vec![(
            "server",
            map(vec![("tls.cert", map(vec![("path", ConfigValue::from("/etc/cert"))]))]),
        )]);
        assert_eq!(
            search_with_path_prefixes(&root, &["server", "tls", "cert", "path"], "."),
            Some(&ConfigValue::from("/etc/cert"))
        );
    }

    #[test]
    fn test_prefix_search_sequence_index() {
        let root = map(vec![("list", ConfigValue::from(vec![10, 20, 30]))]);
        assert_eq!(
            search_with_path_prefixes(&root, &["list", "1"], "."),
            Some(&ConfigValue::from(20))
        );
        assert_eq!(search_with_path_prefixes(&root, &["list", "3"], "."), None);
        assert_eq!(search_with_path_prefixes(&root, &["list", "-1"], "."), None);
        assert_eq!(search_with_path_prefixes(&root, &["list", "x"], "."), None);
    }

    #[test]
    fn test_prefix_search_through_sequence_of_mappings() {
        let root = map(vec![(
            "servers",
            ConfigValue::Sequence(vec![
                map(vec![("host", ConfigValue::from("one"))]),
                map(vec![("host", ConfigValue::from("two"))]),
            ]),
        )]);
        assert_eq!(
            search_with_path_prefixes(&root, &["servers", "1", "host"], "."),
            Some(&ConfigValue::from("two"))
        );
    }

    #[test]
    fn test_prefix_search_nested_sequences() {
        let root = map(vec![(
            "matrix",
            ConfigValue::Sequence(vec![ConfigValue::from(vec![1, 2]), ConfigValue::from(vec![3, 4])]),
        )]);
        assert_eq!(
            search_with_path_prefixes(&root, &["matrix", "1", "0"], "."),
            Some(&ConfigValue::from(3))
        );
    }

    #[test]
    fn test_prefix_search_scalar_with_remaining_path_tries_shorter_prefix() {
        let root = map(vec![
            ("a", ConfigValue::from("scalar")),
            ("a.b", map(vec![("c", ConfigValue::from(5))])),
        ]);
        assert_eq!(
            search_with_path_prefixes(&root, &["a", "b", "c"], "."),
            Some(&ConfigValue::from(5))
        );
        assert_eq!(search_with_path_prefixes(&root, &["a", "x"], "."), None);
    }

    #[test]
    fn test_prefix_search_failed_descent_backtracks() {
        let root = map(vec![
            ("a.b", map(vec![("other", ConfigValue::from(0))])),
            ("a", map(vec![("b", map(vec![("c", ConfigValue::from(9))]))])),
        ]);
        assert_eq!(
            search_with_path_prefixes(&root, &["a", "b", "c"], "."),
            Some(&ConfigValue::from(9))
        );
    }

    #[test]
    fn test_prefix_search_null_tries_shorter_prefix() {
        let root = map(vec![
            ("a.b", ConfigValue::Null),
            ("a", map(vec![("b", ConfigValue::from(2))])),
        ]);
        assert_eq!(
            search_with_path_prefixes(&root, &["a", "b"], "."),
            Some(&ConfigValue::from(2))
        );
    }

    #[test]
    fn test_prefix_search_custom_delimiter() {
        let root = map(vec![("a::b", ConfigValue::from(1))]);
        assert_eq!(
            search_with_path_prefixes(&root, &["a", "b"], "::"),
            Some(&ConfigValue::from(1))
        );
        assert_eq!(search_with_path_prefixes(&root, &["a", "b"], "."), None);
    }

    #[test]
    fn test_prefix_search_empty_path() {
        let root = map(vec![]);
        assert_eq!(search_with_path_prefixes(&root, &[], "."), Some(&root));
    }

    #[test]
    fn test_prefix_search_scalar_source() {
        let root = ConfigValue::from(1);
        assert_eq!(search_with_path_prefixes(&root, &["a"], "."), None);
    }
}
