// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration registry.
//!
//! This module provides `Registry`, which holds three independent value trees
//! and resolves keys against them in a fixed precedence order:
//!
//! 1. overrides, set programmatically
//! 2. the configuration file, loaded from disk
//! 3. defaults, set programmatically

use crate::adapters::document_file::{default_location, read_document};
use crate::domain::normalize::{normalize, normalize_in_place};
use crate::domain::resolve::{search_map, search_with_path_prefixes};
use crate::domain::{ConfigError, ConfigKey, ConfigReader, ConfigValue, Mapping, Result};
use crate::ports::DocumentDecoder;
use std::fmt;
use std::path::{Path, PathBuf};

/// Key delimiter used unless configured otherwise.
pub const DEFAULT_DELIMITER: &str = ".";

/// Longest key path, in segments, searched in the config layer by default.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// One of the three value layers of a [`Registry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Programmatic overrides, highest precedence
    Override,
    /// The loaded configuration file
    Config,
    /// Programmatic defaults, lowest precedence
    Default,
}

impl Layer {
    /// All layers, highest precedence first.
    pub const PRECEDENCE: [Layer; 3] = [Layer::Override, Layer::Config, Layer::Default];

    /// Returns a short name for the layer, used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Override => "override",
            Layer::Config => "config",
            Layer::Default => "default",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of the most recently loaded configuration document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedFile {
    path: PathBuf,
    format: String,
}

impl LoadedFile {
    /// The path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file extension that selected the decoder, without the dot.
    pub fn format(&self) -> &str {
        &self.format
    }
}

/// Case-insensitive, layered configuration registry.
///
/// Every write lower-cases the key and all keys of mapping values, so reads
/// can match path segments exactly. Reads split the key on the delimiter and
/// probe overrides, then the configuration file, then defaults, returning the
/// first non-null match.
///
/// `Registry` has no internal synchronization. Share it behind a lock, or use
/// the process-wide instance in [`crate::global`].
///
/// # Examples
///
/// ```rust
/// use layercfg::prelude::*;
///
/// let mut registry = Registry::new();
/// registry.set_default("server.port", 8080);
/// registry.set_override("Server.Host", "example.com");
///
/// assert_eq!(registry.get_int("server.port"), 8080);
/// assert_eq!(registry.get_string("SERVER.HOST"), "example.com");
/// assert!(registry.get("server.missing").is_none());
/// ```
pub struct Registry {
    /// Separator used to split keys into paths
    delimiter: String,
    /// Highest precedence layer
    overrides: ConfigValue,
    /// Decoded configuration document
    config: ConfigValue,
    /// Lowest precedence layer
    defaults: ConfigValue,
    /// Identity of the loaded document, if any
    loaded_file: Option<LoadedFile>,
    /// Registered decoders; later entries win for a shared extension
    decoders: Vec<Box<dyn DocumentDecoder>>,
    /// Whether unsupported extensions are an error
    strict_formats: bool,
    /// Whether extensions match decoders regardless of case
    case_insensitive_extensions: bool,
    /// Longest key path searched in the config layer
    max_depth: usize,
}

impl Registry {
    /// Creates an empty registry with the default delimiter and decoders.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::service::Registry;
    ///
    /// let registry = Registry::new();
    /// assert_eq!(registry.delimiter(), ".");
    /// ```
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            overrides: empty_layer(),
            config: empty_layer(),
            defaults: empty_layer(),
            loaded_file: None,
            decoders: default_decoders(),
            strict_formats: false,
            case_insensitive_extensions: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a new registry builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::service::Registry;
    ///
    /// # fn main() -> layercfg::domain::Result<()> {
    /// let registry = Registry::builder()
    ///     .delimiter("::")
    ///     .strict_formats(true)
    ///     .build()?;
    /// assert_eq!(registry.delimiter(), "::");
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Returns the key delimiter.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Replaces the key delimiter.
    ///
    /// Values already stored are not re-keyed: a path split with the new
    /// delimiter is matched against keys written with the old one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDelimiter` for an empty delimiter and
    /// leaves the current one in place.
    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) -> Result<()> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(ConfigError::InvalidDelimiter);
        }
        self.delimiter = delimiter;
        Ok(())
    }

    /// Sets a value in the override layer, the highest precedence.
    ///
    /// The key is lower-cased and split on the delimiter; mapping values have
    /// their keys lower-cased recursively. Missing intermediate mappings are
    /// created.
    ///
    /// # Replacing scalars
    ///
    /// An intermediate segment that currently holds a scalar or a sequence is
    /// **replaced** by an empty mapping, discarding the old value:
    ///
    /// ```rust
    /// use layercfg::prelude::*;
    ///
    /// let mut registry = Registry::new();
    /// registry.set_override("a", 1);
    /// registry.set_override("a.b", 2);
    ///
    /// assert_eq!(registry.get_int("a.b"), 2);
    /// assert!(registry.get("a").unwrap().is_mapping());
    /// ```
    pub fn set_override(&mut self, key: impl AsRef<str>, value: impl Into<ConfigValue>) {
        self.assign(Layer::Override, key.as_ref(), value.into());
    }

    /// Sets a value in the default layer, the lowest precedence.
    ///
    /// Behaves like [`Registry::set_override`], including the replacement of
    /// non-mapping intermediate values.
    pub fn set_default(&mut self, key: impl AsRef<str>, value: impl Into<ConfigValue>) {
        self.assign(Layer::Default, key.as_ref(), value.into());
    }

    fn assign(&mut self, layer: Layer, key: &str, value: ConfigValue) {
        let key = ConfigKey::new(key);
        let path = key.path(&self.delimiter);
        let value = normalize(value);

        let root = match layer {
            Layer::Override => &mut self.overrides,
            Layer::Config => &mut self.config,
            Layer::Default => &mut self.defaults,
        };
        assign_path(root, &key, &path, value);
    }

    /// Loads a configuration document, replacing the config layer.
    ///
    /// The decoder is chosen by the file extension: the text after the last
    /// `.` of the file name, so a file named `.yaml` has extension `yaml`.
    /// Extensions are compared case-sensitively unless the registry was built
    /// with [`RegistryBuilder::case_insensitive_extensions`]. On any error the
    /// registry is left unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The document was loaded, or its extension has no decoder
    ///   and the registry is not strict (the file is skipped untouched)
    /// * `Err(ConfigError::UnknownFormat)` - The path has no extension
    /// * `Err(ConfigError::UnsupportedFormat)` - No decoder for the extension,
    ///   strict registries only
    /// * `Err(ConfigError::IoError)` / `Err(ConfigError::FileTooLarge)` - The
    ///   file could not be read
    /// * `Err(ConfigError::DecodeError)` - The document is malformed
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use layercfg::prelude::*;
    ///
    /// # fn main() -> layercfg::domain::Result<()> {
    /// let mut registry = Registry::new();
    /// registry.load_configuration("/etc/myapp/config.yaml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_configuration(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let extension = file_extension(path).ok_or_else(|| ConfigError::UnknownFormat {
            path: path.to_path_buf(),
        })?;

        let Some(decoder) = self.decoder_for(&extension) else {
            if self.strict_formats {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    extension,
                });
            }
            tracing::debug!(
                "Skipping configuration file '{}': no decoder for extension '{}'",
                path.display(),
                extension
            );
            return Ok(());
        };

        let bytes = read_document(path)?;
        let mut document = decoder.decode(&bytes)?;
        normalize_in_place(&mut document);

        tracing::debug!(
            "Loaded configuration file '{}' ({} top-level keys)",
            path.display(),
            document.len()
        );

        self.config = ConfigValue::Mapping(document);
        self.loaded_file = Some(LoadedFile {
            path: path.to_path_buf(),
            format: extension,
        });
        Ok(())
    }

    /// Loads `config.yaml` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn load_default_location(&mut self, app_name: &str, qualifier: &str) -> Result<()> {
        let path = default_location(app_name, qualifier)?;
        self.load_configuration(path)
    }

    fn decoder_for(&self, extension: &str) -> Option<&dyn DocumentDecoder> {
        self.decoders
            .iter()
            .rev()
            .find(|decoder| {
                decoder
                    .supported_extensions()
                    .iter()
                    .any(|ext| {
                        if self.case_insensitive_extensions {
                            ext.eq_ignore_ascii_case(extension)
                        } else {
                            *ext == extension
                        }
                    })
            })
            .map(|decoder| decoder.as_ref())
    }

    /// Resolves `key` and borrows the winning value.
    ///
    /// Overrides and defaults are searched segment by segment. The config
    /// layer is searched longest-prefix first, so a literal `"a.b"` key in the
    /// document wins over a nested `a: {b: ...}`, and numeric segments index
    /// into sequences. Null values count as unset.
    ///
    /// Keys with more segments than the registry's `max_depth` skip the config
    /// layer; overrides and defaults are searched at any depth.
    pub fn find(&self, key: &str) -> Option<&ConfigValue> {
        self.find_with_layer(key).map(|(_, value)| value)
    }

    /// Resolves `key` and reports which layer supplied the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::service::{Layer, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.set_default("port", 80);
    /// registry.set_override("port", 8080);
    ///
    /// let (layer, value) = registry.find_with_layer("port").unwrap();
    /// assert_eq!(layer, Layer::Override);
    /// assert_eq!(value.as_i64(), Some(8080));
    /// ```
    pub fn find_with_layer(&self, key: &str) -> Option<(Layer, &ConfigValue)> {
        let key = ConfigKey::new(key);
        let path = key.path(&self.delimiter);

        let too_deep = path.len() > self.max_depth;
        if too_deep {
            tracing::debug!(
                "Key '{}' has {} segments, more than the limit of {}; skipping config layer",
                key,
                path.len(),
                self.max_depth
            );
        }

        Layer::PRECEDENCE.into_iter().find_map(|layer| {
            let root = self.layer(layer);
            let value = match layer {
                Layer::Config if too_deep => None,
                Layer::Config => search_with_path_prefixes(root, &path, &self.delimiter),
                Layer::Override | Layer::Default => search_map(root, &path),
            }?;
            tracing::trace!("Key '{}' resolved from {} layer", key, layer);
            Some((layer, value))
        })
    }

    /// Returns the whole tree of one layer.
    pub fn layer(&self, layer: Layer) -> &ConfigValue {
        match layer {
            Layer::Override => &self.overrides,
            Layer::Config => &self.config,
            Layer::Default => &self.defaults,
        }
    }

    /// Returns the identity of the last successfully loaded document.
    pub fn loaded_file(&self) -> Option<&LoadedFile> {
        self.loaded_file.as_ref()
    }

    /// Deserializes the value at `key` into `T`.
    ///
    /// Useful for pulling a whole section into a struct. Field names must be
    /// lower case, since all stored keys are.
    ///
    /// # Errors
    ///
    /// * `ConfigError::ConfigKeyNotFound` - No layer holds `key`
    /// * `ConfigError::TypeConversionError` - The value does not fit `T`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::prelude::*;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Database {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// # fn main() -> layercfg::domain::Result<()> {
    /// let mut registry = Registry::new();
    /// registry.set_default("database.host", "localhost");
    /// registry.set_default("database.port", 5432);
    ///
    /// let db: Database = registry.unmarshal_key("database")?;
    /// assert_eq!(db.host, "localhost");
    /// assert_eq!(db.port, 5432);
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "yaml")]
    pub fn unmarshal_key<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self
            .find(key)
            .ok_or_else(|| ConfigError::ConfigKeyNotFound {
                key: key.to_string(),
            })?;

        let conversion_error = |e: serde_yaml::Error| ConfigError::TypeConversionError {
            key: key.to_string(),
            target_type: std::any::type_name::<T>().to_string(),
            source: Box::new(e),
        };

        let tree = serde_yaml::to_value(value).map_err(conversion_error)?;
        serde_yaml::from_value(tree).map_err(conversion_error)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigReader for Registry {
    fn get(&self, key: &str) -> Option<ConfigValue> {
        self.find(key).cloned()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("delimiter", &self.delimiter)
            .field("overrides", &self.overrides)
            .field("config", &self.config)
            .field("defaults", &self.defaults)
            .field("loaded_file", &self.loaded_file)
            .field("decoders", &self.decoders.len())
            .field("strict_formats", &self.strict_formats)
            .field(
                "case_insensitive_extensions",
                &self.case_insensitive_extensions,
            )
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

fn empty_layer() -> ConfigValue {
    ConfigValue::Mapping(Mapping::new())
}

fn default_decoders() -> Vec<Box<dyn DocumentDecoder>> {
    #[allow(unused_mut)]
    let mut decoders: Vec<Box<dyn DocumentDecoder>> = Vec::new();
    #[cfg(feature = "yaml")]
    decoders.push(Box::new(crate::adapters::YamlDecoder::new()));
    decoders
}

/// Returns the text after the last `.` of the file name, if there is one.
///
/// Unlike `Path::extension`, a leading dot counts: `.yaml` yields `yaml`.
/// A trailing dot yields an empty extension.
fn file_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.rsplit_once('.').map(|(_, ext)| ext.to_string())
}

/// Stores `value` at `path` under `root`, creating intermediate mappings.
fn assign_path(root: &mut ConfigValue, key: &ConfigKey, path: &[&str], value: ConfigValue) {
    let Some((leaf, parents)) = path.split_last() else {
        return;
    };

    let mut current = make_mapping(root, key);
    for segment in parents {
        let slot = current
            .entry((*segment).to_string())
            .or_insert_with(empty_layer);
        current = make_mapping(slot, key);
    }
    current.insert((*leaf).to_string(), value);
}

/// Turns `slot` into a mapping, discarding any non-mapping value it held.
fn make_mapping<'a>(slot: &'a mut ConfigValue, key: &ConfigKey) -> &'a mut Mapping {
    match slot {
        ConfigValue::Mapping(map) => map,
        other => {
            if !other.is_null() {
                tracing::warn!(
                    "Replacing {} value with a mapping while setting key '{}'",
                    other.type_name(),
                    key
                );
            }
            *other = empty_layer();
            make_mapping(other, key)
        }
    }
}

/// Builder for constructing a `Registry`.
///
/// # Examples
///
/// ```rust
/// use layercfg::service::RegistryBuilder;
///
/// # fn main() -> layercfg::domain::Result<()> {
/// let registry = RegistryBuilder::new()
///     .delimiter("/")
///     .max_depth(8)
///     .build()?;
/// assert_eq!(registry.delimiter(), "/");
/// # Ok(())
/// # }
/// ```
pub struct RegistryBuilder {
    delimiter: String,
    strict_formats: bool,
    case_insensitive_extensions: bool,
    max_depth: usize,
    decoders: Vec<Box<dyn DocumentDecoder>>,
}

impl RegistryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            strict_formats: false,
            case_insensitive_extensions: false,
            max_depth: DEFAULT_MAX_DEPTH,
            decoders: Vec::new(),
        }
    }

    /// Sets the key delimiter.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Makes loading a file with an unsupported extension an error instead
    /// of a silent no-op.
    pub fn strict_formats(mut self, strict: bool) -> Self {
        self.strict_formats = strict;
        self
    }

    /// Matches file extensions to decoders regardless of case, so that
    /// `CONF.YAML` loads with the YAML decoder.
    pub fn case_insensitive_extensions(mut self, enabled: bool) -> Self {
        self.case_insensitive_extensions = enabled;
        self
    }

    /// Sets the longest key path, in segments, searched in the config layer.
    ///
    /// Longer keys still resolve from overrides and defaults.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Registers an additional document decoder.
    ///
    /// Decoders added here take precedence over the built-in ones for any
    /// extension they share.
    pub fn with_decoder(mut self, decoder: Box<dyn DocumentDecoder>) -> Self {
        self.decoders.push(decoder);
        self
    }

    /// Builds the registry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDelimiter` if the delimiter is empty.
    pub fn build(self) -> Result<Registry> {
        let mut registry = Registry::new();
        registry.set_delimiter(self.delimiter)?;
        registry.strict_formats = self.strict_formats;
        registry.case_insensitive_extensions = self.case_insensitive_extensions;
        registry.max_depth = self.max_depth;
        registry.decoders.extend(self.decoders);
        Ok(registry)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
