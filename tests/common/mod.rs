// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers shared by the integration tests.

use layercfg::Registry;
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary file with the given extension and content.
///
/// The file is deleted when the returned handle is dropped.
#[allow(dead_code)]
pub fn create_temp_file(extension: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("layercfg-test-")
        .suffix(&format!(".{}", extension))
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Creates a temporary `.yaml` file with the given content.
#[allow(dead_code)]
pub fn create_temp_yaml(content: &str) -> NamedTempFile {
    create_temp_file("yaml", content)
}

/// Creates a registry with `content` loaded as its configuration file.
///
/// The file handle is returned so it outlives the assertions that inspect
/// the loaded path.
#[allow(dead_code)]
pub fn registry_with_yaml(content: &str) -> (Registry, NamedTempFile) {
    let file = create_temp_yaml(content);
    let mut registry = Registry::new();
    registry.load_configuration(file.path()).unwrap();
    (registry, file)
}
