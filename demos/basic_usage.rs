// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the layered registry.
//!
//! This example demonstrates:
//! - Loading a YAML configuration file
//! - Layer precedence between overrides, the file and defaults
//! - Case-insensitive and dotted-key lookups
//! - Typed getters and pulling a section into a struct
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example basic_usage
//! ```

use layercfg::prelude::*;
use serde::Deserialize;
use std::io::Write;

const DOCUMENT: &str = r#"
App:
  Name: demo
  Workers: 4
database.url: postgres://localhost/demo
database:
  pool: 10
servers:
  - host: alpha
  - host: beta
"#;

#[derive(Debug, Deserialize)]
struct App {
    name: String,
    workers: u32,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== layercfg: Basic Usage ===\n");

    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    file.write_all(DOCUMENT.as_bytes())?;

    let mut registry = Registry::new();
    registry.set_default("app.workers", 1);
    registry.set_default("log.level", "info");
    registry.load_configuration(file.path())?;
    registry.set_override("log.level", "debug");

    println!("--- Precedence ---");
    for key in ["app.workers", "log.level"] {
        match registry.find_with_layer(key) {
            Some((layer, value)) => println!("{} = {} (from {})", key, value, layer),
            None => println!("{} is not set", key),
        }
    }

    println!("\n--- Lookups ---");
    println!("APP.NAME        = {}", registry.get_string("APP.NAME"));
    println!("database.url    = {}", registry.get_string("database.url"));
    println!("database.pool   = {}", registry.get_int("database.pool"));
    println!("servers.1.host  = {}", registry.get_string("servers.1.host"));
    println!("missing (or 42) = {}", registry.get_or("missing", 42_i64));

    println!("\n--- Sections ---");
    let app: App = registry.unmarshal_key("app")?;
    println!("{:?}", app);

    Ok(())
}
