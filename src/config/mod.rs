//! Configuration loading, parsing, and validation for relwatch.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and saving in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use relwatch::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "feed:\n  owner: acme\n  repo: widget\n").unwrap();
//!
//! let config = load_config(&path).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.feed.owner, "acme");
//! ```
//!
//! # Configuration File Location
//!
//! 1. `--config <path>` or `RELWATCH_CONFIG`
//! 2. User config (`~/.relwatch/config.yml`)
//!
//! A missing file means defaults.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{default_config_path, load_config, save_config};
pub use schema::{AppConfig, DownloadConfig, FeedConfig, RelwatchConfig, UpdatesConfig};
pub use validator::{validate, validate_config, ValidationError};
