//! Server configuration, read from an optional TOML file layered with
//! `STATES_*` environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:         String,
  #[serde(default = "default_port")]
  pub port:         u16,
  /// SQLite file holding the fun fact collection.
  #[serde(default = "default_store_path")]
  pub store_path:   PathBuf,
  /// Reference table to serve instead of the built-in one.
  #[serde(default)]
  pub dataset_path: Option<PathBuf>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 3500 }

fn default_store_path() -> PathBuf { PathBuf::from("states.db") }

impl ServerConfig {
  /// Read `path` (if it exists), then apply `STATES_*` environment overrides.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("STATES"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
