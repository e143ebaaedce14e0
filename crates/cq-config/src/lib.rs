//! # cq-config
//!
//! Configuration loading for cargo-query using figment.
//!
//! Sources (in priority order, highest wins):
//! 1. An explicit override (the CLI `--workspace` flag)
//! 2. The `PATH_WS` environment variable
//! 3. Built-in defaults (`path_ws = "."`, the current directory)
//!
//! There is no configuration file. `PATH_WS` is read unprefixed because the
//! build system that invokes the tool already exports it under that name.
//!
//! # Usage
//!
//! ```no_run
//! use cq_config::QueryConfig;
//!
//! let config = QueryConfig::load().expect("config");
//! println!("workspace root: {}", config.path_ws.display());
//! ```

mod error;

pub use error::ConfigError;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use figment::{Figment, providers::Serialized};
use serde::{Deserialize, Serialize};

/// Environment variable naming the workspace root.
pub const PATH_WS_ENV: &str = "PATH_WS";

fn default_path_ws() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Workspace root that manifests are resolved against.
    #[serde(default = "default_path_ws")]
    pub path_ws: PathBuf,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            path_ws: default_path_ws(),
        }
    }
}

impl QueryConfig {
    /// Load configuration from defaults and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_override(None)
    }

    /// Load configuration, letting `workspace` (when given) win over
    /// `PATH_WS`.
    ///
    /// Paths that are not valid Unicode cannot pass through figment, so the
    /// override and a non-Unicode `PATH_WS` are applied after extraction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if extraction fails.
    pub fn load_with_override(workspace: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config: Self = Self::figment().extract()?;
        if let Some(path) = workspace {
            config.path_ws = path.to_path_buf();
        } else if let Some(Err(raw)) = env_path_ws() {
            config.path_ws = PathBuf::from(raw);
        }
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// `PATH_WS` is merged as a verbatim string: figment's `Env` provider
    /// would parse `007` or `true` into numbers and booleans.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let figment = Figment::from(Serialized::defaults(Self::default()));
        match env_path_ws() {
            Some(Ok(path)) => figment.merge(Serialized::default("path_ws", path)),
            _ => figment,
        }
    }
}

fn env_path_ws() -> Option<Result<String, OsString>> {
    std::env::var_os(PATH_WS_ENV).map(OsString::into_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_current_dir() {
        let config = QueryConfig::default();
        assert_eq!(config.path_ws, PathBuf::from("."));
    }

    #[test]
    fn figment_builds_without_environment() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            let config: QueryConfig = QueryConfig::figment().extract()?;
            assert_eq!(config.path_ws, PathBuf::from("."));
            Ok(())
        });
    }
}
