//! # todo-config
//!
//! Layered configuration loading for todolist using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TODOLIST_*` prefix, `__` as separator)
//! 2. Project-level `todolist.toml`
//! 3. User-level `~/.config/todolist/config.toml`
//! 4. Built-in defaults
//!
//! `TODOLIST_DATABASE__URL` maps to `database.url`, `TODOLIST_SERVER__BIND`
//! to `server.bind`, and so on.
//!
//! ```no_run
//! use todo_config::TodoConfig;
//!
//! let config = TodoConfig::load_with_dotenv().expect("config");
//! println!("store: {}", config.database.url);
//! ```

mod database;
mod error;
mod logging;
mod server;

pub use database::{DEFAULT_DATABASE_URL, DatabaseConfig};
pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "TODOLIST_";

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "todolist.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TodoConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal outside development.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("todolist").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_development_store() {
        let config = TodoConfig::default();
        assert!(config.database.is_default());
        assert_eq!(config.server.bind, "0.0.0.0:8000");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            let dir = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", dir);

            let config: TodoConfig = TodoConfig::figment().extract()?;
            assert_eq!(config.server.index_file, "index.html");
            assert!(config.database.is_default());
            assert_eq!(config.logging.filter, "info");
            Ok(())
        });
    }
}
