//! Item store connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Development fallback: a libSQL file in the working directory.
pub const DEFAULT_DATABASE_URL: &str = "todolist.db";

const REMOTE_SCHEMES: [&str; 3] = ["libsql://", "https://", "http://"];

fn default_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string. A `libsql://`, `https://` or `http://` URL selects a
    /// remote database; anything else is a local path (or `:memory:`).
    #[serde(default = "default_url")]
    pub url: String,

    /// Auth token for remote databases. Ignored for local paths.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Local database at `path`, mostly for tests and the `--database` flag.
    #[must_use]
    pub fn local(path: impl Into<String>) -> Self {
        Self {
            url: path.into(),
            auth_token: String::new(),
        }
    }

    /// Whether the URL points at a remote libSQL server.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        REMOTE_SCHEMES
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }

    /// Whether the built-in development fallback is still in effect.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.url == DEFAULT_DATABASE_URL
    }

    /// Check the settings are usable before opening a connection.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty URL, or a remote URL
    /// without an auth token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.is_remote() && self.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.auth_token".into(),
                reason: format!("required for remote database '{}'", self.url),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_is_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "todolist.db");
        assert!(!config.is_remote());
        assert!(config.is_default());
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case("libsql://todos-acme.turso.io", true)]
    #[case("https://todos.example.com", true)]
    #[case("http://127.0.0.1:8080", true)]
    #[case(":memory:", false)]
    #[case("/var/lib/todolist/items.db", false)]
    fn remote_detection(#[case] url: &str, #[case] remote: bool) {
        assert_eq!(DatabaseConfig::local(url).is_remote(), remote);
    }

    #[test]
    fn empty_url_is_rejected() {
        let err = DatabaseConfig::local("  ").validate().unwrap_err();
        assert!(err.to_string().contains("database.url"));
    }

    #[test]
    fn remote_requires_token() {
        let mut config = DatabaseConfig::local("libsql://todos-acme.turso.io");
        assert!(config.validate().is_err());

        config.auth_token = "token".into();
        assert!(config.validate().is_ok());
    }
}
