//! HTTP server configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("./resources")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory served under `/resources/`.
    #[serde(default = "default_resources_dir")]
    pub resources_dir: PathBuf,

    /// File inside `resources_dir` served at `/`.
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            resources_dir: default_resources_dir(),
            index_file: default_index_file(),
        }
    }
}

impl ServerConfig {
    /// Full path of the page served at `/`.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.resources_dir.join(&self.index_file)
    }
}
