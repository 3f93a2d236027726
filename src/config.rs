use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BACKEND_BASE_URL: &str = "http://127.0.0.1:5000";
pub const BACKEND_BASE_URL_ENV: &str = "PLAYLIST_TOP5_BACKEND_BASE_URL";
const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid backend base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AppConfig {
    pub backend_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
}

impl AppConfig {
    /// Defaults, then `config.json` from the platform config directory,
    /// then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE));
        Self::load_from(path.as_deref(), std::env::var(BACKEND_BASE_URL_ENV).ok())
    }

    pub fn load_from(
        path: Option<&Path>,
        backend_base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => Self::read(path)?,
            _ => Self::default(),
        };

        if let Some(url) = backend_base_url.filter(|url| !url.trim().is_empty()) {
            config.backend_base_url = url.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.backend_base_url.clone(),
            reason,
        };

        let url = reqwest::Url::parse(&self.backend_base_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(invalid(format!("unsupported scheme `{scheme}`"))),
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }

        Ok(())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_base_url.trim_end_matches('/'), path)
    }
}
