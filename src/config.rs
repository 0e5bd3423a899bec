use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_PREFIX: &str = "sheets-manager";

/// Environment variable that overrides the credentials path from the config file.
pub const CREDENTIALS_ENV: &str = "GOOGLE_CREDENTIALS_PATH";

/// Service account key looked up in the working directory when nothing else is set.
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials.json";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub google: GoogleConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GoogleConfig {
    /// Path to a service account JSON key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_path: Option<PathBuf>,
}

impl Config {
    /// Load the config file if there is one, otherwise fall back to defaults.
    pub fn load() -> Result<Self> {
        match Self::xdg_dirs().find_config_file("config.toml") {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        toml::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Resolve the credentials path: environment, then config file, then the default.
    pub fn credentials_path(&self) -> PathBuf {
        resolve_credentials_path(
            std::env::var_os(CREDENTIALS_ENV),
            self.google.credentials_path.as_deref(),
        )
    }

    fn xdg_dirs() -> xdg::BaseDirectories {
        xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        let xdg_dirs = Self::xdg_dirs();
        xdg_dirs
            .place_config_file("config.toml")
            .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))
    }
}

fn resolve_credentials_path(env: Option<OsString>, configured: Option<&Path>) -> PathBuf {
    if let Some(path) = env.filter(|value| !value.is_empty()) {
        return PathBuf::from(path);
    }

    configured
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_FILE))
}

/// Fail with a configuration error unless the credentials file exists.
pub fn ensure_credentials_exist(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    Err(AppError::Config(format!(
        "Credentials file not found at {:?}. Set {} environment variable or place {} in current directory",
        path, CREDENTIALS_ENV, DEFAULT_CREDENTIALS_FILE
    )))
}
