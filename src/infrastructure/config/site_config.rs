//! Site configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_NAME: &str = "assosite";
const APP_QUALIFIER: &str = "org";
const APP_ORGANIZATION: &str = "gipe";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Content store connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Supabase project URL.
    #[serde(default)]
    pub url: String,

    /// Supabase anon key.
    #[serde(default)]
    pub anon_key: String,
}

/// Media host settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Cloudinary cloud name.
    #[serde(default = "default_cloud_name")]
    pub cloud_name: String,

    /// Unsigned upload preset.
    #[serde(default = "default_upload_preset")]
    pub upload_preset: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cloud_name: default_cloud_name(),
            upload_preset: default_upload_preset(),
        }
    }
}

fn default_cloud_name() -> String {
    "daxiqioga".to_string()
}

fn default_upload_preset() -> String {
    "gipe_documents".to_string()
}

/// Site configuration loaded from file, environment, and CLI.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Content store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Media host settings.
    #[serde(default)]
    pub media: MediaConfig,
}

impl SiteConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the file at `path` (or the default location) if it exists,
    /// otherwise starts from defaults.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let effective = path
            .map(Path::to_path_buf)
            .or_else(Self::default_config_path);

        match effective {
            Some(file) if file.exists() => Self::load(&file),
            _ => Ok(Self::default()),
        }
    }

    /// Applies `SUPABASE_URL`, `SUPABASE_ANON_KEY`, `CLOUDINARY_CLOUD_NAME`
    /// and `CLOUDINARY_UPLOAD_PRESET` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SUPABASE_URL") {
            self.store.url = url;
        }
        if let Ok(key) = std::env::var("SUPABASE_ANON_KEY") {
            self.store.anon_key = key;
        }
        if let Ok(cloud) = std::env::var("CLOUDINARY_CLOUD_NAME") {
            self.media.cloud_name = cloud;
        }
        if let Ok(preset) = std::env::var("CLOUDINARY_UPLOAD_PRESET") {
            self.media.upload_preset = preset;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(|| {
            ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
                .map(|dirs| dirs.data_dir().join("assosite.log"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_file() {
        let toml_content = r#"
            log_level = "debug"

            [store]
            url = "https://project.supabase.co"
            anon_key = "anon"

            [media]
            cloud_name = "demo"
        "#;

        let config: SiteConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.store.url, "https://project.supabase.co");
        assert_eq!(config.media.cloud_name, "demo");
        // Unset fields keep their defaults.
        assert_eq!(config.media.upload_preset, "gipe_documents");
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.store.url.is_empty());
        assert_eq!(config.media.cloud_name, "daxiqioga");
    }
}
