//! Application configuration management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Main application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub output: OutputConfig,
}

/// Backend endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base path of the backend, e.g. `http://localhost:5000/api`
    pub base_url: String,
    pub user_agent: String,
}

/// Where downloaded payloads are saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "downloads".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file, creating default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            let config = Self::load_from_path(&config_path)?;
            tracing::info!("Loaded configuration from: {:?}", config_path);
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            tracing::info!("Created default configuration at: {:?}", config_path);
            Ok(config)
        }
    }

    /// Load and validate, falling back to defaults on any failure
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(cfg) => {
                if let Err(err) = cfg.validate() {
                    tracing::warn!(
                        "Invalid configuration detected ({}), falling back to defaults",
                        err
                    );
                    Self::default()
                } else {
                    cfg
                }
            }
            Err(err) => {
                tracing::warn!(
                    "Failed to load configuration from disk: {}. Using defaults",
                    err
                );
                Self::default()
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        serde_json::from_str(&content).with_context(|| "Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to_path(&config_path)?;
        tracing::info!("Saved configuration to: {:?}", config_path);
        Ok(())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "videodownloader", "client")
            .with_context(|| "Failed to get project directories")?;

        let config_dir = project_dirs.config_dir();
        Ok(config_dir.join("config.json"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.api.base_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("API base URL must be http or https: {}", self.api.base_url);
        }
        if self.api.user_agent.trim().is_empty() {
            anyhow::bail!("User agent must not be empty");
        }
        if self.output.directory.trim().is_empty() {
            anyhow::bail!("Output directory must not be empty");
        }
        Ok(())
    }
}
