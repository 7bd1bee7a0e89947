//! Configuration schema (dbfschema.toml)

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::render::RenderOptions;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dialect used when none is requested explicitly
    #[serde(default)]
    pub dialect: Dialect,

    /// Render only column definitions by default
    #[serde(default)]
    pub fragment_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            fragment_only: false,
        }
    }
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml(&contents)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Render options implied by this config
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            fragment_only: self.fragment_only,
        }
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
