use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chrome::Corner;
use crate::services::language::{Direction, Language};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:3000/translate";
const URL_ENV: &str = "WINTRANSLATE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid service URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Unsupported target language {0:?}, expected \"sv\" or \"en\"")]
    UnknownLanguage(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub service_url: String,
    /// Language code the window translates into at startup.
    pub target_language: String,
    pub dock_corner: Corner,
    pub always_on_top: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            target_language: Language::Swedish.code().to_string(),
            dock_corner: Corner::default(),
            always_on_top: false,
        }
    }
}

/// Returns the path to the optional settings file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wintranslate").join("config.json"))
}

impl Settings {
    /// Loads defaults, then the settings file if present, then the
    /// `WINTRANSLATE_URL` override.
    ///
    /// Any invalid layer fails the whole load; the caller then starts with
    /// defaults and the file's other values are not used.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_layers(config_path().as_deref(), std::env::var(URL_ENV).ok())
    }

    fn load_layers(path: Option<&Path>, url_override: Option<String>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };

        if let Some(url) = url_override {
            settings.service_url = url;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parses `service_url`, which must be an absolute http(s) URL.
    pub fn endpoint(&self) -> Result<reqwest::Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.service_url.clone(),
            reason,
        };

        let url = reqwest::Url::parse(&self.service_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme {other}"))),
        }
    }

    /// Startup direction derived from `target_language`.
    pub fn direction(&self) -> Direction {
        Language::from_code(&self.target_language)
            .map(Direction::towards)
            .unwrap_or_default()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if Language::from_code(&self.target_language).is_none() {
            return Err(ConfigError::UnknownLanguage(self.target_language.clone()));
        }
        self.endpoint().map(|_| ())
    }
}
