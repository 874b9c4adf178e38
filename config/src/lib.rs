//! Configuration loading for the PIPO simulator.
//!
//! Configuration lives in `~/.pipo/config.toml`. Every section and key is
//! optional; a missing file is the same as an empty one.
//!
//! ```toml
//! [app]
//! tui = "full"
//! ascii_only = false
//! high_contrast = false
//!
//! [register]
//! over_length = "truncate"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use pipo_types::LengthPolicy;
use pipo_types::ui::UiOptions;

#[derive(Debug, Default, Deserialize)]
pub struct PipoConfig {
    pub app: Option<AppConfig>,
    pub register: Option<RegisterConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// "full" (alternate screen) or "inline".
    pub tui: Option<String>,
    /// Use ASCII-only glyphs for borders and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// Register behavior.
///
/// ```toml
/// [register]
/// over_length = "reject"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct RegisterConfig {
    /// What a load does with more than four inputs. Default: truncate.
    #[serde(default)]
    pub over_length: LengthPolicy,
}

impl PipoConfig {
    /// Load the user config, if one exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                Ok(config)
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn length_policy(&self) -> LengthPolicy {
        self.register
            .as_ref()
            .map(|register| register.over_length)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn tui(&self) -> Option<&str> {
        self.app.as_ref().and_then(|app| app.tui.as_deref())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".pipo").join("config.toml"))
}
