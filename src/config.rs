//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/patterns/patterns.toml`
//! 3. Explicit config file (`--config <file>`)
//! 4. Environment variables: `PATTERNS_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, TreeStyle};
use crate::domain::{Provider, DEFAULT_INDENT};

/// Upper bound for the indentation width.
pub const MAX_INDENT: usize = 16;

/// Unified configuration for patterns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Spaces per nesting level when rendering trees (default: 4)
    pub indent_width: usize,
    /// Width of the `=` rule around section banners (default: 80)
    pub banner_width: usize,
    /// Concurrent singleton accessors in the demo (default: 10)
    pub callers: usize,
    /// Providers exercised by the factory demo
    pub providers: Vec<String>,
    /// Default tree rendering style
    pub tree_style: TreeStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT,
            banner_width: 80,
            callers: 10,
            providers: Provider::ALL.iter().map(|p| p.to_string()).collect(),
            tree_style: TreeStyle::Plain,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub indent_width: Option<usize>,
    pub banner_width: Option<usize>,
    pub callers: Option<usize>,
    pub providers: Option<Vec<String>>,
    pub tree_style: Option<TreeStyle>,
}

/// Get the XDG config directory for patterns.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "patterns").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("patterns.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            indent_width: overlay.indent_width.unwrap_or(self.indent_width),
            banner_width: overlay.banner_width.unwrap_or(self.banner_width),
            callers: overlay.callers.unwrap_or(self.callers),
            providers: overlay
                .providers
                .clone()
                .unwrap_or_else(|| self.providers.clone()),
            tree_style: overlay.tree_style.unwrap_or(self.tree_style),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        Self::load_from(global_config_path().as_deref(), config_file)
    }

    /// Load settings from an explicit global path (skipped if missing) and an
    /// optional explicit file (required if given), then apply env overrides.
    pub fn load_from(global: Option<&Path>, config_file: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!(path = %path.display(), "loading config file");
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.validate()?;
        Ok(current)
    }

    /// Apply PATTERNS_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PATTERNS")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("providers"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<usize>(&config, "indent_width")? {
            settings.indent_width = val;
        }
        if let Some(val) = env_value::<usize>(&config, "banner_width")? {
            settings.banner_width = val;
        }
        if let Some(val) = env_value::<usize>(&config, "callers")? {
            settings.callers = val;
        }
        if let Some(val) = env_value::<Vec<String>>(&config, "providers")? {
            settings.providers = val;
        }
        if let Some(val) = env_value::<TreeStyle>(&config, "tree_style")? {
            settings.tree_style = val;
        }

        Ok(settings)
    }

    /// Reject values the demonstrations cannot work with.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.indent_width > MAX_INDENT {
            return Err(ApplicationError::Config {
                message: format!(
                    "indent_width {} exceeds maximum {}",
                    self.indent_width, MAX_INDENT
                ),
            });
        }
        if self.callers == 0 {
            return Err(ApplicationError::Config {
                message: "callers must be at least 1".to_string(),
            });
        }
        if self.banner_width == 0 {
            return Err(ApplicationError::Config {
                message: "banner_width must be at least 1".to_string(),
            });
        }
        for name in &self.providers {
            name.parse::<Provider>()?;
        }
        Ok(())
    }

    /// Render effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

/// Typed env lookup: unset is `None`, a value of the wrong shape is an error.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> ApplicationResult<Option<T>> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("PATTERNS_{}: {}", key.to_uppercase(), e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
