//! Configuration file support for the workout trainer.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/workout/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pacing: PacingConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Timer and inter-set rest configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Rest inserted between sets of a timed exercise
    #[serde(default = "default_timed_set_rest_seconds")]
    pub timed_set_rest_seconds: u32,

    /// Rest inserted between sets of a reps exercise
    #[serde(default = "default_reps_set_rest_seconds")]
    pub reps_set_rest_seconds: u32,

    /// Real length of one countdown second
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            timed_set_rest_seconds: default_timed_set_rest_seconds(),
            reps_set_rest_seconds: default_reps_set_rest_seconds(),
            tick_millis: default_tick_millis(),
        }
    }
}

/// Terminal display configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Rotate encouragement lines during rest countdowns
    #[serde(default = "default_true")]
    pub show_motivation: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            show_motivation: true,
        }
    }
}

// Default value functions
fn default_timed_set_rest_seconds() -> u32 {
    crate::engine::TIMED_SET_REST_SECONDS
}

fn default_reps_set_rest_seconds() -> u32 {
    crate::engine::REPS_SET_REST_SECONDS
}

fn default_tick_millis() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("workout").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        // An hour per tick is certainly a unit mix-up
        if self.pacing.tick_millis > 3_600_000 {
            return Err(Error::Config(format!(
                "tick_millis {} is larger than one hour",
                self.pacing.tick_millis
            )));
        }
        Ok(())
    }
}
