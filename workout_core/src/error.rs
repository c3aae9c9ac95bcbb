//! Error types for the workout_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for workout_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// YAML plan file could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Plan loaded but violates the program structure rules
    #[error("Plan validation error: {0}")]
    PlanValidation(String),

    /// The presenter could not read input or write output
    #[error("Presentation error: {0}")]
    Presentation(String),
}

impl Error {
    /// True for errors raised while loading a plan, before any run starts:
    /// a missing or unreadable file, malformed YAML, or a failed validation.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::Yaml(_) | Error::PlanValidation(_)
        )
    }
}
