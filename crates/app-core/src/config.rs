//! Study page configuration
//!
//! The page title, UI locale, and the list of study steps are plain
//! configuration data. They default to the SQRR method and can be
//! overridden from a JSON file.

use crate::study::{default_steps, StudyStep};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config parsed but is unusable
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

fn default_title() -> String {
    "Leitura utilizando SQRR".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

/// Study page configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyConfig {
    /// Page header title
    #[serde(default = "default_title")]
    pub title: String,

    /// Preferred UI locale (BCP 47)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Study steps in display order
    #[serde(default = "default_steps")]
    pub steps: Vec<StudyStep>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            locale: default_locale(),
            steps: default_steps(),
        }
    }
}

impl StudyConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), steps = config.steps.len(), "loaded study config");
        Ok(config)
    }

    /// Check that the config can drive the page
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(ConfigError::Invalid("at least one step is required".to_string()));
        }

        for (index, step) in self.steps.iter().enumerate() {
            if step.title.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("step {} has an empty title", index)));
            }
            if step.tasks.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "step '{}' has no tasks",
                    step.title
                )));
            }
        }

        Ok(())
    }
}
