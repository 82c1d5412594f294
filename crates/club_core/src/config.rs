use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{env, fs};

use crate::error::CoreError;
use crate::stats::{StatExtractor, StatField};
use crate::tactics::{DEFAULT_FORMATION_ID, FORMATION_CATALOG};

pub const CONFIG_PATH_ENV: &str = "CLUB_CONFIG_PATH";

/// Runtime settings for the services and CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubConfig {
    /// Formation used for matches whose formation id is blank.
    pub default_formation: String,
    /// JSON snapshot backing the in-memory store.
    pub snapshot_path: Option<PathBuf>,
    pub extractor: ExtractorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Fields the OCR extractor looks for.
    pub fields: Vec<StatField>,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            default_formation: DEFAULT_FORMATION_ID.to_string(),
            snapshot_path: None,
            extractor: ExtractorConfig::default(),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { fields: StatField::all().to_vec() }
    }
}

impl ExtractorConfig {
    pub fn build(&self) -> StatExtractor {
        StatExtractor::new(&self.fields)
    }
}

impl ClubConfig {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !FORMATION_CATALOG.contains(&self.default_formation) {
            return Err(CoreError::Config(format!(
                "default_formation '{}' is not in the catalog",
                self.default_formation
            )));
        }
        if self.extractor.fields.is_empty() {
            return Err(CoreError::Config("extractor.fields must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load from the file named by `CLUB_CONFIG_PATH`, or defaults when unset.
    pub fn from_env() -> Result<Self, CoreError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::load(path)
    }

    pub fn load(path: &str) -> Result<Self, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("Failed to read config file '{path}': {e}"))
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| CoreError::Config(format!("Failed to parse config '{path}': {e}")))?;

        config.validate()?;
        log::debug!("Loaded config from {}", path);
        Ok(config)
    }
}
