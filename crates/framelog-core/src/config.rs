//! Frame table configuration
//!
//! Capacities and destination fixed for the lifetime of a table.
//! Can be stored alongside an experiment definition as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FrameLogError, Result};

/// Construction parameters for a file-backed frame table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTableConfig {
    /// Hard limit on appended frames, also the pre-allocation hint
    pub capacity_frames: usize,

    /// Hard limit on trial start markers
    #[serde(default)]
    pub capacity_trials: usize,

    /// Output file, truncated when the table is created
    pub destination: PathBuf,
}

impl FrameTableConfig {
    /// Create a new configuration
    pub fn new(
        destination: impl Into<PathBuf>,
        capacity_frames: usize,
        capacity_trials: usize,
    ) -> Self {
        Self {
            capacity_frames,
            capacity_trials,
            destination: destination.into(),
        }
    }

    /// Check the configuration before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.capacity_frames == 0 {
            return Err(FrameLogError::InvalidConfig(
                "capacity_frames must be greater than zero".to_string(),
            ));
        }
        if self.destination.as_os_str().is_empty() {
            return Err(FrameLogError::InvalidConfig(
                "destination path is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
