//! Run configuration
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. Every field has a default, so an empty file is valid:
//!
//! ```toml
//! grid_size_km = 2.0
//! data_dir = "data"
//! high_confidence_min_occurrences = 100
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use serde::Deserialize;

use crate::errors::{RangeError, RangeResult};
use crate::metrics::constants::{confidence, files, grid};

/// Configuration for a range-metrics run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeConfig {
    /// AOO grid cell edge length in kilometers
    pub grid_size_km: f64,
    /// Root of the per-species pipeline directories
    pub data_dir: PathBuf,
    /// Occurrence file name inside a species directory
    pub input_file: String,
    /// Range-metrics file name inside a species directory
    pub output_file: String,
    /// Occurrence counts above this get `high_confidence`
    pub high_confidence_min_occurrences: usize,
    pub high_confidence: f64,
    pub low_confidence: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        RangeConfig {
            grid_size_km: grid::DEFAULT_CELL_SIZE_KM,
            data_dir: PathBuf::from(files::DEFAULT_DATA_DIR),
            input_file: files::OCCURRENCE_FILE.to_string(),
            output_file: files::RANGE_METRICS_FILE.to_string(),
            high_confidence_min_occurrences: confidence::HIGH_CONFIDENCE_MIN_OCCURRENCES,
            high_confidence: confidence::HIGH_CONFIDENCE,
            low_confidence: confidence::LOW_CONFIDENCE,
        }
    }
}

impl RangeConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> RangeResult<Self> {
        let config: RangeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> RangeResult<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            RangeError::InvalidConfig(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> RangeResult<()> {
        if !self.grid_size_km.is_finite() || self.grid_size_km <= 0.0 {
            return Err(RangeError::InvalidConfig(format!(
                "grid_size_km must be a positive number, got {}", self.grid_size_km
            )));
        }

        for (name, value) in [("high_confidence", self.high_confidence), ("low_confidence", self.low_confidence)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RangeError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}", name, value
                )));
            }
        }

        if self.input_file.trim().is_empty() || self.output_file.trim().is_empty() {
            return Err(RangeError::InvalidConfig("File names must not be empty".to_string()));
        }

        Ok(())
    }

    /// Override the grid size, re-validating the result
    pub fn with_grid_size_km(mut self, grid_size_km: f64) -> RangeResult<Self> {
        self.grid_size_km = grid_size_km;
        self.validate()?;
        Ok(self)
    }

    /// Override the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Heuristic confidence for a number of occurrences
    pub fn confidence_for(&self, occurrences: usize) -> f64 {
        if occurrences > self.high_confidence_min_occurrences {
            self.high_confidence
        } else {
            self.low_confidence
        }
    }

    /// Directory holding one species' pipeline files
    pub fn species_dir(&self, species_key: &str) -> PathBuf {
        self.data_dir.join(species_key)
    }

    /// Occurrence input file for a species
    pub fn input_path(&self, species_key: &str) -> PathBuf {
        self.species_dir(species_key).join(&self.input_file)
    }

    /// Range-metrics output file for a species
    pub fn output_path(&self, species_key: &str) -> PathBuf {
        self.species_dir(species_key).join(&self.output_file)
    }
}
