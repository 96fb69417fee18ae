//! Filter configuration
//!
//! A `FilterConfig` can be built in code, overridden from a parameter map, or
//! loaded from the `[smoothing]` table of a TOML file.

use crate::error::{FilterError, Result};
use crate::filters::FilterMode;
use std::collections::HashMap;
use std::path::Path;

pub const FILE_PATH: &str = "config/smoothing.toml";

pub const DEFAULT_HISTORY_LENGTH: usize = 10;
pub const DEFAULT_HIGHEST_WEIGHT: f64 = 0.7;

/// History lengths above this add noticeable latency
pub const LATENCY_WARNING_THRESHOLD: usize = 10;

/// Upper bound on history slots
pub const MAX_HISTORY_LENGTH: usize = 4096;

/// Upper bound on recorder capacity
pub const MAX_RECORD_SAMPLES: usize = 1 << 20;

/// Parameters for one `SmoothingFilter`
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Number of slots in each history buffer
    pub history_length: usize,
    /// Weight of the first slot, in (0, 1)
    pub highest_weight: f64,
    pub mode: FilterMode,
    /// Reject NaN/infinite samples instead of filtering them
    pub reject_non_finite: bool,
    /// Capacity of the raw/filtered sample recorder, 0 disables it
    pub record_samples: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            history_length: DEFAULT_HISTORY_LENGTH,
            highest_weight: DEFAULT_HIGHEST_WEIGHT,
            mode: FilterMode::WeightedMovingAverage,
            reject_non_finite: false,
            record_samples: 0,
        }
    }
}

impl FilterConfig {
    /// Create a configuration with the given history length and mode, other
    /// fields at their defaults
    pub fn new(history_length: usize, highest_weight: f64, mode: FilterMode) -> Self {
        FilterConfig {
            history_length,
            highest_weight,
            mode,
            ..Default::default()
        }
    }

    /// Check the parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.history_length < 1 {
            return Err(FilterError::Configuration(
                "history length must be at least 1".to_string(),
            ));
        }

        if self.history_length > MAX_HISTORY_LENGTH {
            return Err(FilterError::Configuration(format!(
                "history length must be at most {}, got {}",
                MAX_HISTORY_LENGTH, self.history_length
            )));
        }

        if !(self.highest_weight > 0.0 && self.highest_weight < 1.0) {
            return Err(FilterError::Configuration(format!(
                "highest weight must be in (0, 1), got {}",
                self.highest_weight
            )));
        }

        if self.record_samples > MAX_RECORD_SAMPLES {
            return Err(FilterError::Configuration(format!(
                "record_samples must be at most {}, got {}",
                MAX_RECORD_SAMPLES, self.record_samples
            )));
        }

        Ok(())
    }

    /// Override fields from a parameter map
    ///
    /// Either every override is applied or, on error, none is.
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        let mut next = *self;

        if let Some(&history_length) = params.get("history_length") {
            if !(1.0..=MAX_HISTORY_LENGTH as f64).contains(&history_length)
                || history_length.fract() != 0.0
            {
                return Err(FilterError::Configuration(format!(
                    "history length must be an integer in [1, {}], got {}",
                    MAX_HISTORY_LENGTH, history_length
                )));
            }
            next.history_length = history_length as usize;
        }

        if let Some(&highest_weight) = params.get("highest_weight") {
            next.highest_weight = highest_weight;
        }

        if let Some(&record_samples) = params.get("record_samples") {
            if !(0.0..=MAX_RECORD_SAMPLES as f64).contains(&record_samples)
                || record_samples.fract() != 0.0
            {
                return Err(FilterError::Configuration(format!(
                    "record_samples must be an integer in [0, {}], got {}",
                    MAX_RECORD_SAMPLES, record_samples
                )));
            }
            next.record_samples = record_samples as usize;
        }

        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Root of the configuration file
#[derive(serde::Deserialize, Debug, Clone, Copy, Default)]
#[serde(default)]
pub struct Root {
    pub smoothing: FilterConfig,
}

/// Parse a configuration from TOML text
pub fn parse(contents: &str) -> Result<FilterConfig> {
    let root: Root = toml::from_str(contents)?;
    root.smoothing.validate()?;
    Ok(root.smoothing)
}

/// Read and validate a configuration file
pub fn read(configuration_path: impl AsRef<Path>) -> Result<FilterConfig> {
    let contents = std::fs::read_to_string(configuration_path.as_ref())?;
    parse(&contents)
}
