use crate::error::{JournoError, Result};
use crate::model::{
    YearRange, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = ".journo.json";

/// Configuration for journo, read from `.journo.json` in the target directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournoConfig {
    /// Earliest year a template may be generated for (inclusive)
    #[serde(default = "default_min_year")]
    pub min_year: i32,

    /// Latest year a template may be generated for (inclusive)
    #[serde(default = "default_max_year")]
    pub max_year: i32,
}

fn default_min_year() -> i32 {
    DEFAULT_MIN_YEAR
}

fn default_max_year() -> i32 {
    DEFAULT_MAX_YEAR
}

impl Default for JournoConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl JournoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JournoError::Io)?;
        let config: JournoConfig =
            serde_json::from_str(&content).map_err(JournoError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        self.validate()?;
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JournoError::Serialization)?;
        fs::write(config_path, content).map_err(JournoError::Io)?;
        Ok(())
    }

    /// Apply per-invocation overrides; `None` keeps the loaded value.
    pub fn with_overrides(mut self, min_year: Option<i32>, max_year: Option<i32>) -> Result<Self> {
        if let Some(min) = min_year {
            self.min_year = min;
        }
        if let Some(max) = max_year {
            self.max_year = max;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn year_range(&self) -> YearRange {
        YearRange::new(self.min_year, self.max_year)
    }

    fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(JournoError::Config(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }
        let supported = MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR;
        if !supported.contains(&self.min_year) || !supported.contains(&self.max_year) {
            return Err(JournoError::Config(format!(
                "year range {}..={} must stay within {}..={}",
                self.min_year, self.max_year, MIN_SUPPORTED_YEAR, MAX_SUPPORTED_YEAR
            )));
        }
        Ok(())
    }
}
