// File: src/config.rs
use crate::export::ExportFormat;
use crate::extract::{DEFAULT_EXTRACT_COLORS, MAX_EXTRACT_COLORS};
use crate::paths::AppPaths;
use crate::temperature::Temperature;
use anyhow::{Context, Result, bail};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_NUM_COLORS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colors per generated palette.
    pub num_colors: usize,
    pub temperature: Temperature,
    pub format: ExportFormat,
    /// Colors per extracted palette.
    pub extract_colors: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_colors: DEFAULT_NUM_COLORS,
            temperature: Temperature::Neutral,
            format: ExportFormat::List,
            extract_colors: DEFAULT_EXTRACT_COLORS,
        }
    }
}

impl Config {
    /// Loads the user config, or defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        match AppPaths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("no config directory available; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = AppPaths::config_file().context("Could not determine config directory")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_colors == 0 {
            bail!("num_colors must be at least 1");
        }
        if self.extract_colors == 0 || self.extract_colors > MAX_EXTRACT_COLORS {
            bail!("extract_colors must be between 1 and {}", MAX_EXTRACT_COLORS);
        }
        Ok(())
    }
}
