//! Runtime configuration: where the city files live and how many raw rows to page.

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::data::City;

/// Path of an optional JSON config file.
pub const CONFIG_ENV: &str = "BIKESHARE_CONFIG";
/// Overrides `data_dir` from the config file.
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

/// File name of each city's trip data, relative to `data_dir`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CityFiles {
    pub chicago: String,
    pub new_york_city: String,
    pub washington: String,
}

impl Default for CityFiles {
    fn default() -> Self {
        Self {
            chicago: "chicago.csv".to_string(),
            new_york_city: "new_york_city.csv".to_string(),
            washington: "washington.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub page_size: usize,
    pub files: CityFiles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: 5,
            files: CityFiles::default(),
        }
    }
}

impl Config {
    /// Defaults, then `BIKESHARE_CONFIG` if set, then `BIKESHARE_DATA_DIR` if set.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }

        debug!("using config {config:?}");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        anyhow::ensure!(config.page_size > 0, "page_size must be at least 1");
        Ok(config)
    }

    /// Full path of a city's trip file.
    pub fn city_path(&self, city: City) -> PathBuf {
        let file = match city {
            City::Chicago => &self.files.chicago,
            City::NewYorkCity => &self.files.new_york_city,
            City::Washington => &self.files.washington,
        };
        self.data_dir.join(file)
    }
}
