use crate::codec::{CompactJson, JsonCodec, PrettyJson};
use crate::models::FlightRecord;
use crate::store::{seed_records, FlightStore};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "config.toml";
pub const DATASET_ENV: &str = "FLIGHT_AGENTS_DATASET";
pub const PRETTY_ENV: &str = "FLIGHT_AGENTS_PRETTY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// External dataset file; takes precedence over `flights`.
    pub path: Option<PathBuf>,
    #[serde(default = "seed_records")]
    pub flights: Vec<FlightRecord>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: None,
            flights: seed_records(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// `config.toml` from the current directory, then from the data
    /// directory, else defaults. Environment overrides apply in every case.
    pub fn load() -> Result<Self> {
        let mut candidates = vec![std::env::current_dir()?.join(CONFIG_FILE)];
        if let Ok(data_dir) = crate::utils::paths::get_data_dir() {
            candidates.push(data_dir.join(CONFIG_FILE));
        }

        let mut config = match candidates.iter().find(|path| path.exists()) {
            Some(path) => Self::read(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        // Relative dataset paths are relative to the config file.
        if let (Some(dataset), Some(parent)) = (config.dataset.path.as_ref(), path.parent()) {
            if dataset.is_relative() {
                config.dataset.path = Some(parent.join(dataset));
            }
        }

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(DATASET_ENV) {
            if !path.trim().is_empty() {
                self.dataset.path = Some(PathBuf::from(path));
            }
        }

        if let Ok(value) = std::env::var(PRETTY_ENV) {
            match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.output.pretty = true,
                "0" | "false" | "no" => self.output.pretty = false,
                other => warn!("Ignoring {}={}: expected true or false", PRETTY_ENV, other),
            }
        }
    }

    pub fn build_store(&self) -> Result<FlightStore> {
        match &self.dataset.path {
            Some(path) => FlightStore::load(path),
            None => FlightStore::from_records(self.dataset.flights.clone()),
        }
    }

    pub fn codec(&self) -> Arc<dyn JsonCodec> {
        if self.output.pretty {
            Arc::new(PrettyJson)
        } else {
            Arc::new(CompactJson)
        }
    }
}
