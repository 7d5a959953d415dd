use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Display unit for weights. Purely cosmetic: logs are unit-agnostic and
/// no conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    #[default]
    Lbs,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kg => write!(f, "kg"),
            WeightUnit::Lbs => write!(f, "lbs"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Workout log to load when --file is not given.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub weight_unit: WeightUnit,
}

impl Config {
    /// Load the config from its default location. A missing file (or an
    /// undeterminable home directory) reads as the default config.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Config file path: `$LIFTLOG_PATH/config.toml` when the variable is
    /// set, `~/.liftlog/config.toml` otherwise.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(env_path) = std::env::var("LIFTLOG_PATH") {
            return Some(PathBuf::from(env_path).join("config.toml"));
        }
        dirs::home_dir().map(|home| home.join(".liftlog").join("config.toml"))
    }
}
