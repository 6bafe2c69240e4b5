use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub notes_file: PathBuf,
    pub settings_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_file: PathBuf::from("notes.json"),
            settings_file: PathBuf::from("settings.json"),
        }
    }
}

/// Load the config at `path`, writing the defaults there first if it is missing.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        let config = Config::default();
        let toml = toml::to_string(&config).context("Failed to serialize default config")?;
        fs::write(path, toml)
            .with_context(|| format!("Failed to write default config to {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote default config");
        return Ok(config);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
