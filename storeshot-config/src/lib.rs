use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use storeshot_prompt::{DEFAULT_COUNT, DEFAULT_DEVICE_KEY, DEFAULT_STYLE_KEY, PlatformChoice};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_OUTPUT_DIR: &str = ".screenshot-gen-tmp";
pub const CONFIG_DIR_NAME: &str = ".storeshot";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    ConfigDirUnavailable,
    #[error("failed to read or write configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to deserialize configuration: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Defaults applied to every run unless a command-line flag overrides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: String,
    pub default_style: String,
    pub default_device: String,
    pub default_platform: PlatformChoice,
    pub default_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            default_style: DEFAULT_STYLE_KEY.to_string(),
            default_device: DEFAULT_DEVICE_KEY.to_string(),
            default_platform: PlatformChoice::default(),
            default_count: DEFAULT_COUNT,
        }
    }
}

const CONFIG_KEYS: &[&str] = &[
    "output_dir",
    "default_style",
    "default_device",
    "default_platform",
    "default_count",
];

/// Loads the storeshot configuration from disk, creating a default file if absent.
///
/// Files written by older versions are rewritten in place when they miss keys,
/// so the file on disk always lists every setting.
pub fn load_or_init() -> Result<LoadOutcome, ConfigError> {
    let path = config_file_path()?;
    load_or_init_at(path)
}

/// Same as [`load_or_init`] for an explicit file location.
pub fn load_or_init_at(path: PathBuf) -> Result<LoadOutcome, ConfigError> {
    if path.exists() {
        let contents = fs::read_to_string(&path)?;
        let table: toml::Table = toml::from_str(&contents)?;
        let config: Config = toml::from_str(&contents)?;

        let backfilled = CONFIG_KEYS.iter().any(|key| !table.contains_key(*key))
            || table.keys().any(|key| !CONFIG_KEYS.contains(&key.as_str()));
        if backfilled {
            debug!(path = %path.display(), "rewriting configuration with current keys");
            save(&config, &path)?;
        }

        Ok(LoadOutcome {
            config,
            path,
            created: false,
            backfilled,
        })
    } else {
        ensure_parent_exists(&path)?;
        let config = Config::default();
        save(&config, &path)?;
        Ok(LoadOutcome {
            config,
            path,
            created: true,
            backfilled: false,
        })
    }
}

/// Persist the given storeshot configuration to disk at the provided path.
pub fn save(config: &Config, path: &Path) -> Result<(), ConfigError> {
    ensure_parent_exists(path)?;
    let serialized = toml::to_string_pretty(config)?;
    fs::write(path, serialized)?;
    Ok(())
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub config: Config,
    pub path: PathBuf,
    pub created: bool,
    pub backfilled: bool,
}

fn ensure_parent_exists(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    let base_dirs = BaseDirs::new().ok_or(ConfigError::ConfigDirUnavailable)?;
    Ok(base_dirs
        .home_dir()
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests;
