// Author: Dustin Pilgrim
// License: MIT

pub mod parser;

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use rune_cfg::RuneConfig;

use crate::core::config::ControllerConfig;

pub const CONFIG_DIR: &str = "skip-prompt";
pub const CONFIG_FILE: &str = "skip-prompt.rune";

/// Where the effective settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub source: ConfigSource,
    pub cfg: ControllerConfig,
}

/// `$XDG_CONFIG_HOME/skip-prompt/skip-prompt.rune` (or the platform equivalent).
pub fn resolve_default_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(CONFIG_DIR);
    path.push(CONFIG_FILE);
    path
}

/// Loads `explicit` if given (it must exist), otherwise the default path if
/// present, otherwise built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(eyre::eyre!("config file not found: {}", path.display()));
        }
        return load_from_path(path);
    }

    let default_path = resolve_default_config_path();
    if default_path.exists() {
        return load_from_path(&default_path);
    }

    tracing::debug!(
        "config: {} not found, using built-in defaults",
        default_path.display()
    );

    Ok(LoadedConfig {
        source: ConfigSource::BuiltIn,
        cfg: ControllerConfig::default(),
    })
}

pub fn load_from_path(path: &Path) -> Result<LoadedConfig> {
    let path = path.to_path_buf();

    let rune = RuneConfig::from_file(&path)
        .map_err(|e| eyre::eyre!("failed to load config from {}: {}", path.display(), e))?;

    let cfg = parser::parse_controller_config(&rune)
        .wrap_err_with(|| format!("invalid config in {}", path.display()))?;

    tracing::info!("config: loaded {}", path.display());

    Ok(LoadedConfig {
        source: ConfigSource::File(path),
        cfg,
    })
}
