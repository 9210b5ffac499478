//! Configuration loading and discovery for `genelab.toml`

use super::schema::LabConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = "genelab.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error
    #[error("Failed to parse genelab.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Find genelab.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for genelab.toml
/// 2. Check XDG_CONFIG_HOME/genelab/genelab.toml (or ~/.config/genelab/genelab.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find genelab.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("genelab").join(CONFIG_FILE_NAME);
    config_path.exists().then_some(config_path)
}

/// Find genelab.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, discovery runs and a missing
/// file yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<LabConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::info!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => {
            log::debug!("no {} found, using built-in defaults", CONFIG_FILE_NAME);
            Ok(LabConfig::default())
        }
    }
}

/// Load configuration from a specific file path.
pub fn load_config_file(path: &Path) -> Result<LabConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

/// Parse and validate configuration text.
pub fn parse_config(contents: &str) -> Result<LabConfig, ConfigError> {
    let config: LabConfig = toml::from_str(contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}
