use std::fs;
use std::path::{Path, PathBuf};

use crate::model::DeskConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse desk.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

const CONFIG_FILE: &str = "desk.toml";

/// Find a desk.toml by walking up from the given directory.
/// Returns None when no config file exists anywhere up the tree.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the config discovered from `start`, or defaults when absent.
/// A file that exists but fails to parse is an error, not a fallback.
pub fn load_config(start: &Path) -> Result<DeskConfig, ConfigError> {
    let Some(path) = discover_config(start) else {
        return Ok(DeskConfig::default());
    };
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: DeskConfig = toml::from_str(&text)?;
    Ok(config)
}
