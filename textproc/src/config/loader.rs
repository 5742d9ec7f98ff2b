// src/config/loader.rs
use crate::config::Config;
use crate::error::TextError;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "textproc.toml";

/// Loads the configuration from a `textproc.toml` file starting from the given
/// directory and recursively checking parent directories until a file is found.
///
/// A relative `history-file` is resolved against the directory holding the
/// config file. Without any config file the defaults are returned unchanged.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file exists but cannot be read
/// * The config file is not valid TOML or has unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            let content = fs::read_to_string(&config_file).with_context(|| {
                format!("Failed to read config file: {}", config_file.display())
            })?;
            let mut config: Config =
                toml::from_str(&content).map_err(|source| TextError::MalformedConfig {
                    path: config_file.clone(),
                    source,
                })?;
            if config.history_file.is_relative() {
                config.history_file = current_dir.join(&config.history_file);
            }
            debug!(path = %config_file.display(), "loaded config");
            return Ok(config);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(Config::default())
}
