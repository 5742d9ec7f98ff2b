// src/config.rs
pub mod loader;

pub use loader::{CONFIG_FILE_NAME, load_config};

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_HISTORY_FILE: &str = "history.json";

/// Settings read from `textproc.toml`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Where the analysis history is kept.
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
        }
    }
}

fn default_history_file() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_FILE)
}
