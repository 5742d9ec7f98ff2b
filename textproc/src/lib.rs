// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod history;
pub mod models;
pub mod utils;

pub use cli::{Args, Mode, resolve_input, run, run_with_input};
pub use config::{Config, load_config};
pub use crate::core::frequency::FrequencyTable;
pub use crate::core::normalizer::normalize;
pub use crate::core::statistics::{Statistics, extract_words};
pub use error::{TextError, TextResult};
pub use history::History;
pub use models::{
    CharacterStats, HistoryEntry, InputSource, ItemKind, MostUsed, SourceKind, WordStats,
};
pub use utils::{Output, read_text_lines};
