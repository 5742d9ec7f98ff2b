// src/models.rs
pub mod history_entry;
pub mod input_source;
pub mod most_used;

pub use history_entry::{CharacterStats, HistoryEntry, WordStats};
pub use input_source::{InputSource, SourceKind};
pub use most_used::{ItemKind, MostUsed};
