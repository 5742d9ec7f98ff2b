// src/models/history_entry.rs
use crate::models::input_source::{InputSource, SourceKind};
use crate::models::most_used::MostUsed;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub count: usize,
    #[serde(rename = "exclude-spaces")]
    pub exclude_spaces: usize,
    #[serde(
        rename = "most-used",
        deserialize_with = "MostUsed::deserialize_characters"
    )]
    pub most_used: MostUsed,
}

impl fmt::Display for CharacterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Characters: {}", self.count)?;
        writeln!(f, "Characters excluding spaces: {}", self.exclude_spaces)?;
        write!(f, "{}", self.most_used)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    pub count: usize,
    #[serde(rename = "most-used", deserialize_with = "MostUsed::deserialize_words")]
    pub most_used: MostUsed,
}

impl fmt::Display for WordStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Words: {}", self.count)?;
        write!(f, "{}", self.most_used)
    }
}

/// One past analysis: where the input came from and what was derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub content: String,
    pub characters: CharacterStats,
    pub words: WordStats,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(source: &InputSource, characters: CharacterStats, words: WordStats) -> Self {
        Self {
            kind: source.kind(),
            content: source.descriptor(),
            characters,
            words,
        }
    }

    /// The character block followed by the word block.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}\n{}", self.characters, self.words)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SourceKind::Text => writeln!(f, "Text:")?,
            SourceKind::File => writeln!(f, "File:")?,
        }
        writeln!(f, "{}", self.content)?;
        writeln!(f)?;
        writeln!(f, "{}", self.characters)?;
        writeln!(f)?;
        write!(f, "{}", self.words)
    }
}
