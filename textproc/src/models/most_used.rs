// src/models/most_used.rs
use crate::core::frequency::FrequencyTable;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// What a [`MostUsed`] record counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Character,
    Word,
}

impl ItemKind {
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Word => "word",
        }
    }
}

/// Items sharing the highest occurrence count.
///
/// `elements` is empty when nothing occurred more than once; `count` is then 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostUsed {
    #[serde(skip)]
    pub kind: ItemKind,
    pub elements: Vec<String>,
    pub count: usize,
}

impl MostUsed {
    #[inline]
    #[must_use]
    pub const fn none(kind: ItemKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
            count: 0,
        }
    }

    /// Builds the record from a frequency table, or [`MostUsed::none`] when no
    /// item occurs more than once.
    #[must_use]
    pub fn from_table(kind: ItemKind, table: &FrequencyTable) -> Self {
        if table.no_most_used() {
            return Self::none(kind);
        }
        Self {
            kind,
            elements: table.most_used(),
            count: table.max_count().unwrap_or_default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Deserializes the `most-used` object of a character block.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error when the object is malformed.
    pub fn deserialize_characters<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StoredMostUsed::deserialize(deserializer)
            .map(|stored| stored.with_kind(ItemKind::Character))
    }

    /// Deserializes the `most-used` object of a word block.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error when the object is malformed.
    pub fn deserialize_words<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StoredMostUsed::deserialize(deserializer)
            .map(|stored| stored.with_kind(ItemKind::Word))
    }
}

impl fmt::Display for MostUsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind.label();
        if self.elements.is_empty() {
            return write!(f, "Most used {label}: -");
        }
        let suffix = if self.elements.len() > 1 { "s" } else { "" };
        write!(
            f,
            "Most used {label}{suffix}: {} ({} times)",
            self.elements.join(", "),
            self.count
        )
    }
}

// On disk the kind is implied by the enclosing block.
#[derive(Deserialize)]
struct StoredMostUsed {
    #[serde(default)]
    elements: Vec<String>,
    #[serde(default)]
    count: usize,
}

impl StoredMostUsed {
    fn with_kind(self, kind: ItemKind) -> MostUsed {
        MostUsed {
            kind,
            elements: self.elements,
            count: self.count,
        }
    }
}
