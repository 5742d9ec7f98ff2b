// src/core/statistics.rs
use crate::core::frequency::FrequencyTable;
use crate::error::TextResult;
use crate::models::{CharacterStats, HistoryEntry, InputSource, ItemKind, MostUsed, WordStats};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Character and word statistics of a single input snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    characters: CharacterStats,
    words: WordStats,
}

impl Statistics {
    /// Computes every statistic up front from `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<String> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from)
            .collect();
        let char_freq = FrequencyTable::from_items(&chars);

        let words = extract_words(text);
        let word_freq = FrequencyTable::from_items(&words);

        let stats = Self {
            characters: CharacterStats {
                count: text.chars().count(),
                exclude_spaces: chars.len(),
                most_used: MostUsed::from_table(ItemKind::Character, &char_freq),
            },
            words: WordStats {
                count: words.len(),
                most_used: MostUsed::from_table(ItemKind::Word, &word_freq),
            },
        };
        debug!(
            characters = stats.characters.count,
            words = stats.words.count,
            "computed statistics"
        );
        stats
    }

    /// Resolves `source` and computes its statistics.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`InputSource::resolve`].
    pub fn from_source(source: &InputSource) -> TextResult<Self> {
        let text = source.resolve()?;
        Ok(Self::from_text(&text))
    }

    #[inline]
    #[must_use]
    pub const fn characters(&self) -> &CharacterStats {
        &self.characters
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &WordStats {
        &self.words
    }

    /// Packages these statistics as a history entry for `source`.
    #[must_use]
    pub fn into_entry(self, source: &InputSource) -> HistoryEntry {
        HistoryEntry::new(source, self.characters, self.words)
    }
}

/// Maximal runs of letters, digits and underscores, lowercased.
#[must_use]
pub fn extract_words(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_extraction() {
        assert_eq!(
            extract_words("Hello, hello WORLD!"),
            vec!["hello", "hello", "world"]
        );
        assert_eq!(extract_words("snake_case and 42"), vec!["snake_case", "and", "42"]);
        assert!(extract_words(" ... !").is_empty());
    }

    #[test]
    fn test_word_statistics() {
        let stats = Statistics::from_text("Hello, hello WORLD!");
        assert_eq!(stats.words().count, 3);
        assert_eq!(stats.words().most_used.elements, vec!["hello"]);
        assert_eq!(stats.words().most_used.count, 2);
    }

    #[test]
    fn test_character_counts() {
        let stats = Statistics::from_text("ab c\n\td");
        assert_eq!(stats.characters().count, 7);
        assert_eq!(stats.characters().exclude_spaces, 4);
        assert!(stats.characters().most_used.is_empty());
    }

    #[test]
    fn test_characters_case_sensitive() {
        let stats = Statistics::from_text("AaAa b");
        assert_eq!(stats.characters().most_used.elements, vec!["A", "a"]);
        assert_eq!(stats.characters().most_used.count, 2);
    }

    #[test]
    fn test_exclude_spaces_never_exceeds_count() {
        for text in ["", "x", "no spaces", "tabs\tand\nnewlines", "   "] {
            let stats = Statistics::from_text(text);
            let characters = stats.characters();
            assert!(characters.exclude_spaces <= characters.count);
            let has_whitespace = text.chars().any(char::is_whitespace);
            assert_eq!(characters.exclude_spaces == characters.count, !has_whitespace);
        }
    }

    #[test]
    fn test_empty_text() {
        let stats = Statistics::from_text("");
        assert_eq!(stats.characters().count, 0);
        assert_eq!(stats.words().count, 0);
        assert!(stats.characters().most_used.is_empty());
        assert!(stats.words().most_used.is_empty());
    }

    #[test]
    fn test_into_entry_keeps_source() {
        let source = InputSource::Text(String::from("go go"));
        let entry = Statistics::from_text("go go").into_entry(&source);
        assert_eq!(entry.content, "go go");
        assert_eq!(entry.words.most_used.elements, vec!["go"]);
    }
}
