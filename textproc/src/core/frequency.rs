// src/core/frequency.rs
use std::collections::HashMap;

/// Occurrence counts for a sequence of items, ordered by descending count.
///
/// Items with equal counts keep the order in which they were first seen, so
/// `"abba"` yields `[("a", 2), ("b", 2)]` and never `[("b", 2), ("a", 2)]`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Counts items by exact string equality.
    ///
    /// Case folding is the caller's job: words are lowercased before they get
    /// here, characters are counted as they appear.
    #[must_use]
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for item in items {
            let item = item.as_ref();
            if let Some(&position) = index.get(item) {
                if let Some(entry) = entries.get_mut(position) {
                    entry.1 = entry.1.saturating_add(1);
                }
            } else {
                index.insert(item.to_owned(), entries.len());
                entries.push((item.to_owned(), 1));
            }
        }

        // sort_by is stable, which keeps first-seen order among ties
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of times `item` occurred, zero if it never did.
    #[must_use]
    pub fn count_of(&self, item: &str) -> usize {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == item)
            .map_or(0, |(_, count)| *count)
    }

    /// The highest count in the table, `None` when the table is empty.
    #[inline]
    #[must_use]
    pub fn max_count(&self) -> Option<usize> {
        self.entries.first().map(|(_, count)| *count)
    }

    /// All items sharing the maximal count, in descending-count order.
    #[must_use]
    pub fn most_used(&self) -> Vec<String> {
        let Some(max) = self.max_count() else {
            return Vec::new();
        };
        self.entries
            .iter()
            .take_while(|(_, count)| *count == max)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// True when no item occurs more than once.
    ///
    /// A single occurrence is never "most used", even when the table holds a
    /// single distinct item. Vacuously true for an empty table.
    #[must_use]
    pub fn no_most_used(&self) -> bool {
        self.entries.iter().all(|(_, count)| *count <= 1)
    }
}
