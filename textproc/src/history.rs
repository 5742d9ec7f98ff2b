// src/history.rs
use crate::error::TextError;
use crate::models::HistoryEntry;
use anyhow::{Context as _, Result};
use serde::Serialize as _;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

const HISTORY_HEADER: &str = "== History ==";

/// The ordered log of past analyses, backed by a JSON file.
///
/// The whole file is read on [`History::load`] and rewritten on every
/// [`History::add`]. Only one process is expected to use a file at a time.
#[derive(Debug)]
pub struct History {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Reads the history stored at `path`, or starts empty if there is none.
    ///
    /// An empty (or whitespace-only) file counts as an empty history.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The history file exists but cannot be read
    /// * The history file is not a valid history document ([`TextError::MalformedHistory`])
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "no history file, starting empty");
            return Ok(Self {
                path,
                entries: Vec::new(),
            });
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read history file: {}", path.display()))?;
        let entries = if content.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&content).map_err(|source| TextError::MalformedHistory {
                path: path.clone(),
                source,
            })?
        };

        let history = Self { path, entries };
        debug!(
            path = %history.path.display(),
            entries = history.entries.len(),
            "loaded history"
        );
        Ok(history)
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Appends `entry` and rewrites the history file.
    ///
    /// If the file cannot be written the entry is dropped again, so memory and
    /// disk never disagree.
    ///
    /// # Errors
    ///
    /// Returns an error if the history file cannot be written.
    pub fn add(&mut self, entry: HistoryEntry) -> Result<&HistoryEntry> {
        self.entries.push(entry);
        if let Err(err) = self.save() {
            self.entries.pop();
            return Err(err);
        }
        info!(
            path = %self.path().display(),
            entries = self.entries.len(),
            "added history entry"
        );
        self.entries
            .last()
            .context("History is empty right after an add")
    }

    /// All entries under a `== History ==` header, separated by blank lines.
    #[must_use]
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::from(HISTORY_HEADER);
        }
        let entries: Vec<String> = self.entries.iter().map(ToString::to_string).collect();
        format!("{HISTORY_HEADER}\n{}", entries.join("\n\n"))
    }

    // Writes next to the target and renames over it; a failed write leaves the
    // previous file untouched.
    fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create history directory: {}", dir.display()))?;

        let mut file = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
        {
            let mut writer = BufWriter::new(file.as_file_mut());
            let mut serializer =
                Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
            self.entries.serialize(&mut serializer)?;
            writer.flush()?;
        }
        file.persist(&self.path)
            .with_context(|| format!("Failed to write history file: {}", self.path.display()))?;
        Ok(())
    }
}
