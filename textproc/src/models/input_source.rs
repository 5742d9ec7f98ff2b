// src/models/input_source.rs
use crate::error::{TextError, TextResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Where a piece of input came from, as recorded in the history file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Text,
    File,
}

/// Input given either literally or as a path to a file holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
}

impl InputSource {
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        match self {
            Self::Text(_) => SourceKind::Text,
            Self::File(_) => SourceKind::File,
        }
    }

    /// The literal text, or the path exactly as the user gave it.
    #[must_use]
    pub fn descriptor(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Produces the text this source stands for.
    ///
    /// # Errors
    ///
    /// * [`TextError::FileNotFound`] if a file source does not exist
    /// * [`TextError::Io`] if the file exists but cannot be read as UTF-8
    pub fn resolve(&self) -> TextResult<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::File(path) => {
                let text = fs::read_to_string(path).map_err(|err| match err.kind() {
                    io::ErrorKind::NotFound => TextError::FileNotFound(path.clone()),
                    _ => TextError::Io(err),
                })?;
                debug!(path = %path.display(), bytes = text.len(), "read input file");
                Ok(text)
            }
        }
    }
}
