// src/utils.rs
use crate::error::{TextError, TextResult};
use anyhow::{Context as _, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

pub const INPUT_PROMPT: &str = "Enter text (enter a blank line to end):";

/// Prompts on `prompt` and reads lines from `reader` until a blank line or EOF.
///
/// The lines are joined with `\n` and the result is trimmed.
///
/// # Errors
///
/// * [`TextError::EmptyInput`] if not a single non-blank line was entered
/// * [`TextError::Io`] if reading or prompting fails
pub fn read_text_lines<R: BufRead, W: Write>(reader: R, mut prompt: W) -> TextResult<String> {
    writeln!(prompt, "{INPUT_PROMPT}")?;
    prompt.flush()?;

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    if lines.is_empty() {
        return Err(TextError::EmptyInput);
    }
    debug!(lines = lines.len(), "read interactive input");
    Ok(lines.join("\n").trim().to_owned())
}

/// Where results go: stdout, or a file that is overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// A blank path means stdout.
    #[must_use]
    pub fn from_arg(path: Option<&str>) -> Self {
        match path {
            Some(path) if !path.trim().is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Stdout,
        }
    }

    /// Writes `message` to stdout with a newline, or to the file as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be written.
    pub fn emit(&self, message: &str) -> Result<()> {
        match self {
            Self::Stdout => println!("{message}"),
            Self::File(path) => {
                fs::write(path, message)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?;
                debug!(path = %path.display(), bytes = message.len(), "wrote output");
            }
        }
        Ok(())
    }
}
