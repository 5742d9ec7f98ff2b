// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{ArgGroup, CommandFactory as _, Parser};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::load_config;
use crate::core::normalizer::normalize;
use crate::core::statistics::Statistics;
use crate::error::{TextError, TextResult};
use crate::history::History;
use crate::models::InputSource;
use crate::utils::{Output, read_text_lines};

#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").args(["history", "statistics", "format"])))]
pub struct Args {
    /// Show every recorded statistics run
    #[arg(long)]
    pub history: bool,

    /// Count characters and words, and record the result in the history
    #[arg(long)]
    pub statistics: bool,

    /// Normalize spacing, punctuation and capitalization
    #[arg(long)]
    pub format: bool,

    /// Read input from this file instead of prompting for text
    #[arg(long, visible_alias = "in", value_name = "FILE")]
    pub input: Option<String>,

    /// Write the result to this file instead of stdout (overwrites it)
    #[arg(long, visible_alias = "out", value_name = "FILE")]
    pub output: Option<String>,

    /// History file to use instead of the one from textproc.toml
    #[arg(long, value_name = "FILE")]
    pub history_file: Option<PathBuf>,
}

/// The action selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Help,
    History,
    Statistics,
    Format,
}

impl Args {
    /// Parses the process arguments, turning usage mistakes into
    /// [`TextError::InvalidArgument`].
    ///
    /// `--help` and `--version` are printed by clap and end the process.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidArgument`] for unknown flags, missing values,
    /// conflicting modes or stray arguments.
    pub fn parse_checked() -> TextResult<Self> {
        Self::try_parse_checked(env::args_os())
    }

    /// Same as [`Args::parse_checked`] over an explicit argument list.
    ///
    /// # Errors
    ///
    /// See [`Args::parse_checked`].
    pub fn try_parse_checked<I, T>(args: I) -> TextResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|err| {
            if err.use_stderr() {
                TextError::InvalidArgument(err.to_string())
            } else {
                err.exit()
            }
        })
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.history {
            Mode::History
        } else if self.statistics {
            Mode::Statistics
        } else if self.format {
            Mode::Format
        } else {
            Mode::Help
        }
    }

    fn output(&self) -> Output {
        Output::from_arg(self.output.as_deref())
    }

    fn history_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.history_file {
            return Ok(path.clone());
        }
        let cwd = env::current_dir().context("Failed to read the current directory")?;
        Ok(load_config(&cwd)?.history_file)
    }
}

/// Runs the selected mode, prompting on stdin when no input file is given.
///
/// # Errors
///
/// See [`run_with_input`].
pub fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    run_with_input(args, stdin.lock(), io::stdout())
}

/// Runs the selected mode with interactive input read from `reader` and the
/// prompt written to `prompt`.
///
/// Nothing is written (output or history) unless the whole mode succeeds up
/// to that point.
///
/// # Errors
///
/// This function may return an error if:
/// * The input file does not exist ([`TextError::FileNotFound`])
/// * No text was entered interactively ([`TextError::EmptyInput`])
/// * The config or history file is malformed
/// * The history or output file cannot be written
pub fn run_with_input<R: BufRead, W: Write>(args: Args, reader: R, prompt: W) -> Result<()> {
    let mode = args.mode();
    debug!(?mode, "running");

    match mode {
        Mode::Help => {
            println!("{}", Args::command().render_help());
        }
        Mode::History => {
            let history = History::load(args.history_path()?)?;
            args.output().emit(&history.render())?;
        }
        Mode::Statistics => {
            let mut history = History::load(args.history_path()?)?;
            let source = resolve_input(args.input.as_deref(), reader, prompt)?;
            let stats = Statistics::from_source(&source)?;
            let entry = history.add(stats.into_entry(&source))?;
            info!(kind = ?entry.kind, "recorded statistics");
            args.output().emit(&entry.summary())?;
        }
        Mode::Format => {
            let source = resolve_input(args.input.as_deref(), reader, prompt)?;
            let formatted = normalize(&source.resolve()?);
            args.output().emit(&formatted)?;
        }
    }

    Ok(())
}

/// Picks the input source: the named file, or text typed at the prompt when
/// no (or a blank) file name is given.
///
/// # Errors
///
/// * [`TextError::FileNotFound`] if the named file does not exist
/// * [`TextError::EmptyInput`] if no text was entered
pub fn resolve_input<R: BufRead, W: Write>(
    input: Option<&str>,
    reader: R,
    prompt: W,
) -> TextResult<InputSource> {
    match input {
        Some(path) if !path.trim().is_empty() => {
            let path = PathBuf::from(path);
            if !path.is_file() {
                return Err(TextError::FileNotFound(path));
            }
            Ok(InputSource::File(path))
        }
        _ => read_text_lines(reader, prompt).map(InputSource::Text),
    }
}
