// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort the current invocation.
///
/// Every variant is terminal: the caller reports it and performs no further
/// output or history writes.
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Invalid argument!\n{0}")]
    InvalidArgument(String),

    #[error("File not found! {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("No text provided!")]
    EmptyInput,

    #[error("History file {} is malformed: {source}", path.display())]
    MalformedHistory {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file {} is malformed: {source}", path.display())]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type TextResult<T> = Result<T, TextError>;
