use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reasons a catalog could not be loaded. Every variant is fatal at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question directory {path} does not exist or is not a directory")]
    MissingDirectory { path: PathBuf },
    #[error("cannot list question directory {path}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read question file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid question file {path}: {cause}")]
    Malformed {
        path: PathBuf,
        cause: serde_json::Error,
    },
    #[error("invalid question file {path}: record {index} has an empty `question`")]
    EmptyPrompt { path: PathBuf, index: usize },
    #[error("question {prompt:?} appears twice in {path}")]
    RepeatedPrompt { prompt: String, path: PathBuf },
    #[error("question {prompt:?} appears in both {first} and {second}")]
    DuplicatePrompt {
        prompt: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl LoadError {
    /// The file or directory the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::MissingDirectory { path }
            | LoadError::ReadDirectory { path, .. }
            | LoadError::ReadFile { path, .. }
            | LoadError::Malformed { path, .. }
            | LoadError::EmptyPrompt { path, .. }
            | LoadError::RepeatedPrompt { path, .. } => path,
            LoadError::DuplicatePrompt { second, .. } => second,
        }
    }
}
