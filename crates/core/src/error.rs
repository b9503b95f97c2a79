use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the operator by corpus, search and export operations.
///
/// None of these are fatal to a session; callers report them and carry on
/// with the previous state intact.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Invalid path {path}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("No files loaded; set a file path to load files to search")]
    EmptyCorpus,

    #[error("Invalid selection '{0}'")]
    InvalidSearchSelector(String),

    #[error("Invalid destination {path}: {reason}")]
    InvalidDestination { path: PathBuf, reason: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FinderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Failure to run an external introspection query (`nm -D`, `objdump -p`).
#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for core operations.
pub type FinderResult<T> = Result<T, FinderError>;
