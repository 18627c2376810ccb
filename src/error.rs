// File: src/error.rs
//! Error types shared by the model builder, the cache and the engine.
//!
//! Queries never produce an error; only building or loading a model can fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorrectorError {
    /// The corpus file is missing, unreadable or not valid UTF-8.
    #[error("corpus {path:?} is unreadable: {source}")]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A persisted model exists but could not be decoded.
    #[error("model cache {path:?} is corrupt: {reason}")]
    CacheCorrupt { path: PathBuf, reason: String },

    #[error("failed to write model cache {path:?}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("background build failed: {0}")]
    BuildThread(String),
}

pub type Result<T> = std::result::Result<T, CorrectorError>;

impl CorrectorError {
    pub fn corpus(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CorrectorError::CorpusUnreadable { path: path.into(), source }
    }

    pub fn cache_corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CorrectorError::CacheCorrupt { path: path.into(), reason: reason.to_string() }
    }
}
