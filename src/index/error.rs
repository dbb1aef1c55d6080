//! Search index error types.

use std::path::PathBuf;
use thiserror::Error;

/// Unrecoverable index generation failures.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("content directory `{0}` not found")]
    MissingContentRoot(PathBuf),

    #[error("failed to write search index to `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("failed to serialize search index")]
    Serialize(#[from] serde_json::Error),
}
