// src/error.rs
//! Error kinds surfaced by the ingestion module and the export sink.

use std::path::PathBuf;
use thiserror::Error;

/// Outcome of a rejected or failed `submit`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Missing prompt or brand. No request was sent and no record was added.
    #[error("Please provide both prompt and brand")]
    Validation,

    /// The request was attempted and a record was added; this is the surfaced summary.
    #[error("{0}")]
    Request(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("No result at index {index} (log holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
