//! Error types for memegen.
//!
//! Ingestion recovers from per-line and per-file problems locally (they are
//! logged and the offending input is dropped), so only the conditions below
//! ever reach a caller. Compositing never downgrades: every image failure
//! surfaces here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the ingestion and compositing engines.
#[derive(Debug, Error)]
pub enum MemeError {
    // ── Path errors ───────────────────────────────────────────────────────
    /// The path does not exist.
    #[error("File not found: '{path}'")]
    NotFound { path: PathBuf },

    /// The path exists but is not a regular file.
    #[error("Path is a directory, not a file: '{path}'")]
    InvalidTarget { path: PathBuf },

    // ── Ingestion errors ──────────────────────────────────────────────────
    /// No registered extractor handles the file's extension.
    #[error("No ingestor found for file type of '{path}'. Supported extensions: {supported}")]
    UnsupportedFormat { path: PathBuf, supported: String },

    /// A tabular file lacks a required column.
    #[error("CSV file '{path}' must contain 'body' and 'author' columns (missing '{column}')")]
    SchemaError { path: PathBuf, column: String },

    /// A capability needed for this format was not compiled in.
    #[error("{dependency} support is not available: {hint}")]
    DependencyMissing { dependency: String, hint: String },

    /// An extractor was handed a file of the wrong type.
    #[error("Cannot ingest '{path}': expected .{expected}")]
    FormatMismatch { path: PathBuf, expected: String },

    /// The external text-extraction utility is missing or failed.
    #[error("{tool} failed: {detail}")]
    ExternalToolError { tool: String, detail: String },

    // ── Image errors ──────────────────────────────────────────────────────
    #[error("Image file not found at: '{path}'")]
    ImageNotFound { path: PathBuf },

    #[error("Error loading image '{path}': {detail}")]
    ImageDecodeError { path: PathBuf, detail: String },

    #[error("Error saving image '{path}': {detail}")]
    ImageSaveError { path: PathBuf, detail: String },

    // ── Caller errors ─────────────────────────────────────────────────────
    /// A quote body was supplied without its author.
    #[error("Author required if body is used")]
    AuthorRequired,

    #[error("Failed to download '{url}': {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("No quotes found in any of the configured quote files")]
    NoQuotes,

    #[error("No images found in '{dir}'")]
    NoImages { dir: PathBuf },
}

pub type Result<T> = std::result::Result<T, MemeError>;
