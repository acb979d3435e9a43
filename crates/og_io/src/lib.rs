//! crates/og_io/src/lib.rs
//! Local-file I/O for the Olympics engine.
//!
//! - CSV provider: `athlete_events.csv` + `noc_regions.csv` → `Dataset`
//! - Data manifest (JSON) with offline-only paths and optional digests
//! - Canonical JSON writer (sorted keys, atomic write)
//! - SHA-256 over raw input bytes
//!
//! No network I/O. All fallible entry points return `IoResult`.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for og_io (loader/manifest/canonical_json/hasher).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (open, create_dir_all, rename, fsync, ...)
    #[error("io/path error: {0}")]
    Path(String),

    /// Malformed CSV content; `row` is the 1-based line in the source file.
    #[error("csv error at row {row}: {msg}")]
    Csv { row: u64, msg: String },

    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    #[error("manifest error: {0}")]
    Manifest(String),

    #[error("hash error: {0}")]
    Hash(String),

    /// Data shape violations (missing columns, empty files).
    #[error("invalid: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

/* ---------------- From conversions (used by file modules) ---------------- */

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        let row = e.position().map(|p| p.line()).unwrap_or(0);
        IoError::Csv { row, msg: e.to_string() }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json keeps no pointer; report the root.
        IoError::Json { pointer: "/".to_string(), msg: e.to_string() }
    }
}

impl From<manifest::ManifestError> for IoError {
    fn from(e: manifest::ManifestError) -> Self {
        IoError::Manifest(e.to_string())
    }
}

/* ---------------- Public modules ---------------- */

pub mod canonical_json;
pub mod hasher;
pub mod loader;
pub mod manifest;

pub use loader::{load_dataset, load_from_manifest, InputDigests, LoadOptions, LoadStats, LoadedDataset, SeasonFilter};
pub use manifest::{DataManifest, ManifestError, ResolvedManifest};
