//! og_pipeline — the dashboard surface: load the dataset once, answer typed
//! queries by dispatching to `og_algo`, and memoize the resulting views.
//!
//! This crate does no rendering. Loading and hashing are delegated to `og_io`,
//! every aggregation lives in `og_algo`.

#![forbid(unsafe_code)]

use std::fmt;

pub mod dashboard;
pub mod query;
pub mod view;

pub use dashboard::{evaluate, Dashboard, DashboardConfig};
pub use query::Query;
pub use view::{Selectors, View};

/// Single error surface for opening a dashboard.
#[derive(Debug)]
pub enum PipelineError {
    /// Filesystem and hashing failures.
    Io(String),
    /// Manifest, CSV shape or value errors.
    Validate(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Io(m) => write!(f, "io: {m}"),
            PipelineError::Validate(m) => write!(f, "validate: {m}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<og_io::IoError> for PipelineError {
    fn from(e: og_io::IoError) -> Self {
        use og_io::IoError;
        match e {
            IoError::Path(m) => PipelineError::Io(format!("path: {m}")),
            IoError::Hash(m) => PipelineError::Io(format!("hash: {m}")),
            IoError::Json { pointer, msg } => PipelineError::Validate(format!("json {pointer}: {msg}")),
            IoError::Csv { row, msg } => PipelineError::Validate(format!("csv row {row}: {msg}")),
            IoError::Manifest(m) => PipelineError::Validate(format!("manifest: {m}")),
            IoError::Invalid(m) => PipelineError::Validate(m),
        }
    }
}
