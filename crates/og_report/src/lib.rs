//! og_report — pure, offline report model + renderers (JSON/HTML/text).
//!
//! Rules:
//! - No I/O. Callers hand in an already computed `View`.
//! - Every cell is a preformatted string: integers as-is, floats with one
//!   decimal, missing values as the empty string.
//! - Column and row order follow the view; nothing is re-sorted here.

#![deny(unsafe_code)]

use std::fmt;

use serde::Serialize;

#[cfg(feature = "render_html")]
pub mod render_html;
#[cfg(feature = "render_json")]
pub mod render_json;
pub mod render_text;
pub mod structure;

pub use structure::build_model;

#[cfg(feature = "render_html")]
pub use render_html::render_html;
#[cfg(feature = "render_json")]
pub use render_json::render_json;
pub use render_text::render_text;

// ===== Errors =====

#[derive(Debug)]
pub enum ReportError {
    Inconsistent(&'static str),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Inconsistent(m) => write!(f, "inconsistent: {m}"),
        }
    }
}

impl std::error::Error for ReportError {}

// ===== Model =====

/// A titled table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportModel {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportModel {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Provenance echoed into JSON reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InputEcho {
    pub athlete_events_sha256: Option<String>,
    pub noc_regions_sha256: Option<String>,
    pub season: String,
    pub records: usize,
}
