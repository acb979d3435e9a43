//! og_core — Canonical row schema, immutable dataset handle, selections, and
//! stable-ordering helpers.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! engine (`og_io`, `og_algo`, `og_pipeline`, `og_report`, `og_cli`).
//!
//! - Row schema: `Record`, `Sex`, `Medal`, `Season`, `MedalCounts`
//! - Dataset handle: `Dataset` (read-only after construction)
//! - Dedup keys: `MedalEventKey` (team results), `AthleteKey` (persons)
//! - Filters: `Selection<T>` with the `"Overall"` sentinel, `Dimension`
//! - Deterministic helpers: first-occurrence dedup, first-seen counting
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod dataset;
pub mod determinism;
pub mod record;
pub mod selection;

pub mod errors {
    use core::fmt;

    /// Minimal error set for parsing core-domain values.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        InvalidSex,
        InvalidMedal,
        InvalidSeason,
        InvalidYear,
        UnknownDimension,
        Empty(&'static str),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidSex => write!(f, "invalid sex (expected M or F)"),
                CoreError::InvalidMedal => write!(f, "invalid medal (expected Gold, Silver or Bronze)"),
                CoreError::InvalidSeason => write!(f, "invalid season (expected Summer or Winter)"),
                CoreError::InvalidYear => write!(f, "invalid year"),
                CoreError::UnknownDimension => write!(f, "unknown dimension"),
                CoreError::Empty(k) => write!(f, "empty value: {k}"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub use dataset::{AthleteKey, Dataset, MedalEventKey};
pub use errors::CoreError;
pub use record::{Medal, MedalCounts, Record, Season, Sex};
pub use selection::{Dimension, RegionSelection, Selection, SportSelection, YearSelection, OVERALL};
