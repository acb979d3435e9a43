// crates/og_algo/src/lib.rs
#![forbid(unsafe_code)]

//! Pure aggregations over the canonical [`Dataset`].
//!
//! Every entry point takes `&Dataset` plus primitive filter values and returns
//! a freshly built, strongly typed table. None of them mutate the dataset,
//! fail, or depend on another aggregation's output. Empty filter results are
//! zero-row tables (or the placeholder pivot), never errors.

pub use og_core::{Dataset, Dimension, Medal, Record, Selection};

// ----------------------------- Shared result rows ---------------------------------

/// `{Year, Count}` row shared by the time-series style views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

// ----------------------------- Aggregations (public surface) ----------------------

pub mod dedup;
pub mod demographics;
pub mod leaderboard;
pub mod over_time;
pub mod overview;
pub mod pivot;
pub mod tally;

#[cfg(test)]
pub(crate) mod testutil;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use dedup::{dedupe_athletes, dedupe_medal_events};
pub use demographics::{
    age_by_sport, age_distributions, men_vs_women, weight_v_height, AgeDistributions,
    AthletePoint, MedalLabel, SexParticipation, SportAges, FAMOUS_SPORTS,
};
pub use leaderboard::{
    most_successful, most_successful_countrywise, AthleteMedals, CountryAthleteMedals,
    TOP_COUNTRYWISE, TOP_OVERALL,
};
pub use over_time::data_over_time;
pub use overview::{country_year_list, overview, region_list, sport_list, Overview};
pub use pivot::{country_event_heatmap, events_heatmap, Axis, Pivot};
pub use tally::{fetch_medal_tally, yearwise_medal_count, MedalTally, TallyGrouping, TallyKey, TallyRow};
