//! Deduplication policy shared by the medal-count aggregations.
//!
//! Team events award one medal to many athletes, each on their own row.
//! Counting medals per nation or year must see each winning team result once,
//! so tally, year-wise counts and pivots run [`dedupe_medal_events`] first.
//! Athlete leaderboards deliberately skip it and credit every row.

use og_core::{determinism::dedupe_by_key, AthleteKey, MedalEventKey, Record};

/// Rows unique on (Team, NOC, Games, Year, City, Sport, Event, Medal), first
/// occurrence kept, input order preserved. Idempotent.
pub fn dedupe_medal_events<'a, I>(records: I) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    dedupe_by_key(records, MedalEventKey::of)
}

/// One row per (Name, region), first occurrence kept.
pub fn dedupe_athletes<'a, I>(records: I) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    dedupe_by_key(records, AthleteKey::of)
}
