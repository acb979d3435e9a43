//! Sport × Year cross-tabulations for heatmap displays.
//!
//! A `Pivot` never has an empty axis: when nothing matches, the result is a
//! single placeholder cell holding 0, since heatmap consumers fail on empty
//! axes.

use std::collections::BTreeMap;

use og_core::determinism::{dedupe_by_key, sorted_distinct};

use crate::dedup::dedupe_medal_events;
use crate::Dataset;

/// Axis label: a real value, or the stand-in of the placeholder pivot.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis<T> {
    Value(T),
    Placeholder,
}

/// Dense count matrix: `cells[i][j]` is the count for `rows[i]` × `columns[j]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pivot {
    pub rows: Vec<Axis<String>>,
    pub columns: Vec<Axis<i32>>,
    pub cells: Vec<Vec<u64>>,
}

impl Pivot {
    pub fn placeholder() -> Self {
        Self { rows: vec![Axis::Placeholder], columns: vec![Axis::Placeholder], cells: vec![vec![0]] }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.rows.as_slice(), [Axis::Placeholder])
            && matches!(self.columns.as_slice(), [Axis::Placeholder])
    }

    /// (rows, columns); both are at least 1.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn get(&self, sport: &str, year: i32) -> Option<u64> {
        let i = self.rows.iter().position(|r| matches!(r, Axis::Value(s) if s == sport))?;
        let j = self.columns.iter().position(|c| *c == Axis::Value(year))?;
        self.cells.get(i)?.get(j).copied()
    }

    /// Count (sport, year) occurrences into a zero-filled matrix.
    fn from_pairs<'a>(pairs: impl Iterator<Item = (&'a str, i32)>) -> Self {
        let mut counts: BTreeMap<(&str, i32), u64> = BTreeMap::new();
        for p in pairs {
            *counts.entry(p).or_default() += 1;
        }
        if counts.is_empty() {
            return Self::placeholder();
        }

        let sports: Vec<&str> = sorted_distinct(counts.keys().map(|(s, _)| *s));
        let years: Vec<i32> = sorted_distinct(counts.keys().map(|(_, y)| *y));
        let cells = sports
            .iter()
            .map(|s| years.iter().map(|y| counts.get(&(*s, *y)).copied().unwrap_or(0)).collect())
            .collect();

        Self {
            rows: sports.into_iter().map(|s| Axis::Value(s.to_string())).collect(),
            columns: years.into_iter().map(Axis::Value).collect(),
            cells,
        }
    }
}

/// Medal events won by `country`, Sport rows × Year columns (deduplicated).
pub fn country_event_heatmap(ds: &Dataset, country: &str) -> Pivot {
    let medal_events = dedupe_medal_events(ds.iter().filter(|r| r.has_medal()));
    Pivot::from_pairs(
        medal_events
            .into_iter()
            .filter(|r| r.region() == Some(country))
            .map(|r| (r.sport.as_str(), r.year)),
    )
}

/// Distinct events held per Sport × Year across the whole dataset.
pub fn events_heatmap(ds: &Dataset) -> Pivot {
    let events = dedupe_by_key(ds, |r| (r.year, r.sport.as_str(), r.event.as_str()));
    Pivot::from_pairs(events.into_iter().map(|r| (r.sport.as_str(), r.year)))
}
