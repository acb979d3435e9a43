//! Athlete leaderboards (top-N by medal count).
//!
//! Counting rule: every medal-bearing row credits its athlete once. There is
//! no medal-event dedup here, so each member of a winning relay or team is
//! credited individually. The tally engine counts that same result once.
//!
//! Ordering: descending medal count; equal counts keep the order in which the
//! athletes were first encountered in the dataset.

use std::collections::{BTreeMap, BTreeSet};

use og_core::determinism::{count_first_seen, sort_desc_stable_by_key};
use og_core::{Record, SportSelection};

use crate::Dataset;

pub const TOP_OVERALL: usize = 15;
pub const TOP_COUNTRYWISE: usize = 10;

/// `{Name, Medals, Sport, region}` row of [`most_successful`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AthleteMedals {
    pub name: String,
    pub medals: u64,
    pub sport: String,
    pub region: Option<String>,
}

/// `{Athlete, Medals, Sport}` row of [`most_successful_countrywise`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountryAthleteMedals {
    pub athlete: String,
    pub medals: u64,
    pub sport: String,
}

fn top_n<'a>(rows: impl Iterator<Item = &'a Record>, n: usize) -> Vec<(&'a str, u64)> {
    let mut counts = count_first_seen(rows.map(|r| r.name.as_str()));
    sort_desc_stable_by_key(&mut counts, |c| c.1);
    counts.truncate(n);
    counts
}

/// First row per name among `rows`, restricted to `names`.
fn first_rows<'a>(
    rows: impl Iterator<Item = &'a Record>,
    names: &[(&'a str, u64)],
) -> BTreeMap<&'a str, &'a Record> {
    let wanted: BTreeSet<&str> = names.iter().map(|(n, _)| *n).collect();
    let mut first: BTreeMap<&'a str, &'a Record> = BTreeMap::new();
    for r in rows {
        if wanted.contains(r.name.as_str()) {
            first.entry(r.name.as_str()).or_insert(r);
        }
    }
    first
}

/// Top 15 medal-winning athletes, optionally within one sport.
///
/// The attached `sport` and `region` come from the athlete's first row in the
/// whole dataset, which for multi-sport athletes need not be `sport`.
pub fn most_successful(ds: &Dataset, sport: &SportSelection) -> Vec<AthleteMedals> {
    let top = top_n(
        ds.iter().filter(|r| r.has_medal() && sport.admits(&r.sport)),
        TOP_OVERALL,
    );
    let first = first_rows(ds.iter(), &top);

    top.into_iter()
        .filter_map(|(name, medals)| {
            first.get(name).map(|rep| AthleteMedals {
                name: name.to_string(),
                medals,
                sport: rep.sport.clone(),
                region: rep.region.clone(),
            })
        })
        .collect()
}

/// Top 10 medal-winning athletes of one region.
pub fn most_successful_countrywise(ds: &Dataset, country: &str) -> Vec<CountryAthleteMedals> {
    let medal_rows = || ds.iter().filter(|r| r.has_medal() && r.region() == Some(country));
    let top = top_n(medal_rows(), TOP_COUNTRYWISE);
    let first = first_rows(medal_rows(), &top);

    top.into_iter()
        .filter_map(|(name, medals)| {
            first.get(name).map(|rep| CountryAthleteMedals {
                athlete: name.to_string(),
                medals,
                sport: rep.sport.clone(),
            })
        })
        .collect()
}
