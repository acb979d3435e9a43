//! Medal tally: deduplicated medal counts grouped by nation or by year.
//!
//! Contract:
//! - Dedup on the medal-event key first, then filter by year and region.
//! - A specific country with `Overall` years is that country's trend: grouped
//!   by Year, ascending.
//! - Every other combination ranks nations: grouped by region, descending Gold.
//!   Groups are formed in ascending region order and the sort is stable, so
//!   equal Gold counts stay alphabetical. Rows without a region form no group.
//! - `total` is computed after aggregation.

use std::collections::BTreeMap;

use og_core::{
    determinism::sort_desc_stable_by_key, MedalCounts, Record, RegionSelection, YearSelection,
};

use crate::dedup::dedupe_medal_events;
use crate::{Dataset, YearCount};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TallyGrouping {
    Region,
    Year,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TallyKey {
    Region(String),
    Year(i32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TallyRow {
    pub key: TallyKey,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl TallyRow {
    fn new(key: TallyKey, c: MedalCounts) -> Self {
        Self { key, gold: c.gold, silver: c.silver, bronze: c.bronze, total: c.total() }
    }
}

/// Result of [`fetch_medal_tally`]. `grouping` is reported even when `rows` is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MedalTally {
    pub grouping: TallyGrouping,
    pub rows: Vec<TallyRow>,
}

pub fn fetch_medal_tally(ds: &Dataset, year: &YearSelection, country: &RegionSelection) -> MedalTally {
    let filtered = dedupe_medal_events(ds)
        .into_iter()
        .filter(|r| year.admits(&r.year) && country.admits_opt(r.region()));

    if !country.is_overall() && year.is_overall() {
        MedalTally { grouping: TallyGrouping::Year, rows: by_year(filtered) }
    } else {
        MedalTally { grouping: TallyGrouping::Region, rows: by_region(filtered) }
    }
}

fn by_year<'a>(rows: impl Iterator<Item = &'a Record>) -> Vec<TallyRow> {
    let mut groups: BTreeMap<i32, MedalCounts> = BTreeMap::new();
    for r in rows {
        *groups.entry(r.year).or_default() += r.medal_counts();
    }
    groups.into_iter().map(|(y, c)| TallyRow::new(TallyKey::Year(y), c)).collect()
}

fn by_region<'a>(rows: impl Iterator<Item = &'a Record>) -> Vec<TallyRow> {
    let mut groups: BTreeMap<&'a str, MedalCounts> = BTreeMap::new();
    for r in rows {
        if let Some(region) = r.region() {
            *groups.entry(region).or_default() += r.medal_counts();
        }
    }
    let mut out: Vec<TallyRow> = groups
        .into_iter()
        .map(|(g, c)| TallyRow::new(TallyKey::Region(g.to_string()), c))
        .collect();
    sort_desc_stable_by_key(&mut out, |row| row.gold);
    out
}

/// Medal events won by `country` per Year (medal rows only, deduplicated), ascending Year.
pub fn yearwise_medal_count(ds: &Dataset, country: &str) -> Vec<YearCount> {
    let mut per_year: BTreeMap<i32, u64> = BTreeMap::new();
    for r in dedupe_medal_events(ds.iter().filter(|r| r.has_medal())) {
        if r.region() == Some(country) {
            *per_year.entry(r.year).or_default() += 1;
        }
    }
    per_year.into_iter().map(|(year, count)| YearCount { year, count }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ds, row};
    use og_core::{Medal, Selection};

    fn region_key(r: &TallyRow) -> &str {
        match &r.key {
            TallyKey::Region(s) => s,
            TallyKey::Year(_) => panic!("expected region key"),
        }
    }

    #[test]
    fn team_gold_counts_once() {
        let d = ds(vec![
            row("A", 2000, "France", "Judo", "E1").gold(),
            row("B", 2000, "France", "Judo", "E1").gold(),
        ]);
        let t = fetch_medal_tally(&d, &Selection::Overall, &Selection::Overall);
        assert_eq!(t.grouping, TallyGrouping::Region);
        assert_eq!(t.rows.len(), 1);
        assert_eq!(region_key(&t.rows[0]), "France");
        assert_eq!((t.rows[0].gold, t.rows[0].total), (1, 1));
    }

    #[test]
    fn nations_rank_by_gold_with_alphabetical_ties() {
        let d = ds(vec![
            row("A", 2000, "Chile", "Judo", "E1").gold(),
            row("B", 2000, "Brazil", "Judo", "E2").medal(Medal::Silver),
            row("C", 2000, "Brazil", "Judo", "E3").gold(),
            row("D", 2000, "Angola", "Judo", "E4").medal(Medal::Bronze),
            row("E", 2000, "Denmark", "Judo", "E5").gold(),
            row("F", 2000, "Denmark", "Judo", "E6").gold(),
        ]);
        let t = fetch_medal_tally(&d, &Selection::Overall, &Selection::Overall);
        let order: Vec<&str> = t.rows.iter().map(region_key).collect();
        assert_eq!(order, vec!["Denmark", "Brazil", "Chile", "Angola"]);
        for r in &t.rows {
            assert_eq!(r.total, r.gold + r.silver + r.bronze);
        }
    }

    #[test]
    fn country_overall_is_year_trend() {
        let d = ds(vec![
            row("A", 2004, "France", "Judo", "E1").gold(),
            row("B", 1996, "France", "Judo", "E1").medal(Medal::Silver),
            row("C", 2000, "Italy", "Judo", "E1").gold(),
        ]);
        let t = fetch_medal_tally(&d, &Selection::Overall, &Selection::only("France"));
        assert_eq!(t.grouping, TallyGrouping::Year);
        let keys: Vec<TallyKey> = t.rows.iter().map(|r| r.key.clone()).collect();
        assert_eq!(keys, vec![TallyKey::Year(1996), TallyKey::Year(2004)]);
    }

    #[test]
    fn year_and_country_group_by_region() {
        let d = ds(vec![
            row("A", 2004, "France", "Judo", "E1").gold(),
            row("B", 2000, "France", "Judo", "E1").gold(),
        ]);
        let t = fetch_medal_tally(&d, &Selection::Only(2004), &Selection::only("France"));
        assert_eq!(t.grouping, TallyGrouping::Region);
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.rows[0].gold, 1);
    }

    #[test]
    fn participants_without_medals_appear_with_zeros() {
        let d = ds(vec![row("A", 2000, "Nauru", "Judo", "E1"), row("B", 2000, "Peru", "Judo", "E2").gold()]);
        let t = fetch_medal_tally(&d, &Selection::Only(2000), &Selection::Overall);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(region_key(&t.rows[1]), "Nauru");
        assert_eq!(t.rows[1].total, 0);
    }

    #[test]
    fn unknown_filters_yield_empty_tables() {
        let d = ds(vec![row("A", 2000, "France", "Judo", "E1").gold()]);
        assert!(fetch_medal_tally(&d, &Selection::Only(1900), &Selection::Overall).rows.is_empty());
        let t = fetch_medal_tally(&d, &Selection::Overall, &Selection::only("Atlantis"));
        assert_eq!(t.grouping, TallyGrouping::Year);
        assert!(t.rows.is_empty());
    }

    #[test]
    fn unresolved_region_forms_no_group() {
        let d = ds(vec![row("A", 2000, "France", "Judo", "E1").gold().no_region()]);
        assert!(fetch_medal_tally(&d, &Selection::Overall, &Selection::Overall).rows.is_empty());
    }

    #[test]
    fn yearwise_count_ignores_non_medal_rows_and_team_duplicates() {
        let d = ds(vec![
            row("A", 2000, "France", "Rowing", "Eights").gold(),
            row("B", 2000, "France", "Rowing", "Eights").gold(),
            row("C", 2000, "France", "Judo", "E1"),
            row("D", 1996, "France", "Judo", "E1").medal(Medal::Bronze),
            row("E", 1996, "Italy", "Judo", "E1").gold(),
        ]);
        let got = yearwise_medal_count(&d, "France");
        assert_eq!(got, vec![YearCount { year: 1996, count: 1 }, YearCount { year: 2000, count: 1 }]);
    }
}
