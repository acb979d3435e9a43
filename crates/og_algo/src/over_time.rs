//! Distinct entities per edition (nations, events, athletes, ...).

use std::collections::{BTreeMap, BTreeSet};

use crate::{Dataset, Dimension, YearCount};

/// Count each distinct value of `dim` at most once per Year; ascending Year.
///
/// Rows whose `dim` value is null (an unresolved region) are not counted.
pub fn data_over_time(ds: &Dataset, dim: Dimension) -> Vec<YearCount> {
    let pairs: BTreeSet<(i32, &str)> = ds
        .iter()
        .filter_map(|r| dim.value(r).map(|v| (r.year, v)))
        .collect();

    let mut per_year: BTreeMap<i32, u64> = BTreeMap::new();
    for (year, _) in pairs {
        *per_year.entry(year).or_default() += 1;
    }
    per_year.into_iter().map(|(year, count)| YearCount { year, count }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ds, row};

    #[test]
    fn nation_counted_once_per_year() {
        let d = ds(vec![
            row("A", 2000, "France", "Judo", "E1"),
            row("B", 1996, "France", "Judo", "E1"),
            row("C", 2000, "France", "Swimming", "E9"),
        ]);
        let got = data_over_time(&d, Dimension::Region);
        assert_eq!(got, vec![YearCount { year: 1996, count: 1 }, YearCount { year: 2000, count: 1 }]);
    }

    #[test]
    fn events_and_athletes() {
        let d = ds(vec![
            row("A", 2000, "France", "Judo", "E1"),
            row("B", 2000, "Italy", "Judo", "E1"),
            row("B", 2000, "Italy", "Judo", "E2"),
        ]);
        assert_eq!(data_over_time(&d, Dimension::Event), vec![YearCount { year: 2000, count: 2 }]);
        assert_eq!(data_over_time(&d, Dimension::Name), vec![YearCount { year: 2000, count: 2 }]);
    }

    #[test]
    fn null_regions_are_not_a_nation() {
        let d = ds(vec![row("A", 2000, "France", "Judo", "E1").no_region()]);
        assert!(data_over_time(&d, Dimension::Region).is_empty());
        assert_eq!(data_over_time(&d, Dimension::Noc).len(), 1);
    }

    #[test]
    fn empty_dataset_is_empty_series() {
        assert!(data_over_time(&Dataset::default(), Dimension::Event).is_empty());
    }
}
