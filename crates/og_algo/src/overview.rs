//! Headline statistics and selector lists for the dashboard inputs.

use og_core::determinism::sorted_distinct;

use crate::{Dataset, Selection};

/// Distinct counts shown on the overview page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overview {
    pub editions: usize,
    pub hosts: usize,
    pub sports: usize,
    pub events: usize,
    pub nations: usize,
    pub athletes: usize,
}

pub fn overview(ds: &Dataset) -> Overview {
    Overview {
        editions: sorted_distinct(ds.iter().map(|r| r.year)).len(),
        hosts: sorted_distinct(ds.iter().map(|r| r.city.as_str())).len(),
        sports: sorted_distinct(ds.iter().map(|r| r.sport.as_str())).len(),
        events: sorted_distinct(ds.iter().map(|r| r.event.as_str())).len(),
        nations: region_list(ds).len(),
        athletes: sorted_distinct(ds.iter().map(|r| r.name.as_str())).len(),
    }
}

/// Sorted distinct non-null regions.
pub fn region_list(ds: &Dataset) -> Vec<String> {
    sorted_distinct(ds.iter().filter_map(|r| r.region()))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Year and country pickers: `Overall` first, then ascending values.
pub fn country_year_list(ds: &Dataset) -> (Vec<Selection<i32>>, Vec<Selection<String>>) {
    let years = std::iter::once(Selection::Overall)
        .chain(sorted_distinct(ds.iter().map(|r| r.year)).into_iter().map(Selection::Only))
        .collect();
    let countries = std::iter::once(Selection::Overall)
        .chain(region_list(ds).into_iter().map(Selection::Only))
        .collect();
    (years, countries)
}

pub fn sport_list(ds: &Dataset) -> Vec<Selection<String>> {
    std::iter::once(Selection::Overall)
        .chain(
            sorted_distinct(ds.iter().map(|r| r.sport.as_str()))
                .into_iter()
                .map(Selection::only),
        )
        .collect()
}
