//! Dashboard handle: an immutable dataset plus an optional view cache.
//!
//! Contract:
//! - The dataset never changes after construction, so a cached view is
//!   always identical to a fresh evaluation of the same query.
//! - `evaluate` is the single dispatch table from `Query` to `og_algo`.

use std::collections::BTreeMap;
use std::path::Path;

use og_algo as algo;
use og_core::Dataset;
use og_io::{InputDigests, LoadOptions, LoadedDataset};

use crate::{PipelineError, Query, Selectors, View};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Keep each computed view keyed by its query.
    pub memoize: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { memoize: true }
    }
}

#[derive(Debug)]
pub struct Dashboard {
    dataset: Dataset,
    digests: Option<InputDigests>,
    config: DashboardConfig,
    cache: BTreeMap<Query, View>,
}

impl Dashboard {
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        Self { dataset, digests: None, config, cache: BTreeMap::new() }
    }

    pub fn from_loaded(loaded: LoadedDataset, config: DashboardConfig) -> Self {
        Self { digests: Some(loaded.digests), ..Self::new(loaded.dataset, config) }
    }

    /// Load through a data manifest (paths, season, digests).
    pub fn open_manifest(manifest: &Path, config: DashboardConfig) -> Result<Self, PipelineError> {
        Ok(Self::from_loaded(og_io::load_from_manifest(manifest)?, config))
    }

    pub fn open_csv(
        events: &Path,
        regions: &Path,
        opts: &LoadOptions,
        config: DashboardConfig,
    ) -> Result<Self, PipelineError> {
        Ok(Self::from_loaded(og_io::load_dataset(events, regions, opts)?, config))
    }

    #[inline]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Digests of the CSV inputs, when the dataset came from disk.
    #[inline]
    pub fn digests(&self) -> Option<&InputDigests> {
        self.digests.as_ref()
    }

    /// Number of memoized views.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn run(&mut self, query: &Query) -> View {
        if let Some(v) = self.cache.get(query) {
            log::debug!("cache hit: {}", query.name());
            return v.clone();
        }
        log::debug!("dispatch: {query:?}");
        let view = evaluate(&self.dataset, query);
        if self.config.memoize {
            self.cache.insert(query.clone(), view.clone());
        }
        view
    }
}

/// Compute `query` over `ds` without caching.
pub fn evaluate(ds: &Dataset, query: &Query) -> View {
    match query {
        Query::MedalTally { year, country } => View::MedalTally(algo::fetch_medal_tally(ds, year, country)),
        Query::CountryTrend { country } => View::CountryTrend(algo::yearwise_medal_count(ds, country)),
        Query::OverTime { dimension } => View::OverTime {
            dimension: *dimension,
            series: algo::data_over_time(ds, *dimension),
        },
        Query::TopAthletes { sport } => View::TopAthletes(algo::most_successful(ds, sport)),
        Query::TopCountryAthletes { country } => {
            View::TopCountryAthletes(algo::most_successful_countrywise(ds, country))
        }
        Query::CountryHeatmap { country } => View::Heatmap(algo::country_event_heatmap(ds, country)),
        Query::EventsHeatmap => View::Heatmap(algo::events_heatmap(ds)),
        Query::HeightWeight { sport } => View::HeightWeight(algo::weight_v_height(ds, sport)),
        Query::MenVsWomen => View::MenVsWomen(algo::men_vs_women(ds)),
        Query::Ages => View::Ages(algo::age_distributions(ds)),
        Query::AgesBySport { sports, medal } => {
            let sports: Vec<&str> = if sports.is_empty() {
                algo::FAMOUS_SPORTS.to_vec()
            } else {
                sports.iter().map(String::as_str).collect()
            };
            View::AgesBySport(algo::age_by_sport(ds, &sports, *medal))
        }
        Query::Overview => View::Overview(algo::overview(ds)),
        Query::Selectors => {
            let (years, countries) = algo::country_year_list(ds);
            View::Selectors(Selectors { years, countries, sports: algo::sport_list(ds) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use og_core::{Medal, Record, Season, Selection, Sex};

    fn rec(name: &str, year: i32, region: &str, sport: &str, medal: Option<Medal>) -> Record {
        Record {
            name: name.into(),
            sex: Sex::F,
            age: Some(25),
            height: None,
            weight: None,
            team: region.into(),
            noc: region[..3].to_ascii_uppercase(),
            games: format!("{year} Summer"),
            year,
            season: Season::Summer,
            city: "Sydney".into(),
            sport: sport.into(),
            event: format!("{sport} Women's Open"),
            medal,
            region: Some(region.into()),
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            rec("A", 2000, "France", "Judo", Some(Medal::Gold)),
            rec("B", 2000, "Italy", "Rowing", None),
        ])
    }

    #[test]
    fn memoized_views_match_fresh_evaluation() {
        let mut d = Dashboard::new(dataset(), DashboardConfig::default());
        let q = Query::MedalTally { year: Selection::Overall, country: Selection::Overall };
        let first = d.run(&q);
        assert_eq!(d.cached(), 1);
        let second = d.run(&q);
        assert_eq!(first, second);
        assert_eq!(first, evaluate(d.dataset(), &q));
        assert_eq!(d.cached(), 1);
    }

    #[test]
    fn memoize_off_keeps_cache_empty() {
        let mut d = Dashboard::new(dataset(), DashboardConfig { memoize: false });
        d.run(&Query::Overview);
        d.run(&Query::Overview);
        assert_eq!(d.cached(), 0);
        assert!(d.digests().is_none());
    }

    #[test]
    fn empty_sport_list_falls_back_to_famous_sports() {
        let view = evaluate(&dataset(), &Query::AgesBySport { sports: vec![], medal: Medal::Gold });
        match view {
            View::AgesBySport(rows) => {
                assert_eq!(rows.len(), algo::FAMOUS_SPORTS.len());
                let judo = rows.iter().find(|r| r.sport == "Judo").unwrap();
                assert_eq!(judo.ages, vec![25]);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn selectors_collect_all_three_pickers() {
        match evaluate(&dataset(), &Query::Selectors) {
            View::Selectors(s) => {
                assert_eq!(s.years, vec![Selection::Overall, Selection::Only(2000)]);
                assert_eq!(s.countries.len(), 3);
                assert_eq!(s.sports[0], Selection::Overall);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }
}
