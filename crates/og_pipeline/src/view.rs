//! Typed query results.

use og_algo::{
    AgeDistributions, AthleteMedals, AthletePoint, CountryAthleteMedals, MedalTally, Overview, Pivot,
    SexParticipation, SportAges, YearCount,
};
use og_core::{Dimension, Selection};
use serde::Serialize;

/// Values offered by the year/country/sport pickers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Selectors {
    pub years: Vec<Selection<i32>>,
    pub countries: Vec<Selection<String>>,
    pub sports: Vec<Selection<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum View {
    MedalTally(MedalTally),
    CountryTrend(Vec<YearCount>),
    OverTime { dimension: Dimension, series: Vec<YearCount> },
    TopAthletes(Vec<AthleteMedals>),
    TopCountryAthletes(Vec<CountryAthleteMedals>),
    Heatmap(Pivot),
    HeightWeight(Vec<AthletePoint>),
    MenVsWomen(Vec<SexParticipation>),
    Ages(AgeDistributions),
    AgesBySport(Vec<SportAges>),
    Overview(Overview),
    Selectors(Selectors),
}

impl View {
    /// Number of table rows the view renders to (a pivot counts its sport rows).
    pub fn row_count(&self) -> usize {
        match self {
            View::MedalTally(t) => t.rows.len(),
            View::CountryTrend(s) => s.len(),
            View::OverTime { series, .. } => series.len(),
            View::TopAthletes(v) => v.len(),
            View::TopCountryAthletes(v) => v.len(),
            View::Heatmap(p) => p.rows.len(),
            View::HeightWeight(v) => v.len(),
            View::MenVsWomen(v) => v.len(),
            View::Ages(a) => a.overall.len(),
            View::AgesBySport(v) => v.len(),
            View::Overview(_) => 1,
            View::Selectors(s) => s.years.len().max(s.countries.len()).max(s.sports.len()),
        }
    }
}
