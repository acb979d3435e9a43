//! Typed dashboard requests. One variant per view; parameters are the
//! dashboard's filter inputs.

use og_core::{Dimension, Medal, RegionSelection, SportSelection, YearSelection};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum Query {
    MedalTally { year: YearSelection, country: RegionSelection },
    CountryTrend { country: String },
    OverTime { dimension: Dimension },
    TopAthletes { sport: SportSelection },
    TopCountryAthletes { country: String },
    CountryHeatmap { country: String },
    EventsHeatmap,
    HeightWeight { sport: SportSelection },
    MenVsWomen,
    Ages,
    AgesBySport { sports: Vec<String>, medal: Medal },
    Overview,
    Selectors,
}

impl Query {
    /// Stable artifact name (`<name>.json`).
    pub fn name(&self) -> &'static str {
        match self {
            Query::MedalTally { .. } => "medal_tally",
            Query::CountryTrend { .. } => "country_trend",
            Query::OverTime { .. } => "over_time",
            Query::TopAthletes { .. } => "top_athletes",
            Query::TopCountryAthletes { .. } => "top_country_athletes",
            Query::CountryHeatmap { .. } => "country_heatmap",
            Query::EventsHeatmap => "events_heatmap",
            Query::HeightWeight { .. } => "height_weight",
            Query::MenVsWomen => "men_vs_women",
            Query::Ages => "ages",
            Query::AgesBySport { .. } => "ages_by_sport",
            Query::Overview => "overview",
            Query::Selectors => "selectors",
        }
    }

    /// Human title, filled with the query's parameters.
    pub fn title(&self) -> String {
        match self {
            Query::MedalTally { year, country } => match (year.as_only(), country.as_only()) {
                (None, None) => "Overall Tally".to_string(),
                (Some(y), None) => format!("Medal Tally in {y} Olympics"),
                (None, Some(c)) => format!("{c} overall performance"),
                (Some(y), Some(c)) => format!("{c} performance in {y} Olympics"),
            },
            Query::CountryTrend { country } => format!("{country} Medal Tally over the years"),
            Query::OverTime { dimension } => format!("{} over the years", dimension_label(*dimension)),
            Query::TopAthletes { sport } => format!("Most successful athletes ({sport})"),
            Query::TopCountryAthletes { country } => format!("Top 10 athletes of {country}"),
            Query::CountryHeatmap { country } => format!("{country} excels in the following sports"),
            Query::EventsHeatmap => "No. of Events over time (every sport)".to_string(),
            Query::HeightWeight { sport } => format!("Height vs Weight ({sport})"),
            Query::MenVsWomen => "Men vs Women participation over the years".to_string(),
            Query::Ages => "Distribution of Age".to_string(),
            Query::AgesBySport { medal, .. } => format!("Distribution of Age wrt Sports ({medal} Medalist)"),
            Query::Overview => "Top Statistics".to_string(),
            Query::Selectors => "Selectors".to_string(),
        }
    }
}

fn dimension_label(d: Dimension) -> &'static str {
    match d {
        Dimension::Region => "Participating Nations",
        Dimension::Event => "Events",
        Dimension::Name => "Athletes",
        Dimension::Sport => "Sports",
        Dimension::Noc => "NOCs",
        Dimension::City => "Host Cities",
        Dimension::Team => "Teams",
    }
}
