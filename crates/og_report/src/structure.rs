//! crates/og_report/src/structure.rs
//! Map each `View` to a titled table. No recomputation: values are copied
//! from the view and only formatted.

use og_algo::{AgeDistributions, Axis, Pivot, SportAges, TallyGrouping, TallyKey, YearCount};
use og_pipeline::View;

use crate::{ReportError, ReportModel};

// -------------------- cell formatting --------------------

/// One-decimal float cell; missing is empty.
pub fn fmt_f64(v: Option<f64>) -> String {
    v.map(|x| format!("{x:.1}")).unwrap_or_default()
}

pub fn fmt_opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn model(title: &str, columns: Vec<String>, rows: Vec<Vec<String>>) -> ReportModel {
    ReportModel { title: title.to_string(), columns, rows }
}

// -------------------- API --------------------

/// Build the table for `view`. The title is generic; callers with the query at
/// hand replace it via [`ReportModel::with_title`].
pub fn build_model(view: &View) -> Result<ReportModel, ReportError> {
    let m = match view {
        View::MedalTally(t) => {
            let key_col = match t.grouping {
                TallyGrouping::Region => "Region",
                TallyGrouping::Year => "Year",
            };
            let rows = t
                .rows
                .iter()
                .map(|r| {
                    let key = match &r.key {
                        TallyKey::Region(s) => s.clone(),
                        TallyKey::Year(y) => y.to_string(),
                    };
                    vec![key, r.gold.to_string(), r.silver.to_string(), r.bronze.to_string(), r.total.to_string()]
                })
                .collect();
            model("Medal Tally", cols(&[key_col, "Gold", "Silver", "Bronze", "Total"]), rows)
        }
        View::CountryTrend(series) => model("Medals over the years", cols(&["Year", "Medals"]), year_rows(series)),
        View::OverTime { series, .. } => model("Over the years", cols(&["Year", "Count"]), year_rows(series)),
        View::TopAthletes(v) => model(
            "Most successful athletes",
            cols(&["Name", "Medals", "Sport", "Region"]),
            v.iter()
                .map(|a| vec![a.name.clone(), a.medals.to_string(), a.sport.clone(), fmt_opt(a.region.as_deref())])
                .collect(),
        ),
        View::TopCountryAthletes(v) => model(
            "Top athletes",
            cols(&["Athlete", "Medals", "Sport"]),
            v.iter().map(|a| vec![a.athlete.clone(), a.medals.to_string(), a.sport.clone()]).collect(),
        ),
        View::Heatmap(p) => pivot_model(p)?,
        View::HeightWeight(v) => model(
            "Height vs Weight",
            cols(&["Name", "Sex", "Region", "Sport", "Age", "Height", "Weight", "Medal"]),
            v.iter()
                .map(|a| {
                    vec![
                        a.name.clone(),
                        a.sex.to_string(),
                        fmt_opt(a.region.as_deref()),
                        a.sport.clone(),
                        fmt_opt(a.age),
                        fmt_f64(a.height),
                        fmt_f64(a.weight),
                        a.medal.as_str().to_string(),
                    ]
                })
                .collect(),
        ),
        View::MenVsWomen(v) => model(
            "Men vs Women",
            cols(&["Year", "Male", "Female"]),
            v.iter().map(|r| vec![r.year.to_string(), r.male.to_string(), r.female.to_string()]).collect(),
        ),
        View::Ages(a) => model("Distribution of Age", age_columns("Group"), age_rows(a)),
        View::AgesBySport(v) => model("Distribution of Age by sport", age_columns("Sport"), sport_age_rows(v)),
        View::Overview(o) => model(
            "Top Statistics",
            cols(&["Editions", "Hosts", "Sports", "Events", "Nations", "Athletes"]),
            vec![[o.editions, o.hosts, o.sports, o.events, o.nations, o.athletes]
                .iter()
                .map(|n| n.to_string())
                .collect()],
        ),
        View::Selectors(s) => {
            let n = s.years.len().max(s.countries.len()).max(s.sports.len());
            let rows = (0..n)
                .map(|i| {
                    vec![
                        fmt_opt(s.years.get(i)),
                        fmt_opt(s.countries.get(i)),
                        fmt_opt(s.sports.get(i)),
                    ]
                })
                .collect();
            model("Selectors", cols(&["Year", "Country", "Sport"]), rows)
        }
    };
    Ok(m)
}

// -------------------- per-view helpers --------------------

fn year_rows(series: &[YearCount]) -> Vec<Vec<String>> {
    series.iter().map(|yc| vec![yc.year.to_string(), yc.count.to_string()]).collect()
}

fn pivot_model(p: &Pivot) -> Result<ReportModel, ReportError> {
    if p.cells.len() != p.rows.len() || p.cells.iter().any(|r| r.len() != p.columns.len()) {
        return Err(ReportError::Inconsistent("pivot shape"));
    }
    let mut columns = vec!["Sport".to_string()];
    columns.extend(p.columns.iter().map(|c| match c {
        Axis::Value(y) => y.to_string(),
        Axis::Placeholder => "-".to_string(),
    }));
    let rows = p
        .rows
        .iter()
        .zip(&p.cells)
        .map(|(label, cells)| {
            let mut row = vec![match label {
                Axis::Value(s) => s.clone(),
                Axis::Placeholder => "-".to_string(),
            }];
            row.extend(cells.iter().map(|c| c.to_string()));
            row
        })
        .collect();
    Ok(model("Heatmap", columns, rows))
}

fn age_columns(first: &str) -> Vec<String> {
    cols(&[first, "Count", "Min", "Mean", "Max"])
}

fn age_summary(label: &str, ages: &[u16]) -> Vec<String> {
    let mean = if ages.is_empty() {
        None
    } else {
        Some(ages.iter().map(|&a| f64::from(a)).sum::<f64>() / ages.len() as f64)
    };
    vec![
        label.to_string(),
        ages.len().to_string(),
        fmt_opt(ages.iter().min()),
        fmt_f64(mean),
        fmt_opt(ages.iter().max()),
    ]
}

fn age_rows(a: &AgeDistributions) -> Vec<Vec<String>> {
    vec![
        age_summary("Overall Age", &a.overall),
        age_summary("Gold Medalist", &a.gold),
        age_summary("Silver Medalist", &a.silver),
        age_summary("Bronze Medalist", &a.bronze),
    ]
}

fn sport_age_rows(v: &[SportAges]) -> Vec<Vec<String>> {
    v.iter().map(|s| age_summary(&s.sport, &s.ages)).collect()
}
