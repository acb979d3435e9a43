//! Per-athlete demographic subsets: height/weight scatter data, participation
//! by sex, and age distributions.
//!
//! All views start from the per-athlete table: the whole dataset deduplicated
//! on (Name, region), keeping each athlete's first row. Its medal, sport and
//! age therefore describe that first row only.

use std::collections::BTreeMap;

use og_core::{Record, Sex, SportSelection};

use crate::dedup::dedupe_athletes;
use crate::{Dataset, Medal};

/// Medal column with nulls replaced by the `NoMedal` category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MedalLabel {
    Gold,
    Silver,
    Bronze,
    NoMedal,
}

impl MedalLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedalLabel::Gold => "Gold",
            MedalLabel::Silver => "Silver",
            MedalLabel::Bronze => "Bronze",
            MedalLabel::NoMedal => "No Medal",
        }
    }
}

impl From<Option<Medal>> for MedalLabel {
    fn from(m: Option<Medal>) -> Self {
        match m {
            Some(Medal::Gold) => MedalLabel::Gold,
            Some(Medal::Silver) => MedalLabel::Silver,
            Some(Medal::Bronze) => MedalLabel::Bronze,
            None => MedalLabel::NoMedal,
        }
    }
}

/// One athlete, as plotted on the height/weight scatter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AthletePoint {
    pub name: String,
    pub sex: Sex,
    pub region: Option<String>,
    pub sport: String,
    pub age: Option<u16>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medal: MedalLabel,
}

impl From<&Record> for AthletePoint {
    fn from(r: &Record) -> Self {
        Self {
            name: r.name.clone(),
            sex: r.sex,
            region: r.region.clone(),
            sport: r.sport.clone(),
            age: r.age,
            height: r.height,
            weight: r.weight,
            medal: MedalLabel::from(r.medal),
        }
    }
}

/// `{Year, Male, Female}` distinct-athlete counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SexParticipation {
    pub year: i32,
    pub male: u64,
    pub female: u64,
}

/// Non-null ages of the per-athlete table, overall and per medal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeDistributions {
    pub overall: Vec<u16>,
    pub gold: Vec<u16>,
    pub silver: Vec<u16>,
    pub bronze: Vec<u16>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SportAges {
    pub sport: String,
    pub ages: Vec<u16>,
}

/// Sports compared by default in the age-by-sport view.
pub const FAMOUS_SPORTS: [&str; 38] = [
    "Basketball", "Judo", "Football", "Tug-Of-War", "Athletics",
    "Swimming", "Badminton", "Sailing", "Gymnastics",
    "Art Competitions", "Handball", "Weightlifting", "Wrestling",
    "Water Polo", "Hockey", "Rowing", "Fencing",
    "Shooting", "Boxing", "Taekwondo", "Cycling", "Diving", "Canoeing",
    "Tennis", "Golf", "Softball", "Archery",
    "Volleyball", "Synchronized Swimming", "Table Tennis", "Baseball",
    "Rhythmic Gymnastics", "Rugby Sevens",
    "Beach Volleyball", "Triathlon", "Rugby", "Polo", "Ice Hockey",
];

/// Per-athlete rows, optionally restricted to one sport (by the athlete's first row).
pub fn weight_v_height(ds: &Dataset, sport: &SportSelection) -> Vec<AthletePoint> {
    dedupe_athletes(ds)
        .into_iter()
        .filter(|r| sport.admits(&r.sport))
        .map(AthletePoint::from)
        .collect()
}

/// Distinct athletes per Year and sex, outer-joined on Year (absent side = 0).
pub fn men_vs_women(ds: &Dataset) -> Vec<SexParticipation> {
    let mut per_year: BTreeMap<i32, (u64, u64)> = BTreeMap::new();
    for r in dedupe_athletes(ds) {
        let slot = per_year.entry(r.year).or_default();
        match r.sex {
            Sex::M => slot.0 += 1,
            Sex::F => slot.1 += 1,
        }
    }
    per_year
        .into_iter()
        .map(|(year, (male, female))| SexParticipation { year, male, female })
        .collect()
}

pub fn age_distributions(ds: &Dataset) -> AgeDistributions {
    let mut out = AgeDistributions::default();
    for r in dedupe_athletes(ds) {
        let Some(age) = r.age else { continue };
        out.overall.push(age);
        match r.medal {
            Some(Medal::Gold) => out.gold.push(age),
            Some(Medal::Silver) => out.silver.push(age),
            Some(Medal::Bronze) => out.bronze.push(age),
            None => {}
        }
    }
    out
}

/// For each listed sport (in the given order), the non-null ages of
/// per-athlete rows of that sport holding `medal`.
pub fn age_by_sport(ds: &Dataset, sports: &[&str], medal: Medal) -> Vec<SportAges> {
    let athletes = dedupe_athletes(ds);
    sports
        .iter()
        .map(|sport| SportAges {
            sport: sport.to_string(),
            ages: athletes
                .iter()
                .filter(|r| r.sport == *sport && r.medal == Some(medal))
                .filter_map(|r| r.age)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ds, row};
    use og_core::Selection;

    #[test]
    fn no_swimmers_no_rows() {
        let d = ds(vec![row("A", 2000, "France", "Judo", "E1")]);
        assert!(weight_v_height(&d, &Selection::only("Swimming")).is_empty());
    }

    #[test]
    fn one_point_per_athlete_with_no_medal_sentinel() {
        let d = ds(vec![
            row("A", 2000, "France", "Judo", "E1").body(180.0, 81.0),
            row("A", 2004, "France", "Judo", "E1").gold(),
            row("B", 2000, "Italy", "Judo", "E1").gold().body(170.0, 66.0),
        ]);
        let pts = weight_v_height(&d, &Selection::Overall);
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0].medal, MedalLabel::NoMedal);
        assert_eq!(pts[0].medal.as_str(), "No Medal");
        assert_eq!(pts[0].height, Some(180.0));
        assert_eq!(pts[1].medal, MedalLabel::Gold);
    }

    #[test]
    fn sport_filter_applies_after_athlete_dedup() {
        let d = ds(vec![
            row("A", 2000, "France", "Judo", "E1"),
            row("A", 2004, "France", "Swimming", "100m"),
        ]);
        assert!(weight_v_height(&d, &Selection::only("Swimming")).is_empty());
        assert_eq!(weight_v_height(&d, &Selection::only("Judo")).len(), 1);
    }

    #[test]
    fn men_vs_women_is_an_outer_join() {
        let d = ds(vec![
            row("A", 1896, "Greece", "Athletics", "E1"),
            row("B", 1900, "France", "Tennis", "E2").sex(Sex::F),
            row("C", 1900, "France", "Tennis", "E2"),
            row("D", 2000, "France", "Judo", "E3").sex(Sex::F),
            row("D", 2004, "France", "Judo", "E3").sex(Sex::F),
        ]);
        let got = men_vs_women(&d);
        assert_eq!(
            got,
            vec![
                SexParticipation { year: 1896, male: 1, female: 0 },
                SexParticipation { year: 1900, male: 1, female: 1 },
                SexParticipation { year: 2000, male: 0, female: 1 },
            ]
        );
    }

    #[test]
    fn ages_drop_nulls_and_split_by_medal() {
        let d = ds(vec![
            row("A", 2000, "France", "Judo", "E1").age(22).gold(),
            row("B", 2000, "France", "Judo", "E2").age(30).medal(Medal::Bronze),
            row("C", 2000, "France", "Judo", "E3"),
            row("D", 2000, "France", "Judo", "E4").age(19),
        ]);
        let a = age_distributions(&d);
        assert_eq!(a.overall, vec![22, 30, 19]);
        assert_eq!(a.gold, vec![22]);
        assert!(a.silver.is_empty());
        assert_eq!(a.bronze, vec![30]);
    }

    #[test]
    fn ages_by_sport_keep_requested_order() {
        let d = ds(vec![
            row("A", 2000, "France", "Judo", "E1").age(22).gold(),
            row("B", 2000, "France", "Rowing", "E2").age(28).gold(),
            row("C", 2000, "France", "Rowing", "E2").age(31),
        ]);
        let got = age_by_sport(&d, &["Rowing", "Judo", "Polo"], Medal::Gold);
        assert_eq!(got[0], SportAges { sport: "Rowing".into(), ages: vec![28] });
        assert_eq!(got[1].ages, vec![22]);
        assert!(got[2].ages.is_empty());
        assert_eq!(FAMOUS_SPORTS.len(), 38);
    }
}
