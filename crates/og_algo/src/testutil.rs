//! Fixture builders shared by the unit tests of this crate.

use og_core::{Dataset, Medal, Record, Season, Sex};

pub(crate) struct Row(Record);

pub(crate) fn row(name: &str, year: i32, region: &str, sport: &str, event: &str) -> Row {
    Row(Record {
        name: name.to_string(),
        sex: Sex::M,
        age: None,
        height: None,
        weight: None,
        team: region.to_string(),
        noc: region.chars().take(3).collect::<String>().to_ascii_uppercase(),
        games: format!("{year} Summer"),
        year,
        season: Season::Summer,
        city: format!("City{year}"),
        sport: sport.to_string(),
        event: event.to_string(),
        medal: None,
        region: Some(region.to_string()),
    })
}

impl Row {
    pub(crate) fn medal(mut self, m: Medal) -> Self {
        self.0.medal = Some(m);
        self
    }
    pub(crate) fn gold(self) -> Self {
        self.medal(Medal::Gold)
    }
    pub(crate) fn sex(mut self, s: Sex) -> Self {
        self.0.sex = s;
        self
    }
    pub(crate) fn age(mut self, a: u16) -> Self {
        self.0.age = Some(a);
        self
    }
    pub(crate) fn body(mut self, height: f64, weight: f64) -> Self {
        self.0.height = Some(height);
        self.0.weight = Some(weight);
        self
    }
    pub(crate) fn no_region(mut self) -> Self {
        self.0.region = None;
        self
    }
    pub(crate) fn team(mut self, t: &str) -> Self {
        self.0.team = t.to_string();
        self
    }
    pub(crate) fn build(self) -> Record {
        self.0
    }
}

pub(crate) fn ds(rows: Vec<Row>) -> Dataset {
    rows.into_iter().map(Row::build).collect()
}
