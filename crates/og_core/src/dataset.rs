//! Immutable dataset handle and the two identity keys used for deduplication.

use crate::record::{Medal, Record};

/// The canonical dataset: every joined, normalized record, read-only after
/// construction. Aggregations borrow it and build new tables.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Identity of one medal-winning result: a team event awards one medal to
/// many rows, all sharing this key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MedalEventKey<'a> {
    pub team: &'a str,
    pub noc: &'a str,
    pub games: &'a str,
    pub year: i32,
    pub city: &'a str,
    pub sport: &'a str,
    pub event: &'a str,
    pub medal: Option<Medal>,
}

impl<'a> MedalEventKey<'a> {
    pub fn of(r: &'a Record) -> Self {
        Self {
            team: &r.team,
            noc: &r.noc,
            games: &r.games,
            year: r.year,
            city: &r.city,
            sport: &r.sport,
            event: &r.event,
            medal: r.medal,
        }
    }
}

/// De facto person identity. Two people sharing a name and region collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AthleteKey<'a> {
    pub name: &'a str,
    pub region: Option<&'a str>,
}

impl<'a> AthleteKey<'a> {
    pub fn of(r: &'a Record) -> Self {
        Self { name: &r.name, region: r.region.as_deref() }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::record::{Season, Sex};

    pub(crate) fn record(
        name: &str,
        year: i32,
        region: &str,
        sport: &str,
        event: &str,
        medal: Option<Medal>,
    ) -> Record {
        Record {
            name: name.to_string(),
            sex: Sex::M,
            age: Some(25),
            height: None,
            weight: None,
            team: region.to_string(),
            noc: "FRA".to_string(),
            games: format!("{year} Summer"),
            year,
            season: Season::Summer,
            city: "Sydney".to_string(),
            sport: sport.to_string(),
            event: event.to_string(),
            medal,
            region: Some(region.to_string()),
        }
    }

    #[test]
    fn team_mates_share_medal_event_key() {
        let a = record("A", 2000, "France", "Judo", "E1", Some(Medal::Gold));
        let b = record("B", 2000, "France", "Judo", "E1", Some(Medal::Gold));
        assert_eq!(MedalEventKey::of(&a), MedalEventKey::of(&b));
        assert_ne!(AthleteKey::of(&a), AthleteKey::of(&b));
    }

    #[test]
    fn dataset_is_read_through_slices() {
        let ds: Dataset = vec![record("A", 2000, "France", "Judo", "E1", None)].into_iter().collect();
        assert_eq!(ds.len(), 1);
        assert!(!ds.is_empty());
        assert_eq!((&ds).into_iter().count(), 1);
    }
}
