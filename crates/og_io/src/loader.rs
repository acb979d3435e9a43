//! Loader: read the two local CSV files, keep one season, join regions on NOC,
//! drop exact duplicate rows, and return the immutable `Dataset` together with
//! the input digests. No network I/O.
//!
//! Contract:
//! - `athlete_events.csv` needs the columns `ID, Name, Sex, Age, Height, Weight,
//!   Team, NOC, Games, Year, Season, City, Sport, Event, Medal`.
//! - `noc_regions.csv` needs `NOC, region` (`notes` is ignored).
//! - `NA` or an empty field means missing. Missing values in required columns
//!   are errors carrying the CSV line number.
//! - A NOC without a region row (or with an empty region) joins to `None`.
//! - Row order of the source file is preserved.

#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use og_core::{Dataset, Medal, Record, Season, Sex};
use serde::{Deserialize, Serialize};

use crate::{hasher, manifest, IoError, IoResult};

// ----------------------------- Options -----------------------------

/// Which Games editions to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonFilter {
    #[default]
    Summer,
    Winter,
    All,
}

impl SeasonFilter {
    pub fn admits(&self, s: Season) -> bool {
        match self {
            SeasonFilter::Summer => s == Season::Summer,
            SeasonFilter::Winter => s == Season::Winter,
            SeasonFilter::All => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonFilter::Summer => "summer",
            SeasonFilter::Winter => "winter",
            SeasonFilter::All => "all",
        }
    }
}

impl FromStr for SeasonFilter {
    type Err = IoError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summer" => Ok(SeasonFilter::Summer),
            "winter" => Ok(SeasonFilter::Winter),
            "all" => Ok(SeasonFilter::All),
            other => Err(IoError::Invalid(format!("unknown season filter: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub season: SeasonFilter,
    /// Drop rows identical in every raw column (ID included).
    pub drop_exact_duplicates: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { season: SeasonFilter::Summer, drop_exact_duplicates: true }
    }
}

// ----------------------------- Results -----------------------------

/// SHA-256 of the raw input files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDigests {
    pub athlete_events_sha256: String,
    pub noc_regions_sha256: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    pub rows_read: u64,
    pub rows_other_season: u64,
    pub duplicates_dropped: u64,
    pub unresolved_noc_rows: u64,
}

#[derive(Debug)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub digests: InputDigests,
    pub stats: LoadStats,
    /// Season filter the dataset was loaded with.
    pub season: SeasonFilter,
}

// ----------------------------- Orchestration -----------------------------

/// Load both CSV files from disk.
pub fn load_dataset(events: &Path, regions: &Path, opts: &LoadOptions) -> IoResult<LoadedDataset> {
    let events_bytes = read_file(events)?;
    let regions_bytes = read_file(regions)?;
    log::info!(
        "loading {} ({} bytes) and {} ({} bytes)",
        events.display(),
        events_bytes.len(),
        regions.display(),
        regions_bytes.len()
    );

    let digests = InputDigests {
        athlete_events_sha256: hasher::try_sha256_hex(&events_bytes)?,
        noc_regions_sha256: hasher::try_sha256_hex(&regions_bytes)?,
    };

    let region_map = read_regions(regions_bytes.as_slice())?;
    let (records, stats) = read_events(events_bytes.as_slice(), &region_map, opts)?;
    log::info!(
        "loaded {} records ({} read, {} other season, {} duplicates dropped)",
        records.len(),
        stats.rows_read,
        stats.rows_other_season,
        stats.duplicates_dropped
    );

    Ok(LoadedDataset { dataset: Dataset::new(records), digests, stats, season: opts.season })
}

/// Load through a data manifest: resolve paths, use its season, verify digests.
pub fn load_from_manifest(manifest_path: &Path) -> IoResult<LoadedDataset> {
    let resolved = manifest::load_and_resolve_manifest(manifest_path)?;
    let opts = LoadOptions { season: resolved.season, ..LoadOptions::default() };
    let loaded = load_dataset(&resolved.athlete_events, &resolved.noc_regions, &opts)?;

    manifest::verify_digest(
        "athlete_events_path",
        resolved.digests.athlete_events_path.as_deref(),
        &loaded.digests.athlete_events_sha256,
    )?;
    manifest::verify_digest(
        "noc_regions_path",
        resolved.digests.noc_regions_path.as_deref(),
        &loaded.digests.noc_regions_sha256,
    )?;
    Ok(loaded)
}

fn read_file(path: &Path) -> IoResult<Vec<u8>> {
    fs::read(path).map_err(|e| IoError::Path(format!("{}: {e}", path.display())))
}

// ----------------------------- CSV parsing -----------------------------

/// NOC → region. Rows with a missing region map to `None`.
pub fn read_regions<R: std::io::Read>(input: R) -> IoResult<BTreeMap<String, Option<String>>> {
    let mut rdr = ReaderBuilder::new().from_reader(input);
    let headers = rdr.headers()?.clone();
    let noc = column(&headers, "noc_regions", "NOC")?;
    let region = column(&headers, "noc_regions", "region")?;

    let mut out = BTreeMap::new();
    for result in rdr.records() {
        let rec = result?;
        let line = line_of(&rec);
        let code = field(&rec, noc).ok_or_else(|| csv_err(line, "missing NOC"))?;
        out.entry(code.to_string())
            .or_insert_with(|| field(&rec, region).map(str::to_string));
    }
    log::debug!("read {} NOC region rows", out.len());
    Ok(out)
}

/// Column positions in `athlete_events.csv`.
struct EventColumns {
    name: usize,
    sex: usize,
    age: usize,
    height: usize,
    weight: usize,
    team: usize,
    noc: usize,
    games: usize,
    year: usize,
    season: usize,
    city: usize,
    sport: usize,
    event: usize,
    medal: usize,
}

impl EventColumns {
    fn from_headers(h: &StringRecord) -> IoResult<Self> {
        const FILE: &str = "athlete_events";
        column(h, FILE, "ID")?;
        Ok(Self {
            name: column(h, FILE, "Name")?,
            sex: column(h, FILE, "Sex")?,
            age: column(h, FILE, "Age")?,
            height: column(h, FILE, "Height")?,
            weight: column(h, FILE, "Weight")?,
            team: column(h, FILE, "Team")?,
            noc: column(h, FILE, "NOC")?,
            games: column(h, FILE, "Games")?,
            year: column(h, FILE, "Year")?,
            season: column(h, FILE, "Season")?,
            city: column(h, FILE, "City")?,
            sport: column(h, FILE, "Sport")?,
            event: column(h, FILE, "Event")?,
            medal: column(h, FILE, "Medal")?,
        })
    }
}

/// Parse athlete-event rows, keep `opts.season`, join regions.
pub fn read_events<R: std::io::Read>(
    input: R,
    regions: &BTreeMap<String, Option<String>>,
    opts: &LoadOptions,
) -> IoResult<(Vec<Record>, LoadStats)> {
    let mut rdr = ReaderBuilder::new().from_reader(input);
    let cols = EventColumns::from_headers(rdr.headers()?)?;

    let mut stats = LoadStats::default();
    let mut seen: BTreeSet<Vec<String>> = BTreeSet::new();
    let mut unresolved: BTreeSet<String> = BTreeSet::new();
    let mut out = Vec::new();

    for result in rdr.records() {
        let rec = result?;
        stats.rows_read += 1;
        let line = line_of(&rec);

        let season: Season = parse_required(&rec, cols.season, line, "Season")?;
        if !opts.season.admits(season) {
            stats.rows_other_season += 1;
            continue;
        }
        if opts.drop_exact_duplicates && !seen.insert(rec.iter().map(str::to_string).collect()) {
            stats.duplicates_dropped += 1;
            continue;
        }

        let noc = required(&rec, cols.noc, line, "NOC")?.to_string();
        let region = regions.get(&noc).cloned().flatten();
        if region.is_none() {
            stats.unresolved_noc_rows += 1;
            unresolved.insert(noc.clone());
        }

        out.push(Record {
            name: required(&rec, cols.name, line, "Name")?.to_string(),
            sex: parse_required::<Sex>(&rec, cols.sex, line, "Sex")?,
            age: parse_age(&rec, cols.age, line)?,
            height: parse_optional::<f64>(&rec, cols.height, line, "Height")?,
            weight: parse_optional::<f64>(&rec, cols.weight, line, "Weight")?,
            team: required(&rec, cols.team, line, "Team")?.to_string(),
            noc,
            games: required(&rec, cols.games, line, "Games")?.to_string(),
            year: parse_required::<i32>(&rec, cols.year, line, "Year")?,
            season,
            city: required(&rec, cols.city, line, "City")?.to_string(),
            sport: required(&rec, cols.sport, line, "Sport")?.to_string(),
            event: required(&rec, cols.event, line, "Event")?.to_string(),
            medal: parse_optional::<Medal>(&rec, cols.medal, line, "Medal")?,
            region,
        });
    }

    if !unresolved.is_empty() {
        log::warn!(
            "{} rows across {} NOC codes have no region: {}",
            stats.unresolved_noc_rows,
            unresolved.len(),
            unresolved.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
        );
    }
    if stats.duplicates_dropped > 0 {
        log::debug!("dropped {} exact duplicate rows", stats.duplicates_dropped);
    }
    Ok((out, stats))
}

// ----------------------------- Field helpers -----------------------------

fn column(headers: &StringRecord, file: &str, name: &str) -> IoResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| IoError::Invalid(format!("{file}: missing column {name}")))
}

fn line_of(rec: &StringRecord) -> u64 {
    rec.position().map(|p| p.line()).unwrap_or(0)
}

fn csv_err(row: u64, msg: impl Into<String>) -> IoError {
    IoError::Csv { row, msg: msg.into() }
}

/// Trimmed field; `None` when absent, empty or `NA`.
fn field(rec: &StringRecord, idx: usize) -> Option<&str> {
    match rec.get(idx).map(str::trim) {
        None | Some("") | Some("NA") => None,
        Some(v) => Some(v),
    }
}

fn required<'r>(rec: &'r StringRecord, idx: usize, line: u64, name: &str) -> IoResult<&'r str> {
    field(rec, idx).ok_or_else(|| csv_err(line, format!("missing {name}")))
}

fn parse_required<T>(rec: &StringRecord, idx: usize, line: u64, name: &str) -> IoResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = required(rec, idx, line, name)?;
    raw.parse::<T>().map_err(|e| csv_err(line, format!("{name} {raw:?}: {e}")))
}

fn parse_optional<T>(rec: &StringRecord, idx: usize, line: u64, name: &str) -> IoResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    field(rec, idx)
        .map(|raw| raw.parse::<T>().map_err(|e| csv_err(line, format!("{name} {raw:?}: {e}"))))
        .transpose()
}

/// Ages are whole years but some exports write them as floats ("24.0").
fn parse_age(rec: &StringRecord, idx: usize, line: u64) -> IoResult<Option<u16>> {
    let Some(v) = parse_optional::<f64>(rec, idx, line, "Age")? else {
        return Ok(None);
    };
    if !v.is_finite() || v < 0.0 || v > f64::from(u16::MAX) {
        return Err(csv_err(line, format!("Age out of range: {v}")));
    }
    Ok(Some(v.round() as u16))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal\n";

    fn regions() -> BTreeMap<String, Option<String>> {
        read_regions("NOC,region,notes\nFRA,France,\nSIN,Singapore,\nROT,NA,Refugee Olympic Team\n".as_bytes())
            .unwrap()
    }

    #[test]
    fn regions_treat_na_as_missing() {
        let r = regions();
        assert_eq!(r.get("FRA"), Some(&Some("France".to_string())));
        assert_eq!(r.get("ROT"), Some(&None));
    }

    #[test]
    fn parses_rows_and_joins_regions() {
        let csv = format!(
            "{HEADER}\
1,A Dijiang,M,24,180,80,China,CHN,1992 Summer,1992,Summer,Barcelona,Basketball,Basketball Men's Basketball,NA\n\
2,Jean Dupont,M,NA,NA,NA,France,FRA,2000 Summer,2000,Summer,Sydney,Judo,Judo Men's Lightweight,Gold\n\
3,Ann Lee,F,22.0,165.5,NA,Singapore-1,SGP,2008 Summer,2008,Summer,Beijing,Table Tennis,Table Tennis Women's Team,Silver\n"
        );
        let (rows, stats) = read_events(csv.as_bytes(), &regions(), &LoadOptions::default()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].region, None);
        assert_eq!(rows[0].age, Some(24));
        assert_eq!(rows[0].medal, None);
        assert_eq!(rows[1].region.as_deref(), Some("France"));
        assert_eq!(rows[1].age, None);
        assert_eq!(rows[1].medal, Some(Medal::Gold));
        assert_eq!(rows[2].age, Some(22));
        assert_eq!(rows[2].height, Some(165.5));
        assert_eq!(rows[2].weight, None);
        assert_eq!(stats.unresolved_noc_rows, 2);
    }

    #[test]
    fn keeps_only_the_requested_season() {
        let csv = format!(
            "{HEADER}\
1,A,M,NA,NA,NA,France,FRA,2000 Summer,2000,Summer,Sydney,Judo,J1,NA\n\
2,B,F,NA,NA,NA,France,FRA,2002 Winter,2002,Winter,Salt Lake City,Biathlon,B1,Gold\n"
        );
        let (summer, stats) = read_events(csv.as_bytes(), &regions(), &LoadOptions::default()).unwrap();
        assert_eq!(summer.len(), 1);
        assert_eq!(stats.rows_other_season, 1);

        let winter = LoadOptions { season: SeasonFilter::Winter, ..LoadOptions::default() };
        let (rows, _) = read_events(csv.as_bytes(), &regions(), &winter).unwrap();
        assert_eq!(rows[0].sport, "Biathlon");

        let all = LoadOptions { season: SeasonFilter::All, ..LoadOptions::default() };
        assert_eq!(read_events(csv.as_bytes(), &regions(), &all).unwrap().0.len(), 2);
    }

    #[test]
    fn exact_duplicates_are_dropped_once() {
        let line = "7,A,M,NA,NA,NA,France,FRA,2000 Summer,2000,Summer,Sydney,Judo,J1,NA\n";
        let csv = format!("{HEADER}{line}{line}8,A,M,NA,NA,NA,France,FRA,2000 Summer,2000,Summer,Sydney,Judo,J1,NA\n");
        let (rows, stats) = read_events(csv.as_bytes(), &regions(), &LoadOptions::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(stats.duplicates_dropped, 1);

        let keep = LoadOptions { drop_exact_duplicates: false, ..LoadOptions::default() };
        assert_eq!(read_events(csv.as_bytes(), &regions(), &keep).unwrap().0.len(), 3);
    }

    #[test]
    fn bad_values_report_their_row() {
        let csv = format!(
            "{HEADER}\
1,A,M,NA,NA,NA,France,FRA,2000 Summer,2000,Summer,Sydney,Judo,J1,NA\n\
2,B,X,NA,NA,NA,France,FRA,2000 Summer,2000,Summer,Sydney,Judo,J1,NA\n"
        );
        match read_events(csv.as_bytes(), &regions(), &LoadOptions::default()) {
            Err(IoError::Csv { row, msg }) => {
                assert_eq!(row, 3);
                assert!(msg.contains("Sex"), "{msg}");
            }
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_invalid() {
        let csv = "ID,Name,Sex\n1,A,M\n";
        let err = read_events(csv.as_bytes(), &regions(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::Invalid(m) if m.contains("missing column Age")));
    }

    #[test]
    fn season_filter_parses_case_insensitively() {
        assert_eq!("Winter".parse::<SeasonFilter>().unwrap(), SeasonFilter::Winter);
        assert_eq!(" ALL ".parse::<SeasonFilter>().unwrap(), SeasonFilter::All);
        assert!("spring".parse::<SeasonFilter>().is_err());
    }
}
