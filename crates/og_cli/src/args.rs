// crates/og_cli/src/args.rs
//
// Offline CLI argument surface (types + validation).
//
// Rules:
// - No networked paths (reject any scheme:// like http/https/file)
// - Exactly one of: --manifest  XOR  (--events + --regions)
// - --season only applies to explicit mode; a manifest carries its own
// - Output: --out dir, --render [json|html]*
// - One subcommand per dashboard view, plus `validate` (load only)

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use og_core::{Dimension, Medal, RegionSelection, SportSelection, YearSelection};
use og_io::SeasonFilter;
use og_pipeline::Query;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "olympics",
    disable_help_subcommand = true,
    about = "Offline Olympics dashboard: medal tallies, trends, heatmaps and athlete statistics"
)]
pub struct Args {
    // --- Mode selection ---
    /// Data manifest JSON (mutually exclusive with --events/--regions/--season).
    #[arg(long, conflicts_with_all = ["events", "regions", "season"])]
    pub manifest: Option<PathBuf>,

    /// athlete_events.csv path.
    #[arg(long)]
    pub events: Option<PathBuf>,
    /// noc_regions.csv path.
    #[arg(long)]
    pub regions: Option<PathBuf>,
    /// Season filter applied while loading: summer (default), winter or all.
    #[arg(long)]
    pub season: Option<SeasonFilter>,

    // --- Output & rendering ---
    /// Output directory (default: current directory).
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
    /// Extra report file(s) to emit: json, html (repeat or comma-separate).
    #[arg(long, value_parser = ["json", "html"], value_delimiter = ',')]
    pub render: Vec<String>,

    /// Only errors on stderr; no table on stdout.
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Debug-level logging.
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum Command {
    /// Medal tally for a year and/or country ("Overall" for all).
    Tally {
        #[arg(long, default_value = "Overall")]
        year: YearSelection,
        #[arg(long, default_value = "Overall")]
        country: RegionSelection,
    },
    /// Medals per edition for one country.
    CountryTrend {
        #[arg(long)]
        country: String,
    },
    /// Distinct values of a column per edition.
    OverTime {
        #[arg(long, default_value = "region")]
        dimension: Dimension,
    },
    /// Top 15 athletes by medal count.
    TopAthletes {
        #[arg(long, default_value = "Overall")]
        sport: SportSelection,
    },
    /// Top 10 athletes of one country.
    TopCountryAthletes {
        #[arg(long)]
        country: String,
    },
    /// Sport x year medal counts for one country.
    CountryHeatmap {
        #[arg(long)]
        country: String,
    },
    /// Sport x year distinct event counts.
    EventsHeatmap,
    /// Height and weight of distinct athletes.
    HeightWeight {
        #[arg(long, default_value = "Overall")]
        sport: SportSelection,
    },
    /// Male and female participants per edition.
    MenVsWomen,
    /// Age distributions overall and per medal.
    Ages,
    /// Ages of medalists per sport (repeat --sport; none means the default list).
    AgesBySport {
        #[arg(long, default_value = "gold")]
        medal: Medal,
        #[arg(long = "sport")]
        sports: Vec<String>,
    },
    /// Headline counts.
    Overview,
    /// Year, country and sport picker values.
    Selectors,
    /// Load and check inputs only.
    Validate,
}

impl Command {
    /// The dashboard query this subcommand runs; `None` for `validate`.
    pub fn to_query(&self) -> Option<Query> {
        let q = match self {
            Command::Tally { year, country } => Query::MedalTally { year: year.clone(), country: country.clone() },
            Command::CountryTrend { country } => Query::CountryTrend { country: country.clone() },
            Command::OverTime { dimension } => Query::OverTime { dimension: *dimension },
            Command::TopAthletes { sport } => Query::TopAthletes { sport: sport.clone() },
            Command::TopCountryAthletes { country } => Query::TopCountryAthletes { country: country.clone() },
            Command::CountryHeatmap { country } => Query::CountryHeatmap { country: country.clone() },
            Command::EventsHeatmap => Query::EventsHeatmap,
            Command::HeightWeight { sport } => Query::HeightWeight { sport: sport.clone() },
            Command::MenVsWomen => Query::MenVsWomen,
            Command::Ages => Query::Ages,
            Command::AgesBySport { medal, sports } => Query::AgesBySport { sports: sports.clone(), medal: *medal },
            Command::Overview => Query::Overview,
            Command::Selectors => Query::Selectors,
            Command::Validate => return None,
        };
        Some(q)
    }
}

/// Errors surfaced by argument validation.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug)]
pub enum CliError {
    Missing(&'static str),
    NonLocalPath(String),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            Missing(s) => write!(f, "missing required flag: {s}"),
            NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
            NotFound(p) => write!(f, "file not found: {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Reject any explicit URI scheme (e.g., http://, https://, file://).
#[inline]
fn has_scheme(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("http:") || lower.starts_with("https:") || lower.starts_with("file:")
}

/// Ensure a provided path string is local (no scheme); existence is checked later.
#[inline]
fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    if let Some(s) = p.to_str() {
        if has_scheme(s) {
            return Err(CliError::NonLocalPath(s.to_string()));
        }
    }
    Ok(())
}

fn iter_all_paths(args: &Args) -> impl Iterator<Item = &Path> {
    [args.manifest.as_deref(), args.events.as_deref(), args.regions.as_deref(), Some(args.out.as_path())]
        .into_iter()
        .flatten()
}

/// Entry point used by main.rs
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

/// Scheme/mode/existence checks, then path normalization.
pub fn validate(mut args: Args) -> Result<Args, CliError> {
    for p in iter_all_paths(&args) {
        ensure_local_path(p)?;
    }

    if let Some(m) = args.manifest.take() {
        ensure_local_exists(&m, "--manifest")?;
        args.manifest = Some(normalize_path(&m));
    } else {
        let events = args.events.take().ok_or(CliError::Missing("--events (or --manifest)"))?;
        let regions = args.regions.take().ok_or(CliError::Missing("--regions (or --manifest)"))?;
        ensure_local_exists(&events, "--events")?;
        ensure_local_exists(&regions, "--regions")?;
        args.events = Some(normalize_path(&events));
        args.regions = Some(normalize_path(&regions));
    }

    args.out = normalize_path(&args.out);
    Ok(args)
}

/// Ensure a path is local (no scheme) and exists as a regular file.
fn ensure_local_exists(p: &Path, label: &'static str) -> Result<(), CliError> {
    ensure_local_path(p)?;
    let meta = fs::metadata(p).map_err(|_| CliError::NotFound(format!("{label} {}", p.display())))?;
    if !meta.is_file() {
        return Err(CliError::NotFound(format!("{label} {}", p.display())));
    }
    Ok(())
}

/// Best-effort normalization to an absolute path.
/// If canonicalize fails (e.g., path doesn't exist yet), produce an absolute path relative to CWD.
fn normalize_path(p: &Path) -> PathBuf {
    fs::canonicalize(p).unwrap_or_else(|_| {
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join(p)
        }
    })
}
