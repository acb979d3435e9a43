// crates/og_cli/src/main.rs
//
// Exit codes, typed error mapping, logging init, and the single run path:
// load once → run one view → write artifacts → optional reports → stdout table.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
    pub const RENDER: i32 = 5;
}

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args};
use og_io::{canonical_json, IoError, LoadOptions, LoadedDataset};
use og_pipeline::{Dashboard, DashboardConfig, Query, View};
use og_report::{InputEcho, ReportError, ReportModel};
use serde::Serialize;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// CSV shape / manifest / digest expectation failures
    Validation(String),
    /// Read/write/path errors
    Io(String),
    /// Report build or output
    Render(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "validation: {m}"),
            MainError::Io(m) => write!(f, "io: {m}"),
            MainError::Render(m) => write!(f, "render: {m}"),
        }
    }
}

/// Artifact written as `<view>.json`.
#[derive(Serialize)]
struct Artifact<'a> {
    query: &'a Query,
    title: String,
    inputs: &'a InputEcho,
    result: &'a View,
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("olympics: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };
    init_logging(&args);

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("olympics: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

/// `warn` by default, `debug` with --verbose, `error` with --quiet; RUST_LOG wins.
fn init_logging(args: &Args) {
    let level = if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::init_from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level));
}

fn run_once(args: &Args) -> Result<(), MainError> {
    // 1) Load (schema + season + join)
    let loaded = load(args)?;
    let echo = InputEcho {
        athlete_events_sha256: Some(loaded.digests.athlete_events_sha256.clone()),
        noc_regions_sha256: Some(loaded.digests.noc_regions_sha256.clone()),
        season: loaded.season.as_str().to_string(),
        records: loaded.dataset.len(),
    };
    if !args.quiet {
        eprintln!(
            "load: {} records ({} rows read, {} other season, {} duplicates dropped)",
            echo.records, loaded.stats.rows_read, loaded.stats.rows_other_season, loaded.stats.duplicates_dropped
        );
    }

    let Some(query) = args.command.to_query() else {
        if !args.quiet {
            eprintln!("validate: inputs OK");
        }
        return Ok(());
    };

    // 2) Run the view
    let mut dashboard = Dashboard::from_loaded(loaded, DashboardConfig::default());
    let view = dashboard.run(&query);
    log::info!("{}: {} rows", query.name(), view.row_count());

    // 3) Canonical artifact
    fs::create_dir_all(&args.out)
        .map_err(|e| MainError::Io(format!("mkdir {}: {e}", args.out.to_string_lossy())))?;
    let artifact = Artifact { query: &query, title: query.title(), inputs: &echo, result: &view };
    let name = format!("{}.json", query.name());
    canonical_json::write_canonical_file(&args.out.join(&name), &artifact)
        .map_err(|e| MainError::Io(format!("write {name}: {e}")))?;

    // 4) Reports (read-only over the view)
    let model = og_report::build_model(&view).map_err(map_report_err)?.with_title(query.title());
    maybe_render_reports(args, &model, &echo, &args.out)?;

    if !args.quiet {
        print!("{}", og_report::render_text(&model));
        eprintln!("run: artifacts written to {}", args.out.to_string_lossy());
    }
    Ok(())
}

fn load(args: &Args) -> Result<LoadedDataset, MainError> {
    let loaded = match (&args.manifest, &args.events, &args.regions) {
        (Some(manifest), _, _) => og_io::load_from_manifest(manifest),
        (None, Some(events), Some(regions)) => {
            let opts = LoadOptions { season: args.season.unwrap_or_default(), ..LoadOptions::default() };
            og_io::load_dataset(events, regions, &opts)
        }
        _ => return Err(MainError::Validation("no inputs: pass --manifest or --events/--regions".into())),
    };
    loaded.map_err(map_io_err)
}

fn maybe_render_reports(args: &Args, model: &ReportModel, echo: &InputEcho, out_dir: &Path) -> Result<(), MainError> {
    for kind in &args.render {
        match kind.as_str() {
            "json" => render_json_report(model, echo, out_dir)?,
            "html" => render_html_report(model, echo, out_dir)?,
            other => return Err(MainError::Render(format!("unknown renderer: {other}"))),
        }
    }
    Ok(())
}

#[cfg(feature = "report-json")]
fn render_json_report(model: &ReportModel, echo: &InputEcho, out_dir: &Path) -> Result<(), MainError> {
    let value = og_report::render_json(model, echo);
    canonical_json::write_canonical_file(&out_dir.join("report.json"), &value)
        .map_err(|e| MainError::Io(format!("write report.json: {e}")))
}

#[cfg(not(feature = "report-json"))]
fn render_json_report(_: &ReportModel, _: &InputEcho, _: &Path) -> Result<(), MainError> {
    Err(MainError::Render("built without the report-json feature".into()))
}

#[cfg(feature = "report-html")]
fn render_html_report(model: &ReportModel, echo: &InputEcho, out_dir: &Path) -> Result<(), MainError> {
    let html = og_report::render_html(model, echo).map_err(map_report_err)?;
    canonical_json::write_atomic(&out_dir.join("report.html"), html.as_bytes())
        .map_err(|e| MainError::Io(format!("write report.html: {e}")))
}

#[cfg(not(feature = "report-html"))]
fn render_html_report(_: &ReportModel, _: &InputEcho, _: &Path) -> Result<(), MainError> {
    Err(MainError::Render("built without the report-html feature".into()))
}

/// Map our typed errors to the exit-code table.
fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Io(_) => IO,
        MainError::Render(_) => RENDER,
    }
}

/// Translate og_io::IoError into MainError buckets.
fn map_io_err(e: IoError) -> MainError {
    match e {
        IoError::Csv { row, msg } => MainError::Validation(format!("csv row {row}: {msg}")),
        IoError::Json { pointer, msg } => MainError::Validation(format!("json {pointer}: {msg}")),
        IoError::Manifest(m) => MainError::Validation(format!("manifest: {m}")),
        IoError::Invalid(m) => MainError::Validation(m),
        IoError::Path(m) => MainError::Io(format!("path: {m}")),
        IoError::Hash(m) => MainError::Io(format!("hash: {m}")),
    }
}

fn map_report_err(e: ReportError) -> MainError {
    match e {
        ReportError::Inconsistent(m) => MainError::Render(format!("inconsistent: {m}")),
    }
}
