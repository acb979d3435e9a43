// crates/og_io/src/manifest.rs
//
// Data manifest: a small JSON file naming the two CSV inputs.
//
// • Paths are relative to the manifest's directory (absolute paths are kept).
// • Offline-only: reject any path with a scheme ("://", "http:", "https:", "file:").
// • Digests (if provided) must be 64-lower-hex and are checked against the raw file bytes.
// • Both inputs must exist and be files.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::hasher;
use crate::loader::SeasonFilter;

/// External manifest accepted by the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataManifest {
    pub athlete_events_path: String,
    pub noc_regions_path: String,

    /// Which Games to keep; Summer when absent.
    #[serde(default)]
    pub season: Option<SeasonFilter>,

    #[serde(default)]
    pub inputs_sha256: Option<ManifestDigests>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestDigests {
    #[serde(default)]
    pub athlete_events_path: Option<String>,
    #[serde(default)]
    pub noc_regions_path: Option<String>,
}

/// Paths resolved against the manifest's directory.
#[derive(Debug, Clone)]
pub struct ResolvedManifest {
    pub athlete_events: PathBuf,
    pub noc_regions: PathBuf,
    pub season: SeasonFilter,
    pub digests: ManifestDigests,
}

#[derive(Debug)]
pub enum ManifestError {
    Empty(&'static str),
    UrlPath(&'static str, String),
    Io(&'static str, String),
    NotAFile(&'static str, String),
    /// Bad hex format (not a mismatch).
    DigestShape(&'static str, String),
    DigestMismatch(&'static str, String),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ManifestError::*;
        match self {
            Empty(k) => write!(f, "field must not be empty: {k}"),
            UrlPath(k, v) => write!(f, "path must be offline (no scheme) for {k}: {v}"),
            Io(k, v) => write!(f, "cannot access {k}: {v}"),
            NotAFile(k, v) => write!(f, "path is not a file for {k}: {v}"),
            DigestShape(k, v) => write!(f, "invalid sha256 format for {k}: {v}"),
            DigestMismatch(k, v) => write!(f, "sha256 mismatch for {k}: {v}"),
        }
    }
}
impl std::error::Error for ManifestError {}

// ---------- helpers (pure) ----------

#[inline]
pub fn has_any_scheme(s: &str) -> bool {
    let s = s.trim();
    s.contains("://") || s.starts_with("http:") || s.starts_with("https:") || s.starts_with("file:")
}

#[inline]
fn join_under(base: &Path, rel: &str) -> PathBuf {
    let p = Path::new(rel);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    }
}

fn check_path(label: &'static str, path: &str) -> Result<(), ManifestError> {
    if path.trim().is_empty() {
        return Err(ManifestError::Empty(label));
    }
    if has_any_scheme(path) {
        return Err(ManifestError::UrlPath(label, path.to_string()));
    }
    Ok(())
}

fn check_digest(label: &'static str, hex: Option<&String>) -> Result<(), ManifestError> {
    match hex {
        Some(h) if !hasher::is_lower_hex_64(h) => Err(ManifestError::DigestShape(label, h.clone())),
        _ => Ok(()),
    }
}

fn must_exist_file(label: &'static str, p: &Path) -> Result<(), ManifestError> {
    let md = fs::metadata(p).map_err(|e| ManifestError::Io(label, format!("{} ({e})", p.display())))?;
    if !md.is_file() {
        return Err(ManifestError::NotAFile(label, p.display().to_string()));
    }
    Ok(())
}

// ---------- validation / resolution ----------

/// Shape and offline checks. No I/O.
pub fn validate_manifest(man: &DataManifest) -> Result<(), ManifestError> {
    check_path("athlete_events_path", &man.athlete_events_path)?;
    check_path("noc_regions_path", &man.noc_regions_path)?;
    if let Some(d) = &man.inputs_sha256 {
        check_digest("athlete_events_path", d.athlete_events_path.as_ref())?;
        check_digest("noc_regions_path", d.noc_regions_path.as_ref())?;
    }
    Ok(())
}

/// Join paths under `base_dir` and require both inputs to be existing files.
pub fn resolve_paths(base_dir: &Path, man: &DataManifest) -> Result<ResolvedManifest, ManifestError> {
    let athlete_events = join_under(base_dir, &man.athlete_events_path);
    let noc_regions = join_under(base_dir, &man.noc_regions_path);
    must_exist_file("athlete_events_path", &athlete_events)?;
    must_exist_file("noc_regions_path", &noc_regions)?;

    Ok(ResolvedManifest {
        athlete_events,
        noc_regions,
        season: man.season.unwrap_or_default(),
        digests: man.inputs_sha256.clone().unwrap_or_default(),
    })
}

/// Compare a declared digest with the one computed from the file bytes.
pub fn verify_digest(label: &'static str, expected: Option<&str>, actual: &str) -> Result<(), ManifestError> {
    match expected {
        Some(want) if want != actual => Err(ManifestError::DigestMismatch(
            label,
            format!("expected={want} got={actual}"),
        )),
        _ => Ok(()),
    }
}

const MAX_MANIFEST_BYTES: u64 = 1024 * 1024;

/// Read, validate and resolve a manifest file. Digests are verified by the
/// loader once it has the file bytes in hand.
pub fn load_and_resolve_manifest(manifest_path: &Path) -> Result<ResolvedManifest, ManifestError> {
    let f = fs::File::open(manifest_path)
        .map_err(|e| ManifestError::Io("read", format!("{} ({e})", manifest_path.display())))?;
    let mut buf = Vec::new();
    f.take(MAX_MANIFEST_BYTES)
        .read_to_end(&mut buf)
        .map_err(|e| ManifestError::Io("read", format!("{} ({e})", manifest_path.display())))?;

    let man: DataManifest = serde_json::from_slice(&buf)
        .map_err(|e| ManifestError::Io("parse", format!("{} ({e})", manifest_path.display())))?;
    validate_manifest(&man)?;

    let base = manifest_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    resolve_paths(&base, &man)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn man(events: &str, regions: &str) -> DataManifest {
        DataManifest {
            athlete_events_path: events.into(),
            noc_regions_path: regions.into(),
            season: None,
            inputs_sha256: None,
        }
    }

    #[test]
    fn rejects_urls_and_empty_paths() {
        assert!(matches!(
            validate_manifest(&man("https://x/athlete_events.csv", "r.csv")),
            Err(ManifestError::UrlPath("athlete_events_path", _))
        ));
        assert!(matches!(
            validate_manifest(&man("e.csv", "file:///r.csv")),
            Err(ManifestError::UrlPath("noc_regions_path", _))
        ));
        assert!(matches!(validate_manifest(&man(" ", "r.csv")), Err(ManifestError::Empty(_))));
        assert!(validate_manifest(&man("data/e.csv", "data/r.csv")).is_ok());
    }

    #[test]
    fn digest_shape_is_checked() {
        let mut m = man("e.csv", "r.csv");
        m.inputs_sha256 = Some(ManifestDigests {
            athlete_events_path: Some("ABC".into()),
            noc_regions_path: None,
        });
        assert!(matches!(validate_manifest(&m), Err(ManifestError::DigestShape(..))));
    }

    #[test]
    fn resolves_relative_to_manifest_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/e.csv"), "x").unwrap();
        fs::write(dir.path().join("data/r.csv"), "x").unwrap();
        let mpath = dir.path().join("manifest.json");
        fs::write(
            &mpath,
            r#"{"athlete_events_path":"data/e.csv","noc_regions_path":"data/r.csv","season":"winter"}"#,
        )
        .unwrap();

        let r = load_and_resolve_manifest(&mpath).unwrap();
        assert_eq!(r.athlete_events, dir.path().join("data/e.csv"));
        assert_eq!(r.season, SeasonFilter::Winter);
        assert!(r.digests.athlete_events_path.is_none());
    }

    #[test]
    fn missing_input_and_unknown_fields_fail() {
        let dir = tempfile::tempdir().unwrap();
        let mpath = dir.path().join("manifest.json");
        fs::write(&mpath, r#"{"athlete_events_path":"e.csv","noc_regions_path":"r.csv"}"#).unwrap();
        assert!(matches!(load_and_resolve_manifest(&mpath), Err(ManifestError::Io("athlete_events_path", _))));

        fs::write(&mpath, r#"{"athlete_events_path":"e.csv","noc_regions_path":"r.csv","url":"x"}"#).unwrap();
        assert!(matches!(load_and_resolve_manifest(&mpath), Err(ManifestError::Io("parse", _))));
    }

    #[test]
    fn digest_mismatch_reports_both_values() {
        assert!(verify_digest("noc_regions_path", None, "aa").is_ok());
        assert!(verify_digest("noc_regions_path", Some("aa"), "aa").is_ok());
        let err = verify_digest("noc_regions_path", Some("aa"), "bb").unwrap_err();
        assert_eq!(err.to_string(), "sha256 mismatch for noc_regions_path: expected=aa got=bb");
    }
}
