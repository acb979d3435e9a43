//! Canonical JSON utilities (og_io)
//! - Objects: keys sorted lexicographically (UTF-8 codepoint order)
//! - Arrays: order preserved (views already emit stable orders)
//! - Output: compact, no trailing newline
//! - Atomic write: temp file in same dir + fsync(temp) + rename; fsync(dir) on Unix.
//!   If rename fails (cross-device), write the target directly.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::{IoError, IoResult};

/// Canonical JSON bytes of a serde_json `Value`.
pub fn to_canonical_json_bytes(v: &Value) -> IoResult<Vec<u8>> {
    let mut out = Vec::with_capacity(1024);
    write_canonical_value(v, &mut out)?;
    Ok(out)
}

/// Canonical JSON bytes of any serializable value.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> IoResult<Vec<u8>> {
    to_canonical_json_bytes(&serde_json::to_value(value)?)
}

/// Serialize `value` canonically and write it to `path` atomically.
pub fn write_canonical_file<T: Serialize>(path: &Path, value: &T) -> IoResult<()> {
    let bytes = to_canonical_bytes(value)?;
    write_atomic(path, &bytes).map_err(|e| IoError::Path(format!("{}: {e}", path.display())))
}

/// Write `bytes` to `path` through a same-directory temp file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let tmp = make_unique_tmp_path(path);
    let mut tf = OpenOptions::new().write(true).create_new(true).open(&tmp)?;
    tf.write_all(bytes)?;
    tf.sync_all()?;
    drop(tf);

    if fs::rename(&tmp, path).is_err() {
        let res: io::Result<()> = (|| {
            let mut f = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
            f.write_all(bytes)?;
            f.sync_all()
        })();
        let _ = fs::remove_file(&tmp);
        res?;
    }
    let _ = fsync_dir(parent);
    Ok(())
}

fn write_canonical_value(v: &Value, out: &mut Vec<u8>) -> IoResult<()> {
    match v {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(n) => out.extend_from_slice(n.to_string().as_bytes()),
        // serde_json produces the escaped string literal.
        Value::String(s) => serde_json::to_writer(&mut *out, s)?,
        Value::Array(arr) => {
            out.push(b'[');
            for (i, elem) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical_value(elem, out)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            out.push(b'{');
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (i, (k, val)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                serde_json::to_writer(&mut *out, k)?;
                out.push(b':');
                write_canonical_value(val, out)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

/// "<filename>.<pid>.<counter>.tmp" next to `target`.
fn make_unique_tmp_path(target: &Path) -> PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let pid = std::process::id();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let fname = target.file_name().and_then(|s| s.to_str()).unwrap_or("file");
    target.with_file_name(format!("{fname}.{pid}.{n}.tmp"))
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> io::Result<()> {
    OpenOptions::new().read(true).open(dir)?.sync_all()
}

#[cfg(not(unix))]
#[inline]
fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_are_sorted_arrays_preserved() {
        let v = json!({
            "b": 1,
            "a": { "y": 1, "x": 2 },
            "arr": [ {"k":2,"j":1}, 3, "z" ]
        });
        let s = String::from_utf8(to_canonical_json_bytes(&v).unwrap()).unwrap();
        assert_eq!(s, r#"{"a":{"x":2,"y":1},"arr":[{"j":1,"k":2},3,"z"],"b":1}"#);
    }

    #[test]
    fn strings_are_escaped_and_no_trailing_newline() {
        let bytes = to_canonical_json_bytes(&json!({"q": "C\u{f4}te d'Ivoire \"CIV\""})).unwrap();
        assert!(!bytes.ends_with(b"\n"));
        let back: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back["q"], "C\u{f4}te d'Ivoire \"CIV\"");
    }

    #[test]
    fn atomic_write_creates_parents_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("tally.json");
        write_canonical_file(&path, &json!({"z": 0, "a": [1, 2]})).unwrap();
        write_canonical_file(&path, &json!({"b": true})).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"b":true}"#);
        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
