//! render_json.rs
//! Report JSON renderer: `{ title, columns, rows, inputs }`.
//!
//! Key order inside objects is whatever `serde_json::Map` yields (sorted without
//! `preserve_order`); the canonical writer in og_io sorts again before hashing.

use serde_json::{Map as JsonMap, Value};

use crate::{InputEcho, ReportModel};

pub fn render_json(m: &ReportModel, echo: &InputEcho) -> Value {
    let mut root = obj();
    root.insert("title".into(), Value::String(m.title.clone()));
    root.insert("columns".into(), strings(&m.columns));
    root.insert("rows".into(), Value::Array(m.rows.iter().map(|r| strings(r)).collect()));
    root.insert("inputs".into(), inputs_json(echo));
    Value::Object(root)
}

/* ----------------------- sections ----------------------- */

fn inputs_json(e: &InputEcho) -> Value {
    let mut o = obj();
    o.insert("season".into(), Value::String(e.season.clone()));
    o.insert("records".into(), Value::from(e.records));
    // digests only when the dataset came from disk
    if let Some(h) = &e.athlete_events_sha256 {
        o.insert("athlete_events_sha256".into(), Value::String(h.clone()));
    }
    if let Some(h) = &e.noc_regions_sha256 {
        o.insert("noc_regions_sha256".into(), Value::String(h.clone()));
    }
    Value::Object(o)
}

fn strings(v: &[String]) -> Value {
    Value::Array(v.iter().cloned().map(Value::String).collect())
}

fn obj() -> JsonMap<String, Value> {
    JsonMap::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn table_and_inputs() {
        let m = ReportModel {
            title: "Overall Tally".into(),
            columns: vec!["Region".into(), "Total".into()],
            rows: vec![vec!["USA".into(), "3".into()]],
        };
        let echo = InputEcho {
            athlete_events_sha256: Some("0".repeat(64)),
            noc_regions_sha256: None,
            season: "summer".into(),
            records: 10,
        };
        assert_json_eq!(
            render_json(&m, &echo),
            json!({
                "title": "Overall Tally",
                "columns": ["Region", "Total"],
                "rows": [["USA", "3"]],
                "inputs": {
                    "season": "summer",
                    "records": 10,
                    "athlete_events_sha256": "0".repeat(64)
                }
            })
        );
    }

    #[test]
    fn empty_table_keeps_columns() {
        let m = ReportModel { title: "Men vs Women".into(), columns: vec!["Year".into()], rows: vec![] };
        let v = render_json(&m, &InputEcho::default());
        assert_eq!(v["rows"], json!([]));
        assert_eq!(v["columns"], json!(["Year"]));
    }
}
