// crates/og_report/src/render_html.rs
//
// Deterministic, offline HTML renderer. One self-contained page per view:
// inline style, no scripts, no external assets. Every text node is escaped.

use std::fmt::Write as _;

use crate::{InputEcho, ReportError, ReportModel};

// ------------------------- HTML builder -------------------------

struct HtmlBuilder {
    buf: String,
}

impl HtmlBuilder {
    fn new() -> Self {
        Self { buf: String::with_capacity(16 * 1024) }
    }

    fn start(&mut self, title: &str) {
        let _ = write!(
            self.buf,
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
             <title>{}</title>\
             <style>\
             body{{font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,Arial,sans-serif;margin:24px;}}\
             h1{{margin:0.2em 0;}}\
             .muted{{opacity:0.8}}\
             table{{border-collapse:collapse}}\
             td,th{{padding:4px 8px;border-bottom:1px solid #ddd;text-align:left}}\
             td.num{{text-align:right}}\
             </style></head><body><h1>{}</h1>",
            esc(title),
            esc(title)
        );
    }

    fn inputs(&mut self, echo: &InputEcho) {
        let _ = write!(
            self.buf,
            "<p class=\"muted\">Season: {} &middot; Records: {}",
            esc(&echo.season),
            echo.records
        );
        if let Some(h) = &echo.athlete_events_sha256 {
            let _ = write!(self.buf, "<br>athlete_events sha256: <code>{}</code>", esc(h));
        }
        if let Some(h) = &echo.noc_regions_sha256 {
            let _ = write!(self.buf, "<br>noc_regions sha256: <code>{}</code>", esc(h));
        }
        self.buf.push_str("</p>");
    }

    fn table(&mut self, columns: &[String], rows: &[Vec<String>]) {
        self.buf.push_str("<table><thead><tr>");
        for c in columns {
            let _ = write!(self.buf, "<th>{}</th>", esc(c));
        }
        self.buf.push_str("</tr></thead><tbody>");
        for row in rows {
            self.buf.push_str("<tr>");
            for cell in row {
                if is_numeric(cell) {
                    let _ = write!(self.buf, "<td class=\"num\">{}</td>", esc(cell));
                } else {
                    let _ = write!(self.buf, "<td>{}</td>", esc(cell));
                }
            }
            self.buf.push_str("</tr>");
        }
        self.buf.push_str("</tbody></table>");
    }

    fn finish(mut self) -> String {
        self.buf.push_str("</body></html>");
        self.buf
    }
}

// ------------------------- entry point -------------------------

/// Render `model` as a standalone HTML page.
pub fn render_html(model: &ReportModel, echo: &InputEcho) -> Result<String, ReportError> {
    if model.rows.iter().any(|r| r.len() != model.columns.len()) {
        return Err(ReportError::Inconsistent("row width differs from column count"));
    }
    let mut h = HtmlBuilder::new();
    h.start(&model.title);
    h.inputs(echo);
    h.table(&model.columns, &model.rows);
    Ok(h.finish())
}

// ------------------------- formatting helpers -------------------------

/// Escape text for HTML (minimal, deterministic).
fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == '.')
}
