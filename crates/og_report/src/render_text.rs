//! Plain-text table for terminals. Columns are padded to the widest cell
//! (counted in chars); numeric cells are right-aligned.

use std::fmt::Write as _;

use crate::ReportModel;

pub fn render_text(m: &ReportModel) -> String {
    let mut widths: Vec<usize> = m.columns.iter().map(|c| c.chars().count()).collect();
    for row in &m.rows {
        for (i, cell) in row.iter().enumerate() {
            let w = cell.chars().count();
            match widths.get_mut(i) {
                Some(cur) => *cur = (*cur).max(w),
                None => widths.push(w),
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", m.title);
    push_line(&mut out, &m.columns, &widths, false);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths, false);
    for row in &m.rows {
        push_line(&mut out, row, &widths, true);
    }
    if m.rows.is_empty() {
        out.push_str("(no rows)\n");
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize], align_numbers: bool) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = widths.get(i).copied().unwrap_or(0).saturating_sub(cell.chars().count());
        if align_numbers && looks_numeric(cell) {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn looks_numeric(s: &str) -> bool {
    !s.is_empty() && s.parse::<f64>().is_ok()
}
