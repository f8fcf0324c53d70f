// src/course.rs

use serde::Serialize;

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::rounding::{Rounding, parse_leading_float};
use crate::specs::grades::RawRow;

/// One course, normalized from a raw table row.
///
/// Invariant: `numeric_grade > 0` iff the grade cell started with a positive
/// parseable number. That flag decides inclusion in averages and in the
/// promotion check; everything else falls back to the raw cell text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Course {
    /// Bold leading text of the name cell, trimmed. Empty if absent.
    pub code: String,
    /// `code`, plus ` - <description>` when the cell carries more text.
    pub name: String,
    /// Trimmed grade cell text, verbatim.
    pub raw_grade: String,
    /// Rounded grade, or 0.0 for unparseable / non-positive cells.
    pub numeric_grade: f64,
    /// `numeric_grade` to two decimals when positive, else `raw_grade`.
    pub display_grade: String,
}

impl Course {
    pub fn from_row(row: &RawRow, rounding: Rounding) -> Self {
        let code = bold_text(&row.name_cell);
        let full = strip_tags(&row.name_cell);

        // First occurrence only; the portal never repeats the code as a
        // prefix, and plain substring removal matches its own display code.
        let description = if code.is_empty() {
            full
        } else {
            full.replacen(&code, "", 1).trim().to_string()
        };
        let name = if description.is_empty() {
            code.clone()
        } else {
            format!("{} - {}", code, description)
        };

        let raw_grade = row.grade_cell.trim().to_string();
        let numeric_grade = match parse_leading_float(&raw_grade) {
            Some(g) if g > 0.0 => rounding.round(g),
            _ => 0.0,
        };
        let display_grade = if numeric_grade > 0.0 {
            format!("{:.2}", numeric_grade)
        } else {
            raw_grade.clone()
        };

        Course { code, name, raw_grade, numeric_grade, display_grade }
    }

    /// Graded means: the cell yielded a positive number.
    pub fn is_graded(&self) -> bool {
        self.numeric_grade > 0.0
    }
}

/// Text of the first bold inline element in a cell, tags stripped.
/// `<b>` is what the portal emits; tolerate `<strong>` as well.
fn bold_text(cell: &str) -> String {
    for (open, close) in [("<b>", "</b>"), ("<b ", "</b>"), ("<strong", "</strong>")] {
        if let Some((b_s, b_e)) = next_tag_block_ci(cell, open, close, 0) {
            return strip_tags(inner_after_open_tag(&cell[b_s..b_e]));
        }
    }
    s!()
}
