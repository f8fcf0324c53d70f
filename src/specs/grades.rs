// src/specs/grades.rs
//
// Grade-overview page: one MDL "listtable" data table, one course per row.
// First cell carries the course code in a <b> element plus a free-text
// description; second cell carries the grade (number or marker like "n/a").
// Expansion sub-rows use class="detailrow" and are not course rows.

use crate::core::html::{self, inner_after_open_tag, next_tag_block_ci, open_tag, strip_tags};
use crate::core::sanitize::normalize_entities;

/// One non-header, non-detail table row, as extracted.
/// `name_cell` keeps its inner markup so the bold code element survives;
/// `grade_cell` is already stripped and trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRow {
    pub name_cell: String,
    pub grade_cell: String,
}

/// Distinctive class of the grades table. The portal stacks three MDL
/// classes on it; matching the most specific one is enough.
const TABLE_CLASS: &str = "mdl-table--listtable";

/// Extract all course rows from a rendered grades page, in table order.
/// Missing table, missing rows, short rows: all normal, all empty/skipped.
pub fn extract_rows(doc: &str) -> Vec<RawRow> {
    let Some(table) = find_grade_table(doc) else {
        logd!("grades: no {} table in document", TABLE_CLASS);
        return Vec::new();
    };

    let mut rows_out = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        // Header rows carry <th> cells; expansion rows are marked on the tag.
        if html::to_lower(open_tag(tr)).contains("detailrow") { continue; }
        if html::to_lower(tr).contains("<th") { continue; }

        let cells = read_cells(tr);
        if cells.len() < 2 { continue; }

        rows_out.push(RawRow {
            name_cell: normalize_entities(&cells[0]),
            grade_cell: strip_tags(normalize_entities(&cells[1])),
        });
    }
    rows_out
}

/// Scan `<table>` blocks until one's opening tag carries the listtable class.
fn find_grade_table(doc: &str) -> Option<&str> {
    let mut pos = 0usize;
    while let Some((t_s, t_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let block = &doc[t_s..t_e];
        pos = t_e;
        if html::to_lower(open_tag(block)).contains(TABLE_CLASS) {
            return Some(block);
        }
    }
    None
}

/// Inner markup of each `<td>` in a row, in order.
fn read_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut td_pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
        cells.push(inner_after_open_tag(&tr[td_s..td_e]));
        td_pos = td_e;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!(
            r#"<html><body>
            <table class="sometable"><tr><td>noise</td><td>x</td></tr></table>
            <table class="mdl-data-table mdl-js-data-table mdl-table--listtable">
            {}
            </table></body></html>"#,
            body
        )
    }

    #[test]
    fn missing_table_is_empty_not_error() {
        assert!(extract_rows("<html><body><p>maintenance</p></body></html>").is_empty());
        assert!(extract_rows("").is_empty());
    }

    #[test]
    fn table_without_listtable_class_is_ignored() {
        let doc = r#"<table class="mdl-data-table"><tr><td>a</td><td>b</td></tr></table>"#;
        assert!(extract_rows(doc).is_empty());
    }

    #[test]
    fn header_and_detail_rows_are_skipped() {
        let doc = page(
            r#"<thead><tr><th>Course</th><th>Grade</th></tr></thead>
            <tbody>
            <tr><td><b>S-INA24aL-Scc</b> Mathematik</td><td>5.2</td></tr>
            <tr class="detailrow"><td>exam breakdown</td><td>...</td></tr>
            <tr><td><b>BMFR-E-BMLT24b</b> Histoire</td><td>4.8</td></tr>
            </tbody>"#,
        );
        let rows = extract_rows(&doc);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].grade_cell, "5.2");
        assert_eq!(rows[1].grade_cell, "4.8");
    }

    #[test]
    fn short_rows_are_skipped_silently() {
        let doc = page(
            r#"<tr><td colspan="2">Semester 1</td></tr>
            <tr><td><b>X</b> Sport</td><td>4.0</td></tr>"#,
        );
        let rows = extract_rows(&doc);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].grade_cell, "4.0");
    }

    #[test]
    fn order_is_preserved_and_markup_survives_in_name_cell() {
        let doc = page(
            r#"<tr><td><b>A1</b> first</td><td>4</td></tr>
            <tr><td><b>A2</b> second</td><td>5</td></tr>"#,
        );
        let rows = extract_rows(&doc);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].name_cell.contains("<b>A1</b>"));
        assert!(rows[1].name_cell.contains("<b>A2</b>"));
    }

    #[test]
    fn entities_are_normalized_in_both_cells() {
        let doc = page(r#"<tr><td><b>BM</b>&nbsp;Franz&ouml;sisch</td><td>5.0&nbsp;</td></tr>"#);
        let rows = extract_rows(&doc);
        assert_eq!(rows[0].name_cell, "<b>BM</b> Französisch");
        assert_eq!(rows[0].grade_cell, "5.0");
    }
}
