// src/csv.rs
use std::io::{self, Write};

use crate::classify::Group;
use crate::report::GradeReport;

pub const REPORT_HEADERS: [&str; 4] = ["Group", "Code", "Name", "Grade"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Flatten a report into `Group, Code, Name, Grade` rows, group order fixed,
/// row order preserved within each group. Display grades only; no consumer
/// re-derives numbers from this.
pub fn report_rows(report: &GradeReport) -> Vec<Vec<String>> {
    let groups = [
        (Group::Ina.label(), &report.ina),
        (Group::Bm.label(), &report.bm),
        (Group::Other.label(), &report.other),
    ];
    let mut rows = Vec::with_capacity(report.len());
    for (label, courses) in groups {
        for c in courses {
            rows.push(vec![s!(label), c.code.clone(), c.name.clone(), c.display_grade.clone()]);
        }
    }
    rows
}

/// Create a full export string from a report.
pub fn to_export_string(report: &GradeReport, include_headers: bool, delim: Delim) -> String {
    let sep = delim.sep();
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let hdr: Vec<String> = REPORT_HEADERS.iter().map(|h| s!(*h)).collect();
        let _ = write_row(&mut buf, &hdr, sep);
    }
    for r in report_rows(report) {
        let _ = write_row(&mut buf, &r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
