// src/runner.rs
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::io::Read;

use serde::Serialize;

use crate::csv;
use crate::params::{Format, Params};
use crate::report::{GradeReport, PromotionVerdict, group_average};
use crate::rounding::Rounding;

/// Outcome of one run, for callers that want to act on it (tests, exit codes).
pub struct RunSummary {
    pub course_count: usize,
    pub verdict: PromotionVerdict,
}

/// `--format json` document: the grouped report plus the verdict.
#[derive(Serialize)]
struct JsonDoc<'a> {
    #[serde(flatten)]
    report: &'a GradeReport,
    verdict: PromotionVerdict,
}

/// Read the document, run the pipeline, render to the chosen sink.
pub fn run(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let doc = read_document(params)?;

    let report = GradeReport::from_doc(&doc, &params.rules, params.rounding);
    let verdict = report.promotion(params.rounding);
    logf!(
        "run: {} courses ({} graded), promoted={}",
        report.len(),
        verdict.graded_count,
        verdict.promoted
    );

    let rendered = match params.format {
        Format::Summary => render_summary(&report, &verdict, params.rounding),
        Format::Delimited(delim) => csv::to_export_string(&report, params.include_headers, delim),
        Format::Json => {
            let mut out = serde_json::to_string_pretty(&JsonDoc { report: &report, verdict })?;
            out.push('\n');
            out
        }
    };

    match &params.out {
        Some(path) => fs::write(path, &rendered)?,
        None => print!("{}", rendered),
    }

    Ok(RunSummary { course_count: report.len(), verdict })
}

fn read_document(params: &Params) -> Result<String, Box<dyn Error>> {
    match &params.input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut doc = s!();
            std::io::stdin().read_to_string(&mut doc)?;
            Ok(doc)
        }
    }
}

/// Plain-text renderer. Strict consumer of the report: prints display
/// grades and core-computed averages, never re-derives numbers.
pub fn render_summary(
    report: &GradeReport,
    verdict: &PromotionVerdict,
    rounding: Rounding,
) -> String {
    if report.is_empty() {
        return s!("No grades found on this page. Make sure you are on the correct page.\n");
    }

    let mut out = s!();
    let groups = [("INA", &report.ina), ("BM", &report.bm), ("Other", &report.other)];
    for (label, courses) in groups {
        if courses.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{label}");
        for c in courses {
            let _ = writeln!(out, "  {:<44} {:>6}", c.name, c.display_grade);
        }
        let avg = group_average(courses, rounding);
        // Average 0 means no graded course; the convention is to omit it.
        if avg > 0.0 {
            let _ = writeln!(out, "  {:<44} {:>6}", "Average", format!("{avg:.2}"));
        }
        let _ = writeln!(out);
    }

    if verdict.graded_count == 0 {
        let _ = writeln!(out, "Promotion check: no graded courses.");
    } else {
        let _ = writeln!(out, "Overall average: {:.2}", verdict.overall_average);
        let _ = writeln!(out, "Grade deficit:   {:.2}", verdict.grade_deficit);
        let _ = writeln!(out, "Failing courses: {}", verdict.failing_count);
        let _ = writeln!(out, "Promoted:        {}", if verdict.promoted { "yes" } else { "no" });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::GroupRules;

    const PAGE: &str = r#"
        <table class="mdl-data-table mdl-js-data-table mdl-table--listtable">
        <thead><tr><th>Course</th><th>Grade</th></tr></thead>
        <tbody>
        <tr><td><b>S-INA24aL-Scc</b> Mathematik</td><td>4.6</td></tr>
        <tr><td><b>BMFR-E-BMLT24b</b> Histoire</td><td>n/a</td></tr>
        </tbody>
        </table>"#;

    #[test]
    fn summary_lists_groups_and_verdict() {
        let report = GradeReport::from_doc(PAGE, &GroupRules::default(), Rounding::Half);
        let verdict = report.promotion(Rounding::Half);
        let text = render_summary(&report, &verdict, Rounding::Half);

        assert!(text.contains("INA"));
        assert!(text.contains("S-INA24aL-Scc - Mathematik"));
        assert!(text.contains("4.50"));
        assert!(text.contains("n/a"));
        assert!(text.contains("Promoted:        yes"));
    }

    #[test]
    fn summary_of_an_empty_page_says_so() {
        let report = GradeReport::from_doc("<html></html>", &GroupRules::default(), Rounding::Half);
        let verdict = report.promotion(Rounding::Half);
        let text = render_summary(&report, &verdict, Rounding::Half);
        assert!(text.starts_with("No grades found"));
    }

    #[test]
    fn summary_without_graded_courses_skips_the_metrics() {
        let page = PAGE.replace("4.6", "pending");
        let report = GradeReport::from_doc(&page, &GroupRules::default(), Rounding::Half);
        let verdict = report.promotion(Rounding::Half);
        let text = render_summary(&report, &verdict, Rounding::Half);
        assert!(text.contains("no graded courses"));
        assert!(!text.contains("Overall average"));
        assert!(!text.contains("Average "));
    }
}
