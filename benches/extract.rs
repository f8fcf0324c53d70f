// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use grade_scrape::classify::GroupRules;
use grade_scrape::report::GradeReport;
use grade_scrape::rounding::Rounding;
use grade_scrape::specs::grades;

/// Synthetic overview page with `n` course rows plus the usual noise
/// (header row, detail rows, a section row).
fn sample_page(n: usize) -> String {
    let mut body = String::new();
    body.push_str("<thead><tr><th>Fach</th><th>Note</th></tr></thead><tbody>");
    body.push_str("<tr><td colspan=\"2\">Semester 1</td></tr>");
    for i in 0..n {
        let code = match i % 3 {
            0 => format!("S-INA24aL-Scc-{i}"),
            1 => format!("BMFR-E-BMLT24b-{i}"),
            _ => format!("MISC-{i}"),
        };
        let grade = 3.0 + (i % 7) as f64 * 0.45;
        body.push_str(&format!(
            "<tr><td><b>{code}</b> Fach {i}</td><td>{grade:.2}</td></tr>\
             <tr class=\"detailrow\"><td>Details {i}</td><td>…</td></tr>"
        ));
    }
    body.push_str("</tbody>");
    format!(
        "<html><body><table class=\"mdl-data-table mdl-js-data-table mdl-table--listtable\">{body}</table></body></html>"
    )
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_page(200);
    let rules = GroupRules::default();

    c.bench_function("extract_rows_200", |b| {
        b.iter(|| {
            let rows = grades::extract_rows(black_box(&doc));
            black_box(rows.len())
        })
    });

    c.bench_function("report_from_doc_200", |b| {
        b.iter(|| {
            let report = GradeReport::from_doc(black_box(&doc), &rules, Rounding::Half);
            black_box(report.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
