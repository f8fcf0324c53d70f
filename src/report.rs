// src/report.rs
//
// Canonical result of one extraction run: courses bucketed per group, plus
// derived averages and the promotion verdict. Built fresh per run, never
// mutated afterwards; consumers (summary printer, csv, json) only read it.

use serde::Serialize;

use crate::classify::{Group, GroupRules};
use crate::course::Course;
use crate::rounding::Rounding;
use crate::specs::grades;

/// Promotion thresholds of the portal's published rule.
pub const PASS_GRADE: f64 = 4.0;
pub const MAX_DEFICIT: f64 = 2.0;
pub const MAX_FAILING: usize = 2;

/// Courses of one extraction run, in table row order within each group.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GradeReport {
    pub ina: Vec<Course>,
    pub bm: Vec<Course>,
    pub other: Vec<Course>,
}

/// Outcome of the three-criterion promotion rule.
///
/// `graded_count == 0` is the explicit "ungraded" state: all metrics zero,
/// not promoted. The overall average never becomes NaN or infinite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PromotionVerdict {
    pub overall_average: f64,
    pub grade_deficit: f64,
    pub failing_count: usize,
    pub graded_count: usize,
    pub promoted: bool,
}

impl PromotionVerdict {
    fn ungraded() -> Self {
        PromotionVerdict {
            overall_average: 0.0,
            grade_deficit: 0.0,
            failing_count: 0,
            graded_count: 0,
            promoted: false,
        }
    }
}

impl GradeReport {
    /// The whole pipeline as one pure function over a document snapshot:
    /// extract rows, normalize each into a course, bucket by code.
    pub fn from_doc(doc: &str, rules: &GroupRules, rounding: Rounding) -> Self {
        let mut report = GradeReport::default();
        for row in grades::extract_rows(doc) {
            let course = Course::from_row(&row, rounding);
            match rules.classify(&course.code) {
                Group::Ina => report.ina.push(course),
                Group::Bm => report.bm.push(course),
                Group::Other => report.other.push(course),
            }
        }
        report
    }

    pub fn len(&self) -> usize {
        self.ina.len() + self.bm.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn all_courses(&self) -> impl Iterator<Item = &Course> {
        self.ina.iter().chain(&self.bm).chain(&self.other)
    }

    /// Evaluate the promotion rule over this report.
    ///
    /// Deficit and failing count run over graded courses of *all* groups;
    /// the overall average only over the non-zero INA and BM group averages.
    /// The portal's formula has that asymmetry and we keep it.
    pub fn promotion(&self, rounding: Rounding) -> PromotionVerdict {
        let graded: Vec<&Course> = self.all_courses().filter(|c| c.is_graded()).collect();
        if graded.is_empty() {
            return PromotionVerdict::ungraded();
        }

        let failing: Vec<&&Course> =
            graded.iter().filter(|c| c.numeric_grade < PASS_GRADE).collect();
        let grade_deficit: f64 =
            failing.iter().map(|c| PASS_GRADE - c.numeric_grade).sum();

        // Mean of the non-zero group averages. Zero means "no graded
        // courses in that group" and drops out of both sides of the mean.
        let mut sum = 0.0;
        let mut n = 0usize;
        for avg in [
            group_average(&self.ina, rounding),
            group_average(&self.bm, rounding),
        ] {
            if avg > 0.0 {
                sum += avg;
                n += 1;
            }
        }
        let overall_average = if n == 0 { 0.0 } else { sum / n as f64 };

        let promoted = overall_average >= PASS_GRADE
            && grade_deficit <= MAX_DEFICIT
            && failing.len() <= MAX_FAILING;

        PromotionVerdict {
            overall_average,
            grade_deficit,
            failing_count: failing.len(),
            graded_count: graded.len(),
            promoted,
        }
    }
}

/// Mean of the graded courses in one group, passed through the same
/// rounding policy as individual grades. 0.0 when nothing is graded.
pub fn group_average(courses: &[Course], rounding: Rounding) -> f64 {
    let graded: Vec<f64> = courses
        .iter()
        .filter(|c| c.is_graded())
        .map(|c| c.numeric_grade)
        .collect();
    if graded.is_empty() {
        return 0.0;
    }
    rounding.round(graded.iter().sum::<f64>() / graded.len() as f64)
}
