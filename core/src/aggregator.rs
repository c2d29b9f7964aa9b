//! # CGPA Aggregator
//!
//! `Σ(grade_point × credits) / Σ(credits)`, rounded to two decimals.
//!
//! An empty ledger is an error. A non-empty ledger whose credits sum to zero
//! reports `0` rather than failing.

use cgpa_common::course::{Cgpa, CourseRecord, Summary};
use cgpa_common::error::ComputeError;
use tracing::debug;

pub fn compute(records: &[CourseRecord]) -> Result<Summary, ComputeError> {
    if records.is_empty() {
        return Err(ComputeError::EmptyLedger);
    }

    let (weighted_points, total_credits) = records
        .iter()
        .fold((0.0, 0.0), |(points, credits), record| {
            (points + record.weighted_points(), credits + record.credits())
        });

    let cgpa = Cgpa::from_totals(weighted_points, total_credits);
    debug!(%cgpa, courses = records.len(), total_credits, "cgpa computed");

    Ok(Summary {
        cgpa,
        course_count: records.len(),
        total_credits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgpa_common::course::{CourseId, ValidatedCourse};
    use cgpa_common::grade::Grade;

    fn records(entries: &[(f64, Grade)]) -> Vec<CourseRecord> {
        entries
            .iter()
            .enumerate()
            .map(|(idx, &(credits, grade))| {
                let course = ValidatedCourse {
                    name: format!("Course {idx}"),
                    credits,
                    grade,
                };
                CourseRecord::new(CourseId::new(idx as u64 + 1), course)
            })
            .collect()
    }

    #[test]
    fn test_empty_ledger_is_an_error() {
        assert_eq!(compute(&[]), Err(ComputeError::EmptyLedger));
        assert_eq!(
            ComputeError::EmptyLedger.to_string(),
            "Please add at least one course"
        );
    }

    #[test]
    fn test_weighted_average() {
        let summary = compute(&records(&[(3.0, Grade::A), (3.0, Grade::B)])).expect("non-empty");
        assert_eq!(summary.cgpa.value(), 3.35);
        assert_eq!(summary.course_count, 2);
        assert_eq!(summary.total_credits, 6.0);
    }

    #[test]
    fn test_credits_weight_the_average() {
        // (4.0 * 4 + 0.0 * 1) / 5
        let summary = compute(&records(&[(4.0, Grade::APlus), (1.0, Grade::F)])).expect("non-empty");
        assert_eq!(summary.cgpa.value(), 3.2);
    }

    #[test]
    fn test_zero_total_credits_reports_zero() {
        let summary = compute(&records(&[(0.0, Grade::F)])).expect("fallback, not an error");
        assert_eq!(summary.cgpa, Cgpa::ZERO);
        assert_eq!(summary.cgpa.to_string(), "0.00");
        assert_eq!(summary.course_count, 1);
    }

    #[test]
    fn test_overflowing_totals_report_zero() {
        let summary = compute(&records(&[(1e308, Grade::A), (1e308, Grade::B)])).expect("non-empty");
        assert!(summary.total_credits.is_infinite());
        assert_eq!(summary.cgpa, Cgpa::ZERO);

        let summary = compute(&records(&[(1e308, Grade::APlus)])).expect("non-empty");
        assert!(summary.cgpa.value().is_finite());
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = compute(&records(&[(3.0, Grade::A), (1.5, Grade::CPlus), (4.0, Grade::D)]));
        let backward = compute(&records(&[(4.0, Grade::D), (1.5, Grade::CPlus), (3.0, Grade::A)]));
        assert_eq!(
            forward.expect("non-empty").cgpa,
            backward.expect("non-empty").cgpa
        );
    }
}
