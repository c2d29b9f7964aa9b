//! # Course Model
//!
//! Records held by the ledger and the values derived from them.
//!
//! * [`ValidatedCourse`]: the normalized triple produced by validation.
//! * [`CourseRecord`]: a ledger entry; its grade point is derived from the grade.
//! * [`Cgpa`]: the credit-weighted average, already rounded to two decimals.
//! * [`Summary`]: everything the result panel shows.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::grade::Grade;

/// Removal handle of a ledger entry.
///
/// Ids are unique within a ledger and strictly increasing in insertion order.
/// They carry no meaning beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CourseId(u64);

impl CourseId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(CourseId)
            .map_err(|e| format!("invalid course id '{s}': {e}"))
    }
}

/// Normalized input that passed validation: trimmed name, parsed credits,
/// upper-cased grade.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCourse {
    pub name: String,
    pub credits: f64,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    id: CourseId,
    name: String,
    credits: f64,
    grade: Grade,
    points: f64,
}

impl CourseRecord {
    pub fn new(id: CourseId, course: ValidatedCourse) -> Self {
        Self {
            id,
            points: course.grade.points(),
            name: course.name,
            credits: course.credits,
            grade: course.grade,
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> f64 {
        self.credits
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn grade_point(&self) -> f64 {
        self.points
    }

    /// `grade_point × credits`, the numerator contribution of this record.
    pub fn weighted_points(&self) -> f64 {
        self.points * self.credits
    }
}

/// Cumulative grade point average rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Cgpa(f64);

impl Cgpa {
    pub const ZERO: Cgpa = Cgpa(0.0);

    /// Divides and rounds half away from zero to two decimals.
    ///
    /// Zero (or negative) total credits yield [`Cgpa::ZERO`] instead of a
    /// division by zero. Totals that overflowed to infinity do the same, so
    /// the result is always a finite number.
    pub fn from_totals(weighted_points: f64, total_credits: f64) -> Self {
        let mean = weighted_points / total_credits;
        if total_credits > 0.0 && mean.is_finite() {
            Cgpa(round2(mean))
        } else {
            Cgpa::ZERO
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Cgpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Result panel contents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub cgpa: Cgpa,
    pub course_count: usize,
    pub total_credits: f64,
}
