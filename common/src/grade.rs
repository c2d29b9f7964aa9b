//! # Letter Grades
//!
//! The fixed grade scale used by the calculator.
//!
//! Every grade maps to exactly one grade point. The table is closed: the
//! ledger never sees a symbol outside of it, so lookups are total.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the eight accepted letter grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
    F,
}

impl Grade {
    /// All grades in display order, best first.
    pub const ALL: [Grade; 8] = [
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    /// Grade point awarded for this letter.
    pub const fn points(self) -> f64 {
        match self {
            Grade::APlus => 4.0,
            Grade::A => 3.7,
            Grade::BPlus => 3.3,
            Grade::B => 3.0,
            Grade::CPlus => 2.7,
            Grade::C => 2.3,
            Grade::D => 2.0,
            Grade::F => 0.0,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Grade {
    type Err = ValidationError;

    /// Parses a grade symbol.
    ///
    /// Matching is case-insensitive: the input is upper-cased before the
    /// lookup, so `"b+"` and `"B+"` are the same grade. Surrounding
    /// whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Grade::ALL
            .into_iter()
            .find(|grade| grade.symbol() == upper)
            .ok_or(ValidationError::InvalidGrade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_table() {
        let expected = [4.0, 3.7, 3.3, 3.0, 2.7, 2.3, 2.0, 0.0];
        for (grade, points) in Grade::ALL.iter().zip(expected) {
            assert_eq!(grade.points(), points, "wrong points for {grade}");
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("a+".parse::<Grade>(), Ok(Grade::APlus));
        assert_eq!("A+".parse::<Grade>(), Ok(Grade::APlus));
        assert_eq!("c".parse::<Grade>(), Ok(Grade::C));
        assert_eq!("f".parse::<Grade>(), Ok(Grade::F));
    }

    #[test]
    fn test_from_str_rejects_unknown_symbols() {
        assert_eq!("E".parse::<Grade>(), Err(ValidationError::InvalidGrade));
        assert_eq!("A-".parse::<Grade>(), Err(ValidationError::InvalidGrade));
        assert_eq!("D+".parse::<Grade>(), Err(ValidationError::InvalidGrade));
        assert_eq!(" A".parse::<Grade>(), Err(ValidationError::InvalidGrade));
    }

    #[test]
    fn test_display_matches_symbol() {
        let rendered: Vec<String> = Grade::ALL.iter().map(|g| g.to_string()).collect();
        assert_eq!(rendered, ["A+", "A", "B+", "B", "C+", "C", "D", "F"]);
    }
}
