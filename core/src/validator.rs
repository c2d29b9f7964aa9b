//! # Course Validator
//!
//! Pure gate in front of the ledger. Rules run in a fixed order and the first
//! failing rule is the only one reported:
//!
//! 1. the trimmed name must not be empty;
//! 2. the credit hours must parse to a finite number strictly above zero and
//!    no larger than [`MAX_CREDITS`];
//! 3. a grade must be given;
//! 4. the grade, upper-cased, must be one of `A+ A B+ B C+ C D F`.
//!
//! Rule 4 still runs when the caller only offers the fixed grade list, since
//! the grade point lookup must never see a symbol outside the table.

use cgpa_common::course::ValidatedCourse;
use cgpa_common::error::ValidationError;
use cgpa_common::grade::Grade;

/// Upper bound for a single course. Keeps ledger sums far from `f64` overflow.
pub const MAX_CREDITS: f64 = 1000.0;

pub fn validate(
    name: &str,
    credits_text: &str,
    grade: &str,
) -> Result<ValidatedCourse, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let credits = parse_credits(credits_text)?;

    let grade = grade.trim();
    if grade.is_empty() {
        return Err(ValidationError::MissingGrade);
    }
    let grade: Grade = grade.parse()?;

    Ok(ValidatedCourse {
        name: name.to_string(),
        credits,
        grade,
    })
}

fn parse_credits(credits_text: &str) -> Result<f64, ValidationError> {
    match credits_text.trim().parse::<f64>() {
        Ok(credits) if credits.is_finite() && credits > 0.0 => {
            if credits > MAX_CREDITS {
                return Err(ValidationError::TooManyCredits);
            }
            Ok(credits)
        }
        _ => Err(ValidationError::InvalidCredits),
    }
}
