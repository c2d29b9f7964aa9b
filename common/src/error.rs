use thiserror::Error;

/// Rejection of a candidate course. Only the first failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Course name is required.")]
    MissingName,
    #[error("Credit hours must be a positive number.")]
    InvalidCredits,
    #[error("Credit hours must be at most 1000.")]
    TooManyCredits,
    #[error("Please select a grade.")]
    MissingGrade,
    #[error("Invalid grade.")]
    InvalidGrade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputeError {
    #[error("Please add at least one course")]
    EmptyLedger,
}

/// The error banner of a session. Both families render as a plain message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Compute(#[from] ComputeError),
}
