//! # CGPA Common
//!
//! Domain models shared by the core ledger and the terminal front end.
//!
//! * **[`grade`]**: the fixed letter grade set and its grade point table.
//! * **[`course`]**: course records, ids and the computed aggregate.
//! * **[`error`]**: validation and compute failures.
//! * **[`config`]**: presentation settings collected from the command line.

pub mod config;
pub mod course;
pub mod error;
pub mod grade;
pub mod log;
