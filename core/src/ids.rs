//! The **abstraction** for handing out course ids.
//!
//! The ledger only needs ids to be unique and increasing; where they come from
//! is up to the front end. An interactive session stamps records with the
//! time they were entered ([`ClockIds`]), tests and scripted runs count up
//! from one ([`SequentialIds`]).

use cgpa_common::course::CourseId;

mod clock;
mod sequential;

pub use clock::ClockIds;
pub use sequential::SequentialIds;

/// Source of course ids.
///
/// Every call must return an id strictly greater than any id it returned
/// before.
pub trait IdSource {
    fn next_id(&mut self) -> CourseId;
}
