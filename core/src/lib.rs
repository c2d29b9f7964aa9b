//! # CGPA Core
//!
//! The calculator itself: a validated, insertion-ordered course ledger and a
//! credit-weighted aggregate computed over it on demand.
//!
//! * **[`validator`]**: gates candidate input into the ledger.
//! * **[`ledger`]**: owns the course records and hands out ids.
//! * **[`aggregator`]**: the weighted average.
//! * **[`ids`]**: where course ids come from.
//! * **[`session`]**: the state a front end drives, one handler per user action.

pub mod aggregator;
pub mod ids;
pub mod ledger;
pub mod session;
pub mod validator;
