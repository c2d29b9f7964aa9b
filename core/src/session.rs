//! # Calculator Session
//!
//! Everything a front end shows: the ledger, the echoed input fields, the
//! error banner and the last computed result.
//!
//! A session is a plain value. [`Session::handle`] consumes it together with
//! one [`Action`] and returns the next session plus a [`Status`] describing
//! what happened, so the caller decides how (and whether) to present it.
//!
//! ## Invariants
//! * A computed result never outlives a ledger mutation: every add and every
//!   remove clears it.
//! * An error and a successful result of the same family are never shown
//!   together. A successful add clears a validation error, a successful
//!   compute clears a compute error.
//! * A rejected add appends nothing and keeps the input fields as typed.

use cgpa_common::course::{Cgpa, CourseId, CourseRecord, Summary};
use cgpa_common::error::SessionError;
use tracing::{debug, trace};

use crate::aggregator;
use crate::ids::{IdSource, SequentialIds};
use crate::ledger::Ledger;
use crate::validator;

/// The three input fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub credits: String,
    pub grade: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.credits.is_empty() && self.grade.is_empty()
    }
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EditName(String),
    EditCredits(String),
    SelectGrade(String),
    /// Validates the draft and appends it to the ledger.
    Add,
    Remove(CourseId),
    Compute,
    Reset,
}

/// Outcome of a single [`Action`].
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Edited,
    Added(CourseRecord),
    /// `record` is `None` when no course had the requested id.
    Removed {
        id: CourseId,
        record: Option<CourseRecord>,
    },
    Computed(Summary),
    Reset,
    Rejected(SessionError),
}

#[derive(Debug, Clone)]
pub struct Session<I = SequentialIds> {
    ledger: Ledger<I>,
    draft: Draft,
    error: Option<SessionError>,
    summary: Option<Summary>,
}

impl Session<SequentialIds> {
    pub fn new() -> Self {
        Self::with_ids(SequentialIds::new())
    }
}

impl Default for Session<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> Session<I> {
    pub fn with_ids(ids: I) -> Self {
        Self {
            ledger: Ledger::with_ids(ids),
            draft: Draft::default(),
            error: None,
            summary: None,
        }
    }

    /// Applies `action` and returns the resulting session.
    pub fn handle(mut self, action: Action) -> (Self, Status) {
        let status = match action {
            Action::EditName(name) => {
                self.draft.name = name;
                Status::Edited
            }
            Action::EditCredits(credits) => {
                self.draft.credits = credits;
                Status::Edited
            }
            Action::SelectGrade(grade) => {
                self.draft.grade = grade;
                Status::Edited
            }
            Action::Add => self.add(),
            Action::Remove(id) => self.remove(id),
            Action::Compute => self.compute(),
            Action::Reset => self.reset(),
        };
        (self, status)
    }

    /// Fills all three fields and adds the course in one step.
    pub fn submit(self, name: &str, credits: &str, grade: &str) -> (Self, Status) {
        let (session, _) = self.handle(Action::EditName(name.to_string()));
        let (session, _) = session.handle(Action::EditCredits(credits.to_string()));
        let (session, _) = session.handle(Action::SelectGrade(grade.to_string()));
        session.handle(Action::Add)
    }

    fn add(&mut self) -> Status {
        let draft = &self.draft;
        let course = match validator::validate(&draft.name, &draft.credits, &draft.grade) {
            Ok(course) => course,
            Err(err) => {
                trace!(error = %err, "course rejected");
                let err = SessionError::from(err);
                self.error = Some(err);
                return Status::Rejected(err);
            }
        };

        let record = self.ledger.add(course).clone();
        self.draft = Draft::default();
        self.error = None;
        self.summary = None;
        Status::Added(record)
    }

    fn remove(&mut self, id: CourseId) -> Status {
        let record = self.ledger.remove(id);
        if record.is_none() {
            debug!(%id, "no course with this id");
        }
        self.summary = None;
        Status::Removed { id, record }
    }

    fn compute(&mut self) -> Status {
        match aggregator::compute(self.ledger.records()) {
            Ok(summary) => {
                self.summary = Some(summary);
                self.error = None;
                Status::Computed(summary)
            }
            Err(err) => {
                let err = SessionError::from(err);
                self.summary = None;
                self.error = Some(err);
                Status::Rejected(err)
            }
        }
    }

    fn reset(&mut self) -> Status {
        debug!(courses = self.ledger.len(), "session reset");
        self.ledger.clear();
        self.draft = Draft::default();
        self.error = None;
        self.summary = None;
        Status::Reset
    }

    pub fn records(&self) -> &[CourseRecord] {
        self.ledger.records()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn error(&self) -> Option<SessionError> {
        self.error
    }

    /// The error banner text, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|err| err.to_string())
    }

    pub fn summary(&self) -> Option<Summary> {
        self.summary
    }

    pub fn cgpa(&self) -> Option<Cgpa> {
        self.summary.map(|summary| summary.cgpa)
    }
}
