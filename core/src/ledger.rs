//! # Course Ledger
//!
//! Insertion-ordered course records. Records are only ever appended or
//! removed by id; nothing reorders them. Names may repeat, ids may not.

use cgpa_common::course::{CourseId, CourseRecord, ValidatedCourse};
use tracing::debug;

use crate::ids::{IdSource, SequentialIds};

#[derive(Debug, Clone)]
pub struct Ledger<I = SequentialIds> {
    records: Vec<CourseRecord>,
    ids: I,
}

impl Ledger<SequentialIds> {
    pub fn new() -> Self {
        Self::with_ids(SequentialIds::new())
    }
}

impl Default for Ledger<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> Ledger<I> {
    pub fn with_ids(ids: I) -> Self {
        Self {
            records: Vec::new(),
            ids,
        }
    }

    /// Appends a validated course under a fresh id and returns the new record.
    pub fn add(&mut self, course: ValidatedCourse) -> &CourseRecord {
        let id = self.ids.next_id();
        let record = CourseRecord::new(id, course);
        debug!(%id, name = record.name(), grade = %record.grade(), "course added");
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Removes the record with `id`. An unknown id is not an error.
    pub fn remove(&mut self, id: CourseId) -> Option<CourseRecord> {
        let idx = self.records.iter().position(|record| record.id() == id)?;
        debug!(%id, "course removed");
        Some(self.records.remove(idx))
    }

    /// Drops every record. The id source keeps counting.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
