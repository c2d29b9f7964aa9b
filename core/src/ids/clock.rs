//! Time-of-insertion ids.
//!
//! Milliseconds since the Unix epoch. Two records entered within the same
//! millisecond (or after the wall clock stepped backwards) get the previous
//! id plus one, so ids never repeat.

use std::time::{SystemTime, UNIX_EPOCH};

use cgpa_common::course::CourseId;

use super::IdSource;

#[derive(Debug, Clone, Default)]
pub struct ClockIds {
    last: u64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(&mut self, now_millis: u64) -> CourseId {
        self.last = now_millis.max(self.last + 1);
        CourseId::new(self.last)
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> CourseId {
        let now_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);
        self.stamp(now_millis)
    }
}
