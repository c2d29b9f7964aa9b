use cgpa_common::course::CourseId;

use super::IdSource;

/// Counts up from `1`.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> CourseId {
        let id = CourseId::new(self.next);
        self.next += 1;
        id
    }
}
