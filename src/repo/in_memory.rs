use std::sync::{Mutex, PoisonError};

use crate::model::Submission;
use crate::repo::{StoreResult, SubmissionStore};

/// Volatile store, for tests and throwaway instances
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<Submission>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Submission>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl SubmissionStore for InMemoryStore {
    fn load_all(&self) -> Vec<Submission> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save_all(&self, records: &[Submission]) -> StoreResult<()> {
        *self.records.lock().unwrap_or_else(PoisonError::into_inner) = records.to_vec();
        Ok(())
    }

    fn modify(&self, f: &mut dyn FnMut(&mut Vec<Submission>)) -> StoreResult<()> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *records);
        Ok(())
    }
}
