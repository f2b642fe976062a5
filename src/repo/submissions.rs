use uuid::Uuid;

use crate::model::{Submission, SubmissionStatus};

/// Failures the store reports to its callers
///
/// Reads never fail: unreadable data degrades to an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to initialize the backing file")]
    Open(#[source] std::io::Error),
    #[error("Failed to encode submissions")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to write the backing file")]
    Write(#[source] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Whole-collection persistence of submission records, most recent first
///
/// Implementations only provide whole reads and writes plus `modify`, which must
/// hold the store's write lock for the full load-mutate-save cycle. Every other
/// operation is built on `modify`.
pub trait SubmissionStore: Send + Sync {
    /// Read the entire collection, or an empty one if it cannot be read
    fn load_all(&self) -> Vec<Submission>;

    /// Replace the entire collection
    fn save_all(&self, records: &[Submission]) -> StoreResult<()>;

    /// Load, apply `f`, save; atomically with respect to other calls on this store
    fn modify(&self, f: &mut dyn FnMut(&mut Vec<Submission>)) -> StoreResult<()>;

    #[tracing::instrument(name = "Append submission", skip_all, fields(submission.id = %record.id))]
    fn append(&self, record: Submission) -> StoreResult<()> {
        let mut record = Some(record);
        self.modify(&mut |records| {
            if let Some(record) = record.take() {
                records.insert(0, record);
            }
        })
    }

    /// Apply `mutator` to the first record with a matching id.
    /// Returns `false` (and still succeeds) when no record matches.
    #[tracing::instrument(name = "Update submission", skip(self, mutator))]
    fn update_by_id(
        &self,
        id: Uuid,
        mutator: &mut dyn FnMut(&mut Submission),
    ) -> StoreResult<bool> {
        let mut found = false;
        self.modify(&mut |records| {
            if let Some(record) = records.iter_mut().find(|r| r.id == id) {
                mutator(record);
                found = true;
            }
        })?;
        Ok(found)
    }

    /// Flip a record between `new` and `processed`, returning the new status
    fn toggle_status(&self, id: Uuid) -> StoreResult<Option<SubmissionStatus>> {
        let mut status = None;
        self.update_by_id(id, &mut |record| {
            record.toggle_status();
            status = Some(record.status);
        })?;
        Ok(status)
    }

    /// Remove every record with a matching id, returning whether any was removed
    #[tracing::instrument(name = "Delete submission", skip(self))]
    fn delete_by_id(&self, id: Uuid) -> StoreResult<bool> {
        let mut removed = false;
        self.modify(&mut |records| {
            let before = records.len();
            records.retain(|r| r.id != id);
            removed = records.len() != before;
        })?;
        Ok(removed)
    }
}
