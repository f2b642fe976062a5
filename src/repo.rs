mod in_memory;
mod json_file;
mod submissions;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use submissions::{StoreError, StoreResult, SubmissionStore};
