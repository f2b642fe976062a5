use std::ffi::OsString;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use sha2::{Digest, Sha256};

use crate::model::Submission;
use crate::repo::{StoreError, StoreResult, SubmissionStore};

const EMPTY_COLLECTION: &str = "[]";

/// Submission store backed by a single pretty-printed JSON array on disk
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Held across each load-mutate-save cycle
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating it with an empty collection if absent
    #[tracing::instrument(name = "Open submission store", skip_all)]
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            initialize(&path).map_err(StoreError::Open)?;
            tracing::info!("Initialized empty submission store at {}", path.display());
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where unparsable `contents` are copied before they can be overwritten
    ///
    /// The name carries a digest of the contents, so each distinct corruption gets
    /// its own backup and re-reading the same one does not pile up copies.
    pub fn corrupt_path(&self, contents: &str) -> PathBuf {
        let digest = Sha256::digest(contents.as_bytes());
        let tag: String = digest.iter().take(8).map(|b| format!("{:02x}", b)).collect();
        sibling(&self.path, &format!(".corrupt.{}", tag))
    }

    fn read(&self) -> Vec<Submission> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                match initialize(&self.path) {
                    Ok(()) => tracing::warn!(
                        "Submission store went missing, re-created it at {}",
                        self.path.display()
                    ),
                    Err(e) => tracing::error!(
                        error.cause_chain = ?e,
                        "Failed to re-create missing submission store"
                    ),
                }
                return Vec::new();
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Failed to read submission store, treating as empty");
                return Vec::new();
            }
        };

        if contents.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Submission store is corrupt, treating as empty");
                self.quarantine(&contents);
                Vec::new()
            }
        }
    }

    fn quarantine(&self, contents: &str) {
        let corrupt_path = self.corrupt_path(contents);
        if corrupt_path.exists() {
            return;
        }
        match fs::write(&corrupt_path, contents) {
            Ok(()) => tracing::warn!(
                "Copied corrupt submission data to {}",
                corrupt_path.display()
            ),
            Err(e) => tracing::error!(
                error.cause_chain = ?e,
                "Failed to preserve corrupt submission data"
            ),
        }
    }

    fn write(&self, records: &[Submission]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(records).map_err(StoreError::Serialize)?;
        // Write beside the target then rename over it so readers never see a partial file
        let tmp_path = sibling(&self.path, ".tmp");
        fs::write(&tmp_path, json).map_err(StoreError::Write)?;
        fs::rename(&tmp_path, &self.path).map_err(StoreError::Write)
    }
}

impl SubmissionStore for JsonFileStore {
    #[tracing::instrument(name = "Load all submissions", skip(self))]
    fn load_all(&self) -> Vec<Submission> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read()
    }

    #[tracing::instrument(name = "Save all submissions", skip_all, fields(count = records.len()))]
    fn save_all(&self, records: &[Submission]) -> StoreResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.write(records)
    }

    fn modify(&self, f: &mut dyn FnMut(&mut Vec<Submission>)) -> StoreResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = self.read();
        f(&mut records);
        self.write(&records)
    }
}

/// Write an empty collection at `path`, creating parent directories as needed
fn initialize(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, EMPTY_COLLECTION)
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
