use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::types::{InsertResult, MediaRecord};
use crate::error::{PresscutError, Result};

/// Destination for finished media records.
///
/// `insert` reports failure in its result instead of returning an error, so a
/// failed save can be shown to the user and retried by hand.
pub trait RecordStore {
    fn insert(&self, record: &MediaRecord) -> InsertResult;
}

/// Media table kept as JSON lines in a local file, one record per line.
pub struct LocalTableStore {
    path: PathBuf,
}

impl LocalTableStore {
    /// Table in the per-user data directory.
    pub fn new() -> Result<Self> {
        let proj = ProjectDirs::from("io", "presscut", "presscut")
            .ok_or_else(|| PresscutError::Storage("could not resolve data dir".into()))?;
        Self::at(proj.data_local_dir().join("records.jsonl"))
    }

    /// Table at an explicit file path; parent directories are created.
    pub fn at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored records, oldest first. Unreadable lines are skipped.
    pub fn list(&self) -> Result<Vec<MediaRecord>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut out = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<MediaRecord>(&line) {
                Ok(record) => out.push(record),
                Err(e) => tracing::warn!(line = idx + 1, error = %e, "skipping corrupt record"),
            }
        }
        Ok(out)
    }

    fn append(&self, record: &MediaRecord) -> Result<()> {
        record.check()?;
        let mut row = serde_json::to_string(record)?;
        row.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(row.as_bytes())?;
        Ok(())
    }
}

impl RecordStore for LocalTableStore {
    fn insert(&self, record: &MediaRecord) -> InsertResult {
        match self.append(record) {
            Ok(()) => {
                tracing::info!(
                    domain = %record.domain,
                    path = %self.path.display(),
                    "record saved"
                );
                InsertResult::ok()
            }
            Err(e) => {
                tracing::warn!(domain = %record.domain, error = %e, "record insert failed");
                InsertResult::failed(e.to_string())
            }
        }
    }
}
