//! Progress-record persistence.
//!
//! One record is kept per (task, user) pair. The store is an explicit
//! interface handed to the commands that need it, never process-wide
//! mutable state; tests use [`MemoryStore`], the CLI uses [`JsonFileStore`]
//! backed by `.refscore/progress.json`.

use crate::error::{Result, ScoreError};
use crate::types::report::ProgressReport;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const STORE_FILE: &str = ".refscore/progress.json";
const STORE_VERSION: u32 = 1;

/// Latest scored submission for one (task, user) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub task: String,
    pub user: String,
    pub candidate_text: String,
    pub digest: String,
    pub progress_percentage: u8,
    pub is_completed: bool,
    pub strategy: String,
    pub updated_at: String,
}

impl ProgressRecord {
    pub fn from_report(
        task: &str,
        user: &str,
        candidate_text: &str,
        report: &ProgressReport,
    ) -> Self {
        Self {
            task: task.to_string(),
            user: user.to_string(),
            candidate_text: candidate_text.to_string(),
            digest: sha256_hex(candidate_text.as_bytes()),
            progress_percentage: report.progress_percentage,
            is_completed: report.is_completed,
            strategy: report.strategy.as_str().to_string(),
            updated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Key-value access to progress records, task/user pair as the key.
pub trait ProgressStore {
    fn get(&self, task: &str, user: &str) -> Option<&ProgressRecord>;
    fn upsert(&mut self, record: ProgressRecord) -> Result<()>;
    fn all(&self) -> &[ProgressRecord];
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<ProgressRecord>,
}

impl ProgressStore for MemoryStore {
    fn get(&self, task: &str, user: &str) -> Option<&ProgressRecord> {
        self.records
            .iter()
            .find(|record| record.task == task && record.user == user)
    }

    fn upsert(&mut self, record: ProgressRecord) -> Result<()> {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.task == record.task && existing.user == record.user)
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        Ok(())
    }

    fn all(&self) -> &[ProgressRecord] {
        &self.records
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreEnvelope {
    version: u32,
    updated_at: String,
    records: Vec<ProgressRecord>,
}

/// File-backed store, persisted as pretty JSON on every upsert.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<ProgressRecord>,
}

impl JsonFileStore {
    /// Open the store for a project root, loading existing records if the
    /// store file is present.
    pub fn open(root: &Path) -> Result<Self> {
        let path = root.join(STORE_FILE);
        let records = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let envelope: StoreEnvelope = serde_json::from_str(&content)
                .map_err(|e| ScoreError::StoreCorrupt(format!("{}: {}", path.display(), e)))?;
            envelope.records
        } else {
            Vec::new()
        };
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let envelope = StoreEnvelope {
            version: STORE_VERSION,
            updated_at: Utc::now().to_rfc3339(),
            records: self.records.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ProgressStore for JsonFileStore {
    fn get(&self, task: &str, user: &str) -> Option<&ProgressRecord> {
        self.records
            .iter()
            .find(|record| record.task == task && record.user == user)
    }

    fn upsert(&mut self, record: ProgressRecord) -> Result<()> {
        debug!(
            task = %record.task,
            user = %record.user,
            progress = record.progress_percentage,
            "upserting progress record"
        );
        match self
            .records
            .iter_mut()
            .find(|existing| existing.task == record.task && existing.user == record.user)
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        self.flush()
    }

    fn all(&self) -> &[ProgressRecord] {
        &self.records
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
