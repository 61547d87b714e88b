//! Case store collaborators.
//!
//! The store owns case snapshots and receives the rendered task list back.
//! Core evaluation never touches it directly.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use casetrack_core::{
    CaseError, CaseRecord, ErrorEntry, Evaluation, EventKind, SubmissionStatus,
};

/// Errors from a case store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Case {0} not found")]
    NotFound(u64),

    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid case snapshot: {0}")]
    InvalidCase(#[from] CaseError),

    #[error("Failed to serialise task list for case {case_id}: {message}")]
    Serialization { case_id: u64, message: String },

    #[error("Case store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether retrying the same call may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Unavailable(_) => true,
            StoreError::Io(e) => matches!(
                e.kind(),
                ErrorKind::Interrupted | ErrorKind::TimedOut | ErrorKind::WouldBlock
            ),
            _ => false,
        }
    }
}

/// The artifact written back against a case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskListPayload {
    pub case_id: u64,

    /// Rendered markdown task list
    pub task_list: String,

    pub errors: Vec<ErrorEntry>,

    pub submission: SubmissionStatus,

    pub evaluated_at: DateTime<Utc>,
}

impl<E: EventKind> From<&Evaluation<E>> for TaskListPayload {
    fn from(evaluation: &Evaluation<E>) -> Self {
        Self {
            case_id: evaluation.case_id,
            task_list: evaluation.rendered.markdown.clone(),
            errors: evaluation.rendered.errors.clone(),
            submission: evaluation.submission,
            evaluated_at: evaluation.evaluated_at,
        }
    }
}

/// Source of case snapshots and sink for rendered task lists.
#[async_trait]
pub trait CaseStore: Send + Sync {
    /// Read the current snapshot of a case.
    async fn fetch(&self, case_id: u64) -> Result<CaseRecord, StoreError>;

    /// Persist a rendered task list against a case.
    async fn write_back(&self, case_id: u64, payload: &TaskListPayload) -> Result<(), StoreError>;

    /// Store name for logs.
    fn name(&self) -> &str;
}

/// Store holding cases in memory.
#[derive(Default)]
pub struct InMemoryCaseStore {
    cases: RwLock<HashMap<u64, CaseRecord>>,
    task_lists: RwLock<HashMap<u64, TaskListPayload>>,
}

impl InMemoryCaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a case snapshot.
    pub fn insert(&self, case: CaseRecord) {
        self.cases.write().insert(case.id, case);
    }

    /// The last task list written back for a case.
    pub fn task_list(&self, case_id: u64) -> Option<TaskListPayload> {
        self.task_lists.read().get(&case_id).cloned()
    }
}

#[async_trait]
impl CaseStore for InMemoryCaseStore {
    async fn fetch(&self, case_id: u64) -> Result<CaseRecord, StoreError> {
        self.cases
            .read()
            .get(&case_id)
            .cloned()
            .ok_or(StoreError::NotFound(case_id))
    }

    async fn write_back(&self, case_id: u64, payload: &TaskListPayload) -> Result<(), StoreError> {
        if !self.cases.read().contains_key(&case_id) {
            return Err(StoreError::NotFound(case_id));
        }
        self.task_lists.write().insert(case_id, payload.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Store backed by a directory: `<id>.json` holds a case snapshot and
/// `<id>.tasklist.json` receives its task list.
pub struct FileCaseStore {
    root: PathBuf,
}

impl FileCaseStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn case_path(&self, case_id: u64) -> PathBuf {
        self.root.join(format!("{}.json", case_id))
    }

    pub fn task_list_path(&self, case_id: u64) -> PathBuf {
        self.root.join(format!("{}.tasklist.json", case_id))
    }
}

#[async_trait]
impl CaseStore for FileCaseStore {
    async fn fetch(&self, case_id: u64) -> Result<CaseRecord, StoreError> {
        let contents = match tokio::fs::read_to_string(self.case_path(case_id)).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound(case_id)),
            Err(e) => return Err(e.into()),
        };
        Ok(CaseRecord::from_json(&contents)?)
    }

    async fn write_back(&self, case_id: u64, payload: &TaskListPayload) -> Result<(), StoreError> {
        if !tokio::fs::try_exists(self.case_path(case_id)).await? {
            return Err(StoreError::NotFound(case_id));
        }
        let json = serde_json::to_string_pretty(payload).map_err(|e| StoreError::Serialization {
            case_id,
            message: e.to_string(),
        })?;
        tokio::fs::write(self.task_list_path(case_id), json).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
