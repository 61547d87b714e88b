//! Evaluation passes against a case store.
//!
//! The publisher reads a snapshot, evaluates it with `casetrack-core` and
//! writes the rendered task list back. Store calls are retried with
//! exponential backoff while they fail transiently.

use backon::{ExponentialBuilder, Retryable};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use casetrack_core::{evaluate, evaluate_response, CaseRecord, EvaluationError};

use crate::store::{CaseStore, StoreError, TaskListPayload};

/// Errors from a publishing pass.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Case store error: {0}")]
    Store(#[from] StoreError),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
}

/// Retry policy for store calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// Total attempts per store call, including the first
    pub max_attempts: usize,

    /// Delay before the first retry (e.g. "100ms")
    #[serde(with = "human_duration")]
    pub min_delay: Duration,

    /// Upper bound on the delay between retries (e.g. "2s")
    #[serde(with = "human_duration")]
    pub max_delay: Duration,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl PublisherConfig {
    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.min_delay)
            .with_max_delay(self.max_delay)
            .with_max_times(self.max_attempts.saturating_sub(1))
    }
}

mod human_duration {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let text = String::deserialize(deserializer)?;
        humantime::parse_duration(&text).map_err(serde::de::Error::custom)
    }
}

/// Runs evaluation passes and persists their artifacts.
pub struct ProgressPublisher<S: CaseStore> {
    store: S,
    config: PublisherConfig,
}

impl<S: CaseStore> ProgressPublisher<S> {
    pub fn new(store: S, config: PublisherConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Evaluate the whole case task list and write it back.
    pub async fn publish(&self, case_id: u64) -> Result<TaskListPayload, PublishError> {
        let case = self.fetch(case_id).await?;
        let payload = TaskListPayload::from(&evaluate(&case)?);
        self.write_back(case_id, &payload).await?;
        tracing::info!(
            case_id,
            store = self.store.name(),
            submission = ?payload.submission,
            "task list published"
        );
        Ok(payload)
    }

    /// Evaluate the active respondent's task list and write it back.
    pub async fn publish_response(&self, case_id: u64) -> Result<TaskListPayload, PublishError> {
        let case = self.fetch(case_id).await?;
        let payload = TaskListPayload::from(&evaluate_response(&case)?);
        self.write_back(case_id, &payload).await?;
        tracing::info!(case_id, store = self.store.name(), "response task list published");
        Ok(payload)
    }

    async fn fetch(&self, case_id: u64) -> Result<CaseRecord, StoreError> {
        let store = &self.store;
        (|| async move { store.fetch(case_id).await })
            .retry(self.config.backoff())
            .when(StoreError::is_transient)
            .notify(|err: &StoreError, delay: Duration| {
                tracing::warn!(case_id, error = %err, ?delay, "retrying case fetch");
            })
            .await
    }

    async fn write_back(&self, case_id: u64, payload: &TaskListPayload) -> Result<(), StoreError> {
        let store = &self.store;
        (|| async move { store.write_back(case_id, payload).await })
            .retry(self.config.backoff())
            .when(StoreError::is_transient)
            .notify(|err: &StoreError, delay: Duration| {
                tracing::warn!(case_id, error = %err, ?delay, "retrying task list write-back");
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCaseStore;
    use async_trait::async_trait;
    use casetrack_core::SubmissionStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails the first `failures` write-backs.
    struct FlakyStore {
        inner: InMemoryCaseStore,
        failures: usize,
        transient: bool,
        attempts: AtomicUsize,
    }

    impl FlakyStore {
        fn new(failures: usize, transient: bool) -> Self {
            let inner = InMemoryCaseStore::new();
            inner.insert(
                CaseRecord::from_json(r#"{ "id": 8, "applicantCaseName": "A v B" }"#).unwrap(),
            );
            Self {
                inner,
                failures,
                transient,
                attempts: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CaseStore for FlakyStore {
        async fn fetch(&self, case_id: u64) -> Result<CaseRecord, StoreError> {
            self.inner.fetch(case_id).await
        }

        async fn write_back(
            &self,
            case_id: u64,
            payload: &TaskListPayload,
        ) -> Result<(), StoreError> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
            if attempt < self.failures {
                return Err(if self.transient {
                    StoreError::Unavailable("busy".to_string())
                } else {
                    StoreError::Serialization {
                        case_id,
                        message: "rejected".to_string(),
                    }
                });
            }
            self.inner.write_back(case_id, payload).await
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    fn fast_config() -> PublisherConfig {
        PublisherConfig {
            max_attempts: 3,
            min_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
        }
    }

    #[tokio::test]
    async fn test_publish_writes_task_list() {
        let store = InMemoryCaseStore::new();
        store.insert(CaseRecord::from_json(r#"{ "id": 4 }"#).unwrap());
        let publisher = ProgressPublisher::new(store, fast_config());

        let payload = publisher.publish(4).await.unwrap();
        assert_eq!(payload.submission, SubmissionStatus::Blocked);
        assert_eq!(publisher.store().task_list(4), Some(payload));
    }

    #[tokio::test]
    async fn test_transient_failures_retried() {
        let publisher = ProgressPublisher::new(FlakyStore::new(2, true), fast_config());

        publisher.publish(8).await.unwrap();
        assert_eq!(publisher.store().attempts.load(Ordering::SeqCst), 3);
        assert!(publisher.store().inner.task_list(8).is_some());
    }

    #[tokio::test]
    async fn test_retries_exhausted() {
        let publisher = ProgressPublisher::new(FlakyStore::new(5, true), fast_config());

        let err = publisher.publish(8).await.unwrap_err();
        assert!(matches!(err, PublishError::Store(StoreError::Unavailable(_))));
        assert_eq!(publisher.store().attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_failure_not_retried() {
        let publisher = ProgressPublisher::new(FlakyStore::new(1, false), fast_config());

        let err = publisher.publish(8).await.unwrap_err();
        assert!(matches!(err, PublishError::Store(StoreError::Serialization { .. })));
        assert_eq!(publisher.store().attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_response_without_active_party_fails() {
        let publisher = ProgressPublisher::new(FlakyStore::new(0, true), fast_config());

        let err = publisher.publish_response(8).await.unwrap_err();
        assert!(matches!(err, PublishError::Evaluation(EvaluationError::Selection(_))));
    }

    #[test]
    fn test_config_reads_human_durations() {
        let config: PublisherConfig =
            serde_json::from_str(r#"{ "max_attempts": 5, "min_delay": "250ms", "max_delay": "3s" }"#)
                .unwrap();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.min_delay, Duration::from_millis(250));
        assert_eq!(config.max_delay, Duration::from_secs(3));

        let defaults: PublisherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, PublisherConfig::default());
    }
}
