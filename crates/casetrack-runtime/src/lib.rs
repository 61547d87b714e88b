//! # casetrack-runtime
//!
//! Case store collaborators for casetrack.
//!
//! `casetrack-core` evaluates snapshots and never performs I/O. This crate
//! supplies the snapshot and takes the rendered task list back:
//! - [`CaseStore`] abstracts the case record store
//! - [`InMemoryCaseStore`] and [`FileCaseStore`] implement it
//! - [`ProgressPublisher`] runs an evaluation pass and writes the artifact
//!   back, retrying transient store failures
//!
//! ## Example
//!
//! ```rust,ignore
//! use casetrack_runtime::{FileCaseStore, ProgressPublisher, PublisherConfig};
//!
//! let store = FileCaseStore::new("./cases");
//! let publisher = ProgressPublisher::new(store, PublisherConfig::default());
//!
//! let payload = publisher.publish(1700000000000001).await?;
//! println!("{}", payload.task_list);
//! ```

pub mod publisher;
pub mod store;

pub use publisher::{ProgressPublisher, PublishError, PublisherConfig};
pub use store::{CaseStore, FileCaseStore, InMemoryCaseStore, StoreError, TaskListPayload};
