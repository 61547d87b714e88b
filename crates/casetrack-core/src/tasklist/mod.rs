//! Task lists.
//!
//! A [`TaskListConfig`] orders events into sections. A builder resolves it
//! against a registry and turns a case snapshot into ordered [`Task`]s plus
//! a settled ledger. The [`SubmissionGate`] decides whether the case may be
//! submitted and the [`TaskListRenderer`] composes everything into one
//! artifact.

mod builder;
mod config;
mod gate;
mod renderer;
mod schema;
mod task;

pub use builder::{EventDescriptor, RespondentTaskListBuilder, TaskListBuilder, TaskListOutcome};
pub use config::{Section, SubmitEntry, TaskListConfig};
pub use gate::{SubmissionGate, SubmissionStatus};
pub use renderer::{RenderedTaskList, TaskListRenderer};
pub use schema::validate_tasklist_schema;
pub use task::{Task, TaskState};
