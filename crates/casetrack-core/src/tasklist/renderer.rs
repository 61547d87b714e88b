//! Task list rendering.
//!
//! The rendered artifact is markdown: a heading per configured section with
//! one linked bullet per task, then the outstanding validation messages,
//! then the submit entry. Rendering is a pure function of its inputs, so an
//! unchanged task list always renders to the same bytes.

use serde::Serialize;

use crate::events::EventKind;
use crate::ledger::ErrorEntry;

use super::builder::TaskListOutcome;
use super::config::TaskListConfig;
use super::gate::SubmissionStatus;

const SUBMIT_BLOCKED: &str = "Cannot start yet";

/// The artifact written back to the case store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTaskList {
    pub markdown: String,

    /// Outstanding validation messages, in code order
    pub errors: Vec<ErrorEntry>,
}

/// Composes tasks and ledger entries into a [`RenderedTaskList`].
#[derive(Debug, Default)]
pub struct TaskListRenderer;

impl TaskListRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<E: EventKind>(
        &self,
        case_id: u64,
        config: &TaskListConfig<E>,
        outcome: &TaskListOutcome<E>,
        status: SubmissionStatus,
    ) -> RenderedTaskList {
        let mut lines: Vec<String> = Vec::new();

        for section in &config.sections {
            let tasks: Vec<_> = outcome
                .tasks
                .iter()
                .filter(|task| section.events.contains(&task.event))
                .collect();
            if tasks.is_empty() {
                continue;
            }

            push_heading(&mut lines, &section.title);
            for task in tasks {
                lines.push(format!(
                    "- [{}]({}) {}",
                    task.label(),
                    config.link_for(case_id, task.event.id()),
                    task.state.label()
                ));
            }
        }

        let errors: Vec<ErrorEntry> = outcome.ledger.entries().cloned().collect();
        if !errors.is_empty() {
            push_heading(&mut lines, &config.error_heading);
            for entry in &errors {
                lines.push(format!(
                    "- [{}]({})",
                    entry.message,
                    config.link_for(case_id, &entry.event)
                ));
            }
        }

        if let Some(submit) = &config.submit {
            push_heading(&mut lines, &submit.title);
            match (status, config.submit_link(case_id)) {
                (SubmissionStatus::Ready, Some(link)) => {
                    lines.push(format!("- [{}]({})", submit.label, link));
                }
                _ => lines.push(format!("- {} {}", submit.label, SUBMIT_BLOCKED)),
            }
        }

        let mut markdown = lines.join("\n");
        markdown.push('\n');

        RenderedTaskList { markdown, errors }
    }
}

fn push_heading(lines: &mut Vec<String>, title: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("## {}", title));
    lines.push(String::new());
}
