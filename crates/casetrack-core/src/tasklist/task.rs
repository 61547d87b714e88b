//! Tasks and their derived state.

use serde::Serialize;
use std::fmt;

use crate::checkers::MandatoryCompletion;
use crate::events::EventKind;

/// Progress of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    NotStarted,
    InProgress,
    Finished,
}

impl TaskState {
    /// Derive the state from a checker's two verdicts.
    ///
    /// A finished section is `Finished` even when `is_started` disagrees.
    pub fn derive(started: bool, finished: bool) -> Self {
        match (started, finished) {
            (_, true) => TaskState::Finished,
            (true, false) => TaskState::InProgress,
            (false, false) => TaskState::NotStarted,
        }
    }

    /// Label shown next to the task.
    pub fn label(self) -> &'static str {
        match self {
            TaskState::NotStarted => "Not started",
            TaskState::InProgress => "In progress",
            TaskState::Finished => "Finished",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskState::NotStarted => "NOT_STARTED",
            TaskState::InProgress => "IN_PROGRESS",
            TaskState::Finished => "FINISHED",
        })
    }
}

/// One event of the task list with its computed state.
///
/// Tasks are created fresh by every evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task<E: EventKind> {
    pub event: E,

    /// Position in the configured list, starting at zero
    pub order: usize,

    /// Title of the section the task is listed under
    pub section: String,

    pub state: TaskState,

    pub mandatory: MandatoryCompletion,
}

impl<E: EventKind> Task<E> {
    pub fn label(&self) -> &'static str {
        self.event.label()
    }

    pub fn is_finished(&self) -> bool {
        self.state == TaskState::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_derivation() {
        assert_eq!(TaskState::derive(false, false), TaskState::NotStarted);
        assert_eq!(TaskState::derive(true, false), TaskState::InProgress);
        assert_eq!(TaskState::derive(true, true), TaskState::Finished);
        assert_eq!(TaskState::derive(false, true), TaskState::Finished);
    }

    #[test]
    fn test_state_wire_format() {
        let json = serde_json::to_string(&TaskState::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        assert_eq!(TaskState::NotStarted.to_string(), "NOT_STARTED");
    }
}
