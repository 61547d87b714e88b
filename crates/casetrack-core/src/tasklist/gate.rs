//! Submission gating.

use serde::Serialize;

use crate::events::EventKind;

use super::builder::TaskListOutcome;

/// Whether a case may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Ready,
    Blocked,
}

impl SubmissionStatus {
    pub fn is_ready(self) -> bool {
        self == SubmissionStatus::Ready
    }
}

/// Opens once every event with a submission rule is completed and no
/// validation message is outstanding. Events without a rule never block.
#[derive(Debug, Default)]
pub struct SubmissionGate;

impl SubmissionGate {
    pub fn new() -> Self {
        Self
    }

    pub fn status<E: EventKind>(&self, outcome: &TaskListOutcome<E>) -> SubmissionStatus {
        if outcome.ledger.is_empty() && self.outstanding(outcome).is_empty() {
            SubmissionStatus::Ready
        } else {
            SubmissionStatus::Blocked
        }
    }

    /// Events whose submission rule is not yet met, in task order.
    pub fn outstanding<E: EventKind>(&self, outcome: &TaskListOutcome<E>) -> Vec<E> {
        outcome
            .tasks
            .iter()
            .filter(|task| task.mandatory.has_rule() && !task.mandatory.is_completed())
            .map(|task| task.event)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::MandatoryCompletion;
    use crate::events::Event;
    use crate::ledger::{ErrorCode, ErrorLedger};
    use crate::tasklist::{Task, TaskState};

    fn task(event: Event, mandatory: MandatoryCompletion) -> Task<Event> {
        Task {
            event,
            order: 0,
            section: "Case".to_string(),
            state: TaskState::Finished,
            mandatory,
        }
    }

    #[test]
    fn test_completed_rules_and_empty_ledger_ready() {
        let outcome = TaskListOutcome {
            tasks: vec![
                task(Event::CaseName, MandatoryCompletion::Completed),
                task(Event::OtherProceedings, MandatoryCompletion::NoRule),
            ],
            ledger: ErrorLedger::new(),
        };
        assert_eq!(SubmissionGate::new().status(&outcome), SubmissionStatus::Ready);
    }

    #[test]
    fn test_outstanding_rule_blocks() {
        let outcome = TaskListOutcome {
            tasks: vec![
                task(Event::CaseName, MandatoryCompletion::Completed),
                task(Event::Miam, MandatoryCompletion::Outstanding),
            ],
            ledger: ErrorLedger::new(),
        };
        let gate = SubmissionGate::new();
        assert_eq!(gate.status(&outcome), SubmissionStatus::Blocked);
        assert_eq!(gate.outstanding(&outcome), vec![Event::Miam]);
    }

    #[test]
    fn test_outstanding_message_blocks() {
        let mut ledger = ErrorLedger::new();
        ledger.record(ErrorCode::WelshLanguageError, false);
        let outcome = TaskListOutcome {
            tasks: vec![task(Event::CaseName, MandatoryCompletion::Completed)],
            ledger,
        };
        assert!(!SubmissionGate::new().status(&outcome).is_ready());
    }
}
