//! Task list builders.
//!
//! A builder resolves its configuration against a registry once, then
//! evaluates every configured event against each case snapshot it is given.

use crate::case::CaseRecord;
use crate::checkers::{EventChecker, PartyChecker};
use crate::events::{Event, EventKind, RespondentEvent};
use crate::ledger::ErrorLedger;
use crate::registry::{ConfigurationError, EventRegistry, Registry, RespondentRegistry};
use crate::selector::{ActivePartySelector, SelectionError};

use super::config::TaskListConfig;
use super::task::{Task, TaskState};

/// An event resolved against its checker.
pub struct EventDescriptor<'r, E: EventKind, C: ?Sized> {
    pub event: E,

    /// Position in the configured list, starting at zero
    pub order: usize,

    pub section: String,

    pub checker: &'r C,
}

/// Result of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListOutcome<E: EventKind> {
    /// Tasks in configured order
    pub tasks: Vec<Task<E>>,

    /// Outstanding validation messages once every event has been evaluated
    pub ledger: ErrorLedger,
}

impl<E: EventKind> TaskListOutcome<E> {
    pub fn task(&self, event: E) -> Option<&Task<E>> {
        self.tasks.iter().find(|task| task.event == event)
    }

    pub fn state_of(&self, event: E) -> Option<TaskState> {
        self.task(event).map(|task| task.state)
    }
}

fn describe<'r, E: EventKind, C: ?Sized>(
    config: &TaskListConfig<E>,
    registry: &'r Registry<E, C>,
) -> Result<Vec<EventDescriptor<'r, E, C>>, ConfigurationError> {
    config
        .entries()
        .enumerate()
        .map(|(order, (section, event))| {
            registry.get(event).map(|checker| EventDescriptor {
                event,
                order,
                section: section.to_string(),
                checker,
            })
        })
        .collect()
}

/// Builds the whole-case task list of C100 and FL401 applications.
pub struct TaskListBuilder<'r> {
    config: TaskListConfig<Event>,
    descriptors: Vec<EventDescriptor<'r, Event, dyn EventChecker>>,
}

impl<'r> TaskListBuilder<'r> {
    /// Resolve `config` against `registry`.
    ///
    /// Fails if a configured event has no registered checker.
    pub fn new(
        config: TaskListConfig<Event>,
        registry: &'r EventRegistry,
    ) -> Result<Self, ConfigurationError> {
        let descriptors = describe(&config, registry)?;
        Ok(Self {
            config,
            descriptors,
        })
    }

    pub fn config(&self) -> &TaskListConfig<Event> {
        &self.config
    }

    pub fn descriptors(&self) -> &[EventDescriptor<'r, Event, dyn EventChecker>] {
        &self.descriptors
    }

    /// Evaluate every configured event against `case`.
    pub fn build(&self, case: &CaseRecord) -> TaskListOutcome<Event> {
        let mut ledger = ErrorLedger::new();
        let tasks = self
            .descriptors
            .iter()
            .map(|descriptor| {
                let checker = descriptor.checker;
                let finished = checker.is_finished(case, &mut ledger);
                let state = TaskState::derive(checker.is_started(case), finished);
                tracing::debug!(case_id = case.id, event = %descriptor.event, %state, "evaluated");

                Task {
                    event: descriptor.event,
                    order: descriptor.order,
                    section: descriptor.section.clone(),
                    state,
                    mandatory: checker.mandatory_completion(case),
                }
            })
            .collect();

        TaskListOutcome { tasks, ledger }
    }
}

/// Builds the respondent response task list for the active respondent.
pub struct RespondentTaskListBuilder<'r> {
    config: TaskListConfig<RespondentEvent>,
    descriptors: Vec<EventDescriptor<'r, RespondentEvent, dyn PartyChecker>>,
    selector: ActivePartySelector,
}

impl<'r> RespondentTaskListBuilder<'r> {
    /// Resolve `config` against `registry`.
    pub fn new(
        config: TaskListConfig<RespondentEvent>,
        registry: &'r RespondentRegistry,
    ) -> Result<Self, ConfigurationError> {
        let descriptors = describe(&config, registry)?;
        Ok(Self {
            config,
            descriptors,
            selector: ActivePartySelector::new(),
        })
    }

    pub fn config(&self) -> &TaskListConfig<RespondentEvent> {
        &self.config
    }

    pub fn descriptors(&self) -> &[EventDescriptor<'r, RespondentEvent, dyn PartyChecker>] {
        &self.descriptors
    }

    /// Select the active respondent of `case` and evaluate every configured
    /// event for it.
    pub fn build(
        &self,
        case: &CaseRecord,
    ) -> Result<TaskListOutcome<RespondentEvent>, SelectionError> {
        let party = self.selector.select(case)?;

        let mut ledger = ErrorLedger::new();
        let tasks = self
            .descriptors
            .iter()
            .map(|descriptor| {
                let checker = descriptor.checker;
                let finished = checker.is_finished(case, &party, &mut ledger);
                let state = TaskState::derive(checker.is_started(case, &party), finished);
                tracing::debug!(
                    case_id = case.id,
                    party = party.index,
                    event = %descriptor.event,
                    %state,
                    "evaluated"
                );

                Task {
                    event: descriptor.event,
                    order: descriptor.order,
                    section: descriptor.section.clone(),
                    state,
                    mandatory: checker.mandatory_completion(case, &party),
                }
            })
            .collect();

        Ok(TaskListOutcome { tasks, ledger })
    }
}
