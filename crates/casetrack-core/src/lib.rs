//! # casetrack-core
//!
//! Deterministic case progress evaluation engine.
//!
//! This crate answers, for every section of a family court application:
//! - Has the applicant touched it?
//! - Is everything it requires filled in, given the answers so far?
//! - What must still be done before the case can be submitted?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: The same snapshot always produces the same tasks and artifact
//! 2. **Pure**: Evaluation reads a snapshot and never writes to it
//! 3. **Monotone**: A finished section is always a started section
//! 4. **Explicit**: A missing active respondent is an error, never a guess
//!
//! ## Example
//!
//! ```rust,ignore
//! use casetrack_core::{evaluate, CaseRecord, TaskState};
//!
//! let case = CaseRecord::from_json_file("case.json")?;
//! let evaluation = evaluate(&case)?;
//!
//! for task in &evaluation.tasks {
//!     if task.state != TaskState::Finished {
//!         println!("{}: {}", task.label(), task.state.label());
//!     }
//! }
//! println!("{}", evaluation.rendered.markdown);
//! ```

pub mod case;
pub mod checkers;
pub mod events;
pub mod ledger;
pub mod registry;
pub mod selector;
pub mod tasklist;

// Re-export main types at crate root
pub use case::{CaseError, CaseRecord, CaseType, PartyRecord};
pub use checkers::{EventChecker, MandatoryCompletion, PartyChecker};
pub use events::{Event, EventKind, RespondentEvent};
pub use ledger::{ErrorCode, ErrorEntry, ErrorLedger};
pub use registry::{
    standard_event_registry, standard_respondent_registry, ConfigurationError, EventRegistry,
    RespondentRegistry,
};
pub use selector::{ActiveParty, ActivePartySelector, SelectionError};
pub use tasklist::{
    RenderedTaskList, RespondentTaskListBuilder, SubmissionGate, SubmissionStatus, Task,
    TaskListBuilder, TaskListConfig, TaskListOutcome, TaskListRenderer, TaskState,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur during evaluation
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Case error: {0}")]
    Case(#[from] CaseError),
}

/// Result of one evaluation pass over a case.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation<E: EventKind> {
    pub case_id: u64,

    /// Tasks in configured order
    pub tasks: Vec<Task<E>>,

    pub submission: SubmissionStatus,

    /// Markdown artifact and outstanding validation messages
    pub rendered: RenderedTaskList,

    pub evaluated_at: DateTime<Utc>,
}

impl<E: EventKind> Evaluation<E> {
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.rendered.errors
    }
}

static C100_BUILDER: OnceLock<Result<TaskListBuilder<'static>, String>> = OnceLock::new();
static FL401_BUILDER: OnceLock<Result<TaskListBuilder<'static>, String>> = OnceLock::new();
static RESPONDENT_BUILDER: OnceLock<Result<RespondentTaskListBuilder<'static>, String>> =
    OnceLock::new();

fn standard_builder(case_type: CaseType) -> Result<&'static TaskListBuilder<'static>, ConfigurationError> {
    let cell = match case_type {
        CaseType::C100 => &C100_BUILDER,
        CaseType::FL401 => &FL401_BUILDER,
    };
    cell.get_or_init(|| {
        let build = || -> Result<_, ConfigurationError> {
            TaskListBuilder::new(TaskListConfig::for_case_type(case_type)?, standard_event_registry()?)
        };
        build().map_err(|e| e.to_string())
    })
    .as_ref()
    .map_err(|e| ConfigurationError::InvalidConfig(e.clone()))
}

fn standard_respondent_builder(
) -> Result<&'static RespondentTaskListBuilder<'static>, ConfigurationError> {
    RESPONDENT_BUILDER
        .get_or_init(|| {
            let build = || -> Result<_, ConfigurationError> {
                RespondentTaskListBuilder::new(
                    TaskListConfig::respondent()?,
                    standard_respondent_registry()?,
                )
            };
            build().map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| ConfigurationError::InvalidConfig(e.clone()))
}

fn conclude<E: EventKind>(
    case_id: u64,
    config: &TaskListConfig<E>,
    outcome: TaskListOutcome<E>,
) -> Evaluation<E> {
    let submission = SubmissionGate::new().status(&outcome);
    let rendered = TaskListRenderer::new().render(case_id, config, &outcome, submission);

    tracing::info!(
        case_id,
        tasks = outcome.tasks.len(),
        finished = outcome.tasks.iter().filter(|task| task.is_finished()).count(),
        outstanding = outcome.ledger.len(),
        ?submission,
        "evaluated {}",
        config.name
    );

    Evaluation {
        case_id,
        tasks: outcome.tasks,
        submission,
        rendered,
        evaluated_at: Utc::now(),
    }
}

/// Evaluate a case against the built-in task list for its application type.
///
/// This is the main entry point for whole-case evaluation.
///
/// # Arguments
///
/// * `case` - The case snapshot to evaluate
///
/// # Returns
///
/// An `Evaluation` containing:
/// - `tasks`: Every configured event with its state, in display order
/// - `submission`: Whether the case may be submitted
/// - `rendered`: The markdown task list and outstanding messages
/// - `evaluated_at`: Timestamp of evaluation
pub fn evaluate(case: &CaseRecord) -> Result<Evaluation<Event>, EvaluationError> {
    let builder = standard_builder(case.case_type())?;
    Ok(conclude(case.id, builder.config(), builder.build(case)))
}

/// Evaluate a case against a custom task list configuration.
///
/// # Arguments
///
/// * `case` - The case snapshot to evaluate
/// * `config` - Task list to evaluate against, resolved against the standard registry
pub fn evaluate_with_config(
    case: &CaseRecord,
    config: TaskListConfig<Event>,
) -> Result<Evaluation<Event>, EvaluationError> {
    let builder = TaskListBuilder::new(config, standard_event_registry()?)?;
    Ok(conclude(case.id, builder.config(), builder.build(case)))
}

/// Read a case snapshot from a JSON file and evaluate it.
pub fn evaluate_file(path: impl AsRef<Path>) -> Result<Evaluation<Event>, EvaluationError> {
    let case = CaseRecord::from_json_file(path)?;
    evaluate(&case)
}

/// Evaluate the response of the case's active respondent.
///
/// Fails with [`SelectionError`] unless exactly one respondent is flagged
/// as active.
pub fn evaluate_response(case: &CaseRecord) -> Result<Evaluation<RespondentEvent>, EvaluationError> {
    let builder = standard_respondent_builder()?;
    let outcome = builder.build(case)?;
    Ok(conclude(case.id, builder.config(), outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        let case_json = r#"{
            "id": 1700000000000001,
            "caseTypeOfApplication": "C100",
            "applicantCaseName": "Smith v Jones",
            "isCaseUrgent": "No",
            "doYouNeedAWithoutNoticeHearing": "No",
            "doYouRequireAHearingWithReducedNotice": "No",
            "areRespondentsAwareOfProceedings": "Yes"
        }"#;

        let case = CaseRecord::from_json(case_json).unwrap();
        let evaluation = evaluate(&case).unwrap();

        assert_eq!(evaluation.case_id, 1700000000000001);
        assert_eq!(evaluation.tasks.len(), 14);
        assert_eq!(evaluation.tasks[0].state, TaskState::Finished);
        assert_eq!(evaluation.tasks[2].event, Event::HearingUrgency);
        assert_eq!(evaluation.tasks[2].state, TaskState::Finished);
        assert_eq!(evaluation.submission, SubmissionStatus::Blocked);
        assert!(evaluation
            .errors()
            .iter()
            .all(|entry| entry.code != ErrorCode::HearingUrgencyError));
        assert!(evaluation
            .rendered
            .markdown
            .contains("/cases/case-details/1700000000000001/trigger/caseName/caseName1"));
    }

    #[test]
    fn test_fl401_uses_fl401_task_list() {
        let case_json = r#"{
            "id": 42,
            "caseTypeOfApplication": "FL401",
            "typeOfApplicationOrders": { "orderType": ["occupationOrder"] }
        }"#;

        let case = CaseRecord::from_json(case_json).unwrap();
        let evaluation = evaluate(&case).unwrap();

        assert!(evaluation.tasks.iter().any(|task| task.event == Event::Home));
        assert!(evaluation
            .errors()
            .iter()
            .any(|entry| entry.code == ErrorCode::HomeError));
        assert!(evaluation
            .rendered
            .markdown
            .contains("Statement of truth and submit"));
    }

    #[test]
    fn test_response_requires_active_party() {
        let case = CaseRecord::from_json(r#"{ "id": 9 }"#).unwrap();
        let err = evaluate_response(&case).unwrap_err();
        assert!(matches!(
            err,
            EvaluationError::Selection(SelectionError::NoActiveParty { case_id: 9 })
        ));
    }

    #[test]
    fn test_response_evaluation() {
        let case_json = r#"{
            "id": 9,
            "respondents": [{
                "id": "r1",
                "value": {
                    "firstName": "Chris",
                    "response": {
                        "activeRespondent": "Yes",
                        "consent": {
                            "consentToTheApplication": "Yes",
                            "applicationReceivedDate": "2024-03-01",
                            "permissionFromCourt": "No"
                        }
                    }
                }
            }]
        }"#;

        let case = CaseRecord::from_json(case_json).unwrap();
        let evaluation = evaluate_response(&case).unwrap();

        assert_eq!(evaluation.tasks[0].event, RespondentEvent::Consent);
        assert_eq!(evaluation.tasks[0].state, TaskState::Finished);
        assert_eq!(evaluation.submission, SubmissionStatus::Blocked);
    }

    #[test]
    fn test_custom_config() {
        let config = TaskListConfig::<Event>::from_yaml(
            r#"
name: Custom
link_template: "/c/${CASE_ID}/${EVENT_ID}"
sections:
  - title: Only
    events: [caseName]
"#,
        )
        .unwrap();
        let case = CaseRecord::from_json(r#"{ "id": 3 }"#).unwrap();
        let evaluation = evaluate_with_config(&case, config).unwrap();
        assert_eq!(evaluation.tasks.len(), 1);
        assert!(evaluation.rendered.markdown.starts_with("## Only\n"));
    }

    #[test]
    fn test_missing_case_file() {
        let err = evaluate_file("/nonexistent/case.json").unwrap_err();
        assert!(matches!(err, EvaluationError::Case(CaseError::IoError(_))));
    }
}
