//! Error ledger: the outstanding validation messages of one evaluation pass.
//!
//! Checkers write to the ledger while they evaluate. When a section is
//! finished its code is cleared; when it is blocked its code is added.
//! Whatever remains when the pass settles is what the task list shows
//! under its error heading.
//!
//! A ledger is a plain value owned by one pass. It is never shared
//! between cases.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::events::{Event, EventKind, RespondentEvent};

/// Validation message codes. Each code belongs to exactly one event.
///
/// Declaration order is the order entries are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    CaseNameError,
    TypeOfApplicationError,
    HearingUrgencyError,
    ApplicantDetailsError,
    ChildDetailsError,
    RespondentDetailsError,
    MiamError,
    AllegationsOfHarmError,
    AttendingTheHearingError,
    InternationalElementError,
    WelshLanguageError,
    #[serde(rename = "FL401_TYPE_OF_APPLICATION_ERROR")]
    Fl401TypeOfApplicationError,
    WithoutNoticeOrderError,
    RelationshipToRespondentError,
    RespondentBehaviourError,
    HomeError,
    ConsentError,
    KeepDetailsPrivateError,
    ConfirmContactDetailsError,
    AttendingTheCourtError,
    RespondentMiamError,
    CurrentOrPreviousProceedingsError,
    RespondentAllegationsOfHarmError,
    RespondentInternationalElementError,
    AbilityToParticipateError,
}

impl ErrorCode {
    /// Id of the event this code belongs to.
    pub fn event_id(self) -> &'static str {
        match self {
            ErrorCode::CaseNameError => Event::CaseName.id(),
            ErrorCode::TypeOfApplicationError => Event::TypeOfApplication.id(),
            ErrorCode::HearingUrgencyError => Event::HearingUrgency.id(),
            ErrorCode::ApplicantDetailsError => Event::ApplicantDetails.id(),
            ErrorCode::ChildDetailsError => Event::ChildDetails.id(),
            ErrorCode::RespondentDetailsError => Event::RespondentDetails.id(),
            ErrorCode::MiamError => Event::Miam.id(),
            ErrorCode::AllegationsOfHarmError => Event::AllegationsOfHarm.id(),
            ErrorCode::AttendingTheHearingError => Event::AttendingTheHearing.id(),
            ErrorCode::InternationalElementError => Event::InternationalElement.id(),
            ErrorCode::WelshLanguageError => Event::WelshLanguageRequirements.id(),
            ErrorCode::Fl401TypeOfApplicationError => Event::Fl401TypeOfApplication.id(),
            ErrorCode::WithoutNoticeOrderError => Event::WithoutNoticeOrder.id(),
            ErrorCode::RelationshipToRespondentError => Event::RelationshipToRespondent.id(),
            ErrorCode::RespondentBehaviourError => Event::RespondentBehaviour.id(),
            ErrorCode::HomeError => Event::Home.id(),
            ErrorCode::ConsentError => RespondentEvent::Consent.id(),
            ErrorCode::KeepDetailsPrivateError => RespondentEvent::KeepDetailsPrivate.id(),
            ErrorCode::ConfirmContactDetailsError => RespondentEvent::ConfirmContactDetails.id(),
            ErrorCode::AttendingTheCourtError => RespondentEvent::AttendingTheCourt.id(),
            ErrorCode::RespondentMiamError => RespondentEvent::Miam.id(),
            ErrorCode::CurrentOrPreviousProceedingsError => {
                RespondentEvent::CurrentOrPreviousProceedings.id()
            }
            ErrorCode::RespondentAllegationsOfHarmError => RespondentEvent::AllegationsOfHarm.id(),
            ErrorCode::RespondentInternationalElementError => {
                RespondentEvent::InternationalElement.id()
            }
            ErrorCode::AbilityToParticipateError => RespondentEvent::AbilityToParticipate.id(),
        }
    }

    /// Standard message shown while the code is outstanding.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::CaseNameError => "Add the case name",
            ErrorCode::TypeOfApplicationError => "Add details about the type of application",
            ErrorCode::HearingUrgencyError => "Add details about hearing urgency",
            ErrorCode::ApplicantDetailsError => "Add details about the applicants",
            ErrorCode::ChildDetailsError => "Add details about the children",
            ErrorCode::RespondentDetailsError => "Add details about the respondents",
            ErrorCode::MiamError => "Add details about MIAM",
            ErrorCode::AllegationsOfHarmError => "Add details about allegations of harm",
            ErrorCode::AttendingTheHearingError => "Add details about attending the hearing",
            ErrorCode::InternationalElementError => "Add details about the international element",
            ErrorCode::WelshLanguageError => "Add details about Welsh language requirements",
            ErrorCode::Fl401TypeOfApplicationError => "Add details about the type of application",
            ErrorCode::WithoutNoticeOrderError => "Add details about the without notice order",
            ErrorCode::RelationshipToRespondentError => {
                "Add details about the relationship to the respondent"
            }
            ErrorCode::RespondentBehaviourError => "Add details about the respondent's behaviour",
            ErrorCode::HomeError => "Add details about the home",
            ErrorCode::ConsentError => "Tell us whether you consent to the application",
            ErrorCode::KeepDetailsPrivateError => "Tell us which details to keep private",
            ErrorCode::ConfirmContactDetailsError => "Confirm your contact details",
            ErrorCode::AttendingTheCourtError => "Tell us about your needs at court",
            ErrorCode::RespondentMiamError => "Add details about MIAM",
            ErrorCode::CurrentOrPreviousProceedingsError => {
                "Add details about current or past proceedings"
            }
            ErrorCode::RespondentAllegationsOfHarmError => "Add details about allegations of harm",
            ErrorCode::RespondentInternationalElementError => {
                "Add details about the international element"
            }
            ErrorCode::AbilityToParticipateError => "Tell us about your ability to participate",
        }
    }
}

/// One outstanding validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    /// Id of the event the message belongs to
    pub event: String,

    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,
}

/// Accumulator of outstanding validation messages, keyed by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLedger {
    entries: BTreeMap<ErrorCode, ErrorEntry>,
}

impl ErrorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Adding a code that is already present is a no-op.
    pub fn add(&mut self, event: &str, code: ErrorCode, message: impl Into<String>) {
        self.entries.entry(code).or_insert_with(|| ErrorEntry {
            event: event.to_string(),
            code,
            message: message.into(),
        });
    }

    /// Remove an entry. Removing an absent code is a no-op.
    pub fn remove(&mut self, code: ErrorCode) {
        self.entries.remove(&code);
    }

    /// Apply the ledger discipline for one checker verdict: clear the code
    /// when the section is complete, otherwise add it with its standard
    /// message.
    pub fn record(&mut self, code: ErrorCode, complete: bool) {
        if complete {
            self.remove(code);
        } else {
            self.add(code.event_id(), code, code.message());
        }
    }

    pub fn contains(&self, code: ErrorCode) -> bool {
        self.entries.contains_key(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Outstanding entries in code order.
    pub fn entries(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.values()
    }

    pub fn codes(&self) -> impl Iterator<Item = ErrorCode> + '_ {
        self.entries.keys().copied()
    }

    pub fn into_entries(self) -> Vec<ErrorEntry> {
        self.entries.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut ledger = ErrorLedger::new();
        ledger.add("caseName", ErrorCode::CaseNameError, "first");
        ledger.add("caseName", ErrorCode::CaseNameError, "second");

        assert_eq!(ledger.len(), 1);
        let entry = ledger.entries().next().unwrap();
        assert_eq!(entry.message, "first");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut ledger = ErrorLedger::new();
        ledger.remove(ErrorCode::MiamError);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_record_applies_discipline() {
        let mut ledger = ErrorLedger::new();
        ledger.record(ErrorCode::MiamError, false);
        assert!(ledger.contains(ErrorCode::MiamError));

        let entry = ledger.entries().next().unwrap();
        assert_eq!(entry.event, "miam");
        assert_eq!(entry.message, "Add details about MIAM");

        ledger.record(ErrorCode::MiamError, true);
        assert!(!ledger.contains(ErrorCode::MiamError));
    }

    #[test]
    fn test_entries_follow_code_order() {
        let mut ledger = ErrorLedger::new();
        ledger.record(ErrorCode::WelshLanguageError, false);
        ledger.record(ErrorCode::CaseNameError, false);
        ledger.record(ErrorCode::MiamError, false);

        let codes: Vec<ErrorCode> = ledger.codes().collect();
        assert_eq!(
            codes,
            vec![
                ErrorCode::CaseNameError,
                ErrorCode::MiamError,
                ErrorCode::WelshLanguageError
            ]
        );
    }

    #[test]
    fn test_code_wire_names() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::Fl401TypeOfApplicationError).unwrap(),
            "\"FL401_TYPE_OF_APPLICATION_ERROR\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::AllegationsOfHarmError).unwrap(),
            "\"ALLEGATIONS_OF_HARM_ERROR\""
        );
    }
}
