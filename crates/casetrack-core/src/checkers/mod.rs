//! Event checkers.
//!
//! Each checker answers three questions about one section of a case:
//!
//! | Question | Meaning |
//! |----------|---------|
//! | `is_started` | Has any field of the section been touched? |
//! | `is_finished` | Is every field the section requires (after resolving conditionals) present? |
//! | `mandatory_completion` | Are the fields that gate submission present, if the event has such a rule? |
//!
//! `is_started` is a union test over the section's fields and is looser
//! than `is_finished` on purpose: a section with a dependent answer but no
//! discriminator still counts as started.
//!
//! Whole-case checkers implement [`EventChecker`]; checkers for the
//! respondent response wizard implement [`PartyChecker`] and receive the
//! active party chosen by the [`crate::selector`].

pub mod case;
pub(crate) mod party_details;
pub mod requirements;
pub mod respondent;

use serde::Serialize;

use crate::case::CaseRecord;
use crate::events::{Event, EventKind, RespondentEvent};
use crate::ledger::{ErrorCode, ErrorLedger};
use crate::selector::ActiveParty;

pub use requirements::Requirements;

/// Outcome of an event's submission-gating rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MandatoryCompletion {
    /// The mandatory fields are present
    Completed,

    /// At least one mandatory field is missing
    Outstanding,

    /// The event declares no submission-gating rule
    NoRule,
}

impl MandatoryCompletion {
    /// Only `Completed` counts. `NoRule` reports false, as callers that
    /// only see a boolean have always observed.
    pub fn is_completed(self) -> bool {
        matches!(self, MandatoryCompletion::Completed)
    }

    pub fn has_rule(self) -> bool {
        !matches!(self, MandatoryCompletion::NoRule)
    }
}

impl From<bool> for MandatoryCompletion {
    fn from(completed: bool) -> Self {
        if completed {
            MandatoryCompletion::Completed
        } else {
            MandatoryCompletion::Outstanding
        }
    }
}

/// Checker for one section of the whole case record.
///
/// Implementations are stateless and must return the same answers for
/// the same record.
pub trait EventChecker: Send + Sync {
    /// The event this checker evaluates.
    fn event(&self) -> Event;

    /// Whether any field of the section is present.
    fn is_started(&self, case: &CaseRecord) -> bool;

    /// Whether the section is complete. Records or clears the event's
    /// error code in `ledger`.
    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool;

    /// Submission-gating verdict. Defaults to "no rule".
    fn mandatory_completion(&self, _case: &CaseRecord) -> MandatoryCompletion {
        MandatoryCompletion::NoRule
    }

    fn has_mandatory_completed(&self, case: &CaseRecord) -> bool {
        self.mandatory_completion(case).is_completed()
    }
}

/// Checker for one section of the respondent response wizard.
pub trait PartyChecker: Send + Sync {
    /// The event this checker evaluates.
    fn event(&self) -> RespondentEvent;

    /// Whether any field of the section is present for the active party.
    fn is_started(&self, case: &CaseRecord, party: &ActiveParty<'_>) -> bool;

    /// Whether the section is complete for the active party.
    fn is_finished(
        &self,
        case: &CaseRecord,
        party: &ActiveParty<'_>,
        ledger: &mut ErrorLedger,
    ) -> bool;

    /// Submission-gating verdict. Defaults to "no rule".
    fn mandatory_completion(
        &self,
        _case: &CaseRecord,
        _party: &ActiveParty<'_>,
    ) -> MandatoryCompletion {
        MandatoryCompletion::NoRule
    }

    fn has_mandatory_completed(&self, case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        self.mandatory_completion(case, party).is_completed()
    }
}

/// Resolve a finished verdict from requirements, trace what is missing and
/// apply the ledger discipline for `code`.
pub(crate) fn settle<E: EventKind>(
    event: E,
    requirements: &Requirements,
    code: ErrorCode,
    ledger: &mut ErrorLedger,
) -> bool {
    let finished = verdict(event, requirements);
    ledger.record(code, finished);
    finished
}

/// Resolve a finished verdict for an event without an error code.
pub(crate) fn verdict<E: EventKind>(event: E, requirements: &Requirements) -> bool {
    let finished = requirements.is_satisfied();
    if !finished {
        tracing::trace!(event = %event, missing = ?requirements.missing(), "section incomplete");
    }
    finished
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rule_reports_false() {
        assert!(!MandatoryCompletion::NoRule.is_completed());
        assert!(!MandatoryCompletion::NoRule.has_rule());
        assert!(MandatoryCompletion::from(true).is_completed());
        assert!(MandatoryCompletion::from(false).has_rule());
    }
}
