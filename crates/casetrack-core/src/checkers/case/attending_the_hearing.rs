//! Attending the hearing.

use crate::case::{Answer, CaseRecord};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

/// Five support needs, each a Yes/No with details on Yes.
pub struct AttendingTheHearingChecker;

impl AttendingTheHearingChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let mut r = Requirements::new();
        r.field("isWelshNeeded", &case.is_welsh_needed)
            .when(case.is_welsh_needed.answered_yes(), |r| {
                r.field("welshNeeds", &case.welsh_needs);
            })
            .field("isInterpreterNeeded", &case.is_interpreter_needed)
            .when(case.is_interpreter_needed.answered_yes(), |r| {
                r.field("interpreterNeeds", &case.interpreter_needs);
            })
            .field("isDisabilityPresent", &case.is_disability_present)
            .when(case.is_disability_present.answered_yes(), |r| {
                r.field("adjustmentsRequired", &case.adjustments_required);
            })
            .field(
                "isSpecialArrangementsRequired",
                &case.is_special_arrangements_required,
            )
            .when(case.is_special_arrangements_required.answered_yes(), |r| {
                r.field(
                    "specialArrangementsRequired",
                    &case.special_arrangements_required,
                );
            })
            .field("isIntermediaryNeeded", &case.is_intermediary_needed)
            .when(case.is_intermediary_needed.answered_yes(), |r| {
                r.field("reasonsForIntermediary", &case.reasons_for_intermediary);
            });
        r
    }
}

impl Default for AttendingTheHearingChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for AttendingTheHearingChecker {
    fn event(&self) -> Event {
        Event::AttendingTheHearing
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        any_present(&[
            &case.is_welsh_needed,
            &case.welsh_needs,
            &case.is_interpreter_needed,
            &case.interpreter_needs,
            &case.is_disability_present,
            &case.adjustments_required,
            &case.is_special_arrangements_required,
            &case.special_arrangements_required,
            &case.is_intermediary_needed,
            &case.reasons_for_intermediary,
        ])
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::AttendingTheHearingError,
            ledger,
        )
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        self.requirements(case).is_satisfied().into()
    }
}
