//! Respondent's behaviour (FL401).

use crate::case::CaseRecord;
use crate::checkers::requirements::{Presence, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

/// The applicant must say what the respondent should be stopped from
/// doing. Behaviour towards the children and other reasons are optional.
pub struct RespondentBehaviourChecker;

impl RespondentBehaviourChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let mut r = Requirements::new();
        r.nested(
            "respondentBehaviourData",
            case.respondent_behaviour_data.as_ref(),
            |r, behaviour| {
                r.field(
                    "applicantWantToStopFromRespondentDoing",
                    &behaviour.applicant_want_to_stop_from_respondent_doing,
                );
            },
        );
        r
    }
}

impl Default for RespondentBehaviourChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for RespondentBehaviourChecker {
    fn event(&self) -> Event {
        Event::RespondentBehaviour
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        case.respondent_behaviour_data.as_ref().is_some_and(|b| {
            b.applicant_want_to_stop_from_respondent_doing.is_present()
                || b.applicant_want_to_stop_from_respondent_doing_to_child
                    .is_present()
                || b.other_reason_applicant_want_to_stop_from_respondent_doing
                    .is_present()
        })
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::RespondentBehaviourError,
            ledger,
        )
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        self.requirements(case).is_satisfied().into()
    }
}
