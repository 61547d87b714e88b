//! MIAM (respondent).

use crate::case::{Answer, CaseRecord, RespondentMiam};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, MandatoryCompletion, PartyChecker};
use crate::events::RespondentEvent;
use crate::ledger::{ErrorCode, ErrorLedger};
use crate::selector::ActiveParty;

use super::section;

/// A respondent who has not attended a MIAM is asked whether they would.
/// Unwillingness needs a reason.
pub struct RespondentMiamChecker;

impl RespondentMiamChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, party: &ActiveParty<'_>) -> Requirements {
        let mut r = Requirements::new();
        r.nested(
            "miam",
            section(party, |response| response.miam.as_ref()),
            |r, miam: &RespondentMiam| {
                r.field("attendedMiam", &miam.attended_miam)
                    .when(miam.attended_miam.answered_no(), |r| {
                        r.field("willingToAttendMiam", &miam.willing_to_attend_miam)
                            .when(miam.willing_to_attend_miam.answered_no(), |r| {
                                r.field("reasonNotAttendingMiam", &miam.reason_not_attending_miam);
                            });
                    });
            },
        );
        r
    }
}

impl Default for RespondentMiamChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for RespondentMiamChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::Miam
    }

    fn is_started(&self, _case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        section(party, |response| response.miam.as_ref()).is_some_and(|miam| {
            any_present(&[
                &miam.attended_miam,
                &miam.willing_to_attend_miam,
                &miam.reason_not_attending_miam,
            ])
        })
    }

    fn is_finished(
        &self,
        _case: &CaseRecord,
        party: &ActiveParty<'_>,
        ledger: &mut ErrorLedger,
    ) -> bool {
        settle(
            self.event(),
            &self.requirements(party),
            ErrorCode::RespondentMiamError,
            ledger,
        )
    }

    fn mandatory_completion(
        &self,
        _case: &CaseRecord,
        party: &ActiveParty<'_>,
    ) -> MandatoryCompletion {
        self.requirements(party).is_satisfied().into()
    }
}
