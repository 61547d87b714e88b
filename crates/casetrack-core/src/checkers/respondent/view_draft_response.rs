//! View a draft of your response.

use crate::case::CaseRecord;
use crate::checkers::requirements::Requirements;
use crate::checkers::{verdict, PartyChecker};
use crate::events::RespondentEvent;
use crate::ledger::ErrorLedger;
use crate::selector::ActiveParty;

use super::{
    draft_for, AbilityToParticipateChecker, AttendingTheCourtChecker,
    ConfirmContactDetailsChecker, ConsentChecker, CurrentOrPreviousProceedingsChecker,
    KeepDetailsPrivateChecker, RespondentAllegationsOfHarmChecker,
    RespondentInternationalElementChecker, RespondentMiamChecker,
};

/// Response sections the draft is generated from.
const SECTIONS: &[&dyn PartyChecker] = &[
    &ConsentChecker,
    &KeepDetailsPrivateChecker,
    &ConfirmContactDetailsChecker,
    &AttendingTheCourtChecker,
    &RespondentMiamChecker,
    &CurrentOrPreviousProceedingsChecker,
    &RespondentAllegationsOfHarmChecker,
    &RespondentInternationalElementChecker,
    &AbilityToParticipateChecker,
];

/// The draft is generated from the response sections, so the task starts
/// with the first saved section and finishes once a draft document exists
/// for the active party. It has no submission rule of its own.
pub struct ViewDraftResponseChecker;

impl ViewDraftResponseChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ViewDraftResponseChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for ViewDraftResponseChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::ViewDraftResponse
    }

    fn is_started(&self, case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        SECTIONS
            .iter()
            .any(|section| section.is_started(case, party))
    }

    fn is_finished(
        &self,
        case: &CaseRecord,
        party: &ActiveParty<'_>,
        _ledger: &mut ErrorLedger,
    ) -> bool {
        let mut r = Requirements::new();
        r.when(!self.is_started(case, party), |r| {
            r.unmet("response");
        })
        .when(draft_for(case, party).is_none(), |r| {
            r.unmet("draftResponse");
        });
        verdict(self.event(), &r)
    }
}
