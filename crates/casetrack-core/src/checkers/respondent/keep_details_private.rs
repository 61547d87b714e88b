//! Keep your details private.

use crate::case::{Answer, CaseRecord, KeepDetailsPrivate};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, MandatoryCompletion, PartyChecker};
use crate::events::RespondentEvent;
use crate::ledger::{ErrorCode, ErrorLedger};
use crate::selector::ActiveParty;

use super::section;

pub struct KeepDetailsPrivateChecker;

impl KeepDetailsPrivateChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, party: &ActiveParty<'_>) -> Requirements {
        let mut r = Requirements::new();
        r.nested(
            "keepDetailsPrivate",
            section(party, |response| response.keep_details_private.as_ref()),
            |r, private: &KeepDetailsPrivate| {
                r.field(
                    "otherPeopleKnowYourContactDetails",
                    &private.other_people_know_your_contact_details,
                )
                .field("confidentiality", &private.confidentiality)
                .when(private.confidentiality.answered_yes(), |r| {
                    r.field("confidentialityList", &private.confidentiality_list);
                });
            },
        );
        r
    }
}

impl Default for KeepDetailsPrivateChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for KeepDetailsPrivateChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::KeepDetailsPrivate
    }

    fn is_started(&self, _case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        section(party, |response| response.keep_details_private.as_ref()).is_some_and(|private| {
            any_present(&[
                &private.other_people_know_your_contact_details,
                &private.confidentiality,
                &private.confidentiality_list,
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
            ErrorCode::KeepDetailsPrivateError,
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
