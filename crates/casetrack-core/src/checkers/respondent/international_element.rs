//! International element (respondent).

use crate::case::{Answer, CaseRecord, InternationalElements};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, MandatoryCompletion, PartyChecker};
use crate::events::RespondentEvent;
use crate::ledger::{ErrorCode, ErrorLedger};
use crate::selector::ActiveParty;

use super::section;

pub struct RespondentInternationalElementChecker;

impl RespondentInternationalElementChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, party: &ActiveParty<'_>) -> Requirements {
        let mut r = Requirements::new();
        r.nested(
            "internationalElements",
            section(party, |response| response.international_elements.as_ref()),
            |r, elements: &InternationalElements| {
                r.field("reasonForChild", &elements.reason_for_child)
                    .when(elements.reason_for_child.answered_yes(), |r| {
                        r.field("reasonForChildDetails", &elements.reason_for_child_details);
                    })
                    .field("reasonForParent", &elements.reason_for_parent)
                    .when(elements.reason_for_parent.answered_yes(), |r| {
                        r.field("reasonForParentDetails", &elements.reason_for_parent_details);
                    })
                    .field("reasonForJurisdiction", &elements.reason_for_jurisdiction)
                    .when(elements.reason_for_jurisdiction.answered_yes(), |r| {
                        r.field(
                            "reasonForJurisdictionDetails",
                            &elements.reason_for_jurisdiction_details,
                        );
                    })
                    .field("requestToAuthority", &elements.request_to_authority)
                    .when(elements.request_to_authority.answered_yes(), |r| {
                        r.field(
                            "requestToAuthorityDetails",
                            &elements.request_to_authority_details,
                        );
                    });
            },
        );
        r
    }
}

impl Default for RespondentInternationalElementChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for RespondentInternationalElementChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::InternationalElement
    }

    fn is_started(&self, _case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        section(party, |response| response.international_elements.as_ref()).is_some_and(
            |elements| {
                any_present(&[
                    &elements.reason_for_child,
                    &elements.reason_for_parent,
                    &elements.reason_for_jurisdiction,
                    &elements.request_to_authority,
                ])
            },
        )
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
            ErrorCode::RespondentInternationalElementError,
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
