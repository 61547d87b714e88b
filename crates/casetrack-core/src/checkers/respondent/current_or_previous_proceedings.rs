//! Current or previous proceedings (respondent).

use crate::case::{Answer, CaseRecord, CurrentOrPreviousProceedings};
use crate::checkers::requirements::{any_present, items, Requirements};
use crate::checkers::{settle, MandatoryCompletion, PartyChecker};
use crate::events::RespondentEvent;
use crate::ledger::{ErrorCode, ErrorLedger};
use crate::selector::ActiveParty;

use super::section;

pub struct CurrentOrPreviousProceedingsChecker;

impl CurrentOrPreviousProceedingsChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, party: &ActiveParty<'_>) -> Requirements {
        let mut r = Requirements::new();
        r.nested(
            "currentOrPreviousProceedings",
            section(party, |response| response.current_or_previous_proceedings.as_ref()),
            |r, proceedings: &CurrentOrPreviousProceedings| {
                let any_proceedings = proceedings
                    .have_children_been_involved_in_court_case
                    .answered_yes()
                    || proceedings.court_order_made_for_protection.answered_yes();

                r.field(
                    "haveChildrenBeenInvolvedInCourtCase",
                    &proceedings.have_children_been_involved_in_court_case,
                )
                .field(
                    "courtOrderMadeForProtection",
                    &proceedings.court_order_made_for_protection,
                )
                .when(any_proceedings, |r| {
                    r.each(
                        "proceedingsList",
                        items(&proceedings.proceedings_list),
                        |r, proceeding| {
                            let proceeding = &proceeding.value;
                            r.field(
                                "previousOrOngoingProceedings",
                                &proceeding.previous_or_ongoing_proceedings,
                            )
                            .field("caseNumber", &proceeding.case_number)
                            .field("nameOfCourt", &proceeding.name_of_court)
                            .field("dateStarted", &proceeding.date_started);
                        },
                    );
                });
            },
        );
        r
    }
}

impl Default for CurrentOrPreviousProceedingsChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for CurrentOrPreviousProceedingsChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::CurrentOrPreviousProceedings
    }

    fn is_started(&self, _case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        section(party, |response| response.current_or_previous_proceedings.as_ref()).is_some_and(
            |proceedings| {
                any_present(&[
                    &proceedings.have_children_been_involved_in_court_case,
                    &proceedings.court_order_made_for_protection,
                    &proceedings.proceedings_list,
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
            ErrorCode::CurrentOrPreviousProceedingsError,
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
