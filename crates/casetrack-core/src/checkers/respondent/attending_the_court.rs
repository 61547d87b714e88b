//! Attending the court.

use crate::case::{Answer, AttendToCourt, CaseRecord};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, MandatoryCompletion, PartyChecker};
use crate::events::RespondentEvent;
use crate::ledger::{ErrorCode, ErrorLedger};
use crate::selector::ActiveParty;

use super::section;

/// The respondent's support needs at court, mirroring the applicant's
/// "attending the hearing" questions.
pub struct AttendingTheCourtChecker;

impl AttendingTheCourtChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, party: &ActiveParty<'_>) -> Requirements {
        let mut r = Requirements::new();
        r.nested(
            "attendToCourt",
            section(party, |response| response.attend_to_court.as_ref()),
            |r, court: &AttendToCourt| {
                r.field("respondentWelshNeeds", &court.respondent_welsh_needs)
                    .when(court.respondent_welsh_needs.answered_yes(), |r| {
                        r.field("respondentWelshNeedsList", &court.respondent_welsh_needs_list);
                    })
                    .field(
                        "isRespondentNeededInterpreter",
                        &court.is_respondent_needed_interpreter,
                    )
                    .when(court.is_respondent_needed_interpreter.answered_yes(), |r| {
                        r.field(
                            "respondentInterpreterNeeds",
                            &court.respondent_interpreter_needs,
                        );
                    })
                    .field("haveAnyDisability", &court.have_any_disability)
                    .when(court.have_any_disability.answered_yes(), |r| {
                        r.field("disabilityNeeds", &court.disability_needs);
                    })
                    .field(
                        "respondentSpecialArrangements",
                        &court.respondent_special_arrangements,
                    )
                    .when(court.respondent_special_arrangements.answered_yes(), |r| {
                        r.field(
                            "respondentSpecialArrangementDetails",
                            &court.respondent_special_arrangement_details,
                        );
                    })
                    .field(
                        "respondentIntermediaryNeeds",
                        &court.respondent_intermediary_needs,
                    )
                    .when(court.respondent_intermediary_needs.answered_yes(), |r| {
                        r.field(
                            "respondentIntermediaryNeedsDetails",
                            &court.respondent_intermediary_needs_details,
                        );
                    });
            },
        );
        r
    }
}

impl Default for AttendingTheCourtChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for AttendingTheCourtChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::AttendingTheCourt
    }

    fn is_started(&self, _case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        section(party, |response| response.attend_to_court.as_ref()).is_some_and(|court| {
            any_present(&[
                &court.respondent_welsh_needs,
                &court.is_respondent_needed_interpreter,
                &court.have_any_disability,
                &court.respondent_special_arrangements,
                &court.respondent_intermediary_needs,
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
            ErrorCode::AttendingTheCourtError,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::respondent::fixtures::{active, respondent};
    use serde_json::json;

    fn attend(overrides: serde_json::Value) -> serde_json::Value {
        let mut court = json!({
            "respondentWelshNeeds": "No",
            "isRespondentNeededInterpreter": "No",
            "haveAnyDisability": "No",
            "respondentSpecialArrangements": "No",
            "respondentIntermediaryNeeds": "No"
        });
        for (key, value) in overrides.as_object().unwrap() {
            court[key] = value.clone();
        }
        json!({ "attendToCourt": court })
    }

    #[test]
    fn test_no_needs_finished() {
        let case = CaseRecord::default();
        let party = respondent(attend(json!({})));
        let mut ledger = ErrorLedger::new();

        let checker = AttendingTheCourtChecker::new();
        assert!(checker.is_finished(&case, &active(&party), &mut ledger));
        assert!(checker.has_mandatory_completed(&case, &active(&party)));
    }

    #[test]
    fn test_disability_needs_described() {
        let case = CaseRecord::default();
        let party = respondent(attend(json!({ "haveAnyDisability": "Yes" })));
        let mut ledger = ErrorLedger::new();

        let checker = AttendingTheCourtChecker::new();
        assert!(checker.is_started(&case, &active(&party)));
        assert!(!checker.is_finished(&case, &active(&party), &mut ledger));
        assert!(ledger.contains(ErrorCode::AttendingTheCourtError));
    }
}
