//! Allegations of harm (respondent).

use crate::case::{Answer, CaseRecord, RespondentAllegationsOfHarm};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, MandatoryCompletion, PartyChecker};
use crate::events::RespondentEvent;
use crate::ledger::{ErrorCode, ErrorLedger};
use crate::selector::ActiveParty;

use super::section;

pub struct RespondentAllegationsOfHarmChecker;

impl RespondentAllegationsOfHarmChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, party: &ActiveParty<'_>) -> Requirements {
        let mut r = Requirements::new();
        r.nested(
            "allegationsOfHarm",
            section(party, |response| response.allegations_of_harm.as_ref()),
            |r, harm: &RespondentAllegationsOfHarm| {
                r.field(
                    "respondentAllegationsOfHarm",
                    &harm.respondent_allegations_of_harm,
                )
                .when(harm.respondent_allegations_of_harm.answered_yes(), |r| {
                    r.field("respondentDomesticAbuse", &harm.respondent_domestic_abuse)
                        .field("respondentChildAbuse", &harm.respondent_child_abuse)
                        .field("respondentChildAbduction", &harm.respondent_child_abduction)
                        .field(
                            "respondentDrugOrAlcoholAbuse",
                            &harm.respondent_drug_or_alcohol_abuse,
                        )
                        .when(harm.respondent_drug_or_alcohol_abuse.answered_yes(), |r| {
                            r.field(
                                "respondentDrugOrAlcoholAbuseDetails",
                                &harm.respondent_drug_or_alcohol_abuse_details,
                            );
                        })
                        .field(
                            "respondentOtherSafetyConcerns",
                            &harm.respondent_other_safety_concerns,
                        )
                        .when(harm.respondent_other_safety_concerns.answered_yes(), |r| {
                            r.field(
                                "respondentOtherSafetyConcernsDetails",
                                &harm.respondent_other_safety_concerns_details,
                            );
                        });
                });
            },
        );
        r
    }
}

impl Default for RespondentAllegationsOfHarmChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for RespondentAllegationsOfHarmChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::AllegationsOfHarm
    }

    fn is_started(&self, _case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        section(party, |response| response.allegations_of_harm.as_ref()).is_some_and(|harm| {
            any_present(&[
                &harm.respondent_allegations_of_harm,
                &harm.respondent_domestic_abuse,
                &harm.respondent_child_abuse,
                &harm.respondent_child_abduction,
                &harm.respondent_drug_or_alcohol_abuse,
                &harm.respondent_other_safety_concerns,
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
            ErrorCode::RespondentAllegationsOfHarmError,
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

    #[test]
    fn test_no_allegations_finished() {
        let case = CaseRecord::default();
        let party = respondent(json!({
            "allegationsOfHarm": { "respondentAllegationsOfHarm": "No" }
        }));
        let mut ledger = ErrorLedger::new();
        assert!(RespondentAllegationsOfHarmChecker::new().is_finished(
            &case,
            &active(&party),
            &mut ledger
        ));
    }

    #[test]
    fn test_substance_abuse_needs_details() {
        let case = CaseRecord::default();
        let party = respondent(json!({
            "allegationsOfHarm": {
                "respondentAllegationsOfHarm": "Yes",
                "respondentDomesticAbuse": "No",
                "respondentChildAbuse": "No",
                "respondentChildAbduction": "No",
                "respondentDrugOrAlcoholAbuse": "Yes",
                "respondentOtherSafetyConcerns": "No"
            }
        }));
        let mut ledger = ErrorLedger::new();

        let checker = RespondentAllegationsOfHarmChecker::new();
        assert!(checker.is_started(&case, &active(&party)));
        assert!(!checker.is_finished(&case, &active(&party), &mut ledger));
        assert!(ledger.contains(ErrorCode::RespondentAllegationsOfHarmError));
    }
}
