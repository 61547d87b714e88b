//! Ability to participate in proceedings.

use crate::case::{AbilityToParticipate, Answer, CaseRecord};
use crate::checkers::requirements::{Presence, Requirements};
use crate::checkers::{settle, MandatoryCompletion, PartyChecker};
use crate::events::RespondentEvent;
use crate::ledger::{ErrorCode, ErrorLedger};
use crate::selector::ActiveParty;

use super::section;

pub struct AbilityToParticipateChecker;

impl AbilityToParticipateChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, party: &ActiveParty<'_>) -> Requirements {
        let mut r = Requirements::new();
        r.nested(
            "abilityToParticipate",
            section(party, |response| response.ability_to_participate.as_ref()),
            |r, ability: &AbilityToParticipate| {
                r.field(
                    "factorsAffectingAbilityToParticipate",
                    &ability.factors_affecting_ability_to_participate,
                )
                .when(
                    ability.factors_affecting_ability_to_participate.answered_yes(),
                    |r| {
                        r.field(
                            "provideDetailsForFactorsAffectingAbilityToParticipate",
                            &ability.provide_details_for_factors_affecting_ability_to_participate,
                        );
                    },
                );
            },
        );
        r
    }
}

impl Default for AbilityToParticipateChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for AbilityToParticipateChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::AbilityToParticipate
    }

    fn is_started(&self, _case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        section(party, |response| response.ability_to_participate.as_ref())
            .is_some_and(|ability| ability.factors_affecting_ability_to_participate.is_present())
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
            ErrorCode::AbilityToParticipateError,
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
    fn test_factors_need_details() {
        let case = CaseRecord::default();
        let party = respondent(json!({
            "abilityToParticipate": { "factorsAffectingAbilityToParticipate": "yes" }
        }));
        let mut ledger = ErrorLedger::new();

        let checker = AbilityToParticipateChecker::new();
        assert!(checker.is_started(&case, &active(&party)));
        assert!(!checker.is_finished(&case, &active(&party), &mut ledger));
        assert!(ledger.contains(ErrorCode::AbilityToParticipateError));
    }

    #[test]
    fn test_dont_know_finished() {
        let case = CaseRecord::default();
        let party = respondent(json!({
            "abilityToParticipate": { "factorsAffectingAbilityToParticipate": "dontKnow" }
        }));
        let mut ledger = ErrorLedger::new();
        assert!(AbilityToParticipateChecker::new().is_finished(&case, &active(&party), &mut ledger));
    }
}
