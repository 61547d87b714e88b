//! Relationship to the respondent (FL401).

use crate::case::{ApplicantRelationship, CaseRecord};
use crate::checkers::requirements::{Presence, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

/// A listed relationship needs its start date, and an ended one its end
/// date too. "None of the above" asks how the applicant knows the
/// respondent instead.
pub struct RelationshipToRespondentChecker;

impl RelationshipToRespondentChecker {
    pub fn new() -> Self {
        Self
    }

    fn relationship(case: &CaseRecord) -> Option<ApplicantRelationship> {
        case.respondent_relationship_object
            .as_ref()
            .and_then(|object| object.applicant_relationship)
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let relationship = Self::relationship(case);
        let dates = case.respondent_relationship_date_info.as_ref();
        let options = case
            .respondent_relationship_options
            .as_ref()
            .and_then(|options| options.applicant_relationship_options.as_ref());

        let mut r = Requirements::new();
        r.field("applicantRelationship", &relationship);
        match relationship {
            None => {}
            Some(ApplicantRelationship::NoneOfTheAbove) => {
                r.field("applicantRelationshipOptions", &options.cloned());
            }
            Some(listed) => {
                r.field(
                    "relationshipStartDate",
                    &dates.and_then(|dates| dates.relationship_start_date),
                )
                .when(listed.has_ended(), |r| {
                    r.field(
                        "relationshipEndDate",
                        &dates.and_then(|dates| dates.relationship_end_date),
                    );
                });
            }
        }
        r
    }
}

impl Default for RelationshipToRespondentChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for RelationshipToRespondentChecker {
    fn event(&self) -> Event {
        Event::RelationshipToRespondent
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        Self::relationship(case).is_present()
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::RelationshipToRespondentError,
            ledger,
        )
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        self.requirements(case).is_satisfied().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_current_relationship_needs_start_date_only() {
        let case: CaseRecord = serde_json::from_value(json!({
            "id": 1,
            "respondentRelationshipObject": { "applicantRelationship": "marriedOrCivil" },
            "respondentRelationshipDateInfo": { "relationshipStartDate": "2010-06-12" }
        }))
        .unwrap();
        let mut ledger = ErrorLedger::new();
        assert!(RelationshipToRespondentChecker::new().is_finished(&case, &mut ledger));
    }

    #[test]
    fn test_ended_relationship_needs_end_date() {
        let case: CaseRecord = serde_json::from_value(json!({
            "id": 1,
            "respondentRelationshipObject": { "applicantRelationship": "formerlyLivedTogether" },
            "respondentRelationshipDateInfo": { "relationshipStartDate": "2010-06-12" }
        }))
        .unwrap();
        let mut ledger = ErrorLedger::new();

        let checker = RelationshipToRespondentChecker::new();
        assert!(checker.is_started(&case));
        assert!(!checker.is_finished(&case, &mut ledger));
        assert!(ledger.contains(ErrorCode::RelationshipToRespondentError));
    }

    #[test]
    fn test_none_of_the_above_needs_option() {
        let case: CaseRecord = serde_json::from_value(json!({
            "id": 1,
            "respondentRelationshipObject": { "applicantRelationship": "noneOfTheAbove" },
            "respondentRelationshipOptions": { "applicantRelationshipOptions": "cousin" }
        }))
        .unwrap();
        let mut ledger = ErrorLedger::new();
        assert!(RelationshipToRespondentChecker::new().is_finished(&case, &mut ledger));
    }
}
