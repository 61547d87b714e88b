//! Child details.
//!
//! Each child needs identity, the orders applied for and both parties'
//! relationship to the child. The two local authority questions are asked
//! once per case.

use crate::case::{Answer, CaseRecord, Child, Gender, RelationshipToChild};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

pub struct ChildDetailsChecker;

impl ChildDetailsChecker {
    pub fn new() -> Self {
        Self
    }

    fn child_mandatory(r: &mut Requirements, child: &Child) {
        r.field("firstName", &child.first_name)
            .field("lastName", &child.last_name)
            .field("dateOfBirth", &child.date_of_birth)
            .field("gender", &child.gender)
            .field("ordersAppliedFor", &child.orders_applied_for);
    }

    fn child_complete(r: &mut Requirements, child: &Child) {
        Self::child_mandatory(r, child);
        r.when(child.gender == Some(Gender::Other), |r| {
            r.field("otherGender", &child.other_gender);
        })
        .field(
            "applicantsRelationshipToChild",
            &child.applicants_relationship_to_child,
        )
        .when(
            child.applicants_relationship_to_child == Some(RelationshipToChild::Other),
            |r| {
                r.field(
                    "otherApplicantsRelationshipToChild",
                    &child.other_applicants_relationship_to_child,
                );
            },
        )
        .field(
            "respondentsRelationshipToChild",
            &child.respondents_relationship_to_child,
        )
        .when(
            child.respondents_relationship_to_child == Some(RelationshipToChild::Other),
            |r| {
                r.field(
                    "otherRespondentsRelationshipToChild",
                    &child.other_respondents_relationship_to_child,
                );
            },
        )
        .field("childLiveWith", &child.child_live_with)
        .field(
            "parentalResponsibilityDetails",
            &child.parental_responsibility_details,
        );
    }

    fn child_touched(child: &Child) -> bool {
        any_present(&[
            &child.first_name,
            &child.last_name,
            &child.date_of_birth,
            &child.gender,
            &child.orders_applied_for,
            &child.applicants_relationship_to_child,
            &child.respondents_relationship_to_child,
            &child.child_live_with,
            &child.parental_responsibility_details,
        ])
    }
}

impl Default for ChildDetailsChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for ChildDetailsChecker {
    fn event(&self) -> Event {
        Event::ChildDetails
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        case.children()
            .iter()
            .any(|child| Self::child_touched(&child.value))
            || any_present(&[
                &case.children_known_to_local_authority,
                &case.children_subject_of_child_protection_plan,
            ])
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        let mut r = Requirements::new();
        r.each("children", case.children(), |r, child| {
            Self::child_complete(r, &child.value)
        })
        .field(
            "childrenKnownToLocalAuthority",
            &case.children_known_to_local_authority,
        )
        .when(case.children_known_to_local_authority.answered_yes(), |r| {
            r.field(
                "childrenKnownToLocalAuthorityTextArea",
                &case.children_known_to_local_authority_text_area,
            );
        })
        .field(
            "childrenSubjectOfChildProtectionPlan",
            &case.children_subject_of_child_protection_plan,
        );
        settle(self.event(), &r, ErrorCode::ChildDetailsError, ledger)
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        let mut r = Requirements::new();
        r.each("children", case.children(), |r, child| {
            Self::child_mandatory(r, &child.value)
        });
        r.is_satisfied().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn child() -> serde_json::Value {
        json!({
            "firstName": "Ellie",
            "lastName": "Taylor",
            "dateOfBirth": "2016-05-01",
            "gender": "female",
            "ordersAppliedFor": ["childArrangementsOrder"],
            "applicantsRelationshipToChild": "mother",
            "respondentsRelationshipToChild": "father",
            "childLiveWith": ["applicant"],
            "parentalResponsibilityDetails": "Both parents"
        })
    }

    fn case_with(children: Vec<serde_json::Value>) -> CaseRecord {
        let children: Vec<_> = children
            .into_iter()
            .map(|value| json!({ "value": value }))
            .collect();
        serde_json::from_value(json!({
            "id": 1,
            "children": children,
            "childrenKnownToLocalAuthority": "no",
            "childrenSubjectOfChildProtectionPlan": "no"
        }))
        .unwrap()
    }

    #[test]
    fn test_complete_children_finished() {
        let case = case_with(vec![child(), child()]);
        let mut ledger = ErrorLedger::new();

        let checker = ChildDetailsChecker::new();
        assert!(checker.is_finished(&case, &mut ledger));
        assert!(checker.has_mandatory_completed(&case));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_child_missing_date_of_birth_in_progress() {
        let mut second = child();
        second.as_object_mut().unwrap().remove("dateOfBirth");
        let case = case_with(vec![child(), second]);
        let mut ledger = ErrorLedger::new();

        let checker = ChildDetailsChecker::new();
        assert!(checker.is_started(&case));
        assert!(!checker.is_finished(&case, &mut ledger));
        assert!(!checker.has_mandatory_completed(&case));
        assert!(ledger.contains(ErrorCode::ChildDetailsError));
    }

    #[test]
    fn test_other_relationship_needs_description() {
        let mut value = child();
        value["respondentsRelationshipToChild"] = json!("other");
        let case = case_with(vec![value]);
        let mut ledger = ErrorLedger::new();

        let checker = ChildDetailsChecker::new();
        assert!(!checker.is_finished(&case, &mut ledger));
        // Relationship detail does not gate submission.
        assert!(checker.has_mandatory_completed(&case));
    }

    #[test]
    fn test_known_to_local_authority_needs_details() {
        let mut case = case_with(vec![child()]);
        case.children_known_to_local_authority = Some(crate::case::YesNoDontKnow::Yes);
        let mut ledger = ErrorLedger::new();
        assert!(!ChildDetailsChecker::new().is_finished(&case, &mut ledger));
    }
}
