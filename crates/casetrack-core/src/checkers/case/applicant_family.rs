//! Applicant's family (FL401).

use crate::case::{Answer, CaseRecord};
use crate::checkers::requirements::{items, Presence, Requirements};
use crate::checkers::{verdict, EventChecker};
use crate::events::Event;
use crate::ledger::ErrorLedger;

pub struct ApplicantFamilyChecker;

impl ApplicantFamilyChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ApplicantFamilyChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for ApplicantFamilyChecker {
    fn event(&self) -> Event {
        Event::ApplicantFamilyDetails
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        case.applicant_family_details
            .as_ref()
            .is_some_and(|family| family.does_applicant_have_children.is_present())
            || case.applicant_children.is_present()
    }

    fn is_finished(&self, case: &CaseRecord, _ledger: &mut ErrorLedger) -> bool {
        let mut r = Requirements::new();
        r.nested(
            "applicantFamilyDetails",
            case.applicant_family_details.as_ref(),
            |r, family| {
                r.field(
                    "doesApplicantHaveChildren",
                    &family.does_applicant_have_children,
                )
                .when(family.does_applicant_have_children.answered_yes(), |r| {
                    r.each(
                        "applicantChildren",
                        items(&case.applicant_children),
                        |r, child| {
                            r.field("fullName", &child.value.full_name)
                                .field("dateOfBirth", &child.value.date_of_birth)
                                .field(
                                    "applicantChildRelationship",
                                    &child.value.applicant_child_relationship,
                                );
                        },
                    );
                });
            },
        );
        verdict(self.event(), &r)
    }
}
