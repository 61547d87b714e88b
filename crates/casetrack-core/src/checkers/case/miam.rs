//! Mediation Information and Assessment Meeting (MIAM).
//!
//! The applicant either attended a MIAM, or claims an exemption. An
//! exemption can be confirmed by a family mediator (same evidence as
//! attendance) or evidenced against the exemption checklists.

use crate::case::{Answer, CaseRecord, MiamExemption};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

pub struct MiamChecker;

impl MiamChecker {
    pub fn new() -> Self {
        Self
    }

    fn mediator_evidence(r: &mut Requirements, case: &CaseRecord) {
        r.field(
            "mediatorRegistrationNumber",
            &case.mediator_registration_number,
        )
        .field(
            "familyMediatorServiceName",
            &case.family_mediator_service_name,
        )
        .field("soleTraderName", &case.sole_trader_name)
        .field(
            "miamCertificationDocumentUpload",
            &case.miam_certification_document_upload,
        );
    }

    fn exemption_evidence(r: &mut Requirements, case: &CaseRecord) {
        r.field("miamExemptionsChecklist", &case.miam_exemptions_checklist);
        for exemption in case.miam_exemptions_checklist.iter().flatten() {
            match exemption {
                MiamExemption::DomesticViolence => r.field(
                    "miamDomesticViolenceChecklist",
                    &case.miam_domestic_violence_checklist,
                ),
                MiamExemption::Urgency => r.field(
                    "miamUrgencyReasonChecklist",
                    &case.miam_urgency_reason_checklist,
                ),
                MiamExemption::PreviousMiamAttendance => r.field(
                    "miamPreviousAttendanceChecklist",
                    &case.miam_previous_attendance_checklist,
                ),
                MiamExemption::Other => r.field(
                    "miamOtherGroundsChecklist",
                    &case.miam_other_grounds_checklist,
                ),
            };
        }
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let mut r = Requirements::new();
        r.field("applicantAttendedMiam", &case.applicant_attended_miam)
            .when(case.applicant_attended_miam.answered_yes(), |r| {
                Self::mediator_evidence(r, case)
            })
            .when(case.applicant_attended_miam.answered_no(), |r| {
                r.field("claimingExemptionMiam", &case.claiming_exemption_miam)
                    // Neither attended nor exempt: the application cannot proceed.
                    .when(case.claiming_exemption_miam.answered_no(), |r| {
                        r.unmet("claimingExemptionMiam");
                    })
                    .when(case.claiming_exemption_miam.answered_yes(), |r| {
                        r.field("familyMediatorMiam", &case.family_mediator_miam)
                            .when(case.family_mediator_miam.answered_yes(), |r| {
                                Self::mediator_evidence(r, case)
                            })
                            .when(case.family_mediator_miam.answered_no(), |r| {
                                Self::exemption_evidence(r, case)
                            });
                    });
            });
        r
    }
}

impl Default for MiamChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for MiamChecker {
    fn event(&self) -> Event {
        Event::Miam
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        any_present(&[
            &case.applicant_attended_miam,
            &case.claiming_exemption_miam,
            &case.family_mediator_miam,
            &case.mediator_registration_number,
            &case.family_mediator_service_name,
            &case.sole_trader_name,
            &case.miam_certification_document_upload,
            &case.miam_exemptions_checklist,
        ])
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::MiamError,
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

    fn case(value: serde_json::Value) -> CaseRecord {
        serde_json::from_value(value).unwrap()
    }

    fn attended() -> serde_json::Value {
        json!({
            "id": 1,
            "applicantAttendedMiam": "Yes",
            "mediatorRegistrationNumber": "MED-123",
            "familyMediatorServiceName": "Family Mediation Ltd",
            "soleTraderName": "A Mediator",
            "miamCertificationDocumentUpload": {
                "document_url": "http://dm-store/documents/42",
                "document_filename": "miam.pdf"
            }
        })
    }

    #[test]
    fn test_attended_with_evidence_finished() {
        let case = case(attended());
        let mut ledger = ErrorLedger::new();

        let checker = MiamChecker::new();
        assert!(checker.is_started(&case));
        assert!(checker.is_finished(&case, &mut ledger));
        assert!(!ledger.contains(ErrorCode::MiamError));
    }

    #[test]
    fn test_attended_without_certificate_in_progress() {
        let mut value = attended();
        value.as_object_mut().unwrap().remove("miamCertificationDocumentUpload");
        let case = case(value);
        let mut ledger = ErrorLedger::new();

        let checker = MiamChecker::new();
        assert!(checker.is_started(&case));
        assert!(!checker.is_finished(&case, &mut ledger));
        assert!(ledger.contains(ErrorCode::MiamError));
    }

    #[test]
    fn test_not_attended_not_exempt_never_finishes() {
        let case = case(json!({
            "id": 1,
            "applicantAttendedMiam": "No",
            "claimingExemptionMiam": "No"
        }));
        let mut ledger = ErrorLedger::new();
        assert!(!MiamChecker::new().is_finished(&case, &mut ledger));
    }

    #[test]
    fn test_exemption_needs_evidence_per_ground() {
        let mut case = case(json!({
            "id": 1,
            "applicantAttendedMiam": "No",
            "claimingExemptionMiam": "Yes",
            "familyMediatorMiam": "No",
            "miamExemptionsChecklist": ["domesticViolence", "urgency"],
            "miamDomesticViolenceChecklist": ["policeArrest"]
        }));
        let checker = MiamChecker::new();
        assert_eq!(
            checker.mandatory_completion(&case),
            MandatoryCompletion::Outstanding
        );

        case.miam_urgency_reason_checklist = Some(vec!["riskOfHarm".into()]);
        assert_eq!(
            checker.mandatory_completion(&case),
            MandatoryCompletion::Completed
        );
    }

    #[test]
    fn test_mediator_confirmed_exemption() {
        let mut value = attended();
        value["applicantAttendedMiam"] = json!("No");
        value["claimingExemptionMiam"] = json!("Yes");
        value["familyMediatorMiam"] = json!("Yes");
        let case = case(value);
        let mut ledger = ErrorLedger::new();
        assert!(MiamChecker::new().is_finished(&case, &mut ledger));
    }
}
