//! Applicant details.

use crate::case::CaseRecord;
use crate::checkers::party_details::{applicant_complete, applicant_mandatory, party_touched};
use crate::checkers::requirements::Requirements;
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

/// Every applicant must be fully described. Only identity, contact and
/// address gate submission; place of birth and legal representation do
/// not.
pub struct ApplicantDetailsChecker;

impl ApplicantDetailsChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ApplicantDetailsChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for ApplicantDetailsChecker {
    fn event(&self) -> Event {
        Event::ApplicantDetails
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        case.applicants()
            .iter()
            .any(|applicant| party_touched(&applicant.value))
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        let mut r = Requirements::new();
        r.each("applicants", case.applicants(), |r, applicant| {
            applicant_complete(r, &applicant.value)
        });
        settle(self.event(), &r, ErrorCode::ApplicantDetailsError, ledger)
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        let mut r = Requirements::new();
        r.each("applicants", case.applicants(), |r, applicant| {
            applicant_mandatory(r, &applicant.value)
        });
        r.is_satisfied().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn applicant() -> serde_json::Value {
        json!({
            "firstName": "Sam",
            "lastName": "Taylor",
            "gender": "female",
            "dateOfBirth": "1988-02-14",
            "address": { "AddressLine1": "4 Mill Lane", "PostCode": "AB1 2CD" },
            "isAtAddressLessThan5Years": "No",
            "canYouProvideEmailAddress": "Yes",
            "email": "sam@example.com",
            "phoneNumber": "07700900000"
        })
    }

    fn case_with(applicants: Vec<serde_json::Value>) -> CaseRecord {
        let applicants: Vec<_> = applicants
            .into_iter()
            .map(|value| json!({ "id": "a1", "value": value }))
            .collect();
        serde_json::from_value(json!({ "id": 1, "applicants": applicants })).unwrap()
    }

    #[test]
    fn test_mandatory_met_but_not_finished() {
        let case = case_with(vec![applicant()]);
        let mut ledger = ErrorLedger::new();

        let checker = ApplicantDetailsChecker::new();
        assert!(checker.is_started(&case));
        assert!(!checker.is_finished(&case, &mut ledger));
        assert_eq!(
            checker.mandatory_completion(&case),
            MandatoryCompletion::Completed
        );
        assert!(ledger.contains(ErrorCode::ApplicantDetailsError));
    }

    #[test]
    fn test_fully_described_applicant_finished() {
        let mut value = applicant();
        value["placeOfBirth"] = json!("Leeds");
        value["representativeFirstName"] = json!("Jo");
        value["representativeLastName"] = json!("Legal");
        value["solicitorEmail"] = json!("jo@firm.example");
        value["solicitorOrgName"] = json!("Firm LLP");
        let case = case_with(vec![value]);
        let mut ledger = ErrorLedger::new();

        assert!(ApplicantDetailsChecker::new().is_finished(&case, &mut ledger));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_second_applicant_missing_phone_outstanding() {
        let mut second = applicant();
        second["phoneNumber"] = json!("");
        let case = case_with(vec![applicant(), second]);

        assert_eq!(
            ApplicantDetailsChecker::new().mandatory_completion(&case),
            MandatoryCompletion::Outstanding
        );
    }

    #[test]
    fn test_no_applicants() {
        let case = CaseRecord {
            id: 1,
            ..Default::default()
        };
        let mut ledger = ErrorLedger::new();

        let checker = ApplicantDetailsChecker::new();
        assert!(!checker.is_started(&case));
        assert!(!checker.is_finished(&case, &mut ledger));
        assert!(!checker.has_mandatory_completed(&case));
    }
}
