//! Other people in the case.

use crate::case::CaseRecord;
use crate::checkers::party_details::{party_touched, person_complete};
use crate::checkers::requirements::Requirements;
use crate::checkers::{verdict, EventChecker};
use crate::events::Event;
use crate::ledger::ErrorLedger;

/// People who should be notified of the application. They are described
/// like respondents, without legal representation. The section never gates
/// submission and never records an error.
pub struct OtherPeopleChecker;

impl OtherPeopleChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OtherPeopleChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for OtherPeopleChecker {
    fn event(&self) -> Event {
        Event::OtherPeopleInTheCase
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        case.others_to_notify()
            .iter()
            .any(|person| party_touched(&person.value))
    }

    fn is_finished(&self, case: &CaseRecord, _ledger: &mut ErrorLedger) -> bool {
        let mut r = Requirements::new();
        r.each("othersToNotify", case.others_to_notify(), |r, person| {
            person_complete(r, &person.value)
        });
        verdict(self.event(), &r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::MandatoryCompletion;
    use serde_json::json;

    #[test]
    fn test_described_person_finished_without_error_code() {
        let case: CaseRecord = serde_json::from_value(json!({
            "id": 1,
            "othersToNotify": [{
                "value": {
                    "firstName": "Pat",
                    "lastName": "Green",
                    "gender": "other",
                    "otherGender": "Non-binary",
                    "isDateOfBirthKnown": "No",
                    "isPlaceOfBirthKnown": "No",
                    "isCurrentAddressKnown": "Yes",
                    "address": { "AddressLine1": "9 Station Road" },
                    "canYouProvideEmailAddress": "No",
                    "canYouProvidePhoneNumber": "No"
                }
            }]
        }))
        .unwrap();
        let mut ledger = ErrorLedger::new();

        let checker = OtherPeopleChecker::new();
        assert!(checker.is_started(&case));
        assert!(checker.is_finished(&case, &mut ledger));
        assert_eq!(checker.mandatory_completion(&case), MandatoryCompletion::NoRule);
        assert!(!checker.has_mandatory_completed(&case));
    }

    #[test]
    fn test_incomplete_person_leaves_ledger_alone() {
        let case: CaseRecord = serde_json::from_value(json!({
            "id": 1,
            "othersToNotify": [{ "value": { "firstName": "Pat" } }]
        }))
        .unwrap();
        let mut ledger = ErrorLedger::new();

        assert!(!OtherPeopleChecker::new().is_finished(&case, &mut ledger));
        assert!(ledger.is_empty());
    }
}
