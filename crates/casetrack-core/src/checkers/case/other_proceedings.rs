//! Other proceedings involving the children.

use crate::case::{Answer, CaseRecord};
use crate::checkers::requirements::{any_present, items, Requirements};
use crate::checkers::{verdict, EventChecker};
use crate::events::Event;
use crate::ledger::ErrorLedger;

pub struct OtherProceedingsChecker;

impl OtherProceedingsChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let mut r = Requirements::new();
        r.field(
            "previousOrOngoingProceedingsForChildren",
            &case.previous_or_ongoing_proceedings_for_children,
        )
        .when(
            case.previous_or_ongoing_proceedings_for_children.answered_yes(),
            |r| {
                r.each(
                    "existingProceedings",
                    items(&case.existing_proceedings),
                    |r, proceeding| {
                        r.field(
                            "previousOrOngoingProceedings",
                            &proceeding.value.previous_or_ongoing_proceedings,
                        )
                        .field("caseNumber", &proceeding.value.case_number)
                        .field("nameOfCourt", &proceeding.value.name_of_court);
                    },
                );
            },
        );
        r
    }
}

impl Default for OtherProceedingsChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for OtherProceedingsChecker {
    fn event(&self) -> Event {
        Event::OtherProceedings
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        any_present(&[
            &case.previous_or_ongoing_proceedings_for_children,
            &case.existing_proceedings,
        ])
    }

    fn is_finished(&self, case: &CaseRecord, _ledger: &mut ErrorLedger) -> bool {
        verdict(self.event(), &self.requirements(case))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dont_know_finished() {
        let case: CaseRecord = serde_json::from_value(json!({
            "id": 1,
            "previousOrOngoingProceedingsForChildren": "dontKnow"
        }))
        .unwrap();
        let mut ledger = ErrorLedger::new();
        assert!(OtherProceedingsChecker::new().is_finished(&case, &mut ledger));
    }

    #[test]
    fn test_yes_needs_proceedings_listed() {
        let mut case: CaseRecord = serde_json::from_value(json!({
            "id": 1,
            "previousOrOngoingProceedingsForChildren": "yes"
        }))
        .unwrap();
        let mut ledger = ErrorLedger::new();

        let checker = OtherProceedingsChecker::new();
        assert!(checker.is_started(&case));
        assert!(!checker.is_finished(&case, &mut ledger));
        assert!(ledger.is_empty());

        case.existing_proceedings = serde_json::from_value(json!([{
            "value": {
                "previousOrOngoingProceedings": "ongoing",
                "caseNumber": "LE12C00001",
                "nameOfCourt": "Leeds Family Court"
            }
        }]))
        .unwrap();
        assert!(checker.is_finished(&case, &mut ledger));
    }
}
