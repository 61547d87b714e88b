//! Submit the response.

use crate::case::{Answer, CaseRecord};
use crate::checkers::{verdict, PartyChecker, Requirements};
use crate::events::RespondentEvent;
use crate::ledger::ErrorLedger;
use crate::selector::ActiveParty;

use super::draft_for;

/// Submission becomes possible once a draft exists and is done when the
/// response has been submitted.
pub struct SubmitResponseChecker;

impl SubmitResponseChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubmitResponseChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for SubmitResponseChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::SubmitResponse
    }

    fn is_started(&self, case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        draft_for(case, party).is_some()
    }

    fn is_finished(
        &self,
        case: &CaseRecord,
        party: &ActiveParty<'_>,
        _ledger: &mut ErrorLedger,
    ) -> bool {
        let submitted = party
            .response()
            .is_some_and(|response| response.c7_response_submitted.answered_yes());

        let mut r = Requirements::new();
        r.when(!self.is_started(case, party), |r| {
            r.unmet("draftResponse");
        })
        .when(!submitted, |r| {
            r.unmet("c7ResponseSubmitted");
        });
        verdict(self.event(), &r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::respondent::fixtures::{active, respondent};
    use serde_json::json;

    fn case_with_draft() -> CaseRecord {
        serde_json::from_value(json!({
            "id": 1,
            "draftResponses": [{
                "value": {
                    "partyId": "r1",
                    "document": { "document_url": "http://dm-store/documents/draft" }
                }
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_draft_without_submission_in_progress() {
        let case = case_with_draft();
        let party = respondent(json!({ "c7ResponseSubmitted": "No" }));
        let mut ledger = ErrorLedger::new();

        let checker = SubmitResponseChecker::new();
        assert!(checker.is_started(&case, &active(&party)));
        assert!(!checker.is_finished(&case, &active(&party), &mut ledger));
    }

    #[test]
    fn test_submitted_finished() {
        let case = case_with_draft();
        let party = respondent(json!({ "c7ResponseSubmitted": "Yes" }));
        let mut ledger = ErrorLedger::new();
        assert!(SubmitResponseChecker::new().is_finished(&case, &active(&party), &mut ledger));
    }

    #[test]
    fn test_no_draft_not_started() {
        let case = CaseRecord::default();
        let party = respondent(json!({ "c7ResponseSubmitted": "Yes" }));
        let mut ledger = ErrorLedger::new();

        let checker = SubmitResponseChecker::new();
        assert!(!checker.is_started(&case, &active(&party)));
        assert!(!checker.is_finished(&case, &active(&party), &mut ledger));
    }
}
