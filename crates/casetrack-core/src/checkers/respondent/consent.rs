//! Consent to the application.

use crate::case::{Answer, CaseRecord, Consent};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, MandatoryCompletion, PartyChecker};
use crate::events::RespondentEvent;
use crate::ledger::{ErrorCode, ErrorLedger};
use crate::selector::ActiveParty;

use super::section;

/// A respondent who does not consent must say why; one who needed the
/// court's permission must give the order details.
pub struct ConsentChecker;

impl ConsentChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, party: &ActiveParty<'_>) -> Requirements {
        let mut r = Requirements::new();
        r.nested(
            "consent",
            section(party, |response| response.consent.as_ref()),
            |r, consent: &Consent| {
                r.field(
                    "consentToTheApplication",
                    &consent.consent_to_the_application,
                )
                .when(consent.consent_to_the_application.answered_no(), |r| {
                    r.field("noConsentReason", &consent.no_consent_reason);
                })
                .field(
                    "applicationReceivedDate",
                    &consent.application_received_date,
                )
                .field("permissionFromCourt", &consent.permission_from_court)
                .when(consent.permission_from_court.answered_yes(), |r| {
                    r.field("courtOrderDetails", &consent.court_order_details);
                });
            },
        );
        r
    }
}

impl Default for ConsentChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for ConsentChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::Consent
    }

    fn is_started(&self, _case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        section(party, |response| response.consent.as_ref()).is_some_and(|consent| {
            any_present(&[
                &consent.consent_to_the_application,
                &consent.no_consent_reason,
                &consent.application_received_date,
                &consent.permission_from_court,
                &consent.court_order_details,
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
            ErrorCode::ConsentError,
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

    fn case() -> CaseRecord {
        CaseRecord {
            id: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_consenting_respondent_finished() {
        let party = respondent(json!({
            "consent": {
                "consentToTheApplication": "Yes",
                "applicationReceivedDate": "2026-09-01",
                "permissionFromCourt": "No"
            }
        }));
        let mut ledger = ErrorLedger::new();

        let checker = ConsentChecker::new();
        assert!(checker.is_started(&case(), &active(&party)));
        assert!(checker.is_finished(&case(), &active(&party), &mut ledger));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_refusal_needs_reason() {
        let party = respondent(json!({
            "consent": {
                "consentToTheApplication": "No",
                "applicationReceivedDate": "2026-09-01",
                "permissionFromCourt": "No"
            }
        }));
        let mut ledger = ErrorLedger::new();

        let checker = ConsentChecker::new();
        assert!(!checker.is_finished(&case(), &active(&party), &mut ledger));
        assert!(ledger.contains(ErrorCode::ConsentError));
        assert!(!checker.has_mandatory_completed(&case(), &active(&party)));
    }

    #[test]
    fn test_no_consent_record_not_started() {
        let party = respondent(json!({}));
        let mut ledger = ErrorLedger::new();

        let checker = ConsentChecker::new();
        assert!(!checker.is_started(&case(), &active(&party)));
        assert!(!checker.is_finished(&case(), &active(&party), &mut ledger));
    }
}
