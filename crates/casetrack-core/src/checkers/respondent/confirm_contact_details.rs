//! Confirm or edit your contact details.
//!
//! The respondent confirms the details the applicant gave, editing them
//! where needed. Edited values live in the response's citizen details and
//! take precedence over the party's own fields. The section is only
//! touched once the respondent has saved something of their own.

use crate::case::{CaseRecord, CitizenDetails, Contact, PartyRecord};
use crate::checkers::requirements::{any_present, Filled, Requirements};
use crate::checkers::{settle, MandatoryCompletion, PartyChecker};
use crate::events::RespondentEvent;
use crate::ledger::{ErrorCode, ErrorLedger};
use crate::selector::ActiveParty;

use super::section;

pub struct ConfirmContactDetailsChecker;

/// The edited value when present, otherwise the party's own.
fn confirmed<'a, T: Filled>(edited: &'a Option<T>, own: &'a Option<T>) -> &'a Option<T> {
    if edited.as_ref().is_some_and(Filled::is_filled) {
        edited
    } else {
        own
    }
}

fn touched(details: &CitizenDetails) -> bool {
    any_present(&[
        &details.first_name,
        &details.last_name,
        &details.previous_name,
        &details.date_of_birth,
        &details.place_of_birth,
        &details.address,
    ]) || details
        .contact
        .as_ref()
        .is_some_and(|contact| any_present(&[&contact.phone_number, &contact.email]))
}

impl ConfirmContactDetailsChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, party: &ActiveParty<'_>) -> Requirements {
        let own: &PartyRecord = party.party;
        let edited = section(party, |response| response.citizen_details.as_ref())
            .filter(|details| touched(details));

        let mut r = Requirements::new();
        r.nested("citizenDetails", edited, |r, details| {
            let unedited = Contact::default();
            let contact = details.contact.as_ref().unwrap_or(&unedited);
            let phone = confirmed(&contact.phone_number, &own.phone_number);
            let email = confirmed(&contact.email, &own.email);

            r.field("firstName", confirmed(&details.first_name, &own.first_name))
                .field("lastName", confirmed(&details.last_name, &own.last_name))
                .field(
                    "dateOfBirth",
                    confirmed(&details.date_of_birth, &own.date_of_birth),
                )
                .field("address", confirmed(&details.address, &own.address))
                .when(!any_present(&[phone, email]), |r| {
                    r.unmet("phoneNumberOrEmail");
                });
        });
        r
    }
}

impl Default for ConfirmContactDetailsChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyChecker for ConfirmContactDetailsChecker {
    fn event(&self) -> RespondentEvent {
        RespondentEvent::ConfirmContactDetails
    }

    fn is_started(&self, _case: &CaseRecord, party: &ActiveParty<'_>) -> bool {
        section(party, |response| response.citizen_details.as_ref()).is_some_and(touched)
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
            ErrorCode::ConfirmContactDetailsError,
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
    use crate::checkers::respondent::fixtures::active;
    use serde_json::json;

    fn party(value: serde_json::Value) -> PartyRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_edits_fill_gaps_in_applicant_supplied_details() {
        let case = CaseRecord::default();
        let party = party(json!({
            "firstName": "Chris",
            "lastName": "Brown",
            "email": "chris@example.com",
            "response": {
                "activeRespondent": "Yes",
                "citizenDetails": {
                    "dateOfBirth": "1985-11-30",
                    "address": { "AddressLine1": "3 New Street" }
                }
            }
        }));
        let mut ledger = ErrorLedger::new();

        let checker = ConfirmContactDetailsChecker::new();
        assert!(checker.is_started(&case, &active(&party)));
        assert!(checker.is_finished(&case, &active(&party), &mut ledger));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_needs_phone_or_email() {
        let case = CaseRecord::default();
        let party = party(json!({
            "response": {
                "activeRespondent": "Yes",
                "citizenDetails": {
                    "firstName": "Chris",
                    "lastName": "Brown",
                    "dateOfBirth": "1985-11-30",
                    "address": { "AddressLine1": "3 New Street" },
                    "contact": { "phoneNumber": "", "email": "" }
                }
            }
        }));
        let mut ledger = ErrorLedger::new();

        let checker = ConfirmContactDetailsChecker::new();
        assert!(!checker.is_finished(&case, &active(&party), &mut ledger));
        assert!(ledger.contains(ErrorCode::ConfirmContactDetailsError));
    }

    #[test]
    fn test_applicant_supplied_details_alone_not_started() {
        let case = CaseRecord::default();
        let party = party(json!({
            "firstName": "Chris",
            "lastName": "Brown",
            "dateOfBirth": "1985-11-30",
            "address": { "AddressLine1": "3 New Street" },
            "phoneNumber": "07700900001",
            "response": { "activeRespondent": "Yes" }
        }));
        let mut ledger = ErrorLedger::new();

        let checker = ConfirmContactDetailsChecker::new();
        assert!(!checker.is_started(&case, &active(&party)));
        assert!(!checker.is_finished(&case, &active(&party), &mut ledger));
    }
}
