//! Checkers for the respondent response wizard.
//!
//! Each checker reads one sub-record of the active party's response. The
//! draft and submit checkers also look at the case-level draft response
//! collection.

mod ability_to_participate;
mod allegations_of_harm;
mod attending_the_court;
mod confirm_contact_details;
mod consent;
mod current_or_previous_proceedings;
mod international_element;
mod keep_details_private;
mod miam;
mod submit_response;
mod view_draft_response;

pub use ability_to_participate::AbilityToParticipateChecker;
pub use allegations_of_harm::RespondentAllegationsOfHarmChecker;
pub use attending_the_court::AttendingTheCourtChecker;
pub use confirm_contact_details::ConfirmContactDetailsChecker;
pub use consent::ConsentChecker;
pub use current_or_previous_proceedings::CurrentOrPreviousProceedingsChecker;
pub use international_element::RespondentInternationalElementChecker;
pub use keep_details_private::KeepDetailsPrivateChecker;
pub use miam::RespondentMiamChecker;
pub use submit_response::SubmitResponseChecker;
pub use view_draft_response::ViewDraftResponseChecker;

use crate::case::{CaseRecord, Document, Response};
use crate::checkers::requirements::Presence;
use crate::selector::ActiveParty;

/// One sub-record of the active party's response.
fn section<'a, T>(
    party: &ActiveParty<'a>,
    pick: impl FnOnce(&'a Response) -> Option<&'a T>,
) -> Option<&'a T> {
    party.response().and_then(pick)
}

/// The draft response document generated for the active party.
///
/// A party without an element id cannot be matched to a draft.
fn draft_for<'a>(case: &'a CaseRecord, party: &ActiveParty<'_>) -> Option<&'a Document> {
    let party_id = party.id?;
    case.draft_responses
        .iter()
        .flatten()
        .find(|draft| draft.value.party_id.as_deref() == Some(party_id))
        .and_then(|draft| draft.value.document.as_ref())
        .filter(|document| document.document_url.is_present())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::case::PartyRecord;
    use crate::selector::ActiveParty;

    /// An active respondent whose response carries `response`.
    pub fn respondent(response: serde_json::Value) -> PartyRecord {
        let mut response = response;
        response["activeRespondent"] = serde_json::json!("Yes");
        serde_json::from_value(serde_json::json!({
            "firstName": "Chris",
            "lastName": "Brown",
            "response": response
        }))
        .unwrap()
    }

    pub fn active(party: &PartyRecord) -> ActiveParty<'_> {
        ActiveParty {
            id: Some("r1"),
            index: 0,
            party,
        }
    }
}
