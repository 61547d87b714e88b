//! Respondent details.

use crate::case::CaseRecord;
use crate::checkers::party_details::{known_details_answered, party_touched, respondent_complete};
use crate::checkers::requirements::Requirements;
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

/// The applicant may not know much about a respondent, so most fields are
/// gated behind "do you know..." answers. Submission only needs those
/// answers given for every respondent.
pub struct RespondentDetailsChecker;

impl RespondentDetailsChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RespondentDetailsChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for RespondentDetailsChecker {
    fn event(&self) -> Event {
        Event::RespondentDetails
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        case.respondents()
            .iter()
            .any(|respondent| party_touched(&respondent.value))
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        let mut r = Requirements::new();
        r.each("respondents", case.respondents(), |r, respondent| {
            respondent_complete(r, &respondent.value)
        });
        settle(self.event(), &r, ErrorCode::RespondentDetailsError, ledger)
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        let mut r = Requirements::new();
        r.each("respondents", case.respondents(), |r, respondent| {
            known_details_answered(r, &respondent.value)
        });
        r.is_satisfied().into()
    }
}
