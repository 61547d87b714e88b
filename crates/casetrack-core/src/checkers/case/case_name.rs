//! Case name.

use crate::case::CaseRecord;
use crate::checkers::requirements::Presence;
use crate::checkers::{EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

/// The case name is a single field, so started and finished coincide.
pub struct CaseNameChecker;

impl CaseNameChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CaseNameChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for CaseNameChecker {
    fn event(&self) -> Event {
        Event::CaseName
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        case.applicant_case_name.is_present()
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        let finished = case.applicant_case_name.is_present();
        ledger.record(ErrorCode::CaseNameError, finished);
        finished
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        case.applicant_case_name.is_present().into()
    }
}
