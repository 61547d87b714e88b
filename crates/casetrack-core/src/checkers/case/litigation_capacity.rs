//! Litigation capacity.
//!
//! Every question on the page is optional, so any answer finishes the
//! section, except "other factors: Yes" which needs the details.

use crate::case::{Answer, CaseRecord};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{verdict, EventChecker};
use crate::events::Event;
use crate::ledger::ErrorLedger;

pub struct LitigationCapacityChecker;

impl LitigationCapacityChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LitigationCapacityChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for LitigationCapacityChecker {
    fn event(&self) -> Event {
        Event::LitigationCapacity
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        any_present(&[
            &case.litigation_capacity_factors,
            &case.litigation_capacity_referrals,
            &case.litigation_capacity_other_factors,
            &case.litigation_capacity_other_factors_details,
        ])
    }

    fn is_finished(&self, case: &CaseRecord, _ledger: &mut ErrorLedger) -> bool {
        let mut r = Requirements::new();
        r.when(case.litigation_capacity_other_factors.answered_yes(), |r| {
            r.field(
                "litigationCapacityOtherFactorsDetails",
                &case.litigation_capacity_other_factors_details,
            );
        });
        self.is_started(case) && verdict(self.event(), &r)
    }
}
