//! International element.

use crate::case::{Answer, CaseRecord};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

pub struct InternationalElementChecker;

impl InternationalElementChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let mut r = Requirements::new();
        r.field(
            "habitualResidentInOtherState",
            &case.habitual_resident_in_other_state,
        )
        .when(case.habitual_resident_in_other_state.answered_yes(), |r| {
            r.field(
                "habitualResidentInOtherStateGiveReason",
                &case.habitual_resident_in_other_state_give_reason,
            );
        })
        .field("jurisdictionIssue", &case.jurisdiction_issue)
        .when(case.jurisdiction_issue.answered_yes(), |r| {
            r.field(
                "jurisdictionIssueGiveReason",
                &case.jurisdiction_issue_give_reason,
            );
        })
        .field(
            "requestToForeignAuthority",
            &case.request_to_foreign_authority,
        )
        .when(case.request_to_foreign_authority.answered_yes(), |r| {
            r.field(
                "requestToForeignAuthorityGiveReason",
                &case.request_to_foreign_authority_give_reason,
            );
        });
        r
    }
}

impl Default for InternationalElementChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for InternationalElementChecker {
    fn event(&self) -> Event {
        Event::InternationalElement
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        any_present(&[
            &case.habitual_resident_in_other_state,
            &case.habitual_resident_in_other_state_give_reason,
            &case.jurisdiction_issue,
            &case.jurisdiction_issue_give_reason,
            &case.request_to_foreign_authority,
            &case.request_to_foreign_authority_give_reason,
        ])
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::InternationalElementError,
            ledger,
        )
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        self.requirements(case).is_satisfied().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::YesOrNo;

    #[test]
    fn test_jurisdiction_issue_needs_reason() {
        let mut case = CaseRecord {
            id: 1,
            habitual_resident_in_other_state: Some(YesOrNo::No),
            jurisdiction_issue: Some(YesOrNo::Yes),
            request_to_foreign_authority: Some(YesOrNo::No),
            ..Default::default()
        };
        let mut ledger = ErrorLedger::new();

        let checker = InternationalElementChecker::new();
        assert!(!checker.is_finished(&case, &mut ledger));
        assert!(ledger.contains(ErrorCode::InternationalElementError));

        case.jurisdiction_issue_give_reason = Some("Child lives in Spain".into());
        assert!(checker.is_finished(&case, &mut ledger));
        assert!(checker.has_mandatory_completed(&case));
    }

    #[test]
    fn test_partially_answered_in_progress() {
        let case = CaseRecord {
            id: 1,
            habitual_resident_in_other_state: Some(YesOrNo::No),
            ..Default::default()
        };
        let mut ledger = ErrorLedger::new();

        let checker = InternationalElementChecker::new();
        assert!(checker.is_started(&case));
        assert!(!checker.is_finished(&case, &mut ledger));
    }
}
