//! Hearing urgency.
//!
//! Four questions are always asked; three of them unlock a free-text
//! answer when answered Yes.

use crate::case::{Answer, CaseRecord};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

pub struct HearingUrgencyChecker;

impl HearingUrgencyChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let mut r = Requirements::new();
        r.field("isCaseUrgent", &case.is_case_urgent)
            .when(case.is_case_urgent.answered_yes(), |r| {
                r.field(
                    "caseUrgencyTimeAndReason",
                    &case.case_urgency_time_and_reason,
                )
                .field(
                    "effortsMadeWithRespondents",
                    &case.efforts_made_with_respondents,
                );
            })
            .field(
                "doYouNeedAWithoutNoticeHearing",
                &case.do_you_need_a_without_notice_hearing,
            )
            .when(case.do_you_need_a_without_notice_hearing.answered_yes(), |r| {
                r.field(
                    "reasonsForApplicationWithoutNotice",
                    &case.reasons_for_application_without_notice,
                );
            })
            .field(
                "doYouRequireAHearingWithReducedNotice",
                &case.do_you_require_a_hearing_with_reduced_notice,
            )
            .when(
                case.do_you_require_a_hearing_with_reduced_notice.answered_yes(),
                |r| {
                    r.field("setOutReasonsBelow", &case.set_out_reasons_below);
                },
            )
            .field(
                "areRespondentsAwareOfProceedings",
                &case.are_respondents_aware_of_proceedings,
            );
        r
    }
}

impl Default for HearingUrgencyChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for HearingUrgencyChecker {
    fn event(&self) -> Event {
        Event::HearingUrgency
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        any_present(&[
            &case.is_case_urgent,
            &case.case_urgency_time_and_reason,
            &case.efforts_made_with_respondents,
            &case.do_you_need_a_without_notice_hearing,
            &case.reasons_for_application_without_notice,
            &case.do_you_require_a_hearing_with_reduced_notice,
            &case.set_out_reasons_below,
            &case.are_respondents_aware_of_proceedings,
        ])
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::HearingUrgencyError,
            ledger,
        )
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        self.requirements(case).is_satisfied().into()
    }
}
