//! Without notice order (FL401).
//!
//! An applicant asking for an order without notice to the respondent must
//! say why, and whether the respondent is already on bail conditions.

use crate::case::{Answer, CaseRecord};
use crate::checkers::requirements::{Presence, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

pub struct WithoutNoticeOrderChecker;

impl WithoutNoticeOrderChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let without_notice = case
            .order_without_giving_notice_to_respondent
            .as_ref()
            .is_some_and(|order| order.order_without_giving_notice.answered_yes());

        let mut r = Requirements::new();
        r.nested(
            "orderWithoutGivingNoticeToRespondent",
            case.order_without_giving_notice_to_respondent.as_ref(),
            |r, order| {
                r.field(
                    "orderWithoutGivingNotice",
                    &order.order_without_giving_notice,
                );
            },
        )
        .when(without_notice, |r| {
            r.nested(
                "reasonForOrderWithoutGivingNotice",
                case.reason_for_order_without_giving_notice.as_ref(),
                |r, reasons| {
                    r.field(
                        "reasonForOrderWithoutGivingNotice",
                        &reasons.reason_for_order_without_giving_notice,
                    );
                },
            )
            .nested("bailDetails", case.bail_details.as_ref(), |r, bail| {
                r.field(
                    "isRespondentAlreadyInBailCondition",
                    &bail.is_respondent_already_in_bail_condition,
                )
                .when(
                    bail.is_respondent_already_in_bail_condition.answered_yes(),
                    |r| {
                        r.field("bailConditionEndDate", &bail.bail_condition_end_date);
                    },
                );
            });
        });
        r
    }
}

impl Default for WithoutNoticeOrderChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for WithoutNoticeOrderChecker {
    fn event(&self) -> Event {
        Event::WithoutNoticeOrder
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        case.order_without_giving_notice_to_respondent
            .as_ref()
            .is_some_and(|order| order.order_without_giving_notice.is_present())
            || case
                .reason_for_order_without_giving_notice
                .as_ref()
                .is_some_and(|reasons| reasons.reason_for_order_without_giving_notice.is_present())
            || case
                .bail_details
                .as_ref()
                .is_some_and(|bail| bail.is_respondent_already_in_bail_condition.is_present())
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::WithoutNoticeOrderError,
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
    use serde_json::json;

    #[test]
    fn test_with_notice_finished() {
        let case: CaseRecord = serde_json::from_value(json!({
            "id": 1,
            "orderWithoutGivingNoticeToRespondent": { "orderWithoutGivingNotice": "No" }
        }))
        .unwrap();
        let mut ledger = ErrorLedger::new();
        assert!(WithoutNoticeOrderChecker::new().is_finished(&case, &mut ledger));
    }

    #[test]
    fn test_without_notice_needs_reasons_and_bail() {
        let case: CaseRecord = serde_json::from_value(json!({
            "id": 1,
            "orderWithoutGivingNoticeToRespondent": { "orderWithoutGivingNotice": "Yes" },
            "reasonForOrderWithoutGivingNotice": {
                "reasonForOrderWithoutGivingNotice": ["harmToApplicantOrChild"]
            }
        }))
        .unwrap();
        let mut ledger = ErrorLedger::new();

        let checker = WithoutNoticeOrderChecker::new();
        assert!(!checker.is_finished(&case, &mut ledger));
        assert!(ledger.contains(ErrorCode::WithoutNoticeOrderError));
    }

    #[test]
    fn test_bail_conditions_need_end_date() {
        let mut case: CaseRecord = serde_json::from_value(json!({
            "id": 1,
            "orderWithoutGivingNoticeToRespondent": { "orderWithoutGivingNotice": "Yes" },
            "reasonForOrderWithoutGivingNotice": {
                "reasonForOrderWithoutGivingNotice": ["deferringApplicationIfNotImmediately"]
            },
            "bailDetails": { "isRespondentAlreadyInBailCondition": "yes" }
        }))
        .unwrap();
        let checker = WithoutNoticeOrderChecker::new();
        assert!(!checker.has_mandatory_completed(&case));

        case.bail_details = serde_json::from_value(json!({
            "isRespondentAlreadyInBailCondition": "yes",
            "bailConditionEndDate": "2026-12-01"
        }))
        .unwrap();
        assert!(checker.has_mandatory_completed(&case));
    }
}
