//! Type of application (C100).
//!
//! Conditional fields:
//! - a child arrangements order needs its type
//! - a consent order needs the draft order uploaded
//! - "permission required: yes" needs the reason

use crate::case::{Answer, CaseRecord, OrderType, PermissionRequired};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

pub struct TypeOfApplicationChecker;

impl TypeOfApplicationChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let child_arrangements = case
            .orders_applying_for
            .as_ref()
            .is_some_and(|orders| orders.contains(&OrderType::ChildArrangementsOrder));

        let mut r = Requirements::new();
        r.field("ordersApplyingFor", &case.orders_applying_for)
            .when(child_arrangements, |r| {
                r.field(
                    "typeOfChildArrangementsOrder",
                    &case.type_of_child_arrangements_order,
                );
            })
            .field("natureOfOrder", &case.nature_of_order)
            .field("consentOrder", &case.consent_order)
            .when(case.consent_order.answered_yes(), |r| {
                r.field("draftConsentOrderFile", &case.draft_consent_order_file);
            })
            .field(
                "applicationPermissionRequired",
                &case.application_permission_required,
            )
            .when(
                case.application_permission_required == Some(PermissionRequired::Yes),
                |r| {
                    r.field(
                        "applicationPermissionRequiredReason",
                        &case.application_permission_required_reason,
                    );
                },
            )
            .field("applicationDetails", &case.application_details);
        r
    }
}

impl Default for TypeOfApplicationChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for TypeOfApplicationChecker {
    fn event(&self) -> Event {
        Event::TypeOfApplication
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        any_present(&[
            &case.orders_applying_for,
            &case.type_of_child_arrangements_order,
            &case.nature_of_order,
            &case.consent_order,
            &case.draft_consent_order_file,
            &case.application_permission_required,
            &case.application_permission_required_reason,
            &case.application_details,
        ])
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::TypeOfApplicationError,
            ledger,
        )
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        self.requirements(case).is_satisfied().into()
    }
}
