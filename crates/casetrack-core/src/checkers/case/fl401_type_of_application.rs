//! Type of application (FL401).

use crate::case::{Answer, CaseRecord};
use crate::checkers::requirements::{Presence, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

/// Orders applied for, and whether the application is linked to a child
/// arrangements case.
pub struct Fl401TypeOfApplicationChecker;

impl Fl401TypeOfApplicationChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let mut r = Requirements::new();
        r.nested(
            "typeOfApplicationOrders",
            case.type_of_application_orders.as_ref(),
            |r, orders| {
                r.field("orderType", &orders.order_type);
            },
        )
        .nested(
            "typeOfApplicationLinkToCA",
            case.type_of_application_link_to_ca.as_ref(),
            |r, link| {
                r.field("linkToCaApplication", &link.link_to_ca_application)
                    .when(link.link_to_ca_application.answered_yes(), |r| {
                        r.field("caApplicationNumber", &link.ca_application_number);
                    });
            },
        );
        r
    }
}

impl Default for Fl401TypeOfApplicationChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for Fl401TypeOfApplicationChecker {
    fn event(&self) -> Event {
        Event::Fl401TypeOfApplication
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        case.type_of_application_orders
            .as_ref()
            .is_some_and(|orders| orders.order_type.is_present())
            || case
                .type_of_application_link_to_ca
                .as_ref()
                .is_some_and(|link| link.link_to_ca_application.is_present())
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::Fl401TypeOfApplicationError,
            ledger,
        )
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        self.requirements(case).is_satisfied().into()
    }
}
