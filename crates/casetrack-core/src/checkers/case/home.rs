//! The home (FL401).
//!
//! Only an occupation order concerns the home, so the section gates
//! submission and records an error only when one is applied for.

use crate::case::{Answer, CaseRecord, Home};
use crate::checkers::requirements::{any_present, Requirements};
use crate::checkers::{settle, verdict, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

pub struct HomeChecker;

impl HomeChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let mut r = Requirements::new();
        r.nested("home", case.home.as_ref(), |r, home: &Home| {
            r.field("address", &home.address)
                .field("peopleLivingAtThisAddress", &home.people_living_at_this_address)
                .field("doesApplicantHaveHomeRights", &home.does_applicant_have_home_rights)
                .field("livingSituation", &home.living_situation)
                .field("isPropertyAdapted", &home.is_property_adapted)
                .when(home.is_property_adapted.answered_yes(), |r| {
                    r.field("howIsPropertyAdapted", &home.how_is_property_adapted);
                })
                .field("isThereMortgageOnProperty", &home.is_there_mortgage_on_property)
                .when(home.is_there_mortgage_on_property.answered_yes(), |r| {
                    r.field("mortgageLenderName", &home.mortgage_lender_name);
                })
                .field("isPropertyRented", &home.is_property_rented)
                .when(home.is_property_rented.answered_yes(), |r| {
                    r.field("landlordName", &home.landlord_name);
                });
        });
        r
    }
}

impl Default for HomeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for HomeChecker {
    fn event(&self) -> Event {
        Event::Home
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        case.home.as_ref().is_some_and(|home| {
            any_present(&[
                &home.address,
                &home.people_living_at_this_address,
                &home.does_applicant_have_home_rights,
                &home.living_situation,
                &home.is_property_adapted,
                &home.is_there_mortgage_on_property,
                &home.is_property_rented,
            ])
        })
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        let requirements = self.requirements(case);
        if case.applies_for_occupation_order() {
            settle(self.event(), &requirements, ErrorCode::HomeError, ledger)
        } else {
            ledger.remove(ErrorCode::HomeError);
            verdict(self.event(), &requirements)
        }
    }

    fn mandatory_completion(&self, case: &CaseRecord) -> MandatoryCompletion {
        if case.applies_for_occupation_order() {
            self.requirements(case).is_satisfied().into()
        } else {
            MandatoryCompletion::NoRule
        }
    }
}
