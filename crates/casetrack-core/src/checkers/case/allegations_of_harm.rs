//! Allegations of harm (C100).

use crate::case::{Answer, Behaviour, CaseRecord, Element};
use crate::checkers::requirements::{any_present, items, Requirements};
use crate::checkers::{settle, EventChecker, MandatoryCompletion};
use crate::events::Event;
use crate::ledger::{ErrorCode, ErrorLedger};

/// A "No" to the opening question finishes the section. A "Yes" asks about
/// each kind of harm, then about contact arrangements in the meantime.
pub struct AllegationsOfHarmChecker;

fn behaviours(r: &mut Requirements, collection: &'static str, entries: &[Element<Behaviour>]) {
    r.each(collection, entries, |r, behaviour| {
        r.field(
            "abuseNatureDescription",
            &behaviour.value.abuse_nature_description,
        )
        .field(
            "behavioursStartDateAndLength",
            &behaviour.value.behaviours_start_date_and_length,
        )
        .field("behavioursNature", &behaviour.value.behaviours_nature);
    });
}

impl AllegationsOfHarmChecker {
    pub fn new() -> Self {
        Self
    }

    fn requirements(&self, case: &CaseRecord) -> Requirements {
        let mut r = Requirements::new();
        r.field("allegationsOfHarmYesNo", &case.allegations_of_harm_yes_no)
            .when(case.allegations_of_harm_yes_no.answered_yes(), |r| {
                r.field(
                    "allegationsOfHarmDomesticAbuseYesNo",
                    &case.allegations_of_harm_domestic_abuse_yes_no,
                )
                .when(
                    case.allegations_of_harm_domestic_abuse_yes_no.answered_yes(),
                    |r| behaviours(r, "domesticAbuseBehaviours", items(&case.domestic_abuse_behaviours)),
                )
                .field(
                    "allegationsOfHarmChildAbductionYesNo",
                    &case.allegations_of_harm_child_abduction_yes_no,
                )
                .when(
                    case.allegations_of_harm_child_abduction_yes_no.answered_yes(),
                    |r| {
                        r.field("childAbductionReasons", &case.child_abduction_reasons)
                            .field("previousAbductionThreats", &case.previous_abduction_threats)
                            .when(case.previous_abduction_threats.answered_yes(), |r| {
                                r.field(
                                    "previousAbductionThreatsDetails",
                                    &case.previous_abduction_threats_details,
                                );
                            })
                            .field(
                                "abductionPassportOfficeNotified",
                                &case.abduction_passport_office_notified,
                            );
                    },
                )
                .field(
                    "allegationsOfHarmChildAbuseYesNo",
                    &case.allegations_of_harm_child_abuse_yes_no,
                )
                .when(
                    case.allegations_of_harm_child_abuse_yes_no.answered_yes(),
                    |r| behaviours(r, "childAbuseBehaviours", items(&case.child_abuse_behaviours)),
                )
                .field(
                    "allegationsOfHarmSubstanceAbuseYesNo",
                    &case.allegations_of_harm_substance_abuse_yes_no,
                )
                .when(
                    case.allegations_of_harm_substance_abuse_yes_no.answered_yes(),
                    |r| {
                        r.field(
                            "allegationsOfHarmSubstanceAbuseDetails",
                            &case.allegations_of_harm_substance_abuse_details,
                        );
                    },
                )
                .field(
                    "allegationsOfHarmOtherConcernsYesNo",
                    &case.allegations_of_harm_other_concerns_yes_no,
                )
                .when(
                    case.allegations_of_harm_other_concerns_yes_no.answered_yes(),
                    |r| {
                        r.field(
                            "allegationsOfHarmOtherConcernsDetails",
                            &case.allegations_of_harm_other_concerns_details,
                        );
                    },
                )
                .field(
                    "allegationsOfHarmOrdersYesNo",
                    &case.allegations_of_harm_orders_yes_no,
                )
                .when(case.allegations_of_harm_orders_yes_no.answered_yes(), |r| {
                    r.each("protectiveOrders", items(&case.protective_orders), |r, order| {
                        r.field("orderType", &order.value.order_type)
                            .field("dateIssued", &order.value.date_issued)
                            .field("courtName", &order.value.court_name);
                    });
                })
                .field(
                    "agreeChildUnsupervisedTime",
                    &case.agree_child_unsupervised_time,
                )
                .field("agreeChildSupervisedTime", &case.agree_child_supervised_time)
                .field("agreeChildOtherContact", &case.agree_child_other_contact);
            });
        r
    }
}

impl Default for AllegationsOfHarmChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl EventChecker for AllegationsOfHarmChecker {
    fn event(&self) -> Event {
        Event::AllegationsOfHarm
    }

    fn is_started(&self, case: &CaseRecord) -> bool {
        any_present(&[
            &case.allegations_of_harm_yes_no,
            &case.allegations_of_harm_domestic_abuse_yes_no,
            &case.allegations_of_harm_child_abduction_yes_no,
            &case.allegations_of_harm_child_abuse_yes_no,
            &case.allegations_of_harm_substance_abuse_yes_no,
            &case.allegations_of_harm_other_concerns_yes_no,
            &case.allegations_of_harm_orders_yes_no,
            &case.agree_child_unsupervised_time,
            &case.agree_child_supervised_time,
            &case.agree_child_other_contact,
        ])
    }

    fn is_finished(&self, case: &CaseRecord, ledger: &mut ErrorLedger) -> bool {
        settle(
            self.event(),
            &self.requirements(case),
            ErrorCode::AllegationsOfHarmError,
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

    fn no_harm_except(overrides: serde_json::Value) -> CaseRecord {
        let mut value = json!({
            "id": 1,
            "allegationsOfHarmYesNo": "Yes",
            "allegationsOfHarmDomesticAbuseYesNo": "No",
            "allegationsOfHarmChildAbductionYesNo": "No",
            "allegationsOfHarmChildAbuseYesNo": "No",
            "allegationsOfHarmSubstanceAbuseYesNo": "No",
            "allegationsOfHarmOtherConcernsYesNo": "No",
            "allegationsOfHarmOrdersYesNo": "No",
            "agreeChildUnsupervisedTime": "Yes",
            "agreeChildSupervisedTime": "Yes",
            "agreeChildOtherContact": "Yes"
        });
        for (key, field) in overrides.as_object().unwrap() {
            value[key] = field.clone();
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_no_allegations_finished() {
        let case: CaseRecord =
            serde_json::from_value(json!({ "id": 1, "allegationsOfHarmYesNo": "No" })).unwrap();
        let mut ledger = ErrorLedger::new();

        let checker = AllegationsOfHarmChecker::new();
        assert!(checker.is_started(&case));
        assert!(checker.is_finished(&case, &mut ledger));
    }

    #[test]
    fn test_all_harm_answers_no_finished() {
        let case = no_harm_except(json!({}));
        let mut ledger = ErrorLedger::new();
        assert!(AllegationsOfHarmChecker::new().is_finished(&case, &mut ledger));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_domestic_abuse_needs_behaviours() {
        let case = no_harm_except(json!({ "allegationsOfHarmDomesticAbuseYesNo": "Yes" }));
        let mut ledger = ErrorLedger::new();

        let checker = AllegationsOfHarmChecker::new();
        assert!(!checker.is_finished(&case, &mut ledger));
        assert!(ledger.contains(ErrorCode::AllegationsOfHarmError));

        let case = no_harm_except(json!({
            "allegationsOfHarmDomesticAbuseYesNo": "Yes",
            "domesticAbuseBehaviours": [{
                "value": {
                    "abuseNatureDescription": "Shouting",
                    "behavioursStartDateAndLength": "2021, ongoing",
                    "behavioursNature": "Verbal"
                }
            }]
        }));
        assert!(checker.is_finished(&case, &mut ledger));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_protective_order_needs_each_field() {
        let case = no_harm_except(json!({
            "allegationsOfHarmOrdersYesNo": "Yes",
            "protectiveOrders": [{ "value": { "orderType": "Non-molestation", "courtName": "Leeds" } }]
        }));
        assert_eq!(
            AllegationsOfHarmChecker::new().mandatory_completion(&case),
            MandatoryCompletion::Outstanding
        );
    }

    #[test]
    fn test_abduction_threats_need_details() {
        let case = no_harm_except(json!({
            "allegationsOfHarmChildAbductionYesNo": "Yes",
            "childAbductionReasons": "Threatened to take child abroad",
            "previousAbductionThreats": "Yes",
            "abductionPassportOfficeNotified": "No"
        }));
        let mut ledger = ErrorLedger::new();
        assert!(!AllegationsOfHarmChecker::new().is_finished(&case, &mut ledger));
    }
}
