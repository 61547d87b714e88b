//! Party records (applicants, respondents, other people) and the
//! respondent response sub-record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::values::{Address, Element, Gender, YesNoDontKnow, YesOrNo};

/// One applicant, respondent or other person on a case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub previous_name: Option<String>,

    pub gender: Option<Gender>,
    pub other_gender: Option<String>,

    pub is_date_of_birth_known: Option<YesOrNo>,
    pub date_of_birth: Option<NaiveDate>,

    pub is_place_of_birth_known: Option<YesOrNo>,
    pub place_of_birth: Option<String>,

    pub is_current_address_known: Option<YesOrNo>,
    pub address: Option<Address>,
    pub is_at_address_less_than_5_years: Option<YesOrNo>,
    pub address_lived_less_than_5_years_details: Option<String>,

    pub can_you_provide_email_address: Option<YesOrNo>,
    pub email: Option<String>,
    pub can_you_provide_phone_number: Option<YesOrNo>,
    pub phone_number: Option<String>,

    pub do_they_have_legal_representation: Option<YesNoDontKnow>,
    pub representative_first_name: Option<String>,
    pub representative_last_name: Option<String>,
    pub solicitor_email: Option<String>,
    pub solicitor_org_name: Option<String>,

    /// Present once the party has started responding to the application.
    pub response: Option<Response>,
}

impl PartyRecord {
    /// Whether this party is flagged as the one currently responding.
    ///
    /// Only an explicit `Yes` counts; a missing response or flag does not.
    pub fn is_active_respondent(&self) -> bool {
        self.response
            .as_ref()
            .and_then(|response| response.active_respondent)
            .is_some_and(YesOrNo::is_yes)
    }
}

/// A respondent's answers to the response workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Response {
    pub active_respondent: Option<YesOrNo>,
    pub consent: Option<Consent>,
    pub keep_details_private: Option<KeepDetailsPrivate>,
    pub citizen_details: Option<CitizenDetails>,
    pub attend_to_court: Option<AttendToCourt>,
    pub miam: Option<RespondentMiam>,
    pub current_or_previous_proceedings: Option<CurrentOrPreviousProceedings>,
    pub allegations_of_harm: Option<RespondentAllegationsOfHarm>,
    pub international_elements: Option<InternationalElements>,
    pub ability_to_participate: Option<AbilityToParticipate>,
    #[serde(rename = "c7ResponseSubmitted")]
    pub c7_response_submitted: Option<YesOrNo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consent {
    pub consent_to_the_application: Option<YesOrNo>,
    pub no_consent_reason: Option<String>,
    pub application_received_date: Option<NaiveDate>,
    pub permission_from_court: Option<YesOrNo>,
    pub court_order_details: Option<String>,
}

/// Contact details a respondent may ask to keep confidential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfidentialField {
    Address,
    PhoneNumber,
    Email,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeepDetailsPrivate {
    pub other_people_know_your_contact_details: Option<YesNoDontKnow>,
    pub confidentiality: Option<YesOrNo>,
    pub confidentiality_list: Option<Vec<ConfidentialField>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// Contact details as confirmed or edited by the respondent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CitizenDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub previous_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub address: Option<Address>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendToCourt {
    pub respondent_welsh_needs: Option<YesOrNo>,
    pub respondent_welsh_needs_list: Option<Vec<String>>,
    pub is_respondent_needed_interpreter: Option<YesOrNo>,
    pub respondent_interpreter_needs: Option<Vec<String>>,
    pub have_any_disability: Option<YesOrNo>,
    pub disability_needs: Option<String>,
    pub respondent_special_arrangements: Option<YesOrNo>,
    pub respondent_special_arrangement_details: Option<String>,
    pub respondent_intermediary_needs: Option<YesOrNo>,
    pub respondent_intermediary_needs_details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RespondentMiam {
    pub attended_miam: Option<YesOrNo>,
    pub willing_to_attend_miam: Option<YesOrNo>,
    pub reason_not_attending_miam: Option<String>,
}

/// Whether a proceeding is still running or has concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProceedingStatus {
    Ongoing,
    Previous,
}

/// A court case involving the children, past or present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Proceeding {
    pub previous_or_ongoing_proceedings: Option<ProceedingStatus>,
    pub case_number: Option<String>,
    pub name_of_court: Option<String>,
    pub date_started: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentOrPreviousProceedings {
    pub have_children_been_involved_in_court_case: Option<YesOrNo>,
    pub court_order_made_for_protection: Option<YesOrNo>,
    pub proceedings_list: Option<Vec<Element<Proceeding>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RespondentAllegationsOfHarm {
    pub respondent_allegations_of_harm: Option<YesOrNo>,
    pub respondent_domestic_abuse: Option<YesOrNo>,
    pub respondent_child_abuse: Option<YesOrNo>,
    pub respondent_child_abduction: Option<YesOrNo>,
    pub respondent_drug_or_alcohol_abuse: Option<YesOrNo>,
    pub respondent_drug_or_alcohol_abuse_details: Option<String>,
    pub respondent_other_safety_concerns: Option<YesOrNo>,
    pub respondent_other_safety_concerns_details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InternationalElements {
    pub reason_for_child: Option<YesOrNo>,
    pub reason_for_child_details: Option<String>,
    pub reason_for_parent: Option<YesOrNo>,
    pub reason_for_parent_details: Option<String>,
    pub reason_for_jurisdiction: Option<YesOrNo>,
    pub reason_for_jurisdiction_details: Option<String>,
    pub request_to_authority: Option<YesOrNo>,
    pub request_to_authority_details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityToParticipate {
    pub factors_affecting_ability_to_participate: Option<YesNoDontKnow>,
    pub provide_details_for_factors_affecting_ability_to_participate: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_flag_requires_explicit_yes() {
        let mut party = PartyRecord::default();
        assert!(!party.is_active_respondent());

        party.response = Some(Response::default());
        assert!(!party.is_active_respondent());

        party.response = Some(Response {
            active_respondent: Some(YesOrNo::No),
            ..Default::default()
        });
        assert!(!party.is_active_respondent());

        party.response = Some(Response {
            active_respondent: Some(YesOrNo::Yes),
            ..Default::default()
        });
        assert!(party.is_active_respondent());
    }

    #[test]
    fn test_parse_response_fields() {
        let party: PartyRecord = serde_json::from_str(
            r#"{
                "firstName": "Sam",
                "response": {
                    "activeRespondent": "Yes",
                    "c7ResponseSubmitted": "No",
                    "consent": {"consentToTheApplication": "Yes", "applicationReceivedDate": "2024-03-01"}
                }
            }"#,
        )
        .unwrap();

        let response = party.response.unwrap();
        assert_eq!(response.c7_response_submitted, Some(YesOrNo::No));
        assert_eq!(
            response.consent.unwrap().application_received_date,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }
}
