//! The case record snapshot and its parsing from the case store's JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::party::{PartyRecord, Proceeding};
use super::values::{Address, Document, Element, Gender, YesNoDontKnow, YesOrNo};

/// Errors that can occur when reading a case snapshot.
#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Failed to read case file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse case JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Case record has no id")]
    MissingId,
}

/// The kind of application a case was started as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseType {
    C100,
    FL401,
}

/// Orders a C100 applicant can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    ChildArrangementsOrder,
    ProhibitedStepsOrder,
    SpecificIssueOrder,
}

/// Whether the applicant needs the court's permission to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionRequired {
    Yes,
    No,
    NoNowSought,
}

/// An applicant's or respondent's relationship to a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipToChild {
    Father,
    Mother,
    StepFather,
    StepMother,
    GrandParent,
    Guardian,
    SpecialGuardian,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Child {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub other_gender: Option<String>,
    pub orders_applied_for: Option<Vec<OrderType>>,
    pub applicants_relationship_to_child: Option<RelationshipToChild>,
    pub other_applicants_relationship_to_child: Option<String>,
    pub respondents_relationship_to_child: Option<RelationshipToChild>,
    pub other_respondents_relationship_to_child: Option<String>,
    pub child_live_with: Option<Vec<String>>,
    pub parental_responsibility_details: Option<String>,
}

/// MIAM exemption grounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MiamExemption {
    DomesticViolence,
    Urgency,
    #[serde(rename = "previousMIAMattendance")]
    PreviousMiamAttendance,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Behaviour {
    pub abuse_nature_description: Option<String>,
    pub behaviours_start_date_and_length: Option<String>,
    pub behaviours_nature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtectiveOrder {
    pub order_type: Option<String>,
    pub date_issued: Option<NaiveDate>,
    pub court_name: Option<String>,
}

/// Orders a FL401 applicant can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Fl401OrderType {
    NonMolestationOrder,
    OccupationOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fl401Orders {
    pub order_type: Option<Vec<Fl401OrderType>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkToChildArrangements {
    pub link_to_ca_application: Option<YesOrNo>,
    pub ca_application_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WithoutNoticeOrder {
    pub order_without_giving_notice: Option<YesOrNo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WithoutNoticeReasons {
    pub reason_for_order_without_giving_notice: Option<Vec<String>>,
    pub further_details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BailDetails {
    pub is_respondent_already_in_bail_condition: Option<YesNoDontKnow>,
    pub bail_condition_end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantFamilyDetails {
    pub does_applicant_have_children: Option<YesOrNo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantChild {
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub applicant_child_relationship: Option<String>,
    pub respondent_child_relationship: Option<String>,
}

/// FL401 applicant's relationship to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicantRelationship {
    MarriedOrCivil,
    FormerlyMarriedOrCivil,
    EngagedOrProposed,
    FormerlyEngagedOrProposed,
    LiveTogether,
    FormerlyLivedTogether,
    BoyfriendOrGirlfriend,
    FormerBoyfriendOrGirlfriend,
    NoneOfTheAbove,
}

impl ApplicantRelationship {
    /// Relationships that have ended and therefore need an end date.
    pub fn has_ended(self) -> bool {
        matches!(
            self,
            Self::FormerlyMarriedOrCivil
                | Self::FormerlyEngagedOrProposed
                | Self::FormerlyLivedTogether
                | Self::FormerBoyfriendOrGirlfriend
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RespondentRelationship {
    pub applicant_relationship: Option<ApplicantRelationship>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationshipDates {
    pub relationship_start_date: Option<NaiveDate>,
    pub relationship_end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationshipOptions {
    pub applicant_relationship_options: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RespondentBehaviour {
    pub applicant_want_to_stop_from_respondent_doing: Option<Vec<String>>,
    pub applicant_want_to_stop_from_respondent_doing_to_child: Option<Vec<String>>,
    pub other_reason_applicant_want_to_stop_from_respondent_doing: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Home {
    pub address: Option<Address>,
    pub people_living_at_this_address: Option<Vec<String>>,
    pub does_applicant_have_home_rights: Option<YesOrNo>,
    pub living_situation: Option<Vec<String>>,
    pub is_property_adapted: Option<YesOrNo>,
    pub how_is_property_adapted: Option<String>,
    pub is_there_mortgage_on_property: Option<YesOrNo>,
    pub mortgage_lender_name: Option<String>,
    pub is_property_rented: Option<YesOrNo>,
    pub landlord_name: Option<String>,
}

/// A draft response document generated for one respondent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftResponse {
    pub party_id: Option<String>,
    pub document: Option<Document>,
}

/// Immutable snapshot of one case as read from the case store.
///
/// The engine never mutates a record; it is replaced wholesale between
/// evaluation passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseRecord {
    pub id: u64,
    pub case_type_of_application: Option<CaseType>,

    // Case name
    pub applicant_case_name: Option<String>,

    // Type of application
    pub orders_applying_for: Option<Vec<OrderType>>,
    pub type_of_child_arrangements_order: Option<String>,
    pub nature_of_order: Option<String>,
    pub consent_order: Option<YesOrNo>,
    pub draft_consent_order_file: Option<Document>,
    pub application_permission_required: Option<PermissionRequired>,
    pub application_permission_required_reason: Option<String>,
    pub application_details: Option<String>,

    // Hearing urgency
    pub is_case_urgent: Option<YesOrNo>,
    pub case_urgency_time_and_reason: Option<String>,
    pub efforts_made_with_respondents: Option<String>,
    pub do_you_need_a_without_notice_hearing: Option<YesOrNo>,
    pub reasons_for_application_without_notice: Option<String>,
    pub do_you_require_a_hearing_with_reduced_notice: Option<YesOrNo>,
    pub set_out_reasons_below: Option<String>,
    pub are_respondents_aware_of_proceedings: Option<YesOrNo>,

    // Parties
    pub applicants: Option<Vec<Element<PartyRecord>>>,
    pub respondents: Option<Vec<Element<PartyRecord>>>,
    pub others_to_notify: Option<Vec<Element<PartyRecord>>>,

    // Children
    pub children: Option<Vec<Element<Child>>>,
    pub children_known_to_local_authority: Option<YesNoDontKnow>,
    pub children_known_to_local_authority_text_area: Option<String>,
    pub children_subject_of_child_protection_plan: Option<YesNoDontKnow>,

    // MIAM
    pub applicant_attended_miam: Option<YesOrNo>,
    pub claiming_exemption_miam: Option<YesOrNo>,
    pub family_mediator_miam: Option<YesOrNo>,
    pub mediator_registration_number: Option<String>,
    pub family_mediator_service_name: Option<String>,
    pub sole_trader_name: Option<String>,
    pub miam_certification_document_upload: Option<Document>,
    pub miam_exemptions_checklist: Option<Vec<MiamExemption>>,
    pub miam_domestic_violence_checklist: Option<Vec<String>>,
    pub miam_urgency_reason_checklist: Option<Vec<String>>,
    pub miam_previous_attendance_checklist: Option<Vec<String>>,
    pub miam_other_grounds_checklist: Option<Vec<String>>,

    // Allegations of harm
    pub allegations_of_harm_yes_no: Option<YesOrNo>,
    pub allegations_of_harm_domestic_abuse_yes_no: Option<YesOrNo>,
    pub domestic_abuse_behaviours: Option<Vec<Element<Behaviour>>>,
    pub allegations_of_harm_child_abduction_yes_no: Option<YesOrNo>,
    pub child_abduction_reasons: Option<String>,
    pub previous_abduction_threats: Option<YesOrNo>,
    pub previous_abduction_threats_details: Option<String>,
    pub abduction_passport_office_notified: Option<YesOrNo>,
    pub allegations_of_harm_child_abuse_yes_no: Option<YesOrNo>,
    pub child_abuse_behaviours: Option<Vec<Element<Behaviour>>>,
    pub allegations_of_harm_substance_abuse_yes_no: Option<YesOrNo>,
    pub allegations_of_harm_substance_abuse_details: Option<String>,
    pub allegations_of_harm_other_concerns_yes_no: Option<YesOrNo>,
    pub allegations_of_harm_other_concerns_details: Option<String>,
    pub allegations_of_harm_orders_yes_no: Option<YesOrNo>,
    pub protective_orders: Option<Vec<Element<ProtectiveOrder>>>,
    pub agree_child_unsupervised_time: Option<YesOrNo>,
    pub agree_child_supervised_time: Option<YesOrNo>,
    pub agree_child_other_contact: Option<YesOrNo>,

    // Other proceedings
    pub previous_or_ongoing_proceedings_for_children: Option<YesNoDontKnow>,
    pub existing_proceedings: Option<Vec<Element<Proceeding>>>,

    // Attending the hearing
    pub is_welsh_needed: Option<YesOrNo>,
    pub welsh_needs: Option<Vec<String>>,
    pub is_interpreter_needed: Option<YesOrNo>,
    pub interpreter_needs: Option<Vec<String>>,
    pub is_disability_present: Option<YesOrNo>,
    pub adjustments_required: Option<String>,
    pub is_special_arrangements_required: Option<YesOrNo>,
    pub special_arrangements_required: Option<String>,
    pub is_intermediary_needed: Option<YesOrNo>,
    pub reasons_for_intermediary: Option<String>,

    // International element
    pub habitual_resident_in_other_state: Option<YesOrNo>,
    pub habitual_resident_in_other_state_give_reason: Option<String>,
    pub jurisdiction_issue: Option<YesOrNo>,
    pub jurisdiction_issue_give_reason: Option<String>,
    pub request_to_foreign_authority: Option<YesOrNo>,
    pub request_to_foreign_authority_give_reason: Option<String>,

    // Litigation capacity
    pub litigation_capacity_factors: Option<String>,
    pub litigation_capacity_referrals: Option<String>,
    pub litigation_capacity_other_factors: Option<YesOrNo>,
    pub litigation_capacity_other_factors_details: Option<String>,

    // Welsh language requirements
    pub welsh_language_requirement: Option<YesOrNo>,
    pub welsh_language_requirement_application: Option<ApplicationLanguage>,
    pub welsh_language_requirement_application_need_welsh: Option<YesOrNo>,
    pub language_requirement_application_need_english: Option<YesOrNo>,

    // FL401 sections
    pub type_of_application_orders: Option<Fl401Orders>,
    #[serde(rename = "typeOfApplicationLinkToCA")]
    pub type_of_application_link_to_ca: Option<LinkToChildArrangements>,
    pub order_without_giving_notice_to_respondent: Option<WithoutNoticeOrder>,
    pub reason_for_order_without_giving_notice: Option<WithoutNoticeReasons>,
    pub bail_details: Option<BailDetails>,
    pub applicant_family_details: Option<ApplicantFamilyDetails>,
    pub applicant_children: Option<Vec<Element<ApplicantChild>>>,
    pub respondent_relationship_object: Option<RespondentRelationship>,
    pub respondent_relationship_date_info: Option<RelationshipDates>,
    pub respondent_relationship_options: Option<RelationshipOptions>,
    pub respondent_behaviour_data: Option<RespondentBehaviour>,
    pub home: Option<Home>,

    // Respondent response documents
    pub draft_responses: Option<Vec<Element<DraftResponse>>>,
}

/// Language the application is to be issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationLanguage {
    English,
    Welsh,
}

impl CaseRecord {
    /// Parse a case snapshot from the case store's JSON.
    pub fn from_json(json: &str) -> Result<Self, CaseError> {
        let record: CaseRecord = serde_json::from_str(json)?;
        if record.id == 0 {
            return Err(CaseError::MissingId);
        }
        Ok(record)
    }

    /// Parse a case snapshot from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CaseError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Applications default to C100 when the type has not been chosen yet.
    pub fn case_type(&self) -> CaseType {
        self.case_type_of_application.unwrap_or(CaseType::C100)
    }

    pub fn applicants(&self) -> &[Element<PartyRecord>] {
        self.applicants.as_deref().unwrap_or(&[])
    }

    pub fn respondents(&self) -> &[Element<PartyRecord>] {
        self.respondents.as_deref().unwrap_or(&[])
    }

    pub fn others_to_notify(&self) -> &[Element<PartyRecord>] {
        self.others_to_notify.as_deref().unwrap_or(&[])
    }

    pub fn children(&self) -> &[Element<Child>] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether the FL401 application asks for an occupation order.
    pub fn applies_for_occupation_order(&self) -> bool {
        self.type_of_application_orders
            .as_ref()
            .and_then(|orders| orders.order_type.as_ref())
            .is_some_and(|orders| orders.contains(&Fl401OrderType::OccupationOrder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_CASE: &str = r#"{
        "id": 1700000000000001,
        "caseTypeOfApplication": "C100",
        "applicantCaseName": "Smith v Jones"
    }"#;

    #[test]
    fn test_parse_minimal_case() {
        let case = CaseRecord::from_json(MINIMAL_CASE).unwrap();
        assert_eq!(case.id, 1700000000000001);
        assert_eq!(case.case_type(), CaseType::C100);
        assert_eq!(case.applicant_case_name.as_deref(), Some("Smith v Jones"));
        assert!(case.children().is_empty());
    }

    #[test]
    fn test_missing_id_rejected() {
        let result = CaseRecord::from_json(r#"{"applicantCaseName": "No id"}"#);
        assert!(matches!(result, Err(CaseError::MissingId)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = CaseRecord::from_json("{not json");
        assert!(matches!(result, Err(CaseError::JsonError(_))));
    }

    #[test]
    fn test_unset_case_type_defaults_to_c100() {
        let case = CaseRecord {
            id: 1,
            ..Default::default()
        };
        assert_eq!(case.case_type(), CaseType::C100);
    }

    #[test]
    fn test_fl401_fields_parse() {
        let case = CaseRecord::from_json(
            r#"{
                "id": 42,
                "caseTypeOfApplication": "FL401",
                "typeOfApplicationOrders": {"orderType": ["nonMolestationOrder", "occupationOrder"]},
                "typeOfApplicationLinkToCA": {"linkToCaApplication": "No"}
            }"#,
        )
        .unwrap();
        assert_eq!(case.case_type(), CaseType::FL401);
        assert!(case.applies_for_occupation_order());
        assert_eq!(
            case.type_of_application_link_to_ca
                .and_then(|link| link.link_to_ca_application),
            Some(YesOrNo::No)
        );
    }

    #[test]
    fn test_miam_exemption_wire_names() {
        let case = CaseRecord::from_json(
            r#"{"id": 7, "miamExemptionsChecklist": ["domesticViolence", "previousMIAMattendance"]}"#,
        )
        .unwrap();
        assert_eq!(
            case.miam_exemptions_checklist,
            Some(vec![
                MiamExemption::DomesticViolence,
                MiamExemption::PreviousMiamAttendance
            ])
        );
    }
}
