//! Event identifiers.
//!
//! An event is one section of a case wizard. Identifiers match the case
//! store's event ids so that configuration files and rendered links can
//! use them directly.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Common surface of the whole-case and party-scoped event enums.
pub trait EventKind:
    Copy + Ord + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The case store's event id.
    fn id(&self) -> &'static str;

    /// Label shown in the task list.
    fn label(&self) -> &'static str;
}

/// Sections of the C100 and FL401 application wizards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Event {
    #[serde(rename = "caseName")]
    CaseName,
    #[serde(rename = "selectApplicationType")]
    TypeOfApplication,
    #[serde(rename = "hearingUrgency")]
    HearingUrgency,
    #[serde(rename = "applicantsDetails")]
    ApplicantDetails,
    #[serde(rename = "childDetails")]
    ChildDetails,
    #[serde(rename = "respondentsDetails")]
    RespondentDetails,
    #[serde(rename = "miam")]
    Miam,
    #[serde(rename = "allegationsOfHarm")]
    AllegationsOfHarm,
    #[serde(rename = "otherPeopleInTheCase")]
    OtherPeopleInTheCase,
    #[serde(rename = "otherProceedings")]
    OtherProceedings,
    #[serde(rename = "attendingTheHearing")]
    AttendingTheHearing,
    #[serde(rename = "internationalElement")]
    InternationalElement,
    #[serde(rename = "litigationCapacity")]
    LitigationCapacity,
    #[serde(rename = "welshLanguageRequirements")]
    WelshLanguageRequirements,
    #[serde(rename = "fl401TypeOfApplication")]
    Fl401TypeOfApplication,
    #[serde(rename = "withoutNoticeOrderDetails")]
    WithoutNoticeOrder,
    #[serde(rename = "fl401ApplicantFamilyDetails")]
    ApplicantFamilyDetails,
    #[serde(rename = "relationshipToRespondent")]
    RelationshipToRespondent,
    #[serde(rename = "respondentBehaviour")]
    RespondentBehaviour,
    #[serde(rename = "fl401Home")]
    Home,
}

impl Event {
    pub const ALL: [Event; 20] = [
        Event::CaseName,
        Event::TypeOfApplication,
        Event::HearingUrgency,
        Event::ApplicantDetails,
        Event::ChildDetails,
        Event::RespondentDetails,
        Event::Miam,
        Event::AllegationsOfHarm,
        Event::OtherPeopleInTheCase,
        Event::OtherProceedings,
        Event::AttendingTheHearing,
        Event::InternationalElement,
        Event::LitigationCapacity,
        Event::WelshLanguageRequirements,
        Event::Fl401TypeOfApplication,
        Event::WithoutNoticeOrder,
        Event::ApplicantFamilyDetails,
        Event::RelationshipToRespondent,
        Event::RespondentBehaviour,
        Event::Home,
    ];
}

impl EventKind for Event {
    fn id(&self) -> &'static str {
        match self {
            Event::CaseName => "caseName",
            Event::TypeOfApplication => "selectApplicationType",
            Event::HearingUrgency => "hearingUrgency",
            Event::ApplicantDetails => "applicantsDetails",
            Event::ChildDetails => "childDetails",
            Event::RespondentDetails => "respondentsDetails",
            Event::Miam => "miam",
            Event::AllegationsOfHarm => "allegationsOfHarm",
            Event::OtherPeopleInTheCase => "otherPeopleInTheCase",
            Event::OtherProceedings => "otherProceedings",
            Event::AttendingTheHearing => "attendingTheHearing",
            Event::InternationalElement => "internationalElement",
            Event::LitigationCapacity => "litigationCapacity",
            Event::WelshLanguageRequirements => "welshLanguageRequirements",
            Event::Fl401TypeOfApplication => "fl401TypeOfApplication",
            Event::WithoutNoticeOrder => "withoutNoticeOrderDetails",
            Event::ApplicantFamilyDetails => "fl401ApplicantFamilyDetails",
            Event::RelationshipToRespondent => "relationshipToRespondent",
            Event::RespondentBehaviour => "respondentBehaviour",
            Event::Home => "fl401Home",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Event::CaseName => "Case name",
            Event::TypeOfApplication => "Type of application",
            Event::HearingUrgency => "Hearing urgency",
            Event::ApplicantDetails => "Applicant details",
            Event::ChildDetails => "Child details",
            Event::RespondentDetails => "Respondent details",
            Event::Miam => "MIAM",
            Event::AllegationsOfHarm => "Allegations of harm",
            Event::OtherPeopleInTheCase => "Other people in the case",
            Event::OtherProceedings => "Other proceedings",
            Event::AttendingTheHearing => "Attending the hearing",
            Event::InternationalElement => "International element",
            Event::LitigationCapacity => "Litigation capacity",
            Event::WelshLanguageRequirements => "Welsh language requirements",
            Event::Fl401TypeOfApplication => "Type of application",
            Event::WithoutNoticeOrder => "Without notice order",
            Event::ApplicantFamilyDetails => "Applicant's family",
            Event::RelationshipToRespondent => "Relationship to respondent",
            Event::RespondentBehaviour => "Respondent's behaviour",
            Event::Home => "The home",
        }
    }
}

/// Sections of the respondent response wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RespondentEvent {
    #[serde(rename = "respondentConsent")]
    Consent,
    #[serde(rename = "respondentKeepDetailsPrivate")]
    KeepDetailsPrivate,
    #[serde(rename = "respondentConfirmContactDetails")]
    ConfirmContactDetails,
    #[serde(rename = "respondentAttendingTheCourt")]
    AttendingTheCourt,
    #[serde(rename = "respondentMiam")]
    Miam,
    #[serde(rename = "respondentCurrentOrPreviousProceedings")]
    CurrentOrPreviousProceedings,
    #[serde(rename = "respondentAllegationsOfHarm")]
    AllegationsOfHarm,
    #[serde(rename = "respondentInternationalElement")]
    InternationalElement,
    #[serde(rename = "respondentAbilityToParticipate")]
    AbilityToParticipate,
    #[serde(rename = "respondentViewDraftResponse")]
    ViewDraftResponse,
    #[serde(rename = "respondentSubmitResponse")]
    SubmitResponse,
}

impl RespondentEvent {
    pub const ALL: [RespondentEvent; 11] = [
        RespondentEvent::Consent,
        RespondentEvent::KeepDetailsPrivate,
        RespondentEvent::ConfirmContactDetails,
        RespondentEvent::AttendingTheCourt,
        RespondentEvent::Miam,
        RespondentEvent::CurrentOrPreviousProceedings,
        RespondentEvent::AllegationsOfHarm,
        RespondentEvent::InternationalElement,
        RespondentEvent::AbilityToParticipate,
        RespondentEvent::ViewDraftResponse,
        RespondentEvent::SubmitResponse,
    ];
}

impl EventKind for RespondentEvent {
    fn id(&self) -> &'static str {
        match self {
            RespondentEvent::Consent => "respondentConsent",
            RespondentEvent::KeepDetailsPrivate => "respondentKeepDetailsPrivate",
            RespondentEvent::ConfirmContactDetails => "respondentConfirmContactDetails",
            RespondentEvent::AttendingTheCourt => "respondentAttendingTheCourt",
            RespondentEvent::Miam => "respondentMiam",
            RespondentEvent::CurrentOrPreviousProceedings => {
                "respondentCurrentOrPreviousProceedings"
            }
            RespondentEvent::AllegationsOfHarm => "respondentAllegationsOfHarm",
            RespondentEvent::InternationalElement => "respondentInternationalElement",
            RespondentEvent::AbilityToParticipate => "respondentAbilityToParticipate",
            RespondentEvent::ViewDraftResponse => "respondentViewDraftResponse",
            RespondentEvent::SubmitResponse => "respondentSubmitResponse",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RespondentEvent::Consent => "Consent to the application",
            RespondentEvent::KeepDetailsPrivate => "Keep your details private",
            RespondentEvent::ConfirmContactDetails => "Confirm or edit your contact details",
            RespondentEvent::AttendingTheCourt => "Attending the court",
            RespondentEvent::Miam => "MIAM",
            RespondentEvent::CurrentOrPreviousProceedings => "Current or past proceedings",
            RespondentEvent::AllegationsOfHarm => "Allegations of harm",
            RespondentEvent::InternationalElement => "International element",
            RespondentEvent::AbilityToParticipate => "Ability to participate",
            RespondentEvent::ViewDraftResponse => "View a draft of your response",
            RespondentEvent::SubmitResponse => "Submit",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Display for RespondentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_ids_match_event_ids() {
        for event in Event::ALL {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.id()));
        }
        for event in RespondentEvent::ALL {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.id()));
        }
    }

    #[test]
    fn test_unknown_event_id_rejected() {
        let result: Result<Event, _> = serde_json::from_str("\"submitAndPay\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_uses_id() {
        assert_eq!(Event::TypeOfApplication.to_string(), "selectApplicationType");
        assert_eq!(RespondentEvent::Miam.to_string(), "respondentMiam");
    }
}
