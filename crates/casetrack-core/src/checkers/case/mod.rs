//! Checkers for the sections of a C100 or FL401 application.

mod allegations_of_harm;
mod applicant_details;
mod applicant_family;
mod attending_the_hearing;
mod case_name;
mod child_details;
mod fl401_type_of_application;
mod hearing_urgency;
mod home;
mod international_element;
mod litigation_capacity;
mod miam;
mod other_people;
mod other_proceedings;
mod relationship_to_respondent;
mod respondent_behaviour;
mod respondent_details;
mod type_of_application;
mod welsh_language;
mod without_notice_order;

pub use allegations_of_harm::AllegationsOfHarmChecker;
pub use applicant_details::ApplicantDetailsChecker;
pub use applicant_family::ApplicantFamilyChecker;
pub use attending_the_hearing::AttendingTheHearingChecker;
pub use case_name::CaseNameChecker;
pub use child_details::ChildDetailsChecker;
pub use fl401_type_of_application::Fl401TypeOfApplicationChecker;
pub use hearing_urgency::HearingUrgencyChecker;
pub use home::HomeChecker;
pub use international_element::InternationalElementChecker;
pub use litigation_capacity::LitigationCapacityChecker;
pub use miam::MiamChecker;
pub use other_people::OtherPeopleChecker;
pub use other_proceedings::OtherProceedingsChecker;
pub use relationship_to_respondent::RelationshipToRespondentChecker;
pub use respondent_behaviour::RespondentBehaviourChecker;
pub use respondent_details::RespondentDetailsChecker;
pub use type_of_application::TypeOfApplicationChecker;
pub use welsh_language::WelshLanguageChecker;
pub use without_notice_order::WithoutNoticeOrderChecker;
