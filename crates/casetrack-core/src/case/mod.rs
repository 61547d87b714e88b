//! Case record model.
//!
//! A case record is the read-only snapshot the engine evaluates. It is
//! parsed from the case store's camelCase JSON; every section field is
//! optional because the wizard fills sections in any order.

mod party;
mod record;
mod values;

pub use party::{
    AbilityToParticipate, AttendToCourt, CitizenDetails, ConfidentialField, Consent, Contact,
    CurrentOrPreviousProceedings, InternationalElements, KeepDetailsPrivate, PartyRecord,
    Proceeding, ProceedingStatus, RespondentAllegationsOfHarm, RespondentMiam, Response,
};
pub use record::{
    ApplicantChild, ApplicantFamilyDetails, ApplicantRelationship, ApplicationLanguage,
    BailDetails, Behaviour, CaseError, CaseRecord, CaseType, Child, DraftResponse, Fl401OrderType,
    Fl401Orders, Home, LinkToChildArrangements, MiamExemption, OrderType, PermissionRequired,
    ProtectiveOrder, RelationshipDates, RelationshipOptions, RelationshipToChild,
    RespondentBehaviour, RespondentRelationship, WithoutNoticeOrder, WithoutNoticeReasons,
};
pub use values::{Address, Answer, Document, Element, Gender, YesNoDontKnow, YesOrNo};
