//! Checker registries.
//!
//! A registry maps each event to the one checker that evaluates it. It is
//! built once, then only read. The standard registries hold every checker
//! this crate ships and are shared by the whole process.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use thiserror::Error;

use crate::checkers::case::{
    AllegationsOfHarmChecker, ApplicantDetailsChecker, ApplicantFamilyChecker,
    AttendingTheHearingChecker, CaseNameChecker, ChildDetailsChecker,
    Fl401TypeOfApplicationChecker, HearingUrgencyChecker, HomeChecker,
    InternationalElementChecker, LitigationCapacityChecker, MiamChecker, OtherPeopleChecker,
    OtherProceedingsChecker, RelationshipToRespondentChecker, RespondentBehaviourChecker,
    RespondentDetailsChecker, TypeOfApplicationChecker, WelshLanguageChecker,
    WithoutNoticeOrderChecker,
};
use crate::checkers::respondent::{
    AbilityToParticipateChecker, AttendingTheCourtChecker, ConfirmContactDetailsChecker,
    ConsentChecker, CurrentOrPreviousProceedingsChecker, KeepDetailsPrivateChecker,
    RespondentAllegationsOfHarmChecker, RespondentInternationalElementChecker,
    RespondentMiamChecker, SubmitResponseChecker, ViewDraftResponseChecker,
};
use crate::checkers::{EventChecker, PartyChecker};
use crate::events::{Event, EventKind, RespondentEvent};

/// Errors in wiring checkers and task list configurations together.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("No checker registered for event '{0}'")]
    UnregisteredEvent(String),

    #[error("Checker for event '{0}' registered twice")]
    DuplicateChecker(String),

    #[error("Failed to read task list configuration: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse task list YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse task list configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Task list configuration failed validation: {0}")]
    InvalidConfig(String),

    #[error("Unknown placeholder '{placeholder}' in link template '{template}'")]
    UnknownPlaceholder {
        placeholder: String,
        template: String,
    },
}

/// Immutable map from event to checker.
pub struct Registry<E: EventKind, C: ?Sized> {
    checkers: BTreeMap<E, Box<C>>,
}

/// Registry of whole-case checkers.
pub type EventRegistry = Registry<Event, dyn EventChecker>;

/// Registry of respondent response checkers.
pub type RespondentRegistry = Registry<RespondentEvent, dyn PartyChecker>;

impl<E: EventKind, C: ?Sized> Registry<E, C> {
    pub fn new() -> Self {
        Self {
            checkers: BTreeMap::new(),
        }
    }

    fn insert(&mut self, event: E, checker: Box<C>) -> Result<(), ConfigurationError> {
        if self.checkers.contains_key(&event) {
            return Err(ConfigurationError::DuplicateChecker(event.id().to_string()));
        }
        self.checkers.insert(event, checker);
        Ok(())
    }

    /// The checker registered for `event`.
    pub fn get(&self, event: E) -> Result<&C, ConfigurationError> {
        self.checkers
            .get(&event)
            .map(|checker| &**checker)
            .ok_or_else(|| ConfigurationError::UnregisteredEvent(event.id().to_string()))
    }

    pub fn contains(&self, event: E) -> bool {
        self.checkers.contains_key(&event)
    }

    /// Registered events in declaration order.
    pub fn events(&self) -> impl Iterator<Item = E> + '_ {
        self.checkers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl<E: EventKind, C: ?Sized> Default for Registry<E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventKind, C: ?Sized> fmt::Debug for Registry<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("events", &self.checkers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EventRegistry {
    /// Register a whole-case checker under the event it reports.
    pub fn register<C: EventChecker + 'static>(
        &mut self,
        checker: C,
    ) -> Result<&mut Self, ConfigurationError> {
        self.insert(checker.event(), Box::new(checker))?;
        Ok(self)
    }

    /// Every whole-case checker this crate ships.
    pub fn standard() -> Result<Self, ConfigurationError> {
        let mut registry = Self::new();
        registry
            .register(CaseNameChecker::new())?
            .register(TypeOfApplicationChecker::new())?
            .register(HearingUrgencyChecker::new())?
            .register(ApplicantDetailsChecker::new())?
            .register(ChildDetailsChecker::new())?
            .register(RespondentDetailsChecker::new())?
            .register(MiamChecker::new())?
            .register(AllegationsOfHarmChecker::new())?
            .register(OtherPeopleChecker::new())?
            .register(OtherProceedingsChecker::new())?
            .register(AttendingTheHearingChecker::new())?
            .register(InternationalElementChecker::new())?
            .register(LitigationCapacityChecker::new())?
            .register(WelshLanguageChecker::new())?
            .register(Fl401TypeOfApplicationChecker::new())?
            .register(WithoutNoticeOrderChecker::new())?
            .register(ApplicantFamilyChecker::new())?
            .register(RelationshipToRespondentChecker::new())?
            .register(RespondentBehaviourChecker::new())?
            .register(HomeChecker::new())?;
        Ok(registry)
    }
}

impl RespondentRegistry {
    /// Register a respondent checker under the event it reports.
    pub fn register<C: PartyChecker + 'static>(
        &mut self,
        checker: C,
    ) -> Result<&mut Self, ConfigurationError> {
        self.insert(checker.event(), Box::new(checker))?;
        Ok(self)
    }

    /// Every respondent checker this crate ships.
    pub fn standard() -> Result<Self, ConfigurationError> {
        let mut registry = Self::new();
        registry
            .register(ConsentChecker::new())?
            .register(KeepDetailsPrivateChecker::new())?
            .register(ConfirmContactDetailsChecker::new())?
            .register(AttendingTheCourtChecker::new())?
            .register(RespondentMiamChecker::new())?
            .register(CurrentOrPreviousProceedingsChecker::new())?
            .register(RespondentAllegationsOfHarmChecker::new())?
            .register(RespondentInternationalElementChecker::new())?
            .register(AbilityToParticipateChecker::new())?
            .register(ViewDraftResponseChecker::new())?
            .register(SubmitResponseChecker::new())?;
        Ok(registry)
    }
}

static STANDARD_EVENTS: OnceLock<Result<EventRegistry, String>> = OnceLock::new();
static STANDARD_RESPONDENT: OnceLock<Result<RespondentRegistry, String>> = OnceLock::new();

/// The process-wide standard whole-case registry.
pub fn standard_event_registry() -> Result<&'static EventRegistry, ConfigurationError> {
    STANDARD_EVENTS
        .get_or_init(|| EventRegistry::standard().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| ConfigurationError::InvalidConfig(e.clone()))
}

/// The process-wide standard respondent registry.
pub fn standard_respondent_registry() -> Result<&'static RespondentRegistry, ConfigurationError> {
    STANDARD_RESPONDENT
        .get_or_init(|| RespondentRegistry::standard().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| ConfigurationError::InvalidConfig(e.clone()))
}
