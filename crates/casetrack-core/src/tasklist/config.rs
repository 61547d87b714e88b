//! Task list configuration.
//!
//! A configuration names the ordered sections of a task list, the events
//! listed under each, the link template used for every task and the
//! optional submit entry. Configurations are YAML, validated against the
//! embedded JSON schema and then checked for duplicate events and unknown
//! link placeholders.
//!
//! ```yaml
//! name: C100 application
//! link_template: "/cases/case-details/${CASE_ID}/trigger/${EVENT_ID}/${EVENT_ID}1"
//! sections:
//!   - title: Add case details
//!     events: [caseName, selectApplicationType]
//! ```

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use super::schema::validate_tasklist_schema;
use crate::case::CaseType;
use crate::events::{Event, EventKind, RespondentEvent};
use crate::registry::ConfigurationError;

const C100_YAML: &str = include_str!("../../../../config/c100.yaml");
const FL401_YAML: &str = include_str!("../../../../config/fl401.yaml");
const RESPONDENT_YAML: &str = include_str!("../../../../config/respondent.yaml");

const CASE_ID: &str = "CASE_ID";
const EVENT_ID: &str = "EVENT_ID";

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\$\{([A-Za-z0-9_]+)\}").unwrap();
}

fn default_error_heading() -> String {
    "Why can't I submit my application?".to_string()
}

/// Ordered task list configuration for one kind of event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "E: EventKind"))]
pub struct TaskListConfig<E: EventKind> {
    pub name: String,

    /// Link to an event, with `${CASE_ID}` and `${EVENT_ID}` placeholders
    pub link_template: String,

    #[serde(default = "default_error_heading")]
    pub error_heading: String,

    #[serde(default)]
    pub submit: Option<SubmitEntry>,

    pub sections: Vec<Section<E>>,
}

/// A titled group of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "E: EventKind"))]
pub struct Section<E: EventKind> {
    pub title: String,
    pub events: Vec<E>,
}

/// The entry that links to the submission event once the gate opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitEntry {
    pub title: String,
    pub label: String,

    /// Link with a `${CASE_ID}` placeholder
    pub link: String,
}

impl<E: EventKind> TaskListConfig<E> {
    /// Parse and validate a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigurationError> {
        let value: serde_json::Value = serde_yaml::from_str(yaml)?;
        validate_tasklist_schema(&value)?;
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        check_placeholders(&self.link_template, &[CASE_ID, EVENT_ID])?;
        if let Some(submit) = &self.submit {
            check_placeholders(&submit.link, &[CASE_ID])?;
        }

        let mut seen = BTreeSet::new();
        for event in self.events() {
            if !seen.insert(event) {
                return Err(ConfigurationError::InvalidConfig(format!(
                    "event '{}' listed more than once in '{}'",
                    event.id(),
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// Every configured event in display order.
    pub fn events(&self) -> impl Iterator<Item = E> + '_ {
        self.sections
            .iter()
            .flat_map(|section| section.events.iter().copied())
    }

    /// Every configured event paired with its section title, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, E)> + '_ {
        self.sections.iter().flat_map(|section| {
            section
                .events
                .iter()
                .map(move |event| (section.title.as_str(), *event))
        })
    }

    /// Link to `event_id` on case `case_id`.
    pub fn link_for(&self, case_id: u64, event_id: &str) -> String {
        expand(&self.link_template, case_id, Some(event_id))
    }

    /// Link of the submit entry, if one is configured.
    pub fn submit_link(&self, case_id: u64) -> Option<String> {
        self.submit
            .as_ref()
            .map(|submit| expand(&submit.link, case_id, None))
    }
}

impl TaskListConfig<Event> {
    /// The built-in C100 task list.
    pub fn c100() -> Result<Self, ConfigurationError> {
        Self::from_yaml(C100_YAML)
    }

    /// The built-in FL401 task list.
    pub fn fl401() -> Result<Self, ConfigurationError> {
        Self::from_yaml(FL401_YAML)
    }

    /// The built-in task list for a kind of application.
    pub fn for_case_type(case_type: CaseType) -> Result<Self, ConfigurationError> {
        match case_type {
            CaseType::C100 => Self::c100(),
            CaseType::FL401 => Self::fl401(),
        }
    }
}

impl TaskListConfig<RespondentEvent> {
    /// The built-in respondent response task list.
    pub fn respondent() -> Result<Self, ConfigurationError> {
        Self::from_yaml(RESPONDENT_YAML)
    }
}

fn check_placeholders(template: &str, known: &[&str]) -> Result<(), ConfigurationError> {
    for captures in PLACEHOLDER.captures_iter(template) {
        let name = &captures[1];
        if !known.contains(&name) {
            return Err(ConfigurationError::UnknownPlaceholder {
                placeholder: name.to_string(),
                template: template.to_string(),
            });
        }
    }
    Ok(())
}

/// Expand the placeholders of a template checked by `check_placeholders`.
fn expand(template: &str, case_id: u64, event_id: Option<&str>) -> String {
    PLACEHOLDER
        .replace_all(template, |captures: &Captures<'_>| match (&captures[1], event_id) {
            (CASE_ID, _) => case_id.to_string(),
            (EVENT_ID, Some(event_id)) => event_id.to_string(),
            _ => captures[0].to_string(),
        })
        .into_owned()
}
