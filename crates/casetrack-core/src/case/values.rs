//! Value types shared across case record sections.

use serde::{Deserialize, Serialize};

/// A Yes/No answer as stored by the case store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesOrNo {
    Yes,
    No,
}

impl YesOrNo {
    pub fn is_yes(self) -> bool {
        matches!(self, YesOrNo::Yes)
    }
}

/// A Yes/No/Don't know answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YesNoDontKnow {
    Yes,
    No,
    DontKnow,
}

impl YesNoDontKnow {
    pub fn is_yes(self) -> bool {
        matches!(self, YesNoDontKnow::Yes)
    }
}

/// Helpers for discriminator checks on optional answers.
///
/// An absent answer never triggers a dependent field.
pub trait Answer {
    fn answered_yes(&self) -> bool;
    fn answered_no(&self) -> bool;
}

impl Answer for Option<YesOrNo> {
    fn answered_yes(&self) -> bool {
        matches!(self, Some(YesOrNo::Yes))
    }

    fn answered_no(&self) -> bool {
        matches!(self, Some(YesOrNo::No))
    }
}

impl Answer for Option<YesNoDontKnow> {
    fn answered_yes(&self) -> bool {
        matches!(self, Some(YesNoDontKnow::Yes))
    }

    fn answered_no(&self) -> bool {
        matches!(self, Some(YesNoDontKnow::No))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

/// Collection element wrapper used by the case store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element<T> {
    #[serde(default)]
    pub id: Option<String>,

    pub value: T,
}

impl<T> Element<T> {
    pub fn new(value: T) -> Self {
        Self { id: None, value }
    }

    pub fn with_id(id: impl Into<String>, value: T) -> Self {
        Self {
            id: Some(id.into()),
            value,
        }
    }
}

/// Reference to an uploaded document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Document {
    #[serde(default)]
    pub document_url: Option<String>,

    #[serde(default)]
    pub document_binary_url: Option<String>,

    #[serde(default)]
    pub document_filename: Option<String>,
}

impl Document {
    pub fn at(url: impl Into<String>) -> Self {
        Self {
            document_url: Some(url.into()),
            ..Default::default()
        }
    }
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default)]
    pub address_line1: Option<String>,

    #[serde(default)]
    pub address_line2: Option<String>,

    #[serde(default)]
    pub post_town: Option<String>,

    #[serde(default)]
    pub county: Option<String>,

    #[serde(default)]
    pub post_code: Option<String>,
}

impl Address {
    pub fn line(first_line: impl Into<String>) -> Self {
        Self {
            address_line1: Some(first_line.into()),
            ..Default::default()
        }
    }
}
