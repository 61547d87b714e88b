//! Field presence and conditional requirement lists.
//!
//! A checker resolves its section into an ordered list of named
//! requirements. Dependent fields are only added when their discriminator
//! holds the triggering value, so the list a checker produces is already
//! "expanded": a section is finished exactly when every entry is present.

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::case::{
    Address, ApplicantRelationship, ApplicationLanguage, ConfidentialField, Document,
    Fl401OrderType, Gender, MiamExemption, OrderType, PermissionRequired, ProceedingStatus,
    RelationshipToChild, YesNoDontKnow, YesOrNo,
};

/// Whether a stored value counts as filled in.
pub trait Filled {
    fn is_filled(&self) -> bool;
}

impl Filled for String {
    /// The empty string is the store's "cleared" sentinel.
    fn is_filled(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Filled for Vec<T> {
    fn is_filled(&self) -> bool {
        !self.is_empty()
    }
}

impl Filled for Document {
    fn is_filled(&self) -> bool {
        self.document_url.is_present()
    }
}

impl Filled for Address {
    fn is_filled(&self) -> bool {
        self.address_line1.is_present()
    }
}

macro_rules! always_filled {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Filled for $ty {
                fn is_filled(&self) -> bool {
                    true
                }
            }
        )*
    };
}

always_filled!(
    YesOrNo,
    YesNoDontKnow,
    Gender,
    NaiveDate,
    OrderType,
    PermissionRequired,
    RelationshipToChild,
    MiamExemption,
    ProceedingStatus,
    ApplicationLanguage,
    ApplicantRelationship,
    Fl401OrderType,
    ConfidentialField,
);

/// Presence of an optional field.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl<T: Filled> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Filled::is_filled)
    }
}

/// Union test used by `is_started`: any listed field is present.
pub fn any_present(fields: &[&dyn Presence]) -> bool {
    fields.iter().any(|field| field.is_present())
}

/// Elements of an optional collection, empty when the collection is absent.
pub fn items<T>(collection: &Option<Vec<T>>) -> &[T] {
    collection.as_deref().unwrap_or(&[])
}

/// Ordered list of resolved requirements for one section.
#[derive(Debug, Default)]
pub struct Requirements {
    entries: Vec<(Cow<'static, str>, bool)>,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a field to be present.
    pub fn field(&mut self, name: &'static str, value: &dyn Presence) -> &mut Self {
        self.entries.push((Cow::Borrowed(name), value.is_present()));
        self
    }

    /// Add requirements only when `condition` holds.
    pub fn when(&mut self, condition: bool, build: impl FnOnce(&mut Self)) -> &mut Self {
        if condition {
            build(self);
        }
        self
    }

    /// A requirement that can never be met in the current state of the
    /// section, e.g. an answer that rules the application out.
    pub fn unmet(&mut self, name: &'static str) -> &mut Self {
        self.entries.push((Cow::Borrowed(name), false));
        self
    }

    /// Require a nested record to be present, then resolve its fields.
    pub fn nested<T>(
        &mut self,
        name: &'static str,
        value: Option<&T>,
        build: impl FnOnce(&mut Self, &T),
    ) -> &mut Self {
        match value {
            Some(inner) => build(self, inner),
            None => {
                self.unmet(name);
            }
        }
        self
    }

    /// Require a collection to be non-empty and resolve each element.
    ///
    /// Element requirements are named `collection[index].field`.
    pub fn each<T>(
        &mut self,
        collection: &'static str,
        items: &[T],
        mut build: impl FnMut(&mut Self, &T),
    ) -> &mut Self {
        if items.is_empty() {
            return self.unmet(collection);
        }
        for (index, item) in items.iter().enumerate() {
            let mut element = Requirements::new();
            build(&mut element, item);
            self.entries
                .extend(element.entries.into_iter().map(|(name, present)| {
                    (Cow::Owned(format!("{collection}[{index}].{name}")), present)
                }));
        }
        self
    }

    /// All resolved requirements are present.
    pub fn is_satisfied(&self) -> bool {
        self.entries.iter().all(|(_, present)| *present)
    }

    /// Names of the requirements that are not present, in order.
    pub fn missing(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| name.as_ref())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_absent() {
        assert!(!Some(String::new()).is_present());
        assert!(Some("x".to_string()).is_present());
        let none: Option<String> = None;
        assert!(!none.is_present());
    }

    #[test]
    fn test_empty_list_is_absent() {
        let empty: Option<Vec<String>> = Some(vec![]);
        assert!(!empty.is_present());
    }

    #[test]
    fn test_document_needs_url() {
        assert!(!Some(Document::default()).is_present());
        assert!(Some(Document::at("http://dm-store/documents/1")).is_present());
    }

    #[test]
    fn test_conditional_field_only_when_triggered() {
        let discriminator = Some(YesOrNo::No);
        let dependent: Option<String> = None;

        let mut req = Requirements::new();
        req.field("discriminator", &discriminator)
            .when(discriminator == Some(YesOrNo::Yes), |r| {
                r.field("dependent", &dependent);
            });
        assert!(req.is_satisfied());
        assert_eq!(req.len(), 1);

        let discriminator = Some(YesOrNo::Yes);
        let mut req = Requirements::new();
        req.field("discriminator", &discriminator)
            .when(discriminator == Some(YesOrNo::Yes), |r| {
                r.field("dependent", &dependent);
            });
        assert!(!req.is_satisfied());
        assert_eq!(req.missing(), vec!["dependent"]);
    }

    #[test]
    fn test_each_names_elements_and_rejects_empty() {
        let items: Vec<Option<String>> = vec![Some("a".into()), None];
        let mut req = Requirements::new();
        req.each("items", &items, |r, item| {
            r.field("name", item);
        });
        assert_eq!(req.missing(), vec!["items[1].name"]);

        let none: Vec<Option<String>> = vec![];
        let mut req = Requirements::new();
        req.each("items", &none, |r, item| {
            r.field("name", item);
        });
        assert_eq!(req.missing(), vec!["items"]);
    }

    #[test]
    fn test_nested_missing_record_is_unmet() {
        let mut req = Requirements::new();
        req.nested::<Document>("upload", None, |r, doc| {
            r.field("url", &doc.document_url);
        });
        assert_eq!(req.missing(), vec!["upload"]);
    }

    #[test]
    fn test_any_present() {
        let a: Option<String> = None;
        let b = Some(YesOrNo::No);
        assert!(any_present(&[&a, &b]));
        assert!(!any_present(&[&a]));
    }
}
