//! Active party selection for the respondent response wizard.
//!
//! Exactly one respondent may carry `response.activeRespondent = Yes`.
//! Zero or several flagged respondents is a precondition failure of the
//! party-scoped pass, reported as a [`SelectionError`] and never resolved
//! by picking one.

use thiserror::Error;

use crate::case::{CaseRecord, Element, PartyRecord, Response};

/// Why no single active party could be selected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No respondent is flagged as active on case {case_id}")]
    NoActiveParty { case_id: u64 },

    #[error("{count} respondents are flagged as active on case {case_id}")]
    MultipleActiveParties { case_id: u64, count: usize },
}

/// The respondent currently being responded for.
#[derive(Debug, Clone, Copy)]
pub struct ActiveParty<'a> {
    /// Element id of the party in the respondent collection, if it has one
    pub id: Option<&'a str>,

    /// Position in the respondent collection
    pub index: usize,

    pub party: &'a PartyRecord,
}

impl<'a> ActiveParty<'a> {
    /// The party's response sub-record, if it has started responding.
    pub fn response(&self) -> Option<&'a Response> {
        self.party.response.as_ref()
    }
}

/// Selects the single active respondent of a case.
pub struct ActivePartySelector;

impl ActivePartySelector {
    pub fn new() -> Self {
        Self
    }

    /// Select the active respondent of `case`.
    pub fn select<'a>(&self, case: &'a CaseRecord) -> Result<ActiveParty<'a>, SelectionError> {
        self.select_from(case.id, case.respondents())
    }

    /// Select the single active party out of `parties`.
    pub fn select_from<'a>(
        &self,
        case_id: u64,
        parties: &'a [Element<PartyRecord>],
    ) -> Result<ActiveParty<'a>, SelectionError> {
        let mut active = parties
            .iter()
            .enumerate()
            .filter(|(_, element)| element.value.is_active_respondent());

        let (index, element) = active
            .next()
            .ok_or(SelectionError::NoActiveParty { case_id })?;

        let others = active.count();
        if others > 0 {
            tracing::warn!(case_id, count = others + 1, "multiple active respondents");
            return Err(SelectionError::MultipleActiveParties {
                case_id,
                count: others + 1,
            });
        }

        Ok(ActiveParty {
            id: element.id.as_deref(),
            index,
            party: &element.value,
        })
    }
}

impl Default for ActivePartySelector {
    fn default() -> Self {
        Self::new()
    }
}
