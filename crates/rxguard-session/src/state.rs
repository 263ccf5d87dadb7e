use serde::{Deserialize, Serialize};
use ts_rs::TS;

use rxguard_core::models::{Drug, Interaction};

/// One session's selection and its derived results.
///
/// Owned by exactly one UI session, mutated only through
/// [`reduce`](crate::command::reduce), never persisted. The selection
/// keeps insertion order and holds no duplicate drug ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectionState {
    pub selected_drugs: Vec<Drug>,
    pub interactions: Vec<Interaction>,
    /// Loading-indicator flag for the surrounding UI. Cosmetic only;
    /// derivation itself is synchronous and never suspends.
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Read-only summary of where a session stands, for status chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum SessionStatus {
    /// Fewer than two drugs selected; nothing to check yet.
    AwaitingSelection,
    /// The loading flag is set.
    Analyzing,
    /// At least one known interaction in the current selection.
    InteractionsFound,
    /// Two or more drugs selected, no known interactions. Distinct from
    /// "not yet checked": the selection has been checked and came back
    /// clean.
    NoInteractions,
}

impl SelectionState {
    pub fn status(&self) -> SessionStatus {
        if self.selected_drugs.len() < 2 {
            SessionStatus::AwaitingSelection
        } else if self.is_loading {
            SessionStatus::Analyzing
        } else if self.interactions.is_empty() {
            SessionStatus::NoInteractions
        } else {
            SessionStatus::InteractionsFound
        }
    }
}
