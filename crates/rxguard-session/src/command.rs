use serde::{Deserialize, Serialize};
use ts_rs::TS;

use rxguard_core::models::{Drug, Interaction};
use rxguard_engine::derive_interactions;

use crate::state::SelectionState;

/// The operations a session accepts.
///
/// Tagged so the serialized form matches the frontend's action shape,
/// e.g. `{"type": "ADD_DRUG", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Command {
    AddDrug(Drug),
    RemoveDrug(String),
    ClearDrugs,
    SetLoading(bool),
    SetError(Option<String>),
    /// Replace the derived set directly. Used when an external checker
    /// substitutes for the static table; the selection-changing commands
    /// never need it.
    UpdateInteractions(Vec<Interaction>),
}

/// Apply one command to a state snapshot and return the next state.
///
/// Pure: the only inputs are the interaction table, the previous state,
/// and the command. Every command that changes the selection re-derives
/// the full interaction set before returning, so no caller can observe
/// a selection with stale interactions.
pub fn reduce(table: &[Interaction], state: SelectionState, command: Command) -> SelectionState {
    match command {
        Command::AddDrug(drug) => {
            // First add wins; a duplicate is a silent no-op.
            if state.selected_drugs.iter().any(|d| d.id == drug.id) {
                return state;
            }
            let mut next = state;
            next.selected_drugs.push(drug);
            next.interactions = derive_interactions(table, &next.selected_drugs);
            next.error = None;
            next
        }
        Command::RemoveDrug(drug_id) => {
            // Removing an id that is not selected leaves the state as-is
            // (the re-derivation is then a no-op too).
            let mut next = state;
            next.selected_drugs.retain(|d| d.id != drug_id);
            next.interactions = derive_interactions(table, &next.selected_drugs);
            next
        }
        Command::ClearDrugs => SelectionState {
            selected_drugs: Vec::new(),
            interactions: Vec::new(),
            error: None,
            ..state
        },
        Command::SetLoading(is_loading) => SelectionState { is_loading, ..state },
        Command::SetError(error) => SelectionState {
            error,
            is_loading: false,
            ..state
        },
        Command::UpdateInteractions(interactions) => SelectionState {
            interactions,
            ..state
        },
    }
}
