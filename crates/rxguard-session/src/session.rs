use std::sync::Arc;

use uuid::Uuid;

use rxguard_catalog::Catalog;
use rxguard_core::models::Drug;
use rxguard_engine::{InteractionReport, build_report};

use crate::command::{Command, reduce};
use crate::state::{SelectionState, SessionStatus};

/// One user's interaction-checking session: a catalog handle plus the
/// mutable selection cell.
///
/// Sessions are independent of each other; the catalog is the only
/// shared resource, and it is read-only. All operations run to
/// completion on the calling thread.
pub struct Session {
    id: Uuid,
    catalog: Arc<Catalog>,
    state: SelectionState,
}

impl Session {
    /// Start an empty session over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, "session started");
        Self {
            id,
            catalog,
            state: SelectionState::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current selection, derived interactions, and error state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.state.status()
    }

    /// Run one command through the reducer. The state is fully
    /// consistent again before this returns.
    pub fn dispatch(&mut self, command: Command) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(self.catalog.interactions(), state, command);
    }

    /// Append a drug to the selection and re-derive interactions.
    /// Adding an already-selected drug is a silent no-op.
    pub fn add_drug(&mut self, drug: Drug) {
        tracing::debug!(session = %self.id, drug = %drug.id, "add drug");
        self.dispatch(Command::AddDrug(drug));
        tracing::debug!(
            session = %self.id,
            selected = self.state.selected_drugs.len(),
            interactions = self.state.interactions.len(),
            "selection updated"
        );
    }

    /// Remove a drug by id and re-derive interactions. Unknown ids are
    /// a silent no-op.
    pub fn remove_drug(&mut self, drug_id: &str) {
        tracing::debug!(session = %self.id, drug = drug_id, "remove drug");
        self.dispatch(Command::RemoveDrug(drug_id.to_string()));
    }

    /// Empty the selection and the derived set.
    pub fn clear_drugs(&mut self) {
        tracing::debug!(session = %self.id, "clear selection");
        self.dispatch(Command::ClearDrugs);
    }

    /// Full analysis pass (interactions, alternatives, side-effect
    /// overlap) over the current selection.
    pub fn report(&self) -> InteractionReport {
        build_report(&self.catalog, &self.state.selected_drugs)
    }
}
