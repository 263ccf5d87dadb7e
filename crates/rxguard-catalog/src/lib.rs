//! rxguard-catalog
//!
//! The static medication reference data and the read-only [`Catalog`]
//! built from it: drug search, therapeutic alternatives, and side-effect
//! lookup. Pure data, no I/O — a catalog is loaded once at startup and
//! shared read-only across any number of sessions.

pub mod dataset;
pub mod error;

use rxguard_core::error::CoreError;
use rxguard_core::models::{Drug, Interaction, SideEffect};

use crate::error::CatalogError;

/// Minimum query length before [`Catalog::search`] returns anything.
/// Shorter input produces too much noise in a type-ahead field; this is
/// a UX threshold, not a data constraint.
const MIN_QUERY_LEN: usize = 2;

/// Immutable drug reference data: drugs, the pairwise interaction table,
/// and per-drug side effects.
#[derive(Debug, Clone)]
pub struct Catalog {
    drugs: Vec<Drug>,
    interactions: Vec<Interaction>,
    side_effects: Vec<SideEffect>,
}

impl Catalog {
    /// Build a catalog from fully-populated record sets.
    ///
    /// Load is all-or-nothing: every cross-reference and record
    /// invariant is checked up front, and a single bad record rejects
    /// the whole catalog. In particular the interaction table may hold
    /// at most one record per unordered drug pair.
    pub fn new(
        drugs: Vec<Drug>,
        interactions: Vec<Interaction>,
        side_effects: Vec<SideEffect>,
    ) -> Result<Self, CatalogError> {
        for (i, drug) in drugs.iter().enumerate() {
            if drugs[..i].iter().any(|d| d.id == drug.id) {
                return Err(CatalogError::DuplicateDrugId(drug.id.clone()));
            }
        }

        let known = |id: &str| drugs.iter().any(|d| d.id == id);

        for interaction in &interactions {
            interaction.validate()?;
            for endpoint in [&interaction.drug_a, &interaction.drug_b] {
                if !known(&endpoint.id) {
                    return Err(CatalogError::UnknownDrug {
                        record: interaction.id.clone(),
                        drug_id: endpoint.id.clone(),
                    });
                }
            }
        }

        for (i, interaction) in interactions.iter().enumerate() {
            if interactions[..i]
                .iter()
                .any(|other| other.matches_pair(&interaction.drug_a, &interaction.drug_b))
            {
                return Err(CatalogError::DuplicateInteraction {
                    drug_a: interaction.drug_a.id.clone(),
                    drug_b: interaction.drug_b.id.clone(),
                });
            }
        }

        for effect in &side_effects {
            if !known(&effect.drug_id) {
                return Err(CatalogError::UnknownDrug {
                    record: effect.id.clone(),
                    drug_id: effect.drug_id.clone(),
                });
            }
        }

        tracing::info!(
            drugs = drugs.len(),
            interactions = interactions.len(),
            side_effects = side_effects.len(),
            "catalog loaded"
        );

        Ok(Self {
            drugs,
            interactions,
            side_effects,
        })
    }

    /// Build a catalog from JSON arrays of records, e.g. a payload from
    /// a catalog service substituting for the built-in dataset. The same
    /// all-or-nothing validation as [`Catalog::new`] applies.
    pub fn from_json(
        drugs: &str,
        interactions: &str,
        side_effects: &str,
    ) -> Result<Self, CatalogError> {
        let drugs: Vec<Drug> = serde_json::from_str(drugs).map_err(CoreError::from)?;
        let interactions: Vec<Interaction> =
            serde_json::from_str(interactions).map_err(CoreError::from)?;
        let side_effects: Vec<SideEffect> =
            serde_json::from_str(side_effects).map_err(CoreError::from)?;
        Self::new(drugs, interactions, side_effects)
    }

    /// The built-in reference dataset.
    ///
    /// The records are curated in the [`dataset`] module of this crate;
    /// a test asserts they pass [`Catalog::new`] validation, so this
    /// constructor skips it.
    pub fn reference() -> Self {
        Self {
            drugs: dataset::drugs().to_vec(),
            interactions: dataset::interactions().to_vec(),
            side_effects: dataset::side_effects().to_vec(),
        }
    }

    /// All drugs, in catalog order.
    pub fn drugs(&self) -> &[Drug] {
        &self.drugs
    }

    /// The pairwise interaction table.
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// All documented side effects.
    pub fn side_effects(&self) -> &[SideEffect] {
        &self.side_effects
    }

    /// Look up a drug by id.
    pub fn drug(&self, id: &str) -> Option<&Drug> {
        self.drugs.iter().find(|d| d.id == id)
    }

    /// Case-insensitive substring search across name, generic name, and
    /// brand names.
    ///
    /// Queries shorter than two characters return nothing. Results keep
    /// catalog order; there is no ranking.
    pub fn search(&self, query: &str) -> Vec<&Drug> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.drugs
            .iter()
            .filter(|drug| {
                drug.name.to_lowercase().contains(&needle)
                    || drug.generic_name.to_lowercase().contains(&needle)
                    || drug
                        .brand_names
                        .iter()
                        .any(|brand| brand.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Every other catalog drug sharing at least one therapeutic class
    /// with `drug`. Catalog order, self excluded, empty when nothing
    /// overlaps.
    pub fn alternatives(&self, drug: &Drug) -> Vec<&Drug> {
        self.drugs
            .iter()
            .filter(|candidate| candidate.id != drug.id && candidate.shares_class_with(drug))
            .collect()
    }

    /// Documented side effects of one drug, catalog order.
    pub fn side_effects_for(&self, drug_id: &str) -> Vec<&SideEffect> {
        self.side_effects
            .iter()
            .filter(|effect| effect.drug_id == drug_id)
            .collect()
    }
}
