use serde::{Deserialize, Serialize};
use ts_rs::TS;

use rxguard_catalog::Catalog;
use rxguard_core::models::{Drug, Interaction, Severity, SideEffect};

use crate::derive::derive_interactions;

/// Replacement candidates for one selected drug, by shared therapeutic
/// class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlternativeSet {
    pub drug_id: String,
    pub drug_name: String,
    pub alternatives: Vec<Drug>,
}

/// Everything the presentation layer renders for one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InteractionReport {
    /// Derived interactions, in pair-enumeration order.
    pub interactions: Vec<Interaction>,
    /// Alternatives per selected drug; drugs with no class overlap are
    /// omitted.
    pub alternatives: Vec<AlternativeSet>,
    /// Side effects shared by name across two or more selected drugs.
    pub overlapping_side_effects: Vec<SideEffect>,
    /// Highest severity across the derived interactions, if any.
    pub highest_severity: Option<Severity>,
    /// Lowest confidence across the derived interactions; 1.0 when none.
    pub confidence: f64,
}

/// Side effects that appear, by name, under more than one selected drug.
pub fn overlapping_side_effects(catalog: &Catalog, selection: &[Drug]) -> Vec<SideEffect> {
    let selected = |drug_id: &str| selection.iter().any(|d| d.id == drug_id);

    catalog
        .side_effects()
        .iter()
        .filter(|effect| {
            selected(&effect.drug_id)
                && catalog.side_effects().iter().any(|other| {
                    other.id != effect.id
                        && other.drug_id != effect.drug_id
                        && selected(&other.drug_id)
                        && other.name.eq_ignore_ascii_case(&effect.name)
                })
        })
        .cloned()
        .collect()
}

/// Run a full analysis pass over `selection` against `catalog`.
pub fn build_report(catalog: &Catalog, selection: &[Drug]) -> InteractionReport {
    let interactions = derive_interactions(catalog.interactions(), selection);

    let alternatives = selection
        .iter()
        .filter_map(|drug| {
            let candidates: Vec<Drug> = catalog
                .alternatives(drug)
                .into_iter()
                .cloned()
                .collect();
            if candidates.is_empty() {
                return None;
            }
            Some(AlternativeSet {
                drug_id: drug.id.clone(),
                drug_name: drug.name.clone(),
                alternatives: candidates,
            })
        })
        .collect();

    let highest_severity = interactions.iter().map(|i| i.severity).max();
    let confidence = interactions
        .iter()
        .map(|i| i.confidence)
        .fold(1.0_f64, f64::min);

    InteractionReport {
        alternatives,
        overlapping_side_effects: overlapping_side_effects(catalog, selection),
        interactions,
        highest_severity,
        confidence,
    }
}
