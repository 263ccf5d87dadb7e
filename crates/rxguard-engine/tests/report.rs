use rxguard_catalog::{Catalog, dataset::drug_id};
use rxguard_core::models::{Drug, Frequency, Severity, SideEffect, Timeline};
use rxguard_engine::{build_report, overlapping_side_effects};

fn reference_drug(catalog: &Catalog, id: &str) -> Drug {
    catalog.drug(id).cloned().expect("reference drug")
}

#[test]
fn empty_selection_produces_an_empty_report() {
    let catalog = Catalog::reference();

    let report = build_report(&catalog, &[]);
    assert!(report.interactions.is_empty());
    assert!(report.alternatives.is_empty());
    assert!(report.overlapping_side_effects.is_empty());
    assert_eq!(report.highest_severity, None);
    assert_eq!(report.confidence, 1.0);
}

#[test]
fn report_aggregates_severity_and_confidence() {
    let catalog = Catalog::reference();
    let selection = [
        reference_drug(&catalog, drug_id::WARFARIN),
        reference_drug(&catalog, drug_id::ASPIRIN),
        reference_drug(&catalog, drug_id::IBUPROFEN),
    ];

    let report = build_report(&catalog, &selection);
    assert_eq!(report.interactions.len(), 2);
    assert_eq!(report.highest_severity, Some(Severity::Major));
    // Lowest confidence across warfarin-aspirin (0.95) and
    // aspirin-ibuprofen (0.88).
    assert_eq!(report.confidence, 0.88);
}

#[test]
fn alternatives_cover_only_drugs_with_class_overlap() {
    let catalog = Catalog::reference();
    let selection = [
        reference_drug(&catalog, drug_id::WARFARIN),
        reference_drug(&catalog, drug_id::ASPIRIN),
    ];

    let report = build_report(&catalog, &selection);

    // Warfarin shares no class with any other reference drug, so only
    // the aspirin set appears.
    assert_eq!(report.alternatives.len(), 1);
    let set = &report.alternatives[0];
    assert_eq!(set.drug_id, drug_id::ASPIRIN);
    assert_eq!(set.alternatives.len(), 1);
    assert_eq!(set.alternatives[0].name, "Ibuprofen");
}

#[test]
fn reference_side_effects_never_overlap() {
    let catalog = Catalog::reference();
    let selection: Vec<Drug> = catalog.drugs().to_vec();

    // Every reference side effect has a distinct name, so even the full
    // selection has no overlap.
    assert!(overlapping_side_effects(&catalog, &selection).is_empty());
}

fn bare_drug(id: &str) -> Drug {
    Drug {
        id: id.to_string(),
        name: id.to_string(),
        generic_name: id.to_string(),
        brand_names: Vec::new(),
        rx_norm_code: None,
        atc_code: None,
        description: String::new(),
        therapeutic_class: Vec::new(),
        mechanism: String::new(),
        metabolism: Vec::new(),
        contraindications: Vec::new(),
        warnings: Vec::new(),
    }
}

fn named_effect(id: &str, drug_id: &str, name: &str) -> SideEffect {
    SideEffect {
        id: id.to_string(),
        drug_id: drug_id.to_string(),
        name: name.to_string(),
        description: String::new(),
        frequency: Frequency::Common,
        severity: Severity::Minor,
        timeline: Timeline::ShortTerm,
        onset: String::new(),
        duration: String::new(),
        reversible: true,
        monitoring: Vec::new(),
        management: Vec::new(),
    }
}

#[test]
fn shared_effect_names_across_selected_drugs_are_reported() {
    let drugs = vec![bare_drug("a"), bare_drug("b"), bare_drug("c")];
    let effects = vec![
        named_effect("a-nausea", "a", "Nausea"),
        named_effect("b-nausea", "b", "nausea"),
        named_effect("c-headache", "c", "Headache"),
    ];
    let catalog = Catalog::new(drugs.clone(), Vec::new(), effects).unwrap();

    // Both nausea records overlap (case-insensitive name match); the
    // headache record is unique to c.
    let overlap = overlapping_side_effects(&catalog, &drugs);
    let ids: Vec<&str> = overlap.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a-nausea", "b-nausea"]);

    // Overlap requires both drugs to be in the selection.
    let only_a = [bare_drug("a"), bare_drug("c")];
    assert!(overlapping_side_effects(&catalog, &only_a).is_empty());
}
