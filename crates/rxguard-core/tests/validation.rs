use jiff::civil::date;

use rxguard_core::error::CoreError;
use rxguard_core::models::{Drug, Evidence, EvidenceLevel, Interaction, Severity};

fn drug(id: &str, classes: &[&str]) -> Drug {
    Drug {
        id: id.to_string(),
        name: id.to_string(),
        generic_name: id.to_string(),
        brand_names: Vec::new(),
        rx_norm_code: None,
        atc_code: None,
        description: String::new(),
        therapeutic_class: classes.iter().map(|c| c.to_string()).collect(),
        mechanism: String::new(),
        metabolism: Vec::new(),
        contraindications: Vec::new(),
        warnings: Vec::new(),
    }
}

fn interaction(a: &str, b: &str, confidence: f64) -> Interaction {
    Interaction {
        id: format!("{a}-{b}"),
        drug_a: drug(a, &[]),
        drug_b: drug(b, &[]),
        severity: Severity::Moderate,
        confidence,
        mechanism: String::new(),
        clinical_effects: Vec::new(),
        onset: String::new(),
        management: String::new(),
        evidence: Evidence {
            sources: Vec::new(),
            study_count: 0,
            case_reports: 0,
            evidence_level: EvidenceLevel::Low,
            last_updated: date(2024, 1, 1),
        },
        last_updated: date(2024, 1, 1),
    }
}

#[test]
fn valid_interaction_passes() {
    assert!(interaction("a", "b", 0.5).validate().is_ok());
    assert!(interaction("a", "b", 0.0).validate().is_ok());
    assert!(interaction("a", "b", 1.0).validate().is_ok());
}

#[test]
fn confidence_outside_unit_interval_is_rejected() {
    let too_high = interaction("a", "b", 1.2).validate();
    assert!(matches!(
        too_high,
        Err(CoreError::ConfidenceOutOfRange { .. })
    ));

    let negative = interaction("a", "b", -0.1).validate();
    assert!(matches!(
        negative,
        Err(CoreError::ConfidenceOutOfRange { .. })
    ));
}

#[test]
fn self_interaction_is_rejected() {
    let result = interaction("a", "a", 0.5).validate();
    assert!(matches!(result, Err(CoreError::SelfInteraction { .. })));
}

#[test]
fn pair_matching_is_symmetric() {
    let record = interaction("a", "b", 0.5);
    let a = drug("a", &[]);
    let b = drug("b", &[]);
    let c = drug("c", &[]);

    assert!(record.matches_pair(&a, &b));
    assert!(record.matches_pair(&b, &a));
    assert!(!record.matches_pair(&a, &c));
    assert!(!record.matches_pair(&a, &a));
}

#[test]
fn shared_class_detection() {
    let aspirin = drug("aspirin", &["NSAIDs", "Antiplatelet agents"]);
    let ibuprofen = drug("ibuprofen", &["NSAIDs"]);
    let warfarin = drug("warfarin", &["Anticoagulants"]);

    assert!(aspirin.shares_class_with(&ibuprofen));
    assert!(ibuprofen.shares_class_with(&aspirin));
    assert!(!aspirin.shares_class_with(&warfarin));
}
