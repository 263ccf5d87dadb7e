//! The built-in reference dataset: five common medications, the two
//! documented interaction records between them, and a handful of
//! per-drug side effects.
//!
//! Values follow published interaction references (DrugBank, FDA FAERS)
//! but are illustrative, not clinical guidance.

use std::sync::LazyLock;

use jiff::civil::date;

use rxguard_core::models::{
    Drug, Evidence, EvidenceLevel, Frequency, Interaction, Severity, SideEffect, Timeline,
};

/// Stable ids of the reference drugs, usable as [`Catalog::drug`] keys.
///
/// [`Catalog::drug`]: crate::Catalog::drug
pub mod drug_id {
    pub const WARFARIN: &str = "warfarin";
    pub const ASPIRIN: &str = "aspirin";
    pub const IBUPROFEN: &str = "ibuprofen";
    pub const METFORMIN: &str = "metformin";
    pub const LISINOPRIL: &str = "lisinopril";
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn warfarin() -> Drug {
    Drug {
        id: drug_id::WARFARIN.to_string(),
        name: "Warfarin".to_string(),
        generic_name: "warfarin sodium".to_string(),
        brand_names: strings(&["Coumadin", "Jantoven"]),
        rx_norm_code: Some("11289".to_string()),
        atc_code: Some("B01AA03".to_string()),
        description: "Anticoagulant medication used to prevent blood clots".to_string(),
        therapeutic_class: strings(&["Anticoagulants", "Vitamin K Antagonists"]),
        mechanism: "Inhibits vitamin K-dependent clotting factors".to_string(),
        metabolism: strings(&["CYP2C9", "CYP1A2", "CYP3A4"]),
        contraindications: strings(&["Active bleeding", "Severe liver disease"]),
        warnings: strings(&["Regular INR monitoring required", "Bleeding risk"]),
    }
}

fn aspirin() -> Drug {
    Drug {
        id: drug_id::ASPIRIN.to_string(),
        name: "Aspirin".to_string(),
        generic_name: "acetylsalicylic acid".to_string(),
        brand_names: strings(&["Bayer", "Bufferin", "Ecotrin"]),
        rx_norm_code: Some("1191".to_string()),
        atc_code: Some("N02BA01".to_string()),
        description: "NSAID used for pain relief and cardiovascular protection".to_string(),
        therapeutic_class: strings(&["NSAIDs", "Antiplatelet agents"]),
        mechanism: "Irreversibly inhibits COX-1 and COX-2 enzymes".to_string(),
        metabolism: strings(&["Hepatic hydrolysis"]),
        contraindications: strings(&["Active GI bleeding", "Severe renal impairment"]),
        warnings: strings(&["GI bleeding risk", "Reye's syndrome in children"]),
    }
}

fn ibuprofen() -> Drug {
    Drug {
        id: drug_id::IBUPROFEN.to_string(),
        name: "Ibuprofen".to_string(),
        generic_name: "ibuprofen".to_string(),
        brand_names: strings(&["Advil", "Motrin", "Nurofen"]),
        rx_norm_code: Some("5640".to_string()),
        atc_code: Some("M01AE01".to_string()),
        description: "NSAID used for pain, inflammation, and fever reduction".to_string(),
        therapeutic_class: strings(&["NSAIDs"]),
        mechanism: "Reversibly inhibits COX-1 and COX-2 enzymes".to_string(),
        metabolism: strings(&["CYP2C9", "CYP2C8"]),
        contraindications: strings(&["Active GI bleeding", "Severe heart failure"]),
        warnings: strings(&["Cardiovascular risk", "GI bleeding risk"]),
    }
}

fn metformin() -> Drug {
    Drug {
        id: drug_id::METFORMIN.to_string(),
        name: "Metformin".to_string(),
        generic_name: "metformin hydrochloride".to_string(),
        brand_names: strings(&["Glucophage", "Fortamet", "Glumetza"]),
        rx_norm_code: Some("6809".to_string()),
        atc_code: Some("A10BA02".to_string()),
        description: "Antidiabetic medication for type 2 diabetes".to_string(),
        therapeutic_class: strings(&["Biguanides", "Antidiabetic agents"]),
        mechanism: "Decreases hepatic glucose production".to_string(),
        metabolism: strings(&["Not metabolized - excreted unchanged"]),
        contraindications: strings(&["Severe renal impairment", "Metabolic acidosis"]),
        warnings: strings(&["Lactic acidosis risk", "Vitamin B12 deficiency"]),
    }
}

fn lisinopril() -> Drug {
    Drug {
        id: drug_id::LISINOPRIL.to_string(),
        name: "Lisinopril".to_string(),
        generic_name: "lisinopril".to_string(),
        brand_names: strings(&["Prinivil", "Zestril"]),
        rx_norm_code: Some("29046".to_string()),
        atc_code: Some("C09AA03".to_string()),
        description: "ACE inhibitor for hypertension and heart failure".to_string(),
        therapeutic_class: strings(&["ACE inhibitors", "Antihypertensives"]),
        mechanism: "Inhibits angiotensin-converting enzyme".to_string(),
        metabolism: strings(&["Not metabolized - excreted unchanged"]),
        contraindications: strings(&["Angioedema history", "Pregnancy"]),
        warnings: strings(&["Hyperkalemia risk", "Renal function monitoring"]),
    }
}

static DRUGS: LazyLock<Vec<Drug>> = LazyLock::new(|| {
    vec![warfarin(), aspirin(), ibuprofen(), metformin(), lisinopril()]
});

static INTERACTIONS: LazyLock<Vec<Interaction>> = LazyLock::new(|| {
    vec![
        Interaction {
            id: "warfarin-aspirin".to_string(),
            drug_a: warfarin(),
            drug_b: aspirin(),
            severity: Severity::Major,
            confidence: 0.95,
            mechanism: "Increased bleeding risk due to anticoagulant and antiplatelet synergy"
                .to_string(),
            clinical_effects: strings(&[
                "Prolonged bleeding time",
                "Increased bruising",
                "GI bleeding risk",
                "Intracranial hemorrhage risk",
            ]),
            onset: "Within hours to days".to_string(),
            management: "Monitor INR closely, consider dose adjustment, watch for bleeding signs"
                .to_string(),
            evidence: Evidence {
                sources: strings(&["DrugBank", "FDA FAERS", "Clinical studies"]),
                study_count: 23,
                case_reports: 156,
                evidence_level: EvidenceLevel::High,
                last_updated: date(2024, 1, 15),
            },
            last_updated: date(2024, 1, 15),
        },
        Interaction {
            id: "aspirin-ibuprofen".to_string(),
            drug_a: aspirin(),
            drug_b: ibuprofen(),
            severity: Severity::Moderate,
            confidence: 0.88,
            mechanism: "Ibuprofen may interfere with aspirin's cardioprotective effects"
                .to_string(),
            clinical_effects: strings(&[
                "Reduced cardioprotective benefit of aspirin",
                "Increased GI bleeding risk",
                "Potential renal effects",
            ]),
            onset: "Immediate (competitive inhibition)".to_string(),
            management: "Take aspirin 2 hours before ibuprofen, or use alternative pain relief"
                .to_string(),
            evidence: Evidence {
                sources: strings(&["DrugBank", "Cardiology studies"]),
                study_count: 12,
                case_reports: 45,
                evidence_level: EvidenceLevel::Moderate,
                last_updated: date(2024, 1, 10),
            },
            last_updated: date(2024, 1, 10),
        },
    ]
});

static SIDE_EFFECTS: LazyLock<Vec<SideEffect>> = LazyLock::new(|| {
    vec![
        SideEffect {
            id: "warfarin-bleeding".to_string(),
            drug_id: drug_id::WARFARIN.to_string(),
            name: "Bleeding".to_string(),
            description: "Increased risk of bleeding due to anticoagulant effects".to_string(),
            frequency: Frequency::Common,
            severity: Severity::Major,
            timeline: Timeline::Immediate,
            onset: "Hours to days".to_string(),
            duration: "While on medication".to_string(),
            reversible: true,
            monitoring: strings(&["INR levels", "Signs of bleeding", "Complete blood count"]),
            management: strings(&[
                "Dose adjustment",
                "Vitamin K if severe",
                "Medical attention for major bleeding",
            ]),
        },
        SideEffect {
            id: "aspirin-gi-upset".to_string(),
            drug_id: drug_id::ASPIRIN.to_string(),
            name: "Gastrointestinal upset".to_string(),
            description: "Stomach irritation, nausea, and potential ulceration".to_string(),
            frequency: Frequency::Common,
            severity: Severity::Moderate,
            timeline: Timeline::ShortTerm,
            onset: "Minutes to hours".to_string(),
            duration: "Usually resolves with discontinuation".to_string(),
            reversible: true,
            monitoring: strings(&["GI symptoms", "Signs of bleeding"]),
            management: strings(&[
                "Take with food",
                "Proton pump inhibitor if needed",
                "Discontinue if severe",
            ]),
        },
        SideEffect {
            id: "metformin-gi-effects".to_string(),
            drug_id: drug_id::METFORMIN.to_string(),
            name: "Gastrointestinal effects".to_string(),
            description: "Nausea, diarrhea, and abdominal discomfort".to_string(),
            frequency: Frequency::VeryCommon,
            severity: Severity::Minor,
            timeline: Timeline::ShortTerm,
            onset: "Days to weeks".to_string(),
            duration: "Often improves with continued use".to_string(),
            reversible: true,
            monitoring: strings(&["GI tolerance", "Nutritional status"]),
            management: strings(&[
                "Start with low dose",
                "Take with meals",
                "Gradual dose increase",
            ]),
        },
    ]
});

/// The reference drugs, in catalog order.
pub fn drugs() -> &'static [Drug] {
    &DRUGS
}

/// The reference interaction table.
pub fn interactions() -> &'static [Interaction] {
    &INTERACTIONS
}

/// The reference side effects.
pub fn side_effects() -> &'static [SideEffect] {
    &SIDE_EFFECTS
}
