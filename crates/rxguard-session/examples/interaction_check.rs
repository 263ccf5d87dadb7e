//! Console walk-through of the add → derive → report flow against the
//! built-in reference catalog.
//!
//! Usage:
//!   cargo run -p rxguard-session --example interaction_check

use std::sync::Arc;

use rxguard_catalog::{Catalog, dataset::drug_id};
use rxguard_session::Session;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let catalog = Arc::new(Catalog::reference());
    let mut session = Session::new(Arc::clone(&catalog));

    for id in [drug_id::WARFARIN, drug_id::ASPIRIN, drug_id::IBUPROFEN] {
        if let Some(drug) = catalog.drug(id) {
            println!("adding {}", drug.name);
            session.add_drug(drug.clone());
        }
    }

    let report = session.report();
    println!();
    println!(
        "{} medications checked, {} interaction(s) found",
        session.state().selected_drugs.len(),
        report.interactions.len()
    );

    for interaction in &report.interactions {
        println!();
        println!(
            "{} + {} — {:?} ({:.0}% confidence)",
            interaction.drug_a.name,
            interaction.drug_b.name,
            interaction.severity,
            interaction.confidence * 100.0
        );
        println!("  mechanism:  {}", interaction.mechanism);
        println!("  management: {}", interaction.management);
        println!("  onset:      {}", interaction.onset);
    }

    for set in &report.alternatives {
        println!();
        println!("alternatives to {}:", set.drug_name);
        for alt in &set.alternatives {
            println!("  {} ({})", alt.name, alt.generic_name);
        }
    }
}
