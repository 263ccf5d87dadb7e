//! rxguard-engine
//!
//! The interaction-derivation engine and the report builder layered on
//! top of it. Everything here is a deterministic, side-effect-free
//! function of a catalog snapshot and the current selection.

pub mod derive;
pub mod report;

pub use derive::derive_interactions;
pub use report::{AlternativeSet, InteractionReport, build_report, overlapping_side_effects};
