//! rxguard-core
//!
//! Pure domain types for the RxGuard interaction checker. No I/O and no
//! reference data — this is the shared vocabulary of the RxGuard system.

pub mod error;
pub mod models;
