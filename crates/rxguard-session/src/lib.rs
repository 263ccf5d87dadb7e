//! rxguard-session
//!
//! The per-session selection state container: a tagged command enum, a
//! pure reducer, and the [`Session`] wrapper binding them to a shared
//! catalog. The derived interaction set is recomputed synchronously on
//! every selection change, so the state a caller reads is always
//! consistent with its selection.

pub mod command;
pub mod session;
pub mod state;

pub use command::{Command, reduce};
pub use session::Session;
pub use state::{SelectionState, SessionStatus};
