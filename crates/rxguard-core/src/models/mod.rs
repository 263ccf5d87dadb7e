pub mod drug;
pub mod evidence;
pub mod interaction;
pub mod levels;
pub mod side_effect;

pub use drug::Drug;
pub use evidence::Evidence;
pub use interaction::Interaction;
pub use levels::{EvidenceLevel, Frequency, Severity, Timeline};
pub use side_effect::SideEffect;
