//! Validated mutation pipeline shared by every persistence action.

mod action;
mod outcome;
mod runner;
mod session;

pub use action::MutationKind;
pub use outcome::{ActionOutcome, FeedbackCategory};
pub use runner::ActionPipeline;
pub use session::EditSession;
