// ============================================================================
// Catalog Editor Library
// ============================================================================

pub mod core;
pub mod interaction;
pub mod page;
pub mod pipeline;
pub mod prelude;
pub mod services;
pub mod validation;

// Re-export main types for convenience
pub use crate::core::{
    Category, Editable, EditorError, Fault, FaultKind, FaultResult, Product, ProductId, Result,
    Supplier, UNSELECTED,
};
pub use page::{EditorConfig, PageServices, ProductEditorPage};
pub use pipeline::{ActionOutcome, ActionPipeline, EditSession, FeedbackCategory, MutationKind};
