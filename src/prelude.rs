//! Recommended imports grouped by use.
//!
//! `page` is enough to host the product editor. `pipeline` is for building
//! editors over other entity types.

pub mod page {
    //! Hosting the product editor.
    pub use crate::interaction::{ConfirmationGate, Navigator, RecordingNavigator, ScriptedConfirmation};
    pub use crate::page::{EditorConfig, PageServices, ProductEditorPage};
    pub use crate::pipeline::ActionOutcome;
    pub use crate::services::InMemoryCatalog;
    pub use crate::{Category, Product, Supplier};
}

pub mod pipeline {
    //! Building blocks for a custom entity editor.
    pub use crate::core::{Editable, Fault, FaultKind, FaultResult, FieldValue};
    pub use crate::pipeline::{ActionOutcome, ActionPipeline, EditSession, FeedbackCategory, MutationKind};
    pub use crate::services::EntityStore;
    pub use crate::validation::{
        BusinessRule, BusinessRuleSet, EditContext, EntitySchema, FieldSchema,
        ValidationMessageStore,
    };
}
