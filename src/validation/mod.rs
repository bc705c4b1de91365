//! Form validation state for a single bound entity.
//!
//! # Architecture
//!
//! - `schema.rs` - declarative per-field constraints
//! - `context.rs` - `EditContext`, owner of the entity and its schema messages
//! - `store.rs` - externally supplied, field-keyed messages
//! - `business.rs` - ordered business rules run after the schema passes
//! - `field.rs` - context and field identities

mod business;
mod context;
mod field;
mod schema;
mod store;

pub use business::{BusinessRule, BusinessRuleSet, product_rules};
pub use context::{EditContext, ValidationOrigin, ValidationState};
pub use field::{ContextId, FieldIdentifier};
pub use schema::{Constraint, EntitySchema, FieldSchema};
pub use store::ValidationMessageStore;
