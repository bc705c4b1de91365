use crate::validation::EntitySchema;
use std::fmt;

/// An entity that can be bound to an [`EditContext`](crate::validation::EditContext)
/// and driven through the mutation pipeline.
pub trait Editable: Default + Clone + fmt::Debug + Send + Sync + 'static {
    /// Store-assigned identifier type.
    type Key: Copy + fmt::Display + fmt::Debug + PartialEq + Send + Sync + 'static;

    /// Declarative per-field constraints for this entity.
    fn schema() -> EntitySchema<Self>;

    /// Name shown in feedback messages.
    fn display_name(&self) -> &str;

    /// `None` until the entity has been persisted.
    fn key(&self) -> Option<Self::Key>;

    fn assign_key(&mut self, key: Self::Key);
}
