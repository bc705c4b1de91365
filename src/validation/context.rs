use super::field::{ContextId, FieldIdentifier};
use super::schema::EntitySchema;
use super::store::ValidationMessageStore;
use crate::core::Editable;
use std::collections::HashSet;
use tokio::sync::watch;

/// What triggered the latest validation state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOrigin {
    /// Context was just created; nothing has been validated.
    Initial,
    /// Declarative schema rules ran through [`EditContext::validate`].
    Schema,
    /// Messages were added to an external store and the owner announced it.
    External,
}

/// Broadcast to observers on every validation state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationState {
    pub revision: u64,
    pub origin: ValidationOrigin,
}

/// Binds one entity instance to its schema validation state.
///
/// The entity is owned by the context and there is no way to
/// swap it. A different entity needs a new context, which gets a new
/// [`ContextId`]; field identifiers and message stores built for the old
/// context do not apply to it.
pub struct EditContext<T: Editable> {
    id: ContextId,
    model: T,
    schema: EntitySchema<T>,
    schema_messages: Vec<(FieldIdentifier, String)>,
    modified: HashSet<&'static str>,
    state: watch::Sender<ValidationState>,
}

impl<T: Editable> EditContext<T> {
    pub fn new(model: T) -> Self {
        let (state, _) = watch::channel(ValidationState {
            revision: 0,
            origin: ValidationOrigin::Initial,
        });

        Self {
            id: ContextId::generate(),
            model,
            schema: T::schema(),
            schema_messages: Vec::new(),
            modified: HashSet::new(),
            state,
        }
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn model(&self) -> &T {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut T {
        &mut self.model
    }

    pub fn into_model(self) -> T {
        self.model
    }

    /// Message store bound to this context.
    pub fn message_store(&self) -> ValidationMessageStore {
        ValidationMessageStore::new(self.id)
    }

    pub fn field(&self, field_name: &'static str) -> FieldIdentifier {
        FieldIdentifier::new(self.id, field_name)
    }

    /// Reruns every schema constraint against the bound entity.
    ///
    /// Only the context's own message set is recomputed. Messages held in an
    /// external [`ValidationMessageStore`] are neither read nor cleared.
    pub fn validate(&mut self) -> bool {
        let id = self.id;
        self.schema_messages = self
            .schema
            .validate(&self.model)
            .into_iter()
            .map(|(name, message)| (FieldIdentifier::new(id, name), message))
            .collect();

        self.publish(ValidationOrigin::Schema);
        self.schema_messages.is_empty()
    }

    pub fn schema_messages(&self) -> &[(FieldIdentifier, String)] {
        &self.schema_messages
    }

    /// Schema messages followed by the messages in `store`.
    pub fn validation_messages(&self, store: &ValidationMessageStore) -> Vec<(FieldIdentifier, String)> {
        let mut messages = self.schema_messages.clone();
        if store.context_id() == self.id {
            messages.extend(
                store
                    .messages()
                    .map(|(field, message)| (field, message.to_string())),
            );
        }
        messages
    }

    pub fn messages_for_field(
        &self,
        store: &ValidationMessageStore,
        field_name: &'static str,
    ) -> Vec<String> {
        let field = self.field(field_name);
        self.validation_messages(store)
            .into_iter()
            .filter(|(key, _)| *key == field)
            .map(|(_, message)| message)
            .collect()
    }

    /// Tells observers that externally supplied messages changed.
    pub fn notify_validation_state_changed(&self) {
        self.publish(ValidationOrigin::External);
    }

    pub fn subscribe(&self) -> watch::Receiver<ValidationState> {
        self.state.subscribe()
    }

    pub fn validation_state(&self) -> ValidationState {
        *self.state.borrow()
    }

    pub fn mark_field_modified(&mut self, field_name: &'static str) {
        self.modified.insert(field_name);
    }

    pub fn is_field_modified(&self, field_name: &str) -> bool {
        self.modified.contains(field_name)
    }

    pub fn is_modified(&self) -> bool {
        !self.modified.is_empty()
    }

    pub fn mark_as_unmodified(&mut self) {
        self.modified.clear();
    }

    fn publish(&self, origin: ValidationOrigin) {
        self.state.send_modify(|state| {
            state.revision += 1;
            state.origin = origin;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Product;

    #[test]
    fn test_each_context_has_own_id() {
        let first = EditContext::new(Product::default());
        let second = EditContext::new(Product::default());
        assert_ne!(first.id(), second.id());
        assert_ne!(first.field(Product::CATEGORY_ID), second.field(Product::CATEGORY_ID));
    }

    #[test]
    fn test_validate_recomputes_schema_messages() {
        let mut context = EditContext::new(Product::default());
        assert!(!context.validate());
        assert_eq!(context.schema_messages().len(), 1);

        context.model_mut().product_name = "Chai".into();
        assert!(context.validate());
        assert!(context.schema_messages().is_empty());
    }

    #[test]
    fn test_validate_ignores_external_store() {
        let mut context = EditContext::new(Product::new("Chai"));
        let mut store = context.message_store();
        store.add(context.field(Product::CATEGORY_ID), "You must select a category");

        assert!(context.validate());
        assert!(store.any());
        assert_eq!(context.validation_messages(&store).len(), 1);
        assert_eq!(
            context.messages_for_field(&store, Product::CATEGORY_ID),
            vec!["You must select a category".to_string()]
        );
    }

    #[test]
    fn test_foreign_store_messages_are_not_merged() {
        let context = EditContext::new(Product::new("Chai"));
        let other = EditContext::new(Product::new("Chai"));
        let mut store = other.message_store();
        store.add(other.field(Product::CATEGORY_ID), "stale");
        assert!(context.validation_messages(&store).is_empty());
    }

    #[test]
    fn test_notifications_bump_revision() {
        let mut context = EditContext::new(Product::new("Chai"));
        let mut observer = context.subscribe();
        assert_eq!(context.validation_state().origin, ValidationOrigin::Initial);

        context.validate();
        assert!(observer.has_changed().unwrap());
        assert_eq!(observer.borrow_and_update().origin, ValidationOrigin::Schema);

        context.notify_validation_state_changed();
        let state = *observer.borrow_and_update();
        assert_eq!(state.revision, 2);
        assert_eq!(state.origin, ValidationOrigin::External);
    }

    #[test]
    fn test_modified_tracking() {
        let mut context = EditContext::new(Product::default());
        assert!(!context.is_modified());
        context.mark_field_modified(Product::PRODUCT_NAME);
        assert!(context.is_field_modified(Product::PRODUCT_NAME));
        assert!(!context.is_field_modified(Product::UNIT_PRICE));
        context.mark_as_unmodified();
        assert!(!context.is_modified());
    }
}
