use crate::core::Editable;
use crate::validation::{EditContext, ValidationMessageStore};

/// Page-scoped editing state: the bound entity, external validation
/// messages and the feedback line.
///
/// Lives for one visit to an editor page and is passed explicitly to every
/// pipeline run.
pub struct EditSession<T: Editable> {
    context: EditContext<T>,
    messages: ValidationMessageStore,
    feedback: String,
}

impl<T: Editable> EditSession<T> {
    pub fn new(entity: T) -> Self {
        let context = EditContext::new(entity);
        let messages = context.message_store();
        Self {
            context,
            messages,
            feedback: String::new(),
        }
    }

    pub fn context(&self) -> &EditContext<T> {
        &self.context
    }

    pub(crate) fn context_mut(&mut self) -> &mut EditContext<T> {
        &mut self.context
    }

    pub fn entity(&self) -> &T {
        self.context.model()
    }

    pub fn entity_mut(&mut self) -> &mut T {
        self.context.model_mut()
    }

    pub fn mark_field_modified(&mut self, field_name: &'static str) {
        self.context.mark_field_modified(field_name);
    }

    pub fn messages(&self) -> &ValidationMessageStore {
        &self.messages
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn reset_feedback(&mut self) {
        self.feedback.clear();
    }

    pub(crate) fn set_feedback(&mut self, feedback: String) {
        self.feedback = feedback;
    }

    /// Context and store for one pipeline run, with the store rebound if it
    /// no longer matches the context.
    pub(crate) fn parts_mut(&mut self) -> (&mut EditContext<T>, &mut ValidationMessageStore) {
        if self.messages.context_id() != self.context.id() {
            self.messages = self.context.message_store();
        }
        (&mut self.context, &mut self.messages)
    }

    /// Binds a new entity through a brand new context and message store.
    ///
    /// The previous context is dropped, never rebound.
    pub fn replace_entity(&mut self, entity: T) {
        self.messages.clear();
        self.context = EditContext::new(entity);
        self.messages = self.context.message_store();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Product;

    #[test]
    fn test_new_session_binds_store_to_context() {
        let session = EditSession::new(Product::new("Chai"));
        assert_eq!(session.messages().context_id(), session.context().id());
        assert!(session.feedback().is_empty());
    }

    #[test]
    fn test_replace_entity_creates_new_context() {
        let mut session = EditSession::new(Product::new("Chai").with_id(1));
        let before = session.context().id();
        let field = session.context().field(Product::CATEGORY_ID);
        session.parts_mut().1.add(field, "You must select a category");

        session.replace_entity(Product::default());

        assert_ne!(session.context().id(), before);
        assert_eq!(session.messages().context_id(), session.context().id());
        assert!(!session.messages().any());
        assert_eq!(session.entity(), &Product::default());
    }

    #[test]
    fn test_parts_mut_rebinds_store_after_context_swap() {
        let mut session = EditSession::new(Product::new("Chai"));
        *session.context_mut() = EditContext::new(Product::new("Widget"));
        assert_ne!(session.messages().context_id(), session.context().id());

        let (context, store) = session.parts_mut();
        let field = context.field(Product::CATEGORY_ID);
        assert!(store.add(field, "You must select a category"));

        assert_eq!(session.messages().context_id(), session.context().id());
        assert_eq!(session.context().validation_messages(session.messages()).len(), 1);
    }

    #[test]
    fn test_mark_field_modified() {
        let mut session = EditSession::new(Product::new("Chai"));
        session.entity_mut().unit_price = rust_decimal::Decimal::new(18, 0);
        session.mark_field_modified(Product::UNIT_PRICE);
        assert!(session.context().is_field_modified(Product::UNIT_PRICE));
    }
}
