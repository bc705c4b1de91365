use super::field::{ContextId, FieldIdentifier};
use tracing::warn;

/// Field-keyed messages supplied from outside the schema.
///
/// Additions do not notify anybody. After mutating the store, call
/// [`EditContext::notify_validation_state_changed`](super::EditContext::notify_validation_state_changed).
#[derive(Debug, Clone)]
pub struct ValidationMessageStore {
    context: ContextId,
    entries: Vec<(FieldIdentifier, Vec<String>)>,
}

impl ValidationMessageStore {
    /// Creates an empty store bound to the context with the given id.
    pub fn new(context: ContextId) -> Self {
        Self {
            context,
            entries: Vec::new(),
        }
    }

    pub fn context_id(&self) -> ContextId {
        self.context
    }

    /// Adds `message` under `field`.
    ///
    /// Returns `false` and stores nothing when `field` belongs to another
    /// edit context.
    pub fn add(&mut self, field: FieldIdentifier, message: impl Into<String>) -> bool {
        if field.context() != self.context {
            warn!(
                field = field.field_name(),
                store_context = %self.context,
                field_context = %field.context(),
                "message for another edit context ignored"
            );
            return false;
        }

        let message = message.into();
        match self.entries.iter_mut().find(|(key, _)| *key == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field, vec![message])),
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn clear_field(&mut self, field: &FieldIdentifier) {
        self.entries.retain(|(key, _)| key != field);
    }

    pub fn any(&self) -> bool {
        self.entries.iter().any(|(_, messages)| !messages.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, messages)| messages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    /// All messages in insertion order, grouped by the field first used.
    pub fn messages(&self) -> impl Iterator<Item = (FieldIdentifier, &str)> + '_ {
        self.entries.iter().flat_map(|(field, messages)| {
            messages.iter().map(move |message| (*field, message.as_str()))
        })
    }

    pub fn messages_for(&self, field: &FieldIdentifier) -> &[String] {
        self.entries
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }
}
