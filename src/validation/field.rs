use std::fmt;
use uuid::Uuid;

/// Identity of one [`EditContext`](super::EditContext) instance.
///
/// Two contexts never share an id, even when bound to equal entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(Uuid);

impl ContextId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key for validation messages: a field of the entity bound to one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldIdentifier {
    context: ContextId,
    field_name: &'static str,
}

impl FieldIdentifier {
    pub(crate) fn new(context: ContextId, field_name: &'static str) -> Self {
        Self {
            context,
            field_name,
        }
    }

    pub fn context(&self) -> ContextId {
        self.context
    }

    pub fn field_name(&self) -> &'static str {
        self.field_name
    }
}

impl fmt::Display for FieldIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name)
    }
}
