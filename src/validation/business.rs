//! Business rules evaluated after declarative schema validation passes.
//!
//! A rule is a `(predicate, field, message)` triple. Rules run in insertion
//! order and are independent: every violated rule adds its message.

use super::context::EditContext;
use super::store::ValidationMessageStore;
use crate::core::{Editable, Product, UNSELECTED};
use std::fmt;

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub struct BusinessRule<T> {
    field: &'static str,
    message: String,
    violated: Predicate<T>,
}

impl<T> BusinessRule<T> {
    /// `violated` returns `true` when the entity breaks the rule.
    pub fn new(
        field: &'static str,
        message: impl Into<String>,
        violated: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            message: message.into(),
            violated: Box::new(violated),
        }
    }

    /// Rule for a foreign key selector left at [`UNSELECTED`].
    pub fn reference_selected(
        field: &'static str,
        message: impl Into<String>,
        reference: fn(&T) -> i32,
    ) -> Self
    where
        T: 'static,
    {
        Self::new(field, message, move |entity| reference(entity) == UNSELECTED)
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_violated_by(&self, entity: &T) -> bool {
        (self.violated)(entity)
    }
}

impl<T> fmt::Debug for BusinessRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusinessRule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish()
    }
}

#[derive(Debug)]
pub struct BusinessRuleSet<T> {
    rules: Vec<BusinessRule<T>>,
}

impl<T> Default for BusinessRuleSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T: Editable> BusinessRuleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: BusinessRule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: BusinessRule<T>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[BusinessRule<T>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Writes one message per violated rule into `store`.
    ///
    /// Returns the number of messages added. Does not notify observers.
    pub fn evaluate(&self, context: &EditContext<T>, store: &mut ValidationMessageStore) -> usize {
        let entity = context.model();
        let mut added = 0;
        for rule in self.rules.iter().filter(|rule| rule.is_violated_by(entity)) {
            if store.add(context.field(rule.field), rule.message.as_str()) {
                added += 1;
            }
        }
        added
    }
}

/// Rules a product must satisfy before any mutation is sent to the services.
pub fn product_rules() -> BusinessRuleSet<Product> {
    BusinessRuleSet::new()
        .with_rule(BusinessRule::reference_selected(
            Product::CATEGORY_ID,
            "You must select a category",
            |p: &Product| p.category_id,
        ))
        .with_rule(BusinessRule::reference_selected(
            Product::SUPPLIER_ID,
            "You must select a supplier",
            |p: &Product| p.supplier_id,
        ))
}
