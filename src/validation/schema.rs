use crate::core::FieldValue;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// Declarative per-field constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Value must be present; blank text counts as missing.
    Required,
    /// Text must not exceed this many characters.
    MaxLength(usize),
    /// Numeric value must be at least this bound. NULL passes.
    Min(Decimal),
    /// Numeric value must be at most this bound. NULL passes.
    Max(Decimal),
}

impl Constraint {
    fn check(&self, label: &str, value: &FieldValue) -> Option<String> {
        match self {
            Constraint::Required => value
                .is_blank()
                .then(|| format!("{} is required", label)),
            Constraint::MaxLength(limit) => match value.text_len() {
                Some(len) if len > *limit => {
                    Some(format!("{} is limited to {} characters", label, limit))
                }
                _ => None,
            },
            Constraint::Min(bound) => match value.compare_numeric(*bound) {
                Some(Ordering::Less) => Some(format!("{} must be {} or greater", label, bound)),
                _ => None,
            },
            Constraint::Max(bound) => match value.compare_numeric(*bound) {
                Some(Ordering::Greater) => Some(format!("{} must be {} or less", label, bound)),
                _ => None,
            },
        }
    }
}

pub struct FieldSchema<T> {
    name: &'static str,
    label: &'static str,
    accessor: fn(&T) -> FieldValue,
    constraints: Vec<Constraint>,
}

impl<T> FieldSchema<T> {
    pub fn new(name: &'static str, label: &'static str, accessor: fn(&T) -> FieldValue) -> Self {
        Self {
            name,
            label,
            accessor,
            constraints: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.constraints.push(Constraint::Required);
        self
    }

    pub fn max_length(mut self, limit: usize) -> Self {
        self.constraints.push(Constraint::MaxLength(limit));
        self
    }

    pub fn min(mut self, bound: Decimal) -> Self {
        self.constraints.push(Constraint::Min(bound));
        self
    }

    pub fn max(mut self, bound: Decimal) -> Self {
        self.constraints.push(Constraint::Max(bound));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn value_of(&self, entity: &T) -> FieldValue {
        (self.accessor)(entity)
    }

    /// Returns one message per failed constraint, in declaration order.
    pub fn validate(&self, entity: &T) -> Vec<String> {
        let value = self.value_of(entity);
        self.constraints
            .iter()
            .filter_map(|constraint| constraint.check(self.label, &value))
            .collect()
    }
}

impl<T> fmt::Debug for FieldSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("constraints", &self.constraints)
            .finish()
    }
}

/// Ordered collection of field schemas for one entity type.
#[derive(Debug)]
pub struct EntitySchema<T> {
    fields: Vec<FieldSchema<T>>,
}

impl<T> EntitySchema<T> {
    pub fn new(fields: Vec<FieldSchema<T>>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSchema<T>] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema<T>> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Runs every constraint and returns `(field name, message)` pairs.
    pub fn validate(&self, entity: &T) -> Vec<(&'static str, String)> {
        self.fields
            .iter()
            .flat_map(|field| {
                field
                    .validate(entity)
                    .into_iter()
                    .map(move |message| (field.name, message))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Editable, Product};

    #[test]
    fn test_valid_product_passes_schema() {
        let product = Product::new("Chai").unit_price(Decimal::new(1800, 2));
        assert!(Product::schema().validate(&product).is_empty());
    }

    #[test]
    fn test_missing_name_fails_required() {
        let errors = Product::schema().validate(&Product::default());
        assert_eq!(
            errors,
            vec![(Product::PRODUCT_NAME, "Product name is required".to_string())]
        );
    }

    #[test]
    fn test_length_and_range_constraints() {
        let mut product = Product::new("x".repeat(41)).unit_price(Decimal::new(-1, 0));
        product.units_on_order = -5;
        product.quantity_per_unit = Some("a".repeat(21));

        let errors = Product::schema().validate(&product);
        let fields: Vec<&str> = errors.iter().map(|(field, _)| *field).collect();
        assert_eq!(
            fields,
            vec![
                Product::PRODUCT_NAME,
                Product::QUANTITY_PER_UNIT,
                Product::UNIT_PRICE,
                Product::UNITS_ON_ORDER
            ]
        );
        assert_eq!(errors[2].1, "Unit price must be 0 or greater");
    }

    #[test]
    fn test_null_skips_range_rules() {
        let schema = Product::schema();
        let field = schema.field(Product::MINIMUM_ORDER_QUANTITY).unwrap();
        assert!(field.validate(&Product::new("Chai")).is_empty());
    }

    #[test]
    fn test_max_constraint() {
        let field = FieldSchema::new("units", "Units", |p: &Product| {
            FieldValue::from(p.units_on_order)
        })
        .max(Decimal::from(100));
        let mut product = Product::new("Chai");
        product.units_on_order = 101;
        assert_eq!(field.validate(&product), vec!["Units must be 100 or less"]);
    }
}
