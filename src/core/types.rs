use super::{Editable, FieldValue};
use crate::validation::{EntitySchema, FieldSchema};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type ProductId = i32;
pub type CategoryId = i32;
pub type SupplierId = i32;

/// Default value of a foreign key selector. No stored row uses it.
pub const UNSELECTED: i32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub supplier_id: SupplierId,
    pub category_id: CategoryId,
    pub quantity_per_unit: Option<String>,
    pub minimum_order_quantity: Option<i16>,
    pub unit_price: Decimal,
    pub units_on_order: i32,
    pub discontinued: bool,
}

impl Product {
    pub const PRODUCT_ID: &'static str = "product_id";
    pub const PRODUCT_NAME: &'static str = "product_name";
    pub const SUPPLIER_ID: &'static str = "supplier_id";
    pub const CATEGORY_ID: &'static str = "category_id";
    pub const QUANTITY_PER_UNIT: &'static str = "quantity_per_unit";
    pub const MINIMUM_ORDER_QUANTITY: &'static str = "minimum_order_quantity";
    pub const UNIT_PRICE: &'static str = "unit_price";
    pub const UNITS_ON_ORDER: &'static str = "units_on_order";
    pub const DISCONTINUED: &'static str = "discontinued";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            product_name: name.into(),
            ..Self::default()
        }
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn supplier(mut self, supplier_id: SupplierId) -> Self {
        self.supplier_id = supplier_id;
        self
    }

    pub fn unit_price(mut self, price: Decimal) -> Self {
        self.unit_price = price;
        self
    }

    pub fn quantity_per_unit(mut self, quantity: impl Into<String>) -> Self {
        self.quantity_per_unit = Some(quantity.into());
        self
    }

    pub fn with_id(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }

    /// Unit price rounded to two decimal places for display.
    pub fn formatted_unit_price(&self) -> Decimal {
        self.unit_price.round_dp(2)
    }

    pub fn set_formatted_unit_price(&mut self, price: Decimal) {
        self.unit_price = price;
    }
}

impl Editable for Product {
    type Key = ProductId;

    fn schema() -> EntitySchema<Self> {
        EntitySchema::new(vec![
            FieldSchema::new(Self::PRODUCT_NAME, "Product name", |p: &Product| {
                FieldValue::from(p.product_name.as_str())
            })
            .required()
            .max_length(40),
            FieldSchema::new(Self::QUANTITY_PER_UNIT, "Quantity per unit", |p: &Product| {
                FieldValue::from(p.quantity_per_unit.as_deref())
            })
            .max_length(20),
            FieldSchema::new(
                Self::MINIMUM_ORDER_QUANTITY,
                "Minimum order quantity",
                |p: &Product| FieldValue::from(p.minimum_order_quantity),
            )
            .min(Decimal::ZERO),
            FieldSchema::new(Self::UNIT_PRICE, "Unit price", |p: &Product| {
                FieldValue::from(p.unit_price)
            })
            .min(Decimal::ZERO),
            FieldSchema::new(Self::UNITS_ON_ORDER, "Units on order", |p: &Product| {
                FieldValue::from(p.units_on_order)
            })
            .min(Decimal::ZERO),
        ])
    }

    fn display_name(&self) -> &str {
        &self.product_name
    }

    fn key(&self) -> Option<ProductId> {
        self.product_id
    }

    fn assign_key(&mut self, key: ProductId) {
        self.product_id = Some(key);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
    pub description: Option<String>,
}

impl Category {
    pub fn new(category_id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            category_id,
            category_name: name.into(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: SupplierId,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
}

impl Supplier {
    pub fn new(supplier_id: SupplierId, company_name: impl Into<String>) -> Self {
        Self {
            supplier_id,
            company_name: company_name.into(),
            contact_name: None,
            phone: None,
        }
    }
}
