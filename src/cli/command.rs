use catalog_editor::Product;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help')")]
    UnknownCommand(String),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Usage: {0}")]
    Usage(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show,
    Set(FieldEdit),
    Create,
    Update,
    Discontinue,
    Activate,
    Clear,
    Search,
    Categories,
    Suppliers,
    Help,
    Quit,
}

/// A parsed form edit for one product field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Category(i32),
    Supplier(i32),
    QuantityPerUnit(Option<String>),
    MinimumOrderQuantity(Option<i16>),
    UnitPrice(Decimal),
    UnitsOnOrder(i32),
}

impl FieldEdit {
    pub fn field(&self) -> &'static str {
        match self {
            FieldEdit::Name(_) => Product::PRODUCT_NAME,
            FieldEdit::Category(_) => Product::CATEGORY_ID,
            FieldEdit::Supplier(_) => Product::SUPPLIER_ID,
            FieldEdit::QuantityPerUnit(_) => Product::QUANTITY_PER_UNIT,
            FieldEdit::MinimumOrderQuantity(_) => Product::MINIMUM_ORDER_QUANTITY,
            FieldEdit::UnitPrice(_) => Product::UNIT_PRICE,
            FieldEdit::UnitsOnOrder(_) => Product::UNITS_ON_ORDER,
        }
    }

    pub fn apply(self, product: &mut Product) {
        match self {
            FieldEdit::Name(name) => product.product_name = name,
            FieldEdit::Category(id) => product.category_id = id,
            FieldEdit::Supplier(id) => product.supplier_id = id,
            FieldEdit::QuantityPerUnit(quantity) => product.quantity_per_unit = quantity,
            FieldEdit::MinimumOrderQuantity(quantity) => product.minimum_order_quantity = quantity,
            FieldEdit::UnitPrice(price) => product.set_formatted_unit_price(price),
            FieldEdit::UnitsOnOrder(units) => product.units_on_order = units,
        }
    }

    fn parse(field: &str, value: &str) -> Result<Self, CommandError> {
        let value = value.trim();
        match field {
            "name" => Ok(FieldEdit::Name(value.to_string())),
            "category" => parse_number(Product::CATEGORY_ID, value).map(FieldEdit::Category),
            "supplier" => parse_number(Product::SUPPLIER_ID, value).map(FieldEdit::Supplier),
            "quantity" => Ok(FieldEdit::QuantityPerUnit(
                (!value.is_empty()).then(|| value.to_string()),
            )),
            "min-order" => {
                if value.is_empty() {
                    Ok(FieldEdit::MinimumOrderQuantity(None))
                } else {
                    parse_number(Product::MINIMUM_ORDER_QUANTITY, value)
                        .map(|v| FieldEdit::MinimumOrderQuantity(Some(v)))
                }
            }
            "price" => Decimal::from_str(value)
                .map(FieldEdit::UnitPrice)
                .map_err(|e| CommandError::InvalidValue {
                    field: Product::UNIT_PRICE,
                    reason: e.to_string(),
                }),
            "on-order" => parse_number(Product::UNITS_ON_ORDER, value).map(FieldEdit::UnitsOnOrder),
            other => Err(CommandError::UnknownField(other.to_string())),
        }
    }
}

fn parse_number<N: FromStr>(field: &'static str, value: &str) -> Result<N, CommandError>
where
    N::Err: std::fmt::Display,
{
    value.parse::<N>().map_err(|e| CommandError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}

pub const HELP: &str = "\
Commands:
  show                        show the product, feedback and validation messages
  set <field> <value>         fields: name, category, supplier, quantity, min-order, price, on-order
  create | update             save the product
  discontinue | activate      change the product's status
  clear                       discard unsaved changes
  search                      leave for the product search
  categories | suppliers      list reference data
  help | quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match head.to_ascii_lowercase().as_str() {
            "show" | "" => Ok(Command::Show),
            "set" => {
                let rest = rest.trim_start();
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::Usage("set <field> <value>"));
                }
                FieldEdit::parse(&field.to_ascii_lowercase(), value).map(Command::Set)
            }
            "create" => Ok(Command::Create),
            "update" => Ok(Command::Update),
            "discontinue" => Ok(Command::Discontinue),
            "activate" => Ok(Command::Activate),
            "clear" => Ok(Command::Clear),
            "search" => Ok(Command::Search),
            "categories" => Ok(Command::Categories),
            "suppliers" => Ok(Command::Suppliers),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}
