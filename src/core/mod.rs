pub mod entity;
pub mod error;
pub mod types;
pub mod value;

pub use entity::Editable;
pub use error::{EditorError, Fault, FaultKind, FaultResult, Result};
pub use types::{Category, CategoryId, Product, ProductId, Supplier, SupplierId, UNSELECTED};
pub use value::FieldValue;
