//! Product editor page: route parameter, reference lists and the actions
//! bound to its buttons.

mod config;
mod product_page;

pub use config::{DEFAULT_CLEAR_PROMPT, DEFAULT_LEAVE_PROMPT, DEFAULT_SEARCH_ROUTE, EditorConfig};
pub use product_page::{PageServices, ProductEditorPage};
