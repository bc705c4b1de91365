use crate::core::Result;
use serde::Deserialize;

pub const DEFAULT_SEARCH_ROUTE: &str = "categoryproducts";
pub const DEFAULT_CLEAR_PROMPT: &str =
    "Clearing the page will lose all unsaved data. Are you sure you wish to continue?";
pub const DEFAULT_LEAVE_PROMPT: &str =
    "Leaving the page will lose all unsaved data. Are you sure you wish to continue?";

/// Editor page configuration
///
/// Every field falls back to its default when missing from JSON or the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Route opened when the user abandons the page
    pub search_route: String,

    /// Prompt shown before discarding unsaved edits
    pub clear_prompt: String,

    /// Prompt shown before leaving the page
    pub leave_prompt: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            search_route: DEFAULT_SEARCH_ROUTE.to_string(),
            clear_prompt: DEFAULT_CLEAR_PROMPT.to_string(),
            leave_prompt: DEFAULT_LEAVE_PROMPT.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search route
    pub fn search_route(mut self, route: &str) -> Self {
        self.search_route = route.to_string();
        self
    }

    /// Set the clear prompt
    pub fn clear_prompt(mut self, prompt: &str) -> Self {
        self.clear_prompt = prompt.to_string();
        self
    }

    /// Set the leave prompt
    pub fn leave_prompt(mut self, prompt: &str) -> Self {
        self.leave_prompt = prompt.to_string();
        self
    }

    /// Reads `CATALOG_EDITOR_SEARCH_ROUTE`, `CATALOG_EDITOR_CLEAR_PROMPT`
    /// and `CATALOG_EDITOR_LEAVE_PROMPT`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            search_route: env_string("CATALOG_EDITOR_SEARCH_ROUTE", &defaults.search_route),
            clear_prompt: env_string("CATALOG_EDITOR_CLEAR_PROMPT", &defaults.clear_prompt),
            leave_prompt: env_string("CATALOG_EDITOR_LEAVE_PROMPT", &defaults.leave_prompt),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.search_route, "categoryproducts");
        assert!(config.clear_prompt.starts_with("Clearing the page"));
        assert!(config.leave_prompt.starts_with("Leaving the page"));
    }

    #[test]
    fn test_builder() {
        let config = EditorConfig::new().search_route("products").leave_prompt("Leave?");
        assert_eq!(config.search_route, "products");
        assert_eq!(config.leave_prompt, "Leave?");
        assert_eq!(config.clear_prompt, DEFAULT_CLEAR_PROMPT);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = EditorConfig::from_json(r#"{"search_route": "productsearch"}"#).unwrap();
        assert_eq!(config.search_route, "productsearch");
        assert_eq!(config.leave_prompt, DEFAULT_LEAVE_PROMPT);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = EditorConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
