//! Crate error type.
//!
//! Nothing here is fatal to the page. Setup functions return these so the
//! boot sequence can log why a behavior was skipped, and event handlers log
//! them and carry on.

#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element: {selector}")]
    MissingElement { selector: String },
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl BehaviorError {
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }

    /// Whether this only reports an element the current page does not carry.
    #[must_use]
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for BehaviorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
