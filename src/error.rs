//! Structured error types for heatview.
//!
//! Every operation that can reject its input reports through this enum;
//! nothing is logged-and-ignored.

/// All errors that can occur while building or interacting with a plot.
#[derive(Debug, thiserror::Error)]
pub enum HeatviewError {
    /// The input matrix is ragged (rows of unequal length).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A configuration parameter is outside its valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A color literal could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Hover resolution matched zero or more than one cell.
    #[error("Tooltip binding: {0}")]
    TooltipBinding(String),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeatviewError>;

#[cfg(target_arch = "wasm32")]
impl From<HeatviewError> for wasm_bindgen::JsValue {
    fn from(e: HeatviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
