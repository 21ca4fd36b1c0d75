//! heatview - 2-D heatmap plots for the web
//!
//! Renders numeric matrices as colored rectangle grids in the browser
//! via WebAssembly and Canvas 2D:
//! - Depth-derived or fixed two-color value scales
//! - Categorical axes sized to the container on every render
//! - Pointer hit-testing with a configurable hover tooltip
//! - Core logic (transform, scales, layout, hover protocol) is
//!   target-independent and testable natively
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { HeatView } from 'heatview';
//! await init();
//! const view = new HeatView(canvas, tooltip, dpr);
//! view.load({ matrix, color: { mode: 'depth', base: '#ff0000', depth: 0.5 } });
//! ```

// Core modules
pub mod cells;
pub mod color;
pub mod error;
pub mod plot;
pub mod scale;
pub mod tooltip;

// Layout and rendering modules (Canvas 2D)
pub mod layout;
pub mod render;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
pub use viewer::HeatView;

pub use cells::{transform, value_extent, Cell};
pub use error::{HeatviewError, Result};
pub use plot::{ColorConfig, PlotRenderer, PlotSpec};
pub use scale::{BandScale, ColorScale};

/// Resolve a plot snapshot to cells and colors and return a JSON string
///
/// # Arguments
/// * `spec` - JSON snapshot: `{ matrix: number[][], color?: {...} }`
///
/// # Errors
/// Returns an error if the snapshot is invalid or the matrix is ragged.
#[wasm_bindgen]
pub fn resolve_plot(spec: &str) -> std::result::Result<String, JsValue> {
    let spec: plot::PlotSpec = serde_json::from_str(spec)
        .map_err(|e| JsValue::from_str(&format!("Invalid plot spec: {e}")))?;
    let resolved = plot::resolve(&spec).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&resolved)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Resolve a plot snapshot and return the result as a `JsValue`
///
/// This is more efficient than `resolve_plot` when the result will be
/// used directly in JavaScript.
///
/// # Errors
/// Returns an error if the snapshot is invalid or the matrix is ragged.
#[wasm_bindgen]
pub fn resolve_plot_to_js(spec: JsValue) -> std::result::Result<JsValue, JsValue> {
    let spec: plot::PlotSpec = serde_wasm_bindgen::from_value(spec)
        .map_err(|e| JsValue::from_str(&format!("Invalid plot spec: {e}")))?;
    let resolved = plot::resolve(&spec).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&resolved)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
