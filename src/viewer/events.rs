//! Pointer event handlers for `HeatView`.
//!
//! All methods here are `pub(crate)` helpers called from the
//! wasm-exported public API that lives in `mod.rs`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use super::{HeatView, SharedPlot};

#[cfg(target_arch = "wasm32")]
impl HeatView {
    pub(crate) fn internal_pointer_move(plot: &SharedPlot, x: f32, y: f32) {
        // A binding failure means the cell collection violated its
        // uniqueness invariant; report it instead of rendering garbage.
        if let Err(e) = plot.borrow_mut().pointer_move(x, y) {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
        }
    }

    pub(crate) fn internal_pointer_exit(plot: &SharedPlot) {
        plot.borrow_mut().pointer_exit();
    }
}
