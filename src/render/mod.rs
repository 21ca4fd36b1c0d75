//! Rendering engine with pluggable drawing surfaces.
//!
//! This module provides:
//! - The backend-agnostic `Surface` trait
//! - Frame drawing (axes + cell rectangles) against any surface
//! - Canvas 2D surface implementation (wasm32)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use frame::draw_frame;
pub use surface::{Surface, TextAlign};

/// Common colors used in plot rendering (CSS format)
pub mod palette {
    pub const WHITE: &str = "#ffffff";

    /// Grid line color between cell rectangles (light gray)
    pub const GRID_LINE: &str = "#e0e0e0";

    /// Axis label text color (dark gray)
    pub const AXIS_TEXT: &str = "#3c4043";
}
