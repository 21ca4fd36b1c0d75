//! Layout engine for the rectangle plot.
//!
//! This module handles:
//! - The 2×2 table arrangement (axis strips + plot body)
//! - Pre-computing rectangle positions from the surface dimensions
//! - Inverse lookup for hit-testing at screen coordinates

mod plot_layout;

pub use plot_layout::{PlotLayout, RectF, X_AXIS_HEIGHT, Y_AXIS_WIDTH};
