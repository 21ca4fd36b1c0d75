//! Scales mapping data onto screen positions and colors.
//!
//! This module handles:
//! - Categorical band scales for the two plot axes
//! - The value-to-color scale (depth-derived or fixed-endpoint)

mod band;
mod color_scale;

pub use band::BandScale;
pub use color_scale::ColorScale;
