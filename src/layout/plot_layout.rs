//! Pre-computed layout for one rendered plot.
//!
//! The plot is arranged as a 2×2 table: an empty corner and the x-axis
//! strip on top, the y-axis strip on the left, and the plot body in the
//! remaining rectangle. Positions are computed once per (re)layout,
//! enabling cheap rectangle and hit-test lookups afterwards.

use crate::scale::BandScale;

/// Height of the x-axis label strip along the top edge, in logical pixels.
pub const X_AXIS_HEIGHT: f32 = 24.0;

/// Width of the y-axis label strip along the left edge, in logical pixels.
pub const Y_AXIS_WIDTH: f32 = 36.0;

/// Rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl RectF {
    /// True when `(x, y)` falls inside the rectangle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Pre-computed layout data for one plot.
///
/// Row indices run along the top axis, column indices down the left one;
/// the same band scales place both the axis labels and the rectangles.
#[derive(Debug, Clone)]
pub struct PlotLayout {
    body: RectF,
    /// Horizontal scale over the distinct row indices.
    x_scale: BandScale,
    /// Vertical scale over the distinct column indices.
    y_scale: BandScale,
}

impl PlotLayout {
    /// Compute a layout for a surface of `width × height` logical pixels.
    ///
    /// A surface smaller than the axis strips clamps the body to zero
    /// size instead of failing; the plot then renders axes only.
    pub fn compute(
        width: f32,
        height: f32,
        rows: impl IntoIterator<Item = u32>,
        cols: impl IntoIterator<Item = u32>,
    ) -> Self {
        let body = RectF {
            x: Y_AXIS_WIDTH.min(width),
            y: X_AXIS_HEIGHT.min(height),
            width: (width - Y_AXIS_WIDTH).max(0.0),
            height: (height - X_AXIS_HEIGHT).max(0.0),
        };
        let x_scale = BandScale::new(rows, body.x, body.x + body.width);
        let y_scale = BandScale::new(cols, body.y, body.y + body.height);
        Self { body, x_scale, y_scale }
    }

    /// The plot body rectangle.
    pub fn body(&self) -> RectF {
        self.body
    }

    /// The horizontal (row-index) scale.
    pub fn x_scale(&self) -> &BandScale {
        &self.x_scale
    }

    /// The vertical (column-index) scale.
    pub fn y_scale(&self) -> &BandScale {
        &self.y_scale
    }

    /// Screen rectangle of the cell at `(row, col)`, or `None` when the
    /// pair is outside either scale's domain.
    pub fn cell_rect(&self, row: u32, col: u32) -> Option<RectF> {
        let x = self.x_scale.position(row)?;
        let y = self.y_scale.position(col)?;
        Some(RectF {
            x,
            y,
            width: self.x_scale.band_width(),
            height: self.y_scale.band_width(),
        })
    }

    /// Screen anchor of the cell at `(row, col)`: the band centers,
    /// used to position the tooltip.
    pub fn cell_anchor(&self, row: u32, col: u32) -> Option<(f32, f32)> {
        Some((self.x_scale.center(row)?, self.y_scale.center(col)?))
    }

    /// The `(row, col)` pair nearest the pointer at `(x, y)`, or `None`
    /// outside the plot body bounds.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        if !self.body.contains(x, y) {
            return None;
        }
        let row = self.x_scale.index_at(x)?;
        let col = self.y_scale.index_at(y)?;
        Some((row, col))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn square_layout() -> PlotLayout {
        PlotLayout::compute(Y_AXIS_WIDTH + 100.0, X_AXIS_HEIGHT + 100.0, 0..2, 0..2)
    }

    #[test]
    fn test_body_placement() {
        let layout = square_layout();
        let body = layout.body();
        assert_eq!(body.x, Y_AXIS_WIDTH);
        assert_eq!(body.y, X_AXIS_HEIGHT);
        assert_eq!(body.width, 100.0);
        assert_eq!(body.height, 100.0);
    }

    #[test]
    fn test_cell_rect() {
        let layout = square_layout();
        let rect = layout.cell_rect(1, 0).unwrap();
        assert_eq!(rect.x, Y_AXIS_WIDTH + 50.0);
        assert_eq!(rect.y, X_AXIS_HEIGHT);
        assert_eq!(rect.width, 50.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn test_cell_rect_outside_domain() {
        assert!(square_layout().cell_rect(5, 0).is_none());
    }

    #[test]
    fn test_hit_test_roundtrip() {
        let layout = square_layout();
        for row in 0..2 {
            for col in 0..2 {
                let (ax, ay) = layout.cell_anchor(row, col).unwrap();
                assert_eq!(layout.hit_test(ax, ay), Some((row, col)));
            }
        }
    }

    #[test]
    fn test_hit_test_outside_body() {
        let layout = square_layout();
        // Axis strips and the empty corner are not part of the body
        assert_eq!(layout.hit_test(5.0, 5.0), None);
        assert_eq!(layout.hit_test(Y_AXIS_WIDTH + 10.0, 5.0), None);
        assert_eq!(layout.hit_test(5.0, X_AXIS_HEIGHT + 10.0), None);
    }

    #[test]
    fn test_tiny_surface_clamps_body() {
        let layout = PlotLayout::compute(10.0, 10.0, 0..3, 0..3);
        let body = layout.body();
        assert_eq!(body.width, 0.0);
        assert_eq!(body.height, 0.0);
        assert_eq!(layout.hit_test(5.0, 5.0), None);
    }

    #[test]
    fn test_empty_domains() {
        let layout = PlotLayout::compute(200.0, 200.0, std::iter::empty(), std::iter::empty());
        assert!(layout.x_scale().is_empty());
        assert_eq!(layout.cell_rect(0, 0), None);
        assert_eq!(layout.hit_test(100.0, 100.0), None);
    }
}
