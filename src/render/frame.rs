//! Frame drawing: axes and cell rectangles.
//!
//! One frame is drawn per `render`/`redraw`. The layout supplies every
//! rectangle position; this module only issues surface primitives.

use crate::cells::Cell;
use crate::layout::{PlotLayout, X_AXIS_HEIGHT, Y_AXIS_WIDTH};
use crate::render::palette;
use crate::render::surface::{Surface, TextAlign};
use crate::scale::ColorScale;

/// Gap between an axis label and the plot body, in logical pixels.
const AXIS_LABEL_GAP: f32 = 6.0;

/// Draw a complete frame: clear, axis labels, then one filled rectangle
/// per cell with a hairline grid stroke.
///
/// An empty cell collection draws the axis strips only; an empty plot
/// is a valid frame, not an error.
pub fn draw_frame(
    surface: &mut dyn Surface,
    layout: &PlotLayout,
    cells: &[Cell],
    scale: &ColorScale,
) {
    surface.clear();

    draw_axes(surface, layout);

    for cell in cells {
        let Some(rect) = layout.cell_rect(cell.row, cell.col) else {
            continue;
        };
        if rect.width <= 0.0 || rect.height <= 0.0 {
            continue;
        }
        surface.fill_rect(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            &scale.css_for(cell.value),
        );
        surface.stroke_rect(rect.x, rect.y, rect.width, rect.height, palette::GRID_LINE);
    }
}

/// Draw the categorical axis labels: row indices along the top strip,
/// column indices down the left strip, centered per band.
fn draw_axes(surface: &mut dyn Surface, layout: &PlotLayout) {
    for &row in layout.x_scale().domain() {
        if let Some(center) = layout.x_scale().center(row) {
            surface.draw_text(
                &row.to_string(),
                center,
                X_AXIS_HEIGHT - AXIS_LABEL_GAP,
                TextAlign::Center,
            );
        }
    }
    for &col in layout.y_scale().domain() {
        if let Some(center) = layout.y_scale().center(col) {
            surface.draw_text(
                &col.to_string(),
                Y_AXIS_WIDTH - AXIS_LABEL_GAP,
                center,
                TextAlign::Right,
            );
        }
    }
}
