//! The rectangle plot renderer.
//!
//! Owns at most one live plot per drawing surface and drives its whole
//! lifecycle: atomic `render`, size-only `redraw`, idempotent `destroy`,
//! and the pointer-driven hover/tooltip protocol. All work runs
//! synchronously on the caller's event loop; mutual exclusion comes from
//! always destroying the previous plot before installing its
//! replacement.

use serde::{Deserialize, Serialize};

use crate::cells::{transform, value_extent, Cell};
use crate::error::{HeatviewError, Result};
use crate::layout::PlotLayout;
use crate::render::{draw_frame, Surface};
use crate::scale::ColorScale;
use crate::tooltip::{TooltipColumn, TooltipView};

/// Default color range depth when the host does not configure one.
pub const DEFAULT_DEPTH: f64 = 0.8;

/// Default base color (the stock accent blue).
pub const DEFAULT_BASE_COLOR: &str = "#4472c4";

/// Color configuration for one render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ColorConfig {
    /// Base color lightened toward white by `depth` at the low end.
    Depth { base: String, depth: f64 },
    /// Two literal colors defining the range directly.
    Fixed { low: String, high: String },
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::Depth {
            base: DEFAULT_BASE_COLOR.to_string(),
            depth: DEFAULT_DEPTH,
        }
    }
}

impl ColorConfig {
    /// Build the color scale over the given value extent.
    fn build(&self, extent: Option<(f64, f64)>) -> Result<ColorScale> {
        match self {
            Self::Depth { base, depth } => ColorScale::depth(base, *depth, extent),
            Self::Fixed { low, high } => ColorScale::fixed(low, high, extent),
        }
    }
}

/// Input snapshot for one render.
///
/// The renderer owns everything in the spec for the duration of the
/// render; no reference back into host state is retained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlotSpec {
    /// The rectangular value matrix.
    pub matrix: Vec<Vec<f64>>,
    /// Value-to-color configuration.
    #[serde(default)]
    pub color: ColorConfig,
}

/// One cell with its resolved fill color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedCell {
    pub row: u32,
    pub col: u32,
    pub value: f64,
    /// Fill color as a `#rrggbb` literal.
    pub color: String,
}

/// A plot resolved to plain data: every cell with its color, plus the
/// scale the colors came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPlot {
    pub cells: Vec<ResolvedCell>,
    /// Interpolation domain `[min, max]`.
    pub domain: (f64, f64),
    /// Low-end color literal.
    pub low: String,
    /// High-end color literal.
    pub high: String,
}

/// Resolve a snapshot to cells and colors without a drawing surface.
///
/// This runs the same transform and scale build as `render` and is what
/// the CLI and the headless JS entry point use.
///
/// # Errors
/// Propagates `MalformedInput`, `InvalidParameter` and `InvalidColor`.
pub fn resolve(spec: &PlotSpec) -> Result<ResolvedPlot> {
    let cells = transform(&spec.matrix)?;
    let scale = spec.color.build(value_extent(&cells))?;
    Ok(ResolvedPlot {
        cells: cells
            .iter()
            .map(|c| ResolvedCell {
                row: c.row,
                col: c.col,
                value: c.value,
                color: scale.css_for(c.value),
            })
            .collect(),
        domain: scale.domain(),
        low: scale.low().to_hex(),
        high: scale.high().to_hex(),
    })
}

/// Hover protocol state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverState {
    /// Pointer is not over the plot body.
    Idle,
    /// Pointer is nearest to the cell at `(row, col)`.
    Hovering { row: u32, col: u32 },
}

/// The live, mutable state of one rendered plot.
struct PlotHandle {
    cells: Vec<Cell>,
    scale: ColorScale,
    columns: Vec<TooltipColumn>,
    layout: PlotLayout,
    hover: HoverState,
}

/// Renders and owns one plot on an injected surface and tooltip target.
///
/// The surface and tooltip target are exclusively owned by the renderer;
/// no other component writes to them while a plot is live.
pub struct PlotRenderer<S: Surface, T: TooltipView> {
    surface: S,
    tooltip: T,
    handle: Option<PlotHandle>,
    on_rendered: Option<Box<dyn FnMut()>>,
}

impl<S: Surface, T: TooltipView> PlotRenderer<S, T> {
    /// Take ownership of a drawing surface and a tooltip target.
    pub fn new(surface: S, tooltip: T) -> Self {
        Self {
            surface,
            tooltip,
            handle: None,
            on_rendered: None,
        }
    }

    /// Register the notification fired once after each successful
    /// `render`.
    pub fn on_rendered(&mut self, callback: impl FnMut() + 'static) {
        self.on_rendered = Some(Box::new(callback));
    }

    /// Render a fresh plot from the given snapshot.
    ///
    /// Fails atomically: cells and the color scale are built before the
    /// previous plot is touched, so a bad update leaves the displayed
    /// plot intact.
    ///
    /// # Errors
    /// Propagates `MalformedInput`, `InvalidParameter` and
    /// `InvalidColor` from the transform and scale build.
    pub fn render(&mut self, spec: &PlotSpec, columns: Vec<TooltipColumn>) -> Result<()> {
        let cells = transform(&spec.matrix)?;
        let scale = spec.color.build(value_extent(&cells))?;

        // Past this point nothing can fail; tear down the old plot.
        self.destroy();

        let (width, height) = self.surface.size();
        let layout = PlotLayout::compute(
            width,
            height,
            cells.iter().map(|c| c.row),
            cells.iter().map(|c| c.col),
        );

        draw_frame(&mut self.surface, &layout, &cells, &scale);

        let titles: Vec<String> = columns.iter().map(|c| c.title().to_string()).collect();
        self.tooltip.set_columns(&titles);
        self.tooltip.set_visible(false);

        self.handle = Some(PlotHandle {
            cells,
            scale,
            columns,
            layout,
            hover: HoverState::Idle,
        });

        if let Some(callback) = self.on_rendered.as_mut() {
            callback();
        }
        Ok(())
    }

    /// Re-measure the surface and re-render the current plot without
    /// rebuilding cells or scales. A no-op when no plot is live.
    pub fn redraw(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        let (width, height) = self.surface.size();
        handle.layout = PlotLayout::compute(
            width,
            height,
            handle.cells.iter().map(|c| c.row),
            handle.cells.iter().map(|c| c.col),
        );
        draw_frame(&mut self.surface, &handle.layout, &handle.cells, &handle.scale);

        // Geometry moved under the pointer; drop back to idle until the
        // next pointer event re-resolves the hovered cell.
        handle.hover = HoverState::Idle;
        self.tooltip.set_visible(false);
    }

    /// Release the current plot: clear the surface, hide the tooltip,
    /// drop the handle. Safe to call repeatedly or before any render.
    pub fn destroy(&mut self) {
        if self.handle.take().is_some() {
            self.surface.clear();
            self.tooltip.set_visible(false);
        }
    }

    /// Pointer moved to `(x, y)` in surface coordinates.
    ///
    /// Entering or changing the hovered cell replaces the tooltip
    /// content wholesale and shows it anchored to the cell. Events
    /// outside the plot body, or with no live plot, cause no transition.
    ///
    /// # Errors
    /// `TooltipBinding` when the resolved `(row, col)` matches zero or
    /// more than one cell, which violates the cell collection's
    /// uniqueness invariant.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<()> {
        let Some(handle) = self.handle.as_mut() else {
            return Ok(());
        };
        let Some((row, col)) = handle.layout.hit_test(x, y) else {
            return Ok(());
        };
        if handle.hover == (HoverState::Hovering { row, col }) {
            return Ok(());
        }

        let mut matches = handle
            .cells
            .iter()
            .filter(|c| c.row == row && c.col == col);
        let Some(cell) = matches.next() else {
            return Err(HeatviewError::TooltipBinding(format!(
                "no cell bound at ({row}, {col})"
            )));
        };
        if matches.next().is_some() {
            return Err(HeatviewError::TooltipBinding(format!(
                "multiple cells bound at ({row}, {col})"
            )));
        }

        let values: Vec<String> = handle.columns.iter().map(|c| c.evaluate(cell)).collect();
        self.tooltip.set_row(&values);
        if let Some((ax, ay)) = handle.layout.cell_anchor(row, col) {
            self.tooltip.set_position(ax, ay);
        }
        self.tooltip.set_visible(true);
        handle.hover = HoverState::Hovering { row, col };
        Ok(())
    }

    /// Pointer left the plot; hide the tooltip and return to idle.
    /// A no-op when no plot is live.
    pub fn pointer_exit(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        handle.hover = HoverState::Idle;
        self.tooltip.set_visible(false);
    }

    /// True while a plot is live on the surface.
    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    /// The currently hovered `(row, col)`, if any.
    pub fn hovered(&self) -> Option<(u32, u32)> {
        match self.handle.as_ref()?.hover {
            HoverState::Idle => None,
            HoverState::Hovering { row, col } => Some((row, col)),
        }
    }

    /// The live plot's cells.
    pub fn cells(&self) -> Option<&[Cell]> {
        self.handle.as_ref().map(|h| h.cells.as_slice())
    }

    /// The live plot's color scale.
    pub fn scale(&self) -> Option<&ColorScale> {
        self.handle.as_ref().map(|h| &h.scale)
    }

    /// The live plot's layout.
    pub fn layout(&self) -> Option<&PlotLayout> {
        self.handle.as_ref().map(|h| &h.layout)
    }

    /// The drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The drawing surface (mutable, e.g. for host-driven resizes).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The tooltip target.
    pub fn tooltip(&self) -> &T {
        &self.tooltip
    }
}
