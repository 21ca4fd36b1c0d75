//! Canvas 2D drawing surface.
//!
//! Implements the `Surface` trait using the HTML Canvas 2D API via
//! web-sys. All drawing uses logical coordinates; the context is scaled
//! by the device pixel ratio at the start of every frame, since setting
//! the canvas buffer size resets the context state.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{HeatviewError, Result};
use crate::render::palette;
use crate::render::surface::{Surface, TextAlign};

const AXIS_FONT: &str = "500 11px -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

/// A `Surface` backed by an HTML canvas element.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f32,
}

impl CanvasSurface {
    /// Wrap a canvas element, acquiring its 2D context.
    ///
    /// # Errors
    /// Returns `Render` when the 2D context is unavailable.
    pub fn new(canvas: HtmlCanvasElement, dpr: f32) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| HeatviewError::Render("failed to acquire 2d context".to_string()))?
            .ok_or_else(|| HeatviewError::Render("canvas has no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HeatviewError::Render("unexpected context type".to_string()))?;

        Ok(Self {
            canvas,
            ctx,
            dpr: if dpr > 0.0 { dpr } else { 1.0 },
        })
    }

    /// Helper to get crisp pixel position for 1px lines
    fn crisp(x: f64) -> f64 {
        x.floor() + 0.5
    }
}

impl Surface for CanvasSurface {
    #[allow(clippy::cast_precision_loss)]
    fn size(&self) -> (f32, f32) {
        (
            self.canvas.width() as f32 / self.dpr,
            self.canvas.height() as f32 / self.dpr,
        )
    }

    fn clear(&mut self) {
        // Setting the buffer size resets the context transform, so a
        // host-driven resize between frames is handled here.
        let (w, h) = self.size();
        let _ = self.ctx.reset_transform();
        let _ = self.ctx.scale(f64::from(self.dpr), f64::from(self.dpr));
        self.ctx.set_fill_style_str(palette::WHITE);
        self.ctx.fill_rect(0.0, 0.0, f64::from(w), f64::from(h));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(f64::from(x), f64::from(y), f64::from(w), f64::from(h));
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(1.0);
        self.ctx.stroke_rect(
            Self::crisp(f64::from(x)),
            Self::crisp(f64::from(y)),
            f64::from(w),
            f64::from(h),
        );
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        self.ctx.set_font(AXIS_FONT);
        self.ctx.set_text_baseline("middle");
        self.ctx.set_text_align(match align {
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.ctx.set_fill_style_str(palette::AXIS_TEXT);
        let _ = self.ctx.fill_text(text, f64::from(x), f64::from(y));
    }
}
