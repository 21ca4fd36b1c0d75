//! Common test utilities and recording doubles.
//!
//! This module provides in-memory implementations of the drawing
//! surface and tooltip target so the full render and hover protocol can
//! be exercised natively, plus small assertion helpers.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use heatview::render::{Surface, TextAlign};
use heatview::tooltip::TooltipView;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    StrokeRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        align: TextAlign,
    },
}

/// A `Surface` that records operations instead of drawing.
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Simulate a host-driven container resize.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Operations recorded since the last clear (the current frame).
    pub fn frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    /// Fill colors of the current frame's rectangles, in draw order.
    pub fn frame_fill_colors(&self) -> Vec<String> {
        self.frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { color, .. } => Some(color.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of filled rectangles in the current frame.
    pub fn frame_fill_count(&self) -> usize {
        self.frame_fill_colors().len()
    }

    /// Axis label texts of the current frame, in draw order.
    pub fn frame_labels(&self) -> Vec<String> {
        self.frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            align,
        });
    }
}

/// A `TooltipView` that records its state instead of touching a DOM.
#[derive(Debug, Default)]
pub struct RecordingTooltip {
    pub titles: Vec<String>,
    pub values: Vec<String>,
    pub position: Option<(f32, f32)>,
    pub visible: bool,
    /// How many times the body row was rewritten.
    pub row_writes: usize,
}

impl RecordingTooltip {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TooltipView for RecordingTooltip {
    fn set_columns(&mut self, titles: &[String]) {
        self.titles = titles.to_vec();
    }

    fn set_row(&mut self, values: &[String]) {
        self.values = values.to_vec();
        self.row_writes += 1;
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.position = Some((x, y));
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
