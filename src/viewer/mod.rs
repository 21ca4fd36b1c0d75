//! Main HeatView struct - the primary entry point for the Canvas 2D viewer.
//!
//! This module provides the WASM-exported `HeatView` struct that handles:
//! - Deserializing plot snapshots from JavaScript
//! - Coordinating the plot renderer with the canvas surface
//! - Forwarding pointer events into the hover/tooltip protocol
//!
//! Pointer handlers are registered when the viewer is created - no
//! manual JavaScript wiring required.

mod events;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent};

#[cfg(target_arch = "wasm32")]
use crate::plot::{PlotRenderer, PlotSpec};
#[cfg(target_arch = "wasm32")]
use crate::render::CanvasSurface;
#[cfg(target_arch = "wasm32")]
use crate::tooltip::{HtmlTooltip, TooltipColumn, TooltipColumnSpec};

/// Shared renderer state reachable from the event closures (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub(crate) type SharedPlot = Rc<RefCell<PlotRenderer<CanvasSurface, HtmlTooltip>>>;

/// The main viewer struct exported to JavaScript
#[wasm_bindgen]
pub struct HeatView {
    #[cfg(target_arch = "wasm32")]
    plot: SharedPlot,
    #[cfg(target_arch = "wasm32")]
    columns: Vec<TooltipColumnSpec>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)] // Kept so the registered listeners stay alive
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl HeatView {
    /// Create a new viewer over a canvas and a tooltip element.
    ///
    /// Pointer handlers (mousemove/mouseleave) are wired automatically;
    /// hover feedback works out of the box.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        tooltip: HtmlElement,
        dpr: f32,
    ) -> Result<HeatView, JsValue> {
        console_error_panic_hook::set_once();

        let surface = CanvasSurface::new(canvas.clone(), dpr)?;
        let plot: SharedPlot = Rc::new(RefCell::new(PlotRenderer::new(
            surface,
            HtmlTooltip::new(tooltip),
        )));

        let mut closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();

        // Pointer move (hover resolution + tooltip)
        {
            let plot = Rc::clone(&plot);
            let canvas_ref = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = canvas_ref.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                Self::internal_pointer_move(&plot, x, y);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Pointer exit (hide tooltip)
        {
            let plot = Rc::clone(&plot);
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                Self::internal_pointer_exit(&plot);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        Ok(HeatView {
            plot,
            columns: Vec::new(),
            closures,
        })
    }

    /// Render a plot from a snapshot:
    /// `{ matrix: number[][], color?: { mode, ... } }`.
    ///
    /// A failed load leaves the previously displayed plot intact.
    pub fn load(&mut self, spec: JsValue) -> Result<(), JsValue> {
        let spec: PlotSpec = serde_wasm_bindgen::from_value(spec)
            .map_err(|e| JsValue::from_str(&format!("Invalid plot spec: {e}")))?;
        let columns = self.build_columns();
        self.plot.borrow_mut().render(&spec, columns)?;
        Ok(())
    }

    /// Configure the tooltip columns shown on hover:
    /// `[{ title, field: "row"|"col"|"value", precision? }]`.
    /// Takes effect on the next `load`.
    #[wasm_bindgen(js_name = "setTooltipColumns")]
    pub fn set_tooltip_columns(&mut self, columns: JsValue) -> Result<(), JsValue> {
        self.columns = serde_wasm_bindgen::from_value(columns)
            .map_err(|e| JsValue::from_str(&format!("Invalid tooltip columns: {e}")))?;
        Ok(())
    }

    /// Register a callback fired once after each successful `load`.
    #[wasm_bindgen(js_name = "setOnRendered")]
    pub fn set_on_rendered(&mut self, callback: Function) {
        self.plot.borrow_mut().on_rendered(move || {
            let _ = callback.call0(&JsValue::NULL);
        });
    }

    /// Re-render after a container resize. A no-op before the first load.
    pub fn redraw(&mut self) {
        self.plot.borrow_mut().redraw();
    }

    /// Tear down the current plot. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.plot.borrow_mut().destroy();
    }

    fn build_columns(&self) -> Vec<TooltipColumn> {
        if self.columns.is_empty() {
            TooltipColumn::defaults()
        } else {
            self.columns
                .iter()
                .cloned()
                .map(TooltipColumnSpec::into_column)
                .collect()
        }
    }
}
