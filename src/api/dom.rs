//! Browser-side measurement and scheduling
//!
//! `DomLayoutProvider` reads rendered bar rectangles relative to the
//! timeline canvas, so connection endpoints stay valid when the canvas
//! scrolls or zooms. `schedule` defers a callback until layout has settled.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::html_layout::{LayoutProvider, Rect, RedrawTicket};

/// Measures bars rendered as `[data-movement-id]` elements inside a canvas
pub struct DomLayoutProvider {
    canvas: Element,
}

impl DomLayoutProvider {
    pub fn new(canvas: Element) -> Self {
        Self { canvas }
    }

    /// Look up the canvas by element id
    pub fn from_canvas_id(canvas_id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        document.get_element_by_id(canvas_id).map(Self::new)
    }

    fn bar_element(&self, movement_id: &str) -> Option<Element> {
        let escaped = movement_id.replace('\\', "\\\\").replace('"', "\\\"");
        let selector = format!("[data-movement-id=\"{}\"]", escaped);
        self.canvas.query_selector(&selector).ok().flatten()
    }
}

impl LayoutProvider for DomLayoutProvider {
    fn bar_rect(&self, movement_id: &str) -> Option<Rect> {
        let bar = self.bar_element(movement_id)?;
        let canvas_rect = self.canvas.get_bounding_client_rect();
        let rect = bar.get_bounding_client_rect();

        Some(Rect::new(
            (rect.left() - canvas_rect.left() + f64::from(self.canvas.scroll_left())) as f32,
            (rect.top() - canvas_rect.top() + f64::from(self.canvas.scroll_top())) as f32,
            rect.width() as f32,
            rect.height() as f32,
        ))
    }
}

/// Run `callback(generation)` once the ticket's delay has passed.
///
/// A zero delay waits for the next animation frame (layout has settled by
/// then); otherwise `setTimeout` is used as the fallback.
pub fn schedule(ticket: RedrawTicket, callback: js_sys::Function) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let generation = ticket.generation;

    let run = Closure::once_into_js(move || {
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_f64(generation as f64)) {
            crate::wasm_error!("Redraw callback failed: {:?}", err);
        }
    });
    let run: &js_sys::Function = run.unchecked_ref();

    if ticket.delay_ms == 0 {
        window.request_animation_frame(run)?;
    } else {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(run, ticket.delay_ms as i32)?;
    }
    Ok(())
}
