//! `TimelineSession` - the JavaScript-facing timeline object
//!
//! The page creates one session, loads the dataset into it, and routes every
//! render and interaction call through it. All view state lives here; there
//! is no module-level state.

use wasm_bindgen::prelude::*;

use super::dom::{schedule, DomLayoutProvider};
use super::helpers::{deserialize, now_ms, serialize, timeline_error, validation_error};
use crate::html_layout::{LayoutConfig, RedrawTrigger};
use crate::timeline::Timeline;
use crate::{wasm_info, wasm_log, wasm_warn};

#[wasm_bindgen]
pub struct TimelineSession {
    timeline: Timeline,
}

#[wasm_bindgen]
impl TimelineSession {
    /// Create a session. `config` may be a partial LayoutConfig or undefined.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TimelineSession, JsValue> {
        let config: LayoutConfig = if config.is_undefined() || config.is_null() {
            LayoutConfig::default()
        } else {
            deserialize(config, "Invalid layout config")?
        };
        wasm_info!("TimelineSession created (zoom {}, canvas {}px)", config.zoom, config.canvas_width);
        Ok(TimelineSession {
            timeline: Timeline::new(config),
        })
    }

    /// Load the dataset JSON text. Returns the number of movements.
    #[wasm_bindgen(js_name = loadDataset)]
    pub fn load_dataset(&mut self, json: &str) -> Result<usize, JsValue> {
        self.timeline
            .load_json(json)
            .map_err(|e| timeline_error("loadDataset", e))
    }

    /// Run dataset checks. Returns `{ marks: [...] }`.
    #[wasm_bindgen(js_name = validateDataset)]
    pub fn validate_dataset(&self) -> Result<JsValue, JsValue> {
        let diagnostics = self
            .timeline
            .validate()
            .map_err(|e| timeline_error("validateDataset", e))?;
        if diagnostics.has_errors() {
            wasm_warn!("Dataset has {} error(s)", diagnostics.errors().count());
        }
        serialize(&diagnostics, "Failed to serialize diagnostics")
    }

    /// Full render pass. Returns the display list.
    #[wasm_bindgen(js_name = renderTimeline)]
    pub fn render_timeline(&mut self) -> Result<JsValue, JsValue> {
        let started = now_ms();
        let list = self
            .timeline
            .render()
            .map_err(|e| timeline_error("renderTimeline", e))?;
        wasm_log!(
            "renderTimeline: {} bars in {} lanes ({:.1}ms)",
            list.bars.len(),
            list.lane_count,
            now_ms() - started
        );
        serialize(list, "Failed to serialize display list")
    }

    /// Redraw connections by measuring bars inside the canvas element
    #[wasm_bindgen(js_name = drawConnections)]
    pub fn draw_connections(&self, canvas_id: &str) -> Result<JsValue, JsValue> {
        let provider = DomLayoutProvider::from_canvas_id(canvas_id)
            .ok_or_else(|| validation_error(format!("Canvas element '{}' not found", canvas_id)))?;
        let layer = self
            .timeline
            .draw_connections(&provider)
            .map_err(|e| timeline_error("drawConnections", e))?;
        if layer.skipped > 0 {
            wasm_log!("drawConnections: skipped {} edge(s) with unrendered bars", layer.skipped);
        }
        serialize(&layer, "Failed to serialize connection layer")
    }

    /// Redraw connections from the computed layout, without touching the DOM
    #[wasm_bindgen(js_name = drawConnectionsFromLayout)]
    pub fn draw_connections_from_layout(&self) -> Result<JsValue, JsValue> {
        let layer = self
            .timeline
            .draw_connections_from_layout()
            .map_err(|e| timeline_error("drawConnectionsFromLayout", e))?;
        serialize(&layer, "Failed to serialize connection layer")
    }

    /// Toggle the persistent selection. Returns the new selection or null.
    #[wasm_bindgen(js_name = selectMovement)]
    pub fn select_movement(&mut self, id: &str) -> Result<Option<String>, JsValue> {
        self.timeline
            .select(id)
            .map_err(|e| timeline_error("selectMovement", e))
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.timeline.clear_selection();
    }

    #[wasm_bindgen(js_name = getSelection)]
    pub fn get_selection(&self) -> Option<String> {
        self.timeline.state().selected().map(str::to_string)
    }

    #[wasm_bindgen(js_name = setHover)]
    pub fn set_hover(&mut self, id: &str) -> Result<(), JsValue> {
        self.timeline
            .set_hover(id)
            .map_err(|e| timeline_error("setHover", e))
    }

    #[wasm_bindgen(js_name = clearHover)]
    pub fn clear_hover(&mut self) {
        self.timeline.clear_hover();
    }

    /// Change zoom and reflow bars against the cached year range
    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&mut self, zoom: f32) -> Result<JsValue, JsValue> {
        let list = self
            .timeline
            .set_zoom(zoom)
            .map_err(|e| timeline_error("setZoom", e))?;
        serialize(list, "Failed to serialize display list")
    }

    /// Change the base canvas width and reflow bars
    #[wasm_bindgen(js_name = resize)]
    pub fn resize(&mut self, canvas_width: f32) -> Result<JsValue, JsValue> {
        let list = self
            .timeline
            .resize(canvas_width)
            .map_err(|e| timeline_error("resize", e))?;
        serialize(list, "Failed to serialize display list")
    }

    /// Issue a redraw ticket for a trigger name
    /// ("initial", "resize", "zoom", "selection")
    #[wasm_bindgen(js_name = requestRedraw)]
    pub fn request_redraw(&mut self, trigger: &str) -> Result<JsValue, JsValue> {
        let trigger = parse_trigger(trigger)?;
        let ticket = self.timeline.request_redraw(trigger);
        serialize(&ticket, "Failed to serialize redraw ticket")
    }

    /// Issue a ticket and call `callback(generation)` when it is due.
    /// The callback should check `isCurrent(generation)` before drawing.
    #[wasm_bindgen(js_name = scheduleRedraw)]
    pub fn schedule_redraw(&mut self, trigger: &str, callback: js_sys::Function) -> Result<f64, JsValue> {
        let trigger = parse_trigger(trigger)?;
        let ticket = self.timeline.request_redraw(trigger);
        schedule(ticket, callback)?;
        Ok(ticket.generation as f64)
    }

    #[wasm_bindgen(js_name = isCurrent)]
    pub fn is_current(&self, generation: f64) -> bool {
        self.timeline.is_current_generation(generation as u64)
    }

    #[wasm_bindgen(js_name = movementDetails)]
    pub fn movement_details(&self, id: &str) -> Result<JsValue, JsValue> {
        let details = self
            .timeline
            .movement_details(id)
            .map_err(|e| timeline_error("movementDetails", e))?;
        serialize(&details, "Failed to serialize movement details")
    }

    #[wasm_bindgen(js_name = exportSvg)]
    pub fn export_svg(&self) -> Result<String, JsValue> {
        self.timeline
            .export_svg()
            .map_err(|e| timeline_error("exportSvg", e))
    }
}

fn parse_trigger(name: &str) -> Result<RedrawTrigger, JsValue> {
    RedrawTrigger::from_name(name)
        .ok_or_else(|| validation_error(format!("Unknown redraw trigger '{}'", name)))
}
