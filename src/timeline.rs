//! Timeline controller
//!
//! Owns the loaded dataset, the view state, the configuration and the redraw
//! scheduler, and sequences the layout passes. The JS-facing session in
//! `api` is a thin wrapper around this type.

use crate::diagnostics::Diagnostics;
use crate::error::{Result, TimelineError};
use crate::html_layout::{
    ConnectionLayer, ConnectionRenderer, DisplayList, DisplayListLayout, LayoutConfig, LayoutProvider,
    RedrawScheduler, RedrawTicket, RedrawTrigger, TimelineLayoutEngine,
};
use crate::models::{MovementDetails, TimelineDataset, TimelineState};
use crate::renderers::SVGRenderer;

pub struct Timeline {
    dataset: Option<TimelineDataset>,
    state: TimelineState,
    config: LayoutConfig,
    engine: TimelineLayoutEngine,
    scheduler: RedrawScheduler,
    display_list: Option<DisplayList>,
}

impl Timeline {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            dataset: None,
            state: TimelineState::new(),
            config,
            engine: TimelineLayoutEngine::new(),
            scheduler: RedrawScheduler::new(),
            display_list: None,
        }
    }

    /// Decode and install a dataset, resetting all view state
    pub fn load_json(&mut self, json: &str) -> Result<usize> {
        let dataset = TimelineDataset::from_json_str(json)?;
        Ok(self.load(dataset))
    }

    pub fn load(&mut self, dataset: TimelineDataset) -> usize {
        let count = dataset.movements.len();
        self.dataset = Some(dataset);
        self.state = TimelineState::new();
        self.display_list = None;
        log::info!("Loaded {} movements", count);
        count
    }

    pub fn dataset(&self) -> Option<&TimelineDataset> {
        self.dataset.as_ref()
    }

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn display_list(&self) -> Option<&DisplayList> {
        self.display_list.as_ref()
    }

    pub fn validate(&self) -> Result<Diagnostics> {
        Ok(self.loaded()?.validate())
    }

    /// Full render pass: year range, lanes, bar placement
    pub fn render(&mut self) -> Result<&DisplayList> {
        let dataset = self.dataset.as_mut().ok_or(TimelineError::NoDataset)?;
        let list = self.engine.compute_layout(
            Some(&dataset.metadata),
            &mut dataset.movements,
            &mut self.state,
            &self.config,
        );
        Ok(&*self.display_list.insert(list))
    }

    /// Reposition bars after a zoom change, keeping the cached year range
    pub fn set_zoom(&mut self, zoom: f32) -> Result<&DisplayList> {
        self.config.zoom = zoom;
        self.config.zoom = self.config.clamped_zoom();
        self.reflow()
    }

    /// Reposition bars for a new base canvas width
    pub fn resize(&mut self, canvas_width: f32) -> Result<&DisplayList> {
        self.config.canvas_width = canvas_width;
        self.reflow()
    }

    fn reflow(&mut self) -> Result<&DisplayList> {
        let dataset = self.dataset.as_mut().ok_or(TimelineError::NoDataset)?;
        let list = self.engine.reflow(
            Some(&dataset.metadata),
            &mut dataset.movements,
            &mut self.state,
            &self.config,
        );
        Ok(&*self.display_list.insert(list))
    }

    /// Redraw the connection layer against measured bar rectangles
    pub fn draw_connections(&self, layout: &dyn LayoutProvider) -> Result<ConnectionLayer> {
        let dataset = self.loaded()?;
        let renderer = ConnectionRenderer::new(self.config.curve_style());
        Ok(renderer.draw(&dataset.movements, layout, &self.state))
    }

    /// Redraw the connection layer against the last display list
    pub fn draw_connections_from_layout(&self) -> Result<ConnectionLayer> {
        let list = self.display_list.as_ref().ok_or(TimelineError::NotRendered)?;
        self.draw_connections(&DisplayListLayout::new(list))
    }

    /// Toggle the persistent selection. Returns the new selection.
    pub fn select(&mut self, id: &str) -> Result<Option<String>> {
        self.ensure_known(id)?;
        let selected = self.state.toggle_selection(id).map(str::to_string);
        self.sync_selection();
        Ok(selected)
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
        self.sync_selection();
    }

    pub fn set_hover(&mut self, id: &str) -> Result<()> {
        self.ensure_known(id)?;
        self.state.set_hover(id);
        Ok(())
    }

    pub fn clear_hover(&mut self) {
        self.state.clear_hover();
    }

    pub fn request_redraw(&mut self, trigger: RedrawTrigger) -> RedrawTicket {
        self.scheduler.request(trigger, &self.config)
    }

    pub fn is_current(&self, ticket: &RedrawTicket) -> bool {
        self.scheduler.is_current(ticket)
    }

    pub fn is_current_generation(&self, generation: u64) -> bool {
        self.scheduler.generation() == generation
    }

    pub fn movement_details(&self, id: &str) -> Result<MovementDetails> {
        self.loaded()?.movement_details(id)
    }

    /// Standalone SVG of the last layout with its connection layer
    pub fn export_svg(&self) -> Result<String> {
        let list = self.display_list.as_ref().ok_or(TimelineError::NotRendered)?;
        let layer = self.draw_connections(&DisplayListLayout::new(list))?;
        SVGRenderer::render_timeline(list, &layer, self.config.axis_height)
    }

    fn sync_selection(&mut self) {
        if let Some(list) = self.display_list.as_mut() {
            list.sync_selection(&self.state);
        }
    }

    fn loaded(&self) -> Result<&TimelineDataset> {
        self.dataset.as_ref().ok_or(TimelineError::NoDataset)
    }

    fn ensure_known(&self, id: &str) -> Result<()> {
        match self.loaded()?.find(id) {
            Some(_) => Ok(()),
            None => Err(TimelineError::UnknownMovement(id.to_string())),
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
