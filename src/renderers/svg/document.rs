//! SVG document generation
//!
//! Renders a complete standalone SVG through a Mustache template. The
//! template engine escapes every interpolated value, so movement titles and
//! descriptions can contain markup characters.

use serde::Serialize;

use super::elements::{SVGElementRenderer, SvgBar, SvgConnection, SvgTick};
use crate::error::Result;
use crate::html_layout::{ConnectionLayer, DisplayList};

const TIMELINE_TEMPLATE: &str = include_str!("templates/timeline.svg.mustache");

/// Context data for template rendering
#[derive(Serialize, Debug, Clone)]
pub struct SvgDocumentContext {
    pub width: f32,
    pub height: f32,
    pub has_title: bool,
    pub title: String,
    pub ticks: Vec<SvgTick>,
    pub bars: Vec<SvgBar>,
    pub connections: Vec<SvgConnection>,
}

impl SvgDocumentContext {
    pub fn new(list: &DisplayList, layer: &ConnectionLayer, axis_height: f32) -> Self {
        let title = list.header.as_ref().map(|h| h.title.clone()).unwrap_or_default();
        Self {
            width: list.canvas_width,
            height: list.canvas_height,
            has_title: !title.is_empty(),
            title,
            ticks: list
                .ticks
                .iter()
                .map(|t| SVGElementRenderer::tick(t, list, axis_height))
                .collect(),
            bars: list.bars.iter().map(|b| SVGElementRenderer::bar(b, list)).collect(),
            connections: layer.connections.iter().map(SVGElementRenderer::connection).collect(),
        }
    }
}

pub struct SVGDocumentGenerator;

impl SVGDocumentGenerator {
    pub fn generate(context: &SvgDocumentContext) -> Result<String> {
        let template = mustache::compile_str(TIMELINE_TEMPLATE)?;
        Ok(template.render_to_string(context)?)
    }
}
