//! SVG rendering output
//!
//! Exports the laid-out timeline (axis, bars, connection layer) as a
//! standalone SVG document.

pub mod elements;
pub mod document;

pub use elements::*;
pub use document::*;

use crate::error::Result;
use crate::html_layout::{ConnectionLayer, DisplayList};

/// SVG document generator
pub struct SVGRenderer;

impl SVGRenderer {
    pub fn render_timeline(list: &DisplayList, layer: &ConnectionLayer, axis_height: f32) -> Result<String> {
        let context = SvgDocumentContext::new(list, layer, axis_height);
        let svg = SVGDocumentGenerator::generate(&context)?;
        log::debug!(
            "Rendered SVG: {} bars, {} connections, {} bytes",
            context.bars.len(),
            context.connections.len(),
            svg.len()
        );
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html_layout::{ConnectionRenderer, DisplayListLayout, LayoutConfig, TimelineLayoutEngine};
    use crate::models::{Metadata, Movement, RelationKind, TimelineState};

    fn render(state: &mut TimelineState) -> String {
        let config = LayoutConfig {
            reference_year: Some(2025),
            ..LayoutConfig::default()
        };
        let metadata = Metadata {
            title: "Poésie & <Prose>".to_string(),
            ..Metadata::default()
        };
        let mut movements = vec![
            Movement::new("parnasse", "Parnasse", "1866-1900")
                .with_connection(RelationKind::Reaction, "symbolisme", "contre l'art pour l'art"),
            Movement::new("symbolisme", "Symbolisme", "1886-1920"),
        ];

        let list = TimelineLayoutEngine::new().compute_layout(Some(&metadata), &mut movements, state, &config);
        let layer = ConnectionRenderer::new(config.curve_style()).draw(&movements, &DisplayListLayout::new(&list), state);
        SVGRenderer::render_timeline(&list, &layer, config.axis_height).unwrap()
    }

    #[test]
    fn test_svg_contains_bars_and_connections() {
        let svg = render(&mut TimelineState::new());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"data-movement-id="parnasse""#));
        assert!(svg.contains(r#"data-movement-id="symbolisme""#));
        assert!(svg.contains("connection-reaction"));
        assert!(svg.contains("arrowhead"));
        assert!(svg.contains(">1860<"));
        assert!(svg.contains(">1920<"));
    }

    #[test]
    fn test_svg_escapes_text() {
        let svg = render(&mut TimelineState::new());
        assert!(svg.contains("Poésie &amp; &lt;Prose&gt;"));
        assert!(!svg.contains("<Prose>"));
    }

    #[test]
    fn test_svg_marks_active_connections() {
        let mut state = TimelineState::new();
        state.toggle_selection("symbolisme");
        let svg = render(&mut state);
        assert!(svg.contains("connection connection-reaction active"));
        assert!(svg.contains("selected"));
    }
}
