//! Connection overlay
//!
//! Draws one arrow per (movement, connection) pair from the right-center of
//! the source bar to the left-center of the target bar. Bar rectangles come
//! from a `LayoutProvider`, so the geometry works the same against the live
//! DOM and against synthetic rectangles.
//!
//! Every call is a full redraw of the layer. Selection ("active") and hover
//! ("highlighted") are two independent layers read from `TimelineState`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::curves::{CurveRenderer, CurveStyle, Point};
use super::display_list::{ConnectionLayer, DisplayList, RenderConnection};
use crate::models::{Connection, Movement, TimelineState};

/// Axis-aligned rectangle in canvas-local pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right_center(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height / 2.0)
    }

    pub fn left_center(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2.0)
    }
}

/// Source of bar rectangles in the shared canvas coordinate space
pub trait LayoutProvider {
    /// Rectangle of the bar for `movement_id`, or None if it is not rendered
    fn bar_rect(&self, movement_id: &str) -> Option<Rect>;
}

impl<F> LayoutProvider for F
where
    F: Fn(&str) -> Option<Rect>,
{
    fn bar_rect(&self, movement_id: &str) -> Option<Rect> {
        self(movement_id)
    }
}

/// Layout provider that derives rectangles from a computed display list
pub struct DisplayListLayout<'a> {
    display_list: &'a DisplayList,
}

impl<'a> DisplayListLayout<'a> {
    pub fn new(display_list: &'a DisplayList) -> Self {
        Self { display_list }
    }
}

impl LayoutProvider for DisplayListLayout<'_> {
    fn bar_rect(&self, movement_id: &str) -> Option<Rect> {
        let width = self.display_list.canvas_width;
        self.display_list
            .bars
            .iter()
            .find(|bar| bar.movement_id == movement_id)
            .map(|bar| {
                Rect::new(
                    (bar.left_pct / 100.0) as f32 * width,
                    bar.top,
                    (bar.width_pct / 100.0) as f32 * width,
                    bar.height,
                )
            })
    }
}

/// Computes the connection layer
pub struct ConnectionRenderer {
    style: CurveStyle,
}

impl ConnectionRenderer {
    pub fn new(style: CurveStyle) -> Self {
        Self { style }
    }

    /// Redraw every edge. Edges whose source or target bar is missing are
    /// skipped and counted.
    pub fn draw(
        &self,
        movements: &[Movement],
        layout: &dyn LayoutProvider,
        state: &TimelineState,
    ) -> ConnectionLayer {
        let mut layer = ConnectionLayer::default();

        for edge in movements.iter().flat_map(Movement::edges) {
            let (Some(source), Some(target)) = (layout.bar_rect(edge.from), layout.bar_rect(edge.to)) else {
                log::debug!("Skipping connection {} -> {}: bar not rendered", edge.from, edge.to);
                layer.skipped += 1;
                continue;
            };
            layer.connections.push(self.render_edge(&edge, source, target, state));
        }

        layer.active_bars = Self::neighbourhood(movements, state.selected());
        layer.highlighted_bars = Self::neighbourhood(movements, state.hovered());

        log::debug!(
            "Drew {} connections ({} skipped)",
            layer.connections.len(),
            layer.skipped
        );

        layer
    }

    fn render_edge(&self, edge: &Connection<'_>, source: Rect, target: Rect, state: &TimelineState) -> RenderConnection {
        let curve = CurveRenderer::connection_curve(source.right_center(), target.left_center(), &self.style);
        let arrow = CurveRenderer::arrowhead(&curve, &self.style);

        let active = state.selected().is_some_and(|id| edge.touches(id));
        let highlighted = state.hovered().is_some_and(|id| edge.touches(id));

        let mut classes = vec!["connection".to_string(), edge.kind.css_class().to_string()];
        if active {
            classes.push("active".to_string());
        }
        if highlighted {
            classes.push("highlighted".to_string());
        }

        RenderConnection {
            from: edge.from.to_string(),
            to: edge.to.to_string(),
            kind: edge.kind.name().to_string(),
            desc: edge.desc.to_string(),
            start_x: curve.start.x,
            start_y: curve.start.y,
            end_x: curve.end.x,
            end_y: curve.end.y,
            cp1_x: curve.cp1.x,
            cp1_y: curve.cp1.y,
            cp2_x: curve.cp2.x,
            cp2_y: curve.cp2.y,
            path: CurveRenderer::svg_path(&curve),
            arrow: arrow.map(|p| (p.x, p.y)),
            arrow_points: CurveRenderer::svg_points(&arrow),
            color: edge.kind.color().to_string(),
            classes,
            active,
            highlighted,
        }
    }

    /// The movement itself plus every movement it shares an edge with
    fn neighbourhood(movements: &[Movement], id: Option<&str>) -> Vec<String> {
        let Some(id) = id else {
            return Vec::new();
        };

        let mut ids = BTreeSet::new();
        ids.insert(id.to_string());
        for edge in movements.iter().flat_map(Movement::edges) {
            if edge.from == id {
                ids.insert(edge.to.to_string());
            } else if edge.to == id {
                ids.insert(edge.from.to_string());
            }
        }
        ids.into_iter().collect()
    }
}

impl Default for ConnectionRenderer {
    fn default() -> Self {
        Self::new(CurveStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RelationKind;
    use std::collections::HashMap;

    fn rects() -> HashMap<String, Rect> {
        let mut map = HashMap::new();
        map.insert("a".to_string(), Rect::new(0.0, 0.0, 100.0, 20.0));
        map.insert("b".to_string(), Rect::new(200.0, 40.0, 50.0, 20.0));
        map.insert("c".to_string(), Rect::new(300.0, 0.0, 50.0, 20.0));
        map
    }

    fn movements() -> Vec<Movement> {
        vec![
            Movement::new("a", "A", "1900-1950").with_connection(RelationKind::Influence, "b", "x"),
            Movement::new("b", "B", "1950-1960").with_connection(RelationKind::Reaction, "c", "y"),
            Movement::new("c", "C", "1960-1990"),
        ]
    }

    #[test]
    fn test_endpoints_are_right_and_left_centers() {
        let rects = rects();
        let provider = |id: &str| rects.get(id).copied();
        let layer = ConnectionRenderer::default().draw(&movements(), &provider, &TimelineState::new());

        let first = &layer.connections[0];
        assert_eq!((first.start_x, first.start_y), (100.0, 10.0));
        assert_eq!((first.end_x, first.end_y), (200.0, 50.0));
        assert_eq!(first.cp1_y, 10.0);
        assert_eq!(first.cp2_y, 50.0);
        assert_eq!(first.color, RelationKind::Influence.color());
        assert!(first.classes.contains(&"connection-influence".to_string()));
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let mut rects = rects();
        rects.remove("c");
        let provider = |id: &str| rects.get(id).copied();
        let layer = ConnectionRenderer::default().draw(&movements(), &provider, &TimelineState::new());

        assert_eq!(layer.connections.len(), 1);
        assert_eq!(layer.skipped, 1);
    }

    #[test]
    fn test_hover_and_selection_are_independent_layers() {
        let rects = rects();
        let provider = |id: &str| rects.get(id).copied();
        let mut state = TimelineState::new();
        state.toggle_selection("a");
        state.set_hover("c");

        let layer = ConnectionRenderer::default().draw(&movements(), &provider, &state);
        assert!(layer.connections[0].active);
        assert!(!layer.connections[0].highlighted);
        assert!(!layer.connections[1].active);
        assert!(layer.connections[1].highlighted);
        assert_eq!(layer.active_bars, vec!["a", "b"]);
        assert_eq!(layer.highlighted_bars, vec!["b", "c"]);

        state.set_hover("b");
        let layer = ConnectionRenderer::default().draw(&movements(), &provider, &state);
        assert!(layer.connections[0].active && layer.connections[0].highlighted);

        state.clear_hover();
        let layer = ConnectionRenderer::default().draw(&movements(), &provider, &state);
        assert!(layer.connections[0].active);
        assert!(!layer.connections[0].highlighted);
        assert!(layer.highlighted_bars.is_empty());
    }

    #[test]
    fn test_display_list_layout_converts_percentages() {
        use crate::html_layout::{LayoutConfig, TimelineLayoutEngine};

        let mut movements = movements();
        let mut state = TimelineState::new();
        let config = LayoutConfig {
            canvas_width: 1000.0,
            reference_year: Some(2025),
            ..LayoutConfig::default()
        };
        let list = TimelineLayoutEngine::new().compute_layout(None, &mut movements, &mut state, &config);
        let layout = DisplayListLayout::new(&list);

        // Range 1900-1990, "a" spans 1900-1950
        let rect = layout.bar_rect("a").unwrap();
        assert!(rect.x.abs() < 1e-3);
        assert!((rect.width - 50.0 / 90.0 * 1000.0).abs() < 1e-2);
        assert!(layout.bar_rect("zz").is_none());
    }
}
