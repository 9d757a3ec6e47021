//! Display List for Timeline Rendering
//!
//! This module defines the output structures returned from the layout engine to JavaScript.
//! The DisplayList contains all pre-calculated positions, dimensions, and classes needed
//! for JavaScript to render the bars and axis without any layout calculations.
//! The ConnectionLayer is the same idea for the arrow overlay.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::axis::YearRange;
use crate::models::TimelineState;

/// Bar class marking the persistent selection
pub const SELECTED_CLASS: &str = "selected";

/// Top-level display list containing all bar and axis rendering information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    /// Optional page header (dataset metadata)
    pub header: Option<TimelineHeader>,

    /// Year range the positions were computed against
    pub year_range: YearRange,

    /// Canvas width in pixels (base width times zoom)
    pub canvas_width: f32,

    /// Canvas height in pixels (axis plus all lanes)
    pub canvas_height: f32,

    /// Number of lanes used
    pub lane_count: usize,

    /// Decade tick marks
    pub ticks: Vec<RenderTick>,

    /// One bar per movement, in input order
    pub bars: Vec<RenderBar>,
}

impl DisplayList {
    /// Re-derive the selected bar class after the selection changed
    pub fn sync_selection(&mut self, state: &TimelineState) {
        for bar in &mut self.bars {
            bar.classes.retain(|class| class != SELECTED_CLASS);
            if state.is_selected(&bar.movement_id) {
                bar.classes.push(SELECTED_CLASS.to_string());
            }
        }
    }
}

/// Page header information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimelineHeader {
    pub title: String,
    pub subtitle: String,
    pub version: String,
}

/// A decade tick on the axis
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderTick {
    pub year: i32,

    /// Left offset as a percentage of the canvas width
    pub left_pct: f64,

    /// Label text
    pub label: String,
}

/// A single movement bar with all rendering information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderBar {
    pub movement_id: String,

    pub title: String,

    /// Parsed period
    pub start: i32,
    pub end: i32,

    pub lane: usize,

    /// Left offset as a percentage of the canvas width
    pub left_pct: f64,

    /// Width as a percentage of the canvas width
    pub width_pct: f64,

    /// Top offset in pixels (below the axis)
    pub top: f32,

    /// Bar height in pixels
    pub height: f32,

    /// CSS class names to apply
    pub classes: Vec<String>,

    /// Data attributes (data-* attributes)
    pub dataset: HashMap<String, String>,
}

/// Edge overlay produced by the connection renderer
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ConnectionLayer {
    pub connections: Vec<RenderConnection>,

    /// Bars that should carry the "highlighted" class (hover layer)
    pub highlighted_bars: Vec<String>,

    /// Bars that should carry the "active" class (selection layer)
    pub active_bars: Vec<String>,

    /// Edges dropped because an endpoint bar was not rendered
    pub skipped: usize,
}

/// A rendered directed edge with pre-computed Bezier control points
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderConnection {
    pub from: String,
    pub to: String,
    pub kind: String,
    pub desc: String,

    /// Right-center of the source bar
    pub start_x: f32,
    pub start_y: f32,

    /// Left-center of the target bar
    pub end_x: f32,
    pub end_y: f32,

    pub cp1_x: f32,
    pub cp1_y: f32,
    pub cp2_x: f32,
    pub cp2_y: f32,

    /// SVG path data for the curve
    pub path: String,

    /// Arrowhead triangle: tip, then the two back vertices
    pub arrow: [(f32, f32); 3],

    /// SVG points attribute for the arrowhead polygon
    pub arrow_points: String,

    /// Stroke color (hex string)
    pub color: String,

    /// CSS class names for path and arrowhead
    pub classes: Vec<String>,

    /// Edge touches the persistent selection
    pub active: bool,

    /// Edge touches the hovered movement
    pub highlighted: bool,
}
