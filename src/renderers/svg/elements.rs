//! SVG element contexts
//!
//! Flattened, template-ready views of display list entries. Percentages are
//! converted to pixels against the canvas width.

use serde::Serialize;

use crate::html_layout::{DisplayList, RenderBar, RenderConnection, RenderTick};

/// Horizontal inset of a bar label
const LABEL_INSET: f32 = 6.0;

#[derive(Serialize, Debug, Clone)]
pub struct SvgTick {
    pub x: f32,
    pub y1: f32,
    pub y2: f32,
    pub label_y: f32,
    pub label: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct SvgBar {
    pub id: String,
    pub title: String,
    pub classes: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text_x: f32,
    pub text_y: f32,
}

#[derive(Serialize, Debug, Clone)]
pub struct SvgConnection {
    pub classes: String,
    pub path: String,
    pub arrow_points: String,
    pub color: String,
    pub desc: String,
    pub stroke_width: f32,
}

pub struct SVGElementRenderer;

impl SVGElementRenderer {
    pub fn tick(tick: &RenderTick, list: &DisplayList, axis_height: f32) -> SvgTick {
        SvgTick {
            x: pct_to_px(tick.left_pct, list.canvas_width),
            y1: axis_height,
            y2: list.canvas_height,
            label_y: axis_height / 2.0,
            label: tick.label.clone(),
        }
    }

    pub fn bar(bar: &RenderBar, list: &DisplayList) -> SvgBar {
        let x = pct_to_px(bar.left_pct, list.canvas_width);
        SvgBar {
            id: bar.movement_id.clone(),
            title: bar.title.clone(),
            classes: bar.classes.join(" "),
            x,
            y: bar.top,
            width: pct_to_px(bar.width_pct, list.canvas_width),
            height: bar.height,
            text_x: x + LABEL_INSET,
            text_y: bar.top + bar.height / 2.0 + 4.0,
        }
    }

    pub fn connection(connection: &RenderConnection) -> SvgConnection {
        let emphasized = connection.active || connection.highlighted;
        SvgConnection {
            classes: connection.classes.join(" "),
            path: connection.path.clone(),
            arrow_points: connection.arrow_points.clone(),
            color: connection.color.clone(),
            desc: connection.desc.clone(),
            stroke_width: if emphasized { 3.0 } else { 1.5 },
        }
    }
}

fn pct_to_px(pct: f64, width: f32) -> f32 {
    (pct / 100.0) as f32 * width
}
