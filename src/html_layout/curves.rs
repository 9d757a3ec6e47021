//! Connection curve and arrowhead geometry (cubic Bézier)
//!
//! Edges leave the source horizontally and arrive at the target
//! horizontally: both control points sit at their endpoint's height.

use serde::{Deserialize, Serialize};

/// A point in canvas-local pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Cubic Bézier from `start` to `end`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CubicCurve {
    pub start: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub end: Point,
}

/// Geometry parameters for curves and arrowheads
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveStyle {
    /// Horizontal fraction of the span for the first control point
    pub cp1_fraction: f32,
    /// Horizontal fraction of the span for the second control point
    pub cp2_fraction: f32,
    /// Arrowhead side length in pixels
    pub arrow_size: f32,
    /// Angle between the shaft and each arrowhead side, in degrees
    pub arrow_half_angle_deg: f32,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            cp1_fraction: 0.3,
            cp2_fraction: 0.7,
            arrow_size: 8.0,
            arrow_half_angle_deg: 30.0,
        }
    }
}

/// Curve renderer for connection arrows
pub struct CurveRenderer;

impl CurveRenderer {
    /// Shallow S-curve between two points
    pub fn connection_curve(start: Point, end: Point, style: &CurveStyle) -> CubicCurve {
        let dx = end.x - start.x;
        CubicCurve {
            start,
            cp1: Point::new(start.x + dx * style.cp1_fraction, start.y),
            cp2: Point::new(start.x + dx * style.cp2_fraction, end.y),
            end,
        }
    }

    /// Triangle at the curve end, oriented from the second control point
    /// towards the endpoint. Returns `[tip, left, right]`.
    pub fn arrowhead(curve: &CubicCurve, style: &CurveStyle) -> [Point; 3] {
        let tip = curve.end;
        let angle = (tip.y - curve.cp2.y).atan2(tip.x - curve.cp2.x);
        let spread = style.arrow_half_angle_deg.to_radians();

        let back = |theta: f32| {
            Point::new(
                tip.x - style.arrow_size * theta.cos(),
                tip.y - style.arrow_size * theta.sin(),
            )
        };

        [tip, back(angle - spread), back(angle + spread)]
    }

    /// Generate SVG path data for a curve
    pub fn svg_path(curve: &CubicCurve) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            curve.start.x, curve.start.y,
            curve.cp1.x, curve.cp1.y,
            curve.cp2.x, curve.cp2.y,
            curve.end.x, curve.end.y
        )
    }

    /// Generate an SVG `points` attribute for a polygon
    pub fn svg_points(points: &[Point]) -> String {
        points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
