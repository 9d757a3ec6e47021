//! HTML Layout Engine
//!
//! This module computes layout for the timeline page, generating a DisplayList
//! (axis ticks and movement bars) and a ConnectionLayer (relationship arrows)
//! with all positioning and classes needed for JavaScript to render.

pub mod axis;
pub mod lanes;
pub mod document;
pub mod display_list;
pub mod curves;
pub mod connections;
pub mod schedule;

pub use axis::{generate_decades, year_to_position, YearRange};
pub use lanes::{assign_lanes, pack_intervals, LaneAssignment};
pub use document::{LayoutConfig, TimelineLayoutEngine};
pub use display_list::{ConnectionLayer, DisplayList, RenderBar, RenderConnection, RenderTick, TimelineHeader};
pub use connections::{ConnectionRenderer, DisplayListLayout, LayoutProvider, Rect};
pub use schedule::{RedrawScheduler, RedrawTicket, RedrawTrigger};
