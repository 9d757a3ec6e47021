//! Timeline-level layout computation
//!
//! This module contains the main entry point for layout calculations,
//! taking the movements and the view state and producing a DisplayList.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::axis::{generate_decades, YearRange};
use super::curves::CurveStyle;
use super::display_list::*;
use super::lanes::assign_lanes;
use crate::models::{Metadata, Movement, TimelineState};
use crate::parse::{current_year, parse_period, ParsedPeriod};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 4.0;

/// Configuration for layout calculations
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas width in pixels at zoom 1.0
    pub canvas_width: f32,

    /// Horizontal zoom factor, clamped to [MIN_ZOOM, MAX_ZOOM]
    pub zoom: f32,

    /// Vertical distance between lanes in pixels
    pub row_height: f32,

    /// Height of a bar in pixels
    pub bar_height: f32,

    /// Space reserved above the first lane for decade labels
    pub axis_height: f32,

    /// Arrowhead side length in pixels
    pub arrow_size: f32,

    /// Arrowhead half-angle in degrees
    pub arrow_half_angle_deg: f32,

    /// Bézier control point fractions of the horizontal span
    pub cp1_fraction: f32,
    pub cp2_fraction: f32,

    /// Fallback delay before measuring bars after a render
    pub layout_settle_ms: u32,

    /// Debounce for window resize redraws
    pub resize_debounce_ms: u32,

    /// Delay before redrawing connections after a zoom change
    pub zoom_delay_ms: u32,

    /// Year that "present" resolves to; wall clock when absent
    pub reference_year: Option<i32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 2400.0,
            zoom: 1.0,
            row_height: 60.0,
            bar_height: 44.0,
            axis_height: 40.0,
            arrow_size: 8.0,
            arrow_half_angle_deg: 30.0,
            cp1_fraction: 0.3,
            cp2_fraction: 0.7,
            layout_settle_ms: 100,
            resize_debounce_ms: 250,
            zoom_delay_ms: 50,
            reference_year: None,
        }
    }
}

impl LayoutConfig {
    pub fn clamped_zoom(&self) -> f32 {
        if self.zoom.is_finite() {
            self.zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            1.0
        }
    }

    /// Canvas width after zoom
    pub fn effective_width(&self) -> f32 {
        self.canvas_width * self.clamped_zoom()
    }

    /// Year used to resolve "present" in periods
    pub fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(current_year)
    }

    pub fn curve_style(&self) -> CurveStyle {
        CurveStyle {
            cp1_fraction: self.cp1_fraction,
            cp2_fraction: self.cp2_fraction,
            arrow_size: self.arrow_size,
            arrow_half_angle_deg: self.arrow_half_angle_deg,
        }
    }

    /// Top edge of a bar in the given lane
    pub fn lane_top(&self, lane: usize) -> f32 {
        self.axis_height + lane as f32 * self.row_height + (self.row_height - self.bar_height) / 2.0
    }
}

/// Main layout engine for computing display lists
#[derive(Default)]
pub struct TimelineLayoutEngine;

impl TimelineLayoutEngine {
    pub fn new() -> Self {
        Self
    }

    /// Full render pass.
    ///
    /// Recomputes the year range and lanes, caches the range in `state`,
    /// annotates each movement with its lane, and returns a complete
    /// display list. The caller replaces all rendered content with it.
    pub fn compute_layout(
        &self,
        metadata: Option<&Metadata>,
        movements: &mut [Movement],
        state: &mut TimelineState,
        config: &LayoutConfig,
    ) -> DisplayList {
        let reference_year = config.reference_year();
        let range = YearRange::from_movements(movements, reference_year);
        let assignment = assign_lanes(movements, reference_year);

        state.year_range = Some(range);
        state.lane_count = assignment.lane_count;

        log::info!(
            "Laid out {} movements over {}-{} in {} lanes",
            movements.len(),
            range.min_year,
            range.max_year,
            assignment.lane_count
        );

        self.place(metadata, movements, &assignment.periods, &assignment.lanes, range, assignment.lane_count, state, config)
    }

    /// Reposition bars after a zoom or resize.
    ///
    /// Reuses the cached year range and existing lanes so bars do not jump.
    /// Falls back to a full pass if nothing has been laid out yet.
    pub fn reflow(
        &self,
        metadata: Option<&Metadata>,
        movements: &mut [Movement],
        state: &mut TimelineState,
        config: &LayoutConfig,
    ) -> DisplayList {
        let lanes: Option<Vec<usize>> = movements.iter().map(|m| m.lane).collect();

        let (Some(range), Some(lanes)) = (state.year_range, lanes) else {
            log::debug!("No cached layout, running full pass");
            return self.compute_layout(metadata, movements, state, config);
        };

        let reference_year = config.reference_year();
        let periods: Vec<ParsedPeriod> = movements
            .iter()
            .map(|m| parse_period(m.period.as_deref(), reference_year))
            .collect();

        self.place(metadata, movements, &periods, &lanes, range, state.lane_count, state, config)
    }

    #[allow(clippy::too_many_arguments)]
    fn place(
        &self,
        metadata: Option<&Metadata>,
        movements: &[Movement],
        periods: &[ParsedPeriod],
        lanes: &[usize],
        range: YearRange,
        lane_count: usize,
        state: &TimelineState,
        config: &LayoutConfig,
    ) -> DisplayList {
        let ticks = generate_decades(range.min_year, range.max_year)
            .into_iter()
            .map(|year| RenderTick {
                year,
                left_pct: range.position(f64::from(year)),
                label: year.to_string(),
            })
            .collect();

        let bars = movements
            .iter()
            .zip(periods)
            .zip(lanes)
            .map(|((movement, period), &lane)| self.build_bar(movement, period, lane, range, state, config))
            .collect();

        DisplayList {
            header: metadata.map(|m| TimelineHeader {
                title: m.title.clone(),
                subtitle: m.subtitle.clone(),
                version: m.version.clone(),
            }),
            year_range: range,
            canvas_width: config.effective_width(),
            canvas_height: config.axis_height + lane_count as f32 * config.row_height,
            lane_count,
            ticks,
            bars,
        }
    }

    fn build_bar(
        &self,
        movement: &Movement,
        period: &ParsedPeriod,
        lane: usize,
        range: YearRange,
        state: &TimelineState,
        config: &LayoutConfig,
    ) -> RenderBar {
        let left_pct = range.position(f64::from(period.start));
        let width_pct = range.position(f64::from(period.end)) - left_pct;

        let mut classes = vec!["movement-bar".to_string(), format!("lane-{}", lane)];
        if state.is_selected(&movement.id) {
            classes.push(SELECTED_CLASS.to_string());
        }

        let mut dataset = HashMap::new();
        dataset.insert("movement-id".to_string(), movement.id.clone());
        dataset.insert("lane".to_string(), lane.to_string());
        dataset.insert("period".to_string(), format!("{}-{}", period.start, period.end));

        RenderBar {
            movement_id: movement.id.clone(),
            title: movement.title.clone(),
            start: period.start,
            end: period.end,
            lane,
            left_pct,
            width_pct,
            top: config.lane_top(lane),
            height: config.bar_height,
            classes,
            dataset,
        }
    }
}
