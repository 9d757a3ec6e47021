//! Renderers module for the timeline
//!
//! This module contains export logic for converting a computed
//! layout into standalone output formats.

pub mod svg;

pub use svg::SVGRenderer;
