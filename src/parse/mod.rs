//! Parsing module for the timeline
//!
//! Turns free-text period strings into numeric year ranges.

pub mod period;

pub use period::*;
