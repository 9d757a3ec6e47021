//! Models module for the timeline
//!
//! Data records supplied by the data source (movements, dataset metadata)
//! and the interaction state threaded through layout calls.

pub mod movement;
pub mod dataset;
pub mod timeline_state;

// Re-export commonly used types
pub use movement::*;
pub use dataset::*;
pub use timeline_state::TimelineState;
