//! Timeline WASM API
//!
//! This module provides the JavaScript-facing API for the timeline.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and console logging
//! - `dom`: DOM bar measurement and layout-settled scheduling
//! - `session`: The `TimelineSession` class (render, connections, selection, zoom)
//! - `exports`: Stateless exports (period parsing, axis mapping)

pub mod helpers;
pub mod dom;
pub mod session;
pub mod exports;

pub use exports::*;
pub use session::TimelineSession;
pub use dom::DomLayoutProvider;
