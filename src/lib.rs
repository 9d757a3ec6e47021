//! Literary Movements Timeline WASM Module
//!
//! Computes the layout of an interactive timeline: movements are packed into
//! non-overlapping lanes on a decade axis, and relationships between them are
//! drawn as curved arrows. JavaScript renders what this module returns.

pub mod error;
pub mod models;
pub mod parse;
pub mod html_layout;
pub mod diagnostics;
pub mod renderers;
pub mod timeline;
pub mod api;

// Re-export commonly used types
pub use error::{Result, TimelineError};
pub use models::*;
pub use html_layout::{
    ConnectionLayer, ConnectionRenderer, DisplayList, LayoutConfig, LayoutProvider, Rect,
    TimelineLayoutEngine, YearRange,
};
pub use parse::{parse_period, ParsedPeriod};
pub use timeline::Timeline;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        // A logger may already be installed by the host page
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("[WASM] logger not installed: {}", err).into());
        }
    }

    log::info!("Timeline WASM module initialized");
}
