//! Redraw scheduling
//!
//! Position-dependent work (measuring bars for the connection layer) has to
//! wait until the browser has laid out the last render. Each trigger gets a
//! ticket carrying a generation number and a delay; when a ticket fires it
//! only runs if no newer ticket has been issued since.

use serde::{Deserialize, Serialize};

use super::document::LayoutConfig;

/// What caused a redraw request
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RedrawTrigger {
    Initial,
    Resize,
    Zoom,
    Selection,
}

impl RedrawTrigger {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "initial" => Some(RedrawTrigger::Initial),
            "resize" => Some(RedrawTrigger::Resize),
            "zoom" => Some(RedrawTrigger::Zoom),
            "selection" => Some(RedrawTrigger::Selection),
            _ => None,
        }
    }
}

/// A pending redraw
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedrawTicket {
    pub generation: u64,
    pub trigger: RedrawTrigger,

    /// Delay before running; 0 means "next frame"
    pub delay_ms: u32,
}

/// Issues tickets and tracks which one is current
#[derive(Clone, Debug, Default)]
pub struct RedrawScheduler {
    generation: u64,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding every earlier one
    pub fn request(&mut self, trigger: RedrawTrigger, config: &LayoutConfig) -> RedrawTicket {
        self.generation += 1;
        let delay_ms = match trigger {
            RedrawTrigger::Initial => config.layout_settle_ms,
            RedrawTrigger::Resize => config.resize_debounce_ms,
            RedrawTrigger::Zoom => config.zoom_delay_ms,
            // Selection does not move bars, nothing to wait for
            RedrawTrigger::Selection => 0,
        };
        RedrawTicket {
            generation: self.generation,
            trigger,
            delay_ms,
        }
    }

    pub fn is_current(&self, ticket: &RedrawTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
