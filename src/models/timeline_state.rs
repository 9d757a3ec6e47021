//! Timeline interaction state
//!
//! Holds everything that used to be ambient page state: the persistent
//! selection, the transient hover, and the year range cached by the last
//! full layout pass. Owned by the session and passed explicitly into layout
//! and connection drawing.

use serde::{Deserialize, Serialize};

use crate::html_layout::axis::YearRange;

/// Complete timeline view state
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TimelineState {
    /// Persistently selected movement (click)
    pub selected: Option<String>,

    /// Movement under the pointer (hover)
    pub hovered: Option<String>,

    /// Year range computed by the last full layout pass
    pub year_range: Option<YearRange>,

    /// Number of lanes used by the last full layout pass
    pub lane_count: usize,
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Toggle selection: selecting the current selection clears it.
    /// Returns the new selection.
    pub fn toggle_selection(&mut self, id: &str) -> Option<&str> {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        self.selected.as_deref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn set_hover(&mut self, id: &str) {
        self.hovered = Some(id.to_string());
    }

    /// Clear the hover layer. Selection is untouched.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }
}
