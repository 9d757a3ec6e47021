//! Top-level dataset document (metadata + movements)

use serde::{Deserialize, Serialize};

use super::movement::{Connection, Movement};
use crate::diagnostics::{validate_dataset, Diagnostics};
use crate::error::{Result, TimelineError};

/// Dataset-level metadata shown in the page header
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    #[serde(default)]
    pub version: String,
}

/// The JSON document supplied by the data source
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TimelineDataset {
    #[serde(default)]
    pub metadata: Metadata,

    pub movements: Vec<Movement>,
}

/// Outgoing and incoming relationships of one movement
#[derive(Serialize, Clone, Debug)]
pub struct MovementDetails {
    pub movement: Movement,
    pub outgoing: Vec<RelationEntry>,
    pub incoming: Vec<RelationEntry>,
}

/// One row of the details panel
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RelationEntry {
    /// The other end of the edge
    pub movement_id: String,
    pub movement_title: String,
    pub kind: String,
    pub label: String,
    pub desc: String,
}

impl TimelineDataset {
    /// Decode a dataset without validating it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: TimelineDataset = serde_json::from_str(json)?;
        log::debug!("Decoded dataset with {} movements", dataset.movements.len());
        Ok(dataset)
    }

    /// Run validation and return the dataset only if no errors were found
    pub fn validated(self) -> Result<Self> {
        let diagnostics = self.validate();
        if diagnostics.has_errors() {
            let messages: Vec<String> = diagnostics
                .errors()
                .map(|mark| format!("{}: {}", mark.movement_id, mark.message))
                .collect();
            return Err(TimelineError::Validation(messages.join("; ")));
        }
        Ok(self)
    }

    pub fn validate(&self) -> Diagnostics {
        validate_dataset(self)
    }

    pub fn find(&self, id: &str) -> Option<&Movement> {
        self.movements.iter().find(|m| m.id == id)
    }

    /// All edges across all movements, in movement order
    pub fn edges(&self) -> impl Iterator<Item = Connection<'_>> {
        self.movements.iter().flat_map(|m| m.edges())
    }

    /// Details panel data for a movement
    pub fn movement_details(&self, id: &str) -> Result<MovementDetails> {
        let movement = self
            .find(id)
            .ok_or_else(|| TimelineError::UnknownMovement(id.to_string()))?;

        let entry = |other: &str, edge: &Connection<'_>| RelationEntry {
            movement_id: other.to_string(),
            movement_title: self
                .find(other)
                .map(|m| m.title.clone())
                .unwrap_or_else(|| other.to_string()),
            kind: edge.kind.name().to_string(),
            label: edge.kind.label().to_string(),
            desc: edge.desc.to_string(),
        };

        let outgoing = movement.edges().map(|edge| entry(edge.to, &edge)).collect();
        let incoming = self
            .edges()
            .filter(|edge| edge.to == id)
            .map(|edge| entry(edge.from, &edge))
            .collect();

        Ok(MovementDetails {
            movement: movement.clone(),
            outgoing,
            incoming,
        })
    }
}
