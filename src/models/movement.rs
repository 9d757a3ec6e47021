//! Movement records and their typed relationships
//!
//! A `Movement` is supplied by the data source already validated. The only
//! field the layout core writes is `lane`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of directed relationship between two movements
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Influence,
    Reaction,
    Evolution,
    Related,
}

impl RelationKind {
    pub fn name(&self) -> &'static str {
        match self {
            RelationKind::Influence => "influence",
            RelationKind::Reaction => "reaction",
            RelationKind::Evolution => "evolution",
            RelationKind::Related => "related",
        }
    }

    /// Stroke and arrowhead color (hex string)
    pub fn color(&self) -> &'static str {
        match self {
            RelationKind::Influence => "#3498db",
            RelationKind::Reaction => "#e74c3c",
            RelationKind::Evolution => "#27ae60",
            RelationKind::Related => "#95a5a6",
        }
    }

    /// CSS class for the edge path
    pub fn css_class(&self) -> &'static str {
        match self {
            RelationKind::Influence => "connection-influence",
            RelationKind::Reaction => "connection-reaction",
            RelationKind::Evolution => "connection-evolution",
            RelationKind::Related => "connection-related",
        }
    }

    /// Human label used in the details panel
    pub fn label(&self) -> &'static str {
        match self {
            RelationKind::Influence => "Influence",
            RelationKind::Reaction => "Réaction",
            RelationKind::Evolution => "Évolution",
            RelationKind::Related => "Lié à",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One outgoing relationship as stored on the source movement
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConnectionTarget {
    /// Target movement id
    pub to: String,

    /// Human description of the relationship
    #[serde(default)]
    pub desc: String,
}

/// Author gender tag
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A representative author of a movement
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Author {
    pub name: String,
    pub gender: Gender,
}

/// A literary movement record
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Movement {
    /// Unique, stable identifier referenced by connections
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Free-text year range, e.g. "1920-1960" or "2000-présent"
    #[serde(default)]
    pub period: Option<String>,

    /// Optional center year (display only)
    #[serde(default)]
    pub year: Option<f64>,

    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub works: Vec<String>,

    /// Outgoing relationships, keyed by kind
    #[serde(default)]
    pub connections: BTreeMap<RelationKind, Vec<ConnectionTarget>>,

    /// Row index computed by the lane assigner (never read from input)
    #[serde(default, skip_deserializing)]
    pub lane: Option<usize>,
}

impl Movement {
    /// Create a bare movement with an id, title and period
    pub fn new(id: impl Into<String>, title: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            period: Some(period.into()),
            year: None,
            authors: Vec::new(),
            works: Vec::new(),
            connections: BTreeMap::new(),
            lane: None,
        }
    }

    /// Builder-style helper to add an outgoing connection
    pub fn with_connection(mut self, kind: RelationKind, to: impl Into<String>, desc: impl Into<String>) -> Self {
        self.connections
            .entry(kind)
            .or_default()
            .push(ConnectionTarget { to: to.into(), desc: desc.into() });
        self
    }

    /// Iterate all outgoing edges in (kind, insertion) order
    pub fn edges(&self) -> impl Iterator<Item = Connection<'_>> {
        self.connections.iter().flat_map(move |(kind, targets)| {
            targets.iter().map(move |target| Connection {
                from: &self.id,
                to: &target.to,
                kind: *kind,
                desc: &target.desc,
            })
        })
    }
}

/// A directed edge borrowed from its source movement
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub kind: RelationKind,
    pub desc: &'a str,
}

impl Connection<'_> {
    /// Whether either endpoint is `id`
    pub fn touches(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }
}
