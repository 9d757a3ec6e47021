//! Dataset diagnostics - required fields, duplicate ids, dangling connections

use std::collections::HashSet;

use crate::models::{Movement, TimelineDataset};

use super::{DiagnosticMark, DiagnosticSeverity, Diagnostics};

/// Check a dataset the way the loader does before anything is rendered
///
/// Reports:
/// - Required text fields that are empty (id, title, period, description)
/// - Movements without a year (warning), author or work
/// - Duplicate ids
/// - Connections pointing at ids that do not exist, or at the movement itself (warning)
pub fn validate_dataset(dataset: &TimelineDataset) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let known: HashSet<&str> = dataset.movements.iter().map(|m| m.id.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, movement) in dataset.movements.iter().enumerate() {
        diagnostics.extend(check_fields(movement, index));

        if !movement.id.is_empty() && !seen.insert(movement.id.as_str()) {
            diagnostics.add(DiagnosticMark::new(
                &movement.id,
                index,
                DiagnosticSeverity::Error,
                "duplicate_id",
                format!("Duplicate movement id '{}'", movement.id),
            ));
        }

        for edge in movement.edges() {
            if !known.contains(edge.to) {
                diagnostics.add(DiagnosticMark::new(
                    &movement.id,
                    index,
                    DiagnosticSeverity::Error,
                    "unknown_target",
                    format!("{} connection points to unknown movement '{}'", edge.kind, edge.to),
                ));
            } else if edge.to == movement.id {
                diagnostics.add(DiagnosticMark::new(
                    &movement.id,
                    index,
                    DiagnosticSeverity::Warning,
                    "self_connection",
                    format!("{} connection points to itself", edge.kind),
                ));
            }
        }
    }

    if !diagnostics.is_empty() {
        log::warn!("Dataset validation found {} issue(s)", diagnostics.marks.len());
    }

    diagnostics
}

fn check_fields(movement: &Movement, index: usize) -> Vec<DiagnosticMark> {
    let mut marks = Vec::new();
    let mut missing = |field: &str| {
        marks.push(DiagnosticMark::new(
            &movement.id,
            index,
            DiagnosticSeverity::Error,
            "missing_field",
            format!("Movement #{} has an empty '{}'", index, field),
        ));
    };

    if movement.id.trim().is_empty() {
        missing("id");
    }
    if movement.title.trim().is_empty() {
        missing("title");
    }
    if movement.period.as_deref().map_or(true, |p| p.trim().is_empty()) {
        missing("period");
    }
    if movement.description.trim().is_empty() {
        missing("description");
    }
    if movement.authors.is_empty() {
        missing("authors");
    }
    if movement.works.is_empty() {
        missing("works");
    }

    if movement.year.is_none() {
        marks.push(DiagnosticMark::new(
            &movement.id,
            index,
            DiagnosticSeverity::Warning,
            "missing_year",
            "No center year given",
        ));
    }

    marks
}
