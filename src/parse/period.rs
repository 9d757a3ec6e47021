//! Period string parser
//!
//! Parses free-text ranges like `"1920-1960"`, `"1850"` or `"2000-présent"`
//! into a numeric `(start, end)` pair. Malformed input never errors; it
//! degrades to defaults.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Period used when the string is missing, empty, or has no leading year
pub const DEFAULT_PERIOD: ParsedPeriod = ParsedPeriod { start: 2000, end: 2025 };

/// Span assumed when a period has a start but no end
pub const DEFAULT_SPAN: i32 = 10;

/// Largest year accepted from a period string; anything above is malformed
pub const MAX_YEAR: i32 = 9999;

/// Markers meaning "still ongoing"
const PRESENT_MARKERS: [&str; 2] = ["présent", "present"];

/// A parsed year range
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedPeriod {
    pub start: i32,
    pub end: i32,
}

impl ParsedPeriod {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// True if the half-open intervals share more than a boundary point
    pub fn overlaps(&self, other: &ParsedPeriod) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Current calendar year from the wall clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Parse a period string, resolving "present" against `reference_year`.
///
/// Splits on the first `-`. The first part is the start year. A second
/// part containing "présent"/"present" ends at `reference_year`; any other
/// second part is parsed as the end year; no second part means
/// `start + 10`.
pub fn parse_period(period: Option<&str>, reference_year: i32) -> ParsedPeriod {
    let period = match period.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => return DEFAULT_PERIOD,
    };

    let mut parts = period.splitn(2, '-');
    let start_text = parts.next().unwrap_or_default();
    let end_text = parts.next();

    let Some(start) = parse_leading_year(start_text) else {
        log::warn!("Unparseable period '{}', using default", period);
        return DEFAULT_PERIOD;
    };

    let end = match end_text {
        Some(text) if is_present_marker(text) => reference_year,
        Some(text) => parse_leading_year(text).unwrap_or_else(|| {
            log::warn!("Unparseable end year in '{}', assuming {} years", period, DEFAULT_SPAN);
            start.saturating_add(DEFAULT_SPAN)
        }),
        None => start.saturating_add(DEFAULT_SPAN),
    };

    ParsedPeriod { start, end }
}

fn is_present_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    PRESENT_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Read an optionally signed run of digits at the start of `text`,
/// ignoring leading whitespace and any trailing characters ("1920s" -> 1920).
/// Years above `MAX_YEAR` are rejected.
fn parse_leading_year(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let digits_start = usize::from(text.starts_with('+'));
    let end = text[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| i + digits_start);

    text[digits_start..end]
        .parse()
        .ok()
        .filter(|year| *year <= MAX_YEAR)
}
