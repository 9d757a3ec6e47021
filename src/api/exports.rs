//! Stateless WASM exports
//!
//! Pure helpers the page can call without a session (axis labels, tooltips).

use wasm_bindgen::prelude::*;

use super::helpers::serialize;
use crate::html_layout::axis;
use crate::parse::{current_year, parse_period};

/// Parse a period string. `reference_year` resolves "présent"; the current
/// year is used when it is omitted. Returns `{ start, end }`.
#[wasm_bindgen(js_name = parsePeriod)]
pub fn parse_period_js(period: Option<String>, reference_year: Option<i32>) -> Result<JsValue, JsValue> {
    let parsed = parse_period(period.as_deref(), reference_year.unwrap_or_else(current_year));
    serialize(&parsed, "Failed to serialize period")
}

#[wasm_bindgen(js_name = yearToPosition)]
pub fn year_to_position(year: f64, min_year: i32, max_year: i32) -> f64 {
    axis::year_to_position(year, min_year, max_year)
}

#[wasm_bindgen(js_name = generateDecades)]
pub fn generate_decades(min_year: i32, max_year: i32) -> Vec<i32> {
    axis::generate_decades(min_year, max_year)
}
