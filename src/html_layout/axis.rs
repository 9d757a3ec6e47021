//! Time axis: global year range, decade ticks, year -> percentage mapping

use serde::{Deserialize, Serialize};

use crate::models::Movement;
use crate::parse::{parse_period, DEFAULT_PERIOD};

/// Tick spacing, and the rounding unit of the year range
pub const DECADE: i32 = 10;

/// Ticks are only generated within `[-AXIS_LIMIT, AXIS_LIMIT]`
pub const AXIS_LIMIT: i32 = 20_000;

/// Global bounds of the timeline, rounded outward to whole decades
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearRange {
    pub min_year: i32,
    pub max_year: i32,
}

impl YearRange {
    /// Round `min` down and `max` up to the nearest multiple of ten
    pub fn rounded(min: i32, max: i32) -> Self {
        Self {
            min_year: saturate(i64::from(min).div_euclid(DECADE_I64) * DECADE_I64),
            max_year: saturate((i64::from(max) + DECADE_I64 - 1).div_euclid(DECADE_I64) * DECADE_I64),
        }
    }

    /// Fold parsed periods over all movements.
    ///
    /// An empty collection yields the range of the default period.
    pub fn from_movements(movements: &[Movement], reference_year: i32) -> Self {
        let bounds = movements
            .iter()
            .map(|m| parse_period(m.period.as_deref(), reference_year))
            .fold(None, |acc: Option<(i32, i32)>, p| match acc {
                Some((min, max)) => Some((min.min(p.start), max.max(p.end))),
                None => Some((p.start, p.end)),
            });

        let (min, max) = bounds.unwrap_or((DEFAULT_PERIOD.start, DEFAULT_PERIOD.end));
        Self::rounded(min, max)
    }

    pub fn position(&self, year: f64) -> f64 {
        year_to_position(year, self.min_year, self.max_year)
    }
}

const DECADE_I64: i64 = DECADE as i64;

fn saturate(year: i64) -> i32 {
    year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Decade ticks from `min_year` to `max_year` inclusive, clamped to the
/// axis limit
pub fn generate_decades(min_year: i32, max_year: i32) -> Vec<i32> {
    let min_year = min_year.max(-AXIS_LIMIT);
    let max_year = max_year.min(AXIS_LIMIT);
    if min_year > max_year {
        return Vec::new();
    }
    (min_year..=max_year).step_by(DECADE as usize).collect()
}

/// Linear map of a year onto `[0, 100]` across the range.
///
/// Years outside the range extrapolate. A degenerate range maps every
/// year to 0.
pub fn year_to_position(year: f64, min_year: i32, max_year: i32) -> f64 {
    let span = f64::from(max_year) - f64::from(min_year);
    if span == 0.0 {
        return 0.0;
    }
    (year - f64::from(min_year)) / span * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rounds_outward() {
        let movements = vec![
            Movement::new("romantisme", "Romantisme", "1818-1920"),
            Movement::new("contemporain", "Contemporain", "2000-présent"),
        ];
        let range = YearRange::from_movements(&movements, 2025);
        assert_eq!(range, YearRange { min_year: 1810, max_year: 2030 });
    }

    #[test]
    fn test_range_keeps_exact_decades() {
        assert_eq!(YearRange::rounded(1900, 1950), YearRange { min_year: 1900, max_year: 1950 });
        assert_eq!(YearRange::rounded(-45, 12), YearRange { min_year: -50, max_year: 20 });
    }

    #[test]
    fn test_empty_range_uses_default_period() {
        let range = YearRange::from_movements(&[], 2025);
        assert_eq!(range, YearRange { min_year: 2000, max_year: 2030 });
    }

    #[test]
    fn test_generate_decades_inclusive() {
        assert_eq!(generate_decades(1810, 1850), vec![1810, 1820, 1830, 1840, 1850]);
        assert_eq!(generate_decades(1900, 1900), vec![1900]);
        assert!(generate_decades(1950, 1900).is_empty());
    }

    #[test]
    fn test_range_near_year_limit_does_not_overflow() {
        let movements = vec![Movement::new("a", "A", "2147483640-2147483645")];
        let range = YearRange::from_movements(&movements, 2025);
        assert_eq!(range, YearRange { min_year: 2000, max_year: 2030 });

        let range = YearRange::rounded(i32::MIN + 5, i32::MAX);
        assert_eq!(range, YearRange { min_year: i32::MIN, max_year: i32::MAX });
        assert!(year_to_position(0.0, range.min_year, range.max_year).is_finite());
    }

    #[test]
    fn test_generate_decades_is_bounded() {
        let ticks = generate_decades(0, 2_000_000_000);
        assert_eq!(ticks.first(), Some(&0));
        assert_eq!(ticks.last(), Some(&AXIS_LIMIT));
        assert_eq!(ticks.len(), (AXIS_LIMIT / DECADE) as usize + 1);
        assert!(generate_decades(i32::MIN, i32::MAX).len() <= (2 * AXIS_LIMIT / DECADE) as usize + 1);
    }

    #[test]
    fn test_year_to_position() {
        let pos = year_to_position(1910.0, 1810, 2030);
        assert!((pos - 45.4545).abs() < 0.001);
        assert_eq!(year_to_position(1810.0, 1810, 2030), 0.0);
        assert_eq!(year_to_position(2030.0, 1810, 2030), 100.0);
    }

    #[test]
    fn test_year_to_position_extrapolates() {
        assert!(year_to_position(1800.0, 1810, 2030) < 0.0);
        assert!(year_to_position(2040.0, 1810, 2030) > 100.0);
    }

    #[test]
    fn test_degenerate_range_maps_to_zero() {
        assert_eq!(year_to_position(1900.0, 1900, 1900), 0.0);
    }
}
