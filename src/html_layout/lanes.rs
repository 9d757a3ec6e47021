//! Lane assignment (greedy interval partitioning)
//!
//! Movements are visited in ascending start-year order and each one goes
//! into the lowest lane whose last occupant has already ended. Touching
//! intervals (one ends the year the next starts) share a lane.

use crate::models::Movement;
use crate::parse::{parse_period, ParsedPeriod};

/// Result of one assignment pass
#[derive(Clone, Debug, PartialEq)]
pub struct LaneAssignment {
    /// Parsed period of each movement, parallel to the input slice
    pub periods: Vec<ParsedPeriod>,

    /// Lane of each movement, parallel to the input slice
    pub lanes: Vec<usize>,

    /// Number of lanes opened
    pub lane_count: usize,
}

/// Compute lanes for already-parsed periods.
///
/// Returns one lane index per period, in input order. Equal start years
/// keep input order (stable sort).
pub fn pack_intervals(periods: &[ParsedPeriod]) -> (Vec<usize>, usize) {
    let mut order: Vec<usize> = (0..periods.len()).collect();
    order.sort_by_key(|&i| periods[i].start);

    // lane_ends[lane] = end year of the last movement placed in that lane
    let mut lane_ends: Vec<i32> = Vec::new();
    let mut lanes = vec![0; periods.len()];

    for idx in order {
        let period = periods[idx];
        let lane = match lane_ends.iter().position(|&end| end <= period.start) {
            Some(lane) => {
                lane_ends[lane] = period.end;
                lane
            }
            None => {
                lane_ends.push(period.end);
                lane_ends.len() - 1
            }
        };
        lanes[idx] = lane;
    }

    (lanes, lane_ends.len())
}

/// Parse every movement's period, pack, and write `lane` back onto each movement
pub fn assign_lanes(movements: &mut [Movement], reference_year: i32) -> LaneAssignment {
    let periods: Vec<ParsedPeriod> = movements
        .iter()
        .map(|m| parse_period(m.period.as_deref(), reference_year))
        .collect();

    let (lanes, lane_count) = pack_intervals(&periods);

    for (movement, &lane) in movements.iter_mut().zip(&lanes) {
        movement.lane = Some(lane);
    }

    log::debug!("Assigned {} movements to {} lanes", movements.len(), lane_count);

    LaneAssignment { periods, lanes, lane_count }
}
