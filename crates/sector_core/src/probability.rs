//! Per-event summary probabilities.

use crate::combinatorics::binomial;
use crate::pmf::{expected_value, Pmf};
use crate::{EventProbability, SectorConfig};

pub fn event_probability(pmf: &Pmf, config: &SectorConfig) -> EventProbability {
    let expected_slots = expected_value(pmf);
    EventProbability {
        expected_slots,
        slot_probability: (expected_slots / f64::from(config.total_slots)).min(1.0),
        traversal_probability: traversal_probability(
            expected_slots,
            config.total_slots,
            config.traversal_length,
        ),
    }
}

/// Chance of visiting at least one of `expected_slots` event beacons when
/// `traversal_length` of `total_slots` beacons are visited without repeats.
///
/// The expected slot count stands in for the exact count, fractional or not.
/// This approximation is the published model; do not integrate over the PMF.
pub fn traversal_probability(expected_slots: f64, total_slots: u32, traversal_length: u32) -> f64 {
    let slots_without_event = f64::from(total_slots) - expected_slots;
    let run = f64::from(traversal_length);
    if slots_without_event <= run {
        return 1.0;
    }
    let paths_thru_sector = binomial(f64::from(total_slots), run);
    let paths_avoiding_event = binomial(slots_without_event, run);
    (1.0 - paths_avoiding_event / paths_thru_sector).clamp(0.0, 1.0)
}
