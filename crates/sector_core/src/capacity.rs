//! Capacity adjustment: events compete for a fixed pool of beacons.
//!
//! Every declared event instance goes into one bucket and the generator draws
//! `total_slots` of them without replacement. When the bucket holds more than
//! that, each event loses instances according to a hypergeometric draw. This
//! module turns an event's raw count PMF into the PMF of instances that
//! survive the draw.

use tracing::trace;

use crate::combinatorics::choose;
use crate::pmf::{convolve_excluding_present, Pmf};
use crate::{EngineError, KeyedPmf};

/// Adjust every event against the combined raw counts of all the others.
///
/// Returns new PMFs in input order; `events` is left untouched.
pub fn adjust_for_capacity(
    events: &[KeyedPmf],
    total_slots: u32,
) -> Result<Vec<KeyedPmf>, EngineError> {
    events
        .iter()
        .map(|event| {
            let others = convolve_excluding_present(events, &event.key)?;
            others.check_mass("convolution", &event.key)?;
            let adjusted = adjust_event(&event.pmf, &others, total_slots);
            trace!(
                event = %event.key,
                total_mass = adjusted.total_mass(),
                "capacity-adjusted event pmf"
            );
            adjusted.check_mass("capacity", &event.key)?;
            Ok(KeyedPmf::new(event.key.clone(), adjusted))
        })
        .collect()
}

/// PMF of how many of one event's instances make it into the pool, given the
/// joint raw count PMF of every competing event.
pub fn adjust_event(event: &Pmf, others: &Pmf, total_slots: u32) -> Pmf {
    let mut adjusted = Pmf::default();
    for (other_count, other_mass) in others.iter() {
        for (n, mass) in event.iter() {
            let weight = mass * other_mass;
            let overflow = (other_count + n).saturating_sub(total_slots);
            if overflow == 0 {
                adjusted.add_mass(n, weight);
                continue;
            }
            for removed in 0..=overflow.min(n) {
                let remaining = n - removed;
                // The others can't fill the rest of the pool.
                if other_count + remaining < total_slots {
                    continue;
                }
                let chance = removal_probability(n, removed, other_count, total_slots);
                if chance > 0.0 {
                    adjusted.add_mass(remaining, chance * weight);
                }
            }
        }
    }
    adjusted
}

/// Chance that exactly `removed` of this event's `n` instances are left out
/// when `total_slots` are drawn from `n + other_count`.
fn removal_probability(n: u32, removed: u32, other_count: u32, total_slots: u32) -> f64 {
    let others_drawn = i64::from(total_slots) - i64::from(n - removed);
    choose(n, i64::from(removed)) * choose(other_count, others_drawn)
        / choose(other_count + n, i64::from(total_slots))
}
