//! `sector_core` — event-count distributions for beacon sectors.
//!
//! Turns per-sector `(event, min, max)` declarations into the probability of
//! meeting each event while jumping through the sector. Pure computation: no
//! IO, no network, no shared state between sectors.

mod capacity;
mod combinatorics;
mod distribution;
mod engine;
mod error;
mod filler;
mod pmf;
mod probability;
mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

pub use capacity::{adjust_event, adjust_for_capacity};
pub use combinatorics::{binomial, choose};
pub use distribution::{discrete_uniform, intake, keyed_distributions};
pub use engine::{compute_named_sector, compute_sector, compute_sector_events, compute_sectors};
pub use error::EngineError;
pub use filler::{filler_distribution, merge_filler, FillerOutcome};
pub use pmf::{
    convolve, convolve_excluding, convolve_excluding_present, expected_value, Pmf, MASS_TOLERANCE,
};
pub use probability::{event_probability, traversal_probability};
pub use types::*;

#[cfg(test)]
mod tests;
