//! Count declarations → uniform count distributions.

use std::collections::HashSet;

use tracing::warn;

use crate::{CountRange, EngineError, KeyedPmf, Pmf};

/// Uniform distribution over `min..=max`.
///
/// `(0, 0)` means "never occurs" and must be filtered out by [`intake`]
/// before it gets here.
pub fn discrete_uniform(key: &str, min: u32, max: u32) -> Result<Pmf, EngineError> {
    if max < min || max == 0 {
        return Err(EngineError::InvalidRange {
            key: key.to_string(),
            min,
            max,
        });
    }
    let mass = 1.0 / f64::from(max - min + 1);
    Ok(Pmf::from_masses((min..=max).map(|n| (n, mass))))
}

/// One uniform PMF per declaration, in declaration order.
pub fn keyed_distributions(ranges: &[CountRange]) -> Result<Vec<KeyedPmf>, EngineError> {
    ranges
        .iter()
        .map(|range| {
            let pmf = discrete_uniform(&range.key, range.min, range.max)?;
            pmf.check_mass("distribution", &range.key)?;
            Ok(KeyedPmf::new(range.key.clone(), pmf))
        })
        .collect()
}

/// Drops declarations that can never contribute: unnamed ones, and ones
/// whose larger bound is below 1. Inverted ranges are kept so the builder
/// reports them.
///
/// Event keys are unique per sector: a repeated key keeps its first
/// declaration.
pub fn intake(declarations: &[CountRange]) -> Vec<CountRange> {
    let mut seen = HashSet::new();
    declarations
        .iter()
        .filter(|range| {
            if range.key.is_empty() {
                warn!(min = range.min, max = range.max, "dropping unnamed event declaration");
                return false;
            }
            if range.min.max(range.max) < 1 {
                warn!(event = %range.key, "dropping event declared with zero count");
                return false;
            }
            if !seen.insert(range.key.as_str()) {
                warn!(
                    event = %range.key,
                    min = range.min,
                    max = range.max,
                    "dropping repeated event declaration"
                );
                return false;
            }
            true
        })
        .cloned()
        .collect()
}
