//! Sparse probability mass functions over event counts, and their algebra.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{EngineError, KeyedPmf};

/// Allowed drift of a PMF's total mass away from 1.
pub const MASS_TOLERANCE: f64 = 1e-9;

/// Count → probability. Absent counts have mass 0.
///
/// Backed by a `BTreeMap` so iteration is always in ascending count order,
/// which keeps every fold over a PMF reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pmf(BTreeMap<u32, f64>);

impl Pmf {
    /// All mass on a single outcome.
    pub fn point(outcome: u32) -> Self {
        Self(BTreeMap::from([(outcome, 1.0)]))
    }

    pub fn from_masses(masses: impl IntoIterator<Item = (u32, f64)>) -> Self {
        let mut pmf = Self::default();
        for (outcome, mass) in masses {
            pmf.add_mass(outcome, mass);
        }
        pmf
    }

    pub fn mass(&self, outcome: u32) -> f64 {
        self.0.get(&outcome).copied().unwrap_or(0.0)
    }

    pub(crate) fn add_mass(&mut self, outcome: u32, mass: f64) {
        *self.0.entry(outcome).or_insert(0.0) += mass;
    }

    /// `(outcome, mass)` pairs in ascending outcome order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(&outcome, &mass)| (outcome, mass))
    }

    pub fn support(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn min_outcome(&self) -> Option<u32> {
        self.0.keys().next().copied()
    }

    pub fn max_outcome(&self) -> Option<u32> {
        self.0.keys().next_back().copied()
    }

    pub fn total_mass(&self) -> f64 {
        self.0.values().sum()
    }

    /// Fails with `InconsistentMass` unless the masses sum to 1 within
    /// [`MASS_TOLERANCE`].
    pub fn check_mass(&self, stage: &'static str, key: &str) -> Result<(), EngineError> {
        let total = self.total_mass();
        if (total - 1.0).abs() > MASS_TOLERANCE {
            return Err(EngineError::InconsistentMass {
                stage,
                key: key.to_string(),
                total,
            });
        }
        Ok(())
    }
}

/// Distribution of the sum of independent variables, folded left to right.
///
/// The empty sum is `{0: 1}`.
pub fn convolve<'a>(pmfs: impl IntoIterator<Item = &'a Pmf>) -> Pmf {
    pmfs.into_iter()
        .fold(Pmf::point(0), |joint, pmf| convolve_pair(&joint, pmf))
}

fn convolve_pair(joint: &Pmf, next: &Pmf) -> Pmf {
    let mut out = Pmf::default();
    for (a, mass_a) in joint.iter().filter(|(_, mass)| *mass > 0.0) {
        for (b, mass_b) in next.iter().filter(|(_, mass)| *mass > 0.0) {
            out.add_mass(a + b, mass_a * mass_b);
        }
    }
    out
}

/// Joint PMF of every event except `exclude_key`.
///
/// A key that matches nothing excludes nothing.
pub fn convolve_excluding(events: &[KeyedPmf], exclude_key: &str) -> Pmf {
    convolve(
        events
            .iter()
            .filter(|event| event.key != exclude_key)
            .map(|event| &event.pmf),
    )
}

/// Like [`convolve_excluding`], but `exclude_key` must name an event.
pub fn convolve_excluding_present(
    events: &[KeyedPmf],
    exclude_key: &str,
) -> Result<Pmf, EngineError> {
    if !events.iter().any(|event| event.key == exclude_key) {
        return Err(EngineError::UnknownKey {
            key: exclude_key.to_string(),
        });
    }
    Ok(convolve_excluding(events, exclude_key))
}

pub fn expected_value(pmf: &Pmf) -> f64 {
    pmf.iter()
        .map(|(outcome, mass)| f64::from(outcome) * mass)
        .sum()
}
