//! Filler redistribution: beacons no declared event claims become neutral
//! filler events.

use crate::pmf::{convolve, Pmf};
use crate::{EngineError, KeyedPmf};

#[derive(Debug, Clone, PartialEq)]
pub struct FillerOutcome {
    /// Joint raw count PMF with every "pool not full" outcome moved onto
    /// `total_slots`.
    pub joint_claimed: Pmf,
    /// `None` when the declared events always fill the pool.
    pub filler: Option<Pmf>,
}

/// Split the joint raw count of `raw_events` into claimed beacons and filler.
///
/// A joint count `n < total_slots` leaves `total_slots - n` filler beacons;
/// counts at or above `total_slots` leave none.
pub fn filler_distribution(
    raw_events: &[KeyedPmf],
    total_slots: u32,
) -> Result<FillerOutcome, EngineError> {
    let joint_raw = convolve(raw_events.iter().map(|event| &event.pmf));
    joint_raw.check_mass("convolution", "joint")?;

    let mut filler = Pmf::default();
    let mut joint_claimed = Pmf::default();
    let mut ever_short = false;
    for (count, mass) in joint_raw.iter() {
        if count < total_slots {
            ever_short = true;
            filler.add_mass(total_slots - count, mass);
            joint_claimed.add_mass(total_slots, mass);
        } else {
            filler.add_mass(0, mass);
            joint_claimed.add_mass(count, mass);
        }
    }

    Ok(FillerOutcome {
        joint_claimed,
        filler: ever_short.then_some(filler),
    })
}

/// Fold `filler` into the event named `filler_key`, or append it as a new
/// event when the sector doesn't declare one.
pub fn merge_filler(
    mut adjusted: Vec<KeyedPmf>,
    filler: Pmf,
    filler_key: &str,
) -> Result<Vec<KeyedPmf>, EngineError> {
    match adjusted.iter().position(|event| event.key == filler_key) {
        Some(index) => {
            let existing = &mut adjusted[index];
            if existing.pmf.check_mass("filler", filler_key).is_err() {
                return Err(EngineError::UnknownFillerMerge {
                    key: filler_key.to_string(),
                    total: existing.pmf.total_mass(),
                });
            }
            existing.pmf = convolve([&existing.pmf, &filler]);
            existing.pmf.check_mass("filler", filler_key)?;
        }
        None => {
            filler.check_mass("filler", filler_key)?;
            adjusted.push(KeyedPmf::new(filler_key, filler));
        }
    }
    Ok(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pmf::expected_value;

    fn raw(key: &str, min: u32, max: u32) -> KeyedPmf {
        let mass = 1.0 / f64::from(max - min + 1);
        KeyedPmf::new(key, Pmf::from_masses((min..=max).map(|n| (n, mass))))
    }

    #[test]
    fn short_pool_is_filled_with_the_remainder() {
        let outcome = filler_distribution(&[raw("A", 5, 5)], 20).unwrap();
        assert_eq!(outcome.filler, Some(Pmf::point(15)));
        assert_eq!(outcome.joint_claimed, Pmf::point(20));
    }

    #[test]
    fn always_full_pool_needs_no_filler() {
        let outcome = filler_distribution(&[raw("A", 10, 12), raw("B", 10, 10)], 20).unwrap();
        assert!(outcome.filler.is_none());
        assert_eq!(outcome.joint_claimed.min_outcome(), Some(20));
        assert_eq!(outcome.joint_claimed.max_outcome(), Some(22));
    }

    #[test]
    fn partially_short_pool_keeps_zero_filler_mass() {
        let outcome = filler_distribution(&[raw("A", 19, 21)], 20).unwrap();
        let filler = outcome.filler.unwrap();
        assert!((filler.mass(1) - 1.0 / 3.0).abs() < 1e-12);
        assert!((filler.mass(0) - 2.0 / 3.0).abs() < 1e-12);
        assert!((outcome.joint_claimed.mass(20) - 2.0 / 3.0).abs() < 1e-12);
        assert!((outcome.joint_claimed.mass(21) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn filler_covers_the_expected_shortfall() {
        let events = [raw("A", 0, 4), raw("B", 2, 7), raw("C", 1, 3)];
        let joint = convolve(events.iter().map(|e| &e.pmf));
        let filler = filler_distribution(&events, 20).unwrap().filler.unwrap();
        let shortfall = 20.0 - expected_value(&joint);
        assert!((expected_value(&filler) - shortfall).abs() < 1e-9);
    }

    #[test]
    fn leaky_joint_count_is_reported_at_convolution() {
        let leaky = KeyedPmf::new("LEAKY", Pmf::from_masses([(2, 0.5)]));
        let err = filler_distribution(&[raw("A", 5, 5), leaky], 20).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InconsistentMass {
                stage: "convolution",
                ..
            }
        ));
    }

    #[test]
    fn merge_appends_a_new_filler_event() {
        let merged = merge_filler(vec![raw("A", 5, 5)], Pmf::point(15), "NEUTRAL").unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1], KeyedPmf::new("NEUTRAL", Pmf::point(15)));
    }

    #[test]
    fn merge_convolves_into_a_declared_filler_event() {
        let adjusted = vec![raw("A", 5, 5), raw("NEUTRAL", 2, 3)];
        let merged = merge_filler(adjusted, Pmf::point(10), "NEUTRAL").unwrap();
        assert_eq!(merged.len(), 2);
        assert!((merged[1].pmf.mass(12) - 0.5).abs() < 1e-12);
        assert!((merged[1].pmf.mass(13) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn merge_refuses_a_broken_filler_event() {
        let broken = KeyedPmf::new("NEUTRAL", Pmf::from_masses([(1, 0.3)]));
        let err = merge_filler(vec![broken], Pmf::point(4), "NEUTRAL").unwrap_err();
        assert!(matches!(err, EngineError::UnknownFillerMerge { .. }));
        assert_eq!(err.stable_code(), "SECTOR-1004");
    }
}
