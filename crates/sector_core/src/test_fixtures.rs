//! Shared test fixtures for sector_core and downstream crates.
//!
//! `civilian_region()` is a typical mid-game sector whose declarations
//! sometimes under-fill and sometimes over-fill the beacon pool.

use std::collections::HashMap;

use crate::{CountRange, Pmf, RegionInput};

pub fn ranges(declarations: &[(&str, u32, u32)]) -> Vec<CountRange> {
    declarations
        .iter()
        .map(|&(key, min, max)| CountRange::new(key, min, max))
        .collect()
}

pub fn region(key: &str, declarations: &[(&str, u32, u32)]) -> RegionInput {
    RegionInput {
        key: key.to_string(),
        events: ranges(declarations),
    }
}

pub fn civilian_region() -> RegionInput {
    region(
        "CIVILIAN_SECTOR",
        &[
            ("HOSTILE_CIVILIAN", 5, 7),
            ("NEUTRAL_CIVILIAN", 3, 5),
            ("DISTRESS_CIVILIAN", 1, 3),
            ("STORE", 1, 2),
            ("ITEMS", 0, 2),
            ("QUEST", 0, 1),
        ],
    )
}

pub fn sector_names() -> HashMap<String, String> {
    HashMap::from([
        ("CIVILIAN_SECTOR".to_string(), "Civilian Sector".to_string()),
        ("PIRATE_SECTOR".to_string(), "Pirate Controlled Sector".to_string()),
        ("ZOLTAN_SECTOR".to_string(), "Zoltan Homeworlds".to_string()),
    ])
}

pub fn assert_mass_one(pmf: &Pmf, context: &str) {
    let total = pmf.total_mass();
    assert!(
        (total - 1.0).abs() < 1e-9,
        "{context}: total mass {total} is not 1"
    );
}
