use super::*;
use crate::test_fixtures::{assert_mass_one, civilian_region, ranges, region, sector_names};

mod scenarios;

// --- Shared test helpers ------------------------------------------------

fn test_config() -> SectorConfig {
    SectorConfig::default()
}

fn event<'a>(events: &'a [SectorEventResult], key: &str) -> &'a SectorEventResult {
    events
        .iter()
        .find(|e| e.key == key)
        .unwrap_or_else(|| panic!("no event {key} in {events:?}"))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
