use rayon::prelude::*;
use sector_core::{EngineError, RegionInput, Sector, SectorConfig};
use std::collections::HashMap;
use tracing::{info, warn};

pub struct RegionOutcome {
    pub region: String,
    pub result: Result<Sector, EngineError>,
}

/// Compute every named region in parallel. Output follows input order;
/// regions without a display name are left out.
pub fn run_regions(
    regions: &[RegionInput],
    names: &HashMap<String, String>,
    config: &SectorConfig,
) -> Vec<RegionOutcome> {
    let outcomes: Vec<RegionOutcome> = regions
        .par_iter()
        .filter_map(|region| {
            sector_core::compute_named_sector(region, names, config).map(|result| RegionOutcome {
                region: region.key.clone(),
                result,
            })
        })
        .collect();

    for outcome in &outcomes {
        match &outcome.result {
            Ok(sector) => info!(
                region = %outcome.region,
                events = sector.events.len(),
                "sector computed"
            ),
            Err(err) => warn!(
                region = %outcome.region,
                code = err.stable_code(),
                "sector failed: {err}"
            ),
        }
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use sector_core::test_fixtures::{civilian_region, region, sector_names};

    #[test]
    fn test_run_regions_keeps_input_order() {
        let regions = vec![
            civilian_region(),
            region("UNUSED_SECTOR", &[("STORE", 1, 1)]),
            region("ZOLTAN_SECTOR", &[("ZOLTAN", 4, 6)]),
            region("PIRATE_SECTOR", &[("PIRATE", 5, 8)]),
        ];
        let outcomes = run_regions(&regions, &sector_names(), &SectorConfig::default());

        let keys: Vec<&str> = outcomes.iter().map(|o| o.region.as_str()).collect();
        assert_eq!(keys, vec!["CIVILIAN_SECTOR", "ZOLTAN_SECTOR", "PIRATE_SECTOR"]);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
    }

    #[test]
    fn test_run_regions_matches_sequential_engine() {
        let regions = vec![
            civilian_region(),
            region("PIRATE_SECTOR", &[("PIRATE", 9, 14), ("STORE", 1, 2)]),
        ];
        let config = SectorConfig::default();
        let parallel = run_regions(&regions, &sector_names(), &config);
        let sequential = sector_core::compute_sectors(&regions, &sector_names(), &config);

        assert_eq!(parallel.len(), sequential.len());
        for (outcome, expected) in parallel.iter().zip(&sequential) {
            assert_eq!(&outcome.result, expected);
        }
    }

    #[test]
    fn test_run_regions_reports_failures_per_region() {
        let regions = vec![
            region("PIRATE_SECTOR", &[("PIRATE", 8, 3)]),
            civilian_region(),
        ];
        let outcomes = run_regions(&regions, &sector_names(), &SectorConfig::default());

        assert_eq!(outcomes.len(), 2);
        let err = outcomes[0].result.as_ref().unwrap_err();
        assert_eq!(err.stable_code(), "SECTOR-1001");
        assert!(outcomes[1].result.is_ok());
    }
}
