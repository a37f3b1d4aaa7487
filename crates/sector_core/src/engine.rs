use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::capacity::adjust_for_capacity;
use crate::distribution::{intake, keyed_distributions};
use crate::filler::{filler_distribution, merge_filler};
use crate::probability::event_probability;
use crate::{CountRange, EngineError, RegionInput, Sector, SectorConfig, SectorEventResult};

/// Run the full pipeline for one sector's declarations.
///
/// Order of operations:
/// 1. Build a uniform count PMF per declaration.
/// 2. Adjust each PMF for competition over `total_slots` beacons.
/// 3. Turn unclaimed beacons into filler and merge it in.
/// 4. Summarize every event's adjusted PMF.
///
/// `ranges` must already be filtered (see [`intake`]); a `(0, 0)` range is
/// an error here.
pub fn compute_sector_events(
    ranges: &[CountRange],
    config: &SectorConfig,
) -> Result<Vec<SectorEventResult>, EngineError> {
    config.validate()?;

    let raw = keyed_distributions(ranges)?;
    let adjusted = adjust_for_capacity(&raw, config.total_slots)?;

    let outcome = filler_distribution(&raw, config.total_slots)?;
    debug!(joint = ?outcome.joint_claimed, "joint event count pmf");
    let events = match outcome.filler {
        Some(filler) => {
            debug!(filler_key = %config.filler_key, ?filler, "filler pmf");
            merge_filler(adjusted, filler, &config.filler_key)?
        }
        None => adjusted,
    };

    Ok(events
        .into_iter()
        .map(|event| {
            let probability = event_probability(&event.pmf, config);
            SectorEventResult {
                key: event.key,
                pmf: event.pmf,
                probability,
            }
        })
        .collect())
}

/// Filter a region's declarations and compute its sector record. Errors
/// carry the region key.
pub fn compute_sector(
    region: &RegionInput,
    display_name: &str,
    config: &SectorConfig,
) -> Result<Sector, EngineError> {
    let _span = debug_span!("sector", region = %region.key).entered();

    let ranges = intake(&region.events);
    let events =
        compute_sector_events(&ranges, config).map_err(|err| err.in_region(&region.key))?;
    Ok(Sector {
        key: region.key.clone(),
        display_name: display_name.to_string(),
        events,
    })
}

/// `None` for regions without a display name; the game data lists sectors
/// that are never used.
pub fn compute_named_sector(
    region: &RegionInput,
    names: &HashMap<String, String>,
    config: &SectorConfig,
) -> Option<Result<Sector, EngineError>> {
    let Some(display_name) = names.get(&region.key) else {
        debug!(region = %region.key, "no display name; skipping region");
        return None;
    };
    Some(compute_sector(region, display_name, config))
}

/// Every named region in input order. Regions are independent: one failure
/// does not affect the rest.
pub fn compute_sectors(
    regions: &[RegionInput],
    names: &HashMap<String, String>,
    config: &SectorConfig,
) -> Vec<Result<Sector, EngineError>> {
    regions
        .iter()
        .filter_map(|region| compute_named_sector(region, names, config))
        .collect()
}
