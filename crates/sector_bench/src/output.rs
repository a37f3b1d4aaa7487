//! Batch output files: sectors JSON, per-event CSV and the batch summary.

use anyhow::{Context, Result};
use sector_core::{Sector, SectorConfig};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::runner::RegionOutcome;

#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub batch_schema_version: u32,
    pub batch_id: String,
    pub batch_name: String,
    pub config: SectorConfig,
    pub region_count: usize,
    pub computed_count: usize,
    pub skipped_count: usize,
    pub failed: Vec<FailedRegion>,
}

#[derive(Debug, Serialize)]
pub struct FailedRegion {
    pub region: String,
    pub code: String,
    pub message: String,
}

impl BatchSummary {
    pub fn from_outcomes(
        batch_id: String,
        batch_name: &str,
        config: &SectorConfig,
        region_count: usize,
        outcomes: &[RegionOutcome],
    ) -> Self {
        let failed: Vec<FailedRegion> = outcomes
            .iter()
            .filter_map(|outcome| {
                outcome.result.as_ref().err().map(|err| FailedRegion {
                    region: outcome.region.clone(),
                    code: err.stable_code().to_string(),
                    message: err.to_string(),
                })
            })
            .collect();
        Self {
            batch_schema_version: 1,
            batch_id,
            batch_name: batch_name.to_string(),
            config: config.clone(),
            region_count,
            computed_count: outcomes.len() - failed.len(),
            skipped_count: region_count - outcomes.len(),
            failed,
        }
    }
}

/// One CSV row per (sector, event).
#[derive(Debug, Serialize)]
struct EventRow<'a> {
    region: &'a str,
    display_name: &'a str,
    event: &'a str,
    expected_slots: f64,
    slot_probability: f64,
    traversal_probability: f64,
}

/// Write `value` as pretty JSON via a temp file and rename.
pub fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing {}", path.display()))?;
    let mut file = std::fs::File::create(&tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("writing {}", tmp_path.display()))?;
    file.sync_all()?;
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {}", tmp_path.display()))?;
    Ok(())
}

pub fn write_events_csv(sectors: &[&Sector], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for sector in sectors {
        for event in &sector.events {
            writer
                .serialize(EventRow {
                    region: &sector.key,
                    display_name: &sector.display_name,
                    event: &event.key,
                    expected_slots: event.probability.expected_slots,
                    slot_probability: event.probability.slot_probability,
                    traversal_probability: event.probability.traversal_probability,
                })
                .context("writing event row")?;
        }
    }
    writer.flush().context("flushing events csv")?;
    Ok(())
}
