use anyhow::{bail, Context, Result};
use sector_core::RegionInput;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A batch of already-parsed sector declarations.
#[derive(Debug, Deserialize)]
pub struct Batch {
    pub name: String,
    /// Overrides applied on top of the default `SectorConfig`.
    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
    /// Region key → display name. Regions missing here are skipped.
    #[serde(default)]
    pub names: HashMap<String, String>,
    pub regions: Vec<RegionInput>,
}

pub fn load_batch(path: &Path) -> Result<Batch> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading batch file: {}", path.display()))?;
    let batch: Batch = serde_json::from_str(&json)
        .with_context(|| format!("parsing batch file: {}", path.display()))?;
    if batch.name.is_empty() {
        bail!("batch 'name' must not be empty");
    }
    if batch.regions.is_empty() {
        bail!("batch 'regions' must list at least one region");
    }
    Ok(batch)
}
