use anyhow::{bail, Result};
use sector_core::SectorConfig;
use std::collections::HashMap;

const VALID_KEYS: &[&str] = &["total_slots", "traversal_length", "filler_key"];

/// Apply a batch's config overrides, then validate the result.
pub fn apply_overrides(
    config: &mut SectorConfig,
    overrides: &HashMap<String, serde_json::Value>,
) -> Result<()> {
    for (key, value) in overrides {
        match key.as_str() {
            "total_slots" => config.total_slots = as_u32(key, value)?,
            "traversal_length" => config.traversal_length = as_u32(key, value)?,
            "filler_key" => config.filler_key = as_string(key, value)?,
            _ => bail!(
                "unknown override key '{key}'. Valid keys: {}",
                VALID_KEYS.join(", ")
            ),
        }
    }
    config.validate()?;
    Ok(())
}

fn as_u32(key: &str, value: &serde_json::Value) -> Result<u32> {
    let val = value.as_u64().ok_or_else(|| {
        anyhow::anyhow!("override '{key}': expected a positive integer, got {value}")
    })?;
    u32::try_from(val)
        .map_err(|_| anyhow::anyhow!("override '{key}': value {val} exceeds u32 range"))
}

fn as_string(key: &str, value: &serde_json::Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("override '{key}': expected a string, got {value}"))
}
