//! Type definitions for `sector_core`.
//!
//! Input declarations, per-event intermediate values, final sector records and
//! the engine configuration.

use serde::{Deserialize, Serialize};

use crate::{EngineError, Pmf};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// How many copies of an event may be drawn into a sector's beacon pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub key: String,
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub fn new(key: impl Into<String>, min: u32, max: u32) -> Self {
        Self {
            key: key.into(),
            min,
            max,
        }
    }
}

/// One sector's declarations, already extracted from the host's data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInput {
    pub key: String,
    pub events: Vec<CountRange>,
}

// ---------------------------------------------------------------------------
// Intermediate and output records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedPmf {
    pub key: String,
    pub pmf: Pmf,
}

impl KeyedPmf {
    pub fn new(key: impl Into<String>, pmf: Pmf) -> Self {
        Self {
            key: key.into(),
            pmf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventProbability {
    /// Mean number of beacons holding this event.
    pub expected_slots: f64,
    /// Chance that one beacon picked at random holds this event. Beacons are
    /// not independent, so this is not the chance for the *next* jump.
    pub slot_probability: f64,
    /// Chance of meeting the event at least once on a run through the sector.
    pub traversal_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorEventResult {
    pub key: String,
    pub pmf: Pmf,
    pub probability: EventProbability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    /// Name the sector is referenced by in the game data.
    pub key: String,
    /// Human-readable sector name.
    pub display_name: String,
    pub events: Vec<SectorEventResult>,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tuning for one game's sector generator.
///
/// Defaults: 20 beacons per sector (mean of 18..22, start and exit excluded),
/// 12 beacons visited per run (mean of 11..13), `NEUTRAL` filler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorConfig {
    #[serde(default = "default_total_slots")]
    pub total_slots: u32,
    #[serde(default = "default_traversal_length")]
    pub traversal_length: u32,
    #[serde(default = "default_filler_key")]
    pub filler_key: String,
}

fn default_total_slots() -> u32 {
    20
}

fn default_traversal_length() -> u32 {
    12
}

fn default_filler_key() -> String {
    "NEUTRAL".to_string()
}

impl Default for SectorConfig {
    fn default() -> Self {
        Self {
            total_slots: default_total_slots(),
            traversal_length: default_traversal_length(),
            filler_key: default_filler_key(),
        }
    }
}

impl SectorConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.total_slots == 0 {
            return Err(EngineError::InvalidConfig {
                field: "total_slots",
                detail: "must be > 0".to_string(),
            });
        }
        if self.traversal_length > self.total_slots {
            return Err(EngineError::InvalidConfig {
                field: "traversal_length",
                detail: format!(
                    "{} exceeds total_slots {}",
                    self.traversal_length, self.total_slots
                ),
            });
        }
        if self.filler_key.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "filler_key",
                detail: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
