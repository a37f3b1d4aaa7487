//! Error type shared by every pipeline stage.

use thiserror::Error;

const ERROR_INVALID_RANGE: &str = "SECTOR-1001";
const ERROR_INCONSISTENT_MASS: &str = "SECTOR-1002";
const ERROR_UNKNOWN_KEY: &str = "SECTOR-1003";
const ERROR_UNKNOWN_FILLER_MERGE: &str = "SECTOR-1004";
const ERROR_INVALID_CONFIG: &str = "SECTOR-1005";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid count range for event `{key}`: min={min}, max={max}")]
    InvalidRange { key: String, min: u32, max: u32 },
    /// A PMF stopped summing to one. Always an engine bug, never bad input.
    #[error("{stage} produced a PMF for `{key}` with total mass {total}")]
    InconsistentMass {
        stage: &'static str,
        key: String,
        total: f64,
    },
    #[error("no event with key `{key}` to exclude")]
    UnknownKey { key: String },
    #[error("cannot merge filler mass into `{key}`: existing PMF has total mass {total}")]
    UnknownFillerMerge { key: String, total: f64 },
    #[error("invalid config field `{field}`: {detail}")]
    InvalidConfig { field: &'static str, detail: String },
    #[error("region `{region}`: {source}")]
    Region {
        region: String,
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// Stable code for logs and batch reports. `Region` reports its cause.
    pub fn stable_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => ERROR_INVALID_RANGE,
            Self::InconsistentMass { .. } => ERROR_INCONSISTENT_MASS,
            Self::UnknownKey { .. } => ERROR_UNKNOWN_KEY,
            Self::UnknownFillerMerge { .. } => ERROR_UNKNOWN_FILLER_MERGE,
            Self::InvalidConfig { .. } => ERROR_INVALID_CONFIG,
            Self::Region { source, .. } => source.stable_code(),
        }
    }

    pub(crate) fn in_region(self, region: &str) -> Self {
        match self {
            already @ Self::Region { .. } => already,
            other => Self::Region {
                region: region.to_string(),
                source: Box::new(other),
            },
        }
    }
}
