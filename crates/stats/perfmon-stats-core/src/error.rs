//! Error types for sampler construction.

use serde::{Deserialize, Serialize};

/// Configuration rejected by [`crate::SamplerConfig::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ConfigError {
    /// `sample_interval` must be at least one frame.
    #[error("sample_interval must be a positive number of frames")]
    ZeroSampleInterval,

    /// `report_interval` must be at least one frame.
    #[error("report_interval must be a positive number of frames")]
    ZeroReportInterval,

    /// The JSON form of the config could not be parsed.
    #[error("config parse error: {reason}")]
    Parse { reason: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
