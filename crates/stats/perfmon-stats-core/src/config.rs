//! Sampler configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Lifetime of min/max across reporting windows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremaScope {
    /// Min/max accumulate over the whole run; only sums and counts reset.
    #[default]
    Cumulative,
    /// Min/max reset together with the window.
    Windowed,
}

/// Frame cadence for sampling and reporting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Frames between samples.
    pub sample_interval: u32,
    /// Frames between reports. Should be a multiple of `sample_interval`.
    pub report_interval: u32,
    pub extrema: ExtremaScope,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_interval: 10,
            report_interval: 500,
            extrema: ExtremaScope::Cumulative,
        }
    }
}

impl SamplerConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: SamplerConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_interval == 0 {
            return Err(ConfigError::ZeroSampleInterval);
        }
        if self.report_interval == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }
        if self.report_interval % self.sample_interval != 0 {
            log::warn!(
                "report_interval {} is not a multiple of sample_interval {}; windows will hold uneven sample counts",
                self.report_interval,
                self.sample_interval
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SamplerConfig::default();
        assert_eq!(cfg.sample_interval, 10);
        assert_eq!(cfg.report_interval, 500);
        assert_eq!(cfg.extrema, ExtremaScope::Cumulative);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = SamplerConfig::from_json(r#"{ "report_interval": 100 }"#).unwrap();
        assert_eq!(cfg.sample_interval, 10);
        assert_eq!(cfg.report_interval, 100);

        let cfg = SamplerConfig::from_json(r#"{ "extrema": "windowed" }"#).unwrap();
        assert_eq!(cfg.extrema, ExtremaScope::Windowed);
    }

    #[test]
    fn zero_intervals_rejected() {
        let err = SamplerConfig::from_json(r#"{ "sample_interval": 0 }"#).unwrap_err();
        assert_eq!(err, ConfigError::ZeroSampleInterval);
        let err = SamplerConfig::from_json(r#"{ "report_interval": 0 }"#).unwrap_err();
        assert_eq!(err, ConfigError::ZeroReportInterval);
    }

    #[test]
    fn uneven_windows_are_allowed() {
        let cfg = SamplerConfig {
            sample_interval: 7,
            report_interval: 20,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn malformed_json() {
        let err = SamplerConfig::from_json("{ sample_interval: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
