//! Oscillator configuration.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OscillatorError {
    #[error("lerp_frames must be a positive number of frames")]
    ZeroLerpFrames,

    #[error("empty target range: min_percent {min} must be below max_percent {max}")]
    EmptyRange { min: u32, max: u32 },

    #[error("oscillator config parse error: {reason}")]
    Parse { reason: String },
}

impl From<serde_json::Error> for OscillatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

/// Targets are whole percentages drawn from `[min_percent, max_percent)` and
/// divided by 100.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    /// Uniform name written on every tick.
    pub uniform: String,
    pub min_percent: u32,
    pub max_percent: u32,
    /// Duration of each lerp, in frames.
    pub lerp_frames: u32,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            uniform: "rand_factor".to_string(),
            min_percent: 20,
            max_percent: 200,
            lerp_frames: 100,
        }
    }
}

impl OscillatorConfig {
    pub fn from_json(s: &str) -> Result<Self, OscillatorError> {
        let cfg: OscillatorConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), OscillatorError> {
        if self.lerp_frames == 0 {
            return Err(OscillatorError::ZeroLerpFrames);
        }
        if self.min_percent >= self.max_percent {
            return Err(OscillatorError::EmptyRange {
                min: self.min_percent,
                max: self.max_percent,
            });
        }
        Ok(())
    }

    /// Inclusive lower and exclusive upper bound of targets.
    pub fn target_bounds(&self) -> (f32, f32) {
        (
            self.min_percent as f32 / 100.0,
            self.max_percent as f32 / 100.0,
        )
    }
}
