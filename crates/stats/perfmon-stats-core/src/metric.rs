//! Metric kinds and the pull-based host counter contract.

use serde::{Deserialize, Serialize};

/// One of the three independently tracked host counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Frames per second.
    Fps,
    /// Time spent producing the frame, in seconds.
    #[serde(rename = "draw_time")]
    DrawTimeSeconds,
    /// Static memory in use, in bytes.
    #[serde(rename = "memory")]
    MemoryBytes,
}

impl MetricKind {
    /// All kinds in report order.
    pub const ALL: [MetricKind; 3] = [
        MetricKind::Fps,
        MetricKind::DrawTimeSeconds,
        MetricKind::MemoryBytes,
    ];

    /// Stable lowercase identifier (matches the serde form).
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Fps => "fps",
            MetricKind::DrawTimeSeconds => "draw_time",
            MetricKind::MemoryBytes => "memory",
        }
    }

    /// Overlay caption used in report lines.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Fps => "FPS",
            MetricKind::DrawTimeSeconds => "Draw Time",
            MetricKind::MemoryBytes => "Memory",
        }
    }

    /// Draw-time readings of exactly zero are sensor artifacts and never
    /// become the minimum.
    pub fn excludes_zero_from_min(&self) -> bool {
        matches!(self, MetricKind::DrawTimeSeconds)
    }
}

/// Host performance counter. Always returns the current instantaneous value.
pub trait MetricSource {
    fn get_metric(&mut self, kind: MetricKind) -> f64;
}

impl<F> MetricSource for F
where
    F: FnMut(MetricKind) -> f64,
{
    fn get_metric(&mut self, kind: MetricKind) -> f64 {
        self(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_sources() {
        let mut src = |kind: MetricKind| match kind {
            MetricKind::Fps => 60.0,
            MetricKind::DrawTimeSeconds => 0.016,
            MetricKind::MemoryBytes => 1e6,
        };
        assert_eq!(src.get_metric(MetricKind::Fps), 60.0);
        assert_eq!(src.get_metric(MetricKind::MemoryBytes), 1e6);
    }

    #[test]
    fn serde_names_match_as_str() {
        for kind in MetricKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
