//! Report snapshots and overlay text formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metric::MetricKind;
use crate::units::{to_mb, to_ms};

/// Reportable view of one accumulator, in raw host units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub kind: MetricKind,
    /// `None` when the window held no samples.
    pub average: Option<f64>,
    /// `None` until a qualifying sample is folded.
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub current: f64,
}

/// Numeric part of a report; absent when the window held no samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    pub fps: MetricSnapshot,
    pub draw_time: MetricSnapshot,
    pub memory: MetricSnapshot,
}

impl ReportStats {
    pub fn get(&self, kind: MetricKind) -> &MetricSnapshot {
        match kind {
            MetricKind::Fps => &self.fps,
            MetricKind::DrawTimeSeconds => &self.draw_time,
            MetricKind::MemoryBytes => &self.memory,
        }
    }
}

/// Snapshot emitted at the end of a reporting window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Frames elapsed in the window.
    pub frame_count: u64,
    /// Samples folded in the window.
    pub sample_count: u64,
    pub stats: Option<ReportStats>,
}

impl MetricKind {
    /// Convert a raw reading to its display unit and format it.
    pub fn format_value(&self, raw: f64) -> String {
        match self {
            // halves round away from zero
            MetricKind::Fps => format!("{:.0}", raw.round()),
            MetricKind::DrawTimeSeconds => format!("{:.2} ms", to_ms(raw)),
            MetricKind::MemoryBytes => format!("{:.2} MB", to_mb(raw)),
        }
    }

    fn format_opt(&self, raw: Option<f64>) -> String {
        match raw {
            Some(v) => self.format_value(v),
            None => "n/a".to_string(),
        }
    }
}

impl Report {
    /// Multi-line overlay block.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn has_data(&self) -> bool {
        self.stats.is_some()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(stats) = &self.stats else {
            return write!(
                f,
                "No data ({} samples in {} frames)",
                self.sample_count, self.frame_count
            );
        };
        let mut lines: Vec<String> = Vec::with_capacity(10);
        for kind in MetricKind::ALL {
            let snap = stats.get(kind);
            let label = kind.label();
            lines.push(format!("Avg. {label}: {}", kind.format_opt(snap.average)));
            lines.push(format!("Min {label}: {}", kind.format_opt(snap.min)));
            lines.push(format!("Max {label}: {}", kind.format_opt(snap.max)));
        }
        let mem = &stats.memory;
        lines.push(format!(
            "Current Memory: {}",
            MetricKind::MemoryBytes.format_value(mem.current)
        ));
        f.write_str(&lines.join("\n"))
    }
}
