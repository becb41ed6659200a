use bevy::diagnostic::DiagnosticPath;
use bevy::prelude::*;
use perfmon_stats_core::{FrameStatsSampler, Report};

/// Diagnostic the app feeds with its memory usage in bytes. Reads as zero
/// until a measurement is added.
pub const MEMORY_BYTES: DiagnosticPath = DiagnosticPath::const_new("perfmon/memory_bytes");

/// The sampler driven by [`crate::tick_perf_monitor`].
#[derive(Resource, Debug, Default)]
pub struct PerfSampler(pub FrameStatsSampler);

/// Sent once per reporting window.
#[derive(Event, Debug, Clone)]
pub struct PerfReportEvent(pub Report);
