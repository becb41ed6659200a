use bevy::diagnostic::{Diagnostic, FrameTimeDiagnosticsPlugin, RegisterDiagnostic};
use bevy::prelude::*;
use perfmon_stats_core::{ConfigError, FrameStatsSampler, SamplerConfig};

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{PerfFrameCountLabel, PerfStatsLabel};
pub use resources::{PerfReportEvent, PerfSampler, MEMORY_BYTES};
pub use systems::{spawn_overlay, tick_perf_monitor, DiagnosticsSource};

/// Samples Bevy's frame diagnostics every frame and publishes windowed
/// statistics to overlay labels and [`PerfReportEvent`]s.
#[derive(Default)]
pub struct PerfMonitorPlugin {
    sampler: FrameStatsSampler,
}

impl PerfMonitorPlugin {
    pub fn new(config: SamplerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            sampler: FrameStatsSampler::new(config)?,
        })
    }
}

impl Plugin for PerfMonitorPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin);
        }
        app.register_diagnostic(Diagnostic::new(MEMORY_BYTES).with_suffix(" B"))
            .insert_resource(PerfSampler(self.sampler.clone()))
            .add_event::<PerfReportEvent>()
            .add_systems(Update, tick_perf_monitor);
    }
}
