use bevy::prelude::*;

/// Text entity that receives the statistics block on every report.
#[derive(Component, Debug, Default)]
pub struct PerfStatsLabel;

/// Text entity that receives `Frame count: N` on every sample.
#[derive(Component, Debug, Default)]
pub struct PerfFrameCountLabel;
