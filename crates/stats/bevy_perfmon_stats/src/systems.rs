use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use perfmon_stats_core::{MetricKind, MetricSource, TextSink};

use crate::components::{PerfFrameCountLabel, PerfStatsLabel};
use crate::resources::{PerfReportEvent, PerfSampler, MEMORY_BYTES};

/// Reads host counters out of Bevy's [`DiagnosticsStore`]. Missing or not yet
/// measured diagnostics read as zero.
pub struct DiagnosticsSource<'a> {
    pub store: Option<&'a DiagnosticsStore>,
}

impl DiagnosticsSource<'_> {
    fn read(&self, path: &bevy::diagnostic::DiagnosticPath, smoothed: bool) -> f64 {
        self.store
            .and_then(|store| store.get(path))
            .and_then(|d| if smoothed { d.smoothed() } else { d.value() })
            .unwrap_or(0.0)
    }
}

impl MetricSource for DiagnosticsSource<'_> {
    fn get_metric(&mut self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Fps => self.read(&FrameTimeDiagnosticsPlugin::FPS, true),
            // FRAME_TIME is reported in milliseconds
            MetricKind::DrawTimeSeconds => {
                self.read(&FrameTimeDiagnosticsPlugin::FRAME_TIME, false) / 1000.0
            }
            MetricKind::MemoryBytes => self.read(&MEMORY_BYTES, false),
        }
    }
}

/// Writes into the first section of a `Text`, creating it if absent.
struct LabelSink<'a>(&'a mut Text);

impl TextSink for LabelSink<'_> {
    fn set_text(&mut self, text: &str) {
        match self.0.sections.first_mut() {
            Some(section) => {
                section.value.clear();
                section.value.push_str(text);
            }
            None => self
                .0
                .sections
                .push(TextSection::new(text, TextStyle::default())),
        }
    }
}

/// Per-frame tick: sample, refresh labels, emit reports.
pub fn tick_perf_monitor(
    mut sampler: ResMut<PerfSampler>,
    store: Option<Res<DiagnosticsStore>>,
    mut frame_labels: Query<&mut Text, (With<PerfFrameCountLabel>, Without<PerfStatsLabel>)>,
    mut stats_labels: Query<&mut Text, (With<PerfStatsLabel>, Without<PerfFrameCountLabel>)>,
    mut reports: EventWriter<PerfReportEvent>,
) {
    let mut source = DiagnosticsSource {
        store: store.as_deref(),
    };
    let out = sampler.0.tick(&mut source);

    if out.sampled {
        let line = format!("Frame count: {}", out.frame_count);
        for mut text in frame_labels.iter_mut() {
            LabelSink(&mut *text).set_text(&line);
        }
    }

    if let Some(report) = out.report {
        debug!(
            "perf report: {} frames, {} samples",
            report.frame_count, report.sample_count
        );
        let block = report.to_text();
        for mut text in stats_labels.iter_mut() {
            LabelSink(&mut *text).set_text(&block);
        }
        reports.send(PerfReportEvent(report));
    }
}

/// Spawn the frame-count and statistics labels in the top-left corner.
/// Returns `(frame_count_label, stats_label)`.
pub fn spawn_overlay(commands: &mut Commands) -> (Entity, Entity) {
    let style = TextStyle {
        font_size: 16.0,
        color: Color::WHITE,
        ..default()
    };
    let frame = commands
        .spawn((
            TextBundle::from_section("Frame count: 0", style.clone()).with_style(Style {
                position_type: PositionType::Absolute,
                top: Val::Px(4.0),
                left: Val::Px(4.0),
                ..default()
            }),
            PerfFrameCountLabel,
        ))
        .id();
    let stats = commands
        .spawn((
            TextBundle::from_section("", style).with_style(Style {
                position_type: PositionType::Absolute,
                top: Val::Px(24.0),
                left: Val::Px(4.0),
                ..default()
            }),
            PerfStatsLabel,
        ))
        .id();
    (frame, stats)
}
