//! FrameStatsSampler: per-frame two-phase cycle {accumulate-if-due} → {report-if-due}.

use crate::accumulate::MetricAccumulator;
use crate::config::{ExtremaScope, SamplerConfig};
use crate::error::ConfigError;
use crate::metric::{MetricKind, MetricSource};
use crate::report::{Report, ReportStats};

/// Result of one [`FrameStatsSampler::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    /// A sample was folded on this tick.
    pub sampled: bool,
    /// Frame count reached on this tick, before any report reset.
    pub frame_count: u64,
    pub report: Option<Report>,
}

/// Windowed statistics over a host's frame metrics.
///
/// Invariant: `sample_count == frame_count / sample_interval` after every tick.
#[derive(Clone, Debug)]
pub struct FrameStatsSampler {
    cfg: SamplerConfig,
    frame_count: u64,
    sample_count: u64,
    fps: MetricAccumulator,
    draw_time: MetricAccumulator,
    memory: MetricAccumulator,
}

impl FrameStatsSampler {
    /// Create a sampler with reset accumulators.
    pub fn new(cfg: SamplerConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::from_valid(cfg))
    }

    fn from_valid(cfg: SamplerConfig) -> Self {
        Self {
            cfg,
            frame_count: 0,
            sample_count: 0,
            fps: MetricAccumulator::new(),
            draw_time: MetricAccumulator::new(),
            memory: MetricAccumulator::new(),
        }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.cfg
    }

    /// Frames elapsed since the last report.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Samples taken since the last report.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn accumulator(&self, kind: MetricKind) -> &MetricAccumulator {
        match kind {
            MetricKind::Fps => &self.fps,
            MetricKind::DrawTimeSeconds => &self.draw_time,
            MetricKind::MemoryBytes => &self.memory,
        }
    }

    fn accumulator_mut(&mut self, kind: MetricKind) -> &mut MetricAccumulator {
        match kind {
            MetricKind::Fps => &mut self.fps,
            MetricKind::DrawTimeSeconds => &mut self.draw_time,
            MetricKind::MemoryBytes => &mut self.memory,
        }
    }

    /// Advance one rendered frame, returning only the report (if due).
    pub fn on_frame_tick(&mut self, source: &mut dyn MetricSource) -> Option<Report> {
        self.tick(source).report
    }

    /// Advance one rendered frame: sample every `sample_interval` frames,
    /// report and reset once `report_interval` frames have elapsed.
    pub fn tick(&mut self, source: &mut dyn MetricSource) -> TickOutcome {
        self.frame_count += 1;

        let sampled = self.frame_count % u64::from(self.cfg.sample_interval) == 0;
        if sampled {
            self.sample_count += 1;
            let count = self.sample_count;
            for kind in MetricKind::ALL {
                let value = source.get_metric(kind);
                self.accumulator_mut(kind)
                    .fold_sample(value, count, kind.excludes_zero_from_min());
            }
            log::trace!(
                "sample {} at frame {}: fps={} draw_time={} memory={}",
                count,
                self.frame_count,
                self.fps.current,
                self.draw_time.current,
                self.memory.current
            );
        }

        let frame_count = self.frame_count;
        let report = if self.frame_count >= u64::from(self.cfg.report_interval) {
            let report = self.report();
            log::debug!(
                "report after {} frames / {} samples",
                report.frame_count,
                report.sample_count
            );
            self.reset_window();
            Some(report)
        } else {
            None
        };

        TickOutcome {
            sampled,
            frame_count,
            report,
        }
    }

    /// Snapshot the current window without resetting it. With no samples the
    /// report carries no numeric fields.
    pub fn report(&self) -> Report {
        let has_samples = self.sample_count > 0;
        let stats = has_samples.then(|| ReportStats {
            fps: self.fps.snapshot(MetricKind::Fps, true),
            draw_time: self
                .draw_time
                .snapshot(MetricKind::DrawTimeSeconds, true),
            memory: self.memory.snapshot(MetricKind::MemoryBytes, true),
        });
        Report {
            frame_count: self.frame_count,
            sample_count: self.sample_count,
            stats,
        }
    }

    fn reset_window(&mut self) {
        self.frame_count = 0;
        self.sample_count = 0;
        let windowed = self.cfg.extrema == ExtremaScope::Windowed;
        for kind in MetricKind::ALL {
            let acc = self.accumulator_mut(kind);
            acc.reset_window();
            if windowed {
                acc.reset_extrema();
            }
        }
    }
}

impl Default for FrameStatsSampler {
    fn default() -> Self {
        Self::from_valid(SamplerConfig::default())
    }
}
