//! PerformanceMonitor: the sampler wired to a metric source and two overlay labels.
//!
//! The frame-count label is refreshed on every sample tick, the stats label on
//! every report tick. Hosts call [`PerformanceMonitor::on_frame_tick`] from
//! their per-frame callback.

use crate::config::SamplerConfig;
use crate::error::ConfigError;
use crate::metric::MetricSource;
use crate::report::Report;
use crate::sampler::FrameStatsSampler;
use crate::sink::TextSink;

pub struct PerformanceMonitor<S, F, T> {
    sampler: FrameStatsSampler,
    source: S,
    frame_label: F,
    stats_label: T,
    last_report: Option<Report>,
}

impl<S, F, T> PerformanceMonitor<S, F, T>
where
    S: MetricSource,
    F: TextSink,
    T: TextSink,
{
    pub fn new(
        cfg: SamplerConfig,
        source: S,
        frame_label: F,
        stats_label: T,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            sampler: FrameStatsSampler::new(cfg)?,
            source,
            frame_label,
            stats_label,
            last_report: None,
        })
    }

    /// Per-frame hook. `_delta_seconds` is accepted for parity with host
    /// callbacks; cadence is counted in frames.
    pub fn on_frame_tick(&mut self, _delta_seconds: f64) -> Option<Report> {
        let out = self.sampler.tick(&mut self.source);
        if out.sampled {
            self.frame_label
                .set_text(&format!("Frame count: {}", out.frame_count));
        }
        if let Some(report) = &out.report {
            self.stats_label.set_text(&report.to_text());
            self.last_report = Some(report.clone());
        }
        out.report
    }

    pub fn sampler(&self) -> &FrameStatsSampler {
        &self.sampler
    }

    /// Most recent report emitted, if any.
    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    pub fn frame_label(&self) -> &F {
        &self.frame_label
    }

    pub fn stats_label(&self) -> &T {
        &self.stats_label
    }

    pub fn into_parts(self) -> (S, F, T) {
        (self.source, self.frame_label, self.stats_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::MetricKind;

    #[test]
    fn labels_follow_cadence() {
        let cfg = SamplerConfig {
            sample_interval: 2,
            report_interval: 4,
            ..Default::default()
        };
        let src = |kind: MetricKind| match kind {
            MetricKind::Fps => 30.0,
            MetricKind::DrawTimeSeconds => 0.01,
            MetricKind::MemoryBytes => 3e6,
        };
        let mut mon = PerformanceMonitor::new(cfg, src, String::new(), String::new()).unwrap();

        assert!(mon.on_frame_tick(0.016).is_none());
        assert!(mon.frame_label().is_empty());
        assert!(mon.on_frame_tick(0.016).is_none());
        assert_eq!(mon.frame_label(), "Frame count: 2");
        assert!(mon.stats_label().is_empty());

        mon.on_frame_tick(0.016);
        let report = mon.on_frame_tick(0.016).expect("report at frame 4");
        assert_eq!(mon.frame_label(), "Frame count: 4");
        assert_eq!(mon.stats_label(), &report.to_text());
        assert!(mon.stats_label().starts_with("Avg. FPS: 30"));
        assert_eq!(mon.last_report(), Some(&report));
    }
}
