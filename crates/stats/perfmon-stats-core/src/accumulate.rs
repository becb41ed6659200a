//! Running sum/min/max/average for one tracked metric.

use serde::{Deserialize, Serialize};

use crate::metric::MetricKind;
use crate::report::MetricSnapshot;

/// Accumulator state for a single metric.
///
/// `sum` and `average` cover the current reporting window only. `min` and
/// `max` stay `None` until a qualifying sample is folded; whether they
/// survive a report tick is decided by the sampler's [`crate::ExtremaScope`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricAccumulator {
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub average: f64,
    /// Most recent raw reading.
    pub current: f64,
}

impl Default for MetricAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricAccumulator {
    pub fn new() -> Self {
        Self {
            sum: 0.0,
            min: None,
            max: None,
            average: 0.0,
            current: 0.0,
        }
    }

    /// Fold one sample. `sample_count` is the window's count including this
    /// sample; a zero count leaves `average` untouched instead of dividing.
    pub fn fold_sample(&mut self, value: f64, sample_count: u64, exclude_zero_from_min: bool) {
        self.current = value;
        self.sum += value;
        if sample_count > 0 {
            self.average = self.sum / sample_count as f64;
        }
        if !(exclude_zero_from_min && value == 0.0) && self.min.map_or(true, |min| value < min) {
            self.min = Some(value);
        }
        if self.max.map_or(true, |max| value > max) {
            self.max = Some(value);
        }
    }

    /// Clear the per-window sum and average.
    pub fn reset_window(&mut self) {
        self.sum = 0.0;
        self.average = 0.0;
    }

    /// Forget min/max.
    pub fn reset_extrema(&mut self) {
        self.min = None;
        self.max = None;
    }

    /// Copy out the reportable view. `average` is `None` when the window has
    /// no samples.
    pub fn snapshot(&self, kind: MetricKind, has_samples: bool) -> MetricSnapshot {
        MetricSnapshot {
            kind,
            average: has_samples.then_some(self.average),
            min: self.min,
            max: self.max,
            current: self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_three() {
        let mut acc = MetricAccumulator::new();
        for (i, v) in [60.0, 30.0, 90.0].into_iter().enumerate() {
            acc.fold_sample(v, i as u64 + 1, false);
        }
        assert_eq!(acc.average, 60.0);
        assert_eq!(acc.min, Some(30.0));
        assert_eq!(acc.max, Some(90.0));
        assert_eq!(acc.current, 90.0);
    }

    #[test]
    fn zero_excluded_from_min_only() {
        let mut acc = MetricAccumulator::new();
        for (i, v) in [0.0, 0.002, 0.0, 0.005].into_iter().enumerate() {
            acc.fold_sample(v, i as u64 + 1, true);
        }
        assert_eq!(acc.min, Some(0.002));
        assert_eq!(acc.max, Some(0.005));
        assert!((acc.sum - 0.007).abs() < 1e-12);
        assert!((acc.average - 0.00175).abs() < 1e-12);
    }

    #[test]
    fn zero_counts_toward_max() {
        let mut acc = MetricAccumulator::new();
        acc.fold_sample(0.0, 1, true);
        assert_eq!(acc.min, None);
        assert_eq!(acc.max, Some(0.0));
    }

    #[test]
    fn zero_sample_count_does_not_divide() {
        let mut acc = MetricAccumulator::new();
        acc.fold_sample(5.0, 0, false);
        assert_eq!(acc.average, 0.0);
        assert!(acc.average.is_finite());
    }

    #[test]
    fn window_reset_keeps_extrema() {
        let mut acc = MetricAccumulator::new();
        acc.fold_sample(10.0, 1, false);
        acc.reset_window();
        assert_eq!(acc.sum, 0.0);
        assert_eq!(acc.min, Some(10.0));
        assert_eq!(acc.max, Some(10.0));
        acc.reset_extrema();
        assert_eq!(acc.min, None);
        assert_eq!(acc.max, None);
    }

    #[test]
    fn infinite_readings_are_real_extrema() {
        let mut acc = MetricAccumulator::new();
        acc.fold_sample(f64::INFINITY, 1, false);
        let snap = acc.snapshot(MetricKind::Fps, true);
        assert_eq!(snap.average, Some(f64::INFINITY));
        assert_eq!(snap.min, Some(f64::INFINITY));
        assert_eq!(snap.max, Some(f64::INFINITY));

        acc.fold_sample(60.0, 2, false);
        assert_eq!(acc.min, Some(60.0));
        assert_eq!(acc.max, Some(f64::INFINITY));

        let mut acc = MetricAccumulator::new();
        acc.fold_sample(f64::NEG_INFINITY, 1, false);
        assert_eq!(acc.min, Some(f64::NEG_INFINITY));
        assert_eq!(acc.max, Some(f64::NEG_INFINITY));
    }
}
