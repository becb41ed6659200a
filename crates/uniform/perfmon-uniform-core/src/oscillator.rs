//! Two-point randomized linear oscillator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{OscillatorConfig, OscillatorError};
use crate::sink::ShaderUniformSink;

/// `a*(1-t) + b*t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Interpolates from `previous` to `next` over `lerp_frames` ticks, then
/// promotes `next` to `previous` and draws a fresh `next`.
#[derive(Debug, Clone)]
pub struct LerpOscillator<R: Rng = StdRng> {
    cfg: OscillatorConfig,
    rng: R,
    previous: f32,
    next: f32,
    elapsed: u32,
    value: f32,
}

impl LerpOscillator<StdRng> {
    pub fn from_entropy(cfg: OscillatorConfig) -> Result<Self, OscillatorError> {
        Self::new(cfg, StdRng::from_entropy())
    }

    pub fn seeded(cfg: OscillatorConfig, seed: u64) -> Result<Self, OscillatorError> {
        Self::new(cfg, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LerpOscillator<R> {
    /// Validate the config and draw both initial targets.
    pub fn new(cfg: OscillatorConfig, mut rng: R) -> Result<Self, OscillatorError> {
        cfg.validate()?;
        let previous = roll(&cfg, &mut rng);
        let next = roll(&cfg, &mut rng);
        Ok(Self {
            cfg,
            rng,
            previous,
            next,
            elapsed: 0,
            value: previous,
        })
    }

    pub fn config(&self) -> &OscillatorConfig {
        &self.cfg
    }

    /// Write the initial value to the uniform.
    pub fn start(&mut self, sink: &mut dyn ShaderUniformSink) {
        log::debug!(
            "oscillator '{}' starting at {} (next {})",
            self.cfg.uniform,
            self.previous,
            self.next
        );
        sink.set_float(&self.cfg.uniform, self.value);
    }

    /// Advance one frame and write the interpolated value.
    pub fn tick(&mut self, sink: &mut dyn ShaderUniformSink) -> f32 {
        if self.elapsed >= self.cfg.lerp_frames {
            self.previous = self.next;
            self.next = roll(&self.cfg, &mut self.rng);
            self.elapsed = 0;
            log::debug!(
                "oscillator '{}' reached {}, next target {}",
                self.cfg.uniform,
                self.previous,
                self.next
            );
        }
        self.value = lerp(self.previous, self.next, self.progress());
        log::trace!(
            "oscillator '{}': value={} elapsed={}",
            self.cfg.uniform,
            self.value,
            self.elapsed
        );
        sink.set_float(&self.cfg.uniform, self.value);
        self.elapsed += 1;
        self.value
    }

    /// Fraction of the current lerp completed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.elapsed as f32 / self.cfg.lerp_frames as f32).min(1.0)
    }

    /// Last value written.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// `(previous, next)` targets of the current lerp.
    pub fn targets(&self) -> (f32, f32) {
        (self.previous, self.next)
    }
}

fn roll<R: Rng>(cfg: &OscillatorConfig, rng: &mut R) -> f32 {
    rng.gen_range(cfg.min_percent..cfg.max_percent) as f32 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0.5, 1.5, 0.0), 0.5);
        assert_eq!(lerp(0.5, 1.5, 1.0), 1.5);
        assert!((lerp(0.5, 1.5, 0.25) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn first_tick_writes_previous_target() {
        let mut osc = LerpOscillator::seeded(OscillatorConfig::default(), 7).unwrap();
        let (prev, _) = osc.targets();
        let mut map: HashMap<String, f32> = HashMap::new();
        osc.start(&mut map);
        assert_eq!(map["rand_factor"], prev);
        let v = osc.tick(&mut map);
        assert_eq!(v, prev);
        assert!((osc.progress() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn same_seed_same_sequence() {
        let cfg = OscillatorConfig::default();
        let mut a = LerpOscillator::seeded(cfg.clone(), 42).unwrap();
        let mut b = LerpOscillator::seeded(cfg, 42).unwrap();
        let mut sink: HashMap<String, f32> = HashMap::new();
        for _ in 0..350 {
            assert_eq!(a.tick(&mut sink), b.tick(&mut sink));
        }
    }
}
