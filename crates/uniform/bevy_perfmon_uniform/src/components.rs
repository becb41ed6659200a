use bevy::prelude::*;
use hashbrown::HashMap;
use perfmon_uniform_core::{LerpOscillator, OscillatorConfig, OscillatorError, ShaderUniformSink};

/// Oscillator attached to an entity. The first tick writes the starting
/// target before interpolating.
#[derive(Component, Debug)]
pub struct UniformOscillator {
    pub oscillator: LerpOscillator,
    pub(crate) started: bool,
}

impl UniformOscillator {
    pub fn new(oscillator: LerpOscillator) -> Self {
        Self {
            oscillator,
            started: false,
        }
    }

    pub fn from_entropy(cfg: OscillatorConfig) -> Result<Self, OscillatorError> {
        LerpOscillator::from_entropy(cfg).map(Self::new)
    }

    pub fn seeded(cfg: OscillatorConfig, seed: u64) -> Result<Self, OscillatorError> {
        LerpOscillator::seeded(cfg, seed).map(Self::new)
    }
}

/// Latest uniform values written by oscillators on this entity.
#[derive(Component, Debug, Default, Clone)]
pub struct ShaderUniforms {
    pub values: HashMap<String, f32>,
}

impl ShaderUniforms {
    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }
}

impl ShaderUniformSink for ShaderUniforms {
    fn set_float(&mut self, name: &str, value: f32) {
        self.values.set_float(name, value);
    }
}
