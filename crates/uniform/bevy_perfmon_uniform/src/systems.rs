use bevy::prelude::*;

use crate::components::{ShaderUniforms, UniformOscillator};

pub fn drive_uniform_oscillators(mut q: Query<(&mut UniformOscillator, &mut ShaderUniforms)>) {
    for (mut osc, mut uniforms) in q.iter_mut() {
        let osc = &mut *osc;
        if !osc.started {
            osc.oscillator.start(&mut *uniforms);
            osc.started = true;
        }
        osc.oscillator.tick(&mut *uniforms);
    }
}
