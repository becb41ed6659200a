use bevy::prelude::*;

pub mod components;
pub mod systems;

pub use components::{ShaderUniforms, UniformOscillator};
pub use systems::drive_uniform_oscillators;

/// Ticks every [`UniformOscillator`] once per frame, writing into the
/// entity's [`ShaderUniforms`]. Apps copy those values into their material.
pub struct UniformOscillatorPlugin;

impl Plugin for UniformOscillatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, drive_uniform_oscillators);
    }
}
