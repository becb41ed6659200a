//! perfmon-uniform-core (engine-agnostic)
//!
//! Animates a named float shader uniform by linearly interpolating between
//! two random targets, re-rolling the next target each time a lerp completes.

pub mod config;
pub mod oscillator;
pub mod sink;

pub use config::{OscillatorConfig, OscillatorError};
pub use oscillator::{lerp, LerpOscillator};
pub use sink::ShaderUniformSink;
