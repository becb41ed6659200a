//! Shader uniform write capability.

use hashbrown::HashMap;

/// Host material binding: sets a named float uniform.
pub trait ShaderUniformSink {
    fn set_float(&mut self, name: &str, value: f32);
}

impl ShaderUniformSink for HashMap<String, f32> {
    fn set_float(&mut self, name: &str, value: f32) {
        match self.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.insert(name.to_string(), value);
            }
        }
    }
}

impl<T: ShaderUniformSink + ?Sized> ShaderUniformSink for &mut T {
    fn set_float(&mut self, name: &str, value: f32) {
        (**self).set_float(name, value);
    }
}
