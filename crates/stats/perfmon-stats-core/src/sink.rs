//! Display sink for formatted overlay text.

/// Opaque "set label text" capability supplied by the host.
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

impl TextSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl<T: TextSink + ?Sized> TextSink for &mut T {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}
