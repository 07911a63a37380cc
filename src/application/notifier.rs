// src/application/notifier.rs

/// User-visible feedback for finished actions
pub trait Notifier {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}
