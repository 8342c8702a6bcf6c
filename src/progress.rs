// src/progress.rs
/// Progress reporting for the (simulated) extraction.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the URL has been accepted.
    fn begin(&mut self, _url: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end with the number of elements found.
    fn finish(&mut self, _found: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
