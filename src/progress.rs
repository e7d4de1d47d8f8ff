// src/progress.rs
/// Lightweight progress reporting for a comparison run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of cities requested.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A city produced rows.
    fn item_done(&mut self, _city: &str) {}

    /// A city produced nothing (fetch failed or no table).
    fn item_failed(&mut self, _city: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
