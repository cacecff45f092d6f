// src/progress.rs
use crate::core::{RunId, Snapshot};

/// Observer for a running search. The driver calls it after every accepted
/// model mutation; frontends (GUI/CLI) implement it to redraw.
/// Updates from superseded runs are never delivered.
pub trait Progress {
    /// Called once with the fresh snapshot of a new run.
    fn begin(&mut self, _run: RunId, _snapshot: &Snapshot) {}

    /// The snapshot of `run` changed.
    fn snapshot_changed(&mut self, _run: RunId, _snapshot: &Snapshot) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// The run reached `current == total`. Fires at most once per run.
    fn done(&mut self, _run: RunId, _snapshot: &Snapshot) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
