// src/core/board.rs
//
// One popup instance = one board. The board holds the model of the run that is
// currently shown and a generation counter. Every start/close bumps the
// generation, so a handle from an older run turns into a no-op.

use std::{
    fmt,
    sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use crate::error::ProgressError;

use super::{model::ProgressModel, snapshot::Snapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a mutation applied through a live `RunHandle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    pub run: RunId,
    pub snapshot: Snapshot,
    /// Set on the one mutation that made the run complete.
    pub completed: bool,
}

#[derive(Default)]
struct Inner {
    model: ProgressModel,
    generation: u64,
    open: bool,
}

#[derive(Default)]
struct Shared {
    state: Mutex<Inner>,
    changed: Condvar,
}

fn lock(m: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone, Default)]
pub struct SearchBoard {
    shared: Arc<Shared>,
}

impl SearchBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard whatever run is showing and start a new one.
    /// On `InvalidTotal` the previous run is left untouched.
    pub fn start(&self, total: i64) -> Result<RunHandle, ProgressError> {
        let mut g = lock(&self.shared.state);
        g.model.start(total)?;
        g.generation += 1;
        g.open = true;
        let id = RunId(g.generation);
        drop(g);

        self.shared.changed.notify_all();
        logd!("Board: Start run={} total={}", id, total);
        Ok(RunHandle { id, shared: Arc::clone(&self.shared) })
    }

    /// Close the popup. The running driver (if any) becomes stale.
    pub fn close(&self) {
        let mut g = lock(&self.shared.state);
        if !g.open {
            return;
        }
        g.generation += 1;
        g.open = false;
        g.model = ProgressModel::new();
        drop(g);

        self.shared.changed.notify_all();
        logd!("Board: Closed");
    }

    pub fn is_open(&self) -> bool {
        lock(&self.shared.state).open
    }

    /// Id of the run on display, if any.
    pub fn current_run(&self) -> Option<RunId> {
        let g = lock(&self.shared.state);
        g.open.then_some(RunId(g.generation))
    }

    /// Copy of what the popup should render right now.
    pub fn snapshot(&self) -> Option<(RunId, Snapshot)> {
        let g = lock(&self.shared.state);
        g.open.then(|| (RunId(g.generation), g.model.snapshot().clone()))
    }
}

/// Write access to one run. Only the driver of that run holds one.
pub struct RunHandle {
    id: RunId,
    shared: Arc<Shared>,
}

impl RunHandle {
    pub fn id(&self) -> RunId {
        self.id
    }

    pub fn is_current(&self) -> bool {
        let g = lock(&self.shared.state);
        g.open && g.generation == self.id.0
    }

    /// Apply `f` to the model if this run is still current.
    /// `Ok(None)` means the run was superseded and nothing happened.
    pub fn apply<F>(&self, f: F) -> Result<Option<Applied>, ProgressError>
    where
        F: for<'a> FnOnce(&'a mut ProgressModel) -> Result<&'a Snapshot, ProgressError>,
    {
        let mut g = lock(&self.shared.state);
        if !g.open || g.generation != self.id.0 {
            logd!("Board: Dropped update from stale run={}", self.id);
            return Ok(None);
        }
        let snapshot = f(&mut g.model)?.clone();
        let completed = g.model.take_completion();
        Ok(Some(Applied { run: self.id, snapshot, completed }))
    }

    /// Sleep up to `dur`, waking early when the run is superseded.
    /// Returns whether the run is still current.
    pub fn sleep(&self, dur: Duration) -> bool {
        let deadline = Instant::now() + dur;
        let mut g = lock(&self.shared.state);
        loop {
            if !g.open || g.generation != self.id.0 {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            let (next, _) = self
                .shared
                .changed
                .wait_timeout(g, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            g = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn sleep_wakes_when_superseded() {
        let board = SearchBoard::new();
        let run = board.start(1).unwrap();

        let b2 = board.clone();
        let t = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            b2.start(2).unwrap().id()
        });

        let started = Instant::now();
        assert!(!run.sleep(Duration::from_secs(10)));
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_ne!(t.join().unwrap(), run.id());
    }

    #[test]
    fn sleep_returns_true_for_live_run() {
        let board = SearchBoard::new();
        let run = board.start(1).unwrap();
        assert!(run.sleep(Duration::from_millis(1)));
        assert!(run.sleep(Duration::ZERO));
    }
}
