// src/gui/progress.rs
use std::sync::{Arc, Mutex, PoisonError};

use eframe::egui;

use crate::{
    core::{RunId, Snapshot},
    progress::Progress,
};

/// Worker-side sink: mirrors the run into the status line and wakes the UI
/// thread so the popup re-renders the board.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    last_error: Option<String>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, last_error: None }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, _run: RunId, snapshot: &Snapshot) {
        self.last_error = None;
        self.set_status(format!("Searching {} compan{}…",
            snapshot.total, if snapshot.total == 1 { "y" } else { "ies" }));
    }
    fn snapshot_changed(&mut self, _run: RunId, snapshot: &Snapshot) {
        let line = format!("Searched {}/{}", snapshot.current, snapshot.total);
        match &self.last_error {
            Some(err) => self.set_status(join!(&line, " · last error: ", err)),
            None => self.set_status(line),
        }
    }
    fn log(&mut self, msg: &str) {
        self.last_error = Some(s!(msg));
        self.set_status(s!(msg));
    }
    fn done(&mut self, _run: RunId, snapshot: &Snapshot) {
        if snapshot.total == 0 {
            self.set_status(s!("Search completed! (nothing to search)"));
        } else {
            self.set_status(format!("Search completed! ({}/{})", snapshot.current, snapshot.total));
        }
    }
}
