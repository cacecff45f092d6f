// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, PoisonError},
    thread::JoinHandle,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::SearchBoard,
    error::ProgressError,
    search::{self, Lookup, RunReport, SimulatedLookup},
};

use super::{
    components::company_panel,
    popup::{Popup, PopupEvent},
    progress::GuiProgress,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Company Contact Finder",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

type Worker = JoinHandle<Result<RunReport, ProgressError>>;

pub struct App {
    // single source of truth for selection/options (UI thread only)
    pub state: AppState,

    // what the popup renders; the worker writes, we read
    pub board: SearchBoard,
    pub popup: Popup,

    pub lookup: Arc<dyn Lookup>,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,
    pub worker: Option<Worker>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.options.validate();
        let lookup = Arc::new(SimulatedLookup::new(
            state.options.success_probability,
            state.options.seed,
        ));
        Self::with_lookup(state, lookup)
    }

    /// Same app, backed by a different lookup (e.g. a real one).
    pub fn with_lookup(mut state: AppState, lookup: Arc<dyn Lookup>) -> Self {
        state.sync_selection_into_options();
        logf!(
            "Init: companies={} selected={}",
            state.companies.len(),
            state.gui.selected.len()
        );

        let app = Self {
            state,
            board: SearchBoard::new(),
            popup: Popup::default(),
            lookup,
            status: Arc::new(Mutex::new(s!("Idle"))),
            worker: None,
        };
        app.set_selection_message();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    pub fn set_selection_message(&self) {
        let n = self.state.gui.selected.len();
        self.status(format!("Selection: {n} compan{}, not searched yet", if n == 1 { "y" } else { "ies" }));
    }

    pub fn on_selection_changed(&mut self) {
        self.state.sync_selection_into_options();
        // Don't overwrite progress messages with selection info
        if !self.is_running() {
            self.set_selection_message();
        }
        logf!(
            "UI: Selection changed ({} companies): {:?}",
            self.state.options.companies.len(),
            &self.state.options.companies
        );
    }

    /* ---------- actions ---------- */

    pub fn start_search(&mut self, ctx: &egui::Context) {
        self.state.sync_selection_into_options();
        let mut opts = self.state.options.clone();
        opts.validate();

        let prog = GuiProgress::new(Arc::clone(&self.status), ctx.clone());
        match search::spawn_search(&self.board, opts, Arc::clone(&self.lookup), Box::new(prog)) {
            Ok((run, worker)) => {
                logf!("UI: Search started run={}", run);
                // An older worker is stale now; it exits on its own.
                self.worker = Some(worker);
            }
            Err(e) => {
                loge!("UI: Search failed to start: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }

    pub fn close_popup(&mut self) {
        let cancelled = self.is_running();
        let run = self.board.current_run();
        self.board.close();
        if cancelled {
            self.status("Search cancelled");
        }
        logf!("UI: Popup closed run={:?} cancelled={}", run, cancelled);
    }

    /// Join the worker once it is done and log how the run ended.
    fn reap_worker(&mut self) {
        if !self.worker.as_ref().is_some_and(|w| w.is_finished()) {
            return;
        }
        let Some(worker) = self.worker.take() else { return };

        match worker.join() {
            Ok(Ok(r)) => logf!(
                "Search: Worker exit run={} processed={}/{} completed={} superseded={}",
                r.run, r.processed, r.total, r.completed, r.superseded
            ),
            Ok(Err(e)) => {
                loge!("Search: Worker error: {}", e);
                self.status(format!("Error: {e}"));
            }
            Err(_) => {
                loge!("Search: Worker panicked");
                self.status("Error: search worker crashed");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.reap_worker();

        egui::SidePanel::left("companies")
            .resizable(false)
            .show(ctx, |ui| {
                company_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Company Contact Finder");
            ui.label("Search for contact information and personnel details for selected companies.");

            ui.separator();

            let n = self.state.gui.selected.len();
            let label = format!("Search {n} selected compan{}", if n == 1 { "y" } else { "ies" });
            if ui.add_enabled(n > 0 && !self.is_running(), egui::Button::new(label)).clicked() {
                self.start_search(ctx);
            }

            ui.separator();

            ui.label(self.status_text());
        });

        if let Some((run, snap)) = self.board.snapshot() {
            if let Some(PopupEvent::Close) = self.popup.show(ctx, run, &snap) {
                self.close_popup();
            }
        }
    }
}
