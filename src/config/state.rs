// src/config/state.rs
use super::{
    consts::{DEFAULT_SELECTED, DEMO_COMPANIES, WINDOW_H, WINDOW_W},
    options::SearchOptions,
};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Indices into `AppState::companies` picked in the left panel
    pub selected: Vec<usize>,

    /// Anchor for shift-click range selection
    pub last_clicked: Option<usize>,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected: (0..DEFAULT_SELECTED.min(DEMO_COMPANIES.len())).collect(),
            last_clicked: None,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    /// Every company the user can pick from
    pub companies: Vec<String>,
    pub options: SearchOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            companies: DEMO_COMPANIES.iter().map(|s| s!(*s)).collect(),
            options: SearchOptions::default(),
            gui: GuiState::default(),
        }
    }
}

impl AppState {
    /// Mirror GUI selection → options.companies, in list order.
    pub fn sync_selection_into_options(&mut self) {
        let mut idx = self.gui.selected.clone();
        idx.sort_unstable();
        idx.dedup();
        self.options.companies = idx
            .into_iter()
            .filter_map(|i| self.companies.get(i).cloned())
            .collect();
    }
}
