// src/gui/popup.rs
//
// Modal showing the run on the board. Read-only: the only thing it hands back
// is a close request, which the app forwards to the board.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::{POPUP_LIST_H, POPUP_W},
    core::{RunId, Snapshot, Status},
    view::{Indicator, PopupView},
};

const ROW_H: f32 = 32.0;
const ICON_COL_W: f32 = 64.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupEvent {
    Close,
}

/// Per-popup view state that survives between frames.
#[derive(Debug, Default)]
pub struct Popup {
    run: Option<RunId>,
    focus: Option<usize>,
}

impl Popup {
    /// Take in the snapshot for this frame. Returns the row to scroll to when
    /// the row being worked on moved since the last frame.
    pub fn observe(&mut self, run: RunId, snap: &Snapshot) -> Option<usize> {
        if self.run != Some(run) {
            self.run = Some(run);
            self.focus = None;
        }
        let focus = snap
            .entities
            .iter()
            .rposition(|e| e.contact != Status::Idle || e.person != Status::Idle);
        if focus != self.focus {
            self.focus = focus;
            return focus;
        }
        None
    }

    pub fn show(&mut self, ctx: &egui::Context, run: RunId, snap: &Snapshot) -> Option<PopupEvent> {
        let view = PopupView::from_snapshot(snap);
        let scroll_to = self.observe(run, snap);
        let mut close = false;

        let resp = egui::Modal::new(egui::Id::new("search_status_popup")).show(ctx, |ui| {
            ui.set_width(POPUP_W);

            ui.vertical_centered(|ui| {
                ui.heading(view.title.as_str());
            });
            ui.add_space(6.0);
            ui.add(egui::ProgressBar::new(view.fraction()).text(format!("{}%", view.percent)));
            ui.add_space(8.0);

            if view.rows.is_empty() {
                ui.label("Nothing to search.");
            } else {
                rows_table(ui, &view, scroll_to);
            }

            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        });

        (close || resp.should_close()).then_some(PopupEvent::Close)
    }
}

fn rows_table(ui: &mut egui::Ui, view: &PopupView, scroll_to: Option<usize>) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder())
        .column(Column::exact(ICON_COL_W))
        .column(Column::exact(ICON_COL_W))
        .min_scrolled_height(0.0)
        .max_scroll_height(POPUP_LIST_H);

    if let Some(row) = scroll_to {
        table = table.scroll_to_row(row, Some(egui::Align::BOTTOM));
    }

    table
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("Company"); });
            header.col(|ui| { ui.strong("Contact"); });
            header.col(|ui| { ui.strong("Person"); });
        })
        .body(|mut body| {
            for row in &view.rows {
                body.row(ROW_H, |mut r| {
                    r.col(|ui| { ui.label(RichText::new(row.name.as_str()).size(15.0)); });
                    r.col(|ui| indicator(ui, row.contact));
                    r.col(|ui| indicator(ui, row.person));
                });
            }
        });
}

fn indicator(ui: &mut egui::Ui, ind: Indicator) {
    match ind {
        Indicator::Blank => {}
        Indicator::Spinner => {
            ui.add(egui::Spinner::new().size(16.0));
        }
        Indicator::Positive => {
            ui.label(RichText::new(ind.glyph()).strong().color(Color32::from_rgb(22, 163, 74)));
        }
        Indicator::Negative => {
            ui.label(RichText::new(ind.glyph()).strong().color(Color32::from_rgb(220, 38, 38)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, Outcome, SearchBoard};

    #[test]
    fn focus_follows_the_active_row() {
        let board = SearchBoard::new();
        let h = board.start(3).unwrap();
        let mut popup = Popup::default();

        let a = h.apply(|m| m.begin_entity("A")).unwrap().unwrap();
        assert_eq!(popup.observe(h.id(), &a.snapshot), Some(0));
        // same snapshot again: no scroll request
        assert_eq!(popup.observe(h.id(), &a.snapshot), None);

        let a = h.apply(|m| m.resolve_field(0, Field::Contact, Outcome::Success)).unwrap().unwrap();
        assert_eq!(popup.observe(h.id(), &a.snapshot), None);

        let a = h.apply(|m| m.begin_entity("B")).unwrap().unwrap();
        assert_eq!(popup.observe(h.id(), &a.snapshot), Some(1));
    }

    #[test]
    fn new_run_resets_focus() {
        let board = SearchBoard::new();
        let h1 = board.start(1).unwrap();
        let mut popup = Popup::default();
        let a = h1.apply(|m| m.begin_entity("A")).unwrap().unwrap();
        assert_eq!(popup.observe(h1.id(), &a.snapshot), Some(0));

        let h2 = board.start(1).unwrap();
        let a = h2.apply(|m| m.begin_entity("B")).unwrap().unwrap();
        assert_eq!(popup.observe(h2.id(), &a.snapshot), Some(0));
    }
}
