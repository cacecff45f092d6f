// src/gui/components/company_panel.rs
//
// Renders the left company list and applies selection changes directly to `app`.
// Handles ctrl/shift range behavior and keeps the status line in sync.

use eframe::egui;
use crate::gui::app::App;

/// Apply one click on row `idx` to the selection.
/// plain: select only idx · ctrl: toggle · shift: range from anchor ·
/// ctrl+shift: add range from anchor. The anchor moves to `idx`.
pub fn apply_click(
    sel: &mut Vec<usize>,
    anchor: &mut Option<usize>,
    idx: usize,
    ctrl: bool,
    shift: bool,
) {
    let is_selected = sel.contains(&idx);
    let toggle = |sel: &mut Vec<usize>| {
        if is_selected { sel.retain(|x| *x != idx); } else { sel.push(idx); }
    };

    match (ctrl, shift, *anchor) {
        (true, true, Some(last)) => {
            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
            for j in lo..=hi {
                if !sel.contains(&j) { sel.push(j); }
            }
        }
        // No anchor: fall back to ctrl-toggle on single item
        (true, _, _) => toggle(sel),
        (false, true, Some(last)) => {
            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
            sel.clear();
            sel.extend(lo..=hi);
        }
        _ => {
            sel.clear();
            sel.push(idx);
        }
    }
    *anchor = Some(idx);
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Companies");

    let running = app.is_running();

    ui.horizontal(|ui| {
        ui.add_enabled_ui(!running, |ui| {
            if ui.button("All").clicked() {
                app.state.gui.selected = (0..app.state.companies.len()).collect();
                app.on_selection_changed();
            }
            if ui.button("None").clicked() {
                app.state.gui.selected.clear();
                app.on_selection_changed();
            }
        });
    });

    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("companies_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            let mut clicked: Option<usize> = None;
            for (idx, name) in app.state.companies.iter().enumerate() {
                let is_selected = app.state.gui.selected.contains(&idx);
                if ui.selectable_label(is_selected, name.as_str()).clicked() && !running {
                    clicked = Some(idx);
                }
            }

            if let Some(idx) = clicked {
                let m = ui.input(|i| i.modifiers);
                let gui = &mut app.state.gui;
                apply_click(&mut gui.selected, &mut gui.last_clicked, idx, m.ctrl || m.command, m.shift);
                app.on_selection_changed();
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<usize>) -> Vec<usize> { v.sort_unstable(); v }

    #[test]
    fn plain_click_selects_one() {
        let mut sel = vec![0, 1, 2];
        let mut anchor = None;
        apply_click(&mut sel, &mut anchor, 4, false, false);
        assert_eq!(sel, vec![4]);
        assert_eq!(anchor, Some(4));
    }

    #[test]
    fn ctrl_toggles() {
        let mut sel = vec![1];
        let mut anchor = Some(1);
        apply_click(&mut sel, &mut anchor, 3, true, false);
        assert_eq!(sorted(sel.clone()), vec![1, 3]);
        apply_click(&mut sel, &mut anchor, 1, true, false);
        assert_eq!(sel, vec![3]);
    }

    #[test]
    fn shift_selects_range_from_anchor() {
        let mut sel = vec![7];
        let mut anchor = Some(5);
        apply_click(&mut sel, &mut anchor, 2, false, true);
        assert_eq!(sorted(sel), vec![2, 3, 4, 5]);
        assert_eq!(anchor, Some(2));
    }

    #[test]
    fn ctrl_shift_extends_selection() {
        let mut sel = vec![0];
        let mut anchor = Some(2);
        apply_click(&mut sel, &mut anchor, 4, true, true);
        assert_eq!(sorted(sel), vec![0, 2, 3, 4]);
    }

    #[test]
    fn shift_without_anchor_acts_like_click() {
        let mut sel = vec![0, 1];
        let mut anchor = None;
        apply_click(&mut sel, &mut anchor, 3, false, true);
        assert_eq!(sel, vec![3]);
    }
}
