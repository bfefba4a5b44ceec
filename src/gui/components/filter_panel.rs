// src/gui/components/filter_panel.rs
//
// Left panel: date range, season and lane-pair selections, refresh.
// Edits a copy of the filter and applies it (with a view rebuild) only when
// something actually changed.

use eframe::egui;
use egui_extras::DatePickerButton;

use crate::gui::{actions, app::App};
use crate::stats::Selection;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.add_space(4.0);

    if let Some(before) = app.state.gui.filter.clone() {
        let mut f = before.clone();

        egui::Grid::new("date_range").num_columns(2).show(ui, |ui| {
            ui.label("From");
            ui.add(DatePickerButton::new(&mut f.start).id_salt("filter_start"));
            ui.end_row();
            ui.label("To");
            ui.add(DatePickerButton::new(&mut f.end).id_salt("filter_end"));
            ui.end_row();
        });
        if f.start > f.end {
            // keep the range well-formed whichever end was moved
            if f.start != before.start {
                f.end = f.start;
            } else {
                f.start = f.end;
            }
        }

        ui.separator();
        ui.strong("Season");
        selection(ui, &mut f.seasons, &app.view.all_seasons);

        ui.separator();
        ui.strong("Lane pair");
        egui::ScrollArea::vertical()
            .id_salt("lane_pairs_scroll")
            .max_height(220.0)
            .show(ui, |ui| selection(ui, &mut f.lane_pairs, &app.view.all_lane_pairs));

        if f != before {
            logd!("UI: Filter → {:?}", f);
            app.state.gui.filter = Some(f);
            app.rebuild_view();
        }

        if ui.button("Reset filters").clicked() {
            logf!("UI: Reset filters");
            app.reset_filter();
        }
    } else {
        ui.label("No data loaded.");
    }

    ui.separator();

    let red = egui::Color32::from_rgb(220, 30, 30);
    let black = egui::Color32::BLACK;
    if ui
        .add(egui::Button::new(egui::RichText::new("REFRESH").color(black).strong()).fill(red))
        .on_hover_text("Re-scrape every season now")
        .clicked()
    {
        actions::refresh(app);
    }

    ui.add_space(4.0);
    ui.label(format!("Status: {}", app.status_text()));
    let saved = app
        .snapshot
        .as_ref()
        .map(|s| s.saved_at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| s!("never"));
    ui.label(format!("Last save: {saved}"));
}

/// "All" plus one checkbox per value.
fn selection(ui: &mut egui::Ui, sel: &mut Selection, universe: &[String]) {
    let mut all = sel.is_all();
    if ui.checkbox(&mut all, "All").changed() {
        *sel = if all { Selection::All } else { Selection::Only(Default::default()) };
    }
    for v in universe {
        let mut on = sel.admits(Some(v));
        if ui.checkbox(&mut on, v.as_str()).changed() {
            sel.toggle(v, universe);
        }
    }
}
