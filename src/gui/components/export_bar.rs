// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::{ExportFormat, ExportLayout},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + layout + headers ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.separator();
            ui.label("Layout:");
            let prev_layout = export.layout;
            ui.selectable_value(&mut export.layout, ExportLayout::Tidy, "One row per game");
            ui.selectable_value(&mut export.layout, ExportLayout::Wide, "One row per week");
            if export.layout != prev_layout {
                logf!("UI: Export layout → {:?}", export.layout);
            }

            ui.separator();
            if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });
}
