// src/gui/components/metrics.rs
//
// Two metric rows: the whole table, then the filtered rows with deltas.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;
use crate::stats::{Summary, SummaryDelta};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = &app.view;
    row(ui, "Overall", &view.overall, None);
    ui.add_space(4.0);
    row(ui, "Filtered", &view.filtered, Some(&view.delta));
}

fn row(ui: &mut egui::Ui, title: &str, s: &Summary, delta: Option<&SummaryDelta>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.add_sized([70.0, 36.0], egui::Label::new(RichText::new(title).strong()));

        let opt = |v: Option<u32>| v.map_or_else(|| s!("–"), |v| v.to_string());
        let d = |f: fn(&SummaryDelta) -> Option<i64>| delta.and_then(f).map(|v| format!("{v:+}"));

        card(ui, "Games", s.games.to_string(), delta.map(|x| format!("{:+}", x.games)));
        card(ui, "Average", format!("{:.2}", s.average), delta.map(|x| format!("{:+.2}", x.average)));
        card(ui, "High game", opt(s.high_game), d(|x| x.high_game));
        card(ui, "Low game", opt(s.low_game), d(|x| x.low_game));
        card(ui, "High series", opt(s.high_series), d(|x| x.high_series));
        card(ui, "Low series", opt(s.low_series), d(|x| x.low_series));
    });
}

fn card(ui: &mut egui::Ui, label: &str, value: String, delta: Option<String>) {
    ui.group(|ui| {
        ui.set_min_width(90.0);
        ui.vertical(|ui| {
            ui.small(label);
            ui.label(RichText::new(value).heading());
            if let Some(d) = delta {
                let color = if d.starts_with('-') {
                    Color32::from_rgb(200, 60, 60)
                } else if d.trim_start_matches('+').trim_matches(|c| c == '0' || c == '.').is_empty() {
                    ui.visuals().weak_text_color()
                } else {
                    Color32::from_rgb(40, 160, 70)
                };
                ui.label(RichText::new(d).small().color(color));
            }
        });
    });
}
