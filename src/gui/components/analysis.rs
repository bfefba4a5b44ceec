// src/gui/components/analysis.rs
//
// Record games/series with their dates, and best/worst groups by average.

use eframe::egui::{self, RichText};

use crate::gui::app::App;
use crate::stats::{BestWorst, Extreme, GroupAverage};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let v = &app.view;

    ui.heading("Records");
    egui::Grid::new("records").num_columns(3).striped(true).show(ui, |ui| {
        record(ui, "High game", v.extremes.high_game.as_ref());
        record(ui, "Low game", v.extremes.low_game.as_ref());
        record(ui, "High series", v.extremes.high_series.as_ref());
        record(ui, "Low series", v.extremes.low_series.as_ref());
    });

    ui.add_space(8.0);
    ui.heading("Best / worst");
    egui::Grid::new("best_worst").num_columns(3).striped(true).show(ui, |ui| {
        ui.label("");
        ui.strong("Best");
        ui.strong("Worst");
        ui.end_row();
        best_worst(ui, "Season", &v.seasons);
        best_worst(ui, "Lane pair", &v.lane_pairs);
        best_worst(ui, "Month", &v.months);
    });
}

fn record(ui: &mut egui::Ui, title: &str, ex: Option<&Extreme>) {
    ui.label(title);
    match ex {
        Some(e) => {
            ui.label(RichText::new(e.value.to_string()).strong());
            let dates: Vec<String> = e.dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
            ui.label(dates.join(", "));
        }
        None => {
            ui.label("–");
            ui.label("");
        }
    }
    ui.end_row();
}

fn best_worst(ui: &mut egui::Ui, title: &str, bw: &BestWorst) {
    fn list(groups: &[GroupAverage]) -> String {
        if groups.is_empty() {
            return s!("–");
        }
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        format!("{} ({:.2})", labels.join(", "), groups[0].average)
    }
    ui.label(title);
    ui.label(list(&bw.best));
    ui.label(list(&bw.worst));
    ui.end_row();
}
