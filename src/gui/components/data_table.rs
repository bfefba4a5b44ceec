// src/gui/components/data_table.rs
//
// Wide view of the filtered rows, newest league night first.
// Purely a view.

use eframe::egui::{self, Align, Layout, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const HEADERS: [&str; 8] = ["Date", "Season", "Week", "Game 1", "Game 2", "Game 3", "Series", "Lanes"];
const WIDTHS: [f32; 8] = [90.0, 80.0, 44.0, 56.0, 56.0, 56.0, 56.0, 56.0];
const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let rows = &app.view.wide;

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let max_h = ui.available_height();
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(max_h)
        .cell_layout(Layout::right_to_left(Align::Center))
        .id_salt("wide_table");
    let (last, rest) = WIDTHS.split_last().unwrap_or((&0.0, &[]));
    for w in rest {
        table = table.column(Column::initial(*w).resizable(true).clip(true).at_least(30.0));
    }
    table = table.column(Column::remainder().at_least(*last));

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, rows.len(), |mut row| {
                let r = &rows[row.index()];
                let game = |g: Option<u32>| g.map(|v| v.to_string()).unwrap_or_default();
                let cells = [
                    r.date.format("%Y-%m-%d").to_string(),
                    r.season.clone().unwrap_or_default(),
                    r.week.to_string(),
                    game(r.games[0]),
                    game(r.games[1]),
                    game(r.games[2]),
                    r.total.to_string(),
                    r.lane_pair.clone(),
                ];
                for c in cells {
                    row.col(|ui| {
                        ui.label(c);
                    });
                }
            });
        });
}
