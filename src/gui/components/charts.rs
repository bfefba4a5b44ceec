// src/gui/components/charts.rs
//
// Simple bar charts painted directly; no plotting dependency.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::gui::app::App;
use crate::stats::{Bin, GroupAverage};

const CHART_H: f32 = 180.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let v = &app.view;
    egui::ScrollArea::vertical().id_salt("charts_scroll").show(ui, |ui| {
        ui.columns(2, |cols| {
            bar_chart(&mut cols[0], "Average by game", &averages(&v.by_game));
            bar_chart(&mut cols[1], "Average by season", &averages(&v.by_season));
        });
        ui.add_space(8.0);
        bar_chart(ui, "Average by lane pair", &averages(&v.by_lane_pair));
        ui.add_space(8.0);
        ui.columns(2, |cols| {
            bar_chart(&mut cols[0], "Game distribution", &bins(&v.score_bins));
            bar_chart(&mut cols[1], "Series distribution", &bins(&v.series_bins));
        });
    });
}

fn averages(groups: &[GroupAverage]) -> Vec<(String, f64, String)> {
    groups
        .iter()
        .map(|g| (g.label.clone(), g.average, format!("{:.2} over {} games", g.average, g.games)))
        .collect()
}

fn bins(bins: &[Bin]) -> Vec<(String, f64, String)> {
    bins.iter()
        .map(|b| (b.label(), b.count as f64, format!("{}: {}", b.label(), b.count)))
        .collect()
}

/// (label, value, hover) per bar, bars scaled to the largest value.
fn bar_chart(ui: &mut egui::Ui, title: &str, bars: &[(String, f64, String)]) {
    ui.strong(title);
    let width = ui.available_width().max(120.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, CHART_H), Sense::hover());
    let painter = ui.painter_at(rect);

    let visuals = ui.visuals();
    let fill = visuals.selection.bg_fill;
    let text = visuals.text_color();
    painter.rect_stroke(rect, 2.0, Stroke::new(1.0, visuals.weak_text_color()), egui::StrokeKind::Inside);

    if bars.is_empty() {
        painter.text(rect.center(), Align2::CENTER_CENTER, "no data", FontId::proportional(12.0), text);
        return;
    }

    let max = bars.iter().map(|b| b.1).fold(0.0, f64::max).max(1.0);
    let label_h = 16.0;
    let top_pad = 16.0;
    let plot_h = rect.height() - label_h - top_pad;
    let slot = rect.width() / bars.len() as f32;
    let bar_w = (slot * 0.7).max(2.0);

    for (i, (label, value, hover)) in bars.iter().enumerate() {
        let h = (value / max) as f32 * plot_h;
        let cx = rect.left() + slot * (i as f32 + 0.5);
        let base = rect.bottom() - label_h;
        let bar = Rect::from_min_max(Pos2::new(cx - bar_w / 2.0, base - h), Pos2::new(cx + bar_w / 2.0, base));
        painter.rect_filled(bar, 2.0, fill);

        let shown = if value.fract() == 0.0 { format!("{value:.0}") } else { format!("{value:.1}") };
        painter.text(
            Pos2::new(cx, bar.top() - 2.0),
            Align2::CENTER_BOTTOM,
            shown,
            FontId::proportional(10.0),
            text,
        );
        painter.text(
            Pos2::new(cx, rect.bottom() - 2.0),
            Align2::CENTER_BOTTOM,
            label,
            FontId::proportional(10.0),
            text,
        );

        let id = ui.id().with((title, i));
        let slot_rect = Rect::from_min_max(
            Pos2::new(rect.left() + slot * i as f32, rect.top()),
            Pos2::new(rect.left() + slot * (i as f32 + 1.0), rect.bottom()),
        );
        ui.interact(slot_rect, id, Sense::hover()).on_hover_text(hover);
    }

    // faint baseline
    painter.line_segment(
        [
            Pos2::new(rect.left(), rect.bottom() - label_h),
            Pos2::new(rect.right(), rect.bottom() - label_h),
        ],
        Stroke::new(1.0, Color32::from_gray(120)),
    );
}
