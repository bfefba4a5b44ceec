// src/gui/components/tabs.rs
//
// Renders the tab strip and the selected tab's body.

use eframe::egui;

use super::{analysis, charts, data_table};
use crate::config::state::Tab;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        let cur = app.state.gui.tab;
        for tab in Tab::ALL {
            let selected = tab == cur;
            if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, tab);
                app.state.gui.tab = tab;
            }
        }
    });

    ui.separator();

    if app.view.is_empty() {
        ui.label("No rows match the current filters.");
        return;
    }

    match app.state.gui.tab {
        Tab::Data => data_table::draw(ui, app),
        Tab::Graphs => charts::draw(ui, app),
        Tab::Analysis => analysis::draw(ui, app),
    }
}
