// src/gui/actions/refresh.rs
use chrono::Local;

use crate::{gui::app::App, gui::progress::GuiProgress, source::HttpSource};

/// Forced re-scrape on the UI thread. On failure the previous snapshot
/// stays on screen and on disk.
pub fn refresh(app: &mut App) {
    logf!("Refresh: Begin years={:?}", app.state.options.scrape.years);

    let source = match HttpSource::new() {
        Ok(s) => s,
        Err(e) => {
            loge!("Refresh: HTTP client: {}", e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the scrape happens ←
    let res = app
        .cache
        .refresh(&source, &app.state.options.scrape, Some(&mut prog), Local::now);

    match res {
        Ok(snap) => {
            logf!("Refresh: OK rows={}", snap.rows.len());
            app.snapshot = Some(snap);
            // new dates may extend past the old range
            app.reset_filter();
            app.status("Ready");
        }
        Err(e) => {
            loge!("Refresh: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
