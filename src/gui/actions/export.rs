// src/gui/actions/export.rs
use crate::{file, gui::app::App};

use super::apply_out_path;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    apply_out_path(app);

    if app.view.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    logf!(
        "Export: Begin rows={}, format={:?}, layout={:?}, headers={}",
        app.view.rows.len(),
        export.format,
        export.layout,
        export.include_headers
    );

    let msg = match file::write_export(export, &app.view.rows) {
        Ok(path) => {
            // the text field follows what was actually written (extension may change)
            app.out_path_text = path.to_string_lossy().into_owned();
            format!("Exported {} rows to {}", app.view.rows.len(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
