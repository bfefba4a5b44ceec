// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,refresh}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod refresh; // src/gui/actions/refresh.rs

pub use copy::copy;
pub use export::export;
pub use refresh::refresh;

use crate::gui::app::App;

/// Text field → ExportOptions, once, before any write.
pub(super) fn apply_out_path(app: &mut App) {
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }
}
