// src/gui/app.rs
use std::{
    error::Error,
    path::Path,
    sync::{Arc, Mutex},
};

use chrono::Local;
use eframe::egui;

use crate::{
    config::{consts::STORE_DIR, options::AppOptions, state::AppState},
    source::HttpSource,
    stats::Filter,
    store::{Freshness, Snapshot, SnapshotCache},
};

use super::{components, progress::GuiProgress, view::DashboardView};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    crate::log::init(Path::new(STORE_DIR));

    let state = AppState {
        options: AppOptions::load(None)?,
        ..AppState::default()
    };
    let cache = SnapshotCache::open(STORE_DIR);

    eframe::run_native(
        "Bowling League Stats",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, cache)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub cache: SnapshotCache,

    // last good snapshot; kept when a refresh fails
    pub snapshot: Option<Snapshot>,
    pub view: DashboardView,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, cache: SnapshotCache) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let status = Arc::new(Mutex::new(s!("Idle")));

        let mut app = Self {
            state,
            cache,
            snapshot: None,
            view: DashboardView::default(),
            out_path_text,
            out_path_dirty: false,
            status,
        };
        app.load_initial();
        app.rebuild_view();
        app
    }

    /// Today's snapshot, refreshing first if it's stale.
    fn load_initial(&mut self) {
        let source = match HttpSource::new() {
            Ok(s) => s,
            Err(e) => {
                loge!("Init: HTTP client: {}", e);
                self.snapshot = self.cache.load().ok().flatten();
                self.status(format!("Error: {e}"));
                return;
            }
        };

        let mut prog = GuiProgress::new(self.status.clone());
        match self
            .cache
            .load_or_refresh(&source, &self.state.options.scrape, Some(&mut prog), Local::now)
        {
            Ok(loaded) => {
                let msg = match &loaded.freshness {
                    Freshness::Cached => s!("Loaded today's snapshot"),
                    Freshness::Refreshed => s!("Refreshed"),
                    Freshness::Stale(e) => format!("Refresh failed, showing previous data: {e}"),
                };
                logf!("Init: {} rows ({:?})", loaded.snapshot.rows.len(), loaded.freshness);
                self.snapshot = Some(loaded.snapshot);
                self.status(msg);
            }
            Err(e) => {
                loge!("Init: No data: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|p| p.into_inner()) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// Recompute the view from the snapshot and current filter.
    /// A missing filter is initialized to cover the whole table.
    pub fn rebuild_view(&mut self) {
        let rows = self.snapshot.as_ref().map(|s| s.rows.as_slice()).unwrap_or(&[]);
        let filter = self
            .state
            .gui
            .filter
            .get_or_insert_with(|| Filter::covering(rows));
        self.view = DashboardView::build(rows, filter);
        logd!("View: {} of {} rows", self.view.rows.len(), rows.len());
    }

    pub fn reset_filter(&mut self) {
        self.state.gui.filter = None;
        self.rebuild_view();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::metrics::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::tabs::draw(ui, self);
        });
    }
}
