// src/config/state.rs
use super::options::AppOptions;
use crate::stats::Filter;

/// Dashboard tabs below the metric rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Data,
    Graphs,
    Analysis,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Data, Tab::Graphs, Tab::Analysis];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Data => "Data",
            Tab::Graphs => "Graphs",
            Tab::Analysis => "Analysis",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Current sidebar filter; `None` until a snapshot is loaded.
    pub filter: Option<Filter>,
    pub tab: Tab,
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            filter: None,
            tab: Tab::Data,
            window_w: 1200,
            window_h: 800,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
