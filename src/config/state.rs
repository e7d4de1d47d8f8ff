// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Show/hide toggles for the two result panels
    pub show_chart: bool,
    pub show_table: bool,

    /// Grid sort: (field, ascending). None keeps merge order.
    pub sort: Option<(String, bool)>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 800,
            show_chart: true,
            show_table: true,
            sort: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
