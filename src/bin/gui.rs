// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use col_compare::{config::state::AppState, core::ident, gui};
use eframe::egui::ViewportBuilder;

fn main() {
    col_compare::log::init(1, false);

    let mut state = AppState::default();

    // Any arguments form the startup city list: `col_compare austin,seattle`
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(ids) = ident::normalize_list(&args) {
        state.options.compare.cities_text = ids.join(",");
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Cost of Living Comparison")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
