// src/gui/actions.rs
//
// Button "executive" actions. Layout stays in components/*; the operational
// logic (threads, export, clipboard) lives here.

use std::sync::mpsc;
use std::thread;

use eframe::egui;
use tracing::{debug, info, warn};

use crate::{compare, file, gui::app::App, gui::progress::GuiProgress};

/// Start a comparison for the cities in the text field.
/// Ignored while one is already running.
pub fn compare(app: &mut App, ctx: &egui::Context) {
    if app.running {
        debug!("Compare: ignored, already running");
        return;
    }

    let opts = app.state.options.compare.clone();
    let cities = opts.city_ids();
    info!(?cities, join = opts.join.label(), "Compare: begin");

    app.comparison = None;
    app.running = true;
    app.status("Loading...");

    let (tx, rx) = mpsc::channel();
    app.pending = Some(rx);

    let status = app.status.clone();
    let ctx = ctx.clone();
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let result = compare::run_logged(&opts, Some(&mut prog));
        let _ = tx.send(result);
        ctx.request_repaint();
    });
}

fn apply_out_path(app: &mut App) {
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
    }
}

pub fn export(app: &mut App) {
    apply_out_path(app);
    let Some(cmp) = &app.comparison else {
        app.status("Nothing to export");
        return;
    };

    match file::export_comparison(&app.state.options, cmp) {
        Ok(path) => app.status(format!("Exported → {}", path.display())),
        Err(e) => {
            warn!(error = %e, "Export failed");
            app.status(format!("Export failed: {e}"));
        }
    }
}

pub fn copy(app: &mut App, ctx: &egui::Context) {
    let Some(cmp) = &app.comparison else {
        app.status("Nothing to copy");
        return;
    };

    match file::to_export_string(&app.state.options, cmp) {
        Ok(txt) => {
            ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            warn!(error = %e, "Copy failed");
            app.status(format!("Copy failed: {e}"));
        }
    }
}
