// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::debug;

use crate::{config::options::ExportFormat, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");

        if export.format != prev_fmt {
            debug!(format = ?export.format, "UI: export format");
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        ui.checkbox(&mut export.include_headers, "Include headers");
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }

        let has_data = app.comparison.is_some();
        if ui.add_enabled(has_data, egui::Button::new("Copy")).clicked() {
            actions::copy(app, &ctx);
        }
        if ui.add_enabled(has_data, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });
}
