// src/gui/components/compare_bar.rs
//
// The form at the top: city list, Compare, join toggle, panel toggles.

use eframe::egui;
use tracing::debug;

use crate::{config::options::JoinStrategy, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Cities:");
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.options.compare.cities_text)
                .hint_text("Input city names here, e.g. austin,new-york")
                .desired_width((ui.available_width() - 260.0).max(120.0)),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui
            .add_enabled(!app.running, egui::Button::new("Compare"))
            .clicked();

        if clicked || (submitted && !app.running) {
            actions::compare(app, ctx);
        }

        let mut by_item = app.state.options.compare.join == JoinStrategy::OuterByItem;
        if ui
            .checkbox(&mut by_item, "Align by item")
            .on_hover_text("Join rows on category + item instead of row position")
            .changed()
        {
            app.state.options.compare.join = if by_item {
                JoinStrategy::OuterByItem
            } else {
                JoinStrategy::PositionalTruncate
            };
            debug!(join = app.state.options.compare.join.label(), "UI: join strategy");
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Toggle Bar-Chart").clicked() {
            app.state.gui.show_chart = !app.state.gui.show_chart;
        }
        if ui.button("Toggle Table").clicked() {
            app.state.gui.show_table = !app.state.gui.show_table;
        }
        if app.running {
            ui.spinner();
        }
    });
    ui.add_space(4.0);
}
