// src/gui/components/data_table.rs
//
// Merged table grid: Category, Item, then per-city sub-field columns.
// Clicking a header sorts by that column; clicking again flips direction.
// Purely a view; sort state lives in AppState.gui.

use std::cmp::Ordering;

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    compare::{self, ColumnSpec},
    gui::app::App,
    types::MergedRow,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(cmp) = &app.comparison else {
        return;
    };

    let columns = cmp.columns(&app.state.options.compare.shown_sub_fields);
    let order = sorted_order(&cmp.rows, &columns, app.state.gui.sort.as_ref());
    let mut clicked: Option<String> = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(500.0)
        .id_salt("cost_table");
    for i in 0..columns.len() {
        let initial = match i {
            0 => 160.0,
            1 => 280.0,
            _ => 90.0,
        };
        table = table.column(Column::initial(initial).resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(36.0, |mut header| {
            for col in &columns {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    let arrow = match &app.state.gui.sort {
                        Some((f, asc)) if *f == col.field => if *asc { " ▲" } else { " ▼" },
                        _ => "",
                    };
                    let title = match &col.group {
                        Some(city) => format!("{city}\n{}{arrow}", col.title),
                        None => format!("{}{arrow}", col.title),
                    };
                    let resp = ui.add(
                        egui::Label::new(RichText::new(title).strong())
                            .selectable(false)
                            .sense(Sense::click()),
                    );
                    if resp.clicked() {
                        clicked = Some(col.field.clone());
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, order.len(), |mut row| {
                let Some(data) = order.get(row.index()).and_then(|&ix| cmp.rows.get(ix)) else {
                    return;
                };
                for col in &columns {
                    let text = compare::cell(data, &col.field);
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if col.numeric {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(text);
                            });
                        } else {
                            ui.label(text);
                        }
                    });
                }
            });
        });

    if let Some(field) = clicked {
        let next = match app.state.gui.sort.take() {
            Some((f, asc)) if f == field => (f, !asc),
            _ => (field, true),
        };
        app.state.gui.sort = Some(next);
    }
}

/// Row indices in display order. Absent numeric values sort last.
fn sorted_order(rows: &[MergedRow], columns: &[ColumnSpec], sort: Option<&(String, bool)>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    let Some((field, asc)) = sort else { return order };
    let numeric = columns.iter().any(|c| &c.field == field && c.numeric);

    order.sort_by(|&a, &b| {
        let ord = if numeric {
            match (rows[a].number(field), rows[b].number(field)) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => return Ordering::Less,
                (None, Some(_)) => return Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        } else {
            compare::cell(&rows[a], field).cmp(&compare::cell(&rows[b], field))
        };
        if *asc { ord } else { ord.reverse() }
    });
    order
}
