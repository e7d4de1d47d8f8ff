// src/gui/components/bar_chart.rs
//
// Horizontal grouped bar chart painted straight onto an egui Painter.
// One group per item, one bar per city. Items come from the chart projection
// (ascending by median sum) and are drawn most expensive first.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use crate::{chart::ChartProjection, config::consts::{CHART_TITLE, CHART_VALUE_AXIS}, gui::app::App};

const LABEL_W: f32 = 260.0;
const VALUE_W: f32 = 70.0;
const BAR_H: f32 = 9.0;
const GROUP_GAP: f32 = 6.0;
const MAX_VIEW_H: f32 = 600.0;

const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x54, 0x70, 0xC6),
    Color32::from_rgb(0x91, 0xCC, 0x75),
    Color32::from_rgb(0xFA, 0xC8, 0x58),
    Color32::from_rgb(0xEE, 0x66, 0x66),
    Color32::from_rgb(0x73, 0xC0, 0xDE),
    Color32::from_rgb(0x3B, 0xA2, 0x72),
    Color32::from_rgb(0xFC, 0x84, 0x52),
    Color32::from_rgb(0x9A, 0x60, 0xB4),
];

pub fn color_for(series_ix: usize) -> Color32 {
    PALETTE[series_ix % PALETTE.len()]
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.heading(CHART_TITLE);

    let Some(cmp) = &app.comparison else {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading...");
        });
        return;
    };
    let chart = &cmp.chart;

    legend(ui, chart);

    egui::ScrollArea::vertical()
        .id_salt("bar_chart_scroll")
        .max_height(MAX_VIEW_H)
        .show(ui, |ui| bars(ui, chart));
}

fn legend(ui: &mut egui::Ui, chart: &ChartProjection) {
    ui.horizontal_wrapped(|ui| {
        for (i, name) in chart.legend.iter().enumerate() {
            ui.label(RichText::new(format!("■ {name}")).color(color_for(i)));
            ui.add_space(12.0);
        }
        ui.label(RichText::new(CHART_VALUE_AXIS).weak());
    });
}

fn bars(ui: &mut egui::Ui, chart: &ChartProjection) {
    let n_series = chart.series.len().max(1);
    let group_h = n_series as f32 * BAR_H + GROUP_GAP;
    let total_h = group_h * chart.categories.len() as f32;
    let width = ui.available_width().max(LABEL_W + VALUE_W + 100.0);

    let (response, painter) = ui.allocate_painter(Vec2::new(width, total_h), Sense::hover());
    let rect = response.rect;
    let max = chart.max_value();
    let plot_w = rect.width() - LABEL_W - VALUE_W;
    let text_color = ui.visuals().text_color();
    let grid = Stroke::new(1.0, ui.visuals().weak_text_color().linear_multiply(0.3));

    // Value axis baseline
    let x0 = rect.left() + LABEL_W;
    painter.line_segment([Pos2::new(x0, rect.top()), Pos2::new(x0, rect.bottom())], grid);

    let mut hovered: Option<usize> = None;
    let hover_pos = response.hover_pos();

    // Draw from the most expensive item down.
    for (slot, cat_ix) in (0..chart.categories.len()).rev().enumerate() {
        let top = rect.top() + slot as f32 * group_h;
        let group = Rect::from_min_size(Pos2::new(rect.left(), top), Vec2::new(rect.width(), group_h));

        if hover_pos.is_some_and(|p| group.contains(p)) {
            hovered = Some(cat_ix);
            painter.rect_filled(group, 2.0, ui.visuals().faint_bg_color);
        }

        painter.text(
            Pos2::new(x0 - 6.0, top + (group_h - GROUP_GAP) / 2.0),
            Align2::RIGHT_CENTER,
            truncate(&chart.categories[cat_ix], 42),
            FontId::proportional(11.0),
            text_color,
        );

        for (s_ix, series) in chart.series.iter().enumerate() {
            let Some(v) = series.data.get(cat_ix).copied().flatten() else { continue };
            let w = if max > 0.0 { (v.max(0.0) / max) as f32 * plot_w } else { 0.0 };
            let y = top + s_ix as f32 * BAR_H;
            let bar = Rect::from_min_size(Pos2::new(x0, y), Vec2::new(w, BAR_H - 1.0));
            painter.rect_filled(bar, 1.0, color_for(s_ix));
        }
    }

    if let Some(cat_ix) = hovered {
        let text = tooltip(chart, cat_ix);
        response.on_hover_text_at_pointer(text);
    }
}

fn tooltip(chart: &ChartProjection, cat_ix: usize) -> String {
    let mut out = chart.categories[cat_ix].clone();
    for series in &chart.series {
        let v = series
            .data
            .get(cat_ix)
            .copied()
            .flatten()
            .map(|v| format!("{v:.2}"))
            .unwrap_or_else(|| s!("-"));
        out.push_str(&format!("\n{}: {}", series.name, v));
    }
    out
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s!(s);
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
