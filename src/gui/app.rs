// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
};

use eframe::egui;
use tracing::info;

use crate::{compare::Comparison, config::state::AppState};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Cost of Living Comparison",
        options,
        Box::new(move |cc| {
            let mut app = App::new(state);
            // First comparison starts right away, like a page load.
            super::actions::compare(&mut app, &cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (mapped <-> ExportOptions on export)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // latest finished comparison; None while loading
    pub comparison: Option<Comparison>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<mpsc::Receiver<Option<Comparison>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        info!(cities = %state.options.compare.cities_text, "GUI init");

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            comparison: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
        }
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Pick up a finished worker result, if any.
    fn poll_worker(&mut self) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.running = false;
                match result {
                    Some(cmp) if !cmp.is_empty() => {
                        info!(rows = cmp.rows.len(), cities = ?cmp.cities(), "GUI: comparison ready");
                        self.state.gui.sort = None;
                        self.comparison = Some(cmp);
                    }
                    // Nothing usable: chart stays in its loading state.
                    _ => self.status("No data"),
                }
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.pending = None;
                self.running = false;
                self.status("Comparison worker stopped");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        egui::TopBottomPanel::top("compare_form").show(ctx, |ui| {
            super::components::compare_bar::draw(ui, self, ctx);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().id_salt("main_scroll").show(ui, |ui| {
                if self.state.gui.show_chart {
                    super::components::bar_chart::draw(ui, self);
                    ui.separator();
                }

                super::components::export_bar::draw(ui, self);
                ui.separator();

                if self.state.gui.show_table {
                    super::components::data_table::draw(ui, self);
                }
            });
        });
    }
}
