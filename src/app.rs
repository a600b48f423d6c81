use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CytovisApp {
    pub state: AppState,
}

impl CytovisApp {
    /// Build the app and try the default dataset/artifact locations.
    pub fn new() -> Self {
        let mut state = AppState::default();
        state.load_defaults();
        Self { state }
    }
}

impl Default for CytovisApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for CytovisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: measurement sliders ----
        egui::SidePanel::left("measurement_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: prediction ----
        egui::SidePanel::right("result_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::result_panel(ui, &self.state);
            });

        // ---- Central panel: radar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::radar_chart(ui, &self.state);
        });
    }
}
