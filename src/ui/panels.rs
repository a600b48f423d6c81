use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color;
use crate::data::features::{self, Aggregation};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – measurement sliders
// ---------------------------------------------------------------------------

/// Render the slider panel: one slider per feature, grouped by aggregation,
/// bounded by the dataset's observed min/max.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Cell nuclei measurements");
    ui.separator();

    // Clone the stats so we can mutate state inside the loop.
    let stats = match &state.dataset {
        Some(ds) => ds.stats.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for agg in Aggregation::ALL {
                egui::CollapsingHeader::new(RichText::new(agg.label()).strong())
                    .id_salt(agg.suffix())
                    .default_open(agg == Aggregation::Mean)
                    .show(ui, |ui: &mut Ui| {
                        for (i, base) in features::BASE_MEASUREMENTS.iter().enumerate() {
                            let name = features::feature_name(base, agg);
                            let st = stats[features::feature_index(i, agg)];
                            let Some(value) = state.inputs.get_mut(&name) else {
                                continue;
                            };
                            let response = ui.add(
                                egui::Slider::new(value, st.min..=st.max)
                                    .text(features::measurement_label(base)),
                            );
                            if response.changed() {
                                changed = true;
                            }
                        }
                    });
            }
        });

    if changed {
        state.repredict();
    }
}

// ---------------------------------------------------------------------------
// Right side panel – prediction result
// ---------------------------------------------------------------------------

/// Render the result panel: class label plus both class probabilities.
pub fn result_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Prediction");
    ui.separator();

    match &state.prediction {
        Some(prediction) => {
            ui.label(
                RichText::new(prediction.diagnosis.to_string())
                    .size(22.0)
                    .strong()
                    .color(color::diagnosis_color(prediction.diagnosis)),
            );
            ui.add_space(8.0);
            ui.label(format!(
                "Probability benign: {:.3}",
                prediction.probabilities.benign
            ));
            ui.label(format!(
                "Probability malignant: {:.3}",
                prediction.probabilities.malignant
            ));
            ui.add_space(8.0);
            ui.separator();
            ui.small("Assists a professional diagnosis; does not replace one.");
        }
        None => {
            ui.label("No prediction available.");
            if state.predictor.is_none() {
                ui.small("Train a model first: cargo run --bin train");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open dataset…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let (benign, malignant) = ds.class_counts();
            ui.label(format!(
                "{} samples loaded ({benign} benign / {malignant} malignant)",
                ds.len()
            ));
        }

        ui.separator();

        if state.predictor.is_some() {
            ui.label("model ready");
        } else {
            ui.label(RichText::new("no model").weak());
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open cytology dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} samples from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load dataset: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
