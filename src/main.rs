use cytovis::app::CytovisApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CytoVis – Breast Mass Classifier",
        options,
        Box::new(|_cc| Ok(Box::new(CytovisApp::new()))),
    )
}
