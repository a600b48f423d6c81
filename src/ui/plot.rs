use std::f64::consts::TAU;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::color;
use crate::data::features::{self, Aggregation, BASE_MEASUREMENTS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Radar chart (central panel)
// ---------------------------------------------------------------------------

/// Point on the spoke for axis `k` of `n` at radius `r`. Axis 0 points up,
/// the rest follow clockwise.
fn spoke(k: usize, n: usize, r: f64) -> [f64; 2] {
    let angle = std::f64::consts::FRAC_PI_2 - TAU * k as f64 / n as f64;
    [r * angle.cos(), r * angle.sin()]
}

/// Render the radar chart: ten spokes (one per base measurement) and three
/// closed series of min-max-normalized input values, one per aggregation.
pub fn radar_chart(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a dataset to begin  (File → Open dataset…)");
            });
            return;
        }
    };

    let n = BASE_MEASUREMENTS.len();
    let series_colors = color::generate_palette(Aggregation::ALL.len());
    let grid = Color32::from_gray(90);

    Plot::new("radar_chart")
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes([false, false])
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.6)
        .include_x(1.6)
        .include_y(-1.45)
        .include_y(1.45)
        .show(ui, |plot_ui| {
            // Spokes and axis labels.
            for (k, base) in BASE_MEASUREMENTS.iter().enumerate() {
                let tip = spoke(k, n, 1.0);
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[0.0, 0.0], tip]))
                        .color(grid)
                        .width(0.5),
                );
                let label_pos = spoke(k, n, 1.22);
                plot_ui.text(Text::new(
                    PlotPoint::new(label_pos[0], label_pos[1]),
                    features::measurement_label(base),
                ));
            }

            // Reference rings at 50% and 100% of the observed range.
            for radius in [0.5, 1.0] {
                let ring: PlotPoints = (0..=n).map(|k| spoke(k % n, n, radius)).collect();
                plot_ui.line(Line::new(ring).color(grid).width(0.5));
            }

            // One closed polygon per aggregation.
            for (agg, series_color) in Aggregation::ALL.into_iter().zip(series_colors) {
                let points: Vec<[f64; 2]> = BASE_MEASUREMENTS
                    .iter()
                    .enumerate()
                    .map(|(i, base)| {
                        let name = features::feature_name(base, agg);
                        let stats = dataset.stats[features::feature_index(i, agg)];
                        let value = state.inputs.get(&name).copied().unwrap_or(stats.mean);
                        spoke(i, n, stats.normalize(value))
                    })
                    .collect();

                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(points))
                        .name(agg.label())
                        .stroke(Stroke::new(2.0, series_color))
                        .fill_color(series_color.linear_multiply(0.15)),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn first_spoke_points_up() {
        let p = spoke(0, 10, 1.0);
        assert_abs_diff_eq!(p[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn spokes_keep_the_requested_radius() {
        for k in 0..10 {
            let p = spoke(k, 10, 0.5);
            assert_abs_diff_eq!((p[0] * p[0] + p[1] * p[1]).sqrt(), 0.5, epsilon = 1e-12);
        }
    }
}
