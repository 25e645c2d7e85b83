use anyhow::anyhow;
use eframe::egui;
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};
use libpctrace::PcTrace;


pub const CHART_TITLE: &str = "PC evolution";
pub const X_AXIS_LABEL: &str = "Instruction #";
pub const Y_AXIS_LABEL: &str = "PC (hex)";

const MARKER_RADIUS: f32 = 3.0;
const WINDOW_SIZE: [f32; 2] = [960.0, 540.0];

/// Plot coordinates in trace order: instruction index on X, PC on Y.
pub fn series(trace: &PcTrace) -> Vec<[f64; 2]> {
    trace
        .points()
        .map(|point| [point.index as f64, point.pc as f64])
        .collect()
}

pub struct PcPlotApp {
    series: Vec<[f64; 2]>,
}

impl PcPlotApp {
    pub fn new(trace: &PcTrace) -> Self {
        Self {
            series: series(trace),
        }
    }
}

impl eframe::App for PcPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(CHART_TITLE));

            Plot::new("pc_plot")
                .x_axis_label(X_AXIS_LABEL)
                .y_axis_label(Y_AXIS_LABEL)
                .show_grid(true)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .allow_double_click_reset(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(PlotPoints::from(self.series.clone())));
                    plot_ui.points(
                        Points::new(PlotPoints::from(self.series.clone()))
                            .shape(MarkerShape::Circle)
                            .radius(MARKER_RADIUS)
                            .filled(true),
                    );
                });
        });
    }
}

/// Opens the chart window and blocks until it's closed.
pub fn show(trace: &PcTrace) -> anyhow::Result<()> {
    let app = PcPlotApp::new(trace);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(CHART_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    log::debug!("Opening plot window with {} points", app.series.len());

    eframe::run_native(CHART_TITLE, options, Box::new(|_| Ok(Box::new(app))))
        .map_err(|e| anyhow!("Couldn't display plot: {}", e))
}
