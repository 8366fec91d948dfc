//! Time-series plotting for simulation trajectories.
//!
//! [`PlotApp`] collects named series of aligned x/y columns and renders them
//! as a line chart in a native window: one line per series, a legend, axis
//! labels, and grid lines.
//!
//! # Example
//!
//! ```no_run
//! use sirs_plot::PlotApp;
//!
//! let times = [0.0, 1.0, 2.0];
//! let infectious = [10.0, 12.5, 15.2];
//!
//! PlotApp::new()
//!     .x_label("Time")
//!     .y_label("Population")
//!     .add_series("Infectious", &times, &infectious)
//!     .run("Outbreak")
//!     .unwrap();
//! ```

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};

/// A runnable egui application for plotting aligned time-series data.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
    x_label: String,
    y_label: String,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Sets the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Adds a named line series from aligned x and y columns.
    ///
    /// Extra elements in the longer column are ignored.
    #[must_use]
    pub fn add_series(mut self, name: &str, xs: &[f64], ys: &[f64]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: xs
                .iter()
                .zip(ys)
                .map(|(&x, &y)| PlotPoint::new(x, y))
                .collect(),
        });

        self
    }

    /// Opens a native window titled `title` and renders the chart until the
    /// window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`eframe::Error`] if the native window cannot be created.
    pub fn run(self, title: &str) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 600.0]),
            ..Default::default()
        };

        eframe::run_native(title, options, Box::new(|_cc| Ok(Box::new(self))))
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("plot-id")
                .legend(Legend::default())
                .x_axis_label(self.x_label.clone())
                .y_axis_label(self.y_label.clone())
                .show_grid(true)
                .show(ui, |plot_ui| {
                    for series in &self.series {
                        let points = series.points.as_slice();
                        let name = &series.name;

                        plot_ui.line(Line::new(points).name(name));
                    }
                });
        });
    }
}
