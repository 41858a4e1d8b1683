use anyhow::{anyhow, Result};
use eframe::egui::{self, Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

use super::charts::{Chart, CorrelationMatrix, CountPlot, Histogram};
use super::colormap;

// seaborn's royalblue histograms.
const BAR_FILL: Color32 = Color32::from_rgb(65, 105, 225);
const DENSITY_STROKE: Color32 = Color32::from_rgb(25, 45, 112);

// ---------------------------------------------------------------------------
// Sequential chart display
// ---------------------------------------------------------------------------

/// Show the charts one at a time through a single native window.
///
/// winit allows exactly one event loop per process, so the sequence shares one
/// `eframe::run_native` call: closing the window dismisses the current chart
/// and the next one takes its place; closing the last chart ends the run.
/// This blocks until the whole sequence has been dismissed.
pub fn run_sequence(sequence: Vec<Chart>) -> Result<()> {
    let Some(first) = sequence.first() else {
        return Ok(());
    };
    let title = first.title().to_string();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartSequenceApp::new(sequence)))),
    )
    .map_err(|e| anyhow!("showing chart windows: {e}"))
}

struct ChartSequenceApp {
    sequence: Vec<Chart>,
    current: usize,
}

impl ChartSequenceApp {
    fn new(sequence: Vec<Chart>) -> Self {
        ChartSequenceApp {
            sequence,
            current: 0,
        }
    }

    /// Move to the next chart after a dismissal. Returns false when the
    /// dismissed chart was the last one and the window may really close.
    fn advance(&mut self) -> bool {
        if self.current + 1 < self.sequence.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn current_chart(&self) -> &Chart {
        &self.sequence[self.current]
    }
}

impl eframe::App for ChartSequenceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A close request dismisses the current chart, not the whole run.
        if ctx.input(|i| i.viewport().close_requested()) && self.advance() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                self.current_chart().title().to_string(),
            ));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui: &mut Ui| {
                ui.heading(self.current_chart().title());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "chart {} / {}  (close the window for the next one)",
                        self.current + 1,
                        self.sequence.len()
                    ));
                });
            });
            ui.separator();

            match self.current_chart() {
                Chart::Histogram(spec) => histogram_panel(ui, spec),
                Chart::Counts(spec) => count_plot_panel(ui, spec),
                Chart::Heatmap(spec) => heatmap_panel(ui, spec),
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Histogram + density overlay
// ---------------------------------------------------------------------------

fn histogram_panel(ui: &mut Ui, spec: &Histogram) {
    Plot::new("histogram")
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone())
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = spec
                .bins
                .iter()
                .map(|b| {
                    Bar::new(b.center, b.count as f64)
                        .width(b.width)
                        .fill(BAR_FILL)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));

            if !spec.density.is_empty() {
                let points: PlotPoints = spec.density.iter().copied().collect();
                plot_ui.line(Line::new(points).color(DENSITY_STROKE).width(2.0));
            }
        });
}

// ---------------------------------------------------------------------------
// Categorical count plot
// ---------------------------------------------------------------------------

fn count_plot_panel(ui: &mut Ui, spec: &CountPlot) {
    let labels: Vec<String> = spec.bars.iter().map(|(l, _)| l.clone()).collect();
    Plot::new("count_plot")
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone())
        .x_axis_formatter(move |mark: GridMark, _range: &_| category_tick(&labels, mark.value))
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = spec
                .bars
                .iter()
                .enumerate()
                .map(|(i, (_, count))| {
                    Bar::new(i as f64, *count as f64)
                        .width(0.6)
                        .fill(BAR_FILL)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Label integer tick positions with their category, everything else blank.
fn category_tick(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

fn heatmap_panel(ui: &mut Ui, spec: &CorrelationMatrix) {
    let n = spec.columns.len();
    Plot::new("correlation_heatmap")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show(ui, |plot_ui| {
            for (i, row) in spec.values.iter().enumerate() {
                for (j, &r) in row.iter().enumerate() {
                    // Row 0 at the top, like seaborn.
                    let x0 = j as f64;
                    let y0 = (n - 1 - i) as f64;
                    let corners = vec![
                        [x0, y0],
                        [x0 + 1.0, y0],
                        [x0 + 1.0, y0 + 1.0],
                        [x0, y0 + 1.0],
                    ];
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(corners))
                            .fill_color(colormap::diverging(r))
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                    plot_ui.text(Text::new(
                        PlotPoint::new(x0 + 0.5, y0 + 0.5),
                        RichText::new(format!("{r:.2}"))
                            .color(colormap::annotation_color(r))
                            .size(13.0),
                    ));
                }
            }

            for (j, col) in spec.columns.iter().enumerate() {
                // Column names below the grid, row names to the left.
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(j as f64 + 0.5, -0.15),
                        RichText::new(col.clone()).size(12.0),
                    )
                    .anchor(Align2::CENTER_TOP),
                );
                let y = (n - 1 - j) as f64 + 0.5;
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(-0.15, y),
                        RichText::new(col.clone()).size(12.0),
                    )
                    .anchor(Align2::RIGHT_CENTER),
                );
            }
        });
}
