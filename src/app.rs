use std::io::Write;
use std::process::ExitCode;

use eframe::egui;
use eframe::egui_wgpu;

use crate::error::{AnalysisError, Result};
use crate::state::config::{AnalysisConfig, VERSION};
use crate::state::theme::Theme;
use crate::ui::charts::Chart;

/// A native window showing a single chart.
pub struct ChartWindow {
    chart: Chart,
    theme: Theme,
}

impl ChartWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, chart: Chart, theme: Theme) -> Self {
        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(20.0),
        );
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);
        ctx.set_visuals(theme.visuals());

        Self { chart, theme }
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.chart.title());
            });
            ui.separator();
            self.chart.show(ui, self.theme);
        });
    }
}

/// Window options for one chart: a fixed-size viewport on the wgpu renderer.
pub fn native_options(title: &str, size: [f32; 2]) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(size)
            .with_min_inner_size([640.0, 480.0]),
        wgpu_options: egui_wgpu::WgpuConfiguration {
            present_mode: eframe::wgpu::PresentMode::AutoVsync,
            wgpu_setup: egui_wgpu::WgpuSetup::CreateNew(egui_wgpu::WgpuSetupCreateNew {
                instance_descriptor: eframe::wgpu::InstanceDescriptor {
                    backends: eframe::wgpu::Backends::PRIMARY | eframe::wgpu::Backends::GL,
                    ..Default::default()
                },
                power_preference: eframe::wgpu::PowerPreference::LowPower,
                ..Default::default()
            }),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Open each chart in its own window, one after another. Each call blocks
/// until the user closes the window.
pub fn show_charts(config: &AnalysisConfig, charts: Vec<Chart>) -> Result<()> {
    let total = charts.len();
    for (i, chart) in charts.into_iter().enumerate() {
        let title = chart.title();
        tracing::info!("Opening chart {}/{}: {}", i + 1, total, title);

        let theme = config.theme;
        eframe::run_native(
            &format!("reviewplot {VERSION}"),
            native_options(&title, config.window_size),
            Box::new(move |cc| Ok(Box::new(ChartWindow::new(cc, chart, theme)))),
        )?;
    }
    Ok(())
}

/// Route diagnostics to stderr so stdout carries only the statistics report.
pub fn init_logging() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
}

/// Turn the outcome of a run into the process exit status, reporting any
/// error on stderr.
pub fn exit_with(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&mut std::io::stderr(), &e);
            ExitCode::FAILURE
        }
    }
}

fn report_failure<W: Write>(out: &mut W, err: &AnalysisError) {
    tracing::error!("{err}");
    let _ = writeln!(out, "error: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_failure_message_names_file() {
        let err = AnalysisError::FileNotFound {
            path: PathBuf::from("parallel_reviews_per_second.txt"),
        };
        let mut buf = Vec::new();
        report_failure(&mut buf, &err);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "error: Input file not found: parallel_reviews_per_second.txt\n"
        );
    }
}
