use egui::{Align2, Color32, Stroke};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, LineStyle, Plot, PlotPoint, Points,
    Text,
};

use crate::analysis::ModeAnalysis;
use crate::error::Result;
use crate::processing::box_stats::BoxSummary;
use crate::processing::histogram::Histogram;
use crate::processing::rolling;
use crate::processing::statistics::StatisticsRecord;
use crate::state::config::AnalysisConfig;
use crate::state::mode::{Mode, ModeStyle};
use crate::state::theme::Theme;
use crate::ui::stats_table;

const TIME_AXIS: &str = "Time (s)";
const REVIEWS_AXIS: &str = "Analyzed Reviews";
const COMPARISON_TITLE: &str = "Reviews Analyzed Per Second - Comparison of Implementations";

/// A labelled polyline in a mode's color.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// A chart with all of its geometry already computed, ready to draw.
#[derive(Debug, Clone)]
pub enum Chart {
    /// Raw samples over time, one line with markers per mode.
    Timeline {
        title: String,
        series: Vec<PlotSeries>,
    },
    /// Density histogram of samples per mode.
    Distribution { histograms: Vec<(ModeStyle, Histogram)> },
    /// One box per mode.
    BoxPlot { boxes: Vec<(ModeStyle, BoxSummary)> },
    /// Moving average per mode, dashed.
    SmoothedTrend { window: usize, series: Vec<PlotSeries> },
    /// One bar panel per statistic plus a table of every value.
    StatisticsComparison { rows: Vec<(ModeStyle, StatisticsRecord)> },
    /// Horizontal bars of one mode's statistics.
    StatisticsSummary { mode: Mode, stats: StatisticsRecord },
}

impl Chart {
    pub fn title(&self) -> String {
        match self {
            Chart::Timeline { title, .. } => title.clone(),
            Chart::Distribution { .. } => "Heatmap of Analyzed Reviews Per Second".to_string(),
            Chart::BoxPlot { .. } => "Box Plot of Analyzed Reviews Per Second".to_string(),
            Chart::SmoothedTrend { window, .. } => {
                format!("{COMPARISON_TITLE} ({window}-point rolling average)")
            }
            Chart::StatisticsComparison { .. } => {
                "Comparison of Statistics Across Implementations".to_string()
            }
            Chart::StatisticsSummary { mode, .. } => {
                format!("Summary of Analyzed Reviews Statistics - {}", mode.label())
            }
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, theme: Theme) {
        match self {
            Chart::Timeline { series, .. } => show_timeline(ui, series),
            Chart::Distribution { histograms } => show_distribution(ui, histograms),
            Chart::BoxPlot { boxes } => show_box_plot(ui, boxes, theme),
            Chart::SmoothedTrend { series, .. } => show_smoothed(ui, series),
            Chart::StatisticsComparison { rows } => stats_table::show_comparison(ui, rows),
            Chart::StatisticsSummary { stats, .. } => show_summary(ui, stats, theme),
        }
    }
}

/// Charts for the multi-mode run, in display order.
pub fn comparison_charts(config: &AnalysisConfig, analyses: &[ModeAnalysis]) -> Result<Vec<Chart>> {
    let timeline = analyses
        .iter()
        .map(|a| PlotSeries {
            label: a.style.mode.label().to_string(),
            color: a.style.color32(),
            points: a.series.timeline_points(),
        })
        .collect();

    let histograms = analyses
        .iter()
        .map(|a| {
            Histogram::density(a.series.samples(), config.histogram_bins)
                .map(|h| (a.style, h))
                .map_err(|e| e.for_mode(a.style.mode))
        })
        .collect::<Result<Vec<_>>>()?;

    let boxes = analyses
        .iter()
        .map(|a| {
            BoxSummary::compute(a.series.samples())
                .map(|b| (a.style, b))
                .map_err(|e| e.for_mode(a.style.mode))
        })
        .collect::<Result<Vec<_>>>()?;

    let smoothed = analyses
        .iter()
        .map(|a| {
            let points = rolling::rolling_points(a.series.samples(), config.rolling_window);
            if points.is_empty() {
                tracing::warn!(
                    mode = %a.style.mode,
                    samples = a.series.len(),
                    window = config.rolling_window,
                    "Series shorter than the rolling window, nothing to smooth"
                );
            }
            PlotSeries {
                label: format!("{} (Smoothed)", a.style.mode.label()),
                color: a.style.color32(),
                points,
            }
        })
        .collect();

    let rows = analyses.iter().map(|a| (a.style, a.stats.clone())).collect();

    Ok(vec![
        Chart::Timeline {
            title: COMPARISON_TITLE.to_string(),
            series: timeline,
        },
        Chart::Distribution { histograms },
        Chart::BoxPlot { boxes },
        Chart::SmoothedTrend {
            window: config.rolling_window,
            series: smoothed,
        },
        Chart::StatisticsComparison { rows },
    ])
}

/// Charts for a run over a single mode.
pub fn single_mode_charts(analysis: &ModeAnalysis) -> Vec<Chart> {
    let mode = analysis.style.mode;
    vec![
        Chart::Timeline {
            title: format!("Reviews Analyzed Per Second - {} implementation", mode.name()),
            series: vec![PlotSeries {
                label: mode.label().to_string(),
                color: analysis.style.color32(),
                points: analysis.series.timeline_points(),
            }],
        },
        Chart::StatisticsSummary {
            mode,
            stats: analysis.stats.clone(),
        },
    ]
}

fn show_timeline(ui: &mut egui::Ui, series: &[PlotSeries]) {
    Plot::new("timeline")
        .legend(Legend::default())
        .x_axis_label(TIME_AXIS)
        .y_axis_label(REVIEWS_AXIS)
        .show(ui, |plot_ui| {
            for s in series {
                plot_ui.line(
                    Line::new(s.points.clone())
                        .color(s.color)
                        .width(1.5)
                        .name(&s.label),
                );
                plot_ui.points(
                    Points::new(s.points.clone())
                        .color(s.color)
                        .radius(2.5)
                        .name(&s.label),
                );
            }
        });
}

fn show_distribution(ui: &mut egui::Ui, histograms: &[(ModeStyle, Histogram)]) {
    Plot::new("distribution")
        .legend(Legend::default())
        .x_axis_label(REVIEWS_AXIS)
        .y_axis_label("Density")
        .show(ui, |plot_ui| {
            for (style, hist) in histograms {
                let bars = hist
                    .bins
                    .iter()
                    .map(|bin| Bar::new(bin.center(), bin.density).width(bin.width()))
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(style.translucent(128))
                        .name(style.mode.label()),
                );
            }
        });
}

fn show_box_plot(ui: &mut egui::Ui, boxes: &[(ModeStyle, BoxSummary)], theme: Theme) {
    Plot::new("box_plot")
        .legend(Legend::default())
        .x_axis_label("Implementation")
        .y_axis_label(REVIEWS_AXIS)
        .show(ui, |plot_ui| {
            for (i, (style, summary)) in boxes.iter().enumerate() {
                let x = (i + 1) as f64;
                let spread = BoxSpread::new(
                    summary.lower_whisker,
                    summary.q1,
                    summary.median,
                    summary.q3,
                    summary.upper_whisker,
                );
                let elem = BoxElem::new(x, spread)
                    .name(style.mode.label())
                    .box_width(0.5)
                    .whisker_width(0.25)
                    .fill(style.translucent(60))
                    .stroke(Stroke::new(1.5, style.color32()));
                plot_ui.box_plot(
                    BoxPlot::new(vec![elem])
                        .color(style.color32())
                        .name(style.mode.label()),
                );

                if !summary.outliers.is_empty() {
                    let outliers: Vec<[f64; 2]> =
                        summary.outliers.iter().map(|&v| [x, v]).collect();
                    plot_ui.points(Points::new(outliers).color(theme.ink).radius(2.5));
                }
            }
        });
}

fn show_smoothed(ui: &mut egui::Ui, series: &[PlotSeries]) {
    Plot::new("smoothed_trend")
        .legend(Legend::default())
        .x_axis_label(TIME_AXIS)
        .y_axis_label(REVIEWS_AXIS)
        .show(ui, |plot_ui| {
            for s in series {
                plot_ui.line(
                    Line::new(s.points.clone())
                        .color(s.color)
                        .style(LineStyle::dashed_loose())
                        .width(2.0)
                        .name(&s.label),
                );
            }
        });
}

fn show_summary(ui: &mut egui::Ui, stats: &StatisticsRecord, theme: Theme) {
    let entries = stats.entries();
    let bars = entries
        .iter()
        .enumerate()
        .map(|(i, (key, value))| Bar::new(i as f64, value.as_f64()).name(key.label()))
        .collect();

    Plot::new("statistics_summary")
        .show_axes([true, false])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .width(0.7)
                    .color(theme.accent),
            );
            for (i, (key, value)) in entries.iter().enumerate() {
                let label = format!("  {}: {value}", key.label());
                plot_ui.text(
                    Text::new(PlotPoint::new(value.as_f64(), i as f64), label)
                        .anchor(Align2::LEFT_CENTER)
                        .color(theme.ink),
                );
            }
        });
}
