use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::processing::statistics::{StatisticKey, StatisticsRecord};
use crate::state::mode::ModeStyle;

const PANELS_PER_ROW: usize = 4;
const TABLE_HEIGHT: f32 = 190.0;

/// Grid of per-statistic bar panels (two rows of four) with a table of the
/// exact values underneath.
pub fn show_comparison(ui: &mut egui::Ui, rows: &[(ModeStyle, StatisticsRecord)]) {
    let panel_rows = StatisticKey::ALL.len().div_ceil(PANELS_PER_ROW);
    let panel_height = ((ui.available_height() - TABLE_HEIGHT) / panel_rows as f32 - 30.0).max(120.0);

    for row in 0..panel_rows {
        ui.columns(PANELS_PER_ROW, |cols| {
            for (col, ui) in cols.iter_mut().enumerate() {
                let Some(key) = StatisticKey::ALL.get(row * PANELS_PER_ROW + col) else {
                    continue;
                };
                ui.strong(key.label());
                show_statistic_panel(ui, *key, rows, panel_height);
            }
        });
    }

    ui.separator();
    show_statistics_table(ui, rows);
}

fn show_statistic_panel(
    ui: &mut egui::Ui,
    key: StatisticKey,
    rows: &[(ModeStyle, StatisticsRecord)],
    height: f32,
) {
    Plot::new(("statistic_panel", key))
        .height(height)
        .legend(Legend::default())
        .y_axis_label("Value")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, (style, stats)) in rows.iter().enumerate() {
                let bar = Bar::new(i as f64, stats.get(key).as_f64())
                    .width(0.6)
                    .name(style.mode.label());
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .color(style.color32())
                        .name(style.mode.label()),
                );
            }
        });
}

fn show_statistics_table(ui: &mut egui::Ui, rows: &[(ModeStyle, StatisticsRecord)]) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(180.0))
        .columns(Column::auto().at_least(100.0), rows.len())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Statistic");
            });
            for (style, _) in rows {
                header.col(|ui| {
                    ui.colored_label(style.color32(), style.mode.label());
                });
            }
        })
        .body(|mut body| {
            for key in StatisticKey::ALL {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(key.label());
                    });
                    for (_, stats) in rows {
                        row.col(|ui| {
                            ui.monospace(stats.get(key).to_string());
                        });
                    }
                });
            }
        });
}
