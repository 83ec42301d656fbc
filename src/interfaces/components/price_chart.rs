use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::ChartSeries;
use eframe::egui;
use egui_plot::{Legend, Line, Plot};

/// Line chart of closing prices, X axis labelled with the candle dates
pub fn render_price_chart(ui: &mut egui::Ui, series: &ChartSeries) {
    let axis = series.clone();
    let height = (ui.available_height() - 20.0).max(280.0);

    Plot::new("price_history")
        .height(height)
        .show_grid([true, true])
        .legend(Legend::default())
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _range| {
            axis.label_at(mark.value)
                .map(str::to_string)
                .unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| format!("{:.2}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(series.name.clone(), series.points.clone())
                    .color(DesignSystem::CHART_LINE)
                    .width(2.0),
            );
        });
}
