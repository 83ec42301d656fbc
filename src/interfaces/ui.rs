use crate::application::tracker_agent::TrackerAgent;
use crate::interfaces::components::legend::render_legend;
use crate::interfaces::components::price_chart::render_price_chart;
use crate::interfaces::components::search_form::{SearchFormData, render_search_form};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::TrackerViewModel;
use crate::interfaces::view_models::tracker_view_model::TITLE;
use eframe::egui;
use std::time::Duration;

impl eframe::App for TrackerAgent {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // Finished lookups first, so this frame renders the latest state
        self.update();

        egui::SidePanel::right("legend_panel")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.add_space(DesignSystem::SPACING_MEDIUM);
                render_legend(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.heading(
                egui::RichText::new(TITLE)
                    .size(26.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            let currency = self.currency();
            let button = TrackerViewModel::submit_button(self.lookup());
            let output = DesignSystem::card_frame()
                .show(ui, |ui| {
                    render_search_form(
                        ui,
                        SearchFormData {
                            search_term: &mut self.search_term,
                            currency,
                            button,
                        },
                    )
                })
                .inner;

            if let Some(selected) = output.selected_currency {
                self.select_currency(selected);
            }
            if output.submit {
                self.submit();
            }

            if let Some(error) = TrackerViewModel::error_line(self.lookup()) {
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.colored_label(DesignSystem::DANGER, error);
            }

            ui.add_space(DesignSystem::SPACING_MEDIUM);
            ui.label(
                egui::RichText::new(TrackerViewModel::headline(self.lookup()))
                    .size(20.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);

            if let Some(series) = TrackerViewModel::chart_series(self.lookup()) {
                render_price_chart(ui, &series);
            }
        });

        if self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
