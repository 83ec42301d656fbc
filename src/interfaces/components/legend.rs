use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::TrackerViewModel;
use crate::interfaces::view_models::tracker_view_model::LEGEND_TITLE;
use eframe::egui;

/// Static list of the quote currency abbreviations
pub fn render_legend(ui: &mut egui::Ui) {
    DesignSystem::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new(LEGEND_TITLE)
                .strong()
                .size(15.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        for line in TrackerViewModel::legend() {
            ui.label(
                egui::RichText::new(line)
                    .size(13.0)
                    .color(DesignSystem::TEXT_SECONDARY),
            );
        }
    });
}
