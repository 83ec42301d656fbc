use crate::domain::market::FiatCurrency;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::SubmitButton;
use crate::interfaces::view_models::tracker_view_model::{CURRENCY_LABEL, SEARCH_HINT, SEARCH_LABEL};
use eframe::egui;

pub struct SearchFormData<'a> {
    pub search_term: &'a mut String,
    pub currency: FiatCurrency,
    pub button: SubmitButton,
}

/// What the user did with the form this frame
#[derive(Debug, Default)]
pub struct SearchFormOutput {
    pub selected_currency: Option<FiatCurrency>,
    pub submit: bool,
}

/// Search input, currency selector and the submit button.
/// Enter in the input counts as a click, but only while the button is enabled.
pub fn render_search_form(ui: &mut egui::Ui, data: SearchFormData<'_>) -> SearchFormOutput {
    let mut output = SearchFormOutput::default();

    ui.label(egui::RichText::new(SEARCH_LABEL).color(DesignSystem::TEXT_SECONDARY));
    let response = ui.add(
        egui::TextEdit::singleline(data.search_term)
            .hint_text(SEARCH_HINT)
            .desired_width(f32::INFINITY)
            .font(egui::FontId::proportional(15.0)),
    );
    let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(CURRENCY_LABEL).color(DesignSystem::TEXT_SECONDARY));

        let mut selected = data.currency;
        egui::ComboBox::from_id_salt("currency_selector")
            .selected_text(selected.code())
            .show_ui(ui, |ui| {
                for currency in FiatCurrency::ALL {
                    ui.selectable_value(&mut selected, currency, currency.code());
                }
            });

        if selected != data.currency {
            output.selected_currency = Some(selected);
        }
    });

    ui.add_space(DesignSystem::SPACING_SMALL);

    let clicked = ui
        .add_enabled(
            data.button.enabled,
            egui::Button::new(egui::RichText::new(data.button.label).strong())
                .min_size(egui::vec2(120.0, 32.0)),
        )
        .clicked();

    output.submit = clicked || (enter_pressed && data.button.enabled);
    output
}
