pub mod legend;
pub mod price_chart;
pub mod search_form;
