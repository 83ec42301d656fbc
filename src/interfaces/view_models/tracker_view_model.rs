use crate::domain::lookup::LookupState;
use crate::domain::market::FiatCurrency;

pub const TITLE: &str = "Crypto Price Tracker";
pub const SEARCH_LABEL: &str = "Search Cryptocurrency (Name or Symbol):";
pub const SEARCH_HINT: &str = "Enter Your CryptoCurrency Here!";
pub const CURRENCY_LABEL: &str = "Select Currency:";
pub const LEGEND_TITLE: &str = "Abbreviations:";
pub const WELCOME_HEADLINE: &str = "Welcome to the World of Crypto!";
pub const SUBMIT_LABEL: &str = "Get Price";
pub const BUSY_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

/// Line series for the history chart. X is the point index, `labels`
/// holds the date string for each index.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub labels: Vec<String>,
    pub points: Vec<[f64; 2]>,
}

impl ChartSeries {
    pub fn label_at(&self, x: f64) -> Option<&str> {
        if x < 0.0 || x.fract() != 0.0 {
            return None;
        }
        self.labels.get(x as usize).map(String::as_str)
    }
}

pub struct TrackerViewModel;

impl TrackerViewModel {
    pub fn submit_button(state: &LookupState) -> SubmitButton {
        if state.is_busy() {
            SubmitButton {
                label: BUSY_LABEL,
                enabled: false,
            }
        } else {
            SubmitButton {
                label: SUBMIT_LABEL,
                enabled: true,
            }
        }
    }

    pub fn error_line(state: &LookupState) -> Option<&str> {
        state.error()
    }

    /// `BITCOIN / USDT = USDT 43250.50` once a price is known
    pub fn headline(state: &LookupState) -> String {
        match (state.price(), state.request()) {
            (Some(price), Some(request)) => format!(
                "{} / {} = {} {}",
                request.display_term(),
                request.currency,
                request.currency,
                price
            ),
            _ => WELCOME_HEADLINE.to_string(),
        }
    }

    pub fn chart_series(state: &LookupState) -> Option<ChartSeries> {
        let history = state.history();
        let request = state.request()?;
        if history.is_empty() {
            return None;
        }

        Some(ChartSeries {
            name: format!("{} Price in {}", request.display_term(), request.currency),
            labels: history.iter().map(|p| p.date.clone()).collect(),
            points: history
                .iter()
                .enumerate()
                .map(|(i, p)| [i as f64, p.price])
                .collect(),
        })
    }

    /// `USDT – Tether (USD Tether)` and so on, in selector order
    pub fn legend() -> Vec<String> {
        FiatCurrency::ALL
            .iter()
            .map(|c| format!("{} – {}", c.code(), c.full_name()))
            .collect()
    }
}
