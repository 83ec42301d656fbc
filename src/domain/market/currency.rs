use std::fmt;
use std::str::FromStr;

/// Quote currencies offered in the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FiatCurrency {
    #[default]
    Usdt,
    Busd,
    Usd,
    Eur,
    Inr,
    Gbp,
    Jpy,
    Aud,
    Cad,
}

impl FiatCurrency {
    /// Selector order.
    pub const ALL: [FiatCurrency; 9] = [
        FiatCurrency::Usdt,
        FiatCurrency::Busd,
        FiatCurrency::Usd,
        FiatCurrency::Eur,
        FiatCurrency::Inr,
        FiatCurrency::Gbp,
        FiatCurrency::Jpy,
        FiatCurrency::Aud,
        FiatCurrency::Cad,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            FiatCurrency::Usdt => "USDT",
            FiatCurrency::Busd => "BUSD",
            FiatCurrency::Usd => "USD",
            FiatCurrency::Eur => "EUR",
            FiatCurrency::Inr => "INR",
            FiatCurrency::Gbp => "GBP",
            FiatCurrency::Jpy => "JPY",
            FiatCurrency::Aud => "AUD",
            FiatCurrency::Cad => "CAD",
        }
    }

    /// Legend text for the abbreviation
    pub fn full_name(&self) -> &'static str {
        match self {
            FiatCurrency::Usdt => "Tether (USD Tether)",
            FiatCurrency::Busd => "Binance USD",
            FiatCurrency::Usd => "United States Dollar",
            FiatCurrency::Eur => "Euro",
            FiatCurrency::Inr => "Indian Rupee",
            FiatCurrency::Gbp => "British Pound Sterling",
            FiatCurrency::Jpy => "Japanese Yen",
            FiatCurrency::Aud => "Australian Dollar",
            FiatCurrency::Cad => "Canadian Dollar",
        }
    }
}

impl fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FiatCurrency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        FiatCurrency::ALL
            .into_iter()
            .find(|c| c.code() == wanted)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid currency: {}. Must be one of USDT, BUSD, USD, EUR, INR, GBP, JPY, AUD, CAD",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_order_and_codes() {
        let codes: Vec<&str> = FiatCurrency::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(
            codes,
            vec!["USDT", "BUSD", "USD", "EUR", "INR", "GBP", "JPY", "AUD", "CAD"]
        );
        assert_eq!(FiatCurrency::default(), FiatCurrency::Usdt);
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!("eur".parse::<FiatCurrency>().unwrap(), FiatCurrency::Eur);
        assert_eq!(" USD ".parse::<FiatCurrency>().unwrap(), FiatCurrency::Usd);
        assert!("BTC".parse::<FiatCurrency>().is_err());
    }

    #[test]
    fn test_codes_parse_back() {
        for currency in FiatCurrency::ALL {
            assert_eq!(currency.to_string().parse::<FiatCurrency>().unwrap(), currency);
        }
    }
}
