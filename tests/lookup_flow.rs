use crypto_tracker::application::client::LookupClient;
use crypto_tracker::application::price_lookup::PriceLookupService;
use crypto_tracker::application::tracker_agent::TrackerAgent;
use crypto_tracker::config::{Config, LookupEnvConfig, Mode};
use crypto_tracker::domain::errors::{GENERIC_ERROR_MESSAGE, LookupError, LookupErrorKind};
use crypto_tracker::domain::lookup::{LookupPhase, LookupRequest};
use crypto_tracker::domain::market::{FiatCurrency, Kline};
use crypto_tracker::infrastructure::{MockMarketDataService, ServiceFactory};
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

fn utc_config() -> LookupEnvConfig {
    let vars: HashMap<&str, String> = HashMap::from([
        ("DATE_TIMEZONE", "utc".to_string()),
        ("DATE_FORMAT", "%Y-%m-%d".to_string()),
        ("HISTORY_LIMIT", "3".to_string()),
    ]);
    LookupEnvConfig::from_source(&|k: &str| vars.get(k).cloned()).unwrap()
}

fn three_days() -> Vec<Kline> {
    // 2024-01-05, 2024-01-06, 2024-01-07 at 00:00 UTC
    (0..3)
        .map(|i| Kline {
            open_time_ms: 1_704_412_800_000 + i * 86_400_000,
            close: 42_000.0 + i as f64 * 500.0,
        })
        .collect()
}

#[tokio::test]
async fn test_lookup_resolves_name_and_formats_results() {
    let mock = MockMarketDataService::new()
        .with_price(dec!(43250.5))
        .with_klines(three_days());
    let calls = mock.calls();
    let service = PriceLookupService::new(Arc::new(mock), &utc_config());

    let outcome = service
        .lookup(&LookupRequest::new("  Bitcoin ", FiatCurrency::Eur))
        .await
        .unwrap();

    assert_eq!(outcome.price, "43250.50");
    let dates: Vec<&str> = outcome.history.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-05", "2024-01-06", "2024-01-07"]);
    assert_eq!(outcome.history[2].price, 43_000.0);
    assert_eq!(calls.pairs(), vec!["BTCEUR", "BTCEUR"]);
}

#[tokio::test]
async fn test_failed_price_skips_history_request() {
    let mock = MockMarketDataService::new()
        .with_price_error(LookupError::UpstreamRejected {
            pair: "FOOUSDT".to_string(),
            reason: "Invalid symbol.".to_string(),
        })
        .with_klines(three_days());
    let calls = mock.calls();
    let service = PriceLookupService::new(Arc::new(mock), &utc_config());

    let err = service
        .lookup(&LookupRequest::new("foo", FiatCurrency::Usdt))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), LookupErrorKind::UpstreamShape);
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    assert_eq!(calls.price_calls(), 1);
    assert_eq!(calls.kline_calls(), 0);
}

#[tokio::test]
async fn test_failed_history_fails_whole_lookup() {
    let mock = MockMarketDataService::new()
        .with_price(dec!(1.005))
        .with_klines_error(LookupError::MalformedHistory {
            pair: "ADAUSDT".to_string(),
            reason: "expected an array of candles".to_string(),
        });
    let service = PriceLookupService::new(Arc::new(mock), &utc_config());

    let err = service
        .lookup(&LookupRequest::new("cardano", FiatCurrency::Usdt))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), LookupErrorKind::UpstreamShape);
}

#[tokio::test]
async fn test_mock_mode_factory_serves_known_assets() {
    let config = Config {
        mode: Mode::Mock,
        ..Config::default()
    };
    let market_data = ServiceFactory::create_market_data_service(&config);
    let service = PriceLookupService::new(market_data, &config.lookup);

    let outcome = service
        .lookup(&LookupRequest::new("ethereum", FiatCurrency::Usdt))
        .await
        .unwrap();
    assert_eq!(outcome.history.len(), 30);

    let err = service
        .lookup(&LookupRequest::new("definitely-not-a-coin", FiatCurrency::Usdt))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn test_agent_end_to_end_keeps_submitted_currency() {
    let rt = Runtime::new().unwrap();
    let service = Arc::new(PriceLookupService::new(
        Arc::new(MockMarketDataService::demo()),
        &utc_config(),
    ));
    let client = LookupClient::new(rt.handle().clone(), service);
    let mut agent = TrackerAgent::new(client, FiatCurrency::Usdt).with_search_term("sol");

    assert!(agent.submit());
    // changing the selector mid-flight does not affect the running lookup
    agent.select_currency(FiatCurrency::Gbp);

    for _ in 0..500 {
        agent.update();
        if !agent.is_busy() {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    let state = agent.lookup();
    assert_eq!(state.phase(), LookupPhase::Success);
    assert_eq!(state.request().map(|r| r.currency), Some(FiatCurrency::Usdt));
    assert_eq!(state.price(), Some("180.00"));
    assert_eq!(state.history().len(), 3);
    assert_eq!(agent.currency(), FiatCurrency::Gbp);
}
