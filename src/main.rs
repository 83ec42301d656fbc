use anyhow::Context;
use clap::Parser;
use crypto_tracker::application::client::LookupClient;
use crypto_tracker::application::price_lookup::PriceLookupService;
use crypto_tracker::application::tracker_agent::TrackerAgent;
use crypto_tracker::config::{Config, Mode};
use crypto_tracker::domain::market::FiatCurrency;
use crypto_tracker::infrastructure::ServiceFactory;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "crypto_tracker")]
#[command(about = "Look up crypto spot prices and recent history", long_about = None)]
struct Cli {
    /// Market data source: binance or mock (overrides MODE)
    #[arg(long)]
    mode: Option<String>,

    /// Initially selected quote currency, e.g. USDT or EUR (overrides DEFAULT_CURRENCY)
    #[arg(long)]
    currency: Option<String>,

    /// Prefill the search input
    #[arg(long)]
    search: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let mut config = Config::from_env()?;
    if let Some(mode) = cli.mode.as_deref() {
        config.mode = Mode::from_str(mode)?;
    }
    let currency = match cli.currency.as_deref() {
        Some(code) => FiatCurrency::from_str(code)?,
        None => config.lookup.default_currency,
    };

    info!(
        "Starting Crypto Price Tracker (mode: {:?}, currency: {})",
        config.mode, currency
    );

    // Lookups run on a background Tokio runtime, the UI owns the main thread
    let (handle_tx, handle_rx) = crossbeam_channel::bounded(1);
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to build Tokio runtime: {}", e);
                return;
            }
        };

        let _ = handle_tx.send(rt.handle().clone());
        info!("Background Runtime Started.");
        rt.block_on(std::future::pending::<()>());
    });

    let runtime = handle_rx
        .recv()
        .context("Background runtime did not start")?;

    let market_data = ServiceFactory::create_market_data_service(&config);
    let service = Arc::new(PriceLookupService::new(market_data, &config.lookup));
    let search_term = cli.search.unwrap_or_default();

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Crypto Price Tracker"),
        ..Default::default()
    };

    eframe::run_native(
        "Crypto Price Tracker",
        native_options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let client =
                LookupClient::new(runtime, service).with_notifier(move || ctx.request_repaint());
            let agent = TrackerAgent::new(client, currency).with_search_term(search_term);
            Ok(Box::new(agent))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
