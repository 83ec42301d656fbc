use crate::application::price_lookup::PriceLookupService;
use crate::domain::errors::LookupError;
use crate::domain::lookup::{LookupOutcome, LookupRequest};
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{info, warn};

/// Result of one lookup, tagged with the sequence number it was submitted under
#[derive(Debug)]
pub struct LookupResponse {
    pub seq: u64,
    pub result: Result<LookupOutcome, LookupError>,
}

type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Bridge between the UI thread and the background runtime.
///
/// Each submitted lookup runs as its own task; completions come back over a
/// channel that the UI drains without blocking.
pub struct LookupClient {
    runtime: Handle,
    service: Arc<PriceLookupService>,
    response_tx: Sender<LookupResponse>,
    response_rx: Receiver<LookupResponse>,
    notifier: Option<Notifier>,
}

impl LookupClient {
    pub fn new(runtime: Handle, service: Arc<PriceLookupService>) -> Self {
        let (response_tx, response_rx) = crossbeam_channel::unbounded();
        Self {
            runtime,
            service,
            response_tx,
            response_rx,
            notifier: None,
        }
    }

    /// Called from the runtime after each response is queued, e.g. to wake
    /// the UI for a repaint.
    pub fn with_notifier(mut self, notifier: impl Fn() + Send + Sync + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn submit(&self, seq: u64, request: LookupRequest) {
        let service = self.service.clone();
        let tx = self.response_tx.clone();
        let notifier = self.notifier.clone();

        let lookup = self
            .runtime
            .spawn(async move { service.lookup(&request).await });

        self.runtime.spawn(async move {
            let result = match lookup.await {
                Ok(result) => result,
                Err(e) => Err(LookupError::TaskFailed {
                    reason: e.to_string(),
                }),
            };

            match &result {
                Ok(outcome) => info!(
                    "LookupClient: lookup #{} succeeded ({} history points)",
                    seq,
                    outcome.history.len()
                ),
                Err(e) => warn!(
                    "LookupClient: lookup #{} failed [{:?}]: {}",
                    seq,
                    e.kind(),
                    e
                ),
            }

            if tx.send(LookupResponse { seq, result }).is_err() {
                warn!("LookupClient: response channel closed, dropping lookup #{}", seq);
                return;
            }
            if let Some(notify) = notifier {
                notify();
            }
        });
    }

    /// Next finished lookup, if any. Never blocks.
    pub fn poll_next(&self) -> Option<LookupResponse> {
        self.response_rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LookupEnvConfig;
    use crate::domain::market::FiatCurrency;
    use crate::infrastructure::mock::MockMarketDataService;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_submit_delivers_tagged_response() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mock = MockMarketDataService::new()
            .with_price(dec!(2.5))
            .with_klines(vec![]);
        let service = Arc::new(PriceLookupService::new(
            Arc::new(mock),
            &LookupEnvConfig::default(),
        ));

        let wakeups = Arc::new(AtomicUsize::new(0));
        let counter = wakeups.clone();
        let client = LookupClient::new(rt.handle().clone(), service).with_notifier(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(client.poll_next().is_none());
        client.submit(7, LookupRequest::new("xrp", FiatCurrency::Usdt));

        let response = client
            .response_rx
            .recv_timeout(Duration::from_secs(5))
            .unwrap();
        assert_eq!(response.seq, 7);
        assert_eq!(response.result.unwrap().price, "2.50");

        // the notifier runs right after the send
        for _ in 0..100 {
            if wakeups.load(Ordering::SeqCst) == 1 {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(wakeups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_lookup_is_delivered_as_error() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let service = Arc::new(PriceLookupService::new(
            Arc::new(MockMarketDataService::demo()),
            &LookupEnvConfig::default(),
        ));
        let client = LookupClient::new(rt.handle().clone(), service);

        client.submit(1, LookupRequest::new("", FiatCurrency::Usdt));

        let response = client
            .response_rx
            .recv_timeout(Duration::from_secs(5))
            .unwrap();
        assert_eq!(response.seq, 1);
        assert!(matches!(response.result, Err(LookupError::EmptySearchTerm)));
    }
}
