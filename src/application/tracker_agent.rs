use crate::application::client::LookupClient;
use crate::domain::lookup::{LookupRequest, LookupState};
use crate::domain::market::FiatCurrency;
use tracing::debug;

/// Owns everything the tracker window shows and turns user actions into
/// lookups.
pub struct TrackerAgent {
    client: LookupClient,
    pub search_term: String,
    currency: FiatCurrency,
    lookup: LookupState,
}

impl TrackerAgent {
    pub fn new(client: LookupClient, currency: FiatCurrency) -> Self {
        Self {
            client,
            search_term: String::new(),
            currency,
            lookup: LookupState::new(),
        }
    }

    pub fn with_search_term(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Change the quote currency. Takes effect on the next submit only.
    pub fn select_currency(&mut self, currency: FiatCurrency) {
        self.currency = currency;
    }

    pub fn lookup(&self) -> &LookupState {
        &self.lookup
    }

    pub fn is_busy(&self) -> bool {
        self.lookup.is_busy()
    }

    /// Start a lookup for the current inputs.
    /// Refused (returns `false`) while another lookup is in flight.
    pub fn submit(&mut self) -> bool {
        if self.lookup.is_busy() {
            debug!("TrackerAgent: submit ignored, lookup already in flight");
            return false;
        }

        let request = LookupRequest::new(self.search_term.clone(), self.currency);
        let seq = self.lookup.begin(request.clone());
        self.client.submit(seq, request);
        true
    }

    /// Drain finished lookups into the state
    pub fn update(&mut self) {
        while let Some(response) = self.client.poll_next() {
            if !self.lookup.complete(response.seq, response.result) {
                debug!(
                    "TrackerAgent: discarded stale response #{} (latest #{})",
                    response.seq,
                    self.lookup.latest_seq()
                );
            }
        }
    }
}
