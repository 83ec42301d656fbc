//! Per-click lookup lifecycle.
//!
//! `Idle -> Fetching -> {Success, Failed}`, re-entering `Fetching` on every
//! submit. Each lookup is tagged with a sequence number and only the latest
//! one may change the state, so a slow response from an earlier lookup is
//! dropped instead of overwriting a newer result.

use crate::domain::errors::{LookupError, LookupErrorKind};
use crate::domain::market::{FiatCurrency, HistoricalPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPhase {
    #[default]
    Idle,
    Fetching,
    Success,
    Failed,
}

/// What the user asked for, captured at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub search_term: String,
    pub currency: FiatCurrency,
}

impl LookupRequest {
    pub fn new(search_term: impl Into<String>, currency: FiatCurrency) -> Self {
        Self {
            search_term: search_term.into(),
            currency,
        }
    }

    /// Search term as shown in the headline and chart legend
    pub fn display_term(&self) -> String {
        self.search_term.trim().to_uppercase()
    }
}

/// A successful lookup: formatted price plus the chart series
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    pub price: String,
    pub history: Vec<HistoricalPoint>,
}

#[derive(Debug, Default)]
pub struct LookupState {
    phase: LookupPhase,
    latest_seq: u64,
    request: Option<LookupRequest>,
    price: Option<String>,
    history: Vec<HistoricalPoint>,
    error: Option<String>,
    error_kind: Option<LookupErrorKind>,
}

impl LookupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LookupPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == LookupPhase::Fetching
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Request of the most recent lookup, in flight or finished
    pub fn request(&self) -> Option<&LookupRequest> {
        self.request.as_ref()
    }

    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    pub fn history(&self) -> &[HistoricalPoint] {
        &self.history
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn error_kind(&self) -> Option<LookupErrorKind> {
        self.error_kind
    }

    /// Enter `Fetching` for a new request and return its sequence number.
    /// Clears the previous price, history and error.
    pub fn begin(&mut self, request: LookupRequest) -> u64 {
        self.latest_seq += 1;
        self.phase = LookupPhase::Fetching;
        self.request = Some(request);
        self.price = None;
        self.history.clear();
        self.error = None;
        self.error_kind = None;
        self.latest_seq
    }

    /// Apply the result of lookup `seq`.
    ///
    /// Returns `false` and leaves the state untouched when `seq` is not the
    /// latest lookup or nothing is in flight.
    pub fn complete(&mut self, seq: u64, result: Result<LookupOutcome, LookupError>) -> bool {
        if seq != self.latest_seq || self.phase != LookupPhase::Fetching {
            return false;
        }

        match result {
            Ok(outcome) => {
                self.phase = LookupPhase::Success;
                self.price = Some(outcome.price);
                self.history = outcome.history;
                self.error = None;
                self.error_kind = None;
            }
            Err(e) => {
                self.phase = LookupPhase::Failed;
                self.price = None;
                self.history.clear();
                self.error = Some(e.user_message().to_string());
                self.error_kind = Some(e.kind());
            }
        }
        true
    }
}
