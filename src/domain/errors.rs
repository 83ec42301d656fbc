use thiserror::Error;

/// The only failure text ever shown to the user.
pub const GENERIC_ERROR_MESSAGE: &str = "OOPS Something Went Wrong!";

/// Coarse classification of a failed lookup, kept for logs and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    Resolution,
    Network,
    UpstreamShape,
}

/// Errors raised while resolving, fetching or decoding a price lookup
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("Search term is empty")]
    EmptySearchTerm,

    #[error("Request for {pair} failed: {reason}")]
    Transport { pair: String, reason: String },

    #[error("Binance rejected {pair}: {reason}")]
    UpstreamRejected { pair: String, reason: String },

    #[error("Malformed kline history for {pair}: {reason}")]
    MalformedHistory { pair: String, reason: String },

    #[error("Lookup task did not complete: {reason}")]
    TaskFailed { reason: String },
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::EmptySearchTerm => LookupErrorKind::Resolution,
            LookupError::Transport { .. } | LookupError::TaskFailed { .. } => {
                LookupErrorKind::Network
            }
            LookupError::UpstreamRejected { .. } | LookupError::MalformedHistory { .. } => {
                LookupErrorKind::UpstreamShape
            }
        }
    }

    /// Message for the error line. Identical for every cause.
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            LookupError::EmptySearchTerm.kind(),
            LookupErrorKind::Resolution
        );
        assert_eq!(
            LookupError::Transport {
                pair: "BTCUSDT".to_string(),
                reason: "dns error".to_string(),
            }
            .kind(),
            LookupErrorKind::Network
        );
        assert_eq!(
            LookupError::MalformedHistory {
                pair: "BTCUSDT".to_string(),
                reason: "row 3 too short".to_string(),
            }
            .kind(),
            LookupErrorKind::UpstreamShape
        );
    }

    #[test]
    fn test_user_message_hides_cause() {
        let error = LookupError::UpstreamRejected {
            pair: "FOOUSDT".to_string(),
            reason: "Invalid symbol.".to_string(),
        };

        assert_eq!(error.user_message(), GENERIC_ERROR_MESSAGE);
        assert!(error.to_string().contains("FOOUSDT"));
        assert!(error.to_string().contains("Invalid symbol."));
    }
}
