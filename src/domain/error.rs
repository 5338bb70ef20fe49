//! Domain Error Types
//!
//! Pure domain errors raised while replaying an event stream. Each error
//! carries a stable numeric code and a symbolic name as separate accessors;
//! rendering them into a user-facing message is the presentation layer's
//! job, not the error's.

use thiserror::Error;

/// Business rule violations that abort a replay.
///
/// Every variant is terminal for the replay that raised it: the fold stops
/// at the first violation and no partial account state is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// Deposit or withdrawal applied before the account was created
    #[error("transaction applied before account creation")]
    AccountUninstantiated,

    /// Event discriminator does not match any known variant
    #[error("event type is not supported")]
    EventNotSupported,

    /// A deposit pushed the balance above the account maximum
    #[error("balance exceeds the account maximum")]
    BalanceExceedsMax,

    /// A withdrawal pushed the balance below zero
    #[error("balance would become negative")]
    BalanceNegative,

    /// Deposit or withdrawal attempted on a deactivated account
    #[error("transaction rejected: account is deactivated")]
    TransactionRejected,

    /// Deposit attempted on a closed account
    #[error("account is closed")]
    AccountClosed,

    /// Event ids are not the contiguous sequence 1..=n
    #[error("invalid event stream: expected event {expected}, found {found}")]
    InvalidEventStream { expected: u64, found: u64 },
}

impl ReplayError {
    /// Stable numeric code for this error.
    pub fn code(&self) -> u16 {
        match self {
            Self::AccountUninstantiated => 128,
            Self::EventNotSupported => 162,
            Self::BalanceExceedsMax => 281,
            Self::BalanceNegative => 285,
            Self::TransactionRejected => 344,
            Self::AccountClosed => 502,
            Self::InvalidEventStream { .. } => 511,
        }
    }

    /// Symbolic name for this error, matching the upstream error taxonomy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccountUninstantiated => "ACCOUNT_UNINSTANTIATED",
            Self::EventNotSupported => "EVENT_NOT_SUPPORTED",
            Self::BalanceExceedsMax => "BALANCE_EXCEEDS_MAX",
            Self::BalanceNegative => "BALANCE_NEGATIVE",
            Self::TransactionRejected => "TRANSACTION_REJECTED_ACCOUNT_DEACTIVATED",
            Self::AccountClosed => "ACCOUNT_CLOSED",
            Self::InvalidEventStream { .. } => "INVALID_EVENT_STREAM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ReplayError::AccountUninstantiated.code(), 128);
        assert_eq!(ReplayError::EventNotSupported.code(), 162);
        assert_eq!(ReplayError::BalanceExceedsMax.code(), 281);
        assert_eq!(ReplayError::BalanceNegative.code(), 285);
        assert_eq!(ReplayError::TransactionRejected.code(), 344);
        assert_eq!(ReplayError::AccountClosed.code(), 502);
        assert_eq!(
            ReplayError::InvalidEventStream {
                expected: 2,
                found: 4
            }
            .code(),
            511
        );
    }

    #[test]
    fn test_display_does_not_embed_code() {
        // Codes belong to the presentation boundary, not the message.
        let err = ReplayError::AccountUninstantiated;
        assert!(!err.to_string().contains("128"));
        assert_eq!(err.name(), "ACCOUNT_UNINSTANTIATED");
    }

    #[test]
    fn test_invalid_stream_reports_positions() {
        let err = ReplayError::InvalidEventStream {
            expected: 3,
            found: 5,
        };
        assert!(err.to_string().contains("expected event 3"));
        assert!(err.to_string().contains("found 5"));
    }
}
