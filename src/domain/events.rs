//! Domain Events
//!
//! Event definitions for Event Sourcing.
//! Events are immutable facts that have happened to an account; the current
//! account state is derived by replaying them in order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;

/// Envelope shared by every event in a stream.
///
/// `event_id` is the 1-based position of the event within its stream; the
/// replay fold requires the ids to be contiguous. The type-specific payload
/// is flattened next to the envelope fields on the wire and discriminated
/// by the JSON `"type"` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: u64,
    pub timestamp: DateTime<Utc>,
    pub account_id: String,

    #[serde(flatten)]
    pub payload: EventPayload,
}

/// Type-specific event payloads.
///
/// A closed set: anything carrying an unknown discriminator deserializes to
/// `Unsupported` and is rejected during replay rather than at decode time,
/// so a bad event is reported at its position in the stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EventPayload {
    /// Account was opened; logically the first event of every stream
    #[serde(rename_all = "camelCase")]
    AccountCreated {
        customer_id: String,
        initial_balance: Decimal,
        max_balance: Decimal,
        currency: Currency,
    },

    /// Money was added to the account
    #[serde(rename_all = "camelCase")]
    Deposit {
        amount: Decimal,
        transaction_id: String,
        currency: Currency,
    },

    /// Money was taken from the account
    #[serde(rename_all = "camelCase")]
    Withdrawal {
        amount: Decimal,
        transaction_id: String,
        currency: Currency,
    },

    /// Account was re-denominated; `currency` is the new currency
    #[serde(rename_all = "camelCase")]
    CurrencyChange {
        new_balance: Decimal,
        currency: Currency,
    },

    /// Account was deactivated
    #[serde(rename = "deactivate")]
    Deactivation { reason: String },

    /// Account was reactivated
    #[serde(rename = "activate")]
    Activation,

    /// Account was closed
    Closure { reason: String },

    /// Unknown discriminator; always rejected by the replay
    #[serde(other)]
    Unsupported,
}

impl EventPayload {
    /// Get the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            EventPayload::AccountCreated { .. } => "account-created",
            EventPayload::Deposit { .. } => "deposit",
            EventPayload::Withdrawal { .. } => "withdrawal",
            EventPayload::CurrencyChange { .. } => "currency-change",
            EventPayload::Deactivation { .. } => "deactivate",
            EventPayload::Activation => "activate",
            EventPayload::Closure { .. } => "closure",
            EventPayload::Unsupported => "unsupported",
        }
    }
}
