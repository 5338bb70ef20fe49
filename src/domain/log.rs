//! Account audit log
//!
//! Administrative actions (deactivation, reactivation, currency changes,
//! closure) are recorded on the account as append-only log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit log entry on an account.
///
/// Entries are appended in event-application order and never edited or
/// removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    /// Action tag: `DEACTIVATE`, `ACTIVATE`, `CURRENCY-CHANGE` or `CLOSURE`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable detail for the action.
    pub message: String,

    /// Timestamp of the event that produced this entry.
    pub timestamp: DateTime<Utc>,
}

impl LogMessage {
    pub fn new(
        kind: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            timestamp,
        }
    }
}
