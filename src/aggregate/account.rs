//! Account Aggregate
//!
//! Account is the aggregate rebuilt from an event stream. State is derived
//! exclusively by replaying events, never mutated directly; a replay either
//! yields a complete snapshot or fails with the first rule violation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Currency, Event, EventPayload, LogMessage, ReplayError};

use super::Aggregate;

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Enabled,
    Disabled,
    Closed,
}

impl Default for AccountStatus {
    fn default() -> Self {
        Self::Enabled
    }
}

/// Account Aggregate
///
/// The accumulator of the replay fold and the snapshot handed back to the
/// caller. `account_id` stays `None` until an `AccountCreated` event is
/// applied; balance-mutating events on an uninstantiated account are
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier; set once at creation
    account_id: Option<String>,

    /// Current balance (derived from events)
    balance: Decimal,

    /// Upper bound the balance may never exceed; set once at creation
    max_balance: Decimal,

    /// Currency the account is denominated in
    currency: Currency,

    /// Owning customer; set once at creation
    customer_id: Option<String>,

    /// Account status
    status: AccountStatus,

    /// Audit log of administrative actions, in application order
    account_log: Vec<LogMessage>,
}

impl Account {
    /// Rebuild an account from its event stream.
    ///
    /// An empty stream means the account does not exist and yields
    /// `Ok(None)`. Otherwise the events are folded left to right; the first
    /// violated business rule aborts the whole replay and no partial
    /// snapshot is returned.
    ///
    /// Event ids must be the contiguous sequence `1..=n`. The check runs
    /// before dispatch, so a gap or reordering is reported as
    /// `ReplayError::InvalidEventStream` even when the event itself would
    /// have been rejected for other reasons.
    pub fn replay(events: &[Event]) -> Result<Option<Self>, ReplayError> {
        if events.is_empty() {
            return Ok(None);
        }

        tracing::debug!(events = events.len(), "replaying account event stream");

        let mut account = Account::default();
        for (position, event) in events.iter().enumerate() {
            let expected = position as u64 + 1;
            if event.event_id != expected {
                return Err(ReplayError::InvalidEventStream {
                    expected,
                    found: event.event_id,
                });
            }

            account = account.apply(event)?;
        }

        Ok(Some(account))
    }

    fn apply_created(
        mut self,
        account_id: &str,
        customer_id: &str,
        initial_balance: Decimal,
        max_balance: Decimal,
        currency: Currency,
    ) -> Self {
        self.account_id = Some(account_id.to_string());
        self.balance = initial_balance;
        self.max_balance = max_balance;
        self.currency = currency;
        self.customer_id = Some(customer_id.to_string());
        self
    }

    fn apply_deposit(mut self, amount: Decimal) -> Result<Self, ReplayError> {
        if self.account_id.is_none() {
            return Err(ReplayError::AccountUninstantiated);
        }
        if self.status == AccountStatus::Disabled {
            return Err(ReplayError::TransactionRejected);
        }
        if self.status == AccountStatus::Closed {
            return Err(ReplayError::AccountClosed);
        }

        self.balance += amount;

        if self.balance > self.max_balance {
            return Err(ReplayError::BalanceExceedsMax);
        }

        Ok(self)
    }

    // Note: unlike deposits, withdrawals are not gated on Closed status.
    // The upstream system behaves the same way; kept as observed.
    fn apply_withdrawal(mut self, amount: Decimal) -> Result<Self, ReplayError> {
        if self.account_id.is_none() {
            return Err(ReplayError::AccountUninstantiated);
        }
        if self.status == AccountStatus::Disabled {
            return Err(ReplayError::TransactionRejected);
        }

        self.balance -= amount;

        if self.balance < Decimal::ZERO {
            return Err(ReplayError::BalanceNegative);
        }

        Ok(self)
    }

    fn apply_deactivation(mut self, reason: &str, timestamp: DateTime<Utc>) -> Self {
        self.status = AccountStatus::Disabled;
        // Logged even when already Disabled.
        self.account_log
            .push(LogMessage::new("DEACTIVATE", reason, timestamp));
        self
    }

    fn apply_activation(mut self, timestamp: DateTime<Utc>) -> Self {
        if self.status == AccountStatus::Enabled {
            return self;
        }

        self.status = AccountStatus::Enabled;
        self.account_log
            .push(LogMessage::new("ACTIVATE", "Account reactivated", timestamp));
        self
    }

    fn apply_currency_change(
        mut self,
        new_balance: Decimal,
        new_currency: Currency,
        timestamp: DateTime<Utc>,
    ) -> Self {
        self.account_log.push(LogMessage::new(
            "CURRENCY-CHANGE",
            format!(
                "Change currency from '{}' to '{}'",
                self.currency, new_currency
            ),
            timestamp,
        ));

        self.currency = new_currency;
        self.balance = new_balance;
        // Re-denominating an account forces a review before further use.
        self.status = AccountStatus::Disabled;
        self
    }

    fn apply_closure(mut self, reason: &str, timestamp: DateTime<Utc>) -> Self {
        self.account_log.push(LogMessage::new(
            "CLOSURE",
            format!(
                "Reason: {}, Closing Balance: '{}'",
                reason,
                self.balance.trunc()
            ),
            timestamp,
        ));
        self.status = AccountStatus::Closed;
        self
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn max_balance(&self) -> Decimal {
        self.max_balance
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn account_log(&self) -> &[LogMessage] {
        &self.account_log
    }
}

impl Aggregate for Account {
    type Event = Event;
    type Error = ReplayError;

    fn aggregate_type() -> &'static str {
        "Account"
    }

    fn apply(self, event: &Event) -> Result<Self, ReplayError> {
        match &event.payload {
            EventPayload::AccountCreated {
                customer_id,
                initial_balance,
                max_balance,
                currency,
            } => Ok(self.apply_created(
                &event.account_id,
                customer_id,
                *initial_balance,
                *max_balance,
                *currency,
            )),

            EventPayload::Deposit { amount, .. } => self.apply_deposit(*amount),

            EventPayload::Withdrawal { amount, .. } => self.apply_withdrawal(*amount),

            EventPayload::Deactivation { reason } => {
                Ok(self.apply_deactivation(reason, event.timestamp))
            }

            EventPayload::Activation => Ok(self.apply_activation(event.timestamp)),

            EventPayload::CurrencyChange {
                new_balance,
                currency,
            } => Ok(self.apply_currency_change(*new_balance, *currency, event.timestamp)),

            EventPayload::Closure { reason } => Ok(self.apply_closure(reason, event.timestamp)),

            EventPayload::Unsupported => Err(ReplayError::EventNotSupported),
        }
    }
}
