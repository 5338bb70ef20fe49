//! account_replay Library
//!
//! Rebuilds the current state of a financial account by replaying its
//! ordered stream of immutable domain events (Event Sourcing aggregate
//! rebuild). The replay is a pure, synchronous fold: it either produces a
//! complete account snapshot or fails with the first violated business
//! rule, identified by a stable numeric code.

pub mod aggregate;
pub mod domain;
pub mod stream;

pub use aggregate::{Account, AccountStatus, Aggregate};
pub use domain::{Currency, Event, EventPayload, LogMessage, ReplayError};
pub use stream::StreamError;
