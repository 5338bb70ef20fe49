//! Domain module
//!
//! Core domain types: events, currency, audit log entries and the replay
//! error taxonomy.

pub mod currency;
pub mod error;
pub mod events;
pub mod log;

pub use currency::Currency;
pub use error::ReplayError;
pub use events::{Event, EventPayload};
pub use log::LogMessage;
