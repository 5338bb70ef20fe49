//! Aggregate module
//!
//! Aggregate Root pattern implementation for Event Sourcing.

pub mod account;

pub use account::{Account, AccountStatus};

/// Aggregate trait that all aggregates must implement
pub trait Aggregate: Sized + Default {
    /// The type of events this aggregate handles
    type Event;

    /// The error raised when an event violates a business rule
    type Error;

    /// Get the aggregate type name
    fn aggregate_type() -> &'static str;

    /// Apply an event to produce the next aggregate state.
    ///
    /// Takes the aggregate by value and returns the updated one, so a
    /// failed application leaves no half-mutated state behind.
    fn apply(self, event: &Self::Event) -> Result<Self, Self::Error>;
}
