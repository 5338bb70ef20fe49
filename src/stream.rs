//! Event stream loading
//!
//! Decodes a JSON-encoded event stream (an array of tagged event records)
//! into typed events. Unknown discriminators are kept as
//! [`EventPayload::Unsupported`](crate::domain::EventPayload::Unsupported)
//! so the replay can reject them at their position in the stream.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::Event;

/// Errors that can occur while loading an event stream
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The stream source could not be read
    #[error("failed to read event stream: {0}")]
    Io(#[from] std::io::Error),

    /// The stream is not a valid JSON event array
    #[error("failed to decode event stream: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Load an event stream from a JSON file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Event>, StreamError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading event stream");
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// Load an event stream from any reader producing a JSON event array.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Event>, StreamError> {
    let events: Vec<Event> = serde_json::from_reader(reader)?;
    tracing::debug!(events = events.len(), "event stream decoded");
    Ok(events)
}

/// Load an event stream from an in-memory JSON buffer.
pub fn from_slice(bytes: &[u8]) -> Result<Vec<Event>, StreamError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventPayload;

    #[test]
    fn test_from_slice_decodes_event_array() {
        let json = br#"[
            {
                "eventId": 1,
                "type": "account-created",
                "timestamp": "2024-10-01T09:00:00Z",
                "accountId": "ACC123456",
                "customerId": "CUST001",
                "initialBalance": 5000,
                "maxBalance": 10000,
                "currency": "USD"
            },
            {
                "eventId": 2,
                "type": "closure",
                "timestamp": "2024-10-02T10:30:00Z",
                "accountId": "ACC123456",
                "reason": "Customer request"
            }
        ]"#;

        let events = from_slice(json).unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0].payload,
            EventPayload::AccountCreated { .. }
        ));
        assert!(matches!(events[1].payload, EventPayload::Closure { .. }));
    }

    #[test]
    fn test_empty_array_is_a_valid_stream() {
        let events = from_slice(b"[]").unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_deserialize_error() {
        let err = from_slice(b"[{").unwrap_err();
        assert!(matches!(err, StreamError::Deserialize(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = from_path("does/not/exist.json").unwrap_err();
        assert!(matches!(err, StreamError::Io(_)));
    }
}
