//! Common test utilities

use std::path::PathBuf;

use account_replay::{stream, Event};

/// Load a numbered event stream fixture from `tests/streams/`.
pub fn load_stream(num: u32) -> Vec<Event> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/streams")
        .join(format!("stream-{num:03}.json"));

    stream::from_path(&path)
        .unwrap_or_else(|e| panic!("failed to load fixture {}: {e}", path.display()))
}
