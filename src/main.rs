//! account_replay - account state reconstruction from event streams
//!
//! Loads a JSON event stream from disk, replays it into an account snapshot
//! and prints the snapshot as JSON. A failed replay is reported with its
//! numeric code and symbolic name; this binary is the only place those are
//! rendered into a message.

use account_replay::{stream, Account};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_replay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: account_replay <stream.json>"))?;

    let events = stream::from_path(&path)?;
    tracing::info!(path = %path, events = events.len(), "event stream loaded");

    match Account::replay(&events) {
        Ok(Some(account)) => println!("{}", serde_json::to_string_pretty(&account)?),
        Ok(None) => println!("null"),
        Err(err) => {
            tracing::error!(code = err.code(), name = err.name(), "replay failed");
            anyhow::bail!("{} ERROR_{}: {}", err.code(), err.name(), err);
        }
    }

    Ok(())
}
