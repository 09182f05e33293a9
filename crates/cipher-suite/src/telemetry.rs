//! Telemetry initialisation for host applications.
//!
//! The library itself only emits `tracing` events and never installs a
//! subscriber. Spans and events carry sizes only: no key material, plaintext
//! or decrypted text ever appears in a field.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise a JSON tracing subscriber at `log_level`.
///
/// `RUST_LOG` takes precedence over `log_level` when set.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise cipher-suite tracing subscriber: {e}"))
}
