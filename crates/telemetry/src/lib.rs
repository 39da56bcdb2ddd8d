//! Tracing subscriber initialization for the bootstrap binaries.

use anyhow::anyhow;
use sitebuilder_kernel::settings::LogFormat;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; defaults to `info` otherwise. Must be called
/// at most once per process.
pub fn init(format: &LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
    };

    result.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    tracing::debug!(format = ?format, "tracing subscriber installed");
    Ok(())
}
