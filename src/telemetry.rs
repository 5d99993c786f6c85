//! Global `tracing` subscriber setup

use once_cell::sync::OnceCell;
use std::io::{self, IsTerminal};
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, fmt};

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Errors encountered while configuring logging
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
	#[error("invalid log filter: {0}")]
	Filter(String),

	#[error("failed to install tracing subscriber: {0}")]
	Subscriber(#[from] SetGlobalDefaultError),
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `filter` when it is set and valid. Only
/// the first call installs anything; later calls return `Ok(())`.
///
/// # Examples
///
/// ```rust
/// # fn main() -> Result<(), landing::telemetry::TelemetryError> {
/// landing::telemetry::init("info")?;
/// landing::telemetry::init("debug")?;
/// # Ok(())
/// # }
/// ```
pub fn init(filter: &str) -> Result<(), TelemetryError> {
	TELEMETRY_GUARD.get_or_try_init(|| install_subscriber(filter)).map(|_| ())
}

fn install_subscriber(filter: &str) -> Result<(), TelemetryError> {
	let filter = match EnvFilter::try_from_default_env() {
		Ok(from_env) => from_env,
		Err(_) => EnvFilter::try_new(filter).map_err(|error| TelemetryError::Filter(error.to_string()))?,
	};

	let subscriber = fmt::Subscriber::builder()
		.with_env_filter(filter)
		.with_target(true)
		.with_writer(io::stderr)
		.with_ansi(io::stderr().is_terminal())
		.finish();

	tracing::subscriber::set_global_default(subscriber)?;
	Ok(())
}
