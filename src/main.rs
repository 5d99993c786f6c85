use anyhow::Context;
use landing::{Application, Settings, telemetry};
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variable naming the settings file when no argument is given
const CONFIG_ENV: &str = "LANDING_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let config_path = std::env::args_os()
		.nth(1)
		.or_else(|| std::env::var_os(CONFIG_ENV))
		.map(PathBuf::from);

	let settings = Settings::load(config_path.as_deref()).context("failed to load settings")?;
	telemetry::init(&settings.log_filter)?;
	tracing::debug!(?settings, "settings loaded");

	let app = Application::from_settings(&settings).context("failed to build application")?;
	landing_server::HttpServer::new(Arc::new(app))
		.listen(settings.bind_address)
		.await?;

	Ok(())
}
