mod bootstrap;
mod menu;

use anyhow::Result;
use scout_core::settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Job Scout v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Endpoint: {}, timeout: {}s, theme: {}",
        settings.api_url,
        settings.timeout_secs,
        settings.theme
    );

    let mut app = menu::App::new(&settings)?;
    app.run()
}
