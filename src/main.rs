//! Wiring & DI. Entry point: bootstrap the gateway, inject into the UI, run it.
//! No business logic here.

use dotenv::dotenv;
use ph_browse::adapters::fixture::FixtureGateway;
use ph_browse::adapters::http::PlaceholderClient;
use ph_browse::adapters::ui::tui::TuiInputPort;
use ph_browse::ports::{CollectionGateway, InputPort};
use ph_browse::shared::config::AppConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });
    let policy = cfg.search_policy_or_default();

    // --- Gateway: HTTP by default, in-memory fixtures when offline ---
    let (gateway, api_label) = if cfg.is_offline() {
        let delay_ms = cfg.fixture_delay_ms_or_default();
        warn!(delay_ms, "PH_BROWSE_OFFLINE set, serving built-in fixture data");
        let fixture: Arc<dyn CollectionGateway> =
            Arc::new(FixtureGateway::seeded().with_delay(delay_ms));
        (fixture, "offline fixtures".to_string())
    } else {
        let base_url = cfg.base_url_or_default();
        let client: Arc<dyn CollectionGateway> = Arc::new(
            PlaceholderClient::new(&base_url).map_err(|e| anyhow::anyhow!("{}", e))?,
        );
        info!(base_url = %base_url, "using REST API");
        (client, base_url)
    };
    info!(policy = policy.as_str(), "search policy");

    ph_browse::adapters::ui::init_ui(&api_label);

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(gateway, policy));

    // --- Run (main menu -> Browse / Search) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
