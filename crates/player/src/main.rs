//! TileBrawl Player - composition root binary.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tilebrawl_player::infrastructure::HttpCatalogClient;
use tilebrawl_player::runner::{self, RunnerDeps};
use tilebrawl_player::{CatalogService, GameClient, PlayerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they stay out of the rendered view
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilebrawl_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting TileBrawl Player");

    let config = PlayerConfig::from_env().context("Invalid player configuration")?;
    tracing::info!(server = %config.server_url, ws = %config.ws_url, "Configuration loaded");

    // Catalogs
    let catalog_client =
        HttpCatalogClient::with_timeout(config.http_base(), config.http_timeout_secs);
    let catalogs = CatalogService::new(&catalog_client).load().await;

    let mut client = GameClient::new(catalogs);
    if let Some(id) = &config.character_id {
        if let Err(e) = client.select_character(id) {
            tracing::warn!("Ignoring TILEBRAWL_CHARACTER: {}", e);
        }
    }

    runner::run(RunnerDeps { client, config }).await
}
