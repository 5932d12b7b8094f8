use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use quotes_aggregator::modules::quotes::adapters::outbound::quote_store_in_memory::InMemoryQuoteStore;
use quotes_aggregator::shell::config::AppConfig;
use quotes_aggregator::shell::graphql::GRAPHQL_PATH;
use quotes_aggregator::shell::http::router;
use quotes_aggregator::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    let store = Arc::new(InMemoryQuoteStore::new());
    let state = AppState::new(store, &config.correlation_attribute);

    if config.enable_reset {
        tracing::warn!("maintenance reset hook enabled on DELETE /quotes");
    }

    let app = router(state, config.enable_reset).layer(TraceLayer::new_for_http());

    tracing::info!(
        correlation_attribute = %config.correlation_attribute,
        "quotes aggregator listening on http://{}, GraphQL on {}",
        addr,
        GRAPHQL_PATH
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
