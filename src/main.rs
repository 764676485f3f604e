use std::sync::Arc;

use playmatch_api::{
    api::{create_router, AppState},
    config::Config,
    db::{self, GameStore, MemoryGameStore, PgGameStore},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let policy = config.scoring_policy()?;

    let store: Arc<dyn GameStore> = match &config.database_url {
        Some(url) => {
            let pool = db::postgres::create_pool(url).await?;
            tracing::info!("Using PostgreSQL library store");
            Arc::new(PgGameStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, libraries are kept in memory");
            Arc::new(MemoryGameStore::new())
        }
    };

    let app = create_router(AppState::with_store(store, policy));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
