//! Binary entrypoint for the evaluator API.

use std::net::SocketAddr;
use std::sync::Arc;

use evaluator_api::{router, AppState, ServiceConfig, UsageStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "evaluator_api=info,ad_evaluator=info,tower_http=info".into()),
    )
    .json()
    .init();

  let config = ServiceConfig::from_env()?;

  let store = match &config.database_url {
    Some(url) => UsageStore::connect(url).await?,
    None => {
      tracing::warn!("DATABASE_URL not set; usage is kept in memory and lost on restart");
      UsageStore::memory()
    }
  };
  store.migrate().await?;

  let state = Arc::new(AppState::new(store, config.daily_limit));
  let backend = state.store.backend();
  let app = router(state);

  let addr = SocketAddr::new(config.bind_addr, config.port);
  tracing::info!(%addr, backend, daily_limit = config.daily_limit, "evaluator-api listening");

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
