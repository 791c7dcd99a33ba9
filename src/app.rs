use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::settings::AppConfig;
use crate::infrastructure::db::memory::MemoryStore;
use crate::infrastructure::db::pool::{connect_to_db, run_migrations};
use crate::infrastructure::db::store::{PgStore, Store};
use crate::state::AppState;

/// Picks the store backend from configuration and builds the shared state.
pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn Store> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = connect_to_db(url, config.database_max_connections).await?;
            if config.run_migrations {
                run_migrations(&pool).await?;
            }
            Arc::new(PgStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL is not set, records are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    info!(port = config.server_port, "Application state ready");
    Ok(AppState::new(store))
}

pub fn create_app(state: AppState) -> Router {
    crate::routes::configure_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
