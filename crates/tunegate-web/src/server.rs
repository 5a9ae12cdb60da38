//! Server bootstrap: wires the relay adapter, the cache and the router.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tunegate_core::{CacheStore, CatalogGateway, CatalogSource, RelayCatalogSource};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::{router, AppState};

pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Application state backed by the configured relay; the cache is created
    /// here and lives as long as the returned state.
    pub fn state(&self) -> Arc<AppState> {
        let source: Arc<dyn CatalogSource> = Arc::new(
            RelayCatalogSource::new(self.config.upstream_url.as_str())
                .with_timeout_ms(self.config.upstream_timeout_ms),
        );
        let gateway = CatalogGateway::new(source, CacheStore::new(self.config.cache_ttl));
        Arc::new(AppState::new(gateway))
    }

    /// Binds the listener and serves until the process exits.
    pub async fn start(self) -> Result<(), ServerError> {
        let app = router(self.state());

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        info!(
            %addr,
            upstream = %self.config.upstream_url,
            cache_ttl_secs = self.config.cache_ttl.as_secs(),
            "starting tunegate gateway"
        );

        axum::serve(listener, app).await?;
        Ok(())
    }
}
