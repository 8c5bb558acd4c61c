//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::{GraphQLExposure, RestExposure};
use super::host::ServerHost;
use crate::config::AppConfig;
use crate::core::error::{BookshelfError, Result, ServerError};
use crate::core::store::CatalogStore;
use axum::Router;
use axum::http::Method;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for the bookshelf HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(config)
///     .with_store(InMemoryCatalog::seeded())
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    store: Option<Arc<dyn CatalogStore>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            store: None,
            custom_routes: Vec::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the catalog store (required)
    pub fn with_store(mut self, store: impl CatalogStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    ///
    /// The configuration is validated again here, since it may not come from
    /// a file. Dangling references between books and authors are logged;
    /// they do not prevent the host from being built.
    pub fn build_host(&mut self) -> Result<ServerHost> {
        self.config.validate()?;

        let store = self.store.take().ok_or_else(|| {
            BookshelfError::Internal("CatalogStore is required. Call .with_store()".to_string())
        })?;

        let report = store.consistency_report();
        for dangling in &report.orphaned_books {
            tracing::warn!(
                book = %dangling.owner,
                author = %dangling.missing,
                "book references an unknown author"
            );
        }
        for dangling in &report.missing_books {
            tracing::warn!(
                author = %dangling.owner,
                book = %dangling.missing,
                "author lists an unknown book"
            );
        }

        Ok(ServerHost::new(self.config.clone(), store))
    }

    /// Build the final router
    ///
    /// This merges:
    /// - Health and custom REST routes
    /// - GraphQL routes
    ///
    /// and wraps them in request tracing and a permissive CORS policy.
    pub fn build(mut self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        let custom_routes = std::mem::take(&mut self.custom_routes);

        let (books, authors) = host.catalog_size();
        tracing::info!(books, authors, "catalog loaded");

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS, Method::POST])
            .allow_headers(Any);

        let app = RestExposure::build_router(host.clone(), custom_routes)
            .merge(GraphQLExposure::build_router(host))
            .layer(cors)
            .layer(TraceLayer::new_for_http());

        Ok(app)
    }

    /// Serve the application on the configured address with graceful shutdown
    ///
    /// This will:
    /// - Bind to `server.host:server.port`
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.to_string(),
                message: e.to_string(),
            })?;

        self.serve_on(listener).await
    }

    /// Serve the application on an already bound listener
    pub async fn serve_on(self, listener: TcpListener) -> Result<()> {
        let graphql_path = self.config.graphql.path.clone();
        let app = self.build()?;

        let addr = listener.local_addr().map_err(|e| ServerError::Bind {
            addr: "listener".to_string(),
            message: e.to_string(),
        })?;
        tracing::info!("Server ready at: http://{}{}", addr, graphql_path);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Serve {
                message: e.to_string(),
            })?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed that signal is ignored and the other
/// one still triggers shutdown.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
