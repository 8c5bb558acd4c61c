//! REST exposure: operational endpoints next to the GraphQL API
//!
//! The catalog itself is only reachable through GraphQL; this router
//! carries health checks and any custom routes registered on the builder.

use crate::server::host::ServerHost;
use axum::{Extension, Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Custom routes
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().layer(Extension(host));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check(Extension(host): Extension<Arc<ServerHost>>) -> Json<Value> {
        let (books, authors) = host.catalog_size();
        Json(json!({
            "status": "ok",
            "service": "bookshelf",
            "catalog": {
                "books": books,
                "authors": authors,
            }
        }))
    }
}
