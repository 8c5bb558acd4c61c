//! GraphQL API exposure
//!
//! This module provides the GraphQL routes and the schema they execute.
//! Query semantics live in [`crate::core::resolver`]; this layer only adapts
//! them to GraphQL types.

mod schema;

pub use schema::{AuthorNode, BookNode, BookshelfSchema, QueryRoot, build_schema};

use crate::server::host::ServerHost;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use std::sync::Arc;

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// Returns a router with:
    /// - `POST {path}` and `POST /` executing GraphQL requests
    /// - `GET {path}` serving the playground, when enabled
    /// - `GET {path}/schema` exporting the SDL
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let graphql_app = GraphQLExposure::build_router(host);
    /// ```
    pub fn build_router(host: Arc<ServerHost>) -> Router {
        let schema = build_schema(host.resolver.clone());
        let path = host.config.graphql.path.clone();

        let endpoint = if host.config.graphql.playground {
            get(graphql_playground).post(graphql_handler)
        } else {
            post(graphql_handler)
        };

        Router::new()
            .route(&path, endpoint)
            .route("/", post(graphql_handler))
            .route(&format!("{path}/schema"), get(graphql_schema))
            .layer(Extension(schema))
            .layer(Extension(host))
    }
}

/// Handler for GraphQL queries
async fn graphql_handler(
    Extension(schema): Extension<BookshelfSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Handler for the GraphQL playground UI
async fn graphql_playground(Extension(host): Extension<Arc<ServerHost>>) -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(
        &host.config.graphql.path,
    )))
}

/// Handler for GraphQL schema SDL export
async fn graphql_schema(Extension(schema): Extension<BookshelfSchema>) -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        schema.sdl(),
    )
}
