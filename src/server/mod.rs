//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that wires the catalog, the
//! resolver and the configuration into:
//! - The GraphQL endpoint, playground and SDL export
//! - Health check routes

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::{GraphQLExposure, RestExposure};
pub use host::ServerHost;
