//! # Bookshelf
//!
//! A read-only GraphQL API over an in-memory catalog of books and authors.
//!
//! ## Features
//!
//! - **Four queries**: `book(id)`, `books(authorId)`, `author(id)`, `authors`
//! - **Resolved relationships**: `Book.author` and `Author.books` return
//!   nested objects, not foreign keys
//! - **Immutable snapshot**: the catalog is built once and shared without locks
//! - **Configuration-Based**: listening address, endpoint path and dataset via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookshelf::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_config(AppConfig::default())
//!         .with_store(InMemoryCatalog::seeded())
//!         .serve()
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Author, Book, BookshelfError, CatalogStore, ConfigError, ConsistencyReport, Entity,
        EntityId, QueryResolver, ServerError,
    };

    // === Storage ===
    pub use crate::storage::InMemoryCatalog;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::exposure::graphql::{BookshelfSchema, build_schema};
    pub use crate::server::{GraphQLExposure, RestExposure, ServerBuilder, ServerHost};
}
