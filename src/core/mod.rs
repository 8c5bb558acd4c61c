//! Core module containing the catalog types and the query resolver

pub mod entity;
pub mod error;
pub mod id;
pub mod resolver;
pub mod store;

pub use entity::{Author, Book, Entity};
pub use error::{BookshelfError, ConfigError, ServerError};
pub use id::EntityId;
pub use resolver::QueryResolver;
pub use store::{CatalogStore, ConsistencyReport, DanglingReference};
