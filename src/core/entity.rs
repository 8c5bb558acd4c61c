//! Catalog record types

use crate::core::id::EntityId;
use serde::{Deserialize, Serialize};

/// Common behavior of every record kept in the catalog.
///
/// Records are identified by an [`EntityId`] that is unique within their
/// own collection only; a book and an author may share an id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name (e.g., "books")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "book")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> EntityId;
}

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: EntityId,

    #[serde(default)]
    pub title: Option<String>,

    /// Id of the author who wrote this book
    pub author: EntityId,
}

impl Book {
    pub fn new(id: i64, title: Option<&str>, author: i64) -> Self {
        Self {
            id: EntityId::new(id),
            title: title.map(str::to_string),
            author: EntityId::new(author),
        }
    }
}

impl Entity for Book {
    fn resource_name() -> &'static str {
        "books"
    }

    fn resource_name_singular() -> &'static str {
        "book"
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

/// An author in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: EntityId,

    pub name: String,

    /// Ids of the books written by this author, in display order.
    ///
    /// Stored independently of `Book::author`; the two are not cross-checked.
    #[serde(default)]
    pub books: Vec<EntityId>,
}

impl Author {
    pub fn new(id: i64, name: impl Into<String>, books: &[i64]) -> Self {
        Self {
            id: EntityId::new(id),
            name: name.into(),
            books: books.iter().copied().map(EntityId::from).collect(),
        }
    }
}

impl Entity for Author {
    fn resource_name() -> &'static str {
        "authors"
    }

    fn resource_name_singular() -> &'static str {
        "author"
    }

    fn id(&self) -> EntityId {
        self.id
    }
}
