//! In-memory catalog snapshot

use crate::core::entity::{Author, Book, Entity};
use crate::core::error::ConfigError;
use crate::core::store::CatalogStore;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Immutable in-memory catalog.
///
/// Built once at startup, then shared behind an `Arc`. There are no
/// mutating methods, so concurrent readers need no lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryCatalog {
    books: Vec<Book>,
    authors: Vec<Author>,
}

/// On-disk shape of a catalog dataset
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    books: Vec<Book>,
    #[serde(default)]
    authors: Vec<Author>,
}

impl InMemoryCatalog {
    /// Create a catalog from explicit collections.
    ///
    /// Ids must be unique within each collection. Cross references are not
    /// checked, see [`CatalogStore::consistency_report`].
    pub fn new(books: Vec<Book>, authors: Vec<Author>) -> Result<Self, ConfigError> {
        ensure_unique_ids(&books)?;
        ensure_unique_ids(&authors)?;
        Ok(Self { books, authors })
    }

    /// The default catalog: two books and their two authors
    pub fn seeded() -> Self {
        Self {
            books: vec![
                Book::new(1, Some("The Awakening"), 1),
                Book::new(2, Some("City of Glass"), 2),
            ],
            authors: vec![
                Author::new(1, "Kate Chopin", &[1]),
                Author::new(2, "Paul Auster", &[2]),
            ],
        }
    }

    /// Load a catalog from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    /// Load a catalog from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().display().to_string();
        let content =
            std::fs::read_to_string(&path).map_err(|e| ConfigError::from_io(&path, e))?;
        Self::parse(&content, Some(path))
    }

    fn parse(yaml: &str, file: Option<String>) -> Result<Self, ConfigError> {
        let document: CatalogDocument =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
                file,
                message: e.to_string(),
            })?;
        Self::new(document.books, document.authors)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn books(&self) -> &[Book] {
        &self.books
    }

    fn authors(&self) -> &[Author] {
        &self.authors
    }
}

fn ensure_unique_ids<T: Entity>(records: &[T]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(ConfigError::InvalidValue {
                field: format!("{}.id", T::resource_name()),
                value: record.id().to_string(),
                message: format!("duplicate {} id", T::resource_name_singular()),
            });
        }
    }
    Ok(())
}
