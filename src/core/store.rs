//! Read-only catalog store abstraction

use crate::core::entity::{Author, Book};
use crate::core::id::EntityId;

/// Read-only access to the book and author collections.
///
/// Implementations are immutable snapshots: once constructed, the slices
/// returned here never change, so they can be shared across request
/// handlers without locking.
pub trait CatalogStore: Send + Sync {
    /// All books, in insertion order
    fn books(&self) -> &[Book];

    /// All authors, in insertion order
    fn authors(&self) -> &[Author];

    /// Find references between the two collections that point nowhere.
    ///
    /// Resolution tolerates these (the missing side resolves to null or is
    /// skipped); the report only exists so operators can notice them.
    fn consistency_report(&self) -> ConsistencyReport {
        let books = self.books();
        let authors = self.authors();

        let orphaned_books = books
            .iter()
            .filter(|book| !authors.iter().any(|author| author.id == book.author))
            .map(|book| DanglingReference {
                owner: book.id,
                missing: book.author,
            })
            .collect();

        let missing_books = authors
            .iter()
            .flat_map(|author| {
                author
                    .books
                    .iter()
                    .filter(move |id| !books.iter().any(|book| book.id == **id))
                    .map(move |id| DanglingReference {
                        owner: author.id,
                        missing: *id,
                    })
            })
            .collect();

        ConsistencyReport {
            orphaned_books,
            missing_books,
        }
    }
}

/// A reference from one record to an id that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingReference {
    /// The record holding the reference
    pub owner: EntityId,
    /// The id it points at
    pub missing: EntityId,
}

/// Outcome of [`CatalogStore::consistency_report`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Books whose `author` matches no author (owner = book id)
    pub orphaned_books: Vec<DanglingReference>,

    /// Author `books` entries with no matching book (owner = author id)
    pub missing_books: Vec<DanglingReference>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.orphaned_books.is_empty() && self.missing_books.is_empty()
    }
}
