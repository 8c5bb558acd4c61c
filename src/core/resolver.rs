//! Query resolution over a catalog snapshot
//!
//! Every operation is a pure lookup: no I/O, no suspension points, no
//! mutation. Misses are `None` or an empty list, never an error.

use crate::core::entity::{Author, Book};
use crate::core::id::EntityId;
use crate::core::store::CatalogStore;
use std::sync::Arc;

/// Answers the four catalog queries and the two relationship fields
#[derive(Clone)]
pub struct QueryResolver {
    store: Arc<dyn CatalogStore>,
}

impl QueryResolver {
    /// Create a resolver over an immutable store
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// The store this resolver reads from
    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// The book with the given id, if any
    pub fn book(&self, id: EntityId) -> Option<&Book> {
        tracing::debug!(%id, "resolving book");
        self.store.books().iter().find(|book| book.id == id)
    }

    /// All books, or only those written by `author_id` when given.
    ///
    /// Collection order is preserved in both cases.
    pub fn books(&self, author_id: Option<EntityId>) -> Vec<&Book> {
        tracing::debug!(author_id = ?author_id, "resolving books");
        let books = self.store.books().iter();
        match author_id {
            Some(author_id) => books.filter(|book| book.author == author_id).collect(),
            None => books.collect(),
        }
    }

    /// The author with the given id, if any
    pub fn author(&self, id: EntityId) -> Option<&Author> {
        tracing::debug!(%id, "resolving author");
        self.store.authors().iter().find(|author| author.id == id)
    }

    /// All authors, in collection order
    pub fn authors(&self) -> Vec<&Author> {
        self.store.authors().iter().collect()
    }

    /// Resolve `Book.author`
    pub fn author_of(&self, book: &Book) -> Option<&Author> {
        self.author(book.author)
    }

    /// Resolve `Author.books`, following the author's own id list.
    ///
    /// Ids without a matching book are skipped.
    pub fn books_of(&self, author: &Author) -> Vec<&Book> {
        author
            .books
            .iter()
            .filter_map(|id| self.book(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryCatalog;

    fn seeded() -> QueryResolver {
        QueryResolver::new(Arc::new(InMemoryCatalog::seeded()))
    }

    fn ids(books: &[&Book]) -> Vec<i64> {
        books.iter().map(|book| book.id.get()).collect()
    }

    #[test]
    fn test_book_by_id() {
        let resolver = seeded();
        let book = resolver.book(EntityId::new(1)).unwrap();
        assert_eq!(book.title.as_deref(), Some("The Awakening"));
        assert_eq!(book.author, EntityId::new(1));
    }

    #[test]
    fn test_book_miss_is_none() {
        assert!(seeded().book(EntityId::new(999)).is_none());
    }

    #[test]
    fn test_books_without_filter_keeps_order() {
        let resolver = seeded();
        assert_eq!(ids(&resolver.books(None)), vec![1, 2]);
    }

    #[test]
    fn test_books_filtered_by_author() {
        let resolver = seeded();
        let books = resolver.books(Some(EntityId::new(2)));
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title.as_deref(), Some("City of Glass"));
    }

    #[test]
    fn test_books_filter_miss_is_empty() {
        assert!(seeded().books(Some(EntityId::new(999))).is_empty());
    }

    #[test]
    fn test_author_by_id_and_miss() {
        let resolver = seeded();
        assert_eq!(resolver.author(EntityId::new(2)).unwrap().name, "Paul Auster");
        assert!(resolver.author(EntityId::new(999)).is_none());
    }

    #[test]
    fn test_authors_in_order() {
        let names: Vec<_> = seeded()
            .authors()
            .into_iter()
            .map(|author| author.name.clone())
            .collect();
        assert_eq!(names, vec!["Kate Chopin", "Paul Auster"]);
    }

    #[test]
    fn test_relationships_resolve_both_ways() {
        let resolver = seeded();
        for book in resolver.books(None) {
            let author = resolver.author_of(book).unwrap();
            assert_eq!(author.id, book.author);
        }
        for author in resolver.authors() {
            let book_ids: Vec<_> = resolver.books_of(author).iter().map(|b| b.id).collect();
            assert_eq!(book_ids, author.books);
        }
    }

    #[test]
    fn test_dangling_references_resolve_silently() {
        let catalog = InMemoryCatalog::new(
            vec![Book::new(1, Some("Lost"), 42)],
            vec![Author::new(7, "Ghost", &[1, 99])],
        )
        .unwrap();
        let resolver = QueryResolver::new(Arc::new(catalog));

        let book = resolver.book(EntityId::new(1)).unwrap();
        assert!(resolver.author_of(book).is_none());

        let author = resolver.author(EntityId::new(7)).unwrap();
        assert_eq!(ids(&resolver.books_of(author)), vec![1]);
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let resolver = seeded();
        let first: Vec<Book> = resolver.books(None).into_iter().cloned().collect();
        let second: Vec<Book> = resolver.books(None).into_iter().cloned().collect();
        assert_eq!(first, second);
    }
}
