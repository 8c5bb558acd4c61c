//! GraphQL schema for the catalog
//!
//! ```graphql
//! type Book   { id: ID!  title: String  author: Author }
//! type Author { id: ID!  name: String!  books: [Book!] }
//! type Query {
//!   book(id: ID!): Book
//!   books(authorId: ID): [Book!]!
//!   author(id: ID!): Author
//!   authors: [Author!]!
//! }
//! ```
//!
//! Incoming `ID` arguments are converted to [`EntityId`] here and nowhere
//! else. An argument that does not name an integer matches nothing.

use crate::core::entity::{Author, Book};
use crate::core::error::BookshelfError;
use crate::core::id::EntityId;
use crate::core::resolver::QueryResolver;
use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ErrorExtensions, ID, Object, Result, Schema,
};

/// The executable schema type
pub type BookshelfSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with the resolver injected as schema data
pub fn build_schema(resolver: QueryResolver) -> BookshelfSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(resolver)
        .finish()
}

fn resolver<'a>(ctx: &Context<'a>) -> Result<&'a QueryResolver> {
    ctx.data::<QueryResolver>()
        .map_err(|e| BookshelfError::Internal(e.message).extend())
}

fn parse_id(raw: &str) -> Option<EntityId> {
    match raw.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::debug!("{}, treating as no match", e);
            None
        }
    }
}

/// GraphQL view of a [`Book`]
pub struct BookNode(Book);

#[Object(name = "Book")]
impl BookNode {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> Option<&str> {
        self.0.title.as_deref()
    }

    /// The author this book points at, or null if that author does not exist
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<AuthorNode>> {
        let resolver = resolver(ctx)?;
        Ok(resolver.author_of(&self.0).cloned().map(AuthorNode))
    }
}

/// GraphQL view of an [`Author`]
pub struct AuthorNode(Author);

#[Object(name = "Author")]
impl AuthorNode {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Books listed on this author, in the author's own order
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<BookNode>>> {
        let resolver = resolver(ctx)?;
        Ok(Some(nodes(resolver.books_of(&self.0), BookNode)))
    }
}

fn nodes<T: Clone, N>(records: Vec<&T>, wrap: fn(T) -> N) -> Vec<N> {
    records.into_iter().cloned().map(wrap).collect()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a book by id
    async fn book(&self, ctx: &Context<'_>, id: ID) -> Result<Option<BookNode>> {
        let resolver = resolver(ctx)?;
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        Ok(resolver.book(id).cloned().map(BookNode))
    }

    /// List books, optionally only those written by `authorId`
    async fn books(&self, ctx: &Context<'_>, author_id: Option<ID>) -> Result<Vec<BookNode>> {
        let resolver = resolver(ctx)?;
        // An empty authorId counts as no filter at all
        let filter = match author_id.as_ref().map(|id| id.as_str()) {
            None | Some("") => None,
            Some(raw) => match parse_id(raw) {
                Some(id) => Some(id),
                None => return Ok(Vec::new()),
            },
        };
        Ok(nodes(resolver.books(filter), BookNode))
    }

    /// Get an author by id
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<AuthorNode>> {
        let resolver = resolver(ctx)?;
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        Ok(resolver.author(id).cloned().map(AuthorNode))
    }

    /// List all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<AuthorNode>> {
        let resolver = resolver(ctx)?;
        Ok(nodes(resolver.authors(), AuthorNode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryCatalog;
    use async_graphql::value;
    use std::sync::Arc;

    fn schema() -> BookshelfSchema {
        build_schema(QueryResolver::new(Arc::new(InMemoryCatalog::seeded())))
    }

    #[tokio::test]
    async fn test_book_with_author() {
        let response = schema()
            .execute(r#"{ book(id: 1) { id title author { id name } } }"#)
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data,
            value!({
                "book": {
                    "id": "1",
                    "title": "The Awakening",
                    "author": { "id": "1", "name": "Kate Chopin" }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_textual_id_matches_numeric_record() {
        let response = schema()
            .execute(r#"{ a: book(id: "2") { title } b: book(id: " 2.0 ") { title } }"#)
            .await;

        assert_eq!(
            response.data,
            value!({
                "a": { "title": "City of Glass" },
                "b": { "title": "City of Glass" }
            })
        );
    }

    #[tokio::test]
    async fn test_unparseable_ids_match_nothing() {
        let response = schema()
            .execute(r#"{ book(id: "abc") { id } author(id: "1.5") { id } books(authorId: "x") { id } }"#)
            .await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data,
            value!({ "book": null, "author": null, "books": [] })
        );
    }

    #[tokio::test]
    async fn test_empty_author_id_returns_all_books() {
        let response = schema().execute(r#"{ books(authorId: "") { id } }"#).await;

        assert_eq!(
            response.data,
            value!({ "books": [ { "id": "1" }, { "id": "2" } ] })
        );
    }

    #[tokio::test]
    async fn test_missing_resolver_data_is_internal_error() {
        let schema = Schema::build(QueryRoot, EmptyMutation, EmptySubscription).finish();
        let response = schema.execute("{ authors { id } }").await;

        assert_eq!(response.errors.len(), 1);
        let extensions = response.errors[0].extensions.as_ref().unwrap();
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("INTERNAL_ERROR"))
        );
    }

    #[test]
    fn test_sdl_nullability() {
        let sdl = schema().sdl();

        assert!(sdl.contains("book(id: ID!): Book"));
        assert!(sdl.contains("books(authorId: ID): [Book!]!"));
        assert!(sdl.contains("author(id: ID!): Author"));
        assert!(sdl.contains("authors: [Author!]!"));
        assert!(sdl.contains("books: [Book!]\n"));
        assert!(sdl.contains("name: String!"));
        assert!(sdl.contains("title: String\n"));
    }
}
