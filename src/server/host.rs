//! Server host for transport-agnostic API exposure
//!
//! The host owns everything a request handler needs: the configuration and
//! the resolver over the catalog snapshot. Exposures (REST, GraphQL) read
//! from it and never hold state of their own.

use crate::config::AppConfig;
use crate::core::resolver::QueryResolver;
use crate::core::store::CatalogStore;
use std::sync::Arc;

/// Host context containing all server state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(AppConfig::default(), Arc::new(InMemoryCatalog::seeded())));
///
/// let rest_app = RestExposure::build_router(host.clone(), vec![]);
/// let graphql_app = GraphQLExposure::build_router(host);
/// ```
pub struct ServerHost {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Resolver shared by every GraphQL request
    pub resolver: QueryResolver,
}

impl ServerHost {
    /// Build the host around an already constructed catalog
    pub fn new(config: AppConfig, store: Arc<dyn CatalogStore>) -> Self {
        Self {
            config: Arc::new(config),
            resolver: QueryResolver::new(store),
        }
    }

    /// Number of books and authors being served
    pub fn catalog_size(&self) -> (usize, usize) {
        let store = self.resolver.store();
        (store.books().len(), store.authors().len())
    }
}
