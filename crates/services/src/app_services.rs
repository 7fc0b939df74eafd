use std::sync::Arc;

use storage::repository::Storage;

use crate::catalog_service::CatalogService;
use crate::seed_service::SeedService;

/// Assembles app-facing services over an injected `Storage`.
#[derive(Clone)]
pub struct AppServices {
    seed: Arc<SeedService>,
    catalog: Arc<CatalogService>,
}

impl AppServices {
    /// Build services over any storage backend.
    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        let seed = Arc::new(SeedService::new(
            Arc::clone(&storage.chapters),
            Arc::clone(&storage.lessons),
            Arc::clone(&storage.questions),
        ));
        let catalog = Arc::new(CatalogService::new(
            Arc::clone(&storage.chapters),
            Arc::clone(&storage.questions),
        ));
        Self { seed, catalog }
    }

    #[must_use]
    pub fn seed(&self) -> Arc<SeedService> {
        Arc::clone(&self.seed)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }
}
