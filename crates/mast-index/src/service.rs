//! Service layer answering relationship queries over a `MastStore`.
//!
//! `MastService` wraps the store and the query configuration. All repo
//! methods are implemented as `impl MastService` blocks in `crate::repos`.

use mast_config::{MastConfig, QueryConfig};

use crate::MastStore;

/// One independent registry plus the knobs its queries read.
///
/// Every relationship query is a pure derivation over the store's article
/// list; nothing is cached between calls.
#[derive(Debug, Default)]
pub struct MastService {
    store: MastStore,
    query: QueryConfig,
}

impl MastService {
    /// Create an empty service with default query settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty service using the query section of a loaded config.
    #[must_use]
    pub fn from_config(config: &MastConfig) -> Self {
        Self {
            store: MastStore::new(),
            query: config.query.clone(),
        }
    }

    /// Wrap an existing store (for testing).
    #[must_use]
    pub const fn from_store(store: MastStore, query: QueryConfig) -> Self {
        Self { store, query }
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &MastStore {
        &self.store
    }

    pub(crate) const fn store_mut(&mut self) -> &mut MastStore {
        &mut self.store
    }

    /// Access the query configuration.
    #[must_use]
    pub const fn query_config(&self) -> &QueryConfig {
        &self.query
    }
}
