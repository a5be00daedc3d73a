//! The persistence seam handlers depend on.
//!
//! Handlers receive an `Arc<dyn ProductStore>` through application state, so
//! the PostgreSQL-backed store and the in-memory store are interchangeable.

use async_trait::async_trait;
use delishop_core::types::{DbId, Timestamp};

use crate::error::StoreResult;
use crate::models::product::{NewProduct, Product, ProductChanges};

pub mod memory;
pub mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// Durable storage of products.
#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    /// Insert a product and return it with its store-assigned id.
    async fn insert(&self, product: NewProduct) -> StoreResult<Product>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Product>>;

    /// All products in insertion order, or only those whose `updated_at` is
    /// at or after `min_updated_at` when given.
    async fn list(&self, min_updated_at: Option<Timestamp>) -> StoreResult<Vec<Product>>;

    /// Overwrite name, description, price and stock and set `updated_at`.
    /// `None` if the id does not exist, in which case nothing changes.
    async fn update(
        &self,
        id: DbId,
        changes: ProductChanges,
        updated_at: Timestamp,
    ) -> StoreResult<Option<Product>>;

    /// Returns `false` if the id does not exist.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;

    /// Check the backing storage is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
