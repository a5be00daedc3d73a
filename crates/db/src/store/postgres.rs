use async_trait::async_trait;
use delishop_core::types::{DbId, Timestamp};

use super::ProductStore;
use crate::error::StoreResult;
use crate::models::product::{NewProduct, Product, ProductChanges};
use crate::repositories::ProductRepo;
use crate::DbPool;

/// [`ProductStore`] backed by PostgreSQL through [`ProductRepo`].
#[derive(Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
        Ok(ProductRepo::create(&self.pool, &product).await?)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Product>> {
        Ok(ProductRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list(&self, min_updated_at: Option<Timestamp>) -> StoreResult<Vec<Product>> {
        Ok(ProductRepo::list(&self.pool, min_updated_at).await?)
    }

    async fn update(
        &self,
        id: DbId,
        changes: ProductChanges,
        updated_at: Timestamp,
    ) -> StoreResult<Option<Product>> {
        Ok(ProductRepo::update(&self.pool, id, &changes, updated_at).await?)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(ProductRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
