use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use delishop_core::product::check_columns;
use delishop_core::types::{DbId, Timestamp};

use super::ProductStore;
use crate::error::{StoreError, StoreResult};
use crate::models::product::{NewProduct, Product, ProductChanges};

/// In-memory implementation of [`ProductStore`] for tests and local runs.
///
/// Ids come from a monotonically increasing counter starting at 1 and are
/// never reused, matching `BIGSERIAL`. The same column limits PostgreSQL
/// enforces are checked on every write.
#[derive(Default)]
pub struct MemoryProductStore {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    last_id: DbId,
    rows: BTreeMap<DbId, Product>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    ///
    /// # Panics
    ///
    /// Panics if a writer panicked while holding the lock.
    pub fn len(&self) -> usize {
        self.state.read().expect("memory store lock poisoned").rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
        let price = check_columns(&product.name, product.description.as_deref(), product.price)?;

        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        state.last_id += 1;
        let row = Product {
            id: state.last_id,
            name: product.name,
            description: product.description,
            price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: None,
        };
        state.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Product>> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn list(&self, min_updated_at: Option<Timestamp>) -> StoreResult<Vec<Product>> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state
            .rows
            .values()
            .filter(|p| match min_updated_at {
                Some(min) => p.updated_at.is_some_and(|at| at >= min),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: DbId,
        changes: ProductChanges,
        updated_at: Timestamp,
    ) -> StoreResult<Option<Product>> {
        let price = check_columns(&changes.name, changes.description.as_deref(), changes.price)?;

        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        let Some(row) = state.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.name = changes.name;
        row.description = changes.description;
        row.price = price;
        row.stock = changes.stock;
        row.updated_at = Some(updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
