//! Repository for the `products` table.

use delishop_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::product::{NewProduct, Product, ProductChanges};

/// Column list for `products` queries.
const COLUMNS: &str = "id, name, description, price, stock, created_at, updated_at";

/// Provides data access for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product, returning the row with its assigned id.
    pub async fn create(pool: &PgPool, dto: &NewProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, stock, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price)
            .bind(&dto.stock)
            .bind(dto.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List products in insertion order.
    ///
    /// With `min_updated_at`, only rows edited at or after that instant are
    /// returned; never-edited rows (`updated_at IS NULL`) fail the comparison
    /// and are excluded.
    pub async fn list(
        pool: &PgPool,
        min_updated_at: Option<Timestamp>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE $1::timestamptz IS NULL OR updated_at >= $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(min_updated_at)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the mutable fields of a product and stamp `updated_at`.
    ///
    /// Returns `None` when no row has the given id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &ProductChanges,
        updated_at: Timestamp,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                 name = $2, \
                 description = $3, \
                 price = $4, \
                 stock = $5, \
                 updated_at = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price)
            .bind(&dto.stock)
            .bind(updated_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
