//! Product model and DTOs.

use delishop_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub stock: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /api/products`.
///
/// `price` is read from the JSON number's literal digits, never through
/// `f64`, so every `NUMERIC(18, 2)` value arrives exactly.
///
/// A positive `id` selects the product to edit; zero, negative or missing
/// means create. Timestamps sent by the client are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProduct {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    #[serde(default)]
    pub stock: Option<String>,
}

impl SaveProduct {
    /// The id of the product to edit, if this body is an edit.
    pub fn edit_target(&self) -> Option<DbId> {
        self.id.filter(|id| *id > 0)
    }

    pub fn into_new(self, created_at: Timestamp) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            created_at,
        }
    }

    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Insert DTO. The id is assigned by the store and `updated_at` starts null.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: Option<String>,
    pub created_at: Timestamp,
}

/// The mutable fields an edit overwrites.
#[derive(Debug, Clone)]
pub struct ProductChanges {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: Option<String>,
}
