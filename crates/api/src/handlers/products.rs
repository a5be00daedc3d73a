//! Handlers for the `/api/products` resource.
//!
//! `POST /api/products` is both create and edit: a positive `id` in the body
//! edits that product, anything else creates a new one. The two paths are
//! separate operations ([`create_product`], [`edit_product`]) joined only by
//! [`save_product`].

use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use delishop_core::error::CoreError;
use delishop_core::product::ENTITY;
use delishop_core::types::{self, parse_timestamp, DbId};
use delishop_db::models::product::{Product, SaveProduct};
use delishop_db::store::ProductStore;

use crate::error::{AppError, AppResult};
use crate::query::ListProductsParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /api/products?lastUpdate=
///
/// All products in insertion order, or only those edited at or after
/// `lastUpdate`.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> AppResult<impl IntoResponse> {
    let min_updated_at = params
        .last_update
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(parse_timestamp)
        .transpose()?;

    let products = state.store.list(min_updated_at).await?;

    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(Json(product))
}

/// POST /api/products
///
/// Edit (200) when `id > 0`, otherwise create (201 with `Location`).
pub async fn save_product(
    State(state): State<AppState>,
    Json(input): Json<SaveProduct>,
) -> AppResult<Response> {
    match input.edit_target() {
        Some(id) => {
            let product = edit_product(state.store.as_ref(), id, input).await?;
            Ok(Json(product).into_response())
        }
        None => {
            let product = create_product(state.store.as_ref(), input).await?;
            let location = format!("/api/products/{}", product.id);
            Ok((StatusCode::CREATED, [(LOCATION, location)], Json(product)).into_response())
        }
    }
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Insert a new product. Any id or timestamps the client sent are discarded:
/// the store assigns the id, `created_at` is now and `updated_at` is null.
pub async fn create_product(store: &dyn ProductStore, input: SaveProduct) -> AppResult<Product> {
    let product = store.insert(input.into_new(types::now())).await?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    Ok(product)
}

/// Overwrite name, description, price and stock of product `id` and stamp
/// `updated_at`. Fails with not-found, without touching the store, when `id`
/// does not exist.
pub async fn edit_product(
    store: &dyn ProductStore,
    id: DbId,
    input: SaveProduct,
) -> AppResult<Product> {
    let product = store
        .update(id, input.into_changes(), types::now())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(product_id = id, "Product updated");

    Ok(product)
}
