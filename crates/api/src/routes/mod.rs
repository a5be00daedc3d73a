pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /products          list (GET), create or edit (POST)
/// /products/{id}     get (GET), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(products::router())
}
