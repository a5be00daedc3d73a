use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes, mounted under `/api`.
///
/// ```text
/// GET    /products        -> list_products
/// POST   /products        -> save_product
/// GET    /products/{id}   -> get_product
/// DELETE /products/{id}   -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::save_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product).delete(products::delete_product),
        )
}
