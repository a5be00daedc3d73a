//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/products` (`?lastUpdate=`).
///
/// Kept as a raw string so a malformed timestamp produces our own 400 body
/// instead of the extractor's rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsParams {
    #[serde(rename = "lastUpdate", alias = "lastupdate", alias = "last_update")]
    pub last_update: Option<String>,
}
