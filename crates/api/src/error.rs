use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use delishop_core::error::CoreError;
use delishop_db::error::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures. Not-found is answered with a plain-text body; every other error
/// is a `{ "error", "code" }` JSON object.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `delishop_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error from the product store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    return (StatusCode::NOT_FOUND, core.to_string()).into_response();
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::Store(err) => classify_store_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// PostgreSQL SQLSTATE codes raised by the `products` column definitions.
const COLUMN_CONSTRAINT_CODES: [&str; 4] = [
    "22001", // string_data_right_truncation (VARCHAR limit)
    "22003", // numeric_value_out_of_range (NUMERIC(18, 2))
    "23502", // not_null_violation
    "23514", // check_violation
];

/// Classify a store error into an HTTP status, error code, and message.
///
/// There is no validation layer in front of the store, so column constraint
/// violations are reported like any other storage failure: a sanitized 500.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::Database(sqlx::Error::Database(db_err))
            if db_err
                .code()
                .is_some_and(|code| COLUMN_CONSTRAINT_CODES.contains(&&*code)) =>
        {
            tracing::error!(error = %db_err, "Product rejected by column constraint");
        }
        StoreError::Constraint(msg) => {
            tracing::error!(error = %msg, "Product rejected by column constraint");
        }
        other => {
            tracing::error!(error = %other, "Database error");
        }
    }
    internal()
}
