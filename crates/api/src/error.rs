use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinema_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "error", "code", "details"? }`
/// bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinema_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request could not be parsed (body or path identifier).
    #[error("{message}: {details}")]
    Malformed {
        message: &'static str,
        details: String,
    },

    /// A record store operation failed. `context` says which one.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The route exists but has no behaviour behind it.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adapter for `map_err` that tags a store failure with `context`.
    pub fn store(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Store { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None)
                }
            },

            // --- HTTP-specific errors ---
            AppError::Malformed { message, details } => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                message.to_string(),
                Some(details),
            ),
            AppError::Store { context, source } => classify_store_error(context, &source),
            AppError::NotImplemented(msg) => (
                StatusCode::NOT_IMPLEMENTED,
                "NOT_IMPLEMENTED",
                msg.to_string(),
                None,
            ),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a store failure into status, code, message and details.
///
/// - PostgreSQL check violations (SQLSTATE `23514`) map to 400: the store
///   refused a value the validators should have caught.
/// - Everything else maps to 500 and carries the driver's description.
fn classify_store_error(
    context: &'static str,
    err: &sqlx::Error,
) -> (StatusCode, &'static str, String, Option<String>) {
    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23514") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Value violates constraint: {constraint}"),
                None,
            );
        }
    }

    tracing::error!(error = %err, context, "Record store error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "DATABASE_ERROR",
        context.to_string(),
        Some(err.to_string()),
    )
}
