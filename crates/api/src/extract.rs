//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so malformed input gets the JSON error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use cinema_core::types::DbId;

use crate::error::AppError;

pub const INVALID_BODY: &str = "Invalid request body";
pub const INVALID_ID: &str = "Invalid cinema ID format";

/// JSON request body.
///
/// Syntax errors, missing required keys, wrong value types and a missing
/// `Content-Type: application/json` header all become a 400 with
/// [`INVALID_BODY`] and the parser's message in `details`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Malformed {
                message: INVALID_BODY,
                details: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// The `{id}` path segment of a cinema route, parsed strictly as an integer.
///
/// `"12abc"` and `"1.5"` are rejected rather than truncated.
#[derive(Debug, Clone, Copy)]
pub struct CinemaId(pub DbId);

impl<S> FromRequestParts<S> for CinemaId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Malformed {
                message: INVALID_ID,
                details: rejection.body_text(),
            })?;

        raw.parse::<DbId>()
            .map(CinemaId)
            .map_err(|e| AppError::Malformed {
                message: INVALID_ID,
                details: format!("'{raw}': {e}"),
            })
    }
}
