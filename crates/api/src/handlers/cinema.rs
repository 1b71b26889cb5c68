//! Handlers for the `/cinema` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinema_core::cinema::ENTITY;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_db::models::cinema::{CreateCinema, UpdateCinema};
use cinema_db::repositories::cinema_repo::update_statement;
use cinema_db::repositories::CinemaRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{CinemaId, JsonBody};
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /cinema
///
/// Create a cinema. A missing rating is stored as 0.0.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCinema>,
) -> AppResult<impl IntoResponse> {
    input.check()?;

    let cinema = CinemaRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::store("Failed to save cinema data"))?;

    tracing::info!(
        cinema_id = cinema.id,
        name = %cinema.name,
        rating = cinema.rating,
        "Cinema created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Cinema added",
            data: cinema,
        }),
    ))
}

/// GET /cinema
///
/// List all cinemas, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cinemas = CinemaRepo::list(&state.pool)
        .await
        .map_err(AppError::store("Failed to fetch cinemas"))?;

    Ok(Json(ListResponse::new(
        "Cinemas retrieved successfully",
        cinemas,
    )))
}

/// GET /cinema/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    CinemaId(id): CinemaId,
) -> AppResult<impl IntoResponse> {
    let cinema = CinemaRepo::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::store("Failed to fetch cinema"))?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse {
        message: "Cinema retrieved successfully",
        data: cinema,
    }))
}

/// PUT /cinema/{id}
///
/// Partially update a cinema. The payload is validated (including the
/// "nothing to update" case) before the store is consulted, then existence
/// is checked with a separate read before the write. The two statements are
/// not in one transaction: if the row disappears in between, the write
/// matches nothing and the response is 404.
pub async fn update(
    State(state): State<AppState>,
    CinemaId(id): CinemaId,
    JsonBody(input): JsonBody<UpdateCinema>,
) -> AppResult<impl IntoResponse> {
    input.check()?;
    let statement = update_statement(id, &input)?;

    let exists = CinemaRepo::exists(&state.pool, id)
        .await
        .map_err(AppError::store("Failed to check cinema existence"))?;
    if !exists {
        return Err(not_found(id));
    }

    let cinema = CinemaRepo::apply_update(&state.pool, statement)
        .await
        .map_err(AppError::store("Failed to update cinema"))?
        .ok_or_else(|| {
            tracing::warn!(cinema_id = id, "Cinema vanished between existence check and update");
            not_found(id)
        })?;

    tracing::info!(
        cinema_id = id,
        name_set = input.name.is_some(),
        location_set = input.location.is_some(),
        rating_set = input.rating.is_some(),
        "Cinema updated",
    );

    Ok(Json(DataResponse {
        message: "Cinema updated successfully",
        data: cinema,
    }))
}

/// DELETE /cinema/{id}
///
/// Routed but not supported; always answers 501.
pub async fn delete() -> AppError {
    AppError::NotImplemented("Deleting cinemas is not supported")
}
