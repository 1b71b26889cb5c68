//! Repository for the `cinema` table.

use cinema_core::error::CoreError;
use cinema_core::partial_update::{BindValue, PartialUpdate, UpdateStatement};
use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::cinema::{Cinema, CreateCinema, UpdateCinema};

/// Column list for `cinema` queries.
const COLUMNS: &str = "id, name, location, rating, created_at, updated_at";

/// Build the partial `UPDATE` for `dto` against row `id`.
///
/// Fields are visited in the fixed order name, location, rating.
pub fn update_statement(id: DbId, dto: &UpdateCinema) -> Result<UpdateStatement, CoreError> {
    PartialUpdate::new("cinema")
        .set("name", dto.name.as_deref())
        .set("location", dto.location.as_deref())
        .set("rating", dto.rating)
        .build("updated_at", "id", id, COLUMNS)
}

/// Provides data access for cinemas.
pub struct CinemaRepo;

impl CinemaRepo {
    /// Insert a cinema. Both timestamps come from a single `NOW()` so they
    /// are identical on the returned row.
    pub async fn create(pool: &PgPool, dto: &CreateCinema) -> Result<Cinema, sqlx::Error> {
        let query = format!(
            "INSERT INTO cinema (name, location, rating, created_at, updated_at) \
             VALUES ($1, $2, $3, NOW(), NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cinema>(&query)
            .bind(&dto.name)
            .bind(&dto.location)
            .bind(dto.effective_rating())
            .fetch_one(pool)
            .await
    }

    /// List all cinemas, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Cinema>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cinema ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Cinema>(&query).fetch_all(pool).await
    }

    /// Find a cinema by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cinema>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cinema WHERE id = $1");
        sqlx::query_as::<_, Cinema>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cinema WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Execute a statement produced by [`update_statement`].
    ///
    /// Returns `None` when no row matched, e.g. the row was removed after
    /// the caller's existence check.
    pub async fn apply_update(
        pool: &PgPool,
        statement: UpdateStatement,
    ) -> Result<Option<Cinema>, sqlx::Error> {
        let UpdateStatement { sql, args } = statement;
        let mut query = sqlx::query_as::<_, Cinema>(&sql);
        for arg in args {
            query = match arg {
                BindValue::Text(value) => query.bind(value),
                BindValue::Float(value) => query.bind(value),
                BindValue::BigInt(value) => query.bind(value),
            };
        }
        query.fetch_optional(pool).await
    }
}
