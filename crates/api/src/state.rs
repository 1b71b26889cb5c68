/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is the only route to the record store; handlers receive it here
/// rather than through any global. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinema_db::DbPool,
}
