//! razzie-api library - Golden Raspberry Awards HTTP API
//!
//! Read-only JSON endpoints over the loaded nominee list: producer award
//! intervals plus the movie aggregates used by the dashboard client.

use axum::{http::Uri, Router};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod error;
pub mod pagination;

pub use error::ApiError;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let awards = Router::new().route(
        "/api/awards/producer-intervals",
        get(api::producer_intervals),
    );

    let movies = Router::new()
        .route("/api/movies", get(api::list_movies))
        .route(
            "/api/movies/yearsWithMultipleWinners",
            get(api::years_with_multiple_winners),
        )
        .route(
            "/api/movies/studiosWithWinCount",
            get(api::studios_with_win_count),
        )
        .route("/api/movies/winnersByYear", get(api::winners_by_year));

    Router::new()
        .merge(awards)
        .merge(movies)
        .merge(api::health_routes())
        .merge(api::docs_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        // The dashboard client is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
