//! Movie listing and dashboard endpoints
//!
//! Aggregates behind the web client's dashboard: years with several
//! winners, studios ranked by wins, winners of a given year, and the paged
//! movie list.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use razzie_common::db::{
    self, MovieFilter, MovieResponse, StudiosWithWinCount, YearsWithMultipleWinners,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    pagination::{calculate_pagination, DEFAULT_PAGE_SIZE},
    AppState,
};

/// Query parameters for the movie list
#[derive(Debug, Deserialize)]
pub struct MovieListQuery {
    /// Page number (0-indexed)
    #[serde(default)]
    pub page: i64,

    #[serde(default = "default_size")]
    pub size: i64,

    pub winner: Option<bool>,
    pub year: Option<i64>,
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// One page of movies
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub content: Vec<MovieResponse>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: i64,
    pub size: i64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

/// GET /api/movies
///
/// Paged movie list with optional `winner` and `year` filters.
pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<MovieListQuery>, QueryRejection>,
) -> Result<Json<MoviePage>, ApiError> {
    const CONTEXT: &str = "Error listing movies";
    let Query(query) = query?;

    let filter = MovieFilter {
        winner: query.winner,
        year: query.year,
    };

    let total_elements = db::count_movies(&state.db, &filter)
        .await
        .map_err(ApiError::query(CONTEXT))?;

    let p = calculate_pagination(total_elements, query.page, query.size);

    let content = db::list_movies(&state.db, &filter, Some(p.size), p.offset)
        .await
        .map_err(ApiError::query(CONTEXT))?;

    Ok(Json(MoviePage {
        total_elements,
        total_pages: p.total_pages,
        number: p.page,
        size: p.size,
        number_of_elements: content.len(),
        first: p.is_first(),
        last: p.is_last(),
        empty: content.is_empty(),
        content,
    }))
}

/// GET /api/movies/yearsWithMultipleWinners
pub async fn years_with_multiple_winners(
    State(state): State<AppState>,
) -> Result<Json<YearsWithMultipleWinners>, ApiError> {
    db::years_with_multiple_winners(&state.db)
        .await
        .map(Json)
        .map_err(ApiError::query("Error getting years with multiple winners"))
}

/// GET /api/movies/studiosWithWinCount
pub async fn studios_with_win_count(
    State(state): State<AppState>,
) -> Result<Json<StudiosWithWinCount>, ApiError> {
    db::studios_with_win_count(&state.db)
        .await
        .map(Json)
        .map_err(ApiError::query("Error getting studio win counts"))
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i64,
}

/// GET /api/movies/winnersByYear?year=
pub async fn winners_by_year(
    State(state): State<AppState>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let Query(query) = query?;

    db::winners_by_year(&state.db, query.year)
        .await
        .map(Json)
        .map_err(ApiError::query("Error getting winners by year"))
}
