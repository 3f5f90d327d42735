//! Database models

use serde::{Deserialize, Serialize};

/// One movie parsed from the nominee list, before it is flattened into
/// per-producer rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    /// 1-based ordinal of the movie in the source file
    pub movie_id: i64,
    pub year: i64,
    pub title: String,
    /// Raw studios field, split on demand
    pub studios: String,
    pub producers: Vec<String>,
    pub winner: bool,
}

/// Row counts written by a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub movies: usize,
    pub rows: usize,
    pub winners: usize,
}

/// Optional filters for movie listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MovieFilter {
    pub winner: Option<bool>,
    pub year: Option<i64>,
}

/// Movie as returned to API clients, producers and studios already split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: i64,
    pub year: i64,
    pub title: String,
    pub studios: Vec<String>,
    pub producers: Vec<String>,
    pub winner: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct YearWinnerCount {
    pub year: i64,
    pub winner_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearsWithMultipleWinners {
    pub years: Vec<YearWinnerCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioWinCount {
    pub name: String,
    pub win_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudiosWithWinCount {
    pub studios: Vec<StudioWinCount>,
}
