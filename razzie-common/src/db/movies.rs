//! Movie table queries
//!
//! Aggregates count movies (distinct `movie_id`), never producer rows.

use std::collections::{BTreeMap, HashMap};

use sqlx::SqlitePool;

use crate::db::models::{
    LoadSummary, MovieFilter, MovieRecord, MovieResponse, StudioWinCount, StudiosWithWinCount,
    YearWinnerCount, YearsWithMultipleWinners,
};
use crate::ingest::split_names;
use crate::intervals::RawWinRow;
use crate::Result;

/// Replace the table contents with the given movies in one transaction
pub async fn replace_movies(pool: &SqlitePool, movies: &[MovieRecord]) -> Result<LoadSummary> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM movies").execute(&mut *tx).await?;

    let mut summary = LoadSummary::default();
    for movie in movies {
        // A movie without producers still gets one row so listings see it
        let producers: Vec<&str> = if movie.producers.is_empty() {
            vec![""]
        } else {
            movie.producers.iter().map(String::as_str).collect()
        };

        for producer in producers {
            sqlx::query(
                "INSERT INTO movies (movie_id, year, title, studios, producers, winner)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(movie.movie_id)
            .bind(movie.year)
            .bind(&movie.title)
            .bind(&movie.studios)
            .bind(producer)
            .bind(movie.winner)
            .execute(&mut *tx)
            .await?;
            summary.rows += 1;
        }

        summary.movies += 1;
        if movie.winner {
            summary.winners += 1;
        }
    }

    tx.commit().await?;

    Ok(summary)
}

/// Winning (producer, year) credits, unvalidated
///
/// Placeholder rows of producer-less movies are left out; a NULL producer
/// is kept so validation can reject it.
pub async fn fetch_winning_credits(pool: &SqlitePool) -> Result<Vec<RawWinRow>> {
    let rows = sqlx::query_as::<_, RawWinRow>(
        r#"
        SELECT producers AS producer, CAST(year AS TEXT) AS year
        FROM movies
        WHERE winner = 1
          AND (producers IS NULL OR producers <> '')
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Years in which more than one movie won
pub async fn years_with_multiple_winners(pool: &SqlitePool) -> Result<YearsWithMultipleWinners> {
    let years = sqlx::query_as::<_, YearWinnerCount>(
        r#"
        SELECT year, COUNT(DISTINCT movie_id) AS winner_count
        FROM movies
        WHERE winner = 1
        GROUP BY year
        HAVING COUNT(DISTINCT movie_id) > 1
        ORDER BY year
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(YearsWithMultipleWinners { years })
}

/// Number of winning movies per studio, most wins first
pub async fn studios_with_win_count(pool: &SqlitePool) -> Result<StudiosWithWinCount> {
    let rows = sqlx::query_as::<_, (i64, String)>(
        "SELECT DISTINCT movie_id, studios FROM movies WHERE winner = 1",
    )
    .fetch_all(pool)
    .await?;

    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for (_, studios) in rows {
        for name in split_names(&studios) {
            *counts.entry(name).or_default() += 1;
        }
    }

    let mut studios: Vec<StudioWinCount> = counts
        .into_iter()
        .map(|(name, win_count)| StudioWinCount { name, win_count })
        .collect();
    // BTreeMap order is by name, so a stable sort on count keeps names ascending
    studios.sort_by(|a, b| b.win_count.cmp(&a.win_count));

    Ok(StudiosWithWinCount { studios })
}

/// Number of movies matching the filter
pub async fn count_movies(pool: &SqlitePool, filter: &MovieFilter) -> Result<i64> {
    let winner = filter.winner.map(i64::from);

    let total: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(DISTINCT movie_id)
        FROM movies
        WHERE (? IS NULL OR winner = ?)
          AND (? IS NULL OR year = ?)
        "#,
    )
    .bind(winner)
    .bind(winner)
    .bind(filter.year)
    .bind(filter.year)
    .fetch_one(pool)
    .await?;

    Ok(total)
}

#[derive(sqlx::FromRow)]
struct MovieSummaryRow {
    movie_id: i64,
    year: i64,
    title: String,
    studios: String,
    winner: bool,
}

/// Movies matching the filter in source order
///
/// `limit` of `None` returns every match.
pub async fn list_movies(
    pool: &SqlitePool,
    filter: &MovieFilter,
    limit: Option<i64>,
    offset: i64,
) -> Result<Vec<MovieResponse>> {
    let winner = filter.winner.map(i64::from);

    // SQLite treats a negative LIMIT as unbounded
    let summaries = sqlx::query_as::<_, MovieSummaryRow>(
        r#"
        SELECT movie_id, MIN(year) AS year, MIN(title) AS title,
               MIN(studios) AS studios, MAX(winner) AS winner
        FROM movies
        WHERE (? IS NULL OR winner = ?)
          AND (? IS NULL OR year = ?)
        GROUP BY movie_id
        ORDER BY movie_id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(winner)
    .bind(winner)
    .bind(filter.year)
    .bind(filter.year)
    .bind(limit.unwrap_or(-1))
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let (Some(first), Some(last)) = (summaries.first(), summaries.last()) else {
        return Ok(Vec::new());
    };

    let producer_rows = sqlx::query_as::<_, (i64, String)>(
        r#"
        SELECT movie_id, producers
        FROM movies
        WHERE movie_id BETWEEN ? AND ?
          AND producers <> ''
        ORDER BY id
        "#,
    )
    .bind(first.movie_id)
    .bind(last.movie_id)
    .fetch_all(pool)
    .await?;

    let mut producers: HashMap<i64, Vec<String>> = HashMap::new();
    for (movie_id, producer) in producer_rows {
        producers.entry(movie_id).or_default().push(producer);
    }

    Ok(summaries
        .into_iter()
        .map(|row| MovieResponse {
            id: row.movie_id,
            year: row.year,
            title: row.title,
            studios: split_names(&row.studios),
            producers: producers.remove(&row.movie_id).unwrap_or_default(),
            winner: row.winner,
        })
        .collect())
}

/// Winning movies of one year
pub async fn winners_by_year(pool: &SqlitePool, year: i64) -> Result<Vec<MovieResponse>> {
    let filter = MovieFilter {
        winner: Some(true),
        year: Some(year),
    };
    list_movies(pool, &filter, None, 0).await
}
