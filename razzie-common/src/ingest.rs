//! Nominee list ingestion
//!
//! Reads the semicolon-delimited nominee list (`year;title;studios;producers;winner`
//! with a header line) and stores one row per (movie, producer) pair.
//!
//! A load either stores every movie or none: a bad header or year aborts the
//! whole file, and the insert runs in a single transaction.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::db::{models::LoadSummary, movies::replace_movies, MovieRecord};
use crate::intervals::VALID_YEARS;
use crate::{Error, Result};

/// Separators between names in the producers and studios fields
static NAME_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",|\s+and\s+").expect("name separator regex is valid"));

const REQUIRED_COLUMNS: [&str; 5] = ["year", "title", "studios", "producers", "winner"];

/// Split a producers or studios field into trimmed, non-empty names
///
/// ```
/// use razzie_common::ingest::split_names;
///
/// assert_eq!(
///     split_names("Bob Cavallo, Joe Ruffalo and Steve Fargnoli"),
///     vec!["Bob Cavallo", "Joe Ruffalo", "Steve Fargnoli"],
/// );
/// ```
pub fn split_names(field: &str) -> Vec<String> {
    NAME_SEPARATOR
        .split(field)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Column positions resolved from the header line
struct Columns {
    year: usize,
    title: usize,
    studios: usize,
    producers: usize,
    winner: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| Error::InvalidInput(format!("missing required column '{}'", name)))
        };

        Ok(Self {
            year: find(REQUIRED_COLUMNS[0])?,
            title: find(REQUIRED_COLUMNS[1])?,
            studios: find(REQUIRED_COLUMNS[2])?,
            producers: find(REQUIRED_COLUMNS[3])?,
            winner: find(REQUIRED_COLUMNS[4])?,
        })
    }
}

/// Parse nominee list content into movies
pub fn parse_movies(content: &[u8]) -> Result<Vec<MovieRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content);

    let columns = Columns::from_headers(reader.headers()?)?;

    let mut movies = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = |idx: usize| record.get(idx).unwrap_or_default();

        let year_field = field(columns.year);
        let year = year_field
            .parse::<i64>()
            .ok()
            .filter(|year| VALID_YEARS.contains(year))
            .ok_or_else(|| {
                Error::InvalidInput(format!("line {}: invalid year '{}'", line, year_field))
            })?;

        movies.push(MovieRecord {
            movie_id: movies.len() as i64 + 1,
            year,
            title: field(columns.title).to_string(),
            studios: field(columns.studios).to_string(),
            producers: split_names(field(columns.producers)),
            winner: field(columns.winner).eq_ignore_ascii_case("yes"),
        });
    }

    Ok(movies)
}

/// Read and parse a nominee list file
pub async fn read_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let content = tokio::fs::read(path).await?;
    let movies = parse_movies(&content)?;
    debug!("Parsed {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

/// Load a nominee list file into the store, replacing previous contents
pub async fn load_csv(pool: &SqlitePool, path: &Path) -> Result<LoadSummary> {
    let movies = read_movies(path).await?;
    let summary = replace_movies(pool, &movies).await?;

    info!(
        "Loaded {} movies ({} producer rows, {} winners) from {}",
        summary.movies,
        summary.rows,
        summary.winners,
        path.display()
    );

    Ok(summary)
}
