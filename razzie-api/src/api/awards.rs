//! Producer award interval endpoint

use axum::{extract::State, Json};
use razzie_common::db::fetch_winning_credits;
use razzie_common::intervals::{extract_from_rows, IntervalReport};
use tracing::debug;

use crate::{error::ApiError, AppState};

/// GET /api/awards/producer-intervals
///
/// Producers with the shortest and longest gap between consecutive wins.
/// Recomputed from the stored winning credits on every request.
pub async fn producer_intervals(
    State(state): State<AppState>,
) -> Result<Json<IntervalReport>, ApiError> {
    const CONTEXT: &str = "Error getting awards ranges";

    let rows = fetch_winning_credits(&state.db)
        .await
        .map_err(ApiError::query(CONTEXT))?;
    let credits = rows.len();

    let report = extract_from_rows(rows).map_err(|e| ApiError::Query {
        context: CONTEXT,
        source: e.into(),
    })?;

    debug!(
        credits,
        min = report.min.len(),
        max = report.max.len(),
        "Computed producer intervals"
    );

    Ok(Json(report))
}
