use super::{AppResult, AppState};
use crate::services::DailySummary;
use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    /// RFC 3339 instant; defaults to now.
    pub as_of: Option<DateTime<Utc>>,
}

pub async fn daily_summary(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<DailySummary>> {
    let as_of = query.as_of.unwrap_or_else(Utc::now);
    Ok(Json(state.statistics.daily_summary(as_of).await?))
}
