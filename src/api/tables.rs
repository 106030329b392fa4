use super::{AppResult, AppState};
use crate::model::{Table, TableId};
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

pub async fn list_tables(State(state): State<AppState>) -> AppResult<Json<Vec<Table>>> {
    Ok(Json(state.tables.list_tables().await?))
}

/// `PUT /api/tables/{id}/free`. Refused while the table still has open orders.
pub async fn free_table(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Value>> {
    state.orders.free_table(TableId(id)).await?;
    Ok(Json(json!({ "success": true })))
}
