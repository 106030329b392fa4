use super::{ApiJson, AppResult, AppState};
use crate::model::Employee;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub pin: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub employee: Employee,
}

/// `POST /api/auth/login`. The PIN is never echoed back.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let employee = state.employees.authenticate(&body.pin).await?;
    Ok(Json(LoginResponse {
        success: true,
        employee,
    }))
}
