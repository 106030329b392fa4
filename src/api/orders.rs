use super::{ApiJson, AppError, AppResult, AppState};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::money::Money;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list_orders().await?))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.get_order(OrderId(id)).await?))
}

/// `POST /api/orders` → `{ "success": true, "orderId": 1 }`
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<OrderCreate>,
) -> AppResult<Json<Value>> {
    let id = state.orders.create_order(params).await?;
    Ok(Json(json!({ "success": true, "orderId": id })))
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

/// `PUT /api/orders/{id}/status`.
///
/// An unknown status name on an existing order is an invalid transition; on a
/// missing order the order's absence wins.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ApiJson(body): ApiJson<StatusRequest>,
) -> AppResult<Json<Value>> {
    let id = OrderId(id);
    let status = match body.status.parse::<OrderStatus>() {
        Ok(status) => status,
        Err(unknown) => {
            state.orders.get_order(id).await?;
            return Err(AppError::InvalidTransition(unknown.to_string()));
        }
    };
    state.orders.set_status(id, status).await?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub payment_method: String,
    pub amount: Money,
}

pub async fn pay_order(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ApiJson(body): ApiJson<PaymentRequest>,
) -> AppResult<Json<Value>> {
    state
        .payments
        .pay_order(OrderId(id), &body.payment_method, body.amount)
        .await?;
    Ok(Json(json!({ "success": true })))
}
