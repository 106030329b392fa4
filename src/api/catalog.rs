use super::{ApiJson, AppResult, AppState};
use crate::model::{
    Category, CategoryCreate, CategoryId, Item, ItemCreate, ItemId, ItemUpdate, PaymentMethod,
    PaymentMethodCreate, PaymentMethodId,
};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.catalog.list_active_categories().await?))
}

pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<CategoryCreate>,
) -> AppResult<Json<Value>> {
    let category = state.catalog.create_category(params).await?;
    Ok(Json(json!({ "success": true, "category": category })))
}

/// Soft delete.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Value>> {
    state.catalog.deactivate_category(CategoryId(id)).await?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemQuery {
    pub category_id: Option<u64>,
}

pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> AppResult<Json<Vec<Item>>> {
    let items = state
        .catalog
        .list_active_items(query.category_id.map(CategoryId))
        .await?;
    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<ItemCreate>,
) -> AppResult<Json<Value>> {
    let item = state.catalog.create_item(params).await?;
    Ok(Json(json!({ "success": true, "item": item })))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ApiJson(update): ApiJson<ItemUpdate>,
) -> AppResult<Json<Value>> {
    let item = state.catalog.update_item(ItemId(id), update).await?;
    Ok(Json(json!({ "success": true, "item": item })))
}

/// Soft delete.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Value>> {
    state.catalog.deactivate_item(ItemId(id)).await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn list_payment_methods(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PaymentMethod>>> {
    Ok(Json(state.catalog.list_payment_methods().await?))
}

pub async fn create_payment_method(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<PaymentMethodCreate>,
) -> AppResult<Json<Value>> {
    let method = state.catalog.create_payment_method(params).await?;
    Ok(Json(json!({ "success": true, "method": method })))
}

pub async fn delete_payment_method(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Value>> {
    state
        .catalog
        .delete_payment_method(PaymentMethodId(id))
        .await?;
    Ok(Json(json!({ "success": true })))
}
