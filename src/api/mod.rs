//! JSON-over-HTTP surface for the till client.
//!
//! Handlers are thin: parse, call one client or service, shape the response. Field
//! names are camelCase on the wire.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod orders;
pub mod stats;
pub mod tables;

pub use error::{AppError, AppResult};

use crate::clients::{CatalogClient, EmployeeClient, OrderClient, TableClient};
use crate::lifecycle::PosSystem;
use crate::services::{PaymentProcessor, StatisticsService};
use axum::extract::FromRequest;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Clients and services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
    pub tables: TableClient,
    pub catalog: CatalogClient,
    pub employees: EmployeeClient,
    pub payments: PaymentProcessor,
    pub statistics: StatisticsService,
}

impl AppState {
    pub fn from_system(system: &PosSystem) -> Self {
        Self {
            orders: system.order_client.clone(),
            tables: system.table_client.clone(),
            catalog: system.catalog_client.clone(),
            employees: system.employee_client.clone(),
            payments: system.payments(),
            statistics: system.statistics(),
        }
    }
}

/// `Json` whose rejections use the API's error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(auth::login))
        .route(
            "/api/categories",
            get(catalog::list_categories).post(catalog::create_category),
        )
        .route("/api/categories/{id}", delete(catalog::delete_category))
        .route("/api/items", get(catalog::list_items).post(catalog::create_item))
        .route(
            "/api/items/{id}",
            put(catalog::update_item).delete(catalog::delete_item),
        )
        .route(
            "/api/payment-methods",
            get(catalog::list_payment_methods).post(catalog::create_payment_method),
        )
        .route(
            "/api/payment-methods/{id}",
            delete(catalog::delete_payment_method),
        )
        .route("/api/tables", get(tables::list_tables))
        .route("/api/tables/{id}/free", put(tables::free_table))
        .route("/api/orders", get(orders::list_orders).post(orders::create_order))
        .route("/api/orders/{id}", get(orders::get_order))
        .route("/api/orders/{id}/status", put(orders::set_status))
        .route("/api/orders/{id}/payment", post(orders::pay_order))
        .route("/api/stats", get(stats::daily_summary))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
