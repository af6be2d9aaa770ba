use crate::repository;
use crate::types::Context;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

async fn get_user_by_id(
    Path(user_id): Path<i32>,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    match repository::user::find_by_id(ctx.db_conn.clone(), user_id).await {
        Ok(Some(user)) => (StatusCode::OK, Json(json!(user))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch user" })),
        ),
    }
}

async fn get_order_history(
    Path(user_id): Path<i32>,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    match repository::order::find_history_by_user_id(ctx.db_conn.clone(), user_id).await {
        Ok(orders) => (StatusCode::OK, Json(json!(orders))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch orders" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/:user_id", get(get_user_by_id))
        .route("/:user_id/orders", get(get_order_history))
}
