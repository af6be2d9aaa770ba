use crate::repository;
use crate::types::Context;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{
    extract::{Json, Path, State},
    routing::{get, put},
    Router,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
struct UpdateMenuItemPayload {
    name: String,
    description: Option<String>,
    price: BigDecimal,
}

async fn update_menu_item_by_id(
    Path(id): Path<i32>,
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<UpdateMenuItemPayload>,
) -> impl IntoResponse {
    match repository::menu_item::update_by_id(
        ctx.db_conn.clone(),
        id,
        repository::menu_item::UpdateMenuItemPayload {
            name: payload.name,
            description: payload.description,
            price: payload.price,
        },
    )
    .await
    {
        Ok(Some(menu_item)) => (StatusCode::OK, Json(json!(menu_item))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Menu item not found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to update menu item" })),
        ),
    }
}

async fn delete_menu_item_by_id(
    Path(id): Path<i32>,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    match repository::menu_item::delete_by_id(ctx.db_conn.clone(), id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({ "message": "Menu item deleted successfully" })),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Menu item not found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to delete menu item" })),
        ),
    }
}

async fn get_menu_item_reviews(
    Path(menu_id): Path<i32>,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    match repository::menu_item::find_reviews_by_id(ctx.db_conn.clone(), menu_id).await {
        Ok(reviews) => (StatusCode::OK, Json(json!(reviews))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch reviews" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route(
            "/:id",
            put(update_menu_item_by_id).delete(delete_menu_item_by_id),
        )
        .route("/:id/reviews", get(get_menu_item_reviews))
}
