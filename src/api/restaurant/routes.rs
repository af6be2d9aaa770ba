use crate::repository;
use crate::types::Context;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{
    extract::{Json, Path, State},
    routing::get,
    Router,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
struct RestaurantPayload {
    name: String,
    address: String,
    image: Option<String>,
    mobile: String,
}

async fn create_restaurant(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<RestaurantPayload>,
) -> impl IntoResponse {
    match repository::restaurant::create(
        ctx.db_conn.clone(),
        repository::restaurant::CreateRestaurantPayload {
            name: payload.name,
            address: payload.address,
            image_url: payload.image,
            mobile: payload.mobile,
        },
    )
    .await
    {
        Ok(restaurant) => (StatusCode::OK, Json(json!(restaurant))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to save restaurant" })),
        ),
    }
}

async fn get_restaurants(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    match repository::restaurant::find_all(ctx.db_conn.clone()).await {
        Ok(restaurants) => (StatusCode::OK, Json(json!(restaurants))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch restaurants" })),
        ),
    }
}

async fn get_restaurants_with_ratings(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    match repository::restaurant::find_all_with_ratings(ctx.db_conn.clone()).await {
        Ok(restaurants) => (StatusCode::OK, Json(json!(restaurants))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch restaurants" })),
        ),
    }
}

async fn get_restaurant_by_id(
    Path(id): Path<i32>,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    match repository::restaurant::find_by_id(ctx.db_conn.clone(), id).await {
        Ok(Some(restaurant)) => (StatusCode::OK, Json(json!(restaurant))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Restaurant not found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch restaurant" })),
        ),
    }
}

async fn update_restaurant_by_id(
    Path(id): Path<i32>,
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<RestaurantPayload>,
) -> impl IntoResponse {
    match repository::restaurant::update_by_id(
        ctx.db_conn.clone(),
        id,
        repository::restaurant::UpdateRestaurantPayload {
            name: payload.name,
            address: payload.address,
            image_url: payload.image,
            mobile: payload.mobile,
        },
    )
    .await
    {
        Ok(Some(restaurant)) => (StatusCode::OK, Json(json!(restaurant))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Restaurant not found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to update restaurant" })),
        ),
    }
}

async fn delete_restaurant_by_id(
    Path(id): Path<i32>,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    match repository::restaurant::delete_by_id(ctx.db_conn.clone(), id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({ "message": "Restaurant deleted successfully" })),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Restaurant not found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to delete restaurant" })),
        ),
    }
}

#[derive(Deserialize)]
struct MenuItemPayload {
    name: String,
    description: Option<String>,
    price: BigDecimal,
}

async fn create_menu_item(
    Path(restaurant_id): Path<i32>,
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<MenuItemPayload>,
) -> impl IntoResponse {
    match repository::menu_item::create(
        ctx.db_conn.clone(),
        repository::menu_item::CreateMenuItemPayload {
            restaurant_id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
        },
    )
    .await
    {
        Ok(menu_item) => (StatusCode::OK, Json(json!(menu_item))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to save menu item" })),
        ),
    }
}

async fn get_menu_items(
    Path(restaurant_id): Path<i32>,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    match repository::menu_item::find_by_restaurant_id(ctx.db_conn.clone(), restaurant_id).await {
        Ok(menu_items) => (StatusCode::OK, Json(json!(menu_items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch menu items" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(get_restaurants).post(create_restaurant))
        .route("/with-ratings", get(get_restaurants_with_ratings))
        .route(
            "/:id",
            get(get_restaurant_by_id)
                .put(update_restaurant_by_id)
                .delete(delete_restaurant_by_id),
        )
        .route("/:id/menus", get(get_menu_items).post(create_menu_item))
}
