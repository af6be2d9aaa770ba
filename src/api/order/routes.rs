use crate::repository;
use crate::types::Context;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{
    extract::{Json, Path, State},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

// The request body also carries an overall total_price; it is ignored, only
// per-line-item totals are persisted.
#[derive(Deserialize)]
struct CreateOrderPayload {
    user_id: i32,
    #[serde(rename = "orderItems")]
    order_items: Vec<repository::order::OrderLineItem>,
}

async fn create_order(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<CreateOrderPayload>,
) -> impl IntoResponse {
    match repository::order::create(
        ctx.db_conn.clone(),
        repository::order::CreateOrderPayload {
            user_id: payload.user_id,
            items: payload.order_items,
        },
    )
    .await
    {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Order placed successfully" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to place order" })),
        ),
    }
}

#[derive(Deserialize)]
struct SubmitReviewPayload {
    rating: i32,
    review: String,
}

fn rating_in_bounds(rating: i32) -> bool {
    (1..=5).contains(&rating)
}

async fn submit_review(
    Path(order_id): Path<i32>,
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<SubmitReviewPayload>,
) -> impl IntoResponse {
    if !rating_in_bounds(payload.rating) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Rating must be between 1 and 5" })),
        );
    }

    match repository::order::set_review(
        ctx.db_conn.clone(),
        order_id,
        payload.rating,
        payload.review,
    )
    .await
    {
        Ok(Some(order)) => (StatusCode::OK, Json(json!(order))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Order not found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to submit review" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", post(create_order))
        .route("/:order_id/review", post(submit_review))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(rating_in_bounds(1));
        assert!(rating_in_bounds(5));
        assert!(!rating_in_bounds(0));
        assert!(!rating_in_bounds(6));
        assert!(!rating_in_bounds(-3));
    }

    #[test]
    fn order_payload_accepts_overall_total_price() {
        let payload: CreateOrderPayload = serde_json::from_value(json!({
            "user_id": 1,
            "orderItems": [
                { "menu_item_id": 2, "quantity": 3, "total_price": "29.97" }
            ],
            "total_price": "29.97"
        }))
        .unwrap();

        assert_eq!(payload.user_id, 1);
        assert_eq!(payload.order_items.len(), 1);
        assert_eq!(payload.order_items[0].menu_item_id, 2);
        assert_eq!(payload.order_items[0].quantity, 3);
    }

    #[test]
    fn order_payload_accepts_empty_item_list() {
        let payload: CreateOrderPayload = serde_json::from_value(json!({
            "user_id": 7,
            "orderItems": []
        }))
        .unwrap();

        assert!(payload.order_items.is_empty());
    }
}
