use crate::repository;
use crate::types::Context;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{
    extract::{Json, Path, State},
    routing::{post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpPayload {
    username: String,
    email: String,
    password: String,
    full_name: String,
    mobile: i64,
    address_line1: String,
    address_line2: Option<String>,
    city: String,
    state: String,
    postal_code: String,
    country: String,
}

async fn sign_up(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<SignUpPayload>,
) -> impl IntoResponse {
    match repository::user::create(
        ctx.db_conn.clone(),
        repository::user::CreateUserPayload {
            username: payload.username,
            email: payload.email,
            password: payload.password,
            full_name: payload.full_name,
            mobile_number: payload.mobile,
            address_line1: payload.address_line1,
            address_line2: payload.address_line2,
            city: payload.city,
            state: payload.state,
            postal_code: payload.postal_code,
            country: payload.country,
        },
    )
    .await
    {
        Ok(user) => (StatusCode::OK, Json(json!(user))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to sign up" })),
        ),
    }
}

#[derive(Deserialize)]
struct LoginPayload {
    identifier: String,
    password: String,
}

async fn login(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<LoginPayload>,
) -> impl IntoResponse {
    match repository::user::find_by_credentials(
        ctx.db_conn.clone(),
        payload.identifier,
        payload.password,
    )
    .await
    {
        Ok(Some(user)) => (StatusCode::OK, Json(json!(user))),
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to log in" })),
        ),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForgotPasswordPayload {
    identifier: String,
    new_password: String,
}

async fn forgot_password(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<ForgotPasswordPayload>,
) -> impl IntoResponse {
    match repository::user::reset_password(
        ctx.db_conn.clone(),
        payload.identifier,
        payload.new_password,
    )
    .await
    {
        Ok(Some(_)) => (
            StatusCode::OK,
            Json(json!({ "message": "Password updated successfully" })),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to update password" })),
        ),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfilePayload {
    username: Option<String>,
    email: Option<String>,
    full_name: Option<String>,
    mobile: Option<i64>,
    address_line1: Option<String>,
    address_line2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

async fn update_profile(
    Path(id): Path<i32>,
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<UpdateProfilePayload>,
) -> impl IntoResponse {
    match repository::user::update_by_id(
        ctx.db_conn.clone(),
        id,
        repository::user::UpdateUserPayload {
            username: payload.username,
            email: payload.email,
            full_name: payload.full_name,
            mobile_number: payload.mobile,
            address_line1: payload.address_line1,
            address_line2: payload.address_line2,
            city: payload.city,
            state: payload.state,
            postal_code: payload.postal_code,
            country: payload.country,
        },
    )
    .await
    {
        Ok(Some(user)) => (StatusCode::OK, Json(json!(user))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to update profile" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", post(login))
        .route("/forgot-password", post(forgot_password))
        .route("/profile/:id", put(update_profile))
}
