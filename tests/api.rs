//! End-to-end tests against a running server. Start the app and a Postgres
//! instance first, then run with `cargo test -- --ignored`.

use reqwest::StatusCode;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8000/api";

fn unique_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

async fn sign_up_user(client: &reqwest::Client, suffix: u128) -> Value {
    let response = client
        .post(format!("{}/auth/signup", BASE_URL))
        .json(&json!({
            "username": format!("user{}", suffix),
            "email": format!("user{}@example.com", suffix),
            "password": "hunter2",
            "fullName": "Test User",
            "mobile": (suffix % 10_000_000_000) as i64,
            "addressLine1": "1 Test Street",
            "addressLine2": null,
            "city": "Testville",
            "state": "TS",
            "postalCode": "00001",
            "country": "Testland"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

async fn create_restaurant(client: &reqwest::Client) -> Value {
    let response = client
        .post(format!("{}/restaurants", BASE_URL))
        .json(&json!({
            "name": "Testaurant",
            "address": "2 Test Street",
            "image": null,
            "mobile": "0123456789"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

async fn create_menu_item(client: &reqwest::Client, restaurant_id: i64) -> Value {
    let response = client
        .post(format!("{}/restaurants/{}/menus", BASE_URL, restaurant_id))
        .json(&json!({
            "name": "Test Bowl",
            "description": "A bowl of tests",
            "price": "9.99"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

async fn order_history(client: &reqwest::Client, user_id: i64) -> Vec<Value> {
    let response = client
        .get(format!("{}/users/{}/orders", BASE_URL, user_id))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn signup_round_trips_fields() {
    let client = reqwest::Client::new();
    let suffix = unique_suffix();

    let user = sign_up_user(&client, suffix).await;

    assert_eq!(user["username"], format!("user{}", suffix));
    assert_eq!(user["email"], format!("user{}@example.com", suffix));
    assert_eq!(user["password"], "hunter2");
    assert_eq!(user["full_name"], "Test User");
    assert_eq!(user["city"], "Testville");
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn login_accepts_each_identifier_and_rejects_mismatch() {
    let client = reqwest::Client::new();
    let suffix = unique_suffix();

    let user = sign_up_user(&client, suffix).await;

    for identifier in [
        user["username"].as_str().unwrap().to_string(),
        user["email"].as_str().unwrap().to_string(),
        user["mobile_number"].as_i64().unwrap().to_string(),
    ] {
        let response = client
            .post(format!("{}/auth/login", BASE_URL))
            .json(&json!({ "identifier": identifier, "password": "hunter2" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let row: Value = response.json().await.unwrap();
        assert_eq!(row["id"], user["id"]);
    }

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "identifier": user["username"], "password": "wrong" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn forgot_password_overwrites_without_verification() {
    let client = reqwest::Client::new();
    let suffix = unique_suffix();

    let user = sign_up_user(&client, suffix).await;

    let response = client
        .post(format!("{}/auth/forgot-password", BASE_URL))
        .json(&json!({ "identifier": user["username"], "newPassword": "changed" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "identifier": user["username"], "password": "changed" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn order_with_invalid_item_leaves_no_rows() {
    let client = reqwest::Client::new();
    let suffix = unique_suffix();

    let user = sign_up_user(&client, suffix).await;
    let restaurant = create_restaurant(&client).await;
    let menu_item = create_menu_item(&client, restaurant["id"].as_i64().unwrap()).await;
    let user_id = user["id"].as_i64().unwrap();

    let response = client
        .post(format!("{}/orders", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "orderItems": [
                { "menu_item_id": menu_item["id"], "quantity": 2, "total_price": "19.98" },
                { "menu_item_id": 999_999_999, "quantity": 1, "total_price": "5.00" }
            ],
            "total_price": "24.98"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(order_history(&client, user_id).await.is_empty());
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn order_with_valid_items_creates_one_row_each() {
    let client = reqwest::Client::new();
    let suffix = unique_suffix();

    let user = sign_up_user(&client, suffix).await;
    let restaurant = create_restaurant(&client).await;
    let menu_item = create_menu_item(&client, restaurant["id"].as_i64().unwrap()).await;
    let user_id = user["id"].as_i64().unwrap();

    let response = client
        .post(format!("{}/orders", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "orderItems": [
                { "menu_item_id": menu_item["id"], "quantity": 1, "total_price": "9.99" },
                { "menu_item_id": menu_item["id"], "quantity": 3, "total_price": "29.97" }
            ]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let history = order_history(&client, user_id).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["restaurant_name"], "Testaurant");
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn empty_order_succeeds_with_zero_rows() {
    let client = reqwest::Client::new();
    let suffix = unique_suffix();

    let user = sign_up_user(&client, suffix).await;
    let user_id = user["id"].as_i64().unwrap();

    let response = client
        .post(format!("{}/orders", BASE_URL))
        .json(&json!({ "user_id": user_id, "orderItems": [] }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(order_history(&client, user_id).await.is_empty());
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn deleting_restaurant_orphans_menu_items() {
    let client = reqwest::Client::new();

    let restaurant = create_restaurant(&client).await;
    let restaurant_id = restaurant["id"].as_i64().unwrap();
    let menu_item = create_menu_item(&client, restaurant_id).await;

    let response = client
        .delete(format!("{}/restaurants/{}", BASE_URL, restaurant_id))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // The orphaned menu item is still reachable for updates.
    let response = client
        .put(format!("{}/menus/{}", BASE_URL, menu_item["id"]))
        .json(&json!({ "name": "Orphan Bowl", "description": null, "price": "1.00" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn unrated_restaurant_averages_to_zero() {
    let client = reqwest::Client::new();

    let restaurant = create_restaurant(&client).await;

    let response = client
        .get(format!("{}/restaurants/with-ratings", BASE_URL))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let rows: Vec<Value> = response.json().await.unwrap();

    let row = rows
        .iter()
        .find(|r| r["id"] == restaurant["id"])
        .expect("created restaurant missing from ratings listing");
    assert_eq!(row["average_rating"].as_str().map(str::trim), Some("0"));
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn review_on_missing_order_returns_not_found() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/orders/{}/review", BASE_URL, 999_999_999))
        .json(&json!({ "rating": 5, "review": "great" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn review_out_of_bounds_rating_is_rejected() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/orders/{}/review", BASE_URL, 1))
        .json(&json!({ "rating": 6, "review": "too good" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn submitted_review_shows_up_for_menu_item() {
    let client = reqwest::Client::new();
    let suffix = unique_suffix();

    let user = sign_up_user(&client, suffix).await;
    let restaurant = create_restaurant(&client).await;
    let menu_item = create_menu_item(&client, restaurant["id"].as_i64().unwrap()).await;
    let user_id = user["id"].as_i64().unwrap();

    client
        .post(format!("{}/orders", BASE_URL))
        .json(&json!({
            "user_id": user_id,
            "orderItems": [
                { "menu_item_id": menu_item["id"], "quantity": 1, "total_price": "9.99" }
            ]
        }))
        .send()
        .await
        .unwrap();

    let history = order_history(&client, user_id).await;
    let order_id = history[0]["id"].as_i64().unwrap();

    let response = client
        .post(format!("{}/orders/{}/review", BASE_URL, order_id))
        .json(&json!({ "rating": 4, "review": "solid bowl" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let order: Value = response.json().await.unwrap();
    assert_eq!(order["rating"], 4);
    assert_eq!(order["review"], "solid bowl");

    let response = client
        .get(format!("{}/menus/{}/reviews", BASE_URL, menu_item["id"]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let reviews: Vec<Value> = response.json().await.unwrap();
    assert!(reviews.iter().any(|r| r["review"] == "solid bowl"));
}
