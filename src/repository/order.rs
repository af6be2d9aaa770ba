use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::database::DatabaseConnection;

#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub total_price: BigDecimal,
    pub created_at: NaiveDateTime,
    pub rating: Option<i32>,
    pub review: Option<String>,
}

#[derive(Serialize, FromRow, Clone, Debug)]
pub struct OrderHistoryEntry {
    pub id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub total_price: BigDecimal,
    pub created_at: NaiveDateTime,
    pub rating: Option<i32>,
    pub review: Option<String>,
    pub menu_item_name: String,
    pub menu_item_price: BigDecimal,
    pub restaurant_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OrderLineItem {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub total_price: BigDecimal,
}

pub struct CreateOrderPayload {
    pub user_id: i32,
    pub items: Vec<OrderLineItem>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

// Inserts one order row per line item inside a single transaction: either
// every row commits or none do. An empty line-item list commits trivially.
//
// total_price is taken from the caller as-is; nothing recomputes it from the
// stored menu price.
pub async fn create(db: DatabaseConnection, payload: CreateOrderPayload) -> Result<u64, Error> {
    let mut tx = match db.pool.begin().await {
        Ok(tx) => tx,
        Err(err) => {
            tracing::error!("Error occurred while trying to open a transaction: {}", err);
            return Err(Error::UnexpectedError);
        }
    };

    let mut inserted = 0u64;

    for item in payload.items {
        let res = sqlx::query(
            "
            INSERT INTO orders (user_id, menu_item_id, quantity, total_price)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(payload.user_id)
        .bind(item.menu_item_id)
        .bind(item.quantity)
        .bind(item.total_price)
        .execute(&mut *tx)
        .await;

        match res {
            Ok(_) => inserted += 1,
            Err(err) => {
                tracing::error!(
                    "Error occurred while trying to insert order line item: {}",
                    err
                );
                if let Err(err) = tx.rollback().await {
                    tracing::error!("Error occurred while rolling back order: {}", err);
                }
                return Err(Error::UnexpectedError);
            }
        }
    }

    match tx.commit().await {
        Ok(_) => Ok(inserted),
        Err(err) => {
            tracing::error!("Error occurred while trying to commit order: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_history_by_user_id(
    db: DatabaseConnection,
    user_id: i32,
) -> Result<Vec<OrderHistoryEntry>, Error> {
    match sqlx::query_as::<_, OrderHistoryEntry>(
        "
        SELECT
            orders.id,
            orders.menu_item_id,
            orders.quantity,
            orders.total_price,
            orders.created_at,
            orders.rating,
            orders.review,
            menu_items.name AS menu_item_name,
            menu_items.price AS menu_item_price,
            restaurants.name AS restaurant_name
        FROM orders
        JOIN menu_items ON orders.menu_item_id = menu_items.id
        JOIN restaurants ON menu_items.restaurant_id = restaurants.id
        WHERE orders.user_id = $1
        ORDER BY orders.created_at DESC
        ",
    )
    .bind(user_id)
    .fetch_all(&db.pool)
    .await
    {
        Ok(entries) => Ok(entries),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to fetch order history for user {}: {}",
                user_id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

// Overwrites any previous rating/review on the order.
pub async fn set_review(
    db: DatabaseConnection,
    id: i32,
    rating: i32,
    review: String,
) -> Result<Option<Order>, Error> {
    match sqlx::query_as::<_, Order>(
        "
        UPDATE orders
        SET rating = $2, review = $3
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(rating)
    .bind(review)
    .fetch_optional(&db.pool)
    .await
    {
        Ok(maybe_order) => Ok(maybe_order),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to review order with id {}: {}",
                id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}
