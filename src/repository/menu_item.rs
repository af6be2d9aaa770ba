use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::database::DatabaseConnection;

#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct MenuItem {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
}

#[derive(Serialize, FromRow, Clone, Debug)]
pub struct MenuItemReview {
    pub rating: i32,
    pub review: String,
    pub created_at: NaiveDateTime,
}

pub struct CreateMenuItemPayload {
    pub restaurant_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
}

pub struct UpdateMenuItemPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create(
    db: DatabaseConnection,
    payload: CreateMenuItemPayload,
) -> Result<MenuItem, Error> {
    match sqlx::query_as::<_, MenuItem>(
        "
        INSERT INTO menu_items (restaurant_id, name, description, price)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(payload.restaurant_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .fetch_one(&db.pool)
    .await
    {
        Ok(menu_item) => Ok(menu_item),
        Err(err) => {
            tracing::error!("Error occurred while trying to create a menu item: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_by_restaurant_id(
    db: DatabaseConnection,
    restaurant_id: i32,
) -> Result<Vec<MenuItem>, Error> {
    match sqlx::query_as::<_, MenuItem>(
        "SELECT * FROM menu_items WHERE restaurant_id = $1 ORDER BY id",
    )
    .bind(restaurant_id)
    .fetch_all(&db.pool)
    .await
    {
        Ok(menu_items) => Ok(menu_items),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to fetch menu items for restaurant {}: {}",
                restaurant_id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn update_by_id(
    db: DatabaseConnection,
    id: i32,
    payload: UpdateMenuItemPayload,
) -> Result<Option<MenuItem>, Error> {
    match sqlx::query_as::<_, MenuItem>(
        "
        UPDATE menu_items
        SET name = $1, description = $2, price = $3
        WHERE id = $4
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(id)
    .fetch_optional(&db.pool)
    .await
    {
        Ok(maybe_menu_item) => Ok(maybe_menu_item),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to update menu item with id {}: {}",
                id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn delete_by_id(db: DatabaseConnection, id: i32) -> Result<bool, Error> {
    match sqlx::query("DELETE FROM menu_items WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await
    {
        Ok(result) => Ok(result.rows_affected() > 0),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to delete menu item with id {}: {}",
                id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

// Only orders carrying both a rating and a review count as reviews.
pub async fn find_reviews_by_id(
    db: DatabaseConnection,
    id: i32,
) -> Result<Vec<MenuItemReview>, Error> {
    match sqlx::query_as::<_, MenuItemReview>(
        "
        SELECT rating, review, created_at
        FROM orders
        WHERE menu_item_id = $1
            AND rating IS NOT NULL
            AND review IS NOT NULL
        ORDER BY created_at DESC
        ",
    )
    .bind(id)
    .fetch_all(&db.pool)
    .await
    {
        Ok(reviews) => Ok(reviews),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to fetch reviews for menu item {}: {}",
                id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}
