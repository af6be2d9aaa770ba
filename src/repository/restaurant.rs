use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::database::DatabaseConnection;

#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub image_url: Option<String>,
    pub mobile: String,
}

#[derive(Serialize, FromRow, Clone, Debug)]
pub struct RestaurantWithRating {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub image_url: Option<String>,
    pub mobile: String,
    pub average_rating: BigDecimal,
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub address: String,
    pub image_url: Option<String>,
    pub mobile: String,
}

pub struct UpdateRestaurantPayload {
    pub name: String,
    pub address: String,
    pub image_url: Option<String>,
    pub mobile: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create(
    db: DatabaseConnection,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant, Error> {
    match sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (name, address, image_url, mobile)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.address)
    .bind(payload.image_url)
    .bind(payload.mobile)
    .fetch_one(&db.pool)
    .await
    {
        Ok(restaurant) => Ok(restaurant),
        Err(err) => {
            tracing::error!("Error occurred while trying to create a restaurant: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_all(db: DatabaseConnection) -> Result<Vec<Restaurant>, Error> {
    match sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants ORDER BY id")
        .fetch_all(&db.pool)
        .await
    {
        Ok(restaurants) => Ok(restaurants),
        Err(err) => {
            tracing::error!("Error occurred while trying to fetch restaurants: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_by_id(db: DatabaseConnection, id: i32) -> Result<Option<Restaurant>, Error> {
    match sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1")
        .bind(id)
        .fetch_optional(&db.pool)
        .await
    {
        Ok(maybe_restaurant) => Ok(maybe_restaurant),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to fetch restaurant with id {}: {}",
                id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

// Ratings live on order rows; a restaurant with no rated orders averages to 0
// rather than NULL.
pub async fn find_all_with_ratings(
    db: DatabaseConnection,
) -> Result<Vec<RestaurantWithRating>, Error> {
    match sqlx::query_as::<_, RestaurantWithRating>(
        "
        SELECT
            restaurants.*,
            COALESCE(AVG(orders.rating), 0) AS average_rating
        FROM restaurants
        LEFT JOIN menu_items ON menu_items.restaurant_id = restaurants.id
        LEFT JOIN orders ON orders.menu_item_id = menu_items.id
        GROUP BY restaurants.id
        ORDER BY restaurants.id
        ",
    )
    .fetch_all(&db.pool)
    .await
    {
        Ok(restaurants) => Ok(restaurants),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to fetch restaurants with ratings: {}",
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn update_by_id(
    db: DatabaseConnection,
    id: i32,
    payload: UpdateRestaurantPayload,
) -> Result<Option<Restaurant>, Error> {
    match sqlx::query_as::<_, Restaurant>(
        "
        UPDATE restaurants
        SET name = $1, address = $2, image_url = $3, mobile = $4
        WHERE id = $5
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.address)
    .bind(payload.image_url)
    .bind(payload.mobile)
    .bind(id)
    .fetch_optional(&db.pool)
    .await
    {
        Ok(maybe_restaurant) => Ok(maybe_restaurant),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to update restaurant with id {}: {}",
                id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

// Menu items are not cascaded; rows referencing the deleted restaurant are
// left in place.
pub async fn delete_by_id(db: DatabaseConnection, id: i32) -> Result<bool, Error> {
    match sqlx::query("DELETE FROM restaurants WHERE id = $1")
        .bind(id)
        .execute(&db.pool)
        .await
    {
        Ok(result) => Ok(result.rows_affected() > 0),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to delete restaurant with id {}: {}",
                id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}
