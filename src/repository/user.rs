use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::database::DatabaseConnection;

#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub mobile_number: i64,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub created_at: NaiveDateTime,
}

pub struct CreateUserPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub mobile_number: i64,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create(db: DatabaseConnection, payload: CreateUserPayload) -> Result<User, Error> {
    match sqlx::query_as::<_, User>(
        "
        INSERT INTO users (
            username, email, password, full_name, mobile_number,
            address_line1, address_line2, city, state, postal_code, country
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        ",
    )
    .bind(payload.username)
    .bind(payload.email)
    .bind(payload.password)
    .bind(payload.full_name)
    .bind(payload.mobile_number)
    .bind(payload.address_line1)
    .bind(payload.address_line2)
    .bind(payload.city)
    .bind(payload.state)
    .bind(payload.postal_code)
    .bind(payload.country)
    .fetch_one(&db.pool)
    .await
    {
        Ok(user) => Ok(user),
        Err(err) => {
            tracing::error!("Error occurred while trying to create a user: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_by_id(db: DatabaseConnection, id: i32) -> Result<Option<User>, Error> {
    match sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&db.pool)
        .await
    {
        Ok(maybe_user) => Ok(maybe_user),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to fetch user with id {}: {}",
                id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

// The identifier matches username, email or mobile number interchangeably;
// mobile number is stored numeric and compared as text.
pub async fn find_by_credentials(
    db: DatabaseConnection,
    identifier: String,
    password: String,
) -> Result<Option<User>, Error> {
    match sqlx::query_as::<_, User>(
        "
        SELECT * FROM users
        WHERE (email = $1 OR username = $1 OR mobile_number::TEXT = $1)
            AND password = $2
        ",
    )
    .bind(identifier)
    .bind(password)
    .fetch_optional(&db.pool)
    .await
    {
        Ok(maybe_user) => Ok(maybe_user),
        Err(err) => {
            tracing::error!("Error occurred in find_by_credentials: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

// Overwrites the password for whoever the identifier resolves to. There is no
// token or old-password check, matching the public behavior of the endpoint.
pub async fn reset_password(
    db: DatabaseConnection,
    identifier: String,
    new_password: String,
) -> Result<Option<User>, Error> {
    match sqlx::query_as::<_, User>(
        "
        UPDATE users SET password = $2
        WHERE email = $1 OR username = $1
        RETURNING *
        ",
    )
    .bind(identifier)
    .bind(new_password)
    .fetch_optional(&db.pool)
    .await
    {
        Ok(maybe_user) => Ok(maybe_user),
        Err(err) => {
            tracing::error!("Error occurred while trying to reset password: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub struct UpdateUserPayload {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub mobile_number: Option<i64>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

pub async fn update_by_id(
    db: DatabaseConnection,
    id: i32,
    payload: UpdateUserPayload,
) -> Result<Option<User>, Error> {
    match sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            username = COALESCE($1, username),
            email = COALESCE($2, email),
            full_name = COALESCE($3, full_name),
            mobile_number = COALESCE($4, mobile_number),
            address_line1 = COALESCE($5, address_line1),
            address_line2 = COALESCE($6, address_line2),
            city = COALESCE($7, city),
            state = COALESCE($8, state),
            postal_code = COALESCE($9, postal_code),
            country = COALESCE($10, country)
        WHERE id = $11
        RETURNING *
        ",
    )
    .bind(payload.username)
    .bind(payload.email)
    .bind(payload.full_name)
    .bind(payload.mobile_number)
    .bind(payload.address_line1)
    .bind(payload.address_line2)
    .bind(payload.city)
    .bind(payload.state)
    .bind(payload.postal_code)
    .bind(payload.country)
    .bind(id)
    .fetch_optional(&db.pool)
    .await
    {
        Ok(maybe_user) => Ok(maybe_user),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to update user with id {}: {}",
                id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}
