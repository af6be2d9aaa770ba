use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

pub async fn connect(database_url: &str) -> DatabaseConnection {
    DatabaseConnection {
        pool: PgPoolOptions::new()
            .max_connections(4)
            .connect(database_url)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("{:}", e);
                panic!("Error connecting to database {}", database_url)
            }),
    }
}

// Idempotent startup DDL. The schema is small enough that we bootstrap it in
// place instead of carrying migration tooling.
//
// menu_items.restaurant_id intentionally carries no foreign key: deleting a
// restaurant leaves its menu items behind.
const SETUP_STATEMENTS: &[&str] = &[
    "CREATE SCHEMA IF NOT EXISTS food_delivery",
    "
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username VARCHAR NOT NULL UNIQUE,
        email VARCHAR NOT NULL UNIQUE,
        password VARCHAR NOT NULL,
        full_name VARCHAR NOT NULL,
        mobile_number BIGINT NOT NULL UNIQUE,
        address_line1 VARCHAR NOT NULL,
        address_line2 VARCHAR,
        city VARCHAR NOT NULL,
        state VARCHAR NOT NULL,
        postal_code VARCHAR NOT NULL,
        country VARCHAR NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT NOW()
    )
    ",
    "
    CREATE TABLE IF NOT EXISTS restaurants (
        id SERIAL PRIMARY KEY,
        name VARCHAR NOT NULL,
        address VARCHAR NOT NULL,
        image_url VARCHAR,
        mobile VARCHAR NOT NULL
    )
    ",
    "
    CREATE TABLE IF NOT EXISTS menu_items (
        id SERIAL PRIMARY KEY,
        restaurant_id INT NOT NULL,
        name VARCHAR NOT NULL,
        description VARCHAR,
        price NUMERIC NOT NULL
    )
    ",
    "
    CREATE TABLE IF NOT EXISTS orders (
        id SERIAL PRIMARY KEY,
        user_id INT NOT NULL REFERENCES users (id),
        menu_item_id INT NOT NULL REFERENCES menu_items (id),
        quantity INT NOT NULL,
        total_price NUMERIC NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT NOW(),
        rating INT,
        review TEXT
    )
    ",
];

pub async fn setup(db_conn: DatabaseConnection) {
    for statement in SETUP_STATEMENTS {
        match sqlx::query(statement).execute(&db_conn.pool).await {
            Ok(_) => (),
            Err(err) => {
                tracing::error!("{}", err);
                panic!("Failed to set up database schema");
            }
        }
    }
}
