// src/database.rs
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::DbConfig;
use crate::repository::STARTER_PRODUCTS;

/// Outcome of the startup connection attempt. Decided once, never revisited:
/// handlers read whichever state was established before the server began
/// listening.
#[derive(Clone)]
pub enum DataSource {
    Connected(PgPool),
    Unavailable,
}

impl DataSource {
    pub fn status_label(&self) -> &'static str {
        match self {
            DataSource::Connected(_) => "PostgreSQL connected",
            DataSource::Unavailable => "Using mock data",
        }
    }
}

/// Open and ping the database. Any failure degrades to
/// [`DataSource::Unavailable`] instead of aborting startup.
pub async fn connect(config: &DbConfig) -> DataSource {
    info!(
        "Connecting to database: {}@{}:{}/{}",
        config.user, config.host, config.port, config.name
    );

    let pool = match PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.connection_url())
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            warn!(error = %e, "Error opening database, continuing without database connection");
            return DataSource::Unavailable;
        }
    };

    if let Err(e) = sqlx::query("SELECT 1").execute(&pool).await {
        warn!(error = %e, "Error pinging database, continuing without database connection");
        return DataSource::Unavailable;
    }

    info!("Successfully connected to PostgreSQL database");
    DataSource::Connected(pool)
}

/// Ensure the products table exists and holds the starter catalog.
/// Inserts only when the table is empty, so repeated startups never
/// duplicate rows.
pub async fn seed_products(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            description TEXT,
            price NUMERIC(10,2) NOT NULL,
            quantity INT DEFAULT 0,
            category VARCHAR(255),
            created_at TIMESTAMPTZ DEFAULT NOW(),
            updated_at TIMESTAMPTZ DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        info!("Products already exist in database");
        return Ok(());
    }

    for (name, description, price, quantity, category) in STARTER_PRODUCTS {
        sqlx::query(
            "INSERT INTO products (name, description, price, quantity, category)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(quantity)
        .bind(category)
        .execute(pool)
        .await?;
    }

    info!("Sample products inserted successfully");
    Ok(())
}
