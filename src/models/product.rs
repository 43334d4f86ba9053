use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Catalog row. The timestamp columns are nullable in the schema, so they
/// decode through `Option` rather than failing the scan on NULL.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub category: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
