// src/repository.rs
//
// Fallback-aware product reads. Which source serves a request is decided
// entirely by the DataSource state fixed at startup: a live pool is always
// queried, and the mock catalog only stands in when no connection was
// established. A query that fails against a live pool surfaces as a database
// error rather than silently degrading to mock data.
use crate::database::DataSource;
use crate::error::AppError;
use crate::models::product::Product;

/// Starter catalog: (name, description, price, quantity, category).
/// Shared by the seeding step and the mock fallback.
pub const STARTER_PRODUCTS: [(&str, &str, f64, i32, &str); 5] = [
    (
        "Laptop Pro 15",
        "High-performance laptop with 16GB RAM and 512GB SSD",
        1299.99,
        25,
        "Electronics",
    ),
    (
        "Wireless Headphones",
        "Noise-cancelling wireless headphones with 30h battery life",
        199.99,
        50,
        "Electronics",
    ),
    (
        "Coffee Maker",
        "Programmable coffee maker with 12-cup capacity",
        89.99,
        15,
        "Home & Kitchen",
    ),
    (
        "Running Shoes",
        "Lightweight running shoes with excellent cushioning",
        129.99,
        30,
        "Sports & Outdoors",
    ),
    (
        "Smartphone",
        "Latest smartphone with 128GB storage and triple camera",
        699.99,
        40,
        "Electronics",
    ),
];

/// Mock records carry ids 1..5 and no timestamps.
pub fn mock_products() -> Vec<Product> {
    STARTER_PRODUCTS
        .iter()
        .enumerate()
        .map(|(i, &(name, description, price, quantity, category))| Product {
            id: i as i64 + 1,
            name: name.to_string(),
            description: description.to_string(),
            price,
            quantity,
            category: category.to_string(),
            created_at: None,
            updated_at: None,
        })
        .collect()
}

pub async fn list_all(data_source: &DataSource) -> Result<Vec<Product>, AppError> {
    match data_source {
        DataSource::Unavailable => Ok(mock_products()),
        DataSource::Connected(pool) => {
            let products = sqlx::query_as::<_, Product>(
                "SELECT id, name, description,
                        price::FLOAT8 AS price,
                        quantity, category, created_at, updated_at
                 FROM products ORDER BY id",
            )
            .fetch_all(pool)
            .await?;
            Ok(products)
        }
    }
}

pub async fn get_by_id(data_source: &DataSource, id: i64) -> Result<Product, AppError> {
    match data_source {
        DataSource::Unavailable => mock_products()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Product not found")),
        DataSource::Connected(pool) => sqlx::query_as::<_, Product>(
            "SELECT id, name, description,
                    price::FLOAT8 AS price,
                    quantity, category, created_at, updated_at
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found")),
    }
}
