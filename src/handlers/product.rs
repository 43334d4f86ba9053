// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{error, instrument};

use crate::dtos::product::ProductResponse;
use crate::dtos::response::ApiResponse;
use crate::error::AppError;
use crate::repository;
use crate::state::AppState;

// GET /api/products - List all products
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Json<ApiResponse>, AppError> {
    match repository::list_all(&state.data_source).await {
        Ok(products) => {
            let response: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            Ok(Json(ApiResponse::product_list(
                "Products retrieved successfully",
                response,
            )))
        }
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e)
        }
    }
}

// GET /api/products/{id} - Get single product
//
// The id is parsed here so a malformed value never turns into a lookup.
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::validation("Product ID must be a number"))?;

    let product = repository::get_by_id(&state.data_source, id).await?;

    Ok(Json(ApiResponse::product(
        "Product retrieved successfully",
        ProductResponse::from(product),
    )))
}
