use axum::{routing::get, Router};

use crate::handlers::product::{get_product, get_products};
use crate::handlers::status::method_not_allowed;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(get_products).fallback(method_not_allowed))
        .route(
            "/api/products/{id}",
            get(get_product).fallback(method_not_allowed),
        )
}
