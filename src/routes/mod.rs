pub mod products;

use axum::{routing::any, Router};
use http::Method;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::status::home;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", any(home))
        .merge(products::routes())
}

// Preflight OPTIONS requests are answered by this layer before any route
// logic runs.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn app(state: AppState) -> Router {
    create_router().layer(cors_layer()).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::database::DataSource;
    use crate::state::AppState;

    /// App wired to the mock fallback, as after a failed connect.
    fn mock_app() -> Router {
        app(AppState::new(DataSource::Unavailable))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_reports_mock_data_status() {
        let response = mock_app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["database"], "Using mock data");
        assert_eq!(
            value["data"]["endpoints"],
            "GET /api/products, GET /api/products/{id}"
        );
    }

    #[tokio::test]
    async fn root_answers_any_method() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = mock_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["success"], true);
    }

    #[tokio::test]
    async fn list_products_returns_mock_catalog() {
        let response = mock_app().oneshot(get("/api/products")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["success"], true);
        assert_eq!(value["count"], 5);

        let items = value["data"].as_array().unwrap();
        assert_eq!(items.len(), 5);
        let ids: Vec<i64> = items.iter().map(|p| p["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn single_product_has_name_and_no_count() {
        let response = mock_app().oneshot(get("/api/products/3")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["name"], "Coffee Maker");
        assert!(value.get("count").is_none());
        // Mock records carry no timestamps at all.
        assert!(value["data"].get("created_at").is_none());
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let response = mock_app().oneshot(get("/api/products/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let value = body_json(response).await;
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Product not found");
        assert!(value.get("data").is_none());
    }

    #[tokio::test]
    async fn malformed_id_is_rejected_before_lookup() {
        let response = mock_app().oneshot(get("/api/products/abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value = body_json(response).await;
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Invalid product ID");
    }

    #[tokio::test]
    async fn preflight_short_circuits_with_empty_body() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/products")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "GET")
            .body(Body::empty())
            .unwrap();
        let response = mock_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn cors_headers_present_on_regular_responses() {
        let request = Request::builder()
            .uri("/api/products")
            .header("origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = mock_app().oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn unsupported_method_gets_405_envelope() {
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/products/3")
            .body(Body::empty())
            .unwrap();
        let response = mock_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let value = body_json(response).await;
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Method not allowed");
    }
}
