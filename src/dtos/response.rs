// src/dtos/response.rs
use serde::Serialize;

use crate::dtos::product::ProductResponse;

/// Payload of the root status route.
#[derive(Debug, Serialize)]
pub struct StatusInfo {
    pub database: String,
    pub endpoints: String,
}

/// The concrete payload shapes the API emits. Keeping this closed keeps
/// serialization exhaustive instead of funnelling through an open-ended
/// JSON value.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Status(StatusInfo),
    Products(Vec<ProductResponse>),
    Product(ProductResponse),
}

/// Uniform reply wrapper. Failure replies never carry data, and only
/// collection replies carry a count; the constructors below are the only way
/// these fields get populated.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn status(message: impl Into<String>, info: StatusInfo) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(ResponseData::Status(info)),
            count: None,
            error: None,
        }
    }

    pub fn product_list(message: impl Into<String>, products: Vec<ProductResponse>) -> Self {
        let count = products.len();
        Self {
            success: true,
            message: message.into(),
            data: Some(ResponseData::Products(products)),
            count: Some(count),
            error: None,
        }
    }

    pub fn product(message: impl Into<String>, product: ProductResponse) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(ResponseData::Product(product)),
            count: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            count: None,
            error,
        }
    }
}
