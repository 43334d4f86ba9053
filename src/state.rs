// src/state.rs
use crate::database::DataSource;

/// Shared application state. The data source is fixed before the server
/// starts listening and is read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub data_source: DataSource,
}

impl AppState {
    pub fn new(data_source: DataSource) -> Self {
        Self { data_source }
    }
}
