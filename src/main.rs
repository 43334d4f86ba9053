// src/main.rs
mod config;
mod database;
mod dtos;
mod error;
mod handlers;
mod models;
mod repository;
mod routes;
mod state;

use dotenvy::dotenv;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing_subscriber::fmt::init as tracing_init;

use crate::database::DataSource;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    // Bootstrap the data source; an unreachable database is not fatal
    let db_config = config::DbConfig::from_env();
    let data_source = database::connect(&db_config).await;

    if let DataSource::Connected(pool) = &data_source {
        if let Err(e) = database::seed_products(pool).await {
            tracing::warn!(error = %e, "Failed to seed products table");
        }
    }

    // Build application
    let app_state = state::AppState::new(data_source);
    let app = routes::app(app_state);

    // Start server; a bind failure is the only fatal condition
    let host_str = config::env_or("HOST", "127.0.0.1");
    let host: IpAddr = host_str.parse().unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
    let port = config::env_or("PORT", "8080").parse::<u16>().unwrap_or(8080);
    let addr = SocketAddr::from((host, port));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server running on http://{}", addr);
            listener
        }
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind address");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
    }
}
