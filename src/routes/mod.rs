//! Route definitions for the reporting API.

pub mod dashboard;
pub mod deliveries;
pub mod health;
pub mod inventory;
pub mod sales;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the full application router. Every reporting endpoint is a
/// stateless GET; the dashboard client is served from another origin,
/// hence the permissive CORS policy.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/api/dashboard", get(dashboard::summary))
        .route("/api/growth/metrics", get(dashboard::growth_metrics))
        .route("/api/sales/trends", get(sales::trends))
        .route("/api/sales/top-products", get(sales::top_products))
        .route("/api/sales/category-sales", get(sales::category_sales))
        .route("/api/sales/recent", get(sales::recent))
        .route("/api/inventory/levels", get(inventory::levels))
        .route("/api/inventory/logs", get(inventory::logs))
        .route("/api/inventory/alerts", get(inventory::alerts))
        .route("/api/deliveries/status", get(deliveries::status))
        .route("/api/deliveries/records", get(deliveries::records))
        .route("/api/deliveries/routes", get(deliveries::routes))
        .route("/api/dashboard/crop-trends", get(dashboard::crop_trends))
        .route("/api/dashboard/price-trends", get(dashboard::price_trends))
        .route(
            "/api/dashboard/crop-distribution",
            get(dashboard::crop_distribution),
        )
        .route(
            "/api/dashboard/location-production",
            get(dashboard::location_production),
        )
        .route(
            "/api/dashboard/weather-impact",
            get(dashboard::weather_impact),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
