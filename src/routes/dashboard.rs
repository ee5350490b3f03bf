//! Dashboard routes: headline summary, growth metrics, crop analytics.

use axum::extract::{Query, State};
use axum::Json;

use crate::errors::AppError;
use crate::models::filters::CropFilter;
use crate::services::agricultural::{
    self, CropDistribution, CropTrendPoint, LocationProduction, PriceTrendPoint, WeatherImpact,
};
use crate::services::summary::{self, DashboardSummary, GrowthMetrics};
use crate::AppState;

/// GET /api/dashboard — static headline summary.
pub async fn summary() -> Json<DashboardSummary> {
    Json(summary::dashboard_summary())
}

/// GET /api/growth/metrics — static growth series.
pub async fn growth_metrics() -> Json<GrowthMetrics> {
    Json(summary::growth_metrics())
}

/// GET /api/dashboard/crop-trends — production over time.
pub async fn crop_trends(
    State(state): State<AppState>,
    Query(filter): Query<CropFilter>,
) -> Result<Json<Vec<CropTrendPoint>>, AppError> {
    let rows = agricultural::crop_trends(&state.db, &filter).await?;
    Ok(Json(rows))
}

/// GET /api/dashboard/price-trends — prices over time.
pub async fn price_trends(
    State(state): State<AppState>,
    Query(filter): Query<CropFilter>,
) -> Result<Json<Vec<PriceTrendPoint>>, AppError> {
    let rows = agricultural::price_trends(&state.db, &filter).await?;
    Ok(Json(rows))
}

/// GET /api/dashboard/crop-distribution — totals per crop type.
pub async fn crop_distribution(
    State(state): State<AppState>,
) -> Result<Json<Vec<CropDistribution>>, AppError> {
    let rows = agricultural::crop_distribution(&state.db).await?;
    Ok(Json(rows))
}

/// GET /api/dashboard/location-production — totals per location.
pub async fn location_production(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationProduction>>, AppError> {
    let rows = agricultural::location_production(&state.db).await?;
    Ok(Json(rows))
}

/// GET /api/dashboard/weather-impact — average yield per condition.
pub async fn weather_impact(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherImpact>>, AppError> {
    let rows = agricultural::weather_impact(&state.db).await?;
    Ok(Json(rows))
}
