//! Delivery reporting routes.

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::services::delivery::{
    self, DeliveryRecordDetail, DeliveryRouteDetail, DeliveryStatusBreakdown,
};
use crate::AppState;

/// GET /api/deliveries/status — counts per canonical status.
pub async fn status(
    State(state): State<AppState>,
) -> Result<Json<DeliveryStatusBreakdown>, AppError> {
    let breakdown = delivery::status_breakdown(&state.db).await?;
    Ok(Json(breakdown))
}

/// GET /api/deliveries/records — delivery history with joined identities.
pub async fn records(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeliveryRecordDetail>>, AppError> {
    let rows = delivery::records(&state.db).await?;
    Ok(Json(rows))
}

/// GET /api/deliveries/routes — routes with nested delivery data.
pub async fn routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeliveryRouteDetail>>, AppError> {
    let rows = delivery::routes(&state.db).await?;
    Ok(Json(rows))
}
