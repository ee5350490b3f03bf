//! Inventory reporting routes.

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::product::Product;
use crate::services::inventory::{self, InventoryActivity};
use crate::AppState;

/// GET /api/inventory/levels — all products with stock, by category.
pub async fn levels(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let rows = inventory::levels(&state.db).await?;
    Ok(Json(rows))
}

/// GET /api/inventory/logs — last 50 stock movements, newest first.
pub async fn logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryActivity>>, AppError> {
    let rows = inventory::logs(&state.db).await?;
    Ok(Json(rows))
}

/// GET /api/inventory/alerts — products below the low-stock threshold.
pub async fn alerts(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let rows = inventory::alerts(&state.db).await?;
    Ok(Json(rows))
}
