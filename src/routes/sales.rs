//! Sales reporting routes.

use axum::extract::{Query, State};
use axum::Json;

use crate::errors::AppError;
use crate::models::filters::DateRange;
use crate::services::sales::{self, CategorySales, RecentSale, SalesTrendPoint, TopProduct};
use crate::AppState;

/// GET /api/sales/trends — daily sales, optional inclusive date range.
pub async fn trends(
    State(state): State<AppState>,
    Query(range): Query<DateRange>,
) -> Result<Json<Vec<SalesTrendPoint>>, AppError> {
    let rows = sales::trends(&state.db, &range).await?;
    Ok(Json(rows))
}

/// GET /api/sales/top-products — top 10 products by revenue.
pub async fn top_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopProduct>>, AppError> {
    let rows = sales::top_products(&state.db).await?;
    Ok(Json(rows))
}

/// GET /api/sales/category-sales — sales totals per category.
pub async fn category_sales(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategorySales>>, AppError> {
    let rows = sales::category_sales(&state.db).await?;
    Ok(Json(rows))
}

/// GET /api/sales/recent — last 10 transactions.
pub async fn recent(State(state): State<AppState>) -> Result<Json<Vec<RecentSale>>, AppError> {
    let rows = sales::recent(&state.db).await?;
    Ok(Json(rows))
}
