//! Product catalog row. Written by an external path; read-only here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Threshold below which a product appears in the low-stock alert feed.
/// Fixed by contract, not configurable per request.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub category: Option<String>,
    pub unit_price: Option<Decimal>,
    pub quantity_in_stock: i32,
}
