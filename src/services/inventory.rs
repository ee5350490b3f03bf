//! Inventory queries: stock levels, recent activity, low-stock alerts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::product::{Product, LOW_STOCK_THRESHOLD};

/// One inventory log entry with the product and acting user joined in.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InventoryActivity {
    pub product_name: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub action_type: String,
    pub quantity: i32,
    pub log_date: DateTime<Utc>,
}

/// All products with current stock, ordered by category.
pub async fn levels(pool: &PgPool) -> Result<Vec<Product>, AppError> {
    let rows = sqlx::query_as::<_, Product>(
        r#"
        SELECT product_id, product_name, category, unit_price, quantity_in_stock
        FROM products
        ORDER BY category ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// The 50 most recent inventory log entries, newest first.
pub async fn logs(pool: &PgPool) -> Result<Vec<InventoryActivity>, AppError> {
    let rows = sqlx::query_as::<_, InventoryActivity>(
        r#"
        SELECT
            p.product_name,
            u.username,
            u.full_name,
            l.action_type,
            l.quantity,
            l.log_date
        FROM inventory_logs l
        INNER JOIN products p ON p.product_id = l.product_id
        LEFT JOIN users u ON u.user_id = l.user_id
        ORDER BY l.log_date DESC
        LIMIT 50
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Products whose stock has fallen below the alert threshold.
pub async fn alerts(pool: &PgPool) -> Result<Vec<Product>, AppError> {
    let rows = sqlx::query_as::<_, Product>(
        r#"
        SELECT product_id, product_name, category, unit_price, quantity_in_stock
        FROM products
        WHERE quantity_in_stock < $1
        "#,
    )
    .bind(LOW_STOCK_THRESHOLD)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
