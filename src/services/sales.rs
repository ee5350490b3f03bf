//! Sales aggregation queries: daily trends, top products, category totals.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::filters::DateRange;

/// One calendar day of sales activity.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SalesTrendPoint {
    pub date: NaiveDate,
    pub total_sales: Decimal,
    pub transaction_count: i64,
}

/// Product ranked by lifetime revenue.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: i32,
    pub product_name: String,
    pub category: Option<String>,
    pub total_quantity: i64,
    pub total_revenue: Decimal,
}

/// Sales totals for one product category.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: Option<String>,
    pub total_sales: Decimal,
    pub transaction_count: i64,
}

/// Recent transaction with the product name joined in.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecentSale {
    pub transaction_id: i32,
    pub product_name: String,
    pub quantity_sold: i32,
    pub total_amount: Decimal,
    pub transaction_date: DateTime<Utc>,
}

/// Sales grouped by calendar date, ascending. The date-range filter is
/// inclusive on both ends; an absent bound leaves that side open.
pub async fn trends(pool: &PgPool, range: &DateRange) -> Result<Vec<SalesTrendPoint>, AppError> {
    let mut conditions: Vec<String> = Vec::new();
    let mut param_index = 0u32;

    if range.start_date.is_some() {
        param_index += 1;
        conditions.push(format!("transaction_date::date >= ${param_index}"));
    }
    if range.end_date.is_some() {
        param_index += 1;
        conditions.push(format!("transaction_date::date <= ${param_index}"));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    let sql = format!(
        "SELECT transaction_date::date AS date, \
                SUM(total_amount) AS total_sales, \
                COUNT(transaction_id) AS transaction_count \
         FROM sales_transactions {where_clause} \
         GROUP BY transaction_date::date \
         ORDER BY date ASC"
    );

    let mut query = sqlx::query_as::<_, SalesTrendPoint>(&sql);
    if let Some(start) = range.start_date {
        query = query.bind(start);
    }
    if let Some(end) = range.end_date {
        query = query.bind(end);
    }

    Ok(query.fetch_all(pool).await?)
}

/// Top 10 products by revenue, descending. Revenue ties keep the
/// underlying row order.
pub async fn top_products(pool: &PgPool) -> Result<Vec<TopProduct>, AppError> {
    let rows = sqlx::query_as::<_, TopProduct>(
        r#"
        SELECT
            p.product_id,
            p.product_name,
            p.category,
            SUM(s.quantity_sold) AS total_quantity,
            SUM(s.total_amount) AS total_revenue
        FROM sales_transactions s
        INNER JOIN products p ON p.product_id = s.product_id
        GROUP BY p.product_id, p.product_name, p.category
        ORDER BY SUM(s.total_amount) DESC
        LIMIT 10
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Sales totals grouped by product category.
pub async fn category_sales(pool: &PgPool) -> Result<Vec<CategorySales>, AppError> {
    let rows = sqlx::query_as::<_, CategorySales>(
        r#"
        SELECT
            p.category,
            SUM(s.total_amount) AS total_sales,
            COUNT(s.transaction_id) AS transaction_count
        FROM sales_transactions s
        INNER JOIN products p ON p.product_id = s.product_id
        GROUP BY p.category
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// The 10 most recent transactions, newest first.
pub async fn recent(pool: &PgPool) -> Result<Vec<RecentSale>, AppError> {
    let rows = sqlx::query_as::<_, RecentSale>(
        r#"
        SELECT
            s.transaction_id,
            p.product_name,
            s.quantity_sold,
            s.total_amount,
            s.transaction_date
        FROM sales_transactions s
        INNER JOIN products p ON p.product_id = s.product_id
        ORDER BY s.transaction_date DESC
        LIMIT 10
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
