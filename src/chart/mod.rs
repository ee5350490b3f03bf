//! Pure reshaping of reporting rows into chart-library datasets.
//!
//! The dashboard client renders categorical charts: a labels array plus one
//! numeric data array per series. Everything here is a side-effect-free
//! transform of already-fetched rows.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;

use crate::models::delivery::DeliveryStatus;
use crate::models::product::Product;
use crate::services::delivery::DeliveryStatusBreakdown;
use crate::services::sales::{CategorySales, SalesTrendPoint, TopProduct};

/// Categorical chart dataset: parallel labels and values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Format a date as `M/D/YYYY`, without zero padding.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Daily sales line chart.
pub fn sales_trends(rows: &[SalesTrendPoint]) -> ChartDataset {
    ChartDataset {
        label: "Daily Sales".to_string(),
        labels: rows.iter().map(|r| format_date(r.date)).collect(),
        data: rows
            .iter()
            .map(|r| r.total_sales.to_f64().unwrap_or(0.0))
            .collect(),
    }
}

/// Stock level bar chart.
pub fn inventory_levels(products: &[Product]) -> ChartDataset {
    ChartDataset {
        label: "Stock Levels".to_string(),
        labels: products.iter().map(|p| p.product_name.clone()).collect(),
        data: products
            .iter()
            .map(|p| f64::from(p.quantity_in_stock))
            .collect(),
    }
}

/// Top-products revenue bar chart.
pub fn top_products(rows: &[TopProduct]) -> ChartDataset {
    ChartDataset {
        label: "Revenue".to_string(),
        labels: rows.iter().map(|r| r.product_name.clone()).collect(),
        data: rows
            .iter()
            .map(|r| r.total_revenue.to_f64().unwrap_or(0.0))
            .collect(),
    }
}

/// Category sales pie chart.
pub fn category_sales(rows: &[CategorySales]) -> ChartDataset {
    ChartDataset {
        label: "Sales by Category".to_string(),
        labels: rows
            .iter()
            .map(|r| r.category.clone().unwrap_or_default())
            .collect(),
        data: rows
            .iter()
            .map(|r| r.total_sales.to_f64().unwrap_or(0.0))
            .collect(),
    }
}

/// Delivery status doughnut: label order is fixed to the canonical
/// statuses, absent ones showing as 0.
pub fn delivery_status(breakdown: &DeliveryStatusBreakdown) -> ChartDataset {
    ChartDataset {
        label: "Delivery Status".to_string(),
        labels: DeliveryStatus::CANONICAL
            .iter()
            .map(|s| s.as_str().to_string())
            .collect(),
        data: vec![
            breakdown.pending as f64,
            breakdown.in_transit as f64,
            breakdown.delivered as f64,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn formats_dates_without_zero_padding() {
        assert_eq!(format_date(d("2024-01-02")), "1/2/2024");
        assert_eq!(format_date(d("2024-11-20")), "11/20/2024");
    }

    #[test]
    fn sales_trend_dataset() {
        let rows = vec![
            SalesTrendPoint {
                date: d("2024-01-01"),
                total_sales: Decimal::new(10000, 2),
                transaction_count: 1,
            },
            SalesTrendPoint {
                date: d("2024-01-02"),
                total_sales: Decimal::new(15000, 2),
                transaction_count: 2,
            },
        ];
        let chart = sales_trends(&rows);
        assert_eq!(chart.labels, vec!["1/1/2024", "1/2/2024"]);
        assert_eq!(chart.data, vec![100.0, 150.0]);
    }

    #[test]
    fn delivery_doughnut_always_has_three_slices() {
        let chart = delivery_status(&DeliveryStatusBreakdown {
            pending: 0,
            in_transit: 0,
            delivered: 0,
        });
        assert_eq!(chart.labels, vec!["Pending", "In Transit", "Delivered"]);
        assert_eq!(chart.data, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn uncategorized_products_get_empty_label() {
        let rows = vec![CategorySales {
            category: None,
            total_sales: Decimal::new(500, 0),
            transaction_count: 3,
        }];
        let chart = category_sales(&rows);
        assert_eq!(chart.labels, vec![""]);
        assert_eq!(chart.data, vec![500.0]);
    }
}
