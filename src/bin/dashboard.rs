//! Terminal dashboard client — the one-shot consumer of the reporting API.
//!
//! Usage: `cargo run --bin dashboard` (set `DASHBOARD_API_URL` to point at a
//! non-local server).
//!
//! Mirrors the web dashboard's behavior: every endpoint is fetched once,
//! concurrently; each failure is caught and logged individually and collapses
//! into one generic banner, while everything that did load still renders.

use agridash::chart;
use agridash::models::product::Product;
use agridash::services::delivery::DeliveryStatusBreakdown;
use agridash::services::inventory::InventoryActivity;
use agridash::services::sales::{CategorySales, SalesTrendPoint, TopProduct};
use reqwest::Client;
use serde::de::DeserializeOwned;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let base_url =
        std::env::var("DASHBOARD_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = Client::new();

    // One fetch per endpoint, all in flight at once; no ordering between
    // them, a slow or failed fetch never blocks the others.
    let (trends, levels, status, top, categories, logs) = tokio::join!(
        fetch::<Vec<SalesTrendPoint>>(&client, &base_url, "/api/sales/trends"),
        fetch::<Vec<Product>>(&client, &base_url, "/api/inventory/levels"),
        fetch::<DeliveryStatusBreakdown>(&client, &base_url, "/api/deliveries/status"),
        fetch::<Vec<TopProduct>>(&client, &base_url, "/api/sales/top-products"),
        fetch::<Vec<CategorySales>>(&client, &base_url, "/api/sales/category-sales"),
        fetch::<Vec<InventoryActivity>>(&client, &base_url, "/api/inventory/logs"),
    );

    let mut banner: Option<&str> = None;
    let mut failed = |endpoint: &str, err: &anyhow::Error| {
        eprintln!("Error fetching dashboard data from {endpoint}: {err}");
        // First failing call wins; later failures only get logged.
        banner.get_or_insert("Failed to load dashboard data. Please try again later.");
    };

    println!("=== Agricultural Dashboard ===\n");

    match &trends {
        Ok(rows) => render_chart(&chart::sales_trends(rows)),
        Err(e) => failed("/api/sales/trends", e),
    }
    match &levels {
        Ok(rows) => render_chart(&chart::inventory_levels(rows)),
        Err(e) => failed("/api/inventory/levels", e),
    }
    match &status {
        Ok(breakdown) => render_chart(&chart::delivery_status(breakdown)),
        Err(e) => failed("/api/deliveries/status", e),
    }
    match &top {
        Ok(rows) => render_chart(&chart::top_products(rows)),
        Err(e) => failed("/api/sales/top-products", e),
    }
    match &categories {
        Ok(rows) => render_chart(&chart::category_sales(rows)),
        Err(e) => failed("/api/sales/category-sales", e),
    }
    match &logs {
        Ok(rows) => render_activity(rows),
        Err(e) => failed("/api/inventory/logs", e),
    }

    if let Some(message) = banner {
        println!("\n! {message}");
    }

    Ok(())
}

async fn fetch<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    path: &str,
) -> anyhow::Result<T> {
    let value = client
        .get(format!("{base_url}{path}"))
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await?;
    Ok(value)
}

fn render_chart(dataset: &chart::ChartDataset) {
    println!("-- {} --", dataset.label);
    for (label, value) in dataset.labels.iter().zip(&dataset.data) {
        println!("  {label:<20} {value:>10.2}");
    }
    println!();
}

/// Recent inventory activity table (latest 5 entries, like the web view).
fn render_activity(rows: &[InventoryActivity]) {
    println!("-- Recent Inventory Activity --");
    println!("  {:<12} {:<10} {:>8}  {}", "Product", "Action", "Qty", "Date");
    for log in rows.iter().take(5) {
        println!(
            "  {:<12} {:<10} {:>8}  {}",
            log.product_name,
            log.action_type,
            log.quantity,
            chart::format_date(log.log_date.date_naive()),
        );
    }
    println!();
}
