//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` (reads .env). Safe to re-run: each section is
//! skipped when its table already has rows.

use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== agridash seed script ===");

    seed_users(&pool).await?;
    seed_products(&pool).await?;
    seed_sales(&pool).await?;
    seed_deliveries(&pool).await?;
    seed_inventory_logs(&pool).await?;
    seed_agricultural_data(&pool).await?;

    println!("\n=== Seed complete! ===");

    Ok(())
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] users already seeded");
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO roles (role_name) VALUES ('Manager'), ('Clerk'), ('Driver')",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO users (username, full_name, role_id) VALUES
            ('mrivera', 'Maria Rivera', 1),
            ('jsantos', 'Jun Santos', 2),
            ('dcruz',   'Dan Cruz',   3)",
    )
    .execute(pool)
    .await?;

    println!("[done] Created roles and users");
    Ok(())
}

async fn seed_products(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] products already seeded");
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO products (product_name, category, unit_price, quantity_in_stock) VALUES
            ('Rice',     'Grains',     42.50, 120),
            ('Corn',     'Grains',     30.00, 200),
            ('Tomatoes', 'Vegetables', 55.75, 8),
            ('Mangoes',  'Fruits',     90.00, 45),
            ('Eggplant', 'Vegetables', 48.25, 5)",
    )
    .execute(pool)
    .await?;

    println!("[done] Created products (two below the low-stock threshold)");
    Ok(())
}

async fn seed_sales(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales_transactions")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] sales already seeded");
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO sales_transactions (product_id, quantity_sold, total_amount, transaction_date) VALUES
            (1, 10, 425.00, now() - interval '6 days'),
            (2, 15, 450.00, now() - interval '5 days'),
            (1,  4, 170.00, now() - interval '4 days'),
            (4,  3, 270.00, now() - interval '2 days'),
            (3,  6, 334.50, now() - interval '1 day'),
            (5,  2,  96.50, now())",
    )
    .execute(pool)
    .await?;

    println!("[done] Created sales transactions");
    Ok(())
}

async fn seed_deliveries(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM delivery_records")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] deliveries already seeded");
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO delivery_records
            (transaction_id, delivery_status, delivery_date, recorded_by, delivery_personnel_id)
         VALUES
            (1, 'Delivered',  now() - interval '5 days', 2, 3),
            (2, 'In Transit', now() - interval '1 day',  2, 3),
            (4, 'Pending',    NULL,                      2, 3)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO delivery_routes (delivery_id, route_name, start_location, end_location) VALUES
            (1, 'North Loop',  'Warehouse A', 'San Mateo Market'),
            (2, 'Valley Run',  'Warehouse A', 'Cagayan Depot'),
            (3, 'Coast Route', 'Warehouse B', 'Iloilo Hub')",
    )
    .execute(pool)
    .await?;

    println!("[done] Created delivery records and routes");
    Ok(())
}

async fn seed_inventory_logs(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_logs")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] inventory logs already seeded");
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO inventory_logs (product_id, user_id, action_type, quantity, log_date) VALUES
            (1, 2, 'restock',  50, now() - interval '6 days'),
            (1, 2, 'sale',    -10, now() - interval '6 days'),
            (3, 2, 'sale',     -6, now() - interval '1 day'),
            (5, 1, 'spoilage', -3, now() - interval '12 hours'),
            (2, 2, 'restock', 100, now())",
    )
    .execute(pool)
    .await?;

    println!("[done] Created inventory logs");
    Ok(())
}

async fn seed_agricultural_data(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM agricultural_data")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] agricultural data already seeded");
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO agricultural_data
            (crop_type, quantity, unit, date, location, price, weather_condition, notes)
         VALUES
            ('Wheat', 120.0, 'kg', current_date - 20, 'North Field',  18.50, 'Sunny',  NULL),
            ('Wheat',  95.5, 'kg', current_date - 10, 'North Field',  19.25, 'Rainy',  'late harvest'),
            ('Rice',  300.0, 'kg', current_date - 15, 'Paddy East',   41.00, 'Sunny',  NULL),
            ('Rice',  280.0, 'kg', current_date - 5,  'Paddy East',   42.75, 'Cloudy', NULL),
            ('Corn',  150.0, 'kg', current_date - 8,  'South Field',  29.00, NULL,     'no station reading')",
    )
    .execute(pool)
    .await?;

    println!("[done] Created agricultural data");
    Ok(())
}
