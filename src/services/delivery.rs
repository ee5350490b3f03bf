//! Delivery queries: status breakdown, record history, route listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::UserRef;

/// Delivery counts per canonical status. All three keys are always
/// present, defaulting to 0; non-canonical status values are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStatusBreakdown {
    pub pending: i64,
    pub in_transit: i64,
    pub delivered: i64,
}

/// Full delivery record with the recorder and delivery-person joined in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecordDetail {
    pub delivery_id: i32,
    pub transaction_id: i32,
    pub delivery_status: String,
    pub delivery_date: Option<DateTime<Utc>>,
    pub recorded_by: Option<UserRef>,
    pub delivery_personnel: Option<UserRef>,
}

/// Route with its delivery record and the originating transaction date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRouteDetail {
    pub route_id: i32,
    pub route_name: Option<String>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub delivery: RouteDelivery,
}

/// Nested delivery record inside a route response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDelivery {
    pub delivery_id: i32,
    pub delivery_status: String,
    pub delivery_date: Option<DateTime<Utc>>,
    pub transaction_date: DateTime<Utc>,
}

/// Count deliveries per canonical status with conditional aggregation.
pub async fn status_breakdown(pool: &PgPool) -> Result<DeliveryStatusBreakdown, AppError> {
    let row = sqlx::query_as::<_, BreakdownRow>(
        r#"
        SELECT
            COALESCE(SUM(CASE WHEN delivery_status = 'Pending'    THEN 1 ELSE 0 END), 0) AS pending,
            COALESCE(SUM(CASE WHEN delivery_status = 'In Transit' THEN 1 ELSE 0 END), 0) AS in_transit,
            COALESCE(SUM(CASE WHEN delivery_status = 'Delivered'  THEN 1 ELSE 0 END), 0) AS delivered
        FROM delivery_records
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(DeliveryStatusBreakdown {
        pending: row.pending,
        in_transit: row.in_transit,
        delivered: row.delivered,
    })
}

/// Intermediate row for the status conditional aggregation.
#[derive(Debug, sqlx::FromRow)]
struct BreakdownRow {
    pending: i64,
    in_transit: i64,
    delivered: i64,
}

/// All delivery records, newest delivery date first, with recorder and
/// delivery-personnel identities.
pub async fn records(pool: &PgPool) -> Result<Vec<DeliveryRecordDetail>, AppError> {
    let rows = sqlx::query_as::<_, RecordRow>(
        r#"
        SELECT
            d.delivery_id,
            d.transaction_id,
            d.delivery_status,
            d.delivery_date,
            rec.username  AS recorder_username,
            rec.full_name AS recorder_full_name,
            per.username  AS personnel_username,
            per.full_name AS personnel_full_name
        FROM delivery_records d
        LEFT JOIN users rec ON rec.user_id = d.recorded_by
        LEFT JOIN users per ON per.user_id = d.delivery_personnel_id
        ORDER BY d.delivery_date DESC NULLS LAST
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(RecordRow::into_detail).collect())
}

/// Flat join row, nested into [`DeliveryRecordDetail`] after fetching.
#[derive(Debug, sqlx::FromRow)]
struct RecordRow {
    delivery_id: i32,
    transaction_id: i32,
    delivery_status: String,
    delivery_date: Option<DateTime<Utc>>,
    recorder_username: Option<String>,
    recorder_full_name: Option<String>,
    personnel_username: Option<String>,
    personnel_full_name: Option<String>,
}

impl RecordRow {
    fn into_detail(self) -> DeliveryRecordDetail {
        DeliveryRecordDetail {
            delivery_id: self.delivery_id,
            transaction_id: self.transaction_id,
            delivery_status: self.delivery_status,
            delivery_date: self.delivery_date,
            recorded_by: self.recorder_username.map(|username| UserRef {
                username,
                full_name: self.recorder_full_name,
            }),
            delivery_personnel: self.personnel_username.map(|username| UserRef {
                username,
                full_name: self.personnel_full_name,
            }),
        }
    }
}

/// All routes, newest route id first, each with its delivery record and
/// the originating transaction date.
pub async fn routes(pool: &PgPool) -> Result<Vec<DeliveryRouteDetail>, AppError> {
    let rows = sqlx::query_as::<_, RouteRow>(
        r#"
        SELECT
            rt.route_id,
            rt.route_name,
            rt.start_location,
            rt.end_location,
            d.delivery_id,
            d.delivery_status,
            d.delivery_date,
            s.transaction_date
        FROM delivery_routes rt
        INNER JOIN delivery_records d ON d.delivery_id = rt.delivery_id
        INNER JOIN sales_transactions s ON s.transaction_id = d.transaction_id
        ORDER BY rt.route_id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| DeliveryRouteDetail {
            route_id: r.route_id,
            route_name: r.route_name,
            start_location: r.start_location,
            end_location: r.end_location,
            delivery: RouteDelivery {
                delivery_id: r.delivery_id,
                delivery_status: r.delivery_status,
                delivery_date: r.delivery_date,
                transaction_date: r.transaction_date,
            },
        })
        .collect())
}

/// Flat join row for the route listing.
#[derive(Debug, sqlx::FromRow)]
struct RouteRow {
    route_id: i32,
    route_name: Option<String>,
    start_location: Option<String>,
    end_location: Option<String>,
    delivery_id: i32,
    delivery_status: String,
    delivery_date: Option<DateTime<Utc>>,
    transaction_date: DateTime<Utc>,
}
