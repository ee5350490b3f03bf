//! Crop analytics over the standalone agricultural_data records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::filters::CropFilter;

/// One production measurement in a crop trend series.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CropTrendPoint {
    pub date: NaiveDate,
    pub quantity: f64,
    pub crop_type: String,
}

/// One price observation in a price trend series.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PriceTrendPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub crop_type: String,
}

/// Total quantity produced per crop type.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CropDistribution {
    pub crop_type: String,
    pub total_quantity: f64,
}

/// Total quantity produced per location.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LocationProduction {
    pub location: String,
    pub total_quantity: f64,
}

/// Average yield per recorded weather condition. Records without a
/// condition form their own NULL group.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WeatherImpact {
    pub weather_condition: Option<String>,
    pub average_quantity: f64,
    pub count: i64,
}

/// Crop production over time, ascending by date, optionally filtered by
/// inclusive date range and exact crop type.
pub async fn crop_trends(
    pool: &PgPool,
    filter: &CropFilter,
) -> Result<Vec<CropTrendPoint>, AppError> {
    let sql = format!(
        "SELECT date, quantity, crop_type FROM agricultural_data {} ORDER BY date ASC",
        where_clause(filter)
    );

    let mut query = sqlx::query_as::<_, CropTrendPoint>(&sql);
    if let Some(start) = filter.start_date {
        query = query.bind(start);
    }
    if let Some(end) = filter.end_date {
        query = query.bind(end);
    }
    if let Some(ref crop) = filter.crop_type {
        query = query.bind(crop);
    }

    Ok(query.fetch_all(pool).await?)
}

/// Crop prices over time, same filtering as [`crop_trends`].
pub async fn price_trends(
    pool: &PgPool,
    filter: &CropFilter,
) -> Result<Vec<PriceTrendPoint>, AppError> {
    let sql = format!(
        "SELECT date, price, crop_type FROM agricultural_data {} ORDER BY date ASC",
        where_clause(filter)
    );

    let mut query = sqlx::query_as::<_, PriceTrendPoint>(&sql);
    if let Some(start) = filter.start_date {
        query = query.bind(start);
    }
    if let Some(end) = filter.end_date {
        query = query.bind(end);
    }
    if let Some(ref crop) = filter.crop_type {
        query = query.bind(crop);
    }

    Ok(query.fetch_all(pool).await?)
}

/// Build the WHERE clause for the trend queries; condition order matches
/// the bind order in the callers.
fn where_clause(filter: &CropFilter) -> String {
    let mut conditions: Vec<String> = Vec::new();
    let mut param_index = 0u32;

    if filter.start_date.is_some() {
        param_index += 1;
        conditions.push(format!("date >= ${param_index}"));
    }
    if filter.end_date.is_some() {
        param_index += 1;
        conditions.push(format!("date <= ${param_index}"));
    }
    if filter.crop_type.is_some() {
        param_index += 1;
        conditions.push(format!("crop_type = ${param_index}"));
    }

    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

/// Total quantity grouped by crop type.
pub async fn crop_distribution(pool: &PgPool) -> Result<Vec<CropDistribution>, AppError> {
    let rows = sqlx::query_as::<_, CropDistribution>(
        r#"
        SELECT crop_type, SUM(quantity) AS total_quantity
        FROM agricultural_data
        GROUP BY crop_type
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Total quantity grouped by location.
pub async fn location_production(pool: &PgPool) -> Result<Vec<LocationProduction>, AppError> {
    let rows = sqlx::query_as::<_, LocationProduction>(
        r#"
        SELECT location, SUM(quantity) AS total_quantity
        FROM agricultural_data
        GROUP BY location
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Average quantity and sample count grouped by weather condition.
pub async fn weather_impact(pool: &PgPool) -> Result<Vec<WeatherImpact>, AppError> {
    let rows = sqlx::query_as::<_, WeatherImpact>(
        r#"
        SELECT weather_condition, AVG(quantity) AS average_quantity, COUNT(id) AS count
        FROM agricultural_data
        GROUP BY weather_condition
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_means_no_where_clause() {
        assert_eq!(where_clause(&CropFilter::default()), "");
    }

    #[test]
    fn all_filters_bind_in_order() {
        let filter = CropFilter {
            start_date: Some("2024-03-01".parse().unwrap()),
            end_date: Some("2024-03-10".parse().unwrap()),
            crop_type: Some("Wheat".to_string()),
        };
        assert_eq!(
            where_clause(&filter),
            "WHERE date >= $1 AND date <= $2 AND crop_type = $3"
        );
    }

    #[test]
    fn crop_type_alone_is_first_param() {
        let filter = CropFilter {
            crop_type: Some("Rice".to_string()),
            ..Default::default()
        };
        assert_eq!(where_clause(&filter), "WHERE crop_type = $1");
    }
}
