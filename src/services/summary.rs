//! Headline summary and growth metrics.
//!
//! Both payloads are static placeholder figures inherited from the
//! original dashboard, not derived aggregates. They are kept so the
//! client contract stays intact; see DESIGN.md before wiring them to
//! real queries.

use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard summary card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_sales: f64,
    pub total_products: i64,
    pub total_deliveries: i64,
    pub growth_rate: i64,
}

/// Labelled series for the growth radar chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub labels: Vec<String>,
    pub data: Vec<i64>,
}

/// Static summary figures. Placeholder values, not data-derived.
pub fn dashboard_summary() -> DashboardSummary {
    DashboardSummary {
        total_sales: 1257.25,
        total_products: 4050,
        total_deliveries: 2,
        growth_rate: 15,
    }
}

/// Static growth metrics. Placeholder values, not data-derived.
pub fn growth_metrics() -> GrowthMetrics {
    GrowthMetrics {
        labels: [
            "Sales Growth",
            "Market Share",
            "Customer Base",
            "Product Range",
            "Supply Chain",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        data: vec![80, 60, 70, 50, 65],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_camel_case() {
        let json = serde_json::to_value(dashboard_summary()).unwrap();
        assert_eq!(json["totalSales"], 1257.25);
        assert_eq!(json["totalProducts"], 4050);
        assert_eq!(json["totalDeliveries"], 2);
        assert_eq!(json["growthRate"], 15);
    }

    #[test]
    fn growth_metrics_are_aligned() {
        let metrics = growth_metrics();
        assert_eq!(metrics.labels.len(), metrics.data.len());
        assert_eq!(metrics.labels[0], "Sales Growth");
        assert_eq!(metrics.data, vec![80, 60, 70, 50, 65]);
    }
}
