//! Optional query-string filters shared by the trend endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

/// Inclusive calendar-date range. Either bound may be absent, meaning
/// unbounded on that side; both absent means unfiltered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    /// Whether a given date falls inside the range (bounds inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date.map_or(true, |s| s <= date) && self.end_date.map_or(true, |e| date <= e)
    }
}

/// Filters for the crop and price trend endpoints: optional inclusive date
/// range plus an optional exact crop type match.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub crop_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn unbounded_range_contains_everything() {
        let range = DateRange::default();
        assert!(range.contains(d("1970-01-01")));
        assert!(range.contains(d("2024-06-15")));
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = DateRange {
            start_date: Some(d("2024-01-02")),
            end_date: Some(d("2024-01-03")),
        };
        assert!(!range.contains(d("2024-01-01")));
        assert!(range.contains(d("2024-01-02")));
        assert!(range.contains(d("2024-01-03")));
        assert!(!range.contains(d("2024-01-04")));
    }

    #[test]
    fn half_open_bounds() {
        let from = DateRange {
            start_date: Some(d("2024-01-02")),
            end_date: None,
        };
        assert!(from.contains(d("2030-12-31")));
        assert!(!from.contains(d("2024-01-01")));
    }

    #[test]
    fn deserializes_camel_case_params() {
        let filter: CropFilter = serde_json::from_value(serde_json::json!({
            "startDate": "2024-01-02",
            "endDate": "2024-01-03",
            "cropType": "Wheat"
        }))
        .unwrap();
        assert_eq!(filter.start_date, Some(d("2024-01-02")));
        assert_eq!(filter.end_date, Some(d("2024-01-03")));
        assert_eq!(filter.crop_type.as_deref(), Some("Wheat"));
    }
}
