//! Delivery status domain.

use serde::Serialize;

/// Canonical delivery statuses. The column is free text maintained by an
/// external write path; the status breakdown only ever counts these three,
/// silently dropping anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
}

impl DeliveryStatus {
    pub const CANONICAL: [DeliveryStatus; 3] = [
        DeliveryStatus::Pending,
        DeliveryStatus::InTransit,
        DeliveryStatus::Delivered,
    ];

    /// The exact value stored in `delivery_records.delivery_status`.
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::InTransit => "In Transit",
            DeliveryStatus::Delivered => "Delivered",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_wire_values() {
        let values: Vec<&str> = DeliveryStatus::CANONICAL
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(values, ["Pending", "In Transit", "Delivered"]);
    }
}
