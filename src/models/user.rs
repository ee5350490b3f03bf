//! User reference DTO embedded in delivery and inventory responses.

use serde::Serialize;

/// Minimal user identity attached to joined rows (recorder, delivery
/// personnel, inventory actor).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub username: String,
    pub full_name: Option<String>,
}
