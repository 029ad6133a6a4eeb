//! Hardiness zone records.

use serde::Serialize;

/// Lowest zone in the table.
pub const MIN_ZONE: i64 = 1;
/// Highest zone in the table.
pub const MAX_ZONE: i64 = 10;

/// Frost-date ranges for one USDA hardiness zone. Free text, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    pub first_frost: &'static str,
    pub last_frost: &'static str,
}
