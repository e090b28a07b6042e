// 🕐 Clock Computation - One instant, one record per catalog entry
// Converts a captured UTC instant into localized wall-clock strings using
// genuine timezone rules (DST included), never fixed offsets.

use crate::catalog::Catalog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 12-hour clock with seconds and AM/PM marker, e.g. "08:30:15 PM"
const TIME_FORMAT: &str = "%I:%M:%S %p";

/// Abbreviated weekday + month, unpadded day, e.g. "Thu, Aug 7"
const DATE_FORMAT: &str = "%a, %b %-d";

/// Render-ready snapshot of one location at one instant.
///
/// Derived data: recomputed wholesale every tick from the catalog and a
/// single captured "now"; never persisted, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub location: String,
    pub country: String,

    /// IANA identifier of the timezone the strings were computed in
    pub timezone: String,

    /// Localized time of day, 12-hour clock
    pub time: String,

    /// Localized short date
    pub date: String,
}

/// Compute a fresh record collection for the whole catalog.
///
/// Every record is derived from the same `instant`, so rows can never show
/// different seconds within one tick. Catalog order is preserved.
pub fn compute_records(catalog: &Catalog, instant: DateTime<Utc>) -> Vec<DisplayRecord> {
    catalog
        .entries()
        .iter()
        .map(|entry| {
            let local = instant.with_timezone(&entry.timezone);

            DisplayRecord {
                location: entry.location.clone(),
                country: entry.country.clone(),
                timezone: entry.timezone_id().to_string(),
                time: local.format(TIME_FORMAT).to_string(),
                date: local.format(DATE_FORMAT).to_string(),
            }
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
