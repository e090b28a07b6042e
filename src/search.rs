// 🔎 Search Filter - Case-insensitive substring match over records
// Keeps a record when the query appears in its location OR country name.

use crate::clock::DisplayRecord;

/// Filter records by a free-text query.
///
/// The empty query matches everything. Matching is case-insensitive and
/// order-preserving; the source slice is never touched. Filtering an
/// already-filtered result with the same query is a no-op.
pub fn apply_search(records: &[DisplayRecord], query: &str) -> Vec<DisplayRecord> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| {
            record.location.to_lowercase().contains(&needle)
                || record.country.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<DisplayRecord> {
        [
            ("Tokyo", "Japan", "Asia/Tokyo"),
            ("London", "UK", "Europe/London"),
            ("New York", "USA", "America/New_York"),
        ]
        .iter()
        .map(|(location, country, timezone)| DisplayRecord {
            location: location.to_string(),
            country: country.to_string(),
            timezone: timezone.to_string(),
            time: "12:00:00 PM".to_string(),
            date: "Sun, Jun 15".to_string(),
        })
        .collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let records = sample_records();
        let filtered = apply_search(&records, "");

        assert_eq!(filtered, records);
    }

    #[test]
    fn test_matches_location_substring() {
        let filtered = apply_search(&sample_records(), "york");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].location, "New York");
    }

    #[test]
    fn test_matches_country_substring() {
        let filtered = apply_search(&sample_records(), "jap");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].location, "Tokyo");
    }

    #[test]
    fn test_case_insensitive() {
        let records = sample_records();

        let lower = apply_search(&records, "tokyo");
        let upper = apply_search(&records, "TOKYO");
        let mixed = apply_search(&records, "ToKyO");

        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let records = sample_records();

        let once = apply_search(&records, "o");
        let twice = apply_search(&once, "o");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        let filtered = apply_search(&sample_records(), "zzz");

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_source_records_untouched() {
        let records = sample_records();
        let before = records.clone();

        let _ = apply_search(&records, "london");

        assert_eq!(records, before);
    }
}
