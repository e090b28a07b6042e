// 🗺️ Region Classification - Timezone identifier → display bucket
// A name-based heuristic on identifier prefixes, kept exactly as the catalog
// data was authored against it. It is not a geographic boundary computation:
// America/* identifiers outside the named metro lists fall through to
// "South America", and Pacific/Honolulu lands in "Oceania".

use crate::clock::DisplayRecord;

// Metro names that pin an America/* identifier to a named sub-bucket.
const EASTERN_METROS: &[&str] = &["New_York", "Toronto", "Detroit", "Indiana"];
const WESTERN_METROS: &[&str] = &["Los_Angeles", "Vancouver"];
const CENTRAL_METROS: &[&str] = &["Chicago", "Mexico_City", "Winnipeg"];

// ============================================================================
// REGION
// ============================================================================

/// Coarse display bucket derived from a timezone identifier.
///
/// The label set is closed: every identifier maps to exactly one of these
/// nine, with `Other` as the total-function fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    NorthAmericaEast,
    NorthAmericaWest,
    NorthAmericaCentral,
    SouthAmerica,
    Europe,
    Asia,
    Oceania,
    Africa,
    Other,
}

impl Region {
    /// Human-readable label, also the grouping sort key
    pub fn label(&self) -> &'static str {
        match self {
            Region::NorthAmericaEast => "North America (East)",
            Region::NorthAmericaWest => "North America (West)",
            Region::NorthAmericaCentral => "North America (Central)",
            Region::SouthAmerica => "South America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Oceania => "Oceania",
            Region::Africa => "Africa",
            Region::Other => "Other",
        }
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify a timezone identifier into its display region.
///
/// Pure and total: same input, same label, and every string gets one.
pub fn region_of(timezone: &str) -> Region {
    if timezone.starts_with("America/") {
        if EASTERN_METROS.iter().any(|metro| timezone.contains(metro)) {
            return Region::NorthAmericaEast;
        }
        if WESTERN_METROS.iter().any(|metro| timezone.contains(metro)) {
            return Region::NorthAmericaWest;
        }
        if CENTRAL_METROS.iter().any(|metro| timezone.contains(metro)) {
            return Region::NorthAmericaCentral;
        }
        return Region::SouthAmerica;
    }

    if timezone.starts_with("Europe/") {
        return Region::Europe;
    }
    if timezone.starts_with("Asia/") {
        return Region::Asia;
    }
    if timezone.starts_with("Australia/") || timezone.starts_with("Pacific/") {
        return Region::Oceania;
    }
    if timezone.starts_with("Africa/") {
        return Region::Africa;
    }

    Region::Other
}

/// Colloquial label for the US timezone identifiers the states catalog uses.
/// Identifiers outside that set label as themselves.
pub fn timezone_label(timezone: &str) -> &str {
    match timezone {
        "America/New_York" | "America/Detroit" | "America/Indiana/Indianapolis" => {
            "Eastern Time (ET)"
        }
        "America/Chicago" => "Central Time (CT)",
        "America/Denver" | "America/Phoenix" => "Mountain Time (MT)",
        "America/Los_Angeles" => "Pacific Time (PT)",
        "America/Anchorage" => "Alaska Time (AKT)",
        "Pacific/Honolulu" => "Hawaii Time (HST)",
        other => other,
    }
}

// ============================================================================
// GROUPING
// ============================================================================

/// Partition records into region buckets for display.
///
/// Stable: each record keeps its relative order inside its bucket. Buckets
/// come out sorted lexicographically by label; labels are unique, so ties
/// cannot happen.
pub fn group_by_region(records: &[DisplayRecord]) -> Vec<(Region, Vec<DisplayRecord>)> {
    let mut buckets: Vec<(Region, Vec<DisplayRecord>)> = Vec::new();

    for record in records {
        let region = region_of(&record.timezone);
        match buckets.iter_mut().find(|(r, _)| *r == region) {
            Some((_, bucket)) => bucket.push(record.clone()),
            None => buckets.push((region, vec![record.clone()])),
        }
    }

    buckets.sort_by(|a, b| a.0.label().cmp(b.0.label()));
    buckets
}

/// Partition records by timezone identifier, in first-seen order.
///
/// This is how the states grid renders: one section per identifier, headed
/// by [`timezone_label`]. Two identifiers sharing a label stay separate
/// sections.
pub fn group_by_timezone(records: &[DisplayRecord]) -> Vec<(String, Vec<DisplayRecord>)> {
    let mut sections: Vec<(String, Vec<DisplayRecord>)> = Vec::new();

    for record in records {
        match sections.iter_mut().find(|(tz, _)| *tz == record.timezone) {
            Some((_, section)) => section.push(record.clone()),
            None => sections.push((record.timezone.clone(), vec![record.clone()])),
        }
    }

    sections
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(location: &str, country: &str, timezone: &str) -> DisplayRecord {
        DisplayRecord {
            location: location.to_string(),
            country: country.to_string(),
            timezone: timezone.to_string(),
            time: "12:00:00 PM".to_string(),
            date: "Sun, Jun 15".to_string(),
        }
    }

    #[test]
    fn test_region_of_north_american_sub_buckets() {
        assert_eq!(region_of("America/New_York"), Region::NorthAmericaEast);
        assert_eq!(region_of("America/Toronto"), Region::NorthAmericaEast);
        assert_eq!(region_of("America/Detroit"), Region::NorthAmericaEast);
        assert_eq!(
            region_of("America/Indiana/Indianapolis"),
            Region::NorthAmericaEast
        );

        assert_eq!(region_of("America/Los_Angeles"), Region::NorthAmericaWest);
        assert_eq!(region_of("America/Vancouver"), Region::NorthAmericaWest);

        assert_eq!(region_of("America/Chicago"), Region::NorthAmericaCentral);
        assert_eq!(region_of("America/Mexico_City"), Region::NorthAmericaCentral);
    }

    #[test]
    fn test_region_of_america_fallthrough_is_south_america() {
        assert_eq!(region_of("America/Sao_Paulo"), Region::SouthAmerica);
        assert_eq!(region_of("America/Lima"), Region::SouthAmerica);

        // Inherited quirk: these are geographically North American but sit
        // outside the metro lists, so they fall through.
        assert_eq!(region_of("America/Denver"), Region::SouthAmerica);
        assert_eq!(region_of("America/Phoenix"), Region::SouthAmerica);
        assert_eq!(region_of("America/Anchorage"), Region::SouthAmerica);
    }

    #[test]
    fn test_region_of_continental_prefixes() {
        assert_eq!(region_of("Europe/London"), Region::Europe);
        assert_eq!(region_of("Europe/Moscow"), Region::Europe);
        assert_eq!(region_of("Asia/Tokyo"), Region::Asia);
        assert_eq!(region_of("Asia/Dubai"), Region::Asia);
        assert_eq!(region_of("Australia/Sydney"), Region::Oceania);
        assert_eq!(region_of("Pacific/Auckland"), Region::Oceania);
        assert_eq!(region_of("Africa/Cairo"), Region::Africa);
    }

    #[test]
    fn test_region_of_honolulu_lands_in_oceania() {
        // Inherited quirk: the Pacific/ prefix wins over geography
        assert_eq!(region_of("Pacific/Honolulu"), Region::Oceania);
    }

    #[test]
    fn test_region_of_fallback_is_other() {
        assert_eq!(region_of("Atlantic/Reykjavik"), Region::Other);
        assert_eq!(region_of("Antarctica/McMurdo"), Region::Other);
        assert_eq!(region_of("UTC"), Region::Other);
        assert_eq!(region_of(""), Region::Other);
    }

    #[test]
    fn test_region_of_is_deterministic() {
        for tz in ["America/New_York", "Asia/Tokyo", "Atlantic/Reykjavik"] {
            assert_eq!(region_of(tz), region_of(tz));
        }
    }

    #[test]
    fn test_every_label_is_in_the_fixed_set() {
        let labels = [
            "North America (East)",
            "North America (West)",
            "North America (Central)",
            "South America",
            "Europe",
            "Asia",
            "Oceania",
            "Africa",
            "Other",
        ];

        for tz in [
            "America/New_York",
            "America/Los_Angeles",
            "America/Chicago",
            "America/Bogota",
            "Europe/Paris",
            "Asia/Seoul",
            "Australia/Perth",
            "Africa/Lagos",
            "Mars/Olympus_Mons",
        ] {
            assert!(labels.contains(&region_of(tz).label()));
        }
    }

    #[test]
    fn test_group_by_region_three_city_scenario() {
        let records = vec![
            record("Tokyo", "Japan", "Asia/Tokyo"),
            record("London", "UK", "Europe/London"),
            record("New York", "USA", "America/New_York"),
        ];

        let grouped = group_by_region(&records);

        let labels: Vec<&str> = grouped.iter().map(|(r, _)| r.label()).collect();
        assert_eq!(labels, vec!["Asia", "Europe", "North America (East)"]);

        for (_, bucket) in &grouped {
            assert_eq!(bucket.len(), 1);
        }
        assert_eq!(grouped[0].1[0].location, "Tokyo");
        assert_eq!(grouped[2].1[0].location, "New York");
    }

    #[test]
    fn test_group_by_region_is_a_partition() {
        let records = vec![
            record("Tokyo", "Japan", "Asia/Tokyo"),
            record("Seoul", "South Korea", "Asia/Seoul"),
            record("London", "UK", "Europe/London"),
            record("Lima", "Peru", "America/Lima"),
            record("Reykjavik", "Iceland", "Atlantic/Reykjavik"),
        ];

        let grouped = group_by_region(&records);

        let total: usize = grouped.iter().map(|(_, bucket)| bucket.len()).sum();
        assert_eq!(total, records.len());

        // Every input record appears in exactly one bucket
        for input in &records {
            let appearances = grouped
                .iter()
                .flat_map(|(_, bucket)| bucket.iter())
                .filter(|r| r.location == input.location)
                .count();
            assert_eq!(appearances, 1, "{} misplaced", input.location);
        }
    }

    #[test]
    fn test_group_by_region_is_stable_within_buckets() {
        let records = vec![
            record("Tokyo", "Japan", "Asia/Tokyo"),
            record("London", "UK", "Europe/London"),
            record("Seoul", "South Korea", "Asia/Seoul"),
            record("Singapore", "Singapore", "Asia/Singapore"),
        ];

        let grouped = group_by_region(&records);
        let (_, asia) = &grouped[0];

        let order: Vec<&str> = asia.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(order, vec!["Tokyo", "Seoul", "Singapore"]);
    }

    #[test]
    fn test_timezone_label_known_identifiers() {
        assert_eq!(timezone_label("America/New_York"), "Eastern Time (ET)");
        assert_eq!(timezone_label("America/Detroit"), "Eastern Time (ET)");
        assert_eq!(
            timezone_label("America/Indiana/Indianapolis"),
            "Eastern Time (ET)"
        );
        assert_eq!(timezone_label("America/Chicago"), "Central Time (CT)");
        assert_eq!(timezone_label("America/Denver"), "Mountain Time (MT)");
        assert_eq!(timezone_label("America/Phoenix"), "Mountain Time (MT)");
        assert_eq!(timezone_label("America/Los_Angeles"), "Pacific Time (PT)");
        assert_eq!(timezone_label("America/Anchorage"), "Alaska Time (AKT)");
        assert_eq!(timezone_label("Pacific/Honolulu"), "Hawaii Time (HST)");
    }

    #[test]
    fn test_timezone_label_fallback_is_identity() {
        assert_eq!(timezone_label("Asia/Tokyo"), "Asia/Tokyo");
    }

    #[test]
    fn test_group_by_timezone_first_seen_order() {
        let records = vec![
            record("Connecticut", "USA", "America/New_York"),
            record("Alabama", "USA", "America/Chicago"),
            record("Delaware", "USA", "America/New_York"),
            record("Michigan", "USA", "America/Detroit"),
        ];

        let sections = group_by_timezone(&records);

        let keys: Vec<&str> = sections.iter().map(|(tz, _)| tz.as_str()).collect();
        assert_eq!(
            keys,
            vec!["America/New_York", "America/Chicago", "America/Detroit"]
        );

        // Detroit shares a label with New_York but keeps its own section
        assert_eq!(timezone_label(keys[0]), timezone_label(keys[2]));

        let (_, eastern) = &sections[0];
        assert_eq!(eastern.len(), 2);
        assert_eq!(eastern[0].location, "Connecticut");
        assert_eq!(eastern[1].location, "Delaware");
    }
}
