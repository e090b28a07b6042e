// 🌍 Location Catalog - Named places bound to IANA timezones
// The catalog is an explicit, immutable configuration value: build it once,
// inject it into a view, never mutate it afterwards.

use anyhow::{bail, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// LOCATION ENTRY
// ============================================================================

/// One named place and the timezone its wall clock follows.
///
/// The `(location, country)` pair is the entry's identity key; a catalog
/// never contains the same pair twice. The timezone is held as a resolved
/// `Tz`, so formatting against it cannot fail at tick time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Display name of the city / place
    pub location: String,

    /// Display name of the country
    pub country: String,

    /// IANA timezone the place observes (e.g. Asia/Tokyo)
    pub timezone: Tz,
}

impl LocationEntry {
    /// The IANA identifier string for this entry's timezone
    pub fn timezone_id(&self) -> &'static str {
        self.timezone.name()
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Read-only collection of locations a world-clock view renders.
///
/// Two compiled-in catalogs ship with the crate (`world_locations`,
/// `us_states`); custom catalogs come in through [`Catalog::from_entries`],
/// which validates identifiers and identity keys up front.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<LocationEntry>,
}

impl Catalog {
    /// Build a catalog from `(location, country, iana_timezone)` triples.
    ///
    /// Validation happens here, at authoring time, not per tick:
    /// - location and country must be non-empty
    /// - the timezone string must resolve against the IANA database
    /// - no duplicate `(location, country)` pair
    pub fn from_entries(entries: &[(&str, &str, &str)]) -> Result<Self> {
        let mut parsed = Vec::with_capacity(entries.len());
        let mut seen: HashSet<(String, String)> = HashSet::new();

        for (location, country, timezone) in entries {
            if location.trim().is_empty() {
                bail!("catalog entry has an empty location name");
            }
            if country.trim().is_empty() {
                bail!("catalog entry '{}' has an empty country name", location);
            }

            let tz: Tz = match timezone.parse() {
                Ok(tz) => tz,
                Err(e) => bail!(
                    "catalog entry '{}' has unrecognized timezone '{}': {}",
                    location,
                    timezone,
                    e
                ),
            };

            if !seen.insert((location.to_string(), country.to_string())) {
                bail!("duplicate catalog entry: {} ({})", location, country);
            }

            parsed.push(LocationEntry {
                location: location.to_string(),
                country: country.to_string(),
                timezone: tz,
            });
        }

        Ok(Catalog { entries: parsed })
    }

    /// The default world catalog: major cities across every region bucket.
    pub fn world_locations() -> Self {
        Self::from_table(WORLD_LOCATIONS)
    }

    /// The 50 US states, each pinned to its (predominant) timezone.
    pub fn us_states() -> Self {
        Self::from_table(US_STATES)
    }

    // Compiled-in tables use `Tz` variants directly, so they cannot carry an
    // unresolvable identifier.
    fn from_table(table: &[(&str, &str, Tz)]) -> Self {
        Catalog {
            entries: table
                .iter()
                .map(|(location, country, timezone)| LocationEntry {
                    location: (*location).to_string(),
                    country: (*country).to_string(),
                    timezone: *timezone,
                })
                .collect(),
        }
    }

    /// All entries, in catalog order
    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// COMPILED-IN CATALOGS
// ============================================================================

/// World cities. The first ten are the original seed list; the rest extend
/// coverage so every region bucket has members.
const WORLD_LOCATIONS: &[(&str, &str, Tz)] = &[
    ("New York", "USA", Tz::America__New_York),
    ("Los Angeles", "USA", Tz::America__Los_Angeles),
    ("Chicago", "USA", Tz::America__Chicago),
    ("London", "UK", Tz::Europe__London),
    ("Paris", "France", Tz::Europe__Paris),
    ("Tokyo", "Japan", Tz::Asia__Tokyo),
    ("Beijing", "China", Tz::Asia__Shanghai),
    ("Sydney", "Australia", Tz::Australia__Sydney),
    ("Dubai", "UAE", Tz::Asia__Dubai),
    ("Mumbai", "India", Tz::Asia__Kolkata),
    // North America
    ("Toronto", "Canada", Tz::America__Toronto),
    ("Vancouver", "Canada", Tz::America__Vancouver),
    ("San Francisco", "USA", Tz::America__Los_Angeles),
    ("Mexico City", "Mexico", Tz::America__Mexico_City),
    ("Denver", "USA", Tz::America__Denver),
    ("Phoenix", "USA", Tz::America__Phoenix),
    ("Anchorage", "USA", Tz::America__Anchorage),
    ("Honolulu", "USA", Tz::Pacific__Honolulu),
    // South America
    ("Sao Paulo", "Brazil", Tz::America__Sao_Paulo),
    ("Buenos Aires", "Argentina", Tz::America__Argentina__Buenos_Aires),
    ("Lima", "Peru", Tz::America__Lima),
    ("Bogota", "Colombia", Tz::America__Bogota),
    ("Santiago", "Chile", Tz::America__Santiago),
    // Europe
    ("Berlin", "Germany", Tz::Europe__Berlin),
    ("Madrid", "Spain", Tz::Europe__Madrid),
    ("Rome", "Italy", Tz::Europe__Rome),
    ("Amsterdam", "Netherlands", Tz::Europe__Amsterdam),
    ("Stockholm", "Sweden", Tz::Europe__Stockholm),
    ("Lisbon", "Portugal", Tz::Europe__Lisbon),
    ("Athens", "Greece", Tz::Europe__Athens),
    ("Istanbul", "Turkey", Tz::Europe__Istanbul),
    ("Moscow", "Russia", Tz::Europe__Moscow),
    // Asia
    ("Seoul", "South Korea", Tz::Asia__Seoul),
    ("Hong Kong", "China", Tz::Asia__Hong_Kong),
    ("Singapore", "Singapore", Tz::Asia__Singapore),
    ("Bangkok", "Thailand", Tz::Asia__Bangkok),
    ("Jakarta", "Indonesia", Tz::Asia__Jakarta),
    // Oceania
    ("Melbourne", "Australia", Tz::Australia__Melbourne),
    ("Perth", "Australia", Tz::Australia__Perth),
    ("Auckland", "New Zealand", Tz::Pacific__Auckland),
    // Africa
    ("Cairo", "Egypt", Tz::Africa__Cairo),
    ("Lagos", "Nigeria", Tz::Africa__Lagos),
    ("Nairobi", "Kenya", Tz::Africa__Nairobi),
    ("Johannesburg", "South Africa", Tz::Africa__Johannesburg),
    ("Casablanca", "Morocco", Tz::Africa__Casablanca),
    // Falls outside every continental prefix
    ("Reykjavik", "Iceland", Tz::Atlantic__Reykjavik),
];

/// All 50 US states with their timezones. States that straddle two zones
/// carry the zone most of the state observes.
const US_STATES: &[(&str, &str, Tz)] = &[
    ("Alabama", "USA", Tz::America__Chicago),
    ("Alaska", "USA", Tz::America__Anchorage),
    ("Arizona", "USA", Tz::America__Phoenix),
    ("Arkansas", "USA", Tz::America__Chicago),
    ("California", "USA", Tz::America__Los_Angeles),
    ("Colorado", "USA", Tz::America__Denver),
    ("Connecticut", "USA", Tz::America__New_York),
    ("Delaware", "USA", Tz::America__New_York),
    ("Florida", "USA", Tz::America__New_York), // panhandle is Central
    ("Georgia", "USA", Tz::America__New_York),
    ("Hawaii", "USA", Tz::Pacific__Honolulu),
    ("Idaho", "USA", Tz::America__Denver), // northern ID is Pacific
    ("Illinois", "USA", Tz::America__Chicago),
    ("Indiana", "USA", Tz::America__Indiana__Indianapolis),
    ("Iowa", "USA", Tz::America__Chicago),
    ("Kansas", "USA", Tz::America__Chicago),
    ("Kentucky", "USA", Tz::America__New_York),
    ("Louisiana", "USA", Tz::America__Chicago),
    ("Maine", "USA", Tz::America__New_York),
    ("Maryland", "USA", Tz::America__New_York),
    ("Massachusetts", "USA", Tz::America__New_York),
    ("Michigan", "USA", Tz::America__Detroit),
    ("Minnesota", "USA", Tz::America__Chicago),
    ("Mississippi", "USA", Tz::America__Chicago),
    ("Missouri", "USA", Tz::America__Chicago),
    ("Montana", "USA", Tz::America__Denver),
    ("Nebraska", "USA", Tz::America__Chicago),
    ("Nevada", "USA", Tz::America__Los_Angeles),
    ("New Hampshire", "USA", Tz::America__New_York),
    ("New Jersey", "USA", Tz::America__New_York),
    ("New Mexico", "USA", Tz::America__Denver),
    ("New York", "USA", Tz::America__New_York),
    ("North Carolina", "USA", Tz::America__New_York),
    ("North Dakota", "USA", Tz::America__Chicago),
    ("Ohio", "USA", Tz::America__New_York),
    ("Oklahoma", "USA", Tz::America__Chicago),
    ("Oregon", "USA", Tz::America__Los_Angeles),
    ("Pennsylvania", "USA", Tz::America__New_York),
    ("Rhode Island", "USA", Tz::America__New_York),
    ("South Carolina", "USA", Tz::America__New_York),
    ("South Dakota", "USA", Tz::America__Chicago),
    ("Tennessee", "USA", Tz::America__Chicago),
    ("Texas", "USA", Tz::America__Chicago),
    ("Utah", "USA", Tz::America__Denver),
    ("Vermont", "USA", Tz::America__New_York),
    ("Virginia", "USA", Tz::America__New_York),
    ("Washington", "USA", Tz::America__Los_Angeles),
    ("West Virginia", "USA", Tz::America__New_York),
    ("Wisconsin", "USA", Tz::America__Chicago),
    ("Wyoming", "USA", Tz::America__Denver),
];

// ============================================================================
// TESTS
// ============================================================================
