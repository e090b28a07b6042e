// World Clock - Core Library
// One presentation-agnostic clock engine shared by the TUI, the API server,
// and the tests. Surfaces supply "now" and consume grouped records; nothing
// else crosses the boundary.

pub mod catalog;
pub mod clock;
pub mod regions;
pub mod search;
pub mod ticker;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, LocationEntry};
pub use clock::{compute_records, DisplayRecord};
pub use regions::{group_by_region, group_by_timezone, region_of, timezone_label, Region};
pub use search::apply_search;
pub use ticker::Ticker;
pub use view::{ViewState, WorldClockView, TICK_PERIOD};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
