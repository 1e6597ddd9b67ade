//! Whole-itinerary aggregations run after the per-day pass: accommodation
//! de-duplication, map markers, pricing and the national-park alias index.

pub mod accommodations;
pub mod markers;
pub mod parks;
pub mod pricing;

pub use accommodations::collect_accommodations;
pub use markers::collect_markers;
pub use parks::{ParkIndex, index_parks, overview_text};
pub use pricing::{compute_pricing, format_usd};

use itinera_model::DayInput;

/// Identity of a linked record: its id, or its normalized name when the id
/// is blank.
pub(crate) fn record_key(id: &str, name: &str) -> String {
    if id.trim().is_empty() {
        crate::geo::normalize_name(name)
    } else {
        id.trim().to_owned()
    }
}

/// The park name of `day`, if it links a park with a non-blank name.
pub(crate) fn park_name(day: &DayInput) -> Option<&str> {
    day.national_park
        .as_ref()
        .map(|p| p.name.trim())
        .filter(|name| !name.is_empty())
}
