//! Data model shared by the itinera crates: the hydrated proposal graph the
//! transform reads and the presentation document it produces.

pub mod document;
pub mod enums;
pub mod proposal;

pub use document::{
    Accommodation, AliasCollision, Coordinates, ImportantNote, MapData, MapMarker,
    NationalParkEntry, PresentationActivity, PresentationDay, PresentationDocument, PricingLine,
    PricingSummary, Projection,
};
pub use enums::{Country, CountryParseError, Moment, MomentParseError};
pub use proposal::{
    AccommodationRef, ActivityInput, ClientRef, DayInput, ExtraOption, Meals, NationalPark,
    Organization, OverviewBlock, PricingRow, ProposalInput, TravelerGroup,
};
