//! The flattened, render-ready presentation document consumed by the theme
//! renderers and the PDF/email generators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::Country;
use crate::proposal::Organization;

/// A `[longitude, latitude]` pair.
pub type Coordinates = [f64; 2];

/// Output of the proposal-to-presentation transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationDocument {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub client_name: String,
    /// e.g. `"7 Days"`.
    pub duration: String,
    /// Display name of the inferred country.
    pub location: String,
    pub country: Country,
    pub hero_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    pub itinerary: Vec<PresentationDay>,
    pub accommodations: Vec<Accommodation>,
    /// Parks keyed by every alias downstream renderers may look them up by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_parks: Option<BTreeMap<String, NationalParkEntry>>,
    /// Aliases that were claimed by more than one distinct park.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub park_alias_collisions: Vec<AliasCollision>,
    pub pricing: PricingSummary,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub important_notes: Vec<ImportantNote>,
    pub map_data: MapData,
}

/// One normalized itinerary day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationDay {
    /// 1-based position in the itinerary.
    pub day: usize,
    pub date: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_park_id: Option<String>,
    /// Accommodation name or a sentinel such as `"To be confirmed"`.
    pub accommodation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation_image: Option<String>,
    /// Comma-joined meal names, or `"None"`.
    pub meals: String,
    pub activities: Vec<PresentationActivity>,
}

/// An activity with its display time resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationActivity {
    pub time: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A de-duplicated accommodation across the whole itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Park name of the first day it appears on, or the country name.
    pub location: String,
    /// Number of itinerary days that reference it.
    pub nights: usize,
}

/// A national park as exposed through the alias map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalParkEntry {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub coordinates: Coordinates,
}

/// An alias whose earlier owner was overwritten by a different park.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasCollision {
    pub alias: String,
    pub previous_park_id: String,
    pub park_id: String,
}

/// Aggregated pricing, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    /// e.g. `"$12,400"`.
    pub total: String,
    pub per_person: String,
    pub currency: String,
    pub traveler_count: i64,
    pub breakdown: Vec<PricingLine>,
    pub extras: Vec<PricingLine>,
}

/// One labelled amount in the pricing breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingLine {
    pub label: String,
    pub amount: String,
}

/// A fixed block of travel notes appended to every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantNote {
    pub heading: String,
    pub body: String,
}

/// A named point on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub name: String,
    pub coordinates: Coordinates,
}

/// Map projection used by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub scale: f64,
    /// `[lambda, phi]` rotation, i.e. the negated map centre.
    pub rotate: Coordinates,
}

/// Everything the renderers need to draw the route map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    /// A GeoJSON `Feature` with the country boundary polygon.
    pub geo_json: serde_json::Value,
    pub markers: Vec<MapMarker>,
    pub projection: Projection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_city: Option<MapMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_city: Option<MapMarker>,
}
