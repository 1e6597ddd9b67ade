//! The hydrated proposal graph handed to the transform by the persistence
//! layer.
//!
//! Every optional field deserializes as `None`/empty when absent so that a
//! sparse proposal still reaches the transform, which owns the fallbacks.

use serde::{Deserialize, Serialize};

/// An operator's proposal with every relation loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalInput {
    pub id: String,
    pub title: Option<String>,
    /// Internal working name, used when no client-facing title is set.
    pub name: Option<String>,
    pub theme: Option<String>,
    /// Trip start as `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub start_date: Option<String>,
    pub client: Option<ClientRef>,
    pub traveler_groups: Vec<TravelerGroup>,
    pub pricing_rows: Vec<PricingRow>,
    pub extras: Vec<ExtraOption>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub start_city: Option<String>,
    pub end_city: Option<String>,
    pub hero_image: Option<String>,
    pub organization: Option<Organization>,
    pub days: Vec<DayInput>,
}

/// The client a proposal is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientRef {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Branding of the tour operator publishing the proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A single itinerary day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayInput {
    /// 1-based position as stored; only used for ordering.
    pub day_number: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub preview_image: Option<String>,
    pub national_park: Option<NationalPark>,
    pub accommodations: Vec<AccommodationRef>,
    pub activities: Vec<ActivityInput>,
    pub meals: Option<Meals>,
}

/// A national park linked from a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NationalPark {
    pub id: String,
    pub name: String,
    /// Content page carrying the park's featured image.
    pub page_id: Option<String>,
    pub overview: Vec<OverviewBlock>,
}

/// One block of a park's structured overview content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewBlock {
    /// Block kind, e.g. `paragraph`, `header` or `list`.
    #[serde(rename = "type")]
    pub kind: String,
    pub text: Option<String>,
    pub items: Vec<String>,
}

/// An accommodation linked from a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccommodationRef {
    pub id: String,
    pub name: String,
    pub overview: Option<String>,
    pub images: Vec<String>,
}

/// A scheduled activity within a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityInput {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Free-text moment label; see [`crate::Moment`] for recognised values.
    pub moment: Option<String>,
    /// Explicit `HH:MM` time, which takes precedence over `moment`.
    pub time: Option<String>,
    pub image: Option<String>,
}

/// Meals included on a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meals {
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
}

/// A group of travelers of one category, e.g. two adults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelerGroup {
    pub count: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A priced line, `count` units at `unit_price` each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingRow {
    pub count: i64,
    pub unit_price: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// An optional add-on the client may select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraOption {
    pub name: String,
    pub price: f64,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_proposal_deserializes() {
        let proposal: ProposalInput = serde_json::from_str(r#"{"id": "p-1"}"#).unwrap();
        assert_eq!(proposal.id, "p-1");
        assert!(proposal.days.is_empty());
        assert!(proposal.hero_image.is_none());
    }

    #[test]
    fn camel_case_fields_are_read() {
        let json = r#"{
            "id": "p-2",
            "startDate": "2025-01-06",
            "heroImage": "https://img/hero.jpg",
            "travelerGroups": [{"count": 2, "type": "Adult"}],
            "pricingRows": [{"count": 2, "unitPrice": 1500.5, "type": "Adult"}],
            "days": [{
                "dayNumber": 1,
                "nationalPark": {"id": "np-1", "name": "Volcanoes", "pageId": "pg-1"},
                "activities": [{"name": "Gorilla trek", "moment": "Morning"}],
                "meals": {"breakfast": true}
            }]
        }"#;
        let proposal: ProposalInput = serde_json::from_str(json).unwrap();
        assert_eq!(proposal.start_date.as_deref(), Some("2025-01-06"));
        assert_eq!(proposal.traveler_groups[0].kind, "Adult");
        assert_eq!(proposal.pricing_rows[0].unit_price, 1500.5);

        let day = &proposal.days[0];
        let park = day.national_park.as_ref().unwrap();
        assert_eq!(park.page_id.as_deref(), Some("pg-1"));
        assert_eq!(day.activities[0].moment.as_deref(), Some("Morning"));
        assert_eq!(
            day.meals,
            Some(Meals {
                breakfast: true,
                lunch: false,
                dinner: false
            })
        );
    }

    #[test]
    fn overview_block_type_field() {
        let block: OverviewBlock =
            serde_json::from_str(r#"{"type": "list", "items": ["a", "b"]}"#).unwrap();
        assert_eq!(block.kind, "list");
        assert_eq!(block.items, vec!["a", "b"]);
    }
}
