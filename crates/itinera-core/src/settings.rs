//! Presentation settings: stock imagery, labels and the fixed notes block.
//!
//! Every field has a default, so an empty `[render]` table (or none at all)
//! yields a fully usable configuration.

use serde::{Deserialize, Serialize};

use itinera_model::ImportantNote;

const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1516426122078-c23e76319801?w=1920&q=80";
const DEFAULT_ACCOMMODATION_IMAGE: &str =
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=1200&q=80";

/// Settings applied by the assembler to every document it produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Hero image used when neither the proposal nor its first park has one.
    pub stock_hero_image: String,
    /// Image used for accommodations without photos.
    pub stock_accommodation_image: String,
    /// ISO currency code shown next to prices.
    pub currency: String,
    /// Client name shown when the proposal has no client.
    pub guest_label: String,
    /// Title used when the proposal has neither title nor name.
    pub untitled_label: String,
    /// Notes appended to every document.
    pub important_notes: Vec<ImportantNote>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            stock_hero_image: DEFAULT_HERO_IMAGE.to_owned(),
            stock_accommodation_image: DEFAULT_ACCOMMODATION_IMAGE.to_owned(),
            currency: "USD".to_owned(),
            guest_label: "Valued Guest".to_owned(),
            untitled_label: "Safari Proposal".to_owned(),
            important_notes: default_notes(),
        }
    }
}

fn note(heading: &str, body: &str) -> ImportantNote {
    ImportantNote {
        heading: heading.to_owned(),
        body: body.to_owned(),
    }
}

fn default_notes() -> Vec<ImportantNote> {
    vec![
        note(
            "Passports & Visas",
            "Passports must be valid for at least six months beyond the return date, \
             with two blank pages. Visa requirements vary by nationality; please confirm \
             before travel.",
        ),
        note(
            "Health",
            "A yellow fever vaccination certificate may be required at entry. Consult a \
             travel clinic about malaria prophylaxis at least six weeks before departure.",
        ),
        note(
            "Travel Insurance",
            "Comprehensive travel insurance including medical evacuation is mandatory \
             for all travelers.",
        ),
        note(
            "Permits & Availability",
            "Park and gorilla permits are subject to availability until confirmed with \
             a deposit. Itineraries may change due to weather or park regulations.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_populated() {
        let settings = RenderSettings::default();
        assert_eq!(settings.currency, "USD");
        assert!(settings.stock_hero_image.starts_with("https://"));
        assert_eq!(settings.important_notes.len(), 4);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let settings: RenderSettings = toml::from_str(
            r#"
guest_label = "Dear Traveler"
"#,
        )
        .unwrap();
        assert_eq!(settings.guest_label, "Dear Traveler");
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.important_notes, default_notes());
    }

    #[test]
    fn notes_can_be_replaced() {
        let settings: RenderSettings = toml::from_str(
            r#"
[[important_notes]]
heading = "Tipping"
body = "Gratuities are at your discretion."
"#,
        )
        .unwrap();
        assert_eq!(settings.important_notes.len(), 1);
        assert_eq!(settings.important_notes[0].heading, "Tipping");
    }
}
