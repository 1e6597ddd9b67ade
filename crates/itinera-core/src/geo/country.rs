//! Country inference from free-text destinations, plus per-country map
//! geometry (boundary polygon and projection).

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::json;

use itinera_model::{Coordinates, Country, Projection};

use crate::error::{CatalogError, check_coordinates};

/// The embedded country profiles TOML.
static COUNTRIES_TOML: &str = include_str!("countries.toml");

/// Projection used when the catalog has no profile for a country.
const NEUTRAL_PROJECTION: Projection = Projection {
    scale: 1000.0,
    rotate: [0.0, 0.0],
};

#[derive(Debug, Deserialize)]
struct CatalogToml {
    #[serde(default)]
    countries: Vec<ProfileToml>,
}

#[derive(Debug, Deserialize)]
struct ProfileToml {
    country: Country,
    #[serde(default)]
    keywords: Vec<String>,
    scale: f64,
    center: Coordinates,
    #[serde(default)]
    boundary: Vec<Coordinates>,
}

/// Keywords and map geometry for one country.
#[derive(Debug, Clone)]
pub struct CountryProfile {
    pub country: Country,
    /// Lower-cased destination keywords.
    pub keywords: Vec<String>,
    pub projection: Projection,
    /// Open ring of `[lon, lat]` points.
    pub boundary: Vec<Coordinates>,
}

impl CountryProfile {
    fn matches(&self, destination: &str) -> bool {
        self.keywords.iter().any(|k| destination.contains(k.as_str()))
    }
}

/// Immutable set of country profiles used for inference and map data.
#[derive(Debug)]
pub struct CountryCatalog {
    profiles: HashMap<Country, CountryProfile>,
}

impl CountryCatalog {
    /// Load the catalog embedded in the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The unit tests load it, so
    /// a tested build always carries a valid catalog.
    pub fn builtin() -> Self {
        Self::from_toml(COUNTRIES_TOML).expect("embedded countries.toml is invalid")
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let raw: CatalogToml = toml::from_str(content)?;

        let mut profiles = HashMap::new();
        for entry in raw.countries {
            let country = entry.country;
            if !(entry.scale.is_finite() && entry.scale > 0.0) {
                return Err(CatalogError::InvalidScale {
                    country,
                    scale: entry.scale,
                });
            }
            check_coordinates(&country.to_string(), entry.center)?;
            if entry.boundary.len() < 3 {
                return Err(CatalogError::DegenerateBoundary {
                    country,
                    points: entry.boundary.len(),
                });
            }
            for point in &entry.boundary {
                check_coordinates(&country.to_string(), *point)?;
            }

            let keywords: Vec<String> = entry
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            if keywords.is_empty() {
                return Err(CatalogError::EmptyKeywords(country));
            }

            let profile = CountryProfile {
                country,
                keywords,
                projection: Projection {
                    scale: entry.scale,
                    rotate: [-entry.center[0], -entry.center[1]],
                },
                boundary: entry.boundary,
            };
            if profiles.insert(country, profile).is_some() {
                return Err(CatalogError::DuplicateCountry(country));
            }
        }

        Ok(Self { profiles })
    }

    /// Classify a destination string.
    ///
    /// Countries are tried in [`Country::ALL`] order and the first whose
    /// keyword occurs in the lower-cased destination wins. Empty, missing or
    /// unmatched destinations default to [`Country::Rwanda`].
    pub fn infer(&self, destination: Option<&str>) -> Country {
        let Some(destination) = destination.map(str::to_lowercase) else {
            return Country::default();
        };
        if destination.trim().is_empty() {
            return Country::default();
        }

        Country::ALL
            .into_iter()
            .find(|country| {
                self.profiles
                    .get(country)
                    .is_some_and(|profile| profile.matches(&destination))
            })
            .unwrap_or_default()
    }

    /// Profile for `country`, if the catalog defines one.
    pub fn profile(&self, country: Country) -> Option<&CountryProfile> {
        self.profiles.get(&country)
    }

    /// Projection for `country`, or a neutral world view.
    pub fn projection(&self, country: Country) -> Projection {
        self.profile(country)
            .map(|p| p.projection)
            .unwrap_or(NEUTRAL_PROJECTION)
    }

    /// The country boundary as a GeoJSON `Feature`.
    ///
    /// The ring is closed (first point repeated last) as GeoJSON requires.
    /// A country without a profile yields a feature with an empty polygon.
    pub fn boundary_geojson(&self, country: Country) -> serde_json::Value {
        let mut ring: Vec<Coordinates> = self
            .profile(country)
            .map(|p| p.boundary.clone())
            .unwrap_or_default();
        if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
            if first != last {
                ring.push(first);
            }
        }
        let coordinates = if ring.is_empty() { vec![] } else { vec![ring] };

        json!({
            "type": "Feature",
            "properties": { "name": country.display_name() },
            "geometry": {
                "type": "Polygon",
                "coordinates": coordinates,
            },
        })
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
