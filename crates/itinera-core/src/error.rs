//! Errors raised while loading the static lookup tables.
//!
//! The transform itself never fails; only constructing a [`crate::Gazetteer`]
//! or [`crate::CountryCatalog`] from caller-supplied TOML can.

use itinera_model::Country;
use thiserror::Error;

/// Errors that can occur while parsing and validating a lookup table.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("duplicate {table} key {key:?}")]
    DuplicateKey { table: &'static str, key: String },

    #[error("{table} entry {name:?} has an empty name or alias")]
    EmptyName { table: &'static str, name: String },

    #[error("invalid coordinate [{lon}, {lat}] for {name:?} (expected [longitude, latitude])")]
    InvalidCoordinate { name: String, lon: f64, lat: f64 },

    #[error("country {0} has no keywords")]
    EmptyKeywords(Country),

    #[error("country {0} is defined more than once")]
    DuplicateCountry(Country),

    #[error("boundary for {country} needs at least 3 points, found {points}")]
    DegenerateBoundary { country: Country, points: usize },

    #[error("projection scale for {country} must be positive, found {scale}")]
    InvalidScale { country: Country, scale: f64 },
}

/// Check that `[lon, lat]` lies on the globe.
pub(crate) fn check_coordinates(name: &str, coordinates: [f64; 2]) -> Result<(), CatalogError> {
    let [lon, lat] = coordinates;
    let valid = lon.is_finite()
        && lat.is_finite()
        && (-180.0..=180.0).contains(&lon)
        && (-90.0..=90.0).contains(&lat);
    if valid {
        Ok(())
    } else {
        Err(CatalogError::InvalidCoordinate {
            name: name.to_owned(),
            lon,
            lat,
        })
    }
}
