//! `itinera infer` and `itinera lookup`: query the geography tables directly.

use anyhow::{Result, bail};

use itinera_core::Assembler;
use itinera_model::{Coordinates, Country};

fn format_point(name: &str, [lon, lat]: Coordinates) -> String {
    format!("{name}\t{lon:.4}, {lat:.4}")
}

/// The country a destination string is classified as.
pub fn infer_line(assembler: &Assembler, text: &str) -> String {
    let country = assembler.countries().infer(Some(text));
    format!("{country}\t{}", country.display_name())
}

/// A gazetteer city as `name<TAB>lon, lat`.
pub fn city_line(assembler: &Assembler, name: &str) -> Result<String> {
    match assembler.gazetteer().resolve_city(name) {
        Some(city) => Ok(format_point(&city.name, city.coordinates)),
        None => bail!("city not found in gazetteer: {name}"),
    }
}

/// A park as `name<TAB>lon, lat`, placed on the capital of `country` when the
/// gazetteer does not know it.
pub fn park_line(assembler: &Assembler, name: &str, country: Option<Country>) -> String {
    let gazetteer = assembler.gazetteer();
    if let Some(park) = gazetteer.resolve_park(name) {
        return format_point(&park.name, park.coordinates);
    }

    let country = country.unwrap_or_else(|| assembler.countries().infer(Some(name)));
    let capital = gazetteer.capital(country);
    format!(
        "{} (not in gazetteer, placed on {})",
        format_point(name.trim(), capital.coordinates),
        capital.name
    )
}
