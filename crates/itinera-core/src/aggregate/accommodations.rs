use std::collections::{HashMap, HashSet};

use itinera_model::{Accommodation, Country, DayInput};

use super::{park_name, record_key};

/// De-duplicate accommodations across `days`.
///
/// The first day an accommodation appears on decides its image, description
/// and location; each later day referencing it adds one night, however many
/// times that day lists it.
pub fn collect_accommodations(
    days: &[&DayInput],
    country: Country,
    stock_image: &str,
) -> Vec<Accommodation> {
    let mut out: Vec<Accommodation> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for day in days {
        let location = park_name(day).unwrap_or(country.display_name());
        let mut counted_today: HashSet<String> = HashSet::new();

        for acc in &day.accommodations {
            let key = record_key(&acc.id, &acc.name);
            if !counted_today.insert(key.clone()) {
                continue;
            }
            if let Some(&i) = seen.get(&key) {
                out[i].nights += 1;
                continue;
            }

            let image = acc
                .images
                .iter()
                .find(|img| !img.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| stock_image.to_owned());
            let description = acc
                .overview
                .as_deref()
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| format!("Luxury accommodation in {location}"));

            seen.insert(key, out.len());
            out.push(Accommodation {
                id: acc.id.clone(),
                name: acc.name.trim().to_owned(),
                description,
                image,
                location: location.to_owned(),
                nights: 1,
            });
        }
    }

    out
}
