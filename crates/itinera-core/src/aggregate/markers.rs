use std::collections::HashSet;

use itinera_model::{Country, DayInput, MapMarker};

use super::{park_name, record_key};
use crate::geo::Gazetteer;

/// One marker per distinct park, in order of first appearance.
///
/// An itinerary without parks gets a single marker on the capital of
/// `country`.
pub fn collect_markers(
    days: &[&DayInput],
    gazetteer: &Gazetteer,
    country: Country,
) -> Vec<MapMarker> {
    let mut seen = HashSet::new();
    let mut markers = Vec::new();

    for day in days {
        let (Some(park), Some(name)) = (day.national_park.as_ref(), park_name(day)) else {
            continue;
        };
        if !seen.insert(record_key(&park.id, name)) {
            continue;
        }
        markers.push(MapMarker {
            name: name.to_owned(),
            coordinates: gazetteer.resolve_park_coordinates(name, country),
        });
    }

    if markers.is_empty() {
        markers.push(gazetteer.capital(country).into_marker());
    }
    markers
}

#[cfg(test)]
mod tests {
    use itinera_model::NationalPark;

    use super::*;

    fn park_day(id: &str, name: &str) -> DayInput {
        DayInput {
            national_park: Some(NationalPark {
                id: id.to_owned(),
                name: name.to_owned(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn one_marker_per_park() {
        let gazetteer = Gazetteer::builtin();
        let d1 = park_day("np-1", "Serengeti");
        let d2 = park_day("np-1", "Serengeti");
        let d3 = park_day("np-2", "Ngorongoro Crater");

        let markers = collect_markers(&[&d1, &d2, &d3], &gazetteer, Country::Tanzania);

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].name, "Serengeti");
        assert_eq!(markers[1].name, "Ngorongoro Crater");
        assert_eq!(
            markers[1].coordinates,
            gazetteer.resolve_park_coordinates("ngorongoro", Country::Tanzania)
        );
    }

    #[test]
    fn no_parks_yields_capital_marker() {
        let gazetteer = Gazetteer::builtin();
        let plain = DayInput::default();
        let markers = collect_markers(&[&plain], &gazetteer, Country::Botswana);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name, "Gaborone");
    }

    #[test]
    fn empty_itinerary_yields_capital_marker() {
        let gazetteer = Gazetteer::builtin();
        let markers = collect_markers(&[], &gazetteer, Country::Rwanda);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name, "Kigali");
    }

    #[test]
    fn unknown_park_is_placed_on_capital() {
        let gazetteer = Gazetteer::builtin();
        let day = park_day("np-9", "Mahale Mountains");
        let markers = collect_markers(&[&day], &gazetteer, Country::Tanzania);
        assert_eq!(markers[0].name, "Mahale Mountains");
        assert_eq!(markers[0].coordinates, gazetteer.capital(Country::Tanzania).coordinates);
    }
}
