//! The document assembler: runs every stage of the transform over one
//! proposal and composes the presentation document.
//!
//! Stages, in order:
//!
//! 1. stable-sort days by `dayNumber` (output numbering is positional),
//! 2. infer the country from the first day's destination,
//! 3. fetch featured images for every linked park page (one call, skipped
//!    when nothing is linked),
//! 4. normalize each day,
//! 5. aggregate accommodations, markers, pricing and the park index,
//! 6. resolve the hero image and compose the document.
//!
//! Malformed fields degrade to their fallback; assembly never fails.

use chrono::{Local, NaiveDate};
use tracing::debug;

use itinera_model::{Country, DayInput, MapData, MapMarker, PresentationDocument, ProposalInput};

use crate::aggregate::{collect_accommodations, collect_markers, compute_pricing, index_parks};
use crate::chain::{first_of, non_empty};
use crate::day::{DayNormalizer, destination, parse_start_date};
use crate::geo::{CountryCatalog, Gazetteer, Location};
use crate::hero::{load_page_images, referenced_page_ids, resolve_hero_image};
use crate::pages::PageImageSource;
use crate::settings::RenderSettings;

/// Subtitle suffix for itineraries built around gorilla trekking.
pub const GORILLA_SUBTITLE: &str = "Gorilla Trekking Safari";
/// Subtitle suffix for every other itinerary.
pub const DEFAULT_SUBTITLE: &str = "Safari Adventure";

/// Holds the immutable catalogs and settings shared by every invocation.
#[derive(Debug)]
pub struct Assembler {
    gazetteer: Gazetteer,
    countries: CountryCatalog,
    settings: RenderSettings,
    today: Option<NaiveDate>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(
            Gazetteer::builtin(),
            CountryCatalog::builtin(),
            RenderSettings::default(),
        )
    }
}

impl Assembler {
    pub fn new(gazetteer: Gazetteer, countries: CountryCatalog, settings: RenderSettings) -> Self {
        Self {
            gazetteer,
            countries,
            settings,
            today: None,
        }
    }

    /// Date used for the first day when the proposal has no usable start
    /// date. Defaults to the local date at assembly time.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn countries(&self) -> &CountryCatalog {
        &self.countries
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Transform `proposal` into a presentation document.
    ///
    /// `pages` is queried at most once, and only when some day links a park
    /// content page. A failed query falls back as if no page had an image.
    pub async fn assemble(
        &self,
        proposal: &ProposalInput,
        pages: &dyn PageImageSource,
    ) -> PresentationDocument {
        let mut days: Vec<&DayInput> = proposal.days.iter().collect();
        days.sort_by_key(|day| day.day_number);

        let country = self.infer_country(&days);

        let page_ids = referenced_page_ids(&days);
        let page_images = load_page_images(pages, &page_ids).await;

        let start_date = self.start_date(proposal);
        let normalizer = DayNormalizer::new(start_date, days.len(), &page_images);
        let itinerary = days
            .iter()
            .enumerate()
            .map(|(index, day)| normalizer.normalize(index, day))
            .collect();

        let accommodations =
            collect_accommodations(&days, country, &self.settings.stock_accommodation_image);
        let parks = index_parks(&days, &self.gazetteer, country, &page_images);
        let pricing = compute_pricing(
            &proposal.traveler_groups,
            &proposal.pricing_rows,
            &proposal.extras,
            &self.settings.currency,
        );
        let hero_image = resolve_hero_image(
            proposal.hero_image.as_deref(),
            days.first().copied(),
            &page_images,
            &self.settings.stock_hero_image,
        );

        let title = self.title(proposal);
        let map_data = MapData {
            geo_json: self.countries.boundary_geojson(country),
            markers: collect_markers(&days, &self.gazetteer, country),
            projection: self.countries.projection(country),
            start_city: self.city_marker(proposal.start_city.as_deref()),
            end_city: self.city_marker(proposal.end_city.as_deref()),
        };

        debug!(
            proposal = %proposal.id,
            %country,
            days = days.len(),
            parks = parks.entries.len(),
            "assembled presentation document"
        );

        PresentationDocument {
            id: proposal.id.clone(),
            subtitle: subtitle(&title, country),
            title,
            client_name: self.client_name(proposal),
            duration: format!("{} Days", days.len()),
            location: country.display_name().to_owned(),
            country,
            hero_image,
            theme: non_empty(proposal.theme.as_deref()).map(|t| t.trim().to_owned()),
            organization: proposal.organization.clone(),
            itinerary,
            accommodations,
            national_parks: (!parks.is_empty()).then_some(parks.entries),
            park_alias_collisions: parks.collisions,
            pricing,
            inclusions: proposal.inclusions.clone(),
            exclusions: proposal.exclusions.clone(),
            important_notes: self.settings.important_notes.clone(),
            map_data,
        }
    }

    fn infer_country(&self, days: &[&DayInput]) -> Country {
        let first_destination = days.first().and_then(|day| destination(day));
        let country = self.countries.infer(first_destination.as_deref());
        debug!(destination = ?first_destination, %country, "inferred country");
        country
    }

    fn start_date(&self, proposal: &ProposalInput) -> NaiveDate {
        parse_start_date(proposal.start_date.as_deref()).unwrap_or_else(|| {
            let today = self.today.unwrap_or_else(|| Local::now().date_naive());
            debug!(raw = ?proposal.start_date, %today, "no usable start date, starting today");
            today
        })
    }

    fn title(&self, proposal: &ProposalInput) -> String {
        let title = || non_empty(proposal.title.as_deref()).map(|t| t.trim().to_owned());
        let name = || non_empty(proposal.name.as_deref()).map(|n| n.trim().to_owned());

        first_of::<String>(&[&title, &name])
            .unwrap_or_else(|| self.settings.untitled_label.clone())
    }

    fn client_name(&self, proposal: &ProposalInput) -> String {
        proposal
            .client
            .as_ref()
            .and_then(|client| non_empty(client.name.as_deref()))
            .map(|name| name.trim().to_owned())
            .unwrap_or_else(|| self.settings.guest_label.clone())
    }

    fn city_marker(&self, city: Option<&str>) -> Option<MapMarker> {
        let city = non_empty(city)?;
        let location = self.gazetteer.resolve_city(city);
        if location.is_none() {
            debug!(city, "city not in gazetteer, omitting from map");
        }
        location.map(Location::into_marker)
    }
}

/// `"<Country> Gorilla Trekking Safari"` or `"<Country> Safari Adventure"`.
pub fn subtitle(title: &str, country: Country) -> String {
    let kind = if title.to_lowercase().contains("gorilla") {
        GORILLA_SUBTITLE
    } else {
        DEFAULT_SUBTITLE
    };
    format!("{} {kind}", country.display_name())
}
