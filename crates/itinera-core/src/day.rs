//! Per-day field derivation.
//!
//! Turns one [`DayInput`] into a [`PresentationDay`]: calendar date, activity
//! times, and the title / accommodation / meals / image fallbacks.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

use itinera_model::{ActivityInput, DayInput, Meals, Moment, PresentationActivity, PresentationDay};

use crate::chain::{first_of, non_empty};
use crate::pages::PageImages;
use crate::sanitize::sanitize;

/// Label for a day without accommodation that ends the trip.
pub const LAST_DAY_LABEL: &str = "Last day, no accommodation";
/// Label for a day whose accommodation is not chosen yet.
pub const TO_BE_CONFIRMED_LABEL: &str = "To be confirmed";
/// Label for a day without included meals.
pub const NO_MEALS_LABEL: &str = "None";
/// Time used when an activity has neither a time nor a known moment.
pub const DEFAULT_ACTIVITY_TIME: &str = "09:00";

const PARK_SUFFIX: &str = "national park";

/// Parse a proposal start date given as `YYYY-MM-DD` or a timestamp.
///
/// Accepts RFC 3339 (`2025-01-06T10:00:00Z`), a naive timestamp
/// (`2025-01-06T10:00:00`) or a plain date. Returns `None` otherwise.
pub fn parse_start_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = non_empty(value)?.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Long human form, e.g. `Monday, January 6, 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Display time for an activity: explicit time, then moment, then 09:00.
pub fn activity_time(activity: &ActivityInput) -> String {
    let explicit = || non_empty(activity.time.as_deref()).map(|t| t.trim().to_owned());
    let from_moment = || {
        non_empty(activity.moment.as_deref())
            .and_then(|m| m.trim().parse::<Moment>().ok())
            .map(|m| m.default_time().to_owned())
    };

    first_of::<String>(&[&explicit, &from_moment])
        .unwrap_or_else(|| DEFAULT_ACTIVITY_TIME.to_owned())
}

/// `"<park> National Park"`, without doubling an existing suffix.
pub fn park_title(park_name: &str) -> String {
    let trimmed = park_name.trim();
    if trimmed.to_lowercase().ends_with(PARK_SUFFIX) {
        trimmed.to_owned()
    } else {
        format!("{trimmed} National Park")
    }
}

/// Comma-joined included meals, or `"None"`.
pub fn meals_label(meals: Option<&Meals>) -> String {
    let Some(meals) = meals else {
        return NO_MEALS_LABEL.to_owned();
    };
    let names: Vec<&str> = [
        (meals.breakfast, "Breakfast"),
        (meals.lunch, "Lunch"),
        (meals.dinner, "Dinner"),
    ]
    .into_iter()
    .filter_map(|(included, name)| included.then_some(name))
    .collect();

    if names.is_empty() {
        NO_MEALS_LABEL.to_owned()
    } else {
        names.join(", ")
    }
}

/// Park name, else raw day title.
pub fn destination(day: &DayInput) -> Option<String> {
    let park = || {
        day.national_park
            .as_ref()
            .and_then(|p| non_empty(Some(p.name.as_str())))
            .map(|name| name.trim().to_owned())
    };
    let title = || non_empty(day.title.as_deref()).map(|t| t.trim().to_owned());

    first_of::<String>(&[&park, &title])
}

/// Normalizes the days of one proposal.
#[derive(Debug, Clone, Copy)]
pub struct DayNormalizer<'a> {
    start_date: NaiveDate,
    total_days: usize,
    page_images: &'a PageImages,
}

impl<'a> DayNormalizer<'a> {
    /// `start_date` is the date of the first day; `total_days` decides which
    /// day is the last one.
    pub fn new(start_date: NaiveDate, total_days: usize, page_images: &'a PageImages) -> Self {
        Self {
            start_date,
            total_days,
            page_images,
        }
    }

    /// Normalize the day at 0-based `index`.
    pub fn normalize(&self, index: usize, day: &DayInput) -> PresentationDay {
        let day_number = index + 1;
        let date = self
            .start_date
            .checked_add_days(Days::new(index as u64))
            .unwrap_or(self.start_date);

        PresentationDay {
            day: day_number,
            date: format_long_date(date),
            title: self.title(day_number, day),
            description: non_empty(day.description.as_deref()).map(str::to_owned),
            image: self.image(day),
            destination: destination(day),
            national_park_id: day
                .national_park
                .as_ref()
                .and_then(|p| non_empty(Some(p.id.as_str())))
                .map(str::to_owned),
            accommodation: self.accommodation_label(index, day),
            accommodation_image: day
                .accommodations
                .first()
                .and_then(|a| a.images.iter().find(|img| !img.trim().is_empty()))
                .cloned(),
            meals: meals_label(day.meals.as_ref()),
            activities: day.activities.iter().map(normalize_activity).collect(),
        }
    }

    fn title(&self, day_number: usize, day: &DayInput) -> String {
        let explicit = || non_empty(day.title.as_deref()).map(|t| t.trim().to_owned());
        let park = || {
            day.national_park
                .as_ref()
                .and_then(|p| non_empty(Some(p.name.as_str())))
                .map(park_title)
        };
        let first_activity = || {
            day.activities
                .first()
                .and_then(|a| non_empty(Some(a.name.as_str())))
                .map(|name| name.trim().to_owned())
        };

        first_of::<String>(&[&explicit, &park, &first_activity])
            .unwrap_or_else(|| format!("Day {day_number}"))
    }

    fn accommodation_label(&self, index: usize, day: &DayInput) -> String {
        let linked = || {
            day.accommodations
                .first()
                .and_then(|a| non_empty(Some(a.name.as_str())))
                .map(|name| name.trim().to_owned())
        };
        let last_day = || (index + 1 == self.total_days).then(|| LAST_DAY_LABEL.to_owned());

        first_of::<String>(&[&linked, &last_day])
            .unwrap_or_else(|| TO_BE_CONFIRMED_LABEL.to_owned())
    }

    fn image(&self, day: &DayInput) -> Option<String> {
        let preview = || non_empty(day.preview_image.as_deref()).map(str::to_owned);
        let activity = || {
            day.activities
                .iter()
                .find_map(|a| non_empty(a.image.as_deref()))
                .map(str::to_owned)
        };
        let park_page = || -> Option<String> {
            let page_id = day.national_park.as_ref()?.page_id.as_deref()?;
            self.page_images.get(page_id.trim()).cloned().flatten()
        };

        first_of::<String>(&[&preview, &activity, &park_page])
    }
}

fn normalize_activity(activity: &ActivityInput) -> PresentationActivity {
    PresentationActivity {
        time: activity_time(activity),
        name: activity.name.trim().to_owned(),
        description: non_empty(activity.description.as_deref()).map(str::to_owned),
        location: sanitize(activity.location.as_deref()),
        image: non_empty(activity.image.as_deref()).map(str::to_owned),
    }
}

#[cfg(test)]
mod tests {
    use itinera_model::{AccommodationRef, NationalPark};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn activity(name: &str) -> ActivityInput {
        ActivityInput {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    fn park(name: &str) -> NationalPark {
        NationalPark {
            id: format!("np-{}", name.to_lowercase()),
            name: name.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_supported_start_date_forms() {
        assert_eq!(parse_start_date(Some("2025-01-06")), Some(date(2025, 1, 6)));
        assert_eq!(
            parse_start_date(Some("2025-01-06T10:30:00Z")),
            Some(date(2025, 1, 6))
        );
        assert_eq!(
            parse_start_date(Some("2025-01-06T10:30:00.000")),
            Some(date(2025, 1, 6))
        );
        assert_eq!(parse_start_date(Some("next tuesday")), None);
        assert_eq!(parse_start_date(Some("")), None);
        assert_eq!(parse_start_date(None), None);
    }

    #[test]
    fn long_date_format() {
        assert_eq!(format_long_date(date(2025, 1, 6)), "Monday, January 6, 2025");
    }

    #[test]
    fn dates_advance_by_index() {
        let pages = PageImages::new();
        let normalizer = DayNormalizer::new(date(2024, 12, 30), 3, &pages);
        let day = DayInput::default();
        assert_eq!(normalizer.normalize(0, &day).date, "Monday, December 30, 2024");
        assert_eq!(normalizer.normalize(2, &day).date, "Wednesday, January 1, 2025");
    }

    #[test]
    fn activity_time_priority() {
        let mut a = activity("Gorilla trek");
        assert_eq!(activity_time(&a), "09:00");

        a.moment = Some("Evening".to_owned());
        assert_eq!(activity_time(&a), "18:00");

        a.time = Some("06:30".to_owned());
        assert_eq!(activity_time(&a), "06:30");

        a.time = Some("  ".to_owned());
        a.moment = Some("Sunrise".to_owned());
        assert_eq!(activity_time(&a), "09:00");
    }

    #[test]
    fn title_prefers_explicit_then_park_then_activity() {
        let pages = PageImages::new();
        let normalizer = DayNormalizer::new(date(2025, 1, 6), 2, &pages);

        let mut day = DayInput {
            title: Some("Arrival in Kigali".to_owned()),
            national_park: Some(park("Volcanoes")),
            activities: vec![activity("Golden monkey trek")],
            ..Default::default()
        };
        assert_eq!(normalizer.normalize(0, &day).title, "Arrival in Kigali");

        day.title = None;
        assert_eq!(normalizer.normalize(0, &day).title, "Volcanoes National Park");

        day.national_park = None;
        assert_eq!(normalizer.normalize(0, &day).title, "Golden monkey trek");

        day.activities.clear();
        assert_eq!(normalizer.normalize(1, &day).title, "Day 2");
    }

    #[test]
    fn park_title_does_not_double_suffix() {
        assert_eq!(park_title("Akagera"), "Akagera National Park");
        assert_eq!(park_title("Akagera National Park"), "Akagera National Park");
    }

    #[test]
    fn accommodation_sentinels() {
        let pages = PageImages::new();
        let normalizer = DayNormalizer::new(date(2025, 1, 6), 3, &pages);
        let empty = DayInput::default();
        assert_eq!(normalizer.normalize(0, &empty).accommodation, "To be confirmed");
        assert_eq!(
            normalizer.normalize(2, &empty).accommodation,
            "Last day, no accommodation"
        );

        let lodged = DayInput {
            accommodations: vec![AccommodationRef {
                id: "acc-1".to_owned(),
                name: "Bisate Lodge".to_owned(),
                images: vec!["https://img/bisate.jpg".to_owned()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let out = normalizer.normalize(2, &lodged);
        assert_eq!(out.accommodation, "Bisate Lodge");
        assert_eq!(out.accommodation_image.as_deref(), Some("https://img/bisate.jpg"));
    }

    #[test]
    fn meals_are_joined_in_fixed_order() {
        let all = Meals {
            breakfast: true,
            lunch: true,
            dinner: true,
        };
        assert_eq!(meals_label(Some(&all)), "Breakfast, Lunch, Dinner");

        let dinner_only = Meals {
            dinner: true,
            ..Default::default()
        };
        assert_eq!(meals_label(Some(&dinner_only)), "Dinner");
        assert_eq!(meals_label(Some(&Meals::default())), "None");
        assert_eq!(meals_label(None), "None");
    }

    #[test]
    fn destination_prefers_park_over_title() {
        let mut day = DayInput {
            title: Some("Transfer day".to_owned()),
            ..Default::default()
        };
        assert_eq!(destination(&day).as_deref(), Some("Transfer day"));
        day.national_park = Some(park("Nyungwe"));
        assert_eq!(destination(&day).as_deref(), Some("Nyungwe"));
        assert_eq!(destination(&DayInput::default()), None);
    }

    #[test]
    fn activity_locations_are_sanitized() {
        let pages = PageImages::new();
        let normalizer = DayNormalizer::new(date(2025, 1, 6), 1, &pages);
        let day = DayInput {
            activities: vec![
                ActivityInput {
                    location: Some("550e8400-e29b-41d4-a716-446655440000".to_owned()),
                    ..activity("Canopy walk")
                },
                ActivityInput {
                    location: Some("Uwinka".to_owned()),
                    ..activity("Chimp tracking")
                },
            ],
            ..Default::default()
        };
        let out = normalizer.normalize(0, &day);
        assert_eq!(out.activities[0].location, None);
        assert_eq!(out.activities[1].location.as_deref(), Some("Uwinka"));
    }

    #[test]
    fn image_falls_back_to_activity_then_park_page() {
        let mut pages = PageImages::new();
        pages.insert("pg-vol".to_owned(), Some("https://img/volcanoes.jpg".to_owned()));
        let normalizer = DayNormalizer::new(date(2025, 1, 6), 1, &pages);

        let mut day = DayInput {
            national_park: Some(NationalPark {
                page_id: Some("pg-vol".to_owned()),
                ..park("Volcanoes")
            }),
            ..Default::default()
        };
        assert_eq!(
            normalizer.normalize(0, &day).image.as_deref(),
            Some("https://img/volcanoes.jpg")
        );

        day.activities.push(ActivityInput {
            image: Some("https://img/trek.jpg".to_owned()),
            ..activity("Trek")
        });
        assert_eq!(normalizer.normalize(0, &day).image.as_deref(), Some("https://img/trek.jpg"));

        day.preview_image = Some("https://img/preview.jpg".to_owned());
        assert_eq!(
            normalizer.normalize(0, &day).image.as_deref(),
            Some("https://img/preview.jpg")
        );
    }
}
