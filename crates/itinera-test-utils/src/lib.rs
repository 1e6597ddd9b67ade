//! Shared test utilities for itinera integration tests.
//!
//! Provides fluent builders for hydrated proposals and fake
//! [`PageImageSource`] implementations that count or fail their lookups.

use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};
use async_trait::async_trait;
use uuid::Uuid;

use itinera_core::{PageImageSource, PageImages, StaticPageImages};
use itinera_model::{
    AccommodationRef, ActivityInput, ClientRef, DayInput, ExtraOption, Meals, NationalPark,
    PricingRow, ProposalInput, TravelerGroup,
};

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Fluent builder for [`ProposalInput`].
#[derive(Debug, Clone, Default)]
pub struct ProposalBuilder {
    proposal: ProposalInput,
}

impl ProposalBuilder {
    /// A proposal with a fresh UUID id and nothing else.
    pub fn new() -> Self {
        Self {
            proposal: ProposalInput {
                id: Uuid::new_v4().to_string(),
                ..Default::default()
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.proposal.title = Some(title.to_owned());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.proposal.name = Some(name.to_owned());
        self
    }

    pub fn start_date(mut self, date: &str) -> Self {
        self.proposal.start_date = Some(date.to_owned());
        self
    }

    pub fn client(mut self, name: &str) -> Self {
        self.proposal.client = Some(ClientRef {
            id: Some(Uuid::new_v4().to_string()),
            name: Some(name.to_owned()),
            email: None,
        });
        self
    }

    pub fn hero_image(mut self, url: &str) -> Self {
        self.proposal.hero_image = Some(url.to_owned());
        self
    }

    pub fn cities(mut self, start: &str, end: &str) -> Self {
        self.proposal.start_city = Some(start.to_owned());
        self.proposal.end_city = Some(end.to_owned());
        self
    }

    pub fn travelers(mut self, count: i64, kind: &str) -> Self {
        self.proposal.traveler_groups.push(TravelerGroup {
            count,
            kind: kind.to_owned(),
        });
        self
    }

    pub fn pricing_row(mut self, count: i64, unit_price: f64, kind: &str) -> Self {
        self.proposal.pricing_rows.push(PricingRow {
            count,
            unit_price,
            kind: kind.to_owned(),
        });
        self
    }

    pub fn extra(mut self, name: &str, price: f64, selected: bool) -> Self {
        self.proposal.extras.push(ExtraOption {
            name: name.to_owned(),
            price,
            selected,
        });
        self
    }

    /// Append a day; its `dayNumber` is left as built.
    pub fn day(mut self, day: DayBuilder) -> Self {
        self.proposal.days.push(day.build());
        self
    }

    pub fn build(self) -> ProposalInput {
        self.proposal
    }
}

/// Fluent builder for [`DayInput`].
#[derive(Debug, Clone, Default)]
pub struct DayBuilder {
    day: DayInput,
}

impl DayBuilder {
    pub fn new(day_number: i32) -> Self {
        Self {
            day: DayInput {
                day_number,
                ..Default::default()
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.day.title = Some(title.to_owned());
        self
    }

    pub fn preview_image(mut self, url: &str) -> Self {
        self.day.preview_image = Some(url.to_owned());
        self
    }

    /// Link a park with the given id and name.
    pub fn park(mut self, id: &str, name: &str) -> Self {
        self.day.national_park = Some(NationalPark {
            id: id.to_owned(),
            name: name.to_owned(),
            ..Default::default()
        });
        self
    }

    /// Link a park that points at content page `page_id`.
    pub fn park_with_page(mut self, id: &str, name: &str, page_id: &str) -> Self {
        self.day.national_park = Some(NationalPark {
            id: id.to_owned(),
            name: name.to_owned(),
            page_id: Some(page_id.to_owned()),
            ..Default::default()
        });
        self
    }

    pub fn lodge(mut self, id: &str, name: &str) -> Self {
        self.day.accommodations.push(AccommodationRef {
            id: id.to_owned(),
            name: name.to_owned(),
            ..Default::default()
        });
        self
    }

    pub fn activity(mut self, name: &str, location: Option<&str>, moment: Option<&str>) -> Self {
        self.day.activities.push(ActivityInput {
            name: name.to_owned(),
            location: location.map(str::to_owned),
            moment: moment.map(str::to_owned),
            ..Default::default()
        });
        self
    }

    pub fn all_meals(mut self) -> Self {
        self.day.meals = Some(Meals {
            breakfast: true,
            lunch: true,
            dinner: true,
        });
        self
    }

    pub fn build(self) -> DayInput {
        self.day
    }
}

// ---------------------------------------------------------------------------
// Page image sources
// ---------------------------------------------------------------------------

/// Wraps a [`StaticPageImages`] and records every lookup it serves.
#[derive(Debug, Default)]
pub struct CountingPageImages {
    inner: StaticPageImages,
    calls: AtomicUsize,
    requests: Mutex<Vec<BTreeSet<String>>>,
}

impl CountingPageImages {
    pub fn new(inner: StaticPageImages) -> Self {
        Self {
            inner,
            ..Default::default()
        }
    }

    /// Number of `fetch_page_images` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Page-id sets requested, in call order.
    pub fn requests(&self) -> Vec<BTreeSet<String>> {
        self.requests
            .lock()
            .expect("request log mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl PageImageSource for CountingPageImages {
    async fn fetch_page_images(&self, page_ids: &BTreeSet<String>) -> Result<PageImages> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("request log mutex poisoned")
            .push(page_ids.clone());
        self.inner.fetch_page_images(page_ids).await
    }
}

/// A page-image source whose store is always unreachable.
#[derive(Debug, Default)]
pub struct FailingPageImages {
    calls: AtomicUsize,
}

impl FailingPageImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageImageSource for FailingPageImages {
    async fn fetch_page_images(&self, _page_ids: &BTreeSet<String>) -> Result<PageImages> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        bail!("content store unavailable")
    }
}

/// A static source with one image per `(page_id, url)` pair.
pub fn page_images(pairs: &[(&str, &str)]) -> StaticPageImages {
    let mut source = StaticPageImages::empty();
    for (page_id, url) in pairs {
        source.insert(*page_id, Some((*url).to_owned()));
    }
    source
}
