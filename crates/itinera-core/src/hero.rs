//! Hero image selection and the batched page-image lookup behind it.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use itinera_model::DayInput;

use crate::chain::{first_of, non_empty};
use crate::pages::{PageImageSource, PageImages};

/// Every content-page id referenced by a park on any day.
pub fn referenced_page_ids(days: &[&DayInput]) -> BTreeSet<String> {
    days.iter()
        .filter_map(|day| day.national_park.as_ref()?.page_id.as_deref())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Look up featured images for `page_ids` with a single call to `source`.
///
/// No call is made when `page_ids` is empty. A failed lookup is logged and
/// treated as "no featured images" so the hero and park images fall
/// through to their next fallback.
pub async fn load_page_images(
    source: &dyn PageImageSource,
    page_ids: &BTreeSet<String>,
) -> PageImages {
    if page_ids.is_empty() {
        return PageImages::new();
    }

    match source.fetch_page_images(page_ids).await {
        Ok(images) => {
            debug!(requested = page_ids.len(), found = images.len(), "loaded page images");
            images
        }
        Err(e) => {
            warn!(error = %e, pages = page_ids.len(), "page image lookup failed, using fallbacks");
            PageImages::new()
        }
    }
}

/// Pick the hero image: the proposal's own, then the featured image of the
/// first day's park page, then `stock_image`.
pub fn resolve_hero_image(
    proposal_hero: Option<&str>,
    first_day: Option<&DayInput>,
    page_images: &PageImages,
    stock_image: &str,
) -> String {
    let explicit = || non_empty(proposal_hero).map(|h| h.trim().to_owned());
    let first_park_page = || -> Option<String> {
        let page_id = first_day?.national_park.as_ref()?.page_id.as_deref()?;
        let image = page_images.get(page_id.trim())?.as_deref();
        non_empty(image).map(str::to_owned)
    };

    first_of::<String>(&[&explicit, &first_park_page]).unwrap_or_else(|| {
        debug!("no hero image on proposal or first park page, using stock photo");
        stock_image.to_owned()
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::{Result, bail};
    use async_trait::async_trait;
    use itinera_model::NationalPark;

    use super::*;

    const STOCK: &str = "https://img/stock.jpg";

    fn park_day(page: Option<&str>) -> DayInput {
        DayInput {
            national_park: Some(NationalPark {
                id: "np-1".to_owned(),
                name: "Volcanoes".to_owned(),
                page_id: page.map(str::to_owned),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Records every call it receives.
    #[derive(Default)]
    struct RecordingSource {
        calls: Mutex<Vec<BTreeSet<String>>>,
    }

    #[async_trait]
    impl PageImageSource for RecordingSource {
        async fn fetch_page_images(&self, page_ids: &BTreeSet<String>) -> Result<PageImages> {
            self.calls.lock().unwrap().push(page_ids.clone());
            Ok(page_ids
                .iter()
                .map(|id| (id.clone(), Some(format!("https://img/{id}.jpg"))))
                .collect())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl PageImageSource for BrokenSource {
        async fn fetch_page_images(&self, _page_ids: &BTreeSet<String>) -> Result<PageImages> {
            bail!("content store unavailable")
        }
    }

    #[test]
    fn collects_distinct_page_ids() {
        let d1 = park_day(Some("pg-2"));
        let d2 = park_day(Some("pg-1"));
        let d3 = park_day(Some("pg-2"));
        let d4 = park_day(None);
        let d5 = DayInput::default();
        let ids = referenced_page_ids(&[&d1, &d2, &d3, &d4, &d5]);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec!["pg-1", "pg-2"]);
    }

    #[tokio::test]
    async fn empty_id_set_skips_the_lookup() {
        let source = RecordingSource::default();
        let images = load_page_images(&source, &BTreeSet::new()).await;
        assert!(images.is_empty());
        assert!(source.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookup_failure_yields_no_images() {
        let ids: BTreeSet<String> = ["pg-1".to_owned()].into();
        let images = load_page_images(&BrokenSource, &ids).await;
        assert!(images.is_empty());
    }

    #[tokio::test]
    async fn lookup_is_one_batched_call() {
        let source = RecordingSource::default();
        let ids: BTreeSet<String> = ["pg-1".to_owned(), "pg-2".to_owned()].into();
        let images = load_page_images(&source, &ids).await;
        assert_eq!(images.len(), 2);
        assert_eq!(source.calls.lock().unwrap().as_slice(), &[ids]);
    }

    #[test]
    fn explicit_hero_beats_page_image() {
        let mut pages = PageImages::new();
        pages.insert("pg-1".to_owned(), Some("https://img/page.jpg".to_owned()));
        let day = park_day(Some("pg-1"));
        let hero = resolve_hero_image(Some("https://img/own.jpg"), Some(&day), &pages, STOCK);
        assert_eq!(hero, "https://img/own.jpg");
    }

    #[test]
    fn first_park_page_image_is_second_choice() {
        let mut pages = PageImages::new();
        pages.insert("pg-1".to_owned(), Some("https://img/page.jpg".to_owned()));
        let day = park_day(Some("pg-1"));
        assert_eq!(
            resolve_hero_image(Some("  "), Some(&day), &pages, STOCK),
            "https://img/page.jpg"
        );
    }

    #[test]
    fn stock_photo_is_last_resort() {
        let mut pages = PageImages::new();
        pages.insert("pg-1".to_owned(), None);
        let day = park_day(Some("pg-1"));
        assert_eq!(resolve_hero_image(None, Some(&day), &pages, STOCK), STOCK);
        assert_eq!(resolve_hero_image(None, None, &pages, STOCK), STOCK);
        assert_eq!(
            resolve_hero_image(None, Some(&DayInput::default()), &pages, STOCK),
            STOCK
        );
    }
}
