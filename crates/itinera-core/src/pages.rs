//! The page-image lookup, the transform's only external dependency.
//!
//! National parks link to a content page whose featured image is used for
//! the hero image and park imagery. The assembler batches every referenced
//! page id into a single [`PageImageSource::fetch_page_images`] call.

use std::collections::{BTreeSet, HashMap};

use anyhow::Result;
use async_trait::async_trait;

/// Page id → featured image URL (`None` when the page has no image).
pub type PageImages = HashMap<String, Option<String>>;

/// Adapter interface for looking up featured images of content pages.
///
/// Implementors wrap whatever store holds the pages. The trait is
/// object-safe so the assembler can take `&dyn PageImageSource`.
#[async_trait]
pub trait PageImageSource: Send + Sync {
    /// Fetch featured images for every id in `page_ids`.
    ///
    /// Ids the store does not know may be omitted from the result. An error
    /// is treated by the assembler as "no featured images".
    async fn fetch_page_images(&self, page_ids: &BTreeSet<String>) -> Result<PageImages>;
}

// Compile-time assertion: PageImageSource must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn PageImageSource) {}
};

/// An in-memory page-image source, e.g. loaded from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct StaticPageImages {
    images: PageImages,
}

impl StaticPageImages {
    /// Create a source backed by `images`.
    pub fn new(images: PageImages) -> Self {
        Self { images }
    }

    /// A source that knows no pages.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add or replace one page's image.
    pub fn insert(&mut self, page_id: impl Into<String>, image: Option<String>) {
        self.images.insert(page_id.into(), image);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[async_trait]
impl PageImageSource for StaticPageImages {
    async fn fetch_page_images(&self, page_ids: &BTreeSet<String>) -> Result<PageImages> {
        Ok(page_ids
            .iter()
            .filter_map(|id| self.images.get(id).map(|img| (id.clone(), img.clone())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_source_returns_only_requested_pages() {
        let mut source = StaticPageImages::empty();
        source.insert("pg-1", Some("https://img/1.jpg".to_owned()));
        source.insert("pg-2", None);
        source.insert("pg-3", Some("https://img/3.jpg".to_owned()));
        assert_eq!(source.len(), 3);

        let ids: BTreeSet<String> = ["pg-1", "pg-2", "pg-9"]
            .into_iter()
            .map(String::from)
            .collect();
        let images = source.fetch_page_images(&ids).await.unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images["pg-1"].as_deref(), Some("https://img/1.jpg"));
        assert_eq!(images["pg-2"], None);
        assert!(!images.contains_key("pg-3"));
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let source: Box<dyn PageImageSource> = Box::new(StaticPageImages::empty());
        let images = source.fetch_page_images(&BTreeSet::new()).await.unwrap();
        assert!(images.is_empty());
    }
}
