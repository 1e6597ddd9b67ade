//! National-park alias index.
//!
//! Theme renderers look parks up by whatever key they happen to hold: the
//! record id, the display name, or a short slug. Every referenced park is
//! registered under four keys:
//!
//! - its canonical id,
//! - its lower-cased full name,
//! - the name without a trailing "national park",
//! - that short name suffixed with `-np`.
//!
//! A later day overwrites an earlier one on a shared alias. When the two
//! entries belong to different parks the collision is logged and recorded
//! on the index. Canonical id keys are never overwritten by another park's
//! alias, so every referenced park stays reachable by id.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use itinera_model::{AliasCollision, Country, DayInput, NationalParkEntry, OverviewBlock};

use crate::geo::Gazetteer;
use crate::pages::PageImages;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

const PARK_SUFFIX: &str = "national park";

/// Parks keyed by alias, plus the collisions met while building it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParkIndex {
    pub entries: BTreeMap<String, NationalParkEntry>,
    pub collisions: Vec<AliasCollision>,
}

impl ParkIndex {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&NationalParkEntry> {
        self.entries.get(key)
    }

    fn register(&mut self, alias: String, entry: &NationalParkEntry, id_keys: &HashSet<String>) {
        if alias.is_empty() {
            return;
        }

        let is_own_id = alias == entry.id;
        if let Some(previous) = self.entries.get(&alias) {
            if previous.id != entry.id {
                let collision = AliasCollision {
                    alias: alias.clone(),
                    previous_park_id: previous.id.clone(),
                    park_id: entry.id.clone(),
                };
                warn!(
                    alias = %collision.alias,
                    previous = %collision.previous_park_id,
                    park = %collision.park_id,
                    "national park alias claimed by two parks"
                );
                self.collisions.push(collision);

                // Another park's canonical id outranks this alias.
                if !is_own_id && id_keys.contains(&alias) {
                    return;
                }
            }
        }
        self.entries.insert(alias, entry.clone());
    }
}

/// Strip HTML tags and common entities from rich-text block content.
fn plain_text(raw: &str) -> String {
    let stripped = TAG_RE.replace_all(raw, "");
    stripped
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten structured overview blocks into plain paragraphs.
///
/// List blocks become one bulleted line per item; every other block
/// contributes its text. Returns `None` when nothing readable remains.
pub fn overview_text(blocks: &[OverviewBlock]) -> Option<String> {
    let paragraphs: Vec<String> = blocks
        .iter()
        .filter_map(|block| {
            let text = if block.kind == "list" {
                block
                    .items
                    .iter()
                    .map(|item| plain_text(item))
                    .filter(|item| !item.is_empty())
                    .map(|item| format!("• {item}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            } else {
                block.text.as_deref().map(plain_text).unwrap_or_default()
            };
            (!text.is_empty()).then_some(text)
        })
        .collect();

    (!paragraphs.is_empty()).then(|| paragraphs.join("\n\n"))
}

/// The four lookup keys for a park, id first.
pub fn park_aliases(id: &str, name: &str) -> [String; 4] {
    let full = name.trim().to_lowercase();
    let short = full
        .strip_suffix(PARK_SUFFIX)
        .map(str::trim_end)
        .unwrap_or(full.as_str())
        .to_owned();
    let np = if short.is_empty() {
        String::new()
    } else {
        format!("{short}-np")
    };
    [id.trim().to_owned(), full, short, np]
}

/// Build the alias index over every day that links a park.
pub fn index_parks(
    days: &[&DayInput],
    gazetteer: &Gazetteer,
    country: Country,
    page_images: &PageImages,
) -> ParkIndex {
    let id_keys: HashSet<String> = days
        .iter()
        .filter_map(|day| day.national_park.as_ref())
        .map(|park| park.id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .collect();

    let mut index = ParkIndex::default();
    for day in days {
        let Some(park) = day.national_park.as_ref() else {
            continue;
        };

        let entry = NationalParkEntry {
            id: park.id.trim().to_owned(),
            name: park.name.trim().to_owned(),
            description: overview_text(&park.overview),
            image: park
                .page_id
                .as_deref()
                .and_then(|page| page_images.get(page.trim()))
                .cloned()
                .flatten(),
            coordinates: gazetteer.resolve_park_coordinates(&park.name, country),
        };

        for alias in park_aliases(&park.id, &park.name) {
            index.register(alias, &entry, &id_keys);
        }
    }
    index
}
