//! `itinera render`: turn a proposal JSON file into a presentation document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use itinera_core::{Assembler, PageImages, StaticPageImages};
use itinera_model::{PresentationDocument, ProposalInput};

/// Arguments of one render invocation.
#[derive(Debug)]
pub struct RenderOptions {
    pub proposal: PathBuf,
    pub pages: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub today: Option<NaiveDate>,
    pub compact: bool,
}

/// Read a hydrated proposal from a JSON file.
pub fn read_proposal(path: &Path) -> Result<ProposalInput> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read proposal {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse proposal {}", path.display()))
}

/// Read a page-image map (`{"<page id>": "<url>" | null}`) from a JSON file.
pub fn read_pages(path: &Path) -> Result<StaticPageImages> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read page images {}", path.display()))?;
    let images: PageImages = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse page images {}", path.display()))?;
    Ok(StaticPageImages::new(images))
}

/// Serialize the document as pretty or compact JSON.
pub fn to_json(document: &PresentationDocument, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(document)
    } else {
        serde_json::to_string_pretty(document)
    };
    json.context("failed to serialize presentation document")
}

/// Execute the `itinera render` command.
pub async fn run_render(assembler: Assembler, options: RenderOptions) -> Result<()> {
    let assembler = match options.today {
        Some(today) => assembler.with_today(today),
        None => assembler,
    };

    let proposal = read_proposal(&options.proposal)?;
    let pages = match &options.pages {
        Some(path) => read_pages(path)?,
        None => StaticPageImages::empty(),
    };

    let document = assembler.assemble(&proposal, &pages).await;
    let json = to_json(&document, options.compact)?;

    match &options.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(
                output = %path.display(),
                days = document.itinerary.len(),
                country = %document.country,
                "presentation written"
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use itinera_test_utils::{DayBuilder, ProposalBuilder};

    use super::*;

    fn write_json(dir: &Path, name: &str, value: &impl serde::Serialize) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        path
    }

    #[test]
    fn pages_file_accepts_null_images() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("pages.json");
        std::fs::write(&path, r#"{"pg-1": "https://img/1.jpg", "pg-2": null}"#).unwrap();

        let pages = read_pages(&path).unwrap();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn malformed_proposal_names_the_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let msg = format!("{:#}", read_proposal(&path).unwrap_err());
        assert!(msg.contains("failed to parse proposal"), "unexpected error: {msg}");
        assert!(msg.contains("broken.json"), "unexpected error: {msg}");
    }

    #[tokio::test]
    async fn render_writes_document_to_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let proposal = ProposalBuilder::new()
            .title("Okavango by Mokoro")
            .day(
                DayBuilder::new(1)
                    .park_with_page("np-oka", "Okavango Delta", "pg-oka")
                    .lodge("acc-1", "Vumbura Plains"),
            )
            .build();
        let proposal_path = write_json(tmp.path(), "proposal.json", &proposal);
        let pages_path = tmp.path().join("pages.json");
        std::fs::write(&pages_path, r#"{"pg-oka": "https://img/okavango.jpg"}"#).unwrap();
        let output = tmp.path().join("out.json");

        run_render(
            Assembler::default(),
            RenderOptions {
                proposal: proposal_path,
                pages: Some(pages_path),
                output: Some(output.clone()),
                today: NaiveDate::from_ymd_opt(2025, 9, 1),
                compact: true,
            },
        )
        .await
        .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let doc: PresentationDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(doc.title, "Okavango by Mokoro");
        assert_eq!(doc.subtitle, "Botswana Safari Adventure");
        assert_eq!(doc.hero_image, "https://img/okavango.jpg");
        assert_eq!(doc.itinerary[0].date, "Monday, September 1, 2025");
        assert_eq!(text.lines().count(), 1);
    }
}
