//! Proposal-to-presentation transform.
//!
//! [`Assembler::assemble`] turns a hydrated [`itinera_model::ProposalInput`]
//! into a render-ready [`itinera_model::PresentationDocument`]. The only
//! external dependency is a [`PageImageSource`] for park page imagery.

pub mod aggregate;
pub mod assemble;
pub mod chain;
pub mod day;
pub mod error;
pub mod geo;
pub mod hero;
pub mod pages;
pub mod sanitize;
pub mod settings;

pub use assemble::Assembler;
pub use error::CatalogError;
pub use geo::{CountryCatalog, Gazetteer, Location};
pub use pages::{PageImageSource, PageImages, StaticPageImages};
pub use sanitize::sanitize;
pub use settings::RenderSettings;
