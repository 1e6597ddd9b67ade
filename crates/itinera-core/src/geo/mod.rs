//! Static geography: the city/park gazetteer and the country catalog.
//!
//! Both are immutable tables loaded from TOML (the embedded defaults or a
//! caller-supplied file) and shared read-only by every transform.

pub mod country;
pub mod gazetteer;

pub use country::{CountryCatalog, CountryProfile};
pub use gazetteer::{Gazetteer, KIGALI, Location, normalize_name};
