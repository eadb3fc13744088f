//! palmtree-core: build seasonal calendar documents for the calendar viewer.
//!
//! A calendar is a JSON object of organisational metadata, a list of seasons
//! and a GeoJSON feature collection of sites. [`CalendarBuilder`] accumulates
//! the fields, [`sites`] folds GeoJSON into the same `serde_json` tree as
//! everything else, and [`codec`] reads and writes the pretty-printed text.

pub mod builder;
pub mod codec;
pub mod document;
mod error;
pub mod keys;
pub mod season;
pub mod sites;

pub use builder::CalendarBuilder;
pub use codec::{read, write, CalendarFormatter};
pub use document::CalendarDocument;
pub use error::CalendarError;
pub use season::{Organisation, Season};
pub use sites::IntoSites;

pub use geojson::FeatureCollection;
pub use url::Url;
pub use uuid::Uuid;
