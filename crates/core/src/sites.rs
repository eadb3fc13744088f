//! GeoJSON bridge: folds a feature collection into the generic tree.
//!
//! A collection is never mapped to a tree by hand. It is encoded to text by
//! the `geojson` crate and that text is decoded with [`codec::read`], so the
//! tree matches the collection's own canonical encoding (geometry tagging,
//! coordinates, foreign members) for every geometry type.

use geojson::FeatureCollection;
use serde_json::{Map, Value};

use crate::codec;
use crate::error::CalendarError;

/// Parse GeoJSON text as a feature collection and convert it to a tree.
///
/// Text that is not valid JSON, or valid GeoJSON of another type (a bare
/// `Feature` or `Geometry`), is rejected with [`CalendarError::Format`].
pub fn from_geojson_str(geojson: &str) -> Result<Map<String, Value>, CalendarError> {
    let collection: FeatureCollection = geojson.parse().map_err(|e| {
        tracing::warn!(error = %e, "rejected sites GeoJSON");
        CalendarError::format(e)
    })?;
    from_feature_collection(&collection)
}

/// Convert a parsed feature collection to a tree via one text round-trip.
pub fn from_feature_collection(
    collection: &FeatureCollection,
) -> Result<Map<String, Value>, CalendarError> {
    let text = serde_json::to_vec(collection).map_err(CalendarError::format)?;
    let tree = codec::read(text.as_slice()).map_err(CalendarError::format)?;
    tracing::debug!(
        features = collection.features.len(),
        bytes = text.len(),
        "converted feature collection"
    );
    Ok(tree)
}

/// Inputs accepted by [`CalendarBuilder::sites`](crate::CalendarBuilder::sites).
pub trait IntoSites {
    fn into_sites(self) -> Result<Map<String, Value>, CalendarError>;
}

impl IntoSites for &str {
    fn into_sites(self) -> Result<Map<String, Value>, CalendarError> {
        from_geojson_str(self)
    }
}

impl IntoSites for &String {
    fn into_sites(self) -> Result<Map<String, Value>, CalendarError> {
        from_geojson_str(self)
    }
}

impl IntoSites for String {
    fn into_sites(self) -> Result<Map<String, Value>, CalendarError> {
        from_geojson_str(&self)
    }
}

impl IntoSites for &FeatureCollection {
    fn into_sites(self) -> Result<Map<String, Value>, CalendarError> {
        from_feature_collection(self)
    }
}

impl IntoSites for FeatureCollection {
    fn into_sites(self) -> Result<Map<String, Value>, CalendarError> {
        from_feature_collection(&self)
    }
}
