//! Fluent builder for calendar documents.
//!
//! A builder owns one identifier and one accumulating tree. Setters mutate
//! the tree in place and return `&mut Self` so calls chain; `sites` is the
//! only fallible setter. The terminal operations ([`CalendarBuilder::build`]
//! and [`CalendarBuilder::into_document`]) consume the builder, so a calendar
//! cannot be emitted twice from the same instance.
//!
//! ```
//! use palmtree_core::{CalendarBuilder, Season};
//!
//! let mut calendar = CalendarBuilder::new();
//! calendar
//!     .name("Larrakia")
//!     .status("published")
//!     .season(Season::new("Test", "rainy", "Dalay", "January", "Monsoon Season", vec![]));
//!
//! let mut out = Vec::new();
//! let doc = calendar.build(&mut out).unwrap();
//! assert_eq!(doc.name(), Some("Larrakia"));
//! ```

use std::io::Write;

use serde_json::{Map, Value};
use url::Url;
use uuid::Uuid;

use crate::document::CalendarDocument;
use crate::error::CalendarError;
use crate::keys;
use crate::season::{Organisation, Season};
use crate::sites::IntoSites;

/// Accumulates calendar fields until a terminal build.
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    id: Uuid,
    fields: Map<String, Value>,
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarBuilder {
    /// Start a calendar with a freshly generated identifier.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Start a calendar with the given identifier.
    pub fn with_id(id: Uuid) -> Self {
        tracing::debug!(calendar_id = %id, "new calendar builder");
        CalendarBuilder {
            id,
            fields: Map::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Fields set so far. Never contains `calendarId`; that is only stamped
    /// in by the terminal operations.
    pub fn tree(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn set(&mut self, key: &str, value: Value) -> &mut Self {
        tracing::trace!(calendar_id = %self.id, key, "set field");
        self.fields.insert(key.to_string(), value);
        self
    }

    fn set_text(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.set(key, Value::String(value.into()))
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.set_text(keys::NAME, name)
    }

    /// Typically `published` or `unpublished`; not checked here.
    pub fn status(&mut self, status: impl Into<String>) -> &mut Self {
        self.set_text(keys::STATUS, status)
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.set_text(keys::DESCRIPTION, description)
    }

    pub fn how(&mut self, how: impl Into<String>) -> &mut Self {
        self.set_text(keys::HOW, how)
    }

    pub fn limitations(&mut self, limitations: impl Into<String>) -> &mut Self {
        self.set_text(keys::LIMITATIONS, limitations)
    }

    pub fn multimedia(&mut self, multimedia: impl Into<String>) -> &mut Self {
        self.set_text(keys::MULTIMEDIA, multimedia)
    }

    pub fn reference(&mut self, reference: impl Into<String>) -> &mut Self {
        self.set_text(keys::REFERENCE, reference)
    }

    pub fn reference_link(&mut self, reference_link: impl Into<String>) -> &mut Self {
        self.set_text(keys::REFERENCE_LINK, reference_link)
    }

    pub fn why(&mut self, why: impl Into<String>) -> &mut Self {
        self.set_text(keys::WHY, why)
    }

    pub fn external_link(&mut self, url: &Url) -> &mut Self {
        self.set_text(keys::EXTERNAL_LINK, url.as_str())
    }

    pub fn image_url(&mut self, url: &Url) -> &mut Self {
        self.set_text(keys::IMAGE_URL, url.as_str())
    }

    pub fn license_url(&mut self, url: &Url) -> &mut Self {
        self.set_text(keys::LICENSE_URL, url.as_str())
    }

    /// Replace the organisation object wholesale.
    pub fn organisation(
        &mut self,
        name: impl Into<String>,
        contact_name: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.organisation_details(Organisation::new(name, contact_name, description))
    }

    pub fn organisation_details(&mut self, organisation: Organisation) -> &mut Self {
        self.set(keys::ORGANISATION, Value::Object(organisation.into()))
    }

    /// Append a season. Earlier seasons are left untouched.
    pub fn season(&mut self, season: Season) -> &mut Self {
        tracing::debug!(
            calendar_id = %self.id,
            season = %season.name_english,
            features = season.features.len(),
            "add season"
        );
        let entry = Value::Object(season.into());
        match self.fields.get_mut(keys::SEASONS) {
            Some(Value::Array(seasons)) => seasons.push(entry),
            _ => {
                self.fields
                    .insert(keys::SEASONS.to_string(), Value::Array(vec![entry]));
            }
        }
        self
    }

    /// Replace `sites` with the tree form of a GeoJSON feature collection,
    /// given as text or as a parsed [`geojson::FeatureCollection`].
    ///
    /// On error the previous `sites` value (or its absence) is kept.
    pub fn sites(&mut self, sites: impl IntoSites) -> Result<&mut Self, CalendarError> {
        let tree = sites.into_sites()?;
        tracing::debug!(calendar_id = %self.id, "set sites");
        Ok(self.set(keys::SITES, Value::Object(tree)))
    }

    /// Set an arbitrary top-level field outside the reserved set.
    ///
    /// Reserved keys (see [`keys::TOP_LEVEL`]) are ignored with a warning:
    /// they are only reachable through their typed setters, and
    /// `calendarId` is always the builder's own identifier.
    pub fn extra(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        let key = key.into();
        if keys::TOP_LEVEL.contains(&key.as_str()) {
            tracing::warn!(calendar_id = %self.id, key = %key, "ignoring reserved key");
            return self;
        }
        self.fields.insert(key, value);
        self
    }

    /// Finish the calendar: stamp `calendarId` and hand back the document.
    pub fn into_document(self) -> CalendarDocument {
        let CalendarBuilder { id, mut fields } = self;
        fields.insert(keys::CALENDAR_ID.to_string(), Value::String(id.to_string()));
        CalendarDocument::from_map(fields)
    }

    /// Finish the calendar and write it to `output`.
    ///
    /// Returns the document that was written. The stream is flushed but not
    /// closed.
    pub fn build<W: Write>(self, output: W) -> Result<CalendarDocument, CalendarError> {
        let doc = self.into_document();
        doc.write(output)?;
        tracing::info!(
            calendar_id = ?doc.calendar_id(),
            fields = doc.len(),
            "calendar written"
        );
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const POINT: &str = concat!(
        r#"{"type": "FeatureCollection", "features": [{"type": "Feature", "#,
        r#""geometry": {"type": "Point", "coordinates": [1.0, 2.0]}, "#,
        r#""properties": {"radius": 5.0}}]}"#
    );
    const LINE: &str = concat!(
        r#"{"type": "FeatureCollection", "features": ["#,
        r#"{"type": "Feature", "#,
        r#""geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}, "#,
        r#""properties": null}, "#,
        r#"{"type": "Feature", "geometry": null, "properties": {"a": 1}}]}"#
    );

    fn season(name: &str) -> Season {
        Season::new(name, "rainy", "Dalay", "January", "Monsoon Season", vec![])
    }

    #[test]
    fn scalar_setters_store_verbatim() {
        let mut b = CalendarBuilder::new();
        b.name("  Larrakia ")
            .status("draft-ish")
            .description("d")
            .how("h")
            .limitations("l")
            .multimedia("m")
            .reference("r")
            .reference_link("not a url")
            .why("w");
        let t = b.tree();
        assert_eq!(t["name"], "  Larrakia ");
        assert_eq!(t["status"], "draft-ish");
        assert_eq!(t["referenceLink"], "not a url");
        assert_eq!(t.len(), 9);
    }

    #[test]
    fn later_scalar_calls_overwrite() {
        let mut b = CalendarBuilder::new();
        b.name("first").name("second");
        assert_eq!(b.tree()["name"], "second");
        assert_eq!(b.tree().len(), 1);
    }

    #[test]
    fn url_setters_store_canonical_form() {
        let mut b = CalendarBuilder::new();
        b.image_url(&Url::parse("HTTP://Example.COM").unwrap())
            .external_link(&Url::parse("https://example.com/a b").unwrap())
            .license_url(&Url::parse("https://creativecommons.org/licenses/by/4.0/").unwrap());
        assert_eq!(b.tree()["imageUrl"], "http://example.com/");
        assert_eq!(b.tree()["externalLink"], "https://example.com/a%20b");
        assert_eq!(
            b.tree()["licenseURL"],
            "https://creativecommons.org/licenses/by/4.0/"
        );
    }

    #[test]
    fn organisation_is_replaced_wholesale() {
        let mut b = CalendarBuilder::new();
        b.organisation("A", "B", "C").organisation("X", "Y", "Z");
        assert_eq!(
            b.tree()["organisation"],
            json!({"name": "X", "contactName": "Y", "orgDescription": "Z"})
        );
    }

    #[test]
    fn seasons_append_in_call_order() {
        let mut b = CalendarBuilder::new();
        assert!(!b.tree().contains_key("seasons"));
        b.season(season("first")).season(season("second"));
        let seasons = b.tree()["seasons"].as_array().unwrap();
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0]["seasonNameEnglish"], "first");
        assert_eq!(seasons[1]["seasonNameEnglish"], "second");
    }

    #[test]
    fn sites_overwrite_previous_value() {
        let mut b = CalendarBuilder::new();
        b.sites(POINT).unwrap().sites(LINE).unwrap();
        let sites = b.tree()["sites"].as_object().unwrap();
        let features = sites["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["geometry"]["type"], "LineString");
    }

    #[test]
    fn failed_sites_keeps_previous_value() {
        let mut b = CalendarBuilder::new();
        b.sites(POINT).unwrap();
        let before = b.tree()["sites"].clone();
        let err = b.sites("{ not geojson").unwrap_err();
        assert!(matches!(err, CalendarError::Format { .. }));
        assert_eq!(b.tree()["sites"], before);
    }

    #[test]
    fn failed_sites_keeps_absence() {
        let mut b = CalendarBuilder::new();
        assert!(b.sites(r#"{"type": "Point", "coordinates": [1, 2]}"#).is_err());
        assert!(!b.tree().contains_key("sites"));
    }

    #[test]
    fn id_is_only_stamped_at_build() {
        let id = Uuid::parse_str("c10b79cf-e9cd-4979-b7e3-c75cf4727275").unwrap();
        let mut b = CalendarBuilder::with_id(id);
        b.name("x").extra("calendarId", json!("forged"));
        assert!(!b.tree().contains_key("calendarId"));
        assert_eq!(b.id(), id);
        let doc = b.into_document();
        assert_eq!(doc.calendar_id(), Some(id));
        assert_eq!(
            doc.get("calendarId"),
            Some(&json!("c10b79cf-e9cd-4979-b7e3-c75cf4727275"))
        );
    }

    #[test]
    fn fresh_builders_get_distinct_ids() {
        assert_ne!(CalendarBuilder::new().id(), CalendarBuilder::new().id());
    }

    #[test]
    fn extra_fields_pass_through() {
        let mut b = CalendarBuilder::new();
        b.extra("version", json!(2));
        assert_eq!(b.into_document().get("version"), Some(&json!(2)));
    }

    #[test]
    fn extra_ignores_reserved_keys() {
        let mut b = CalendarBuilder::new();
        b.name("Larrakia")
            .extra("seasons", json!(1))
            .extra("name", json!("forged"))
            .extra("sites", json!("nowhere"));
        assert_eq!(b.tree().len(), 1);
        assert_eq!(b.tree()["name"], "Larrakia");

        b.season(season("first"));
        assert_eq!(b.tree()["seasons"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn build_writes_what_it_returns() {
        let mut b = CalendarBuilder::new();
        b.name("Larrakia").season(season("Test"));
        let mut out = Vec::new();
        let doc = b.build(&mut out).unwrap();
        let reread = CalendarDocument::from_reader(out.as_slice()).unwrap();
        assert_eq!(reread, doc);
    }

    #[test]
    fn empty_build_has_only_the_id() {
        let mut out = Vec::new();
        let doc = CalendarBuilder::new().build(&mut out).unwrap();
        assert_eq!(doc.len(), 1);
        assert!(doc.calendar_id().is_some());
    }
}
