//! A built calendar document with typed access to the reserved keys.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::codec;
use crate::error::CalendarError;
use crate::keys;
use crate::season::{Organisation, Season};

/// A calendar document: a top-level JSON object.
///
/// The tree stays open-ended; reserved keys get accessors and anything else
/// is reachable through [`CalendarDocument::as_map`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDocument {
    fields: Map<String, Value>,
}

impl CalendarDocument {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        CalendarDocument { fields }
    }

    /// Decode a document from JSON text. Any object is accepted, whatever
    /// keys it carries.
    pub fn from_reader<R: Read>(input: R) -> Result<Self, CalendarError> {
        codec::read(input).map(Self::from_map)
    }

    /// Encode the document with the calendar pretty-print layout.
    pub fn write<W: Write>(&self, output: W) -> Result<(), CalendarError> {
        codec::write(&self.fields, output)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// The `calendarId`, when present and a valid UUID.
    pub fn calendar_id(&self) -> Option<Uuid> {
        self.text(keys::CALENDAR_ID)
            .and_then(|s| Uuid::parse_str(s).ok())
    }

    pub fn name(&self) -> Option<&str> {
        self.text(keys::NAME)
    }

    pub fn status(&self) -> Option<&str> {
        self.text(keys::STATUS)
    }

    pub fn description(&self) -> Option<&str> {
        self.text(keys::DESCRIPTION)
    }

    pub fn external_link(&self) -> Option<&str> {
        self.text(keys::EXTERNAL_LINK)
    }

    pub fn how(&self) -> Option<&str> {
        self.text(keys::HOW)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.text(keys::IMAGE_URL)
    }

    pub fn license_url(&self) -> Option<&str> {
        self.text(keys::LICENSE_URL)
    }

    pub fn limitations(&self) -> Option<&str> {
        self.text(keys::LIMITATIONS)
    }

    pub fn multimedia(&self) -> Option<&str> {
        self.text(keys::MULTIMEDIA)
    }

    pub fn reference(&self) -> Option<&str> {
        self.text(keys::REFERENCE)
    }

    pub fn reference_link(&self) -> Option<&str> {
        self.text(keys::REFERENCE_LINK)
    }

    pub fn why(&self) -> Option<&str> {
        self.text(keys::WHY)
    }

    pub fn organisation(&self) -> Option<Organisation> {
        self.fields
            .get(keys::ORGANISATION)
            .and_then(Value::as_object)
            .and_then(Organisation::from_tree)
    }

    /// The raw `seasons` array.
    pub fn seasons(&self) -> Option<&Vec<Value>> {
        self.fields.get(keys::SEASONS).and_then(Value::as_array)
    }

    /// Seasons decoded into records; entries missing a scalar field are skipped.
    pub fn season_records(&self) -> Vec<Season> {
        self.seasons()
            .map(|arr| {
                arr.iter()
                    .filter_map(Value::as_object)
                    .filter_map(Season::from_tree)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The `sites` feature collection tree.
    pub fn sites(&self) -> Option<&Map<String, Value>> {
        self.fields.get(keys::SITES).and_then(Value::as_object)
    }

    /// Reserved keys this document does not carry, in canonical order.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        keys::TOP_LEVEL
            .iter()
            .copied()
            .filter(|k| !self.fields.contains_key(*k))
            .collect()
    }
}

impl From<CalendarDocument> for Value {
    fn from(doc: CalendarDocument) -> Self {
        Value::Object(doc.fields)
    }
}
