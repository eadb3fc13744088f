//! Season and organisation records.
//!
//! Both are plain value types that convert into tree objects with their keys
//! in a fixed order. Season features are carried as opaque objects.

use serde_json::{Map, Value};

use crate::keys;

/// The organisation responsible for a calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organisation {
    pub name: String,
    pub contact_name: String,
    pub description: String,
}

impl Organisation {
    pub fn new(
        name: impl Into<String>,
        contact_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Organisation {
            name: name.into(),
            contact_name: contact_name.into(),
            description: description.into(),
        }
    }

    /// Read an organisation back out of a tree object. Returns `None` unless
    /// all three keys hold strings.
    pub fn from_tree(obj: &Map<String, Value>) -> Option<Self> {
        Some(Organisation {
            name: obj.get(keys::organisation::NAME)?.as_str()?.to_string(),
            contact_name: obj
                .get(keys::organisation::CONTACT_NAME)?
                .as_str()?
                .to_string(),
            description: obj
                .get(keys::organisation::DESCRIPTION)?
                .as_str()?
                .to_string(),
        })
    }
}

impl From<Organisation> for Map<String, Value> {
    fn from(org: Organisation) -> Self {
        let mut map = Map::new();
        map.insert(keys::organisation::NAME.to_string(), Value::String(org.name));
        map.insert(
            keys::organisation::CONTACT_NAME.to_string(),
            Value::String(org.contact_name),
        );
        map.insert(
            keys::organisation::DESCRIPTION.to_string(),
            Value::String(org.description),
        );
        map
    }
}

/// One season of a calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub name_english: String,
    pub weather_icon: String,
    pub name: String,
    pub months: String,
    pub description: String,
    /// Caller-defined feature objects (species, thumbnails, ...).
    pub features: Vec<Map<String, Value>>,
}

impl Season {
    pub fn new(
        name_english: impl Into<String>,
        weather_icon: impl Into<String>,
        name: impl Into<String>,
        months: impl Into<String>,
        description: impl Into<String>,
        features: Vec<Map<String, Value>>,
    ) -> Self {
        Season {
            name_english: name_english.into(),
            weather_icon: weather_icon.into(),
            name: name.into(),
            months: months.into(),
            description: description.into(),
            features,
        }
    }

    /// Read a season back out of a tree object. Non-object entries in
    /// `features` are skipped.
    pub fn from_tree(obj: &Map<String, Value>) -> Option<Self> {
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        let features = obj
            .get(keys::season::FEATURES)
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(|f| f.as_object().cloned()).collect())
            .unwrap_or_default();
        Some(Season {
            name_english: text(keys::season::NAME_ENGLISH)?,
            weather_icon: text(keys::season::WEATHER_ICON)?,
            name: text(keys::season::NAME)?,
            months: text(keys::season::MONTHS)?,
            description: text(keys::season::DESCRIPTION)?,
            features,
        })
    }
}

impl From<Season> for Map<String, Value> {
    fn from(season: Season) -> Self {
        let mut map = Map::new();
        map.insert(
            keys::season::NAME_ENGLISH.to_string(),
            Value::String(season.name_english),
        );
        map.insert(
            keys::season::WEATHER_ICON.to_string(),
            Value::String(season.weather_icon),
        );
        map.insert(keys::season::NAME.to_string(), Value::String(season.name));
        map.insert(keys::season::MONTHS.to_string(), Value::String(season.months));
        map.insert(
            keys::season::DESCRIPTION.to_string(),
            Value::String(season.description),
        );
        map.insert(
            keys::season::FEATURES.to_string(),
            Value::Array(season.features.into_iter().map(Value::Object).collect()),
        );
        map
    }
}
