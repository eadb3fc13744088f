//! TOML calendar manifests: the file-based front end to `CalendarBuilder`.

use std::fs;
use std::path::{Path, PathBuf};

use palmtree_core::{CalendarBuilder, CalendarError, Organisation, Season};
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;
use uuid::Uuid;

/// Errors raised while loading a manifest or applying it to a builder.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("error reading '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing manifest '{}': {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("sites '{}': {source}", .path.display())]
    Sites {
        path: PathBuf,
        source: CalendarError,
    },
}

/// Top-level calendar manifest.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarManifest {
    /// Calendar identifier; a random one is generated when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<Url>,
    pub how: Option<String>,
    pub image_url: Option<Url>,
    pub license_url: Option<Url>,
    pub limitations: Option<String>,
    pub multimedia: Option<String>,
    pub reference: Option<String>,
    pub reference_link: Option<String>,
    pub why: Option<String>,
    /// GeoJSON feature collection file, relative to the manifest.
    pub sites: Option<PathBuf>,
    pub organisation: Option<OrganisationToml>,
    #[serde(default)]
    pub seasons: Vec<SeasonToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrganisationToml {
    pub name: String,
    pub contact_name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonToml {
    pub name_english: String,
    pub weather_icon: String,
    pub name: String,
    pub months: String,
    pub description: String,
    /// Free-form feature tables. TOML datetimes become their RFC 3339 text.
    #[serde(default)]
    pub features: Vec<toml::Table>,
}

impl From<SeasonToml> for Season {
    fn from(s: SeasonToml) -> Self {
        Season::new(
            s.name_english,
            s.weather_icon,
            s.name,
            s.months,
            s.description,
            s.features.into_iter().map(table_to_map).collect(),
        )
    }
}

fn table_to_map(table: toml::Table) -> Map<String, Value> {
    table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect()
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        // NaN and infinities have no JSON form.
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(table_to_map(table)),
    }
}

impl CalendarManifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ManifestError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Apply every field to a new builder. `base_dir` anchors a relative
    /// `sites` path.
    pub fn into_builder(self, base_dir: &Path) -> Result<CalendarBuilder, ManifestError> {
        let mut builder = match self.id {
            Some(id) => CalendarBuilder::with_id(id),
            None => CalendarBuilder::new(),
        };

        if let Some(name) = self.name {
            builder.name(name);
        }
        if let Some(status) = self.status {
            builder.status(status);
        }
        if let Some(description) = self.description {
            builder.description(description);
        }
        if let Some(how) = self.how {
            builder.how(how);
        }
        if let Some(limitations) = self.limitations {
            builder.limitations(limitations);
        }
        if let Some(multimedia) = self.multimedia {
            builder.multimedia(multimedia);
        }
        if let Some(reference) = self.reference {
            builder.reference(reference);
        }
        if let Some(reference_link) = self.reference_link {
            builder.reference_link(reference_link);
        }
        if let Some(why) = self.why {
            builder.why(why);
        }
        if let Some(url) = &self.external_link {
            builder.external_link(url);
        }
        if let Some(url) = &self.image_url {
            builder.image_url(url);
        }
        if let Some(url) = &self.license_url {
            builder.license_url(url);
        }
        if let Some(org) = self.organisation {
            builder.organisation_details(Organisation::new(
                org.name,
                org.contact_name,
                org.description,
            ));
        }
        for season in self.seasons {
            builder.season(season.into());
        }

        if let Some(sites) = self.sites {
            let path = base_dir.join(sites);
            tracing::debug!(path = %path.display(), "loading sites");
            let geojson = fs::read_to_string(&path).map_err(|source| ManifestError::Read {
                path: path.clone(),
                source,
            })?;
            builder
                .sites(geojson.as_str())
                .map_err(|source| ManifestError::Sites { path, source })?;
        }

        Ok(builder)
    }
}
