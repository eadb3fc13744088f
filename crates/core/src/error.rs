/// All errors that can be returned while reading, converting or writing a
/// calendar document.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// The input was not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The input was well-formed JSON but the top level was not an object.
    #[error("expected a JSON object at the top level, found {found}")]
    Schema { found: &'static str },

    /// GeoJSON text that is not a feature collection, or a failure while
    /// round-tripping a feature collection into the generic tree.
    #[error("invalid GeoJSON feature collection: {reason}")]
    Format { reason: String },

    /// A value handed to the encoder has no JSON representation, e.g. a map
    /// with non-string keys.
    #[error("value cannot be encoded as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The underlying stream could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalendarError {
    /// Classify a `serde_json` failure: stream failures surface as `Io`,
    /// everything else as `Parse`.
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        if err.is_io() {
            CalendarError::Io(err.into())
        } else {
            CalendarError::Parse(err)
        }
    }

    /// Same split as [`CalendarError::from_json`], for the encoding side.
    pub(crate) fn from_json_write(err: serde_json::Error) -> Self {
        if err.is_io() {
            CalendarError::Io(err.into())
        } else {
            CalendarError::Encode(err)
        }
    }

    pub(crate) fn format(reason: impl std::fmt::Display) -> Self {
        CalendarError::Format {
            reason: reason.to_string(),
        }
    }
}
