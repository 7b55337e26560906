use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::FetchError;

/// Opaque identifier of a photo record, supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Viewport size in CSS pixels, read from the environment when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Metadata for one photo, tagged with the id it was fetched for.
///
/// Fields other than the id are kept as raw JSON; only the source resolver
/// looks inside them.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoRecord {
    id: PhotoId,
    fields: Map<String, Value>,
}

impl PhotoRecord {
    /// Tag a decoded metadata document with the id it was requested for.
    ///
    /// Any `id` in the document is overridden by the requested one.
    pub fn tagged(id: PhotoId, document: Value) -> Result<Self, FetchError> {
        match document {
            Value::Object(mut fields) => {
                fields.insert("id".to_string(), Value::String(id.to_string()));
                Ok(Self { id, fields })
            }
            other => Err(FetchError::Malformed(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn id(&self) -> &PhotoId {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Look up a nested field by path, e.g. `["file", "url"]`.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.fields.get(*first)?, |value, key| value.get(*key))
    }
}

/// Classify a metadata response.
///
/// Any non-2xx status is a failure regardless of body; a 2xx body must be
/// JSON. Whether it is a usable record is decided by [`PhotoRecord::tagged`].
pub fn decode_metadata(status: u16, body: &[u8]) -> Result<Value, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_slice(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
