//! Record generated under the lower-camel-case naming convention.
//!
//! The field is stored as `foo_bar` and travels as `fooBar`.

use std::fmt;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::error::ValueError;
use crate::field::FieldKey;

const FOO_BAR: FieldKey = FieldKey::new("foo_bar", "fooBar");

/// Single-field record. `Null` in `foo_bar` means unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    foo_bar: JsonValue,
}

impl Value {
    pub const FIELDS: &'static [FieldKey] = &[FOO_BAR];

    /// Non-finite floats have no JSON form and arrive here already as
    /// `Null` (see `serde_json::Value::from(f64)`), so `encode` rejects them.
    pub fn new(foo_bar: JsonValue) -> Self {
        Self { foo_bar }
    }

    pub fn foo_bar(&self) -> &JsonValue {
        &self.foo_bar
    }

    pub fn into_foo_bar(self) -> JsonValue {
        self.foo_bar
    }

    /// Reads a record from its object form.
    ///
    /// The value under `fooBar` is taken as-is, `null` included. Keys other
    /// than `fooBar` are ignored.
    pub fn decode(data: &Map<String, JsonValue>) -> Result<Self, ValueError> {
        let foo_bar = data.get(FOO_BAR.key).cloned().ok_or_else(|| {
            tracing::debug!(key = FOO_BAR.key, "decode: missing key");
            ValueError::MissingKey { key: FOO_BAR.key }
        })?;
        Ok(Self { foo_bar })
    }

    /// Like [`Value::decode`], but accepts any JSON value and rejects
    /// non-objects.
    pub fn decode_value(data: &JsonValue) -> Result<Self, ValueError> {
        match data {
            JsonValue::Object(map) => Self::decode(map),
            _ => Err(ValueError::NotAnObject),
        }
    }

    /// Produces a fresh object form of this record.
    ///
    /// Fails when `foo_bar` is null.
    pub fn encode(&self) -> Result<Map<String, JsonValue>, ValueError> {
        if self.foo_bar.is_null() {
            tracing::debug!(key = FOO_BAR.key, "encode: required field is null");
            return Err(ValueError::RequiredField { key: FOO_BAR.key });
        }
        let mut data = Map::new();
        data.insert(FOO_BAR.key.to_string(), self.foo_bar.clone());
        Ok(data)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ValueError> {
        let data: JsonValue = serde_json::from_str(text)?;
        Self::decode_value(&data)
    }

    pub fn to_json_string(&self) -> Result<String, ValueError> {
        Ok(serde_json::to_string(&self.encode()?)?)
    }
}

impl From<JsonValue> for Value {
    fn from(foo_bar: JsonValue) -> Self {
        Self { foo_bar }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Value {}:{}>", FOO_BAR.name, self.foo_bar)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = self.encode().map_err(<S::Error as ser::Error>::custom)?;
        data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Map::<String, JsonValue>::deserialize(deserializer)?;
        Self::decode(&data).map_err(de::Error::custom)
    }
}
