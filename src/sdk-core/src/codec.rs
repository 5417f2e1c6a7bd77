// Copyright 2025 Watson SDK for Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Wire serialization, driven by the model descriptor.
//!
//! There is exactly one serializer and one deserializer in the SDK, and both
//! walk the [ModelDescriptor] tables: field order, wire names, value kinds,
//! and write-only markers all come from the schema, never from per-type
//! code.
//!
//! Serialization emits the JSON body of a model — its Body-located fields,
//! keyed by wire name, in declaration order. Write-only fields (request
//! secrets) are included; binary parts never are. Deserialization accepts a
//! JSON payload and rebuilds a [Model], ignoring wire fields the schema does
//! not declare and never populating write-only fields. For any valid model
//! `m`, deserializing its serialized form yields `m.redacted()`.

use crate::Value;
use crate::error::Error;
use crate::model::Model;
use serde::de::{DeserializeSeed, MapAccess, Visitor};
use std::collections::HashMap;
use wkt::schema::{FieldKind, Location, ModelDescriptor};

/// Serializes a model to its wire JSON body.
///
/// # Examples
/// ```
/// # use watson_sdk_core::{codec, model::Builder};
/// # use wkt::schema::{FieldKind, FieldSchema, Location, ModelDescriptor};
/// # static DESC: std::sync::LazyLock<ModelDescriptor> = std::sync::LazyLock::new(|| {
/// #     ModelDescriptor::new(
/// #         "CreateCollectionOptions",
/// #         vec![
/// #             FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
/// #                 .set_location(Location::Path),
/// #             FieldSchema::required("name", "name", FieldKind::Str),
/// #         ],
/// #         vec![],
/// #     ).expect("well-formed")
/// # });
/// let model = Builder::new(&DESC)
///     .set("environment_id", "env-1")
///     .set("name", "docs")
///     .build()?;
/// // Path-located fields do not appear in the body.
/// assert_eq!(codec::serialize(&model)?, serde_json::json!({"name": "docs"}));
/// # Ok::<(), watson_sdk_core::error::Error>(())
/// ```
pub fn serialize(model: &Model) -> Result<serde_json::Value, Error> {
    serde_json::to_value(model).map_err(Error::ser)
}

/// Deserializes a wire JSON payload into a model of the given shape.
pub fn deserialize(
    descriptor: &'static ModelDescriptor,
    payload: serde_json::Value,
) -> Result<Model, Error> {
    DescriptorSeed(descriptor)
        .deserialize(payload)
        .map_err(Error::deser)
}

/// Implement [`serde`](::serde) serialization for models.
///
/// Only Body-located fields are emitted: path, query, and header fields are
/// routed by [request::bind][crate::request::bind], and binary parts travel
/// as multipart form data.
impl serde::ser::Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeMap;
        let fields = self
            .descriptor()
            .fields()
            .iter()
            .filter(|f| f.location() == Location::Body)
            .filter(|f| !matches!(f.kind(), FieldKind::Binary))
            .filter_map(|f| self.get(f.name()).map(|v| (f.wire_name(), v)))
            .collect::<Vec<_>>();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (wire_name, value) in fields {
            map.serialize_entry(wire_name, &WireValue(value))?;
        }
        map.end()
    }
}

struct WireValue<'a>(&'a Value);

impl serde::ser::Serialize for WireValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeSeq;
        match self.0 {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Integer(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::Boolean(v) => serializer.serialize_bool(*v),
            Value::DateTime(ts) => serializer.serialize_str(&String::from(*ts)),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&WireValue(item))?;
                }
                seq.end()
            }
            Value::Json(v) => v.serialize(serializer),
            Value::Model(m) => m.serialize(serializer),
            Value::Binary(_) => Err(serde::ser::Error::custom(
                "binary parts are never carried in JSON",
            )),
        }
    }
}

/// A [DeserializeSeed] that rebuilds a [Model] of a known shape.
///
/// Wire fields the schema does not declare are ignored; write-only fields
/// are never populated; `null` clears nothing and sets nothing.
pub struct DescriptorSeed(pub &'static ModelDescriptor);

impl<'de> DeserializeSeed<'de> for DescriptorSeed {
    type Value = Model;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(DescriptorVisitor(self.0))
    }
}

struct DescriptorVisitor(&'static ModelDescriptor);

impl<'de> Visitor<'de> for DescriptorVisitor {
    type Value = Model;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a JSON object for {}", self.0.type_name())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        use serde::de::Error as _;
        let mut values = HashMap::new();
        while let Some(key) = map.next_key::<String>()? {
            let Some(field) = self.0.field_by_wire_name(&key) else {
                let _ = map.next_value::<serde::de::IgnoredAny>()?;
                continue;
            };
            if field.is_write_only() {
                let _ = map.next_value::<serde::de::IgnoredAny>()?;
                continue;
            }
            let raw = map.next_value::<serde_json::Value>()?;
            if raw.is_null() {
                continue;
            }
            let value = value_from_wire(field.kind(), raw).map_err(|e| {
                A::Error::custom(format!(
                    "field `{}` of {}: {e}",
                    field.name(),
                    self.0.type_name()
                ))
            })?;
            values.insert(field.name(), value);
        }
        Ok(Model::from_parts(self.0, values))
    }
}

/// The wire JSON for a single value, used when a field travels outside the
/// request body (query parameters, multipart text parts).
pub(crate) fn value_to_json(value: &Value) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(WireValue(value))
}

/// Coerces a wire JSON value into the declared field kind.
pub(crate) fn value_from_wire(
    kind: &FieldKind,
    raw: serde_json::Value,
) -> Result<Value, CoerceError> {
    match kind {
        FieldKind::Str | FieldKind::Enum(_) => match raw {
            serde_json::Value::String(s) => Ok(Value::Str(s)),
            other => Err(CoerceError::mismatch("a string", &other)),
        },
        FieldKind::Integer => raw
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Value::Integer)
            .ok_or_else(|| CoerceError::mismatch("a 32-bit integer", &raw)),
        FieldKind::Long => raw
            .as_i64()
            .map(Value::Long)
            .ok_or_else(|| CoerceError::mismatch("a 64-bit integer", &raw)),
        FieldKind::Double => raw
            .as_f64()
            .map(Value::Double)
            .ok_or_else(|| CoerceError::mismatch("a number", &raw)),
        FieldKind::Boolean => raw
            .as_bool()
            .map(Value::Boolean)
            .ok_or_else(|| CoerceError::mismatch("a boolean", &raw)),
        FieldKind::DateTime => match raw {
            serde_json::Value::String(s) => wkt::Timestamp::try_from(&s)
                .map(Value::DateTime)
                .map_err(CoerceError::from),
            other => Err(CoerceError::mismatch("a timestamp string", &other)),
        },
        FieldKind::Object(descriptor) => DescriptorSeed(descriptor)
            .deserialize(raw)
            .map(Value::Model)
            .map_err(|e| CoerceError::Nested(e.to_string())),
        FieldKind::ListOf(inner) => match raw {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| value_from_wire(inner, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            other => Err(CoerceError::mismatch("an array", &other)),
        },
        FieldKind::Json => Ok(Value::Json(raw)),
        FieldKind::Binary => Err(CoerceError::Binary),
        // `FieldKind` is `#[non_exhaustive]`; every variant known to this
        // crate is handled above.
        _ => unreachable!("unhandled FieldKind variant"),
    }
}

/// A wire value that does not match its declared kind.
#[derive(thiserror::Error, Debug)]
pub(crate) enum CoerceError {
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error(transparent)]
    Timestamp(#[from] wkt::TimestampError),
    #[error("{0}")]
    Nested(String),
    #[error("binary parts are never carried in JSON")]
    Binary,
}

impl CoerceError {
    fn mismatch(expected: &'static str, found: &serde_json::Value) -> Self {
        let found = match found {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        Self::Mismatch { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Builder;
    use serde_json::json;
    use std::sync::LazyLock;
    use wkt::schema::FieldSchema;

    static EXAMPLE: LazyLock<ModelDescriptor> = LazyLock::new(|| {
        ModelDescriptor::new(
            "TrainingExample",
            vec![
                FieldSchema::optional("document_id", "document_id", FieldKind::Str),
                FieldSchema::optional("cross_reference", "cross_reference", FieldKind::Str),
                FieldSchema::optional("relevance", "relevance", FieldKind::Integer),
            ],
            vec![],
        )
        .expect("test descriptor is well-formed")
    });

    static QUERY: LazyLock<ModelDescriptor> = LazyLock::new(|| {
        ModelDescriptor::new(
            "TrainingQuery",
            vec![
                FieldSchema::optional("query_id", "query_id", FieldKind::Str),
                FieldSchema::optional(
                    "natural_language_query",
                    "natural_language_query",
                    FieldKind::Str,
                ),
                FieldSchema::optional("created", "created", FieldKind::DateTime),
                FieldSchema::optional(
                    "examples",
                    "examples",
                    FieldKind::ListOf(Box::new(FieldKind::Object(&EXAMPLE))),
                ),
                FieldSchema::optional("password", "password", FieldKind::Str).set_write_only(),
                FieldSchema::optional("metadata", "metadata", FieldKind::Json),
            ],
            vec![],
        )
        .expect("test descriptor is well-formed")
    });

    fn example(id: &str, relevance: i32) -> Model {
        Builder::new(&EXAMPLE)
            .set("document_id", id)
            .set("relevance", relevance)
            .build()
            .expect("example builds")
    }

    #[test]
    fn serialize_uses_wire_names_and_skips_absent_fields() -> anyhow::Result<()> {
        let model = Builder::new(&QUERY)
            .set("natural_language_query", "what is a collection?")
            .build()?;
        let got = serialize(&model)?;
        assert_eq!(got, json!({"natural_language_query": "what is a collection?"}));
        Ok(())
    }

    #[test]
    fn nested_models_and_timestamps() -> anyhow::Result<()> {
        let created = wkt::Timestamp::new(1575002733, 123_000_000)?;
        let model = Builder::new(&QUERY)
            .set("query_id", "q-1")
            .set("created", created)
            .append("examples", example("doc-1", 5))
            .append("examples", example("doc-2", 2))
            .build()?;
        let got = serialize(&model)?;
        assert_eq!(
            got,
            json!({
                "query_id": "q-1",
                "created": "2019-11-29T04:45:33.123Z",
                "examples": [
                    {"document_id": "doc-1", "relevance": 5},
                    {"document_id": "doc-2", "relevance": 2},
                ],
            })
        );
        Ok(())
    }

    #[test]
    fn deserialize_maps_wire_names_back() -> anyhow::Result<()> {
        let payload = json!({
            "query_id": "q-1",
            "natural_language_query": "what is a collection?",
            "created": "2019-11-29T04:45:33.123Z",
            "examples": [{"document_id": "doc-1", "relevance": 5}],
            "unknown_field": {"ignored": true},
        });
        let model = deserialize(&QUERY, payload)?;
        assert_eq!(model.get_str("query_id"), Some("q-1"));
        assert_eq!(
            model.get_date_time("created"),
            Some(wkt::Timestamp::new(1575002733, 123_000_000)?)
        );
        let examples = model.get_list("examples").expect("examples is set");
        assert_eq!(examples.len(), 1);
        assert_eq!(
            examples[0].as_model().and_then(|m| m.get_integer("relevance")),
            Some(5)
        );
        Ok(())
    }

    #[test]
    fn roundtrip_equals_redacted() -> anyhow::Result<()> {
        let model = Builder::new(&QUERY)
            .set("query_id", "q-1")
            .set("password", "hunter2")
            .set("metadata", json!({"creator": "tests"}))
            .append("examples", example("doc-1", 5))
            .append("examples", example("doc-2", 2))
            .build()?;
        let back = deserialize(&QUERY, serialize(&model)?)?;
        assert_eq!(back, model.redacted());
        // The secret was serialized for the service, but never read back.
        assert_eq!(serialize(&model)?.get("password"), Some(&json!("hunter2")));
        assert_eq!(back.get_str("password"), None);
        Ok(())
    }

    #[test]
    fn list_order_survives_the_wire() -> anyhow::Result<()> {
        let model = Builder::new(&QUERY)
            .append("examples", example("first", 1))
            .append("examples", example("second", 2))
            .build()?;
        let back = deserialize(&QUERY, serialize(&model)?)?;
        let ids = back
            .get_list("examples")
            .expect("examples is set")
            .iter()
            .map(|v| v.as_model().and_then(|m| m.get_str("document_id")).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["first", "second"]);
        Ok(())
    }

    #[test]
    fn null_fields_are_treated_as_absent() -> anyhow::Result<()> {
        let model = deserialize(&QUERY, json!({"query_id": null}))?;
        assert_eq!(model.get_str("query_id"), None);
        Ok(())
    }

    #[test]
    fn kind_mismatch_names_the_field() {
        let got = deserialize(&QUERY, json!({"created": 12345}));
        let err = got.expect_err("created must be a timestamp string");
        assert!(err.is_deserialization(), "{err:?}");
        assert!(err.to_string().contains("created"), "{err}");
    }

    #[test]
    fn payload_must_be_an_object() {
        let got = deserialize(&QUERY, json!(["not", "an", "object"]));
        let err = got.expect_err("arrays are not models");
        assert!(err.is_deserialization(), "{err:?}");
        assert!(err.to_string().contains("TrainingQuery"), "{err}");
    }

    #[test]
    fn integer_width_is_checked() {
        let got = deserialize(&QUERY, json!({"examples": [{"relevance": 5_000_000_000_i64}]}));
        let err = got.expect_err("relevance is 32-bit");
        assert!(err.is_deserialization(), "{err:?}");
    }
}
