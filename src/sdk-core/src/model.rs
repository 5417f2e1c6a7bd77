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

//! Models and their builders.
//!
//! A [Model] is an immutable set of field values conforming to a
//! [ModelDescriptor]. Models are produced by a [Builder], which runs the
//! [validator][crate::validator] before freezing its state: `build()` either
//! yields a fully valid model or an error, never something in between.

use crate::Value;
use crate::error::Error;
use std::collections::HashMap;
use wkt::schema::{FieldKind, ModelDescriptor, SchemaError};

/// An immutable, validated set of field values.
///
/// Once built, a model never changes; it is safe to share across threads.
/// Typed accessors return `None` for fields that are absent or hold a value
/// of a different kind.
///
/// Equality compares the descriptor identity and every field value. Two
/// models of different shapes are never equal.
#[derive(Clone, Debug)]
pub struct Model {
    descriptor: &'static ModelDescriptor,
    values: HashMap<&'static str, Value>,
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.descriptor, other.descriptor) && self.values == other.values
    }
}

impl Model {
    pub(crate) fn from_parts(
        descriptor: &'static ModelDescriptor,
        values: HashMap<&'static str, Value>,
    ) -> Self {
        Self { descriptor, values }
    }

    /// The shape this model conforms to.
    pub fn descriptor(&self) -> &'static ModelDescriptor {
        self.descriptor
    }

    /// The raw value of a field, if set.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The string content of a field.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// The 32-bit integer content of a field.
    pub fn get_integer(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(Value::as_integer)
    }

    /// The 64-bit integer content of a field.
    pub fn get_long(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_long)
    }

    /// The float content of a field.
    pub fn get_double(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_double)
    }

    /// The boolean content of a field.
    pub fn get_boolean(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_boolean)
    }

    /// The timestamp content of a field.
    pub fn get_date_time(&self, name: &str) -> Option<wkt::Timestamp> {
        self.get(name).and_then(Value::as_date_time)
    }

    /// The elements of a list field.
    pub fn get_list(&self, name: &str) -> Option<&[Value]> {
        self.get(name).and_then(Value::as_list)
    }

    /// The free-form JSON content of a field.
    pub fn get_json(&self, name: &str) -> Option<&serde_json::Value> {
        self.get(name).and_then(Value::as_json)
    }

    /// The nested model held by a field.
    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.get(name).and_then(Value::as_model)
    }

    /// The binary part held by a field.
    pub fn get_binary(&self, name: &str) -> Option<&wkt::BinaryPart> {
        self.get(name).and_then(Value::as_binary)
    }

    /// Creates a builder seeded with every field of this model.
    ///
    /// Supports clone-and-modify workflows:
    ///
    /// ```
    /// # use watson_sdk_core::model::{Builder, Model};
    /// # use watson_sdk_core::error::Error;
    /// # fn example(original: &Model) -> Result<Model, Error> {
    /// let changed = original.new_builder().set("description", "updated").build()?;
    /// # Ok(changed) }
    /// ```
    pub fn new_builder(&self) -> Builder {
        Builder::from(self)
    }

    /// A copy of this model without its write-only fields.
    ///
    /// This is the view of the model the service would echo back: secrets
    /// are settable on requests but never returned. Nested models and lists
    /// of models are redacted recursively.
    pub fn redacted(&self) -> Model {
        fn redact(value: &Value) -> Value {
            match value {
                Value::Model(m) => Value::Model(m.redacted()),
                Value::List(items) => Value::List(items.iter().map(redact).collect()),
                other => other.clone(),
            }
        }
        let values = self
            .values
            .iter()
            .filter(|(name, _)| {
                self.descriptor
                    .field(name)
                    .is_none_or(|f| !f.is_write_only())
            })
            .map(|(name, value)| (*name, redact(value)))
            .collect();
        Self {
            descriptor: self.descriptor,
            values,
        }
    }
}

/// A typed wrapper over a [Model] of one fixed shape.
///
/// Generated model types implement this trait to expose the shared
/// machinery — wire serialization and deserialization — without repeating
/// it per type. The four required methods are mechanical; everything else
/// is provided.
pub trait TypedModel: Sized {
    /// The shape every value of this type conforms to.
    fn descriptor() -> &'static ModelDescriptor;

    /// Borrows the underlying model.
    fn model(&self) -> &Model;

    /// Unwraps the underlying model.
    fn into_model(self) -> Model;

    /// Wraps a model of this type's shape.
    fn from_model(model: Model) -> Self;

    /// Deserializes a wire payload into this type.
    fn from_json(value: serde_json::Value) -> Result<Self, Error> {
        crate::codec::deserialize(Self::descriptor(), value).map(Self::from_model)
    }

    /// Serializes this value to its wire JSON body.
    fn to_json(&self) -> Result<serde_json::Value, Error> {
        crate::codec::serialize(self.model())
    }
}

/// A mutable accumulator of field values, consumed by `build()`.
///
/// Builders are created empty ([Builder::new]) or seeded from an existing
/// model ([Builder::from]). Setters are fluent and overwrite any previous
/// value; [append][Builder::append] lazily allocates list fields and
/// preserves call order. A builder is confined to one call sequence — it is
/// not meant to be shared across threads.
///
/// # Examples
/// ```
/// # use watson_sdk_core::model::Builder;
/// # use wkt::schema::{FieldKind, FieldSchema, ModelDescriptor};
/// # static DESC: std::sync::LazyLock<ModelDescriptor> = std::sync::LazyLock::new(|| {
/// #     ModelDescriptor::new(
/// #         "Example",
/// #         vec![FieldSchema::required("name", "name", FieldKind::Str)],
/// #         vec![],
/// #     ).expect("well-formed")
/// # });
/// let model = Builder::new(&DESC).set("name", "docs").build()?;
/// assert_eq!(model.get_str("name"), Some("docs"));
/// # Ok::<(), watson_sdk_core::error::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    descriptor: &'static ModelDescriptor,
    values: HashMap<&'static str, Value>,
    deferred: Vec<SchemaError>,
}

impl Builder {
    /// Creates an empty builder for the given shape.
    pub fn new(descriptor: &'static ModelDescriptor) -> Self {
        Self {
            descriptor,
            values: HashMap::new(),
            deferred: Vec::new(),
        }
    }

    /// Creates a builder seeded with every field of an existing model.
    pub fn from(model: &Model) -> Self {
        Self {
            descriptor: model.descriptor,
            values: model.values.clone(),
            deferred: Vec::new(),
        }
    }

    /// The shape this builder accumulates values for.
    pub fn descriptor(&self) -> &'static ModelDescriptor {
        self.descriptor
    }

    /// Sets a field, overwriting any previous value.
    ///
    /// Writing to a field the descriptor does not declare is a programming
    /// error; it is remembered and reported by `build()` rather than
    /// panicking here.
    pub fn set<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        match self.descriptor.field(name) {
            Some(f) => {
                self.values.insert(f.name(), value.into());
            }
            None => self.deferred.push(SchemaError::UnknownField {
                type_name: self.descriptor.type_name(),
                field: name.to_string(),
            }),
        }
        self
    }

    /// Removes a field.
    pub fn unset(mut self, name: &str) -> Self {
        self.values.remove(name);
        self
    }

    /// Appends an element to a list field.
    ///
    /// The first call allocates the list; later calls append. Call order is
    /// preserved and significant — it is the wire order of the repeated
    /// field.
    pub fn append<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        match self.descriptor.field(name) {
            None => self.deferred.push(SchemaError::UnknownField {
                type_name: self.descriptor.type_name(),
                field: name.to_string(),
            }),
            Some(f) if !matches!(f.kind(), FieldKind::ListOf(_)) => {
                self.deferred.push(SchemaError::NotAList {
                    type_name: self.descriptor.type_name(),
                    field: name.to_string(),
                })
            }
            Some(f) => {
                let entry = self
                    .values
                    .entry(f.name())
                    .or_insert_with(|| Value::List(Vec::new()));
                if let Value::List(items) = entry {
                    items.push(value.into());
                } else {
                    *entry = Value::List(vec![value.into()]);
                }
            }
        }
        self
    }

    /// Validates the accumulated values and freezes them into a [Model].
    ///
    /// Fields with a schema default that were never set are materialized
    /// first. Validation is fail-fast in field-declaration order; on failure
    /// the error names the offending field and no model is produced.
    pub fn build(self) -> Result<Model, Error> {
        let Self {
            descriptor,
            mut values,
            deferred,
        } = self;
        if let Some(e) = deferred.into_iter().next() {
            return Err(Error::schema(e));
        }
        for f in descriptor.fields() {
            if values.contains_key(f.name()) {
                continue;
            }
            if let Some(d) = f.default() {
                let v = crate::codec::value_from_wire(f.kind(), d.clone())
                    .map_err(Error::schema)?;
                values.insert(f.name(), v);
            }
        }
        crate::validator::check(descriptor, &values).map_err(Error::validation)?;
        Ok(Model { descriptor, values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use std::sync::LazyLock;
    use wkt::schema::{Constraint, FieldSchema, Location};

    static COLLECTION: LazyLock<ModelDescriptor> = LazyLock::new(|| {
        const LANGUAGES: &[&str] = &["en", "es", "de"];
        ModelDescriptor::new(
            "CreateCollectionOptions",
            vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
                FieldSchema::required("name", "name", FieldKind::Str),
                FieldSchema::optional("description", "description", FieldKind::Str),
                FieldSchema::optional("language", "language", FieldKind::Enum(LANGUAGES))
                    .set_default("en"),
                FieldSchema::optional("tags", "tags", FieldKind::ListOf(Box::new(FieldKind::Str))),
                FieldSchema::optional("password", "password", FieldKind::Str).set_write_only(),
            ],
            vec![],
        )
        .expect("test descriptor is well-formed")
    });

    static DOCUMENT: LazyLock<ModelDescriptor> = LazyLock::new(|| {
        ModelDescriptor::new(
            "AddDocumentOptions",
            vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
                FieldSchema::optional("file", "file", FieldKind::Binary)
                    .set_location(Location::Part),
                FieldSchema::optional("filename", "filename", FieldKind::Str),
            ],
            vec![Constraint::RequiresCompanion {
                if_set: "file",
                then_required: "filename",
            }],
        )
        .expect("test descriptor is well-formed")
    });

    fn collection() -> Builder {
        Builder::new(&COLLECTION)
            .set("environment_id", "env-1")
            .set("name", "docs")
    }

    #[test]
    fn build_and_read() -> anyhow::Result<()> {
        let model = collection().set("description", "my documents").build()?;
        assert_eq!(model.get_str("environment_id"), Some("env-1"));
        assert_eq!(model.get_str("name"), Some("docs"));
        assert_eq!(model.get_str("description"), Some("my documents"));
        assert_eq!(model.get_str("missing"), None);
        assert_eq!(model.get_long("name"), None);
        Ok(())
    }

    #[test]
    fn required_field_missing() {
        let got = Builder::new(&COLLECTION).set("name", "docs").build();
        let err = got.expect_err("environment_id is required");
        assert_eq!(
            err.validation_detail(),
            Some(&ValidationError::Missing {
                field: "environment_id"
            })
        );
    }

    #[test]
    fn required_field_empty() {
        let got = collection().set("name", "").build();
        let err = got.expect_err("name cannot be empty");
        assert_eq!(
            err.validation_detail(),
            Some(&ValidationError::Empty { field: "name" })
        );
    }

    #[test]
    fn unknown_field_is_deferred_to_build() {
        let got = collection().set("nope", "value").build();
        let err = got.expect_err("nope is not declared");
        assert!(err.is_schema(), "{err:?}");
        assert!(err.to_string().contains("nope"), "{err}");
    }

    #[test]
    fn append_preserves_order() -> anyhow::Result<()> {
        let model = collection()
            .append("tags", "first")
            .append("tags", "second")
            .build()?;
        let tags = model.get_list("tags").expect("tags is set");
        let tags = tags.iter().map(|v| v.as_str().unwrap()).collect::<Vec<_>>();
        assert_eq!(tags, vec!["first", "second"]);
        Ok(())
    }

    #[test]
    fn append_to_scalar_is_a_schema_error() {
        let got = collection().append("name", "x").build();
        let err = got.expect_err("name is not a list");
        assert!(err.is_schema(), "{err:?}");
        assert!(err.to_string().contains("not list-valued"), "{err}");
    }

    #[test]
    fn defaults_materialize() -> anyhow::Result<()> {
        let model = collection().build()?;
        assert_eq!(model.get_str("language"), Some("en"));
        let model = collection().set("language", "de").build()?;
        assert_eq!(model.get_str("language"), Some("de"));
        Ok(())
    }

    #[test]
    fn builder_from_model_round_trips() -> anyhow::Result<()> {
        let model = collection()
            .set("description", "my documents")
            .append("tags", "a")
            .append("tags", "b")
            .build()?;
        let copy = model.new_builder().build()?;
        assert_eq!(copy, model);
        let changed = model.new_builder().set("description", "updated").build()?;
        assert_ne!(changed, model);
        assert_eq!(changed.get_str("description"), Some("updated"));
        Ok(())
    }

    #[test]
    fn rebuilding_after_fixing_succeeds() -> anyhow::Result<()> {
        let seed = Builder::new(&COLLECTION).set("environment_id", "env-1");
        let err = seed.clone().build().expect_err("name is required");
        assert!(err.is_validation(), "{err:?}");
        let model = seed.set("name", "docs").build()?;
        assert_eq!(model.get_str("name"), Some("docs"));
        Ok(())
    }

    #[test]
    fn companion_constraint() -> anyhow::Result<()> {
        let base = Builder::new(&DOCUMENT).set("environment_id", "env-1");
        let err = base
            .clone()
            .set("file", wkt::BinaryPart::new(&b"text"[..]))
            .build()
            .expect_err("filename must accompany file");
        assert_eq!(
            err.validation_detail(),
            Some(&ValidationError::MissingCompanion {
                field: "filename",
                companion: "file"
            })
        );
        let model = base
            .set("file", wkt::BinaryPart::new(&b"text"[..]))
            .set("filename", "report.txt")
            .build()?;
        assert_eq!(model.get_binary("file").map(|b| b.data().as_ref()), Some(&b"text"[..]));
        Ok(())
    }

    #[test]
    fn redacted_drops_write_only_fields() -> anyhow::Result<()> {
        let model = collection().set("password", "hunter2").build()?;
        assert_eq!(model.get_str("password"), Some("hunter2"));
        let redacted = model.redacted();
        assert_eq!(redacted.get_str("password"), None);
        assert_eq!(redacted.get_str("name"), Some("docs"));
        assert_ne!(redacted, model);
        Ok(())
    }

    #[test]
    fn unset_removes_a_field() -> anyhow::Result<()> {
        let model = collection().set("description", "x").unset("description").build()?;
        assert_eq!(model.get_str("description"), None);
        Ok(())
    }

    #[test]
    fn models_of_different_shapes_are_never_equal() -> anyhow::Result<()> {
        let a = collection().build()?;
        let b = Builder::new(&DOCUMENT).set("environment_id", "env-1").build()?;
        assert_ne!(a, b);
        Ok(())
    }
}
