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

//! Schema declarations for request and response shapes.
//!
//! Every shape exchanged with the service is declared once, as a
//! [ModelDescriptor]: an ordered list of [FieldSchema] entries plus any
//! cross-field [Constraint]s. The descriptor drives everything downstream —
//! required-field validation, JSON serialization (including the wire-name
//! mapping), and request binding (which fields travel in the path, the
//! query, a header, the JSON body, or a multipart part).
//!
//! Descriptors are plain data. Constructing one with duplicate field names
//! is a programming error and fails with a [SchemaError].

/// The semantic type of a single field.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum FieldKind {
    /// A UTF-8 string.
    Str,
    /// A 32-bit signed integer.
    Integer,
    /// A 64-bit signed integer.
    Long,
    /// A 64-bit float.
    Double,
    /// A boolean.
    Boolean,
    /// A point in time, using the service wire format.
    DateTime,
    /// A nested model with its own descriptor.
    Object(&'static ModelDescriptor),
    /// An ordered sequence of elements, all of the same kind.
    ListOf(Box<FieldKind>),
    /// Free-form JSON the schema does not constrain.
    Json,
    /// A string restricted to a closed set of literal values.
    ///
    /// The allowed set is enforced when building request models; response
    /// payloads keep unknown literals so new service values do not break
    /// older clients.
    Enum(&'static [&'static str]),
    /// An opaque binary upload part. Never serialized to JSON.
    Binary,
}

/// Where a request field travels in the bound HTTP request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Location {
    /// Substituted into the path template.
    Path,
    /// Sent as a query parameter.
    Query,
    /// Sent as a header.
    Header,
    /// Carried in the JSON body. The default, and the only location used by
    /// response shapes.
    #[default]
    Body,
    /// Carried as a multipart form part.
    Part,
}

/// The declaration of one field of a model.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct FieldSchema {
    name: &'static str,
    wire_name: &'static str,
    kind: FieldKind,
    location: Location,
    required: bool,
    write_only: bool,
    default: Option<serde_json::Value>,
}

impl FieldSchema {
    /// Declares a field that must be present (and, for strings, non-empty)
    /// in every built model.
    pub fn required(name: &'static str, wire_name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            wire_name,
            kind,
            location: Location::default(),
            required: true,
            write_only: false,
            default: None,
        }
    }

    /// Declares a field that may be absent.
    pub fn optional(name: &'static str, wire_name: &'static str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, wire_name, kind)
        }
    }

    /// Sets where the field travels in a bound request.
    pub fn set_location(mut self, v: Location) -> Self {
        self.location = v;
        self
    }

    /// Marks the field as write-only.
    ///
    /// Write-only fields (secrets such as passwords and client secrets) are
    /// serialized on requests but never populated from responses.
    pub fn set_write_only(mut self) -> Self {
        self.write_only = true;
        self
    }

    /// Sets the value materialized when the caller provides none.
    pub fn set_default<V: Into<serde_json::Value>>(mut self, v: V) -> Self {
        self.default = Some(v.into());
        self
    }

    /// The in-language field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field name as it appears on the wire.
    pub fn wire_name(&self) -> &'static str {
        self.wire_name
    }

    /// The semantic type.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Where the field travels in a bound request.
    pub fn location(&self) -> Location {
        self.location
    }

    /// If true, building a model without this field fails.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// If true, the field is never populated from a response.
    pub fn is_write_only(&self) -> bool {
        self.write_only
    }

    /// The default value, in wire representation, if one was declared.
    pub fn default(&self) -> Option<&serde_json::Value> {
        self.default.as_ref()
    }
}

/// A cross-field invariant checked when a model is built.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Constraint {
    /// `then_required` must be set whenever `if_set` is set. Used for
    /// companion fields, e.g. a filename that must accompany an uploaded
    /// file.
    RequiresCompanion {
        if_set: &'static str,
        then_required: &'static str,
    },
}

/// The declaration of a complete request or response shape.
#[derive(Debug)]
#[non_exhaustive]
pub struct ModelDescriptor {
    type_name: &'static str,
    fields: Vec<FieldSchema>,
    constraints: Vec<Constraint>,
}

impl ModelDescriptor {
    /// Creates a descriptor, verifying its structure.
    ///
    /// Field declaration order is preserved: it is the validation order and
    /// the JSON serialization order.
    ///
    /// # Errors
    ///
    /// Fails with a [SchemaError] if two fields share a name or a wire name,
    /// or if a constraint references a field the descriptor does not
    /// declare. These are programming errors in the schema table, not
    /// runtime conditions.
    pub fn new(
        type_name: &'static str,
        fields: Vec<FieldSchema>,
        constraints: Vec<Constraint>,
    ) -> Result<Self, SchemaError> {
        for (i, f) in fields.iter().enumerate() {
            for other in fields.iter().take(i) {
                if other.name == f.name {
                    return Err(SchemaError::DuplicateField {
                        type_name,
                        field: f.name,
                    });
                }
                if other.wire_name == f.wire_name {
                    return Err(SchemaError::DuplicateWireName {
                        type_name,
                        wire_name: f.wire_name,
                    });
                }
            }
        }
        let known = |name: &str| fields.iter().any(|f| f.name == name);
        for c in &constraints {
            match c {
                Constraint::RequiresCompanion {
                    if_set,
                    then_required,
                } => {
                    for name in [*if_set, *then_required] {
                        if !known(name) {
                            return Err(SchemaError::UnknownConstraintField {
                                type_name,
                                field: name,
                            });
                        }
                    }
                }
            }
        }
        Ok(Self {
            type_name,
            fields,
            constraints,
        })
    }

    /// The name of the shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The fields, in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// The cross-field constraints, in declaration order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Finds a field by its in-language name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Finds a field by its wire name.
    pub fn field_by_wire_name(&self, wire_name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }
}

/// A structurally invalid schema declaration.
///
/// These indicate bugs in a descriptor table. They are never expected at
/// runtime with a correct schema.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SchemaError {
    /// Two fields in one descriptor share a name.
    #[error("duplicate field `{field}` in the descriptor for {type_name}")]
    DuplicateField {
        type_name: &'static str,
        field: &'static str,
    },

    /// Two fields in one descriptor share a wire name.
    #[error("duplicate wire name `{wire_name}` in the descriptor for {type_name}")]
    DuplicateWireName {
        type_name: &'static str,
        wire_name: &'static str,
    },

    /// A constraint references a field the descriptor does not declare.
    #[error("constraint references `{field}`, which {type_name} does not declare")]
    UnknownConstraintField {
        type_name: &'static str,
        field: &'static str,
    },

    /// A value was written to a field the descriptor does not declare.
    #[error("field `{field}` is not declared by {type_name}")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    /// A value was appended to a field that is not list-valued.
    #[error("field `{field}` of {type_name} is not list-valued")]
    NotAList {
        type_name: &'static str,
        field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<FieldSchema> {
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("name", "name", FieldKind::Str),
            FieldSchema::optional("description", "description", FieldKind::Str),
        ]
    }

    #[test]
    fn well_formed() {
        let d = ModelDescriptor::new("CreateCollectionOptions", fields(), vec![]).unwrap();
        assert_eq!(d.type_name(), "CreateCollectionOptions");
        assert_eq!(d.fields().len(), 3);
        assert!(d.field("name").is_some(), "{d:?}");
        assert!(d.field("nope").is_none(), "{d:?}");
        assert_eq!(
            d.field_by_wire_name("environment_id").map(|f| f.name()),
            Some("environment_id")
        );
        assert_eq!(d.field("environment_id").map(|f| f.location()), Some(Location::Path));
    }

    #[test]
    fn duplicate_field_name() {
        let mut f = fields();
        f.push(FieldSchema::optional("name", "name_2", FieldKind::Str));
        let got = ModelDescriptor::new("Broken", f, vec![]);
        assert_eq!(
            got.err(),
            Some(SchemaError::DuplicateField {
                type_name: "Broken",
                field: "name"
            })
        );
    }

    #[test]
    fn duplicate_wire_name() {
        let mut f = fields();
        f.push(FieldSchema::optional("name_2", "name", FieldKind::Str));
        let got = ModelDescriptor::new("Broken", f, vec![]);
        assert_eq!(
            got.err(),
            Some(SchemaError::DuplicateWireName {
                type_name: "Broken",
                wire_name: "name"
            })
        );
    }

    #[test]
    fn constraint_must_reference_declared_fields() {
        let c = vec![Constraint::RequiresCompanion {
            if_set: "file",
            then_required: "filename",
        }];
        let got = ModelDescriptor::new("Broken", fields(), c);
        assert_eq!(
            got.err(),
            Some(SchemaError::UnknownConstraintField {
                type_name: "Broken",
                field: "file"
            })
        );
    }

    #[test]
    fn field_modifiers() {
        let f = FieldSchema::optional("password", "password", FieldKind::Str).set_write_only();
        assert!(f.is_write_only(), "{f:?}");
        assert!(!f.is_required(), "{f:?}");
        let f = FieldSchema::optional("count", "count", FieldKind::Long).set_default(10);
        assert_eq!(f.default(), Some(&serde_json::json!(10)));
        let f = FieldSchema::optional("opt_out", "X-Watson-Logging-Opt-Out", FieldKind::Boolean)
            .set_location(Location::Header);
        assert_eq!(f.location(), Location::Header);
    }
}
