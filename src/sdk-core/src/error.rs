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

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by the model layer.
///
/// Errors come from a handful of sources: the schema table itself may be
/// misused (a programming error), a request model may fail validation at
/// build time, a built model may not bind to a request URL, or a payload may
/// fail to serialize or deserialize. The external transport's failures pass
/// through with the [transport][Error::transport] kind.
///
/// Most applications return or log the error. Code that wants to react to a
/// specific failure can use the predicates (`is_validation()`, …) and the
/// typed detail accessors.
///
/// # Examples
/// ```
/// use watson_sdk_core::error::Error;
/// fn report(e: Error) {
///     if let Some(detail) = e.validation_detail() {
///         println!("fix the request and retry: {detail}");
///     } else {
///         println!("{e}");
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error for a structurally invalid schema or a write to an
    /// undeclared field.
    ///
    /// These are programming errors; they are not expected at runtime with a
    /// correct descriptor table.
    pub fn schema<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Schema,
            source: Some(source.into()),
        }
    }

    /// The schema table was misused.
    pub fn is_schema(&self) -> bool {
        matches!(self.kind, ErrorKind::Schema)
    }

    /// Creates an error for a request model that failed validation.
    ///
    /// Validation failures are recoverable: fix the offending field on a new
    /// builder and build again. No partially-built model is ever returned.
    pub fn validation(detail: ValidationError) -> Self {
        Self {
            kind: ErrorKind::Validation(Box::new(detail)),
            source: None,
        }
    }

    /// A required field was missing or empty, or a cross-field invariant
    /// failed, when building a model.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation(_))
    }

    /// The validation failure, if that is what this error holds.
    pub fn validation_detail(&self) -> Option<&ValidationError> {
        match &self.kind {
            ErrorKind::Validation(d) => Some(d),
            _ => None,
        }
    }

    /// Creates an error for a model that cannot be bound to a request URL.
    pub fn binding(detail: BindingError) -> Self {
        Self {
            kind: ErrorKind::Binding(Box::new(detail)),
            source: None,
        }
    }

    /// A path parameter was missing, empty, or undeclared when binding a
    /// request.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding(_))
    }

    /// The binding failure, if that is what this error holds.
    pub fn binding_detail(&self) -> Option<&BindingError> {
        match &self.kind {
            ErrorKind::Binding(d) => Some(d),
            _ => None,
        }
    }

    /// Creates an error representing a serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request payload could not be serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response payload could not be deserialized.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error wrapping a transport failure.
    ///
    /// The model layer never produces these on its own; they surface from
    /// the [Invoker][crate::request::Invoker] the application supplies.
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Transport,
            source: Some(source.into()),
        }
    }

    /// The transport reported a failure.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Schema, Some(e)) => write!(f, "the model schema is misused: {e}"),
            (ErrorKind::Validation(d), _) => write!(f, "the request failed validation: {d}"),
            (ErrorKind::Binding(d), _) => {
                write!(f, "cannot bind the request to a URL: {d}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Transport, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &dyn StdError)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Schema,
    Validation(Box<ValidationError>),
    Binding(Box<BindingError>),
    Serialization,
    Deserialization,
    Transport,
}

/// A request model that does not satisfy its descriptor.
///
/// Raised by `build()`, synchronously, before any request could be made.
/// Checks run in field-declaration order and stop at the first failure.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required field was not set.
    #[error("{field} cannot be null")]
    Missing { field: &'static str },

    /// A required string field was set to the empty string.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A closed-set string field was set to a value outside its set.
    #[error("{field} must be one of the documented values, found `{value}`")]
    UnknownEnumValue { field: &'static str, value: String },

    /// A companion field was not set.
    #[error("{field} cannot be null if {companion} is not null")]
    MissingCompanion {
        field: &'static str,
        companion: &'static str,
    },

    /// A caller-supplied invariant did not hold.
    #[error("{message}")]
    Predicate { message: String },
}

impl ValidationError {
    /// The field the failure names, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::UnknownEnumValue { field, .. }
            | Self::MissingCompanion { field, .. } => Some(field),
            Self::Predicate { .. } => None,
        }
    }
}

/// A failure to determine the request URL for a built model.
///
/// Path parameters are substituted from the model's fields. The request
/// cannot be bound when such a field is missing or empty, or when the path
/// template references a field the shape does not declare. No half-bound URL
/// is ever produced.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum BindingError {
    /// A path parameter field was not set.
    #[error("field `{field}` needs to be set to bind `{path}`")]
    MissingPathParameter {
        field: &'static str,
        path: &'static str,
    },

    /// A path parameter field was set to the empty string.
    #[error("field `{field}` is empty and cannot be substituted into `{path}`")]
    EmptyPathParameter {
        field: &'static str,
        path: &'static str,
    },

    /// The path template references a field the shape does not declare.
    #[error("path template `{path}` references `{name}`, which {type_name} does not declare")]
    UnknownPathParameter {
        path: &'static str,
        name: String,
        type_name: &'static str,
    },

    /// A header field's value is not a valid header.
    #[error("field `{field}` cannot be sent as the `{header}` header")]
    InvalidHeader {
        field: &'static str,
        header: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use test_case::test_case;

    #[test]
    fn validation() {
        let error = Error::validation(ValidationError::Missing { field: "name" });
        assert!(error.is_validation(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(
            error.validation_detail(),
            Some(&ValidationError::Missing { field: "name" })
        );
        assert!(error.to_string().contains("name cannot be null"), "{error}");
        assert!(error.binding_detail().is_none(), "{error:?}");
    }

    #[test_case(ValidationError::Missing { field: "name" }, Some("name"); "missing")]
    #[test_case(ValidationError::Empty { field: "name" }, Some("name"); "empty")]
    #[test_case(ValidationError::UnknownEnumValue { field: "size", value: "XKCD".into() }, Some("size"); "unknown enum value")]
    #[test_case(ValidationError::MissingCompanion { field: "filename", companion: "file" }, Some("filename"); "missing companion")]
    #[test_case(ValidationError::Predicate { message: "no".into() }, None; "predicate")]
    fn validation_field_names(detail: ValidationError, want: Option<&str>) {
        assert_eq!(detail.field(), want, "{detail:?}");
    }

    #[test]
    fn binding() {
        let error = Error::binding(BindingError::MissingPathParameter {
            field: "environment_id",
            path: "/v1/environments/{environment_id}",
        });
        assert!(error.is_binding(), "{error:?}");
        assert!(
            error.to_string().contains("environment_id"),
            "{error}"
        );
        assert!(error.validation_detail().is_none(), "{error:?}");
    }

    #[test]
    fn schema() {
        let source = wkt::schema::SchemaError::UnknownField {
            type_name: "Thing",
            field: "nope".into(),
        };
        let error = Error::schema(source);
        assert!(error.is_schema(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("nope"), "{error}");
    }

    #[test]
    fn serialization_and_deserialization() {
        let error = Error::ser(wkt::TimestampError::OutOfRange);
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let error = Error::deser(wkt::TimestampError::OutOfRange);
        assert!(error.is_deserialization(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<wkt::TimestampError>());
        assert!(matches!(got, Some(wkt::TimestampError::OutOfRange)), "{error:?}");
    }

    #[test]
    fn transport() {
        let error = Error::transport("connection reset");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
    }
}
