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

//! Build-time validation of request models.
//!
//! Validation runs when a [Builder][crate::model::Builder] is consumed by
//! `build()`, and is fail-fast: checks run in field-declaration order and
//! the first failure is reported. Each failure names the offending field, so
//! callers see the problem before any network round trip.

use crate::Value;
use crate::error::ValidationError;
use std::collections::HashMap;
use wkt::schema::{Constraint, FieldKind, ModelDescriptor};

/// Checks the accumulated values against the descriptor's rules.
///
/// Per-field rules, in declaration order: a required field must be present;
/// a required string must be non-empty; a closed-set string must use one of
/// the allowed literals. Cross-field constraints run afterwards, in their
/// own declaration order.
pub(crate) fn check(
    descriptor: &ModelDescriptor,
    values: &HashMap<&'static str, Value>,
) -> Result<(), ValidationError> {
    for f in descriptor.fields() {
        let value = values.get(f.name());
        if f.is_required() {
            match value {
                None => return Err(ValidationError::Missing { field: f.name() }),
                Some(Value::Str(s)) if s.is_empty() => {
                    return Err(ValidationError::Empty { field: f.name() });
                }
                _ => {}
            }
        }
        if let (FieldKind::Enum(allowed), Some(Value::Str(s))) = (f.kind(), value) {
            if !allowed.contains(&s.as_str()) {
                return Err(ValidationError::UnknownEnumValue {
                    field: f.name(),
                    value: s.clone(),
                });
            }
        }
    }
    for c in descriptor.constraints() {
        match *c {
            Constraint::RequiresCompanion {
                if_set,
                then_required,
            } => {
                if values.contains_key(if_set) && !values.contains_key(then_required) {
                    return Err(ValidationError::MissingCompanion {
                        field: then_required,
                        companion: if_set,
                    });
                }
            }
            // `Constraint` is `#[non_exhaustive]`; every variant known to this
            // crate is handled above.
            _ => unreachable!("unhandled Constraint variant"),
        }
    }
    Ok(())
}

/// Checks an invariant the schema table cannot express.
///
/// An escape hatch for typed wrappers with one-off rules. The message should
/// name the fields involved.
///
/// # Examples
/// ```
/// # use watson_sdk_core::validator;
/// let count = 3;
/// validator::is_true(count <= 10, "count cannot exceed 10")?;
/// # Ok::<(), watson_sdk_core::error::ValidationError>(())
/// ```
pub fn is_true(condition: bool, message: &str) -> Result<(), ValidationError> {
    if condition {
        return Ok(());
    }
    Err(ValidationError::Predicate {
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wkt::schema::{FieldSchema, Location};

    fn descriptor() -> ModelDescriptor {
        const SIZES: &[&str] = &["S", "M", "L"];
        ModelDescriptor::new(
            "TestOptions",
            vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
                FieldSchema::required("name", "name", FieldKind::Str),
                FieldSchema::optional("size", "size", FieldKind::Enum(SIZES)),
                FieldSchema::optional("file", "file", FieldKind::Binary),
                FieldSchema::optional("filename", "filename", FieldKind::Str),
            ],
            vec![Constraint::RequiresCompanion {
                if_set: "file",
                then_required: "filename",
            }],
        )
        .expect("test descriptor is well-formed")
    }

    fn base_values() -> HashMap<&'static str, Value> {
        HashMap::from([
            ("environment_id", Value::from("env-1")),
            ("name", Value::from("docs")),
        ])
    }

    #[test]
    fn all_rules_pass() {
        let d = descriptor();
        assert_eq!(check(&d, &base_values()), Ok(()));
    }

    #[test]
    fn missing_required_fails_first_in_declaration_order() {
        let d = descriptor();
        let got = check(&d, &HashMap::new());
        assert_eq!(
            got,
            Err(ValidationError::Missing {
                field: "environment_id"
            })
        );
    }

    #[test]
    fn empty_required_string() {
        let d = descriptor();
        let mut values = base_values();
        values.insert("name", Value::from(""));
        assert_eq!(check(&d, &values), Err(ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn enum_membership() {
        let d = descriptor();
        let mut values = base_values();
        values.insert("size", Value::from("XL"));
        assert_eq!(
            check(&d, &values),
            Err(ValidationError::UnknownEnumValue {
                field: "size",
                value: "XL".into()
            })
        );
        values.insert("size", Value::from("M"));
        assert_eq!(check(&d, &values), Ok(()));
    }

    #[test]
    fn companion_field() {
        let d = descriptor();
        let mut values = base_values();
        values.insert("file", Value::from(wkt::BinaryPart::new(&b"text"[..])));
        assert_eq!(
            check(&d, &values),
            Err(ValidationError::MissingCompanion {
                field: "filename",
                companion: "file"
            })
        );
        values.insert("filename", Value::from("report.txt"));
        assert_eq!(check(&d, &values), Ok(()));
    }

    #[test]
    fn predicate() {
        assert_eq!(is_true(true, "unused"), Ok(()));
        assert_eq!(
            is_true(false, "count cannot exceed 10"),
            Err(ValidationError::Predicate {
                message: "count cannot exceed 10".into()
            })
        );
    }
}
