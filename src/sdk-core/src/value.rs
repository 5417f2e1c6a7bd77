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

use crate::model::Model;

/// A field value held by a builder or a built model.
///
/// The variants mirror [wkt::schema::FieldKind]. `From` conversions cover
/// the types setters are called with, so call sites read
/// `builder.set("name", "docs")` rather than spelling the variant out.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Value {
    /// A UTF-8 string, also used for closed-set (enum) fields.
    Str(String),
    /// A 32-bit signed integer.
    Integer(i32),
    /// A 64-bit signed integer.
    Long(i64),
    /// A 64-bit float.
    Double(f64),
    /// A boolean.
    Boolean(bool),
    /// A point in time.
    DateTime(wkt::Timestamp),
    /// An ordered sequence.
    List(Vec<Value>),
    /// Free-form JSON.
    Json(serde_json::Value),
    /// A nested model.
    Model(Model),
    /// An opaque binary upload part.
    Binary(wkt::BinaryPart),
}

impl Value {
    /// The string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is a 32-bit integer value.
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// The integer content, if this is a 64-bit integer value.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// The float content, if this is a float value.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// The timestamp content, if this is a timestamp value.
    pub fn as_date_time(&self) -> Option<wkt::Timestamp> {
        match self {
            Self::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    /// The elements, if this is a list value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// The JSON content, if this is a free-form JSON value.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    /// The nested model, if this is a model value.
    pub fn as_model(&self) -> Option<&Model> {
        match self {
            Self::Model(v) => Some(v),
            _ => None,
        }
    }

    /// The binary part, if this is a binary value.
    pub fn as_binary(&self) -> Option<&wkt::BinaryPart> {
        match self {
            Self::Binary(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<wkt::Timestamp> for Value {
    fn from(v: wkt::Timestamp) -> Self {
        Self::DateTime(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl From<Model> for Value {
    fn from(v: Model) -> Self {
        Self::Model(v)
    }
}

impl From<wkt::BinaryPart> for Value {
    fn from(v: wkt::BinaryPart) -> Self {
        Self::Binary(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Value::from("abc").as_str(), Some("abc"));
        assert_eq!(Value::from("abc".to_string()).as_str(), Some("abc"));
        assert_eq!(Value::from(7_i32).as_integer(), Some(7));
        assert_eq!(Value::from(7_i64).as_long(), Some(7));
        assert_eq!(Value::from(0.5_f64).as_double(), Some(0.5));
        assert_eq!(Value::from(true).as_boolean(), Some(true));
        let ts = wkt::Timestamp::default();
        assert_eq!(Value::from(ts).as_date_time(), Some(ts));
        let json = serde_json::json!({"a": 1});
        assert_eq!(Value::from(json.clone()).as_json(), Some(&json));
        let part = wkt::BinaryPart::new(&b"x"[..]);
        assert_eq!(Value::from(part.clone()).as_binary(), Some(&part));
    }

    #[test]
    fn mismatched_views() {
        let v = Value::from("abc");
        assert_eq!(v.as_long(), None);
        assert_eq!(v.as_list(), None);
        assert_eq!(v.as_model(), None);
        let v = Value::from(vec![Value::from(1_i64), Value::from(2_i64)]);
        assert_eq!(v.as_list().map(<[Value]>::len), Some(2));
    }
}
