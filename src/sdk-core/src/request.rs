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

//! Binding a built model to an HTTP request description.
//!
//! [bind] walks the model's fields by their declared
//! [Location][wkt::schema::Location]: Path fields are substituted into the
//! operation's path template (percent-encoded), Query fields become query
//! parameters, Header fields become headers, and the rest form a JSON body
//! or — when the shape carries multipart parts — a list of form parts.
//!
//! Nothing here performs I/O. The resulting [RequestPlan] is handed to an
//! [Invoker], the seam where the application's transport takes over.

use crate::Value;
use crate::codec;
use crate::error::{BindingError, Error};
use crate::model::Model;
use crate::operation::{ClientConfig, Operation};
use percent_encoding::{AsciiSet, CONTROLS};
use wkt::schema::{Constraint, FieldSchema, Location, ModelDescriptor};

/// A fully bound request, ready for a transport.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct RequestPlan {
    method: http::Method,
    url: String,
    query: Vec<(String, String)>,
    headers: http::HeaderMap,
    body: PlanBody,
}

impl RequestPlan {
    /// The HTTP method.
    pub fn method(&self) -> &http::Method {
        &self.method
    }

    /// The resolved URL, without the query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The query parameters, in routing order. Repeated names are repeated
    /// parameters.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// The request headers.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    /// The request body.
    pub fn body(&self) -> &PlanBody {
        &self.body
    }
}

/// The body of a bound request.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum PlanBody {
    /// No body.
    Empty,
    /// A JSON body.
    Json(serde_json::Value),
    /// Multipart form data.
    Multipart(Vec<Part>),
}

/// One part of a multipart request body.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Part {
    name: &'static str,
    filename: Option<String>,
    content_type: Option<String>,
    data: bytes::Bytes,
}

impl Part {
    /// The form field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The filename, for file-valued parts.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// The media type, if one applies.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The raw content.
    pub fn data(&self) -> &bytes::Bytes {
        &self.data
    }
}

/// The external transport seam.
///
/// Implementations take a bound request, perform the HTTP exchange, and
/// return the response payload as JSON. Everything about the exchange —
/// connections, authentication, timeouts, retries — belongs to the
/// implementation, not to this crate. Failures should be surfaced with
/// [Error::transport].
pub trait Invoker {
    /// Performs the exchange described by `plan`.
    fn invoke(&self, plan: RequestPlan) -> Result<serde_json::Value, Error>;
}

/// Binds a request, invokes it, and deserializes the response.
pub fn execute<I>(
    invoker: &I,
    config: &ClientConfig,
    operation: &Operation,
    request: &Model,
    response: &'static ModelDescriptor,
) -> Result<Model, Error>
where
    I: Invoker,
{
    let plan = bind(config, operation, request)?;
    let payload = invoker.invoke(plan)?;
    codec::deserialize(response, payload)
}

// The characters escaped in a substituted path segment. Everything a segment
// must not contain, including the separator itself: an ID with a `/` in it
// must not change the request's routing.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

/// Binds a built model to `operation`, producing a [RequestPlan].
///
/// Fails with a binding error when a path parameter is missing or empty;
/// required path fields are normally caught earlier, at `build()` time, so
/// this guards templates that reference optional fields.
pub fn bind(
    config: &ClientConfig,
    operation: &Operation,
    model: &Model,
) -> Result<RequestPlan, Error> {
    let path = expand_path(operation, model)?;
    let mut query = Vec::new();
    if let Some(v) = config.version() {
        query.push(("version".to_string(), v.to_string()));
    }
    let mut headers = http::HeaderMap::new();
    let mut parts = Vec::new();
    let mut has_body = false;
    for f in model.descriptor().fields() {
        let Some(value) = model.get(f.name()) else {
            continue;
        };
        match f.location() {
            Location::Path => {}
            Location::Query => {
                for formatted in format_query_values(f, value)? {
                    query.push((f.wire_name().to_string(), formatted));
                }
            }
            Location::Header => {
                let (name, header_value) = format_header(f, value)?;
                headers.insert(name, header_value);
            }
            Location::Part => parts.push(part_for(f, value, model)?),
            Location::Body => has_body = true,
            // `Location` is `#[non_exhaustive]`; every variant known to this
            // crate is handled above.
            _ => unreachable!("unhandled Location variant"),
        }
    }
    let body = if !parts.is_empty() {
        // Body fields of a multipart request travel as their own text
        // parts, next to the file, the way document metadata does. Fields
        // that only decorate a file part (its filename and content type)
        // are consumed by part_for and do not become parts themselves.
        let decorations = decoration_field_names(model.descriptor());
        for f in model.descriptor().fields() {
            if f.location() != Location::Body || decorations.contains(&f.name()) {
                continue;
            }
            let Some(value) = model.get(f.name()) else {
                continue;
            };
            parts.push(part_for(f, value, model)?);
        }
        PlanBody::Multipart(parts)
    } else if has_body {
        PlanBody::Json(codec::serialize(model)?)
    } else {
        PlanBody::Empty
    };
    tracing::debug!(operation = operation.name(), path = %path, "bound request");
    Ok(RequestPlan {
        method: operation.method().clone(),
        url: format!("{}{}", config.endpoint().trim_end_matches('/'), path),
        query,
        headers,
        body,
    })
}

fn expand_path(operation: &Operation, model: &Model) -> Result<String, Error> {
    let path = operation.path();
    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let len = after
            .find('}')
            .ok_or_else(|| Error::schema(format!("unterminated placeholder in `{path}`")))?;
        let name = &after[..len];
        let field = model.descriptor().field_by_wire_name(name).ok_or_else(|| {
            Error::binding(BindingError::UnknownPathParameter {
                path,
                name: name.to_string(),
                type_name: model.descriptor().type_name(),
            })
        })?;
        let formatted = model
            .get(field.name())
            .and_then(format_scalar)
            .ok_or_else(|| {
                Error::binding(BindingError::MissingPathParameter {
                    field: field.name(),
                    path,
                })
            })?;
        if formatted.is_empty() {
            return Err(Error::binding(BindingError::EmptyPathParameter {
                field: field.name(),
                path,
            }));
        }
        out.extend(percent_encoding::utf8_percent_encode(&formatted, SEGMENT));
        rest = &after[len + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn format_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Str(s) => Some(s.clone()),
        Value::Integer(v) => Some(v.to_string()),
        Value::Long(v) => Some(v.to_string()),
        Value::Double(v) => Some(v.to_string()),
        Value::Boolean(v) => Some(v.to_string()),
        Value::DateTime(ts) => Some(String::from(*ts)),
        _ => None,
    }
}

fn format_query_values(f: &FieldSchema, value: &Value) -> Result<Vec<String>, Error> {
    let elements = match value {
        Value::List(items) => items.iter().collect(),
        other => vec![other],
    };
    elements
        .into_iter()
        .map(|v| {
            if let Some(s) = format_scalar(v) {
                return Ok(s);
            }
            match v {
                Value::Json(_) | Value::Model(_) => codec::value_to_json(v)
                    .map(|j| j.to_string())
                    .map_err(Error::ser),
                _ => Err(Error::ser(format!(
                    "field `{}` cannot be sent as a query parameter",
                    f.name()
                ))),
            }
        })
        .collect()
}

fn format_header(
    f: &FieldSchema,
    value: &Value,
) -> Result<(http::HeaderName, http::HeaderValue), Error> {
    let invalid = || {
        Error::binding(BindingError::InvalidHeader {
            field: f.name(),
            header: f.wire_name(),
        })
    };
    let formatted = format_scalar(value).ok_or_else(invalid)?;
    let name = http::HeaderName::try_from(f.wire_name()).map_err(|_| invalid())?;
    let header_value = http::HeaderValue::try_from(formatted.as_str()).map_err(|_| invalid())?;
    Ok((name, header_value))
}

fn part_for(f: &FieldSchema, value: &Value, model: &Model) -> Result<Part, Error> {
    match value {
        Value::Binary(b) => {
            let content_type = model
                .get_str(&format!("{}_content_type", f.name()))
                .or_else(|| b.content_type())
                .unwrap_or("application/octet-stream");
            Ok(Part {
                name: f.wire_name(),
                filename: companion_filename(f, model)
                    .or_else(|| b.filename().map(str::to_string)),
                content_type: Some(content_type.to_string()),
                data: b.data().clone(),
            })
        }
        Value::Str(s) => Ok(Part {
            name: f.wire_name(),
            filename: None,
            content_type: None,
            data: bytes::Bytes::from(s.clone()),
        }),
        other => {
            let json = codec::value_to_json(other).map_err(Error::ser)?;
            Ok(Part {
                name: f.wire_name(),
                filename: None,
                content_type: Some("application/json".to_string()),
                data: bytes::Bytes::from(json.to_string()),
            })
        }
    }
}

// Fields that only decorate a file part: the companion filename named by a
// constraint, and a `<field>_content_type` sibling when declared.
fn decoration_field_names(descriptor: &ModelDescriptor) -> Vec<&'static str> {
    let mut names = Vec::new();
    for f in descriptor.fields() {
        if f.location() != Location::Part {
            continue;
        }
        for c in descriptor.constraints() {
            match c {
                Constraint::RequiresCompanion {
                    if_set,
                    then_required,
                } if *if_set == f.name() => names.push(*then_required),
                _ => {}
            }
        }
        let content_type = format!("{}_content_type", f.name());
        if let Some(sibling) = descriptor.field(&content_type) {
            names.push(sibling.name());
        }
    }
    names
}

// The filename for a file part is its companion field, when the schema
// declares one, so `filename` set on the options takes precedence over a
// name embedded in the binary part itself.
fn companion_filename(f: &FieldSchema, model: &Model) -> Option<String> {
    model
        .descriptor()
        .constraints()
        .iter()
        .find_map(|c| match c {
            Constraint::RequiresCompanion {
                if_set,
                then_required,
            } if *if_set == f.name() => model.get_str(then_required).map(str::to_string),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Builder;
    use serde_json::json;
    use std::sync::LazyLock;
    use wkt::schema::{FieldKind, FieldSchema};

    static CREATE_COLLECTION: LazyLock<ModelDescriptor> = LazyLock::new(|| {
        ModelDescriptor::new(
            "CreateCollectionOptions",
            vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
                FieldSchema::required("name", "name", FieldKind::Str),
                FieldSchema::optional("description", "description", FieldKind::Str),
            ],
            vec![],
        )
        .expect("test descriptor is well-formed")
    });

    static QUERY_LOG: LazyLock<ModelDescriptor> = LazyLock::new(|| {
        ModelDescriptor::new(
            "QueryLogOptions",
            vec![
                FieldSchema::optional("filter", "filter", FieldKind::Str)
                    .set_location(Location::Query),
                FieldSchema::optional("count", "count", FieldKind::Long)
                    .set_location(Location::Query),
                FieldSchema::optional(
                    "sort",
                    "sort",
                    FieldKind::ListOf(Box::new(FieldKind::Str)),
                )
                .set_location(Location::Query),
                FieldSchema::optional("start_time", "start_time", FieldKind::DateTime)
                    .set_location(Location::Query),
                FieldSchema::optional("opt_out", "X-Watson-Logging-Opt-Out", FieldKind::Boolean)
                    .set_location(Location::Header),
            ],
            vec![],
        )
        .expect("test descriptor is well-formed")
    });

    static ADD_DOCUMENT: LazyLock<ModelDescriptor> = LazyLock::new(|| {
        ModelDescriptor::new(
            "AddDocumentOptions",
            vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
                FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                    .set_location(Location::Path),
                FieldSchema::optional("file", "file", FieldKind::Binary)
                    .set_location(Location::Part),
                FieldSchema::optional("filename", "filename", FieldKind::Str),
                FieldSchema::optional("metadata", "metadata", FieldKind::Str)
                    .set_location(Location::Part),
            ],
            vec![Constraint::RequiresCompanion {
                if_set: "file",
                then_required: "filename",
            }],
        )
        .expect("test descriptor is well-formed")
    });

    static GET_ENVIRONMENT: LazyLock<ModelDescriptor> = LazyLock::new(|| {
        ModelDescriptor::new(
            "GetEnvironmentOptions",
            vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
            ],
            vec![],
        )
        .expect("test descriptor is well-formed")
    });

    fn config() -> ClientConfig {
        ClientConfig::new("https://api.us-south.discovery.watson.cloud.ibm.com/")
            .set_version("2019-04-30")
    }

    #[test]
    fn create_collection_binds_path_and_body() -> anyhow::Result<()> {
        let op = Operation::new(
            "createCollection",
            http::Method::POST,
            "/v1/environments/{environment_id}/collections",
        );
        let model = Builder::new(&CREATE_COLLECTION)
            .set("environment_id", "env-1")
            .set("name", "docs")
            .build()?;
        let plan = bind(&config(), &op, &model)?;
        assert_eq!(plan.method(), &http::Method::POST);
        assert_eq!(
            plan.url(),
            "https://api.us-south.discovery.watson.cloud.ibm.com/v1/environments/env-1/collections"
        );
        assert_eq!(
            plan.query(),
            &[("version".to_string(), "2019-04-30".to_string())]
        );
        assert_eq!(plan.body(), &PlanBody::Json(json!({"name": "docs"})));
        Ok(())
    }

    #[test]
    fn path_segments_are_percent_encoded() -> anyhow::Result<()> {
        let op = Operation::new(
            "getEnvironment",
            http::Method::GET,
            "/v1/environments/{environment_id}",
        );
        let model = Builder::new(&GET_ENVIRONMENT)
            .set("environment_id", "env 1/extra")
            .build()?;
        let plan = bind(&config(), &op, &model)?;
        assert!(plan.url().ends_with("/v1/environments/env%201%2Fextra"), "{}", plan.url());
        assert_eq!(plan.body(), &PlanBody::Empty);
        Ok(())
    }

    #[test]
    fn missing_path_parameter_is_a_binding_error() -> anyhow::Result<()> {
        let op = Operation::new(
            "getEnvironment",
            http::Method::GET,
            "/v1/environments/{environment_id}/fields",
        );
        // A shape that does not declare the placeholder at all.
        let model = Builder::new(&QUERY_LOG).build()?;
        let err = bind(&config(), &op, &model).expect_err("placeholder is undeclared");
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("environment_id"), "{err}");
        Ok(())
    }

    #[test]
    fn query_and_header_routing() -> anyhow::Result<()> {
        let op = Operation::new("queryLog", http::Method::GET, "/v1/logs");
        let start = wkt::Timestamp::new(1575002733, 0)?;
        let model = Builder::new(&QUERY_LOG)
            .set("filter", "event_type::click")
            .set("count", 25_i64)
            .append("sort", "created")
            .append("sort", "-score")
            .set("start_time", start)
            .set("opt_out", true)
            .build()?;
        let plan = bind(&config(), &op, &model)?;
        assert_eq!(
            plan.query(),
            &[
                ("version".to_string(), "2019-04-30".to_string()),
                ("filter".to_string(), "event_type::click".to_string()),
                ("count".to_string(), "25".to_string()),
                ("sort".to_string(), "created".to_string()),
                ("sort".to_string(), "-score".to_string()),
                ("start_time".to_string(), "2019-11-29T04:45:33.000Z".to_string()),
            ]
        );
        assert_eq!(
            plan.headers().get("X-Watson-Logging-Opt-Out").map(|v| v.as_bytes()),
            Some(&b"true"[..])
        );
        assert_eq!(plan.body(), &PlanBody::Empty);
        Ok(())
    }

    #[test]
    fn multipart_upload_with_metadata() -> anyhow::Result<()> {
        let op = Operation::new(
            "addDocument",
            http::Method::POST,
            "/v1/environments/{environment_id}/collections/{collection_id}/documents",
        );
        let model = Builder::new(&ADD_DOCUMENT)
            .set("environment_id", "env-1")
            .set("collection_id", "coll-1")
            .set(
                "file",
                wkt::BinaryPart::new(&b"document text"[..]).set_content_type("text/plain"),
            )
            .set("filename", "report.txt")
            .set("metadata", r#"{"creator": "tests"}"#)
            .build()?;
        let plan = bind(&config(), &op, &model)?;
        let PlanBody::Multipart(parts) = plan.body() else {
            anyhow::bail!("expected a multipart body, got {:?}", plan.body());
        };
        assert_eq!(parts.len(), 2, "{parts:?}");
        let file = &parts[0];
        assert_eq!(file.name(), "file");
        assert_eq!(file.filename(), Some("report.txt"));
        assert_eq!(file.content_type(), Some("text/plain"));
        assert_eq!(file.data().as_ref(), b"document text");
        let metadata = &parts[1];
        assert_eq!(metadata.name(), "metadata");
        assert_eq!(metadata.filename(), None);
        assert_eq!(metadata.data().as_ref(), br#"{"creator": "tests"}"#);
        Ok(())
    }

    #[test]
    fn version_is_optional() -> anyhow::Result<()> {
        let op = Operation::new("queryLog", http::Method::GET, "/v1/logs");
        let model = Builder::new(&QUERY_LOG).build()?;
        let config = ClientConfig::new("https://example.com");
        let plan = bind(&config, &op, &model)?;
        assert!(plan.query().is_empty(), "{plan:?}");
        Ok(())
    }

    struct FakeInvoker(serde_json::Value);
    impl Invoker for FakeInvoker {
        fn invoke(&self, plan: RequestPlan) -> Result<serde_json::Value, Error> {
            assert!(plan.url().starts_with("https://"), "{plan:?}");
            Ok(self.0.clone())
        }
    }

    static COLLECTION: LazyLock<ModelDescriptor> = LazyLock::new(|| {
        ModelDescriptor::new(
            "Collection",
            vec![
                FieldSchema::optional("collection_id", "collection_id", FieldKind::Str),
                FieldSchema::optional("name", "name", FieldKind::Str),
            ],
            vec![],
        )
        .expect("test descriptor is well-formed")
    });

    #[test]
    fn execute_composes_bind_invoke_and_deserialize() -> anyhow::Result<()> {
        let op = Operation::new(
            "createCollection",
            http::Method::POST,
            "/v1/environments/{environment_id}/collections",
        );
        let request = Builder::new(&CREATE_COLLECTION)
            .set("environment_id", "env-1")
            .set("name", "docs")
            .build()?;
        let invoker = FakeInvoker(json!({"collection_id": "coll-1", "name": "docs"}));
        let response = execute(&invoker, &config(), &op, &request, &COLLECTION)?;
        assert_eq!(response.get_str("collection_id"), Some("coll-1"));
        assert_eq!(response.get_str("name"), Some("docs"));
        Ok(())
    }

    #[test]
    fn transport_errors_pass_through() -> anyhow::Result<()> {
        struct FailingInvoker;
        impl Invoker for FailingInvoker {
            fn invoke(&self, _plan: RequestPlan) -> Result<serde_json::Value, Error> {
                Err(Error::transport("connection reset"))
            }
        }
        let op = Operation::new("listEnvironments", http::Method::GET, "/v1/environments");
        let request = Builder::new(&QUERY_LOG).build()?;
        let err = execute(&FailingInvoker, &config(), &op, &request, &COLLECTION)
            .expect_err("the invoker fails");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }
}
