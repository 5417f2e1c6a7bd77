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

//! Binding request models to the operation table.

use sdk_core::model::TypedModel;
use sdk_core::operation::ClientConfig;
use sdk_core::request::{bind, PlanBody};
use serde_json::json;
use watson_discovery_v1::model::*;
use watson_discovery_v1::operations;

type Result = anyhow::Result<()>;

fn config() -> ClientConfig {
    ClientConfig::new(watson_discovery_v1::DEFAULT_ENDPOINT).set_version("2019-04-30")
}

#[test]
fn create_collection_routes_the_environment_to_the_path() -> Result {
    let options = CreateCollectionOptions::builder("env-1", "docs").build()?;
    let plan = bind(&config(), &operations::CREATE_COLLECTION, options.model())?;
    assert_eq!(plan.method(), &http::Method::POST);
    assert_eq!(
        plan.url(),
        "https://api.us-south.discovery.watson.cloud.ibm.com/v1/environments/env-1/collections"
    );
    // The path field never leaks into the body.
    assert_eq!(plan.body(), &PlanBody::Json(json!({"name": "docs"})));
    assert_eq!(
        plan.query(),
        &[("version".to_string(), "2019-04-30".to_string())]
    );
    Ok(())
}

#[test]
fn list_collections_name_is_a_query_parameter() -> Result {
    let options = ListCollectionsOptions::builder("env-1").name("docs").build()?;
    let plan = bind(&config(), &operations::LIST_COLLECTIONS, options.model())?;
    assert_eq!(plan.method(), &http::Method::GET);
    assert!(plan.url().ends_with("/v1/environments/env-1/collections"), "{}", plan.url());
    assert_eq!(
        plan.query(),
        &[
            ("version".to_string(), "2019-04-30".to_string()),
            ("name".to_string(), "docs".to_string()),
        ]
    );
    assert_eq!(plan.body(), &PlanBody::Empty);
    Ok(())
}

#[test]
fn update_document_builds_a_multipart_body() -> Result {
    let options = UpdateDocumentOptions::builder("env-1", "coll-1", "doc-1")
        .file(wkt::BinaryPart::new(&b"document text"[..]).set_content_type("text/plain"))
        .filename("report.txt")
        .metadata(r#"{"Subject": "Apples"}"#)
        .build()?;
    let plan = bind(&config(), &operations::UPDATE_DOCUMENT, options.model())?;
    assert!(
        plan.url()
            .ends_with("/v1/environments/env-1/collections/coll-1/documents/doc-1"),
        "{}",
        plan.url()
    );
    let PlanBody::Multipart(parts) = plan.body() else {
        anyhow::bail!("expected a multipart body, got {:?}", plan.body());
    };
    assert_eq!(parts.len(), 2, "{parts:?}");
    assert_eq!(parts[0].name(), "file");
    assert_eq!(parts[0].filename(), Some("report.txt"));
    assert_eq!(parts[0].content_type(), Some("text/plain"));
    assert_eq!(parts[0].data().as_ref(), b"document text");
    assert_eq!(parts[1].name(), "metadata");
    assert_eq!(parts[1].data().as_ref(), br#"{"Subject": "Apples"}"#);
    Ok(())
}

#[test]
fn metrics_window_formats_timestamps_in_the_query() -> Result {
    let options = GetMetricsQueryOptions::builder()
        .start_time(wkt::Timestamp::new(1575002733, 0)?)
        .end_time(wkt::Timestamp::new(1575089133, 0)?)
        .result_type(metric_result_type::DOCUMENT)
        .build()?;
    let plan = bind(&config(), &operations::GET_METRICS_QUERY, options.model())?;
    assert!(plan.url().ends_with("/v1/metrics/number_of_queries"), "{}", plan.url());
    assert_eq!(
        plan.query(),
        &[
            ("version".to_string(), "2019-04-30".to_string()),
            ("start_time".to_string(), "2019-11-29T04:45:33.000Z".to_string()),
            ("end_time".to_string(), "2019-11-30T04:45:33.000Z".to_string()),
            ("result_type".to_string(), "document".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn query_log_sort_repeats_in_append_order() -> Result {
    let options = QueryLogOptions::builder()
        .count(25)
        .add_sort("created")
        .add_sort("-score")
        .build()?;
    let plan = bind(&config(), &operations::QUERY_LOG, options.model())?;
    assert_eq!(
        plan.query(),
        &[
            ("version".to_string(), "2019-04-30".to_string()),
            ("count".to_string(), "25".to_string()),
            ("sort".to_string(), "created".to_string()),
            ("sort".to_string(), "-score".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn query_opt_out_travels_as_a_header() -> Result {
    let options = QueryOptions::builder("env-1", "coll-1")
        .natural_language_query("what is a collection?")
        .x_watson_logging_opt_out(true)
        .build()?;
    let plan = bind(&config(), &operations::QUERY, options.model())?;
    assert_eq!(
        plan.headers()
            .get("X-Watson-Logging-Opt-Out")
            .map(|v| v.as_bytes()),
        Some(&b"true"[..])
    );
    assert_eq!(
        plan.body(),
        &PlanBody::Json(json!({"natural_language_query": "what is a collection?"}))
    );
    Ok(())
}

#[test]
fn delete_user_data_routes_the_customer_id_to_the_query() -> Result {
    let options = DeleteUserDataOptions::builder("customer 42").build()?;
    let plan = bind(&config(), &operations::DELETE_USER_DATA, options.model())?;
    assert_eq!(plan.method(), &http::Method::DELETE);
    assert!(plan.url().ends_with("/v1/user_data"), "{}", plan.url());
    assert_eq!(
        plan.query(),
        &[
            ("version".to_string(), "2019-04-30".to_string()),
            ("customer_id".to_string(), "customer 42".to_string()),
        ]
    );
    assert_eq!(plan.body(), &PlanBody::Empty);
    Ok(())
}

#[test]
fn path_segments_are_escaped() -> Result {
    let options = GetCollectionOptions::builder("env/extra", "coll 1").build()?;
    let plan = bind(&config(), &operations::GET_COLLECTION, options.model())?;
    assert!(
        plan.url()
            .ends_with("/v1/environments/env%2Fextra/collections/coll%201"),
        "{}",
        plan.url()
    );
    Ok(())
}

#[test]
fn stopword_upload_takes_its_filename_from_the_companion_field() -> Result {
    let options = CreateStopwordListOptions::builder("env-1", "coll-1")
        .stopword_file(wkt::BinaryPart::new(&b"a\nan\nthe\n"[..]))
        .stopword_filename("stopwords.txt")
        .build()?;
    let plan = bind(&config(), &operations::CREATE_STOPWORD_LIST, options.model())?;
    let PlanBody::Multipart(parts) = plan.body() else {
        anyhow::bail!("expected a multipart body, got {:?}", plan.body());
    };
    let file = parts.iter().find(|p| p.name() == "stopword_file").expect("file part");
    assert_eq!(file.filename(), Some("stopwords.txt"));
    assert_eq!(file.content_type(), Some("application/octet-stream"));
    Ok(())
}

#[test]
fn create_event_posts_the_nested_payload() -> Result {
    let data = EventData::builder("env-1", "token", "coll-1", "doc-1").build()?;
    let options = CreateEventOptions::builder(event_type::CLICK, data).build()?;
    let plan = bind(&config(), &operations::CREATE_EVENT, options.model())?;
    assert!(plan.url().ends_with("/v1/events"), "{}", plan.url());
    assert_eq!(
        plan.body(),
        &PlanBody::Json(json!({
            "type": "click",
            "data": {
                "environment_id": "env-1",
                "session_token": "token",
                "collection_id": "coll-1",
                "document_id": "doc-1",
            },
        }))
    );
    Ok(())
}
