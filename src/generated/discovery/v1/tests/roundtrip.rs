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

//! Wire round trips across the catalog.

use sdk_core::model::TypedModel;
use serde_json::json;
use watson_discovery_v1::model::*;

type Result = anyhow::Result<()>;

#[test]
fn training_data_round_trips_with_two_examples() -> Result {
    let options = AddTrainingDataOptions::builder("env-1", "coll-1")
        .natural_language_query("how do I upload a document?")
        .add_examples(
            TrainingExample::builder()
                .document_id("doc-1")
                .relevance(5)
                .build()?,
        )
        .add_examples(
            TrainingExample::builder()
                .document_id("doc-2")
                .relevance(2)
                .build()?,
        )
        .build()?;
    assert_eq!(options.examples().len(), 2);

    let body = options.to_json()?;
    assert_eq!(
        body,
        json!({
            "natural_language_query": "how do I upload a document?",
            "examples": [
                {"document_id": "doc-1", "relevance": 5},
                {"document_id": "doc-2", "relevance": 2},
            ],
        })
    );

    let back = AddTrainingDataOptions::from_json(body)?;
    let ids = back
        .examples()
        .iter()
        .filter_map(|e| e.document_id().map(str::to_string))
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["doc-1", "doc-2"]);
    Ok(())
}

#[test]
fn environment_response_round_trips() -> Result {
    let payload = json!({
        "environment_id": "env-1",
        "name": "research",
        "created": "2019-11-29T04:45:33.123Z",
        "status": "active",
        "read_only": false,
        "index_capacity": {"documents": {"available": 100}},
    });
    let environment = Environment::from_json(payload.clone())?;
    assert_eq!(environment.environment_id(), Some("env-1"));
    assert_eq!(environment.status(), Some("active"));
    assert_eq!(environment.read_only(), Some(false));
    assert_eq!(
        environment.created(),
        Some(wkt::Timestamp::new(1575002733, 123_000_000)?)
    );
    assert_eq!(environment.to_json()?, payload);
    Ok(())
}

#[test]
fn unknown_response_enum_values_are_kept() -> Result {
    // Responses tolerate literals newer than this client.
    let environment = Environment::from_json(json!({"status": "hibernating"}))?;
    assert_eq!(environment.status(), Some("hibernating"));
    Ok(())
}

#[test]
fn collection_nests_document_counts() -> Result {
    let collection = Collection::from_json(json!({
        "collection_id": "coll-1",
        "name": "docs",
        "document_counts": {"available": 42, "failed": 1},
    }))?;
    let counts = collection.document_counts().expect("document_counts is set");
    assert_eq!(counts.available(), Some(42));
    assert_eq!(counts.failed(), Some(1));
    assert_eq!(counts.processing(), None);
    Ok(())
}

#[test]
fn credential_secrets_serialize_but_never_deserialize() -> Result {
    let details = CredentialDetails::builder()
        .credential_type(credential_type::USERNAME_PASSWORD)
        .url("https://example.com/sharepoint")
        .username("crawler")
        .password("hunter2")
        .build()?;
    let options = CreateCredentialsOptions::builder("env-1")
        .source_type(source_type::SHAREPOINT)
        .credential_details(details)
        .build()?;

    // The secret is sent to the service...
    let body = options.to_json()?;
    assert_eq!(
        body.pointer("/credential_details/password"),
        Some(&json!("hunter2"))
    );

    // ...but a response payload never populates it.
    let echoed = CreateCredentialsOptions::from_json(body)?;
    let details = echoed.credential_details().expect("details are present");
    assert_eq!(details.password(), None);
    assert_eq!(details.username(), Some("crawler"));

    // Redaction is exactly the service's view of the nested details.
    let expected = options
        .credential_details()
        .expect("details are present")
        .model()
        .redacted();
    assert_eq!(details.model(), &expected);
    Ok(())
}

#[test]
fn query_response_exposes_free_form_results() -> Result {
    let response = QueryResponse::from_json(json!({
        "matching_results": 2,
        "session_token": "tok-1",
        "results": [
            {"id": "doc-1", "title": "first", "score": 3.2},
            {"id": "doc-2", "title": "second"},
        ],
        "aggregations": [{"type": "term", "field": "author"}],
    }))?;
    assert_eq!(response.matching_results(), Some(2));
    assert_eq!(response.session_token(), Some("tok-1"));
    let results = response.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].get("title"), Some(&json!("first")));
    assert_eq!(response.aggregations().len(), 1);
    Ok(())
}

#[test]
fn metric_response_parses_nested_aggregations() -> Result {
    let response = MetricResponse::from_json(json!({
        "aggregations": [{
            "interval": "1d",
            "event_type": "click",
            "results": [{
                "key_as_string": "2019-11-29T00:00:00.000Z",
                "key": 1574985600000_i64,
                "matching_results": 12,
                "event_rate": 0.25,
            }],
        }],
    }))?;
    let aggregations = response.aggregations();
    assert_eq!(aggregations.len(), 1);
    assert_eq!(aggregations[0].interval(), Some("1d"));
    let results = aggregations[0].results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matching_results(), Some(12));
    assert_eq!(results[0].event_rate(), Some(0.25));
    assert_eq!(results[0].key(), Some(1574985600000));
    assert!(results[0].key_as_string().is_some(), "{results:?}");
    Ok(())
}

#[test]
fn event_round_trips_with_timestamp() -> Result {
    let stamp = wkt::Timestamp::new(1575002733, 500_000_000)?;
    let data = EventData::builder("env-1", "token", "coll-1", "doc-1")
        .client_timestamp(stamp)
        .display_rank(3)
        .build()?;
    let options = CreateEventOptions::builder(event_type::CLICK, data).build()?;
    let body = options.to_json()?;
    assert_eq!(
        body.pointer("/data/client_timestamp"),
        Some(&json!("2019-11-29T04:45:33.500Z"))
    );
    let back = CreateEventOptions::from_json(body)?;
    assert_eq!(
        back.data().and_then(|d| d.client_timestamp()),
        Some(stamp)
    );
    Ok(())
}

#[test]
fn unknown_wire_fields_are_ignored() -> Result {
    let gateway = Gateway::from_json(json!({
        "gateway_id": "gw-1",
        "status": "connected",
        "brand_new_field": {"ignored": true},
    }))?;
    assert_eq!(gateway.gateway_id(), Some("gw-1"));
    assert_eq!(gateway.status(), Some("connected"));
    Ok(())
}

#[test]
fn expansions_round_trip_in_order() -> Result {
    let options = CreateExpansionsOptions::builder("env-1", "coll-1")
        .add_expansions(
            Expansion::builder()
                .add_input_terms("car")
                .add_expanded_terms("automobile")
                .add_expanded_terms("vehicle")
                .build()?,
        )
        .build()?;
    let back = CreateExpansionsOptions::from_json(options.to_json()?)?;
    let expansions = back.expansions();
    assert_eq!(expansions.len(), 1);
    assert_eq!(
        expansions[0].expanded_terms(),
        vec!["automobile".to_string(), "vehicle".to_string()]
    );
    Ok(())
}
