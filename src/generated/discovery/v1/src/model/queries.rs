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

use lazy_static::lazy_static;
use sdk_core::error::Error;
use sdk_core::model::{Builder, Model, TypedModel};
use wkt::schema::{FieldKind, FieldSchema, Location, ModelDescriptor};

fn query_body_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::optional("filter", "filter", FieldKind::Str),
        FieldSchema::optional("query", "query", FieldKind::Str),
        FieldSchema::optional(
            "natural_language_query",
            "natural_language_query",
            FieldKind::Str,
        ),
        FieldSchema::optional("passages", "passages", FieldKind::Boolean),
        FieldSchema::optional("aggregation", "aggregation", FieldKind::Str),
        FieldSchema::optional("count", "count", FieldKind::Long),
        FieldSchema::optional("return_fields", "return", FieldKind::Str),
        FieldSchema::optional("offset", "offset", FieldKind::Long),
        FieldSchema::optional("sort", "sort", FieldKind::Str),
        FieldSchema::optional("highlight", "highlight", FieldKind::Boolean),
        FieldSchema::optional("passages_fields", "passages.fields", FieldKind::Str),
        FieldSchema::optional("passages_count", "passages.count", FieldKind::Long),
        FieldSchema::optional("passages_characters", "passages.characters", FieldKind::Long),
        FieldSchema::optional("deduplicate", "deduplicate", FieldKind::Boolean),
        FieldSchema::optional("deduplicate_field", "deduplicate.field", FieldKind::Str),
        FieldSchema::optional("similar", "similar", FieldKind::Boolean),
        FieldSchema::optional("similar_document_ids", "similar.document_ids", FieldKind::Str),
        FieldSchema::optional("similar_fields", "similar.fields", FieldKind::Str),
        FieldSchema::optional("bias", "bias", FieldKind::Str),
        FieldSchema::optional(
            "x_watson_logging_opt_out",
            "X-Watson-Logging-Opt-Out",
            FieldKind::Boolean,
        )
        .set_location(Location::Header),
    ]
}

lazy_static! {
    static ref QUERY_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "QueryOptions",
        {
            let mut fields = vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
                FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                    .set_location(Location::Path),
            ];
            fields.extend(query_body_fields());
            fields
        },
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref FEDERATED_QUERY_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "FederatedQueryOptions",
        {
            let mut fields = vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
                FieldSchema::required("collection_ids", "collection_ids", FieldKind::Str),
            ];
            fields.extend(query_body_fields());
            fields
        },
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref QUERY_NOTICES_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "QueryNoticesOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::optional("filter", "filter", FieldKind::Str)
                .set_location(Location::Query),
            FieldSchema::optional("query", "query", FieldKind::Str).set_location(Location::Query),
            FieldSchema::optional(
                "natural_language_query",
                "natural_language_query",
                FieldKind::Str,
            )
            .set_location(Location::Query),
            FieldSchema::optional("passages", "passages", FieldKind::Boolean)
                .set_location(Location::Query),
            FieldSchema::optional("aggregation", "aggregation", FieldKind::Str)
                .set_location(Location::Query),
            FieldSchema::optional("count", "count", FieldKind::Long)
                .set_location(Location::Query),
            FieldSchema::optional("return_fields", "return", FieldKind::Str)
                .set_location(Location::Query),
            FieldSchema::optional("offset", "offset", FieldKind::Long)
                .set_location(Location::Query),
            FieldSchema::optional("sort", "sort", FieldKind::Str).set_location(Location::Query),
            FieldSchema::optional("highlight", "highlight", FieldKind::Boolean)
                .set_location(Location::Query),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref GET_AUTOCOMPLETION_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "GetAutocompletionOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("prefix", "prefix", FieldKind::Str)
                .set_location(Location::Query),
            FieldSchema::optional("field", "field", FieldKind::Str).set_location(Location::Query),
            FieldSchema::optional("count", "count", FieldKind::Long)
                .set_location(Location::Query),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref QUERY_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "QueryResponse",
        vec![
            FieldSchema::optional("matching_results", "matching_results", FieldKind::Long),
            FieldSchema::optional("results", "results", FieldKind::ListOf(Box::new(FieldKind::Json))),
            FieldSchema::optional(
                "aggregations",
                "aggregations",
                FieldKind::ListOf(Box::new(FieldKind::Json)),
            ),
            FieldSchema::optional("passages", "passages", FieldKind::ListOf(Box::new(FieldKind::Json))),
            FieldSchema::optional("duplicates_removed", "duplicates_removed", FieldKind::Long),
            FieldSchema::optional("session_token", "session_token", FieldKind::Str),
            FieldSchema::optional("retrieval_details", "retrieval_details", FieldKind::Json),
            FieldSchema::optional("suggested_query", "suggested_query", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref QUERY_NOTICES_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "QueryNoticesResponse",
        vec![
            FieldSchema::optional("matching_results", "matching_results", FieldKind::Long),
            FieldSchema::optional("results", "results", FieldKind::ListOf(Box::new(FieldKind::Json))),
            FieldSchema::optional(
                "aggregations",
                "aggregations",
                FieldKind::ListOf(Box::new(FieldKind::Json)),
            ),
            FieldSchema::optional("passages", "passages", FieldKind::ListOf(Box::new(FieldKind::Json))),
            FieldSchema::optional("duplicates_removed", "duplicates_removed", FieldKind::Long),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref COMPLETIONS: ModelDescriptor = ModelDescriptor::new(
        "Completions",
        vec![
            FieldSchema::optional(
                "completions",
                "completions",
                FieldKind::ListOf(Box::new(FieldKind::Str)),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// The query options.
///
/// A query against one collection. The query itself travels in the request
/// body; the `X-Watson-Logging-Opt-Out` flag travels as a header.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryOptions(Model);

impl QueryOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> QueryOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        QueryOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> QueryOptionsBuilder {
        QueryOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The Discovery Query Language filter.
    pub fn filter(&self) -> Option<&str> {
        self.0.get_str("filter")
    }

    /// The Discovery Query Language query.
    pub fn query(&self) -> Option<&str> {
        self.0.get_str("query")
    }

    /// The natural-language query.
    pub fn natural_language_query(&self) -> Option<&str> {
        self.0.get_str("natural_language_query")
    }

    /// Whether to return passages.
    pub fn passages(&self) -> Option<bool> {
        self.0.get_boolean("passages")
    }

    /// The aggregation to run over the matching results.
    pub fn aggregation(&self) -> Option<&str> {
        self.0.get_str("aggregation")
    }

    /// The number of results to return.
    pub fn count(&self) -> Option<i64> {
        self.0.get_long("count")
    }

    /// A comma-separated list of fields to return.
    pub fn return_fields(&self) -> Option<&str> {
        self.0.get_str("return_fields")
    }

    /// The number of results to skip.
    pub fn offset(&self) -> Option<i64> {
        self.0.get_long("offset")
    }

    /// A comma-separated list of sort directives.
    pub fn sort(&self) -> Option<&str> {
        self.0.get_str("sort")
    }

    /// Whether to highlight matching terms.
    pub fn highlight(&self) -> Option<bool> {
        self.0.get_boolean("highlight")
    }

    /// Whether to deduplicate near-identical results.
    pub fn deduplicate(&self) -> Option<bool> {
        self.0.get_boolean("deduplicate")
    }

    /// Whether to opt this query out of request logging.
    pub fn x_watson_logging_opt_out(&self) -> Option<bool> {
        self.0.get_boolean("x_watson_logging_opt_out")
    }
}

impl TypedModel for QueryOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &QUERY_OPTIONS
    }
    fn model(&self) -> &Model {
        &self.0
    }
    fn into_model(self) -> Model {
        self.0
    }
    fn from_model(model: Model) -> Self {
        Self(model)
    }
}

/// A builder for [QueryOptions].
#[derive(Clone, Debug)]
pub struct QueryOptionsBuilder(Builder);

impl QueryOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the filter.
    pub fn filter<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("filter", v.into()))
    }

    /// Sets the query. Use either this or the natural-language query.
    pub fn query<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("query", v.into()))
    }

    /// Sets the natural-language query.
    pub fn natural_language_query<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("natural_language_query", v.into()))
    }

    /// Requests passages in the result.
    pub fn passages(self, v: bool) -> Self {
        Self(self.0.set("passages", v))
    }

    /// Sets the aggregation.
    pub fn aggregation<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("aggregation", v.into()))
    }

    /// Sets the number of results to return.
    pub fn count(self, v: i64) -> Self {
        Self(self.0.set("count", v))
    }

    /// Sets the fields to return, comma-separated.
    pub fn return_fields<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("return_fields", v.into()))
    }

    /// Sets the number of results to skip.
    pub fn offset(self, v: i64) -> Self {
        Self(self.0.set("offset", v))
    }

    /// Sets the sort directives, comma-separated.
    pub fn sort<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("sort", v.into()))
    }

    /// Requests term highlighting.
    pub fn highlight(self, v: bool) -> Self {
        Self(self.0.set("highlight", v))
    }

    /// Sets the passage fields, comma-separated.
    pub fn passages_fields<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("passages_fields", v.into()))
    }

    /// Sets the maximum number of passages.
    pub fn passages_count(self, v: i64) -> Self {
        Self(self.0.set("passages_count", v))
    }

    /// Sets the approximate passage length, in characters.
    pub fn passages_characters(self, v: i64) -> Self {
        Self(self.0.set("passages_characters", v))
    }

    /// Requests deduplication of near-identical results.
    pub fn deduplicate(self, v: bool) -> Self {
        Self(self.0.set("deduplicate", v))
    }

    /// Sets the field to deduplicate on.
    pub fn deduplicate_field<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("deduplicate_field", v.into()))
    }

    /// Requests similar documents.
    pub fn similar(self, v: bool) -> Self {
        Self(self.0.set("similar", v))
    }

    /// Sets the documents to find similar documents for, comma-separated.
    pub fn similar_document_ids<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("similar_document_ids", v.into()))
    }

    /// Sets the fields used to compute similarity, comma-separated.
    pub fn similar_fields<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("similar_fields", v.into()))
    }

    /// Sets the field to bias the results towards.
    pub fn bias<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("bias", v.into()))
    }

    /// Opts this query out of request logging.
    pub fn x_watson_logging_opt_out(self, v: bool) -> Self {
        Self(self.0.set("x_watson_logging_opt_out", v))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<QueryOptions, Error> {
        self.0.build().map(QueryOptions)
    }
}

/// The federatedQuery options.
///
/// Like [QueryOptions], but runs against several collections of one
/// environment at once; `collection_ids` is a comma-separated list.
#[derive(Clone, Debug, PartialEq)]
pub struct FederatedQueryOptions(Model);

impl FederatedQueryOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_ids: C) -> FederatedQueryOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        FederatedQueryOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_ids", collection_ids.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> FederatedQueryOptionsBuilder {
        FederatedQueryOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The collections to query, comma-separated.
    pub fn collection_ids(&self) -> Option<&str> {
        self.0.get_str("collection_ids")
    }

    /// The natural-language query.
    pub fn natural_language_query(&self) -> Option<&str> {
        self.0.get_str("natural_language_query")
    }

    /// The Discovery Query Language filter.
    pub fn filter(&self) -> Option<&str> {
        self.0.get_str("filter")
    }
}

impl TypedModel for FederatedQueryOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &FEDERATED_QUERY_OPTIONS
    }
    fn model(&self) -> &Model {
        &self.0
    }
    fn into_model(self) -> Model {
        self.0
    }
    fn from_model(model: Model) -> Self {
        Self(model)
    }
}

/// A builder for [FederatedQueryOptions].
#[derive(Clone, Debug)]
pub struct FederatedQueryOptionsBuilder(Builder);

impl FederatedQueryOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collections to query, comma-separated.
    pub fn collection_ids<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_ids", v.into()))
    }

    /// Sets the filter.
    pub fn filter<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("filter", v.into()))
    }

    /// Sets the query.
    pub fn query<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("query", v.into()))
    }

    /// Sets the natural-language query.
    pub fn natural_language_query<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("natural_language_query", v.into()))
    }

    /// Sets the number of results to return.
    pub fn count(self, v: i64) -> Self {
        Self(self.0.set("count", v))
    }

    /// Sets the number of results to skip.
    pub fn offset(self, v: i64) -> Self {
        Self(self.0.set("offset", v))
    }

    /// Requests term highlighting.
    pub fn highlight(self, v: bool) -> Self {
        Self(self.0.set("highlight", v))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<FederatedQueryOptions, Error> {
        self.0.build().map(FederatedQueryOptions)
    }
}

/// The queryNotices options. Notices are queried with GET, so every filter
/// travels as a query parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryNoticesOptions(Model);

impl QueryNoticesOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> QueryNoticesOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        QueryNoticesOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> QueryNoticesOptionsBuilder {
        QueryNoticesOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The natural-language query.
    pub fn natural_language_query(&self) -> Option<&str> {
        self.0.get_str("natural_language_query")
    }

    /// The number of results to return.
    pub fn count(&self) -> Option<i64> {
        self.0.get_long("count")
    }
}

impl TypedModel for QueryNoticesOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &QUERY_NOTICES_OPTIONS
    }
    fn model(&self) -> &Model {
        &self.0
    }
    fn into_model(self) -> Model {
        self.0
    }
    fn from_model(model: Model) -> Self {
        Self(model)
    }
}

/// A builder for [QueryNoticesOptions].
#[derive(Clone, Debug)]
pub struct QueryNoticesOptionsBuilder(Builder);

impl QueryNoticesOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the filter.
    pub fn filter<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("filter", v.into()))
    }

    /// Sets the query.
    pub fn query<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("query", v.into()))
    }

    /// Sets the natural-language query.
    pub fn natural_language_query<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("natural_language_query", v.into()))
    }

    /// Requests passages in the result.
    pub fn passages(self, v: bool) -> Self {
        Self(self.0.set("passages", v))
    }

    /// Sets the aggregation.
    pub fn aggregation<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("aggregation", v.into()))
    }

    /// Sets the number of results to return.
    pub fn count(self, v: i64) -> Self {
        Self(self.0.set("count", v))
    }

    /// Sets the fields to return, comma-separated.
    pub fn return_fields<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("return_fields", v.into()))
    }

    /// Sets the number of results to skip.
    pub fn offset(self, v: i64) -> Self {
        Self(self.0.set("offset", v))
    }

    /// Sets the sort directives, comma-separated.
    pub fn sort<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("sort", v.into()))
    }

    /// Requests term highlighting.
    pub fn highlight(self, v: bool) -> Self {
        Self(self.0.set("highlight", v))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<QueryNoticesOptions, Error> {
        self.0.build().map(QueryNoticesOptions)
    }
}

/// The getAutocompletion options.
#[derive(Clone, Debug, PartialEq)]
pub struct GetAutocompletionOptions(Model);

impl GetAutocompletionOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C, P>(
        environment_id: E,
        collection_id: C,
        prefix: P,
    ) -> GetAutocompletionOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
        P: Into<String>,
    {
        GetAutocompletionOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into())
                .set("prefix", prefix.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> GetAutocompletionOptionsBuilder {
        GetAutocompletionOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The prefix to complete.
    pub fn prefix(&self) -> Option<&str> {
        self.0.get_str("prefix")
    }

    /// The field to draw completions from.
    pub fn field(&self) -> Option<&str> {
        self.0.get_str("field")
    }

    /// The number of completions to return.
    pub fn count(&self) -> Option<i64> {
        self.0.get_long("count")
    }
}

impl TypedModel for GetAutocompletionOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &GET_AUTOCOMPLETION_OPTIONS
    }
    fn model(&self) -> &Model {
        &self.0
    }
    fn into_model(self) -> Model {
        self.0
    }
    fn from_model(model: Model) -> Self {
        Self(model)
    }
}

/// A builder for [GetAutocompletionOptions].
#[derive(Clone, Debug)]
pub struct GetAutocompletionOptionsBuilder(Builder);

impl GetAutocompletionOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the prefix to complete.
    pub fn prefix<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("prefix", v.into()))
    }

    /// Sets the field to draw completions from.
    pub fn field<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("field", v.into()))
    }

    /// Sets the number of completions to return.
    pub fn count(self, v: i64) -> Self {
        Self(self.0.set("count", v))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<GetAutocompletionOptions, Error> {
        self.0.build().map(GetAutocompletionOptions)
    }
}

/// A response containing the documents and aggregations for the query.
///
/// Individual results have no fixed schema — their fields come from the
/// ingested documents — so they surface as free-form JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryResponse(Model);

impl QueryResponse {
    /// The number of matching results.
    pub fn matching_results(&self) -> Option<i64> {
        self.0.get_long("matching_results")
    }

    /// The matching documents.
    pub fn results(&self) -> Vec<serde_json::Value> {
        self.0
            .get_list("results")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_json().cloned())
            .collect()
    }

    /// The aggregation results.
    pub fn aggregations(&self) -> Vec<serde_json::Value> {
        self.0
            .get_list("aggregations")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_json().cloned())
            .collect()
    }

    /// The matching passages.
    pub fn passages(&self) -> Vec<serde_json::Value> {
        self.0
            .get_list("passages")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_json().cloned())
            .collect()
    }

    /// The number of near-identical results removed.
    pub fn duplicates_removed(&self) -> Option<i64> {
        self.0.get_long("duplicates_removed")
    }

    /// The session token for this query, used when submitting events.
    pub fn session_token(&self) -> Option<&str> {
        self.0.get_str("session_token")
    }

    /// Details about how the results were retrieved.
    pub fn retrieval_details(&self) -> Option<&serde_json::Value> {
        self.0.get_json("retrieval_details")
    }

    /// A suggested spelling correction for the query.
    pub fn suggested_query(&self) -> Option<&str> {
        self.0.get_str("suggested_query")
    }
}

impl TypedModel for QueryResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &QUERY_RESPONSE
    }
    fn model(&self) -> &Model {
        &self.0
    }
    fn into_model(self) -> Model {
        self.0
    }
    fn from_model(model: Model) -> Self {
        Self(model)
    }
}

/// The notices matching a notices query.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryNoticesResponse(Model);

impl QueryNoticesResponse {
    /// The number of matching results.
    pub fn matching_results(&self) -> Option<i64> {
        self.0.get_long("matching_results")
    }

    /// The matching notices, as free-form JSON.
    pub fn results(&self) -> Vec<serde_json::Value> {
        self.0
            .get_list("results")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_json().cloned())
            .collect()
    }

    /// The aggregation results.
    pub fn aggregations(&self) -> Vec<serde_json::Value> {
        self.0
            .get_list("aggregations")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_json().cloned())
            .collect()
    }

    /// The number of near-identical results removed.
    pub fn duplicates_removed(&self) -> Option<i64> {
        self.0.get_long("duplicates_removed")
    }
}

impl TypedModel for QueryNoticesResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &QUERY_NOTICES_RESPONSE
    }
    fn model(&self) -> &Model {
        &self.0
    }
    fn into_model(self) -> Model {
        self.0
    }
    fn from_model(model: Model) -> Self {
        Self(model)
    }
}

/// Completions for a prefix.
#[derive(Clone, Debug, PartialEq)]
pub struct Completions(Model);

impl Completions {
    /// The completions.
    pub fn completions(&self) -> Vec<String> {
        self.0
            .get_list("completions")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}

impl TypedModel for Completions {
    fn descriptor() -> &'static ModelDescriptor {
        &COMPLETIONS
    }
    fn model(&self) -> &Model {
        &self.0
    }
    fn into_model(self) -> Model {
        self.0
    }
    fn from_model(model: Model) -> Self {
        Self(model)
    }
}
