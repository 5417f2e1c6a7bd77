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

/// The result buckets a metrics query can report on.
pub mod metric_result_type {
    pub const DOCUMENT: &str = "document";

    /// All documented result types.
    pub const ALL: &[&str] = &[DOCUMENT];
}

fn metrics_window_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::optional("start_time", "start_time", FieldKind::DateTime)
            .set_location(Location::Query),
        FieldSchema::optional("end_time", "end_time", FieldKind::DateTime)
            .set_location(Location::Query),
        FieldSchema::optional(
            "result_type",
            "result_type",
            FieldKind::Enum(metric_result_type::ALL),
        )
        .set_location(Location::Query),
    ]
}

lazy_static! {
    static ref GET_METRICS_QUERY_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "GetMetricsQueryOptions",
        metrics_window_fields(),
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref GET_METRICS_EVENT_RATE_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "GetMetricsEventRateOptions",
        metrics_window_fields(),
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref GET_METRICS_QUERY_TOKEN_EVENT_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "GetMetricsQueryTokenEventOptions",
        vec![
            FieldSchema::optional("count", "count", FieldKind::Long)
                .set_location(Location::Query),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref QUERY_LOG_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "QueryLogOptions",
        vec![
            FieldSchema::optional("filter", "filter", FieldKind::Str)
                .set_location(Location::Query),
            FieldSchema::optional("query", "query", FieldKind::Str).set_location(Location::Query),
            FieldSchema::optional("count", "count", FieldKind::Long)
                .set_location(Location::Query),
            FieldSchema::optional("offset", "offset", FieldKind::Long)
                .set_location(Location::Query),
            FieldSchema::optional("sort", "sort", FieldKind::ListOf(Box::new(FieldKind::Str)))
                .set_location(Location::Query),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref METRIC_AGGREGATION_RESULT: ModelDescriptor = ModelDescriptor::new(
        "MetricAggregationResult",
        vec![
            FieldSchema::optional("key_as_string", "key_as_string", FieldKind::DateTime),
            FieldSchema::optional("key", "key", FieldKind::Long),
            FieldSchema::optional("matching_results", "matching_results", FieldKind::Integer),
            FieldSchema::optional("event_rate", "event_rate", FieldKind::Double),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref METRIC_AGGREGATION: ModelDescriptor = ModelDescriptor::new(
        "MetricAggregation",
        vec![
            FieldSchema::optional("interval", "interval", FieldKind::Str),
            FieldSchema::optional("event_type", "event_type", FieldKind::Str),
            FieldSchema::optional(
                "results",
                "results",
                FieldKind::ListOf(Box::new(FieldKind::Object(&METRIC_AGGREGATION_RESULT))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref METRIC_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "MetricResponse",
        vec![
            FieldSchema::optional(
                "aggregations",
                "aggregations",
                FieldKind::ListOf(Box::new(FieldKind::Object(&METRIC_AGGREGATION))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref METRIC_TOKEN_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "MetricTokenResponse",
        vec![
            FieldSchema::optional(
                "aggregations",
                "aggregations",
                FieldKind::ListOf(Box::new(FieldKind::Json)),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LOG_QUERY_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "LogQueryResponse",
        vec![
            FieldSchema::optional("matching_results", "matching_results", FieldKind::Long),
            FieldSchema::optional("results", "results", FieldKind::ListOf(Box::new(FieldKind::Json))),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// The getMetricsQuery options.
///
/// The time window travels as query parameters, in the service's timestamp
/// format.
#[derive(Clone, Debug, PartialEq)]
pub struct GetMetricsQueryOptions(Model);

impl GetMetricsQueryOptions {
    /// Starts a builder. This operation has no required properties.
    pub fn builder() -> GetMetricsQueryOptionsBuilder {
        GetMetricsQueryOptionsBuilder(Builder::new(Self::descriptor()))
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> GetMetricsQueryOptionsBuilder {
        GetMetricsQueryOptionsBuilder(self.0.new_builder())
    }

    /// The start of the reporting window.
    pub fn start_time(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("start_time")
    }

    /// The end of the reporting window.
    pub fn end_time(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("end_time")
    }

    /// The result bucket to report on. See [metric_result_type].
    pub fn result_type(&self) -> Option<&str> {
        self.0.get_str("result_type")
    }
}

impl TypedModel for GetMetricsQueryOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &GET_METRICS_QUERY_OPTIONS
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

/// A builder for [GetMetricsQueryOptions].
#[derive(Clone, Debug)]
pub struct GetMetricsQueryOptionsBuilder(Builder);

impl GetMetricsQueryOptionsBuilder {
    /// Sets the start of the reporting window.
    pub fn start_time(self, v: wkt::Timestamp) -> Self {
        Self(self.0.set("start_time", v))
    }

    /// Sets the end of the reporting window.
    pub fn end_time(self, v: wkt::Timestamp) -> Self {
        Self(self.0.set("end_time", v))
    }

    /// Sets the result bucket to report on.
    pub fn result_type<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("result_type", v.into()))
    }

    /// Builds the options.
    pub fn build(self) -> Result<GetMetricsQueryOptions, Error> {
        self.0.build().map(GetMetricsQueryOptions)
    }
}

/// The getMetricsEventRate options.
#[derive(Clone, Debug, PartialEq)]
pub struct GetMetricsEventRateOptions(Model);

impl GetMetricsEventRateOptions {
    /// Starts a builder. This operation has no required properties.
    pub fn builder() -> GetMetricsEventRateOptionsBuilder {
        GetMetricsEventRateOptionsBuilder(Builder::new(Self::descriptor()))
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> GetMetricsEventRateOptionsBuilder {
        GetMetricsEventRateOptionsBuilder(self.0.new_builder())
    }

    /// The start of the reporting window.
    pub fn start_time(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("start_time")
    }

    /// The end of the reporting window.
    pub fn end_time(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("end_time")
    }

    /// The result bucket to report on.
    pub fn result_type(&self) -> Option<&str> {
        self.0.get_str("result_type")
    }
}

impl TypedModel for GetMetricsEventRateOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &GET_METRICS_EVENT_RATE_OPTIONS
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

/// A builder for [GetMetricsEventRateOptions].
#[derive(Clone, Debug)]
pub struct GetMetricsEventRateOptionsBuilder(Builder);

impl GetMetricsEventRateOptionsBuilder {
    /// Sets the start of the reporting window.
    pub fn start_time(self, v: wkt::Timestamp) -> Self {
        Self(self.0.set("start_time", v))
    }

    /// Sets the end of the reporting window.
    pub fn end_time(self, v: wkt::Timestamp) -> Self {
        Self(self.0.set("end_time", v))
    }

    /// Sets the result bucket to report on.
    pub fn result_type<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("result_type", v.into()))
    }

    /// Builds the options.
    pub fn build(self) -> Result<GetMetricsEventRateOptions, Error> {
        self.0.build().map(GetMetricsEventRateOptions)
    }
}

/// The getMetricsQueryTokenEvent options.
#[derive(Clone, Debug, PartialEq)]
pub struct GetMetricsQueryTokenEventOptions(Model);

impl GetMetricsQueryTokenEventOptions {
    /// Starts a builder. This operation has no required properties.
    pub fn builder() -> GetMetricsQueryTokenEventOptionsBuilder {
        GetMetricsQueryTokenEventOptionsBuilder(Builder::new(Self::descriptor()))
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> GetMetricsQueryTokenEventOptionsBuilder {
        GetMetricsQueryTokenEventOptionsBuilder(self.0.new_builder())
    }

    /// The number of tokens to return.
    pub fn count(&self) -> Option<i64> {
        self.0.get_long("count")
    }
}

impl TypedModel for GetMetricsQueryTokenEventOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &GET_METRICS_QUERY_TOKEN_EVENT_OPTIONS
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

/// A builder for [GetMetricsQueryTokenEventOptions].
#[derive(Clone, Debug)]
pub struct GetMetricsQueryTokenEventOptionsBuilder(Builder);

impl GetMetricsQueryTokenEventOptionsBuilder {
    /// Sets the number of tokens to return.
    pub fn count(self, v: i64) -> Self {
        Self(self.0.set("count", v))
    }

    /// Builds the options.
    pub fn build(self) -> Result<GetMetricsQueryTokenEventOptions, Error> {
        self.0.build().map(GetMetricsQueryTokenEventOptions)
    }
}

/// The queryLog options.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryLogOptions(Model);

impl QueryLogOptions {
    /// Starts a builder. This operation has no required properties.
    pub fn builder() -> QueryLogOptionsBuilder {
        QueryLogOptionsBuilder(Builder::new(Self::descriptor()))
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> QueryLogOptionsBuilder {
        QueryLogOptionsBuilder(self.0.new_builder())
    }

    /// The Discovery Query Language filter.
    pub fn filter(&self) -> Option<&str> {
        self.0.get_str("filter")
    }

    /// The Discovery Query Language query.
    pub fn query(&self) -> Option<&str> {
        self.0.get_str("query")
    }

    /// The number of log entries to return.
    pub fn count(&self) -> Option<i64> {
        self.0.get_long("count")
    }

    /// The number of log entries to skip.
    pub fn offset(&self) -> Option<i64> {
        self.0.get_long("offset")
    }

    /// The sort directives, in the order they were added. Each becomes its
    /// own query parameter.
    pub fn sort(&self) -> Vec<String> {
        self.0
            .get_list("sort")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}

impl TypedModel for QueryLogOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &QUERY_LOG_OPTIONS
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

/// A builder for [QueryLogOptions].
#[derive(Clone, Debug)]
pub struct QueryLogOptionsBuilder(Builder);

impl QueryLogOptionsBuilder {
    /// Sets the filter.
    pub fn filter<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("filter", v.into()))
    }

    /// Sets the query.
    pub fn query<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("query", v.into()))
    }

    /// Sets the number of log entries to return.
    pub fn count(self, v: i64) -> Self {
        Self(self.0.set("count", v))
    }

    /// Sets the number of log entries to skip.
    pub fn offset(self, v: i64) -> Self {
        Self(self.0.set("offset", v))
    }

    /// Adds one sort directive. The order of calls is preserved.
    pub fn add_sort<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.append("sort", v.into()))
    }

    /// Builds the options.
    pub fn build(self) -> Result<QueryLogOptions, Error> {
        self.0.build().map(QueryLogOptions)
    }
}

/// One data point of a metric aggregation.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricAggregationResult(Model);

impl MetricAggregationResult {
    /// The start of the interval, as a timestamp.
    pub fn key_as_string(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("key_as_string")
    }

    /// The start of the interval, in milliseconds since the epoch.
    pub fn key(&self) -> Option<i64> {
        self.0.get_long("key")
    }

    /// The number of matching results in the interval.
    pub fn matching_results(&self) -> Option<i32> {
        self.0.get_integer("matching_results")
    }

    /// The event rate in the interval.
    pub fn event_rate(&self) -> Option<f64> {
        self.0.get_double("event_rate")
    }
}

impl TypedModel for MetricAggregationResult {
    fn descriptor() -> &'static ModelDescriptor {
        &METRIC_AGGREGATION_RESULT
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

/// One metric aggregation over a time window.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricAggregation(Model);

impl MetricAggregation {
    /// The interval the aggregation is bucketed by.
    pub fn interval(&self) -> Option<&str> {
        self.0.get_str("interval")
    }

    /// The event type the aggregation reports on.
    pub fn event_type(&self) -> Option<&str> {
        self.0.get_str("event_type")
    }

    /// The data points.
    pub fn results(&self) -> Vec<MetricAggregationResult> {
        self.0
            .get_list("results")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(MetricAggregationResult::from_model))
            .collect()
    }
}

impl TypedModel for MetricAggregation {
    fn descriptor() -> &'static ModelDescriptor {
        &METRIC_AGGREGATION
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

/// The metrics for a time window.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricResponse(Model);

impl MetricResponse {
    /// The aggregations.
    pub fn aggregations(&self) -> Vec<MetricAggregation> {
        self.0
            .get_list("aggregations")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(MetricAggregation::from_model))
            .collect()
    }
}

impl TypedModel for MetricResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &METRIC_RESPONSE
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

/// The most frequent query tokens and their event rates.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricTokenResponse(Model);

impl MetricTokenResponse {
    /// The aggregations, as free-form JSON.
    pub fn aggregations(&self) -> Vec<serde_json::Value> {
        self.0
            .get_list("aggregations")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_json().cloned())
            .collect()
    }
}

impl TypedModel for MetricTokenResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &METRIC_TOKEN_RESPONSE
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

/// The query log entries matching a log query.
#[derive(Clone, Debug, PartialEq)]
pub struct LogQueryResponse(Model);

impl LogQueryResponse {
    /// The number of matching log entries.
    pub fn matching_results(&self) -> Option<i64> {
        self.0.get_long("matching_results")
    }

    /// The log entries, as free-form JSON.
    pub fn results(&self) -> Vec<serde_json::Value> {
        self.0
            .get_list("results")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_json().cloned())
            .collect()
    }
}

impl TypedModel for LogQueryResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &LOG_QUERY_RESPONSE
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
