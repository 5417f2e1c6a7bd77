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

lazy_static! {
    static ref TRAINING_EXAMPLE: ModelDescriptor = ModelDescriptor::new(
        "TrainingExample",
        vec![
            FieldSchema::optional("document_id", "document_id", FieldKind::Str),
            FieldSchema::optional("cross_reference", "cross_reference", FieldKind::Str),
            FieldSchema::optional("relevance", "relevance", FieldKind::Integer),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref ADD_TRAINING_DATA_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "AddTrainingDataOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::optional(
                "natural_language_query",
                "natural_language_query",
                FieldKind::Str,
            ),
            FieldSchema::optional("filter", "filter", FieldKind::Str),
            FieldSchema::optional(
                "examples",
                "examples",
                FieldKind::ListOf(Box::new(FieldKind::Object(&TRAINING_EXAMPLE))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref CREATE_TRAINING_EXAMPLE_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "CreateTrainingExampleOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("query_id", "query_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::optional("document_id", "document_id", FieldKind::Str),
            FieldSchema::optional("cross_reference", "cross_reference", FieldKind::Str),
            FieldSchema::optional("relevance", "relevance", FieldKind::Integer),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_TRAINING_DATA_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "DeleteTrainingDataOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("query_id", "query_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_ALL_TRAINING_DATA_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "DeleteAllTrainingDataOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LIST_TRAINING_DATA_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "ListTrainingDataOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref TRAINING_QUERY: ModelDescriptor = ModelDescriptor::new(
        "TrainingQuery",
        vec![
            FieldSchema::optional("query_id", "query_id", FieldKind::Str),
            FieldSchema::optional(
                "natural_language_query",
                "natural_language_query",
                FieldKind::Str,
            ),
            FieldSchema::optional("filter", "filter", FieldKind::Str),
            FieldSchema::optional(
                "examples",
                "examples",
                FieldKind::ListOf(Box::new(FieldKind::Object(&TRAINING_EXAMPLE))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref TRAINING_DATA_SET: ModelDescriptor = ModelDescriptor::new(
        "TrainingDataSet",
        vec![
            FieldSchema::optional("environment_id", "environment_id", FieldKind::Str),
            FieldSchema::optional("collection_id", "collection_id", FieldKind::Str),
            FieldSchema::optional(
                "queries",
                "queries",
                FieldKind::ListOf(Box::new(FieldKind::Object(&TRAINING_QUERY))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref TRAINING_EXAMPLE_LIST: ModelDescriptor = ModelDescriptor::new(
        "TrainingExampleList",
        vec![
            FieldSchema::optional(
                "examples",
                "examples",
                FieldKind::ListOf(Box::new(FieldKind::Object(&TRAINING_EXAMPLE))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// A training example: a document and its relevance to a training query.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingExample(Model);

impl TrainingExample {
    /// Starts a builder. All properties are optional.
    pub fn builder() -> TrainingExampleBuilder {
        TrainingExampleBuilder(Builder::new(Self::descriptor()))
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> TrainingExampleBuilder {
        TrainingExampleBuilder(self.0.new_builder())
    }

    /// The ID of the document.
    pub fn document_id(&self) -> Option<&str> {
        self.0.get_str("document_id")
    }

    /// A cross-reference to the document, when IDs are unstable.
    pub fn cross_reference(&self) -> Option<&str> {
        self.0.get_str("cross_reference")
    }

    /// The relevance of the document to the query.
    pub fn relevance(&self) -> Option<i32> {
        self.0.get_integer("relevance")
    }
}

impl TypedModel for TrainingExample {
    fn descriptor() -> &'static ModelDescriptor {
        &TRAINING_EXAMPLE
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

/// A builder for [TrainingExample].
#[derive(Clone, Debug)]
pub struct TrainingExampleBuilder(Builder);

impl TrainingExampleBuilder {
    /// Sets the document ID.
    pub fn document_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("document_id", v.into()))
    }

    /// Sets the cross-reference.
    pub fn cross_reference<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("cross_reference", v.into()))
    }

    /// Sets the relevance.
    pub fn relevance(self, v: i32) -> Self {
        Self(self.0.set("relevance", v))
    }

    /// Builds the example.
    pub fn build(self) -> Result<TrainingExample, Error> {
        self.0.build().map(TrainingExample)
    }
}

/// The addTrainingData options.
///
/// Adds a training query with its rated examples. Examples are appended in
/// order; the order is preserved on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct AddTrainingDataOptions(Model);

impl AddTrainingDataOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> AddTrainingDataOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        AddTrainingDataOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> AddTrainingDataOptionsBuilder {
        AddTrainingDataOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The natural-language query being trained.
    pub fn natural_language_query(&self) -> Option<&str> {
        self.0.get_str("natural_language_query")
    }

    /// The filter applied with the query.
    pub fn filter(&self) -> Option<&str> {
        self.0.get_str("filter")
    }

    /// The rated examples, in the order they were added.
    pub fn examples(&self) -> Vec<TrainingExample> {
        self.0
            .get_list("examples")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(TrainingExample::from_model))
            .collect()
    }
}

impl TypedModel for AddTrainingDataOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &ADD_TRAINING_DATA_OPTIONS
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

/// A builder for [AddTrainingDataOptions].
#[derive(Clone, Debug)]
pub struct AddTrainingDataOptionsBuilder(Builder);

impl AddTrainingDataOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the natural-language query.
    pub fn natural_language_query<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("natural_language_query", v.into()))
    }

    /// Sets the filter.
    pub fn filter<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("filter", v.into()))
    }

    /// Adds one example. May be called repeatedly; the order of calls is
    /// the order on the wire.
    pub fn add_examples(self, v: TrainingExample) -> Self {
        Self(self.0.append("examples", v.into_model()))
    }

    /// Replaces the examples.
    pub fn examples(self, v: Vec<TrainingExample>) -> Self {
        let items = v
            .into_iter()
            .map(|e| sdk_core::Value::from(e.into_model()))
            .collect::<Vec<_>>();
        Self(self.0.set("examples", items))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<AddTrainingDataOptions, Error> {
        self.0.build().map(AddTrainingDataOptions)
    }
}

/// The createTrainingExample options.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateTrainingExampleOptions(Model);

impl CreateTrainingExampleOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C, Q>(
        environment_id: E,
        collection_id: C,
        query_id: Q,
    ) -> CreateTrainingExampleOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
        Q: Into<String>,
    {
        CreateTrainingExampleOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into())
                .set("query_id", query_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> CreateTrainingExampleOptionsBuilder {
        CreateTrainingExampleOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The ID of the training query.
    pub fn query_id(&self) -> Option<&str> {
        self.0.get_str("query_id")
    }

    /// The ID of the document.
    pub fn document_id(&self) -> Option<&str> {
        self.0.get_str("document_id")
    }

    /// A cross-reference to the document.
    pub fn cross_reference(&self) -> Option<&str> {
        self.0.get_str("cross_reference")
    }

    /// The relevance of the document.
    pub fn relevance(&self) -> Option<i32> {
        self.0.get_integer("relevance")
    }
}

impl TypedModel for CreateTrainingExampleOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &CREATE_TRAINING_EXAMPLE_OPTIONS
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

/// A builder for [CreateTrainingExampleOptions].
#[derive(Clone, Debug)]
pub struct CreateTrainingExampleOptionsBuilder(Builder);

impl CreateTrainingExampleOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the training query ID.
    pub fn query_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("query_id", v.into()))
    }

    /// Sets the document ID.
    pub fn document_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("document_id", v.into()))
    }

    /// Sets the cross-reference.
    pub fn cross_reference<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("cross_reference", v.into()))
    }

    /// Sets the relevance.
    pub fn relevance(self, v: i32) -> Self {
        Self(self.0.set("relevance", v))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<CreateTrainingExampleOptions, Error> {
        self.0.build().map(CreateTrainingExampleOptions)
    }
}

/// The deleteTrainingData options.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteTrainingDataOptions(Model);

impl DeleteTrainingDataOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C, Q>(
        environment_id: E,
        collection_id: C,
        query_id: Q,
    ) -> DeleteTrainingDataOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
        Q: Into<String>,
    {
        DeleteTrainingDataOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into())
                .set("query_id", query_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> DeleteTrainingDataOptionsBuilder {
        DeleteTrainingDataOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The ID of the training query.
    pub fn query_id(&self) -> Option<&str> {
        self.0.get_str("query_id")
    }
}

impl TypedModel for DeleteTrainingDataOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_TRAINING_DATA_OPTIONS
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

/// A builder for [DeleteTrainingDataOptions].
#[derive(Clone, Debug)]
pub struct DeleteTrainingDataOptionsBuilder(Builder);

impl DeleteTrainingDataOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the training query ID.
    pub fn query_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("query_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<DeleteTrainingDataOptions, Error> {
        self.0.build().map(DeleteTrainingDataOptions)
    }
}

/// The deleteAllTrainingData options.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteAllTrainingDataOptions(Model);

impl DeleteAllTrainingDataOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> DeleteAllTrainingDataOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        DeleteAllTrainingDataOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> DeleteAllTrainingDataOptionsBuilder {
        DeleteAllTrainingDataOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }
}

impl TypedModel for DeleteAllTrainingDataOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_ALL_TRAINING_DATA_OPTIONS
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

/// A builder for [DeleteAllTrainingDataOptions].
#[derive(Clone, Debug)]
pub struct DeleteAllTrainingDataOptionsBuilder(Builder);

impl DeleteAllTrainingDataOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<DeleteAllTrainingDataOptions, Error> {
        self.0.build().map(DeleteAllTrainingDataOptions)
    }
}

/// The listTrainingData options.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTrainingDataOptions(Model);

impl ListTrainingDataOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> ListTrainingDataOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        ListTrainingDataOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> ListTrainingDataOptionsBuilder {
        ListTrainingDataOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }
}

impl TypedModel for ListTrainingDataOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &LIST_TRAINING_DATA_OPTIONS
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

/// A builder for [ListTrainingDataOptions].
#[derive(Clone, Debug)]
pub struct ListTrainingDataOptionsBuilder(Builder);

impl ListTrainingDataOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<ListTrainingDataOptions, Error> {
        self.0.build().map(ListTrainingDataOptions)
    }
}

/// A training query with its rated examples.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingQuery(Model);

impl TrainingQuery {
    /// The ID assigned to the training query.
    pub fn query_id(&self) -> Option<&str> {
        self.0.get_str("query_id")
    }

    /// The natural-language query.
    pub fn natural_language_query(&self) -> Option<&str> {
        self.0.get_str("natural_language_query")
    }

    /// The filter applied with the query.
    pub fn filter(&self) -> Option<&str> {
        self.0.get_str("filter")
    }

    /// The rated examples.
    pub fn examples(&self) -> Vec<TrainingExample> {
        self.0
            .get_list("examples")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(TrainingExample::from_model))
            .collect()
    }
}

impl TypedModel for TrainingQuery {
    fn descriptor() -> &'static ModelDescriptor {
        &TRAINING_QUERY
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

/// The complete training data set of a collection.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingDataSet(Model);

impl TrainingDataSet {
    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The training queries.
    pub fn queries(&self) -> Vec<TrainingQuery> {
        self.0
            .get_list("queries")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(TrainingQuery::from_model))
            .collect()
    }
}

impl TypedModel for TrainingDataSet {
    fn descriptor() -> &'static ModelDescriptor {
        &TRAINING_DATA_SET
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

/// The examples of one training query.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingExampleList(Model);

impl TrainingExampleList {
    /// The examples.
    pub fn examples(&self) -> Vec<TrainingExample> {
        self.0
            .get_list("examples")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(TrainingExample::from_model))
            .collect()
    }
}

impl TypedModel for TrainingExampleList {
    fn descriptor() -> &'static ModelDescriptor {
        &TRAINING_EXAMPLE_LIST
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
