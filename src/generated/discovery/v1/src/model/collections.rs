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

/// The languages a collection's documents can be in.
pub mod collection_language {
    pub const ARABIC: &str = "ar";
    pub const CHINESE_SIMPLIFIED: &str = "zh-CN";
    pub const DUTCH: &str = "nl";
    pub const ENGLISH: &str = "en";
    pub const FRENCH: &str = "fr";
    pub const GERMAN: &str = "de";
    pub const ITALIAN: &str = "it";
    pub const JAPANESE: &str = "ja";
    pub const KOREAN: &str = "ko";
    pub const PORTUGUESE: &str = "pt";
    pub const SPANISH: &str = "es";

    /// All documented languages.
    pub const ALL: &[&str] = &[
        ARABIC,
        CHINESE_SIMPLIFIED,
        DUTCH,
        ENGLISH,
        FRENCH,
        GERMAN,
        ITALIAN,
        JAPANESE,
        KOREAN,
        PORTUGUESE,
        SPANISH,
    ];
}

/// The status of a collection.
pub mod collection_status {
    pub const ACTIVE: &str = "active";
    pub const PENDING: &str = "pending";
    pub const MAINTENANCE: &str = "maintenance";

    /// All documented statuses.
    pub const ALL: &[&str] = &[ACTIVE, PENDING, MAINTENANCE];
}

lazy_static! {
    static ref CREATE_COLLECTION_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "CreateCollectionOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("name", "name", FieldKind::Str),
            FieldSchema::optional("description", "description", FieldKind::Str),
            FieldSchema::optional("configuration_id", "configuration_id", FieldKind::Str),
            FieldSchema::optional("language", "language", FieldKind::Enum(collection_language::ALL)),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref UPDATE_COLLECTION_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "UpdateCollectionOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("name", "name", FieldKind::Str),
            FieldSchema::optional("description", "description", FieldKind::Str),
            FieldSchema::optional("configuration_id", "configuration_id", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref GET_COLLECTION_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "GetCollectionOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_COLLECTION_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "DeleteCollectionOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LIST_COLLECTIONS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "ListCollectionsOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::optional("name", "name", FieldKind::Str).set_location(Location::Query),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref CREATE_STOPWORD_LIST_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "CreateStopwordListOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("stopword_file", "stopword_file", FieldKind::Binary)
                .set_location(Location::Part),
            FieldSchema::required("stopword_filename", "stopword_filename", FieldKind::Str),
        ],
        vec![wkt::schema::Constraint::RequiresCompanion {
            if_set: "stopword_file",
            then_required: "stopword_filename",
        }],
    )
    .expect("static descriptor is well-formed");
    static ref DOCUMENT_COUNTS: ModelDescriptor = ModelDescriptor::new(
        "DocumentCounts",
        vec![
            FieldSchema::optional("available", "available", FieldKind::Long),
            FieldSchema::optional("processing", "processing", FieldKind::Long),
            FieldSchema::optional("failed", "failed", FieldKind::Long),
            FieldSchema::optional("pending", "pending", FieldKind::Long),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref COLLECTION: ModelDescriptor = ModelDescriptor::new(
        "Collection",
        vec![
            FieldSchema::optional("collection_id", "collection_id", FieldKind::Str),
            FieldSchema::optional("name", "name", FieldKind::Str),
            FieldSchema::optional("description", "description", FieldKind::Str),
            FieldSchema::optional("created", "created", FieldKind::DateTime),
            FieldSchema::optional("updated", "updated", FieldKind::DateTime),
            FieldSchema::optional("status", "status", FieldKind::Enum(collection_status::ALL)),
            FieldSchema::optional("configuration_id", "configuration_id", FieldKind::Str),
            FieldSchema::optional("language", "language", FieldKind::Str),
            FieldSchema::optional(
                "document_counts",
                "document_counts",
                FieldKind::Object(&DOCUMENT_COUNTS),
            ),
            FieldSchema::optional("disk_usage", "disk_usage", FieldKind::Json),
            FieldSchema::optional("training_status", "training_status", FieldKind::Json),
            FieldSchema::optional(
                "smart_document_understanding",
                "smart_document_understanding",
                FieldKind::Json,
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LIST_COLLECTIONS_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "ListCollectionsResponse",
        vec![
            FieldSchema::optional(
                "collections",
                "collections",
                FieldKind::ListOf(Box::new(FieldKind::Object(&COLLECTION))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_COLLECTION_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "DeleteCollectionResponse",
        vec![
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str),
            FieldSchema::required("status", "status", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref TOKEN_DICT_STATUS_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "TokenDictStatusResponse",
        vec![
            FieldSchema::optional("status", "status", FieldKind::Str),
            FieldSchema::optional("type", "type", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// The createCollection options.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateCollectionOptions(Model);

impl CreateCollectionOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, N>(environment_id: E, name: N) -> CreateCollectionOptionsBuilder
    where
        E: Into<String>,
        N: Into<String>,
    {
        CreateCollectionOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("name", name.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> CreateCollectionOptionsBuilder {
        CreateCollectionOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The name of the collection to be created.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }

    /// The description of the collection.
    pub fn description(&self) -> Option<&str> {
        self.0.get_str("description")
    }

    /// The ID of the configuration in which the collection is to be created.
    pub fn configuration_id(&self) -> Option<&str> {
        self.0.get_str("configuration_id")
    }

    /// The language of the documents. See [collection_language].
    pub fn language(&self) -> Option<&str> {
        self.0.get_str("language")
    }
}

impl TypedModel for CreateCollectionOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &CREATE_COLLECTION_OPTIONS
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

/// A builder for [CreateCollectionOptions].
#[derive(Clone, Debug)]
pub struct CreateCollectionOptionsBuilder(Builder);

impl CreateCollectionOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the name.
    pub fn name<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("name", v.into()))
    }

    /// Sets the description.
    pub fn description<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("description", v.into()))
    }

    /// Sets the configuration ID.
    pub fn configuration_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("configuration_id", v.into()))
    }

    /// Sets the document language. See [collection_language].
    pub fn language<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("language", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<CreateCollectionOptions, Error> {
        self.0.build().map(CreateCollectionOptions)
    }
}

/// The updateCollection options.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateCollectionOptions(Model);

impl UpdateCollectionOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C, N>(
        environment_id: E,
        collection_id: C,
        name: N,
    ) -> UpdateCollectionOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
        N: Into<String>,
    {
        UpdateCollectionOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into())
                .set("name", name.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> UpdateCollectionOptionsBuilder {
        UpdateCollectionOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The new name of the collection.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }

    /// The new description of the collection.
    pub fn description(&self) -> Option<&str> {
        self.0.get_str("description")
    }

    /// The ID of the new configuration.
    pub fn configuration_id(&self) -> Option<&str> {
        self.0.get_str("configuration_id")
    }
}

impl TypedModel for UpdateCollectionOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &UPDATE_COLLECTION_OPTIONS
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

/// A builder for [UpdateCollectionOptions].
#[derive(Clone, Debug)]
pub struct UpdateCollectionOptionsBuilder(Builder);

impl UpdateCollectionOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the name.
    pub fn name<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("name", v.into()))
    }

    /// Sets the description.
    pub fn description<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("description", v.into()))
    }

    /// Sets the configuration ID.
    pub fn configuration_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("configuration_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<UpdateCollectionOptions, Error> {
        self.0.build().map(UpdateCollectionOptions)
    }
}

/// The getCollection options.
#[derive(Clone, Debug, PartialEq)]
pub struct GetCollectionOptions(Model);

impl GetCollectionOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> GetCollectionOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        GetCollectionOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> GetCollectionOptionsBuilder {
        GetCollectionOptionsBuilder(self.0.new_builder())
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

impl TypedModel for GetCollectionOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &GET_COLLECTION_OPTIONS
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

/// A builder for [GetCollectionOptions].
#[derive(Clone, Debug)]
pub struct GetCollectionOptionsBuilder(Builder);

impl GetCollectionOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<GetCollectionOptions, Error> {
        self.0.build().map(GetCollectionOptions)
    }
}

/// The deleteCollection options.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteCollectionOptions(Model);

impl DeleteCollectionOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> DeleteCollectionOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        DeleteCollectionOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> DeleteCollectionOptionsBuilder {
        DeleteCollectionOptionsBuilder(self.0.new_builder())
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

impl TypedModel for DeleteCollectionOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_COLLECTION_OPTIONS
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

/// A builder for [DeleteCollectionOptions].
#[derive(Clone, Debug)]
pub struct DeleteCollectionOptionsBuilder(Builder);

impl DeleteCollectionOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<DeleteCollectionOptions, Error> {
        self.0.build().map(DeleteCollectionOptions)
    }
}

/// The listCollections options.
#[derive(Clone, Debug, PartialEq)]
pub struct ListCollectionsOptions(Model);

impl ListCollectionsOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(environment_id: T) -> ListCollectionsOptionsBuilder {
        ListCollectionsOptionsBuilder(
            Builder::new(Self::descriptor()).set("environment_id", environment_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> ListCollectionsOptionsBuilder {
        ListCollectionsOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// Show only collections with the given name.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }
}

impl TypedModel for ListCollectionsOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &LIST_COLLECTIONS_OPTIONS
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

/// A builder for [ListCollectionsOptions].
#[derive(Clone, Debug)]
pub struct ListCollectionsOptionsBuilder(Builder);

impl ListCollectionsOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Show only collections with the given name.
    pub fn name<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("name", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<ListCollectionsOptions, Error> {
        self.0.build().map(ListCollectionsOptions)
    }
}

/// The createStopwordList options.
///
/// The stopword file and its filename are both required; the upload travels
/// as multipart form data.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateStopwordListOptions(Model);

impl CreateStopwordListOptions {
    /// Starts a builder with the required path properties. The stopword
    /// file and filename must be supplied before `build()`.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> CreateStopwordListOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        CreateStopwordListOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> CreateStopwordListOptionsBuilder {
        CreateStopwordListOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The content of the stopword list.
    pub fn stopword_file(&self) -> Option<&wkt::BinaryPart> {
        self.0.get_binary("stopword_file")
    }

    /// The filename for the stopword file.
    pub fn stopword_filename(&self) -> Option<&str> {
        self.0.get_str("stopword_filename")
    }
}

impl TypedModel for CreateStopwordListOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &CREATE_STOPWORD_LIST_OPTIONS
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

/// A builder for [CreateStopwordListOptions].
#[derive(Clone, Debug)]
pub struct CreateStopwordListOptionsBuilder(Builder);

impl CreateStopwordListOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the stopword file content.
    pub fn stopword_file(self, v: wkt::BinaryPart) -> Self {
        Self(self.0.set("stopword_file", v))
    }

    /// Sets the filename for the stopword file.
    pub fn stopword_filename<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("stopword_filename", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<CreateStopwordListOptions, Error> {
        self.0.build().map(CreateStopwordListOptions)
    }
}

/// The number of documents in a collection, by processing state.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentCounts(Model);

impl DocumentCounts {
    /// The number of available (indexed) documents.
    pub fn available(&self) -> Option<i64> {
        self.0.get_long("available")
    }

    /// The number of documents still processing.
    pub fn processing(&self) -> Option<i64> {
        self.0.get_long("processing")
    }

    /// The number of documents that failed to ingest.
    pub fn failed(&self) -> Option<i64> {
        self.0.get_long("failed")
    }

    /// The number of documents pending processing.
    pub fn pending(&self) -> Option<i64> {
        self.0.get_long("pending")
    }
}

impl TypedModel for DocumentCounts {
    fn descriptor() -> &'static ModelDescriptor {
        &DOCUMENT_COUNTS
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

/// A collection for storing documents.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection(Model);

impl Collection {
    /// The unique identifier of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The name of the collection.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }

    /// The description of the collection.
    pub fn description(&self) -> Option<&str> {
        self.0.get_str("description")
    }

    /// When the collection was created.
    pub fn created(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("created")
    }

    /// When the collection was last updated.
    pub fn updated(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("updated")
    }

    /// The current status. See [collection_status].
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }

    /// The ID of the configuration the collection uses.
    pub fn configuration_id(&self) -> Option<&str> {
        self.0.get_str("configuration_id")
    }

    /// The language of the documents.
    pub fn language(&self) -> Option<&str> {
        self.0.get_str("language")
    }

    /// Document counts by processing state.
    pub fn document_counts(&self) -> Option<DocumentCounts> {
        self.0
            .get_model("document_counts")
            .cloned()
            .map(DocumentCounts::from_model)
    }

    /// Summary of disk usage.
    pub fn disk_usage(&self) -> Option<&serde_json::Value> {
        self.0.get_json("disk_usage")
    }

    /// The training status of the collection.
    pub fn training_status(&self) -> Option<&serde_json::Value> {
        self.0.get_json("training_status")
    }

    /// Smart Document Understanding information for the collection.
    pub fn smart_document_understanding(&self) -> Option<&serde_json::Value> {
        self.0.get_json("smart_document_understanding")
    }
}

impl TypedModel for Collection {
    fn descriptor() -> &'static ModelDescriptor {
        &COLLECTION
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

/// Response object containing an array of collections.
#[derive(Clone, Debug, PartialEq)]
pub struct ListCollectionsResponse(Model);

impl ListCollectionsResponse {
    /// The collections.
    pub fn collections(&self) -> Vec<Collection> {
        self.0
            .get_list("collections")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Collection::from_model))
            .collect()
    }
}

impl TypedModel for ListCollectionsResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &LIST_COLLECTIONS_RESPONSE
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

/// Response object after deleting a collection.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteCollectionResponse(Model);

impl DeleteCollectionResponse {
    /// The ID of the deleted collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// Status of the operation; `deleted` on success.
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }
}

impl TypedModel for DeleteCollectionResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_COLLECTION_RESPONSE
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

/// The status of a token dictionary or stopword list.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenDictStatusResponse(Model);

impl TokenDictStatusResponse {
    /// The current wordlist status; `active`, `pending`, or `not found`.
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }

    /// The type of wordlist; `tokenization_dictionary` or `stopwords`.
    pub fn wordlist_type(&self) -> Option<&str> {
        self.0.get_str("type")
    }
}

impl TypedModel for TokenDictStatusResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &TOKEN_DICT_STATUS_RESPONSE
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
