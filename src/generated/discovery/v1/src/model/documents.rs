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
use wkt::schema::{Constraint, FieldKind, FieldSchema, Location, ModelDescriptor};

/// The status of an ingested document.
pub mod document_status {
    pub const AVAILABLE: &str = "available";
    pub const AVAILABLE_WITH_NOTICES: &str = "available with notices";
    pub const FAILED: &str = "failed";
    pub const PROCESSING: &str = "processing";
    pub const PENDING: &str = "pending";

    /// All documented statuses.
    pub const ALL: &[&str] = &[
        AVAILABLE,
        AVAILABLE_WITH_NOTICES,
        FAILED,
        PROCESSING,
        PENDING,
    ];
}

/// The severity of a notice.
pub mod notice_severity {
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";

    /// All documented severities.
    pub const ALL: &[&str] = &[WARNING, ERROR];
}

fn document_upload_fields(with_document_id: bool) -> Vec<FieldSchema> {
    let mut fields = vec![
        FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
            .set_location(Location::Path),
        FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
            .set_location(Location::Path),
    ];
    if with_document_id {
        fields.push(
            FieldSchema::required("document_id", "document_id", FieldKind::Str)
                .set_location(Location::Path),
        );
    }
    fields.extend([
        FieldSchema::optional("file", "file", FieldKind::Binary).set_location(Location::Part),
        FieldSchema::optional("filename", "filename", FieldKind::Str),
        FieldSchema::optional("file_content_type", "file_content_type", FieldKind::Str),
        FieldSchema::optional("metadata", "metadata", FieldKind::Str).set_location(Location::Part),
    ]);
    fields
}

lazy_static! {
    static ref ADD_DOCUMENT_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "AddDocumentOptions",
        document_upload_fields(false),
        vec![Constraint::RequiresCompanion {
            if_set: "file",
            then_required: "filename",
        }],
    )
    .expect("static descriptor is well-formed");
    static ref UPDATE_DOCUMENT_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "UpdateDocumentOptions",
        document_upload_fields(true),
        vec![Constraint::RequiresCompanion {
            if_set: "file",
            then_required: "filename",
        }],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_DOCUMENT_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "DeleteDocumentOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("document_id", "document_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref GET_DOCUMENT_STATUS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "GetDocumentStatusOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("document_id", "document_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref NOTICE: ModelDescriptor = ModelDescriptor::new(
        "Notice",
        vec![
            FieldSchema::optional("notice_id", "notice_id", FieldKind::Str),
            FieldSchema::optional("created", "created", FieldKind::DateTime),
            FieldSchema::optional("document_id", "document_id", FieldKind::Str),
            FieldSchema::optional("query_id", "query_id", FieldKind::Str),
            FieldSchema::optional("severity", "severity", FieldKind::Enum(notice_severity::ALL)),
            FieldSchema::optional("step", "step", FieldKind::Str),
            FieldSchema::optional("description", "description", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DOCUMENT_ACCEPTED: ModelDescriptor = ModelDescriptor::new(
        "DocumentAccepted",
        vec![
            FieldSchema::optional("document_id", "document_id", FieldKind::Str),
            FieldSchema::optional("status", "status", FieldKind::Str),
            FieldSchema::optional(
                "notices",
                "notices",
                FieldKind::ListOf(Box::new(FieldKind::Object(&NOTICE))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DOCUMENT_STATUS: ModelDescriptor = ModelDescriptor::new(
        "DocumentStatus",
        vec![
            FieldSchema::optional("document_id", "document_id", FieldKind::Str),
            FieldSchema::optional("configuration_id", "configuration_id", FieldKind::Str),
            FieldSchema::optional("status", "status", FieldKind::Enum(document_status::ALL)),
            FieldSchema::optional("status_description", "status_description", FieldKind::Str),
            FieldSchema::optional("filename", "filename", FieldKind::Str),
            FieldSchema::optional("file_type", "file_type", FieldKind::Str),
            FieldSchema::optional("sha1", "sha1", FieldKind::Str),
            FieldSchema::optional(
                "notices",
                "notices",
                FieldKind::ListOf(Box::new(FieldKind::Object(&NOTICE))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_DOCUMENT_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "DeleteDocumentResponse",
        vec![
            FieldSchema::optional("document_id", "document_id", FieldKind::Str),
            FieldSchema::optional("status", "status", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// The addDocument options.
///
/// The document content is an opaque binary part; when a file is supplied
/// its filename must be supplied too. Metadata travels as a JSON string in
/// its own form part, next to the file.
#[derive(Clone, Debug, PartialEq)]
pub struct AddDocumentOptions(Model);

impl AddDocumentOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> AddDocumentOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        AddDocumentOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> AddDocumentOptionsBuilder {
        AddDocumentOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The content of the document to ingest.
    pub fn file(&self) -> Option<&wkt::BinaryPart> {
        self.0.get_binary("file")
    }

    /// The filename for the file.
    pub fn filename(&self) -> Option<&str> {
        self.0.get_str("filename")
    }

    /// The content type of the file.
    pub fn file_content_type(&self) -> Option<&str> {
        self.0.get_str("file_content_type")
    }

    /// Document metadata, as a JSON string. Example:
    /// `{"Creator": "Johnny Appleseed", "Subject": "Apples"}`.
    pub fn metadata(&self) -> Option<&str> {
        self.0.get_str("metadata")
    }
}

impl TypedModel for AddDocumentOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &ADD_DOCUMENT_OPTIONS
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

/// A builder for [AddDocumentOptions].
#[derive(Clone, Debug)]
pub struct AddDocumentOptionsBuilder(Builder);

impl AddDocumentOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the document content. A filename becomes required.
    pub fn file(self, v: wkt::BinaryPart) -> Self {
        Self(self.0.set("file", v))
    }

    /// Sets the filename for the file.
    pub fn filename<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("filename", v.into()))
    }

    /// Sets the content type of the file.
    pub fn file_content_type<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("file_content_type", v.into()))
    }

    /// Sets the document metadata, as a JSON string.
    pub fn metadata<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("metadata", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<AddDocumentOptions, Error> {
        self.0.build().map(AddDocumentOptions)
    }
}

/// The updateDocument options.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateDocumentOptions(Model);

impl UpdateDocumentOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C, D>(
        environment_id: E,
        collection_id: C,
        document_id: D,
    ) -> UpdateDocumentOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
        D: Into<String>,
    {
        UpdateDocumentOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into())
                .set("document_id", document_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> UpdateDocumentOptionsBuilder {
        UpdateDocumentOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The ID of the document.
    pub fn document_id(&self) -> Option<&str> {
        self.0.get_str("document_id")
    }

    /// The new content of the document.
    pub fn file(&self) -> Option<&wkt::BinaryPart> {
        self.0.get_binary("file")
    }

    /// The filename for the file.
    pub fn filename(&self) -> Option<&str> {
        self.0.get_str("filename")
    }

    /// The content type of the file.
    pub fn file_content_type(&self) -> Option<&str> {
        self.0.get_str("file_content_type")
    }

    /// Document metadata, as a JSON string.
    pub fn metadata(&self) -> Option<&str> {
        self.0.get_str("metadata")
    }
}

impl TypedModel for UpdateDocumentOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &UPDATE_DOCUMENT_OPTIONS
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

/// A builder for [UpdateDocumentOptions].
#[derive(Clone, Debug)]
pub struct UpdateDocumentOptionsBuilder(Builder);

impl UpdateDocumentOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the document ID.
    pub fn document_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("document_id", v.into()))
    }

    /// Sets the document content. A filename becomes required.
    pub fn file(self, v: wkt::BinaryPart) -> Self {
        Self(self.0.set("file", v))
    }

    /// Sets the filename for the file.
    pub fn filename<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("filename", v.into()))
    }

    /// Sets the content type of the file.
    pub fn file_content_type<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("file_content_type", v.into()))
    }

    /// Sets the document metadata, as a JSON string.
    pub fn metadata<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("metadata", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<UpdateDocumentOptions, Error> {
        self.0.build().map(UpdateDocumentOptions)
    }
}

/// The deleteDocument options.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteDocumentOptions(Model);

impl DeleteDocumentOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C, D>(
        environment_id: E,
        collection_id: C,
        document_id: D,
    ) -> DeleteDocumentOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
        D: Into<String>,
    {
        DeleteDocumentOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into())
                .set("document_id", document_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> DeleteDocumentOptionsBuilder {
        DeleteDocumentOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The ID of the document.
    pub fn document_id(&self) -> Option<&str> {
        self.0.get_str("document_id")
    }
}

impl TypedModel for DeleteDocumentOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_DOCUMENT_OPTIONS
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

/// A builder for [DeleteDocumentOptions].
#[derive(Clone, Debug)]
pub struct DeleteDocumentOptionsBuilder(Builder);

impl DeleteDocumentOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the document ID.
    pub fn document_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("document_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<DeleteDocumentOptions, Error> {
        self.0.build().map(DeleteDocumentOptions)
    }
}

/// The getDocumentStatus options.
#[derive(Clone, Debug, PartialEq)]
pub struct GetDocumentStatusOptions(Model);

impl GetDocumentStatusOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C, D>(
        environment_id: E,
        collection_id: C,
        document_id: D,
    ) -> GetDocumentStatusOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
        D: Into<String>,
    {
        GetDocumentStatusOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into())
                .set("document_id", document_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> GetDocumentStatusOptionsBuilder {
        GetDocumentStatusOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The ID of the document.
    pub fn document_id(&self) -> Option<&str> {
        self.0.get_str("document_id")
    }
}

impl TypedModel for GetDocumentStatusOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &GET_DOCUMENT_STATUS_OPTIONS
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

/// A builder for [GetDocumentStatusOptions].
#[derive(Clone, Debug)]
pub struct GetDocumentStatusOptionsBuilder(Builder);

impl GetDocumentStatusOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the document ID.
    pub fn document_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("document_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<GetDocumentStatusOptions, Error> {
        self.0.build().map(GetDocumentStatusOptions)
    }
}

/// A notice produced while ingesting or querying.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice(Model);

impl Notice {
    /// The identifier of the notice.
    pub fn notice_id(&self) -> Option<&str> {
        self.0.get_str("notice_id")
    }

    /// When the notice was produced.
    pub fn created(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("created")
    }

    /// The document the notice applies to, if any.
    pub fn document_id(&self) -> Option<&str> {
        self.0.get_str("document_id")
    }

    /// The query the notice applies to, if any.
    pub fn query_id(&self) -> Option<&str> {
        self.0.get_str("query_id")
    }

    /// The severity. See [notice_severity].
    pub fn severity(&self) -> Option<&str> {
        self.0.get_str("severity")
    }

    /// The processing step that produced the notice.
    pub fn step(&self) -> Option<&str> {
        self.0.get_str("step")
    }

    /// A human-readable description.
    pub fn description(&self) -> Option<&str> {
        self.0.get_str("description")
    }
}

impl TypedModel for Notice {
    fn descriptor() -> &'static ModelDescriptor {
        &NOTICE
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

/// Response after accepting a document for ingestion.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentAccepted(Model);

impl DocumentAccepted {
    /// The ID assigned to the document.
    pub fn document_id(&self) -> Option<&str> {
        self.0.get_str("document_id")
    }

    /// The status of the ingestion; `processing` right after acceptance.
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }

    /// Notices produced during conversion.
    pub fn notices(&self) -> Vec<Notice> {
        self.0
            .get_list("notices")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Notice::from_model))
            .collect()
    }
}

impl TypedModel for DocumentAccepted {
    fn descriptor() -> &'static ModelDescriptor {
        &DOCUMENT_ACCEPTED
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

/// Status information about a submitted document.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentStatus(Model);

impl DocumentStatus {
    /// The ID of the document.
    pub fn document_id(&self) -> Option<&str> {
        self.0.get_str("document_id")
    }

    /// The configuration that processed the document.
    pub fn configuration_id(&self) -> Option<&str> {
        self.0.get_str("configuration_id")
    }

    /// The ingestion status. See [document_status].
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }

    /// A description of the status.
    pub fn status_description(&self) -> Option<&str> {
        self.0.get_str("status_description")
    }

    /// The filename of the submitted document.
    pub fn filename(&self) -> Option<&str> {
        self.0.get_str("filename")
    }

    /// The detected file type.
    pub fn file_type(&self) -> Option<&str> {
        self.0.get_str("file_type")
    }

    /// The SHA-1 hash of the submitted content.
    pub fn sha1(&self) -> Option<&str> {
        self.0.get_str("sha1")
    }

    /// Notices produced while processing the document.
    pub fn notices(&self) -> Vec<Notice> {
        self.0
            .get_list("notices")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Notice::from_model))
            .collect()
    }
}

impl TypedModel for DocumentStatus {
    fn descriptor() -> &'static ModelDescriptor {
        &DOCUMENT_STATUS
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

/// Response after deleting a document.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteDocumentResponse(Model);

impl DeleteDocumentResponse {
    /// The ID of the deleted document.
    pub fn document_id(&self) -> Option<&str> {
        self.0.get_str("document_id")
    }

    /// Status of the operation; `deleted` on success.
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }
}

impl TypedModel for DeleteDocumentResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_DOCUMENT_RESPONSE
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
