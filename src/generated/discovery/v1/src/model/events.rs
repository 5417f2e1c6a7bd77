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

/// The event types that can be submitted for feedback.
pub mod event_type {
    pub const CLICK: &str = "click";

    /// All documented event types.
    pub const ALL: &[&str] = &[CLICK];
}

lazy_static! {
    static ref EVENT_DATA: ModelDescriptor = ModelDescriptor::new(
        "EventData",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str),
            FieldSchema::required("session_token", "session_token", FieldKind::Str),
            FieldSchema::optional("client_timestamp", "client_timestamp", FieldKind::DateTime),
            FieldSchema::optional("display_rank", "display_rank", FieldKind::Integer),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str),
            FieldSchema::required("document_id", "document_id", FieldKind::Str),
            FieldSchema::optional("query_id", "query_id", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref CREATE_EVENT_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "CreateEventOptions",
        vec![
            FieldSchema::required("type", "type", FieldKind::Enum(event_type::ALL)),
            FieldSchema::required("data", "data", FieldKind::Object(&EVENT_DATA)),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref CREATE_EVENT_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "CreateEventResponse",
        vec![
            FieldSchema::optional("type", "type", FieldKind::Enum(event_type::ALL)),
            FieldSchema::optional("data", "data", FieldKind::Object(&EVENT_DATA)),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_USER_DATA_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "DeleteUserDataOptions",
        vec![
            FieldSchema::required("customer_id", "customer_id", FieldKind::Str)
                .set_location(Location::Query),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// Data associated with a submitted event.
#[derive(Clone, Debug, PartialEq)]
pub struct EventData(Model);

impl EventData {
    /// Starts a builder with the required properties.
    pub fn builder<E, S, C, D>(
        environment_id: E,
        session_token: S,
        collection_id: C,
        document_id: D,
    ) -> EventDataBuilder
    where
        E: Into<String>,
        S: Into<String>,
        C: Into<String>,
        D: Into<String>,
    {
        EventDataBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("session_token", session_token.into())
                .set("collection_id", collection_id.into())
                .set("document_id", document_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> EventDataBuilder {
        EventDataBuilder(self.0.new_builder())
    }

    /// The environment the event originated in.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The session token returned by the query the event relates to.
    pub fn session_token(&self) -> Option<&str> {
        self.0.get_str("session_token")
    }

    /// The client's timestamp for the event.
    pub fn client_timestamp(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("client_timestamp")
    }

    /// The rank at which the result was displayed.
    pub fn display_rank(&self) -> Option<i32> {
        self.0.get_integer("display_rank")
    }

    /// The collection the event's document belongs to.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The document the event relates to.
    pub fn document_id(&self) -> Option<&str> {
        self.0.get_str("document_id")
    }

    /// The query the event relates to.
    pub fn query_id(&self) -> Option<&str> {
        self.0.get_str("query_id")
    }
}

impl TypedModel for EventData {
    fn descriptor() -> &'static ModelDescriptor {
        &EVENT_DATA
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

/// A builder for [EventData].
#[derive(Clone, Debug)]
pub struct EventDataBuilder(Builder);

impl EventDataBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the session token.
    pub fn session_token<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("session_token", v.into()))
    }

    /// Sets the client timestamp.
    pub fn client_timestamp(self, v: wkt::Timestamp) -> Self {
        Self(self.0.set("client_timestamp", v))
    }

    /// Sets the display rank.
    pub fn display_rank(self, v: i32) -> Self {
        Self(self.0.set("display_rank", v))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Sets the document ID.
    pub fn document_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("document_id", v.into()))
    }

    /// Sets the query ID.
    pub fn query_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("query_id", v.into()))
    }

    /// Builds the event data.
    pub fn build(self) -> Result<EventData, Error> {
        self.0.build().map(EventData)
    }
}

/// The createEvent options.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateEventOptions(Model);

impl CreateEventOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(event_type: T, data: EventData) -> CreateEventOptionsBuilder {
        CreateEventOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("type", event_type.into())
                .set("data", data.into_model()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> CreateEventOptionsBuilder {
        CreateEventOptionsBuilder(self.0.new_builder())
    }

    /// The event type. See [event_type].
    pub fn event_type(&self) -> Option<&str> {
        self.0.get_str("type")
    }

    /// The event data.
    pub fn data(&self) -> Option<EventData> {
        self.0.get_model("data").cloned().map(EventData::from_model)
    }
}

impl TypedModel for CreateEventOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &CREATE_EVENT_OPTIONS
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

/// A builder for [CreateEventOptions].
#[derive(Clone, Debug)]
pub struct CreateEventOptionsBuilder(Builder);

impl CreateEventOptionsBuilder {
    /// Sets the event type. See [event_type].
    pub fn event_type<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("type", v.into()))
    }

    /// Sets the event data.
    pub fn data(self, v: EventData) -> Self {
        Self(self.0.set("data", v.into_model()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<CreateEventOptions, Error> {
        self.0.build().map(CreateEventOptions)
    }
}

/// Response after submitting an event.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateEventResponse(Model);

impl CreateEventResponse {
    /// The event type that was submitted.
    pub fn event_type(&self) -> Option<&str> {
        self.0.get_str("type")
    }

    /// The event data that was recorded.
    pub fn data(&self) -> Option<EventData> {
        self.0.get_model("data").cloned().map(EventData::from_model)
    }
}

impl TypedModel for CreateEventResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &CREATE_EVENT_RESPONSE
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

/// The deleteUserData options.
///
/// Deletes all data associated with a customer ID, across the whole
/// service instance; the ID travels as a query parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteUserDataOptions(Model);

impl DeleteUserDataOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(customer_id: T) -> DeleteUserDataOptionsBuilder {
        DeleteUserDataOptionsBuilder(
            Builder::new(Self::descriptor()).set("customer_id", customer_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> DeleteUserDataOptionsBuilder {
        DeleteUserDataOptionsBuilder(self.0.new_builder())
    }

    /// The customer ID whose data is to be deleted.
    pub fn customer_id(&self) -> Option<&str> {
        self.0.get_str("customer_id")
    }
}

impl TypedModel for DeleteUserDataOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_USER_DATA_OPTIONS
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

/// A builder for [DeleteUserDataOptions].
#[derive(Clone, Debug)]
pub struct DeleteUserDataOptionsBuilder(Builder);

impl DeleteUserDataOptionsBuilder {
    /// Sets the customer ID.
    pub fn customer_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("customer_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<DeleteUserDataOptions, Error> {
        self.0.build().map(DeleteUserDataOptions)
    }
}
