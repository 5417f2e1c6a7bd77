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

/// The connection status of a gateway.
pub mod gateway_status {
    pub const CONNECTED: &str = "connected";
    pub const IDLE: &str = "idle";

    /// All documented statuses.
    pub const ALL: &[&str] = &[CONNECTED, IDLE];
}

lazy_static! {
    static ref CREATE_GATEWAY_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "CreateGatewayOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::optional("name", "name", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_GATEWAY_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "DeleteGatewayOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("gateway_id", "gateway_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LIST_GATEWAYS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "ListGatewaysOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref GATEWAY: ModelDescriptor = ModelDescriptor::new(
        "Gateway",
        vec![
            FieldSchema::optional("gateway_id", "gateway_id", FieldKind::Str),
            FieldSchema::optional("name", "name", FieldKind::Str),
            FieldSchema::optional("status", "status", FieldKind::Enum(gateway_status::ALL)),
            FieldSchema::optional("token", "token", FieldKind::Str),
            FieldSchema::optional("token_id", "token_id", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref GATEWAY_LIST: ModelDescriptor = ModelDescriptor::new(
        "GatewayList",
        vec![
            FieldSchema::optional(
                "gateways",
                "gateways",
                FieldKind::ListOf(Box::new(FieldKind::Object(&GATEWAY))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref GATEWAY_DELETE: ModelDescriptor = ModelDescriptor::new(
        "GatewayDelete",
        vec![
            FieldSchema::optional("gateway_id", "gateway_id", FieldKind::Str),
            FieldSchema::optional("status", "status", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// The createGateway options.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateGatewayOptions(Model);

impl CreateGatewayOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(environment_id: T) -> CreateGatewayOptionsBuilder {
        CreateGatewayOptionsBuilder(
            Builder::new(Self::descriptor()).set("environment_id", environment_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> CreateGatewayOptionsBuilder {
        CreateGatewayOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The name of the gateway to be created.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }
}

impl TypedModel for CreateGatewayOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &CREATE_GATEWAY_OPTIONS
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

/// A builder for [CreateGatewayOptions].
#[derive(Clone, Debug)]
pub struct CreateGatewayOptionsBuilder(Builder);

impl CreateGatewayOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the name.
    pub fn name<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("name", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<CreateGatewayOptions, Error> {
        self.0.build().map(CreateGatewayOptions)
    }
}

/// The deleteGateway options.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteGatewayOptions(Model);

impl DeleteGatewayOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, G>(environment_id: E, gateway_id: G) -> DeleteGatewayOptionsBuilder
    where
        E: Into<String>,
        G: Into<String>,
    {
        DeleteGatewayOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("gateway_id", gateway_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> DeleteGatewayOptionsBuilder {
        DeleteGatewayOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the gateway.
    pub fn gateway_id(&self) -> Option<&str> {
        self.0.get_str("gateway_id")
    }
}

impl TypedModel for DeleteGatewayOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_GATEWAY_OPTIONS
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

/// A builder for [DeleteGatewayOptions].
#[derive(Clone, Debug)]
pub struct DeleteGatewayOptionsBuilder(Builder);

impl DeleteGatewayOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the gateway ID.
    pub fn gateway_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("gateway_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<DeleteGatewayOptions, Error> {
        self.0.build().map(DeleteGatewayOptions)
    }
}

/// The listGateways options.
#[derive(Clone, Debug, PartialEq)]
pub struct ListGatewaysOptions(Model);

impl ListGatewaysOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(environment_id: T) -> ListGatewaysOptionsBuilder {
        ListGatewaysOptionsBuilder(
            Builder::new(Self::descriptor()).set("environment_id", environment_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> ListGatewaysOptionsBuilder {
        ListGatewaysOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }
}

impl TypedModel for ListGatewaysOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &LIST_GATEWAYS_OPTIONS
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

/// A builder for [ListGatewaysOptions].
#[derive(Clone, Debug)]
pub struct ListGatewaysOptionsBuilder(Builder);

impl ListGatewaysOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<ListGatewaysOptions, Error> {
        self.0.build().map(ListGatewaysOptions)
    }
}

/// A gateway for connecting to on-premises sources.
#[derive(Clone, Debug, PartialEq)]
pub struct Gateway(Model);

impl Gateway {
    /// The unique identifier of the gateway.
    pub fn gateway_id(&self) -> Option<&str> {
        self.0.get_str("gateway_id")
    }

    /// The name of the gateway.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }

    /// The connection status. See [gateway_status].
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }

    /// The token used to connect the gateway.
    pub fn token(&self) -> Option<&str> {
        self.0.get_str("token")
    }

    /// The ID of the gateway's token.
    pub fn token_id(&self) -> Option<&str> {
        self.0.get_str("token_id")
    }
}

impl TypedModel for Gateway {
    fn descriptor() -> &'static ModelDescriptor {
        &GATEWAY
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

/// Response object containing an array of gateways.
#[derive(Clone, Debug, PartialEq)]
pub struct GatewayList(Model);

impl GatewayList {
    /// The gateways.
    pub fn gateways(&self) -> Vec<Gateway> {
        self.0
            .get_list("gateways")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Gateway::from_model))
            .collect()
    }
}

impl TypedModel for GatewayList {
    fn descriptor() -> &'static ModelDescriptor {
        &GATEWAY_LIST
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

/// Response object after deleting a gateway.
#[derive(Clone, Debug, PartialEq)]
pub struct GatewayDelete(Model);

impl GatewayDelete {
    /// The ID of the deleted gateway.
    pub fn gateway_id(&self) -> Option<&str> {
        self.0.get_str("gateway_id")
    }

    /// Status of the operation; `deleted` on success.
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }
}

impl TypedModel for GatewayDelete {
    fn descriptor() -> &'static ModelDescriptor {
        &GATEWAY_DELETE
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
