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

/// The sizes an environment can be created with or resized to.
pub mod environment_size {
    pub const LT: &str = "LT";
    pub const XS: &str = "XS";
    pub const S: &str = "S";
    pub const MS: &str = "MS";
    pub const M: &str = "M";
    pub const ML: &str = "ML";
    pub const L: &str = "L";
    pub const XL: &str = "XL";
    pub const XXL: &str = "XXL";
    pub const XXXL: &str = "XXXL";

    /// All documented sizes.
    pub const ALL: &[&str] = &[LT, XS, S, MS, M, ML, L, XL, XXL, XXXL];
}

/// The status of an environment.
pub mod environment_status {
    pub const ACTIVE: &str = "active";
    pub const PENDING: &str = "pending";
    pub const MAINTENANCE: &str = "maintenance";
    pub const RESIZING: &str = "resizing";

    /// All documented statuses.
    pub const ALL: &[&str] = &[ACTIVE, PENDING, MAINTENANCE, RESIZING];
}

lazy_static! {
    static ref CREATE_ENVIRONMENT_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "CreateEnvironmentOptions",
        vec![
            FieldSchema::required("name", "name", FieldKind::Str),
            FieldSchema::optional("description", "description", FieldKind::Str),
            FieldSchema::optional("size", "size", FieldKind::Enum(environment_size::ALL)),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref UPDATE_ENVIRONMENT_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "UpdateEnvironmentOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::optional("name", "name", FieldKind::Str),
            FieldSchema::optional("description", "description", FieldKind::Str),
            FieldSchema::optional("size", "size", FieldKind::Enum(environment_size::ALL)),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_ENVIRONMENT_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "DeleteEnvironmentOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LIST_ENVIRONMENTS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "ListEnvironmentsOptions",
        vec![
            FieldSchema::optional("name", "name", FieldKind::Str).set_location(Location::Query),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref ENVIRONMENT: ModelDescriptor = ModelDescriptor::new(
        "Environment",
        vec![
            FieldSchema::optional("environment_id", "environment_id", FieldKind::Str),
            FieldSchema::optional("name", "name", FieldKind::Str),
            FieldSchema::optional("description", "description", FieldKind::Str),
            FieldSchema::optional("created", "created", FieldKind::DateTime),
            FieldSchema::optional("updated", "updated", FieldKind::DateTime),
            FieldSchema::optional("status", "status", FieldKind::Enum(environment_status::ALL)),
            FieldSchema::optional("read_only", "read_only", FieldKind::Boolean),
            FieldSchema::optional("size", "size", FieldKind::Enum(environment_size::ALL)),
            FieldSchema::optional("requested_size", "requested_size", FieldKind::Str),
            FieldSchema::optional("index_capacity", "index_capacity", FieldKind::Json),
            FieldSchema::optional("search_status", "search_status", FieldKind::Json),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LIST_ENVIRONMENTS_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "ListEnvironmentsResponse",
        vec![
            FieldSchema::optional(
                "environments",
                "environments",
                FieldKind::ListOf(Box::new(FieldKind::Object(&ENVIRONMENT))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_ENVIRONMENT_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "DeleteEnvironmentResponse",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str),
            FieldSchema::required("status", "status", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// The createEnvironment options.
///
/// An environment is created with a name, an optional description, and an
/// optional size; the size defaults on the service side when omitted.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateEnvironmentOptions(Model);

impl CreateEnvironmentOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(name: T) -> CreateEnvironmentOptionsBuilder {
        CreateEnvironmentOptionsBuilder(Builder::new(Self::descriptor()).set("name", name.into()))
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> CreateEnvironmentOptionsBuilder {
        CreateEnvironmentOptionsBuilder(self.0.new_builder())
    }

    /// The name of the environment.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }

    /// The description of the environment.
    pub fn description(&self) -> Option<&str> {
        self.0.get_str("description")
    }

    /// The size of the environment. See [environment_size].
    pub fn size(&self) -> Option<&str> {
        self.0.get_str("size")
    }
}

impl TypedModel for CreateEnvironmentOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &CREATE_ENVIRONMENT_OPTIONS
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

/// A builder for [CreateEnvironmentOptions].
#[derive(Clone, Debug)]
pub struct CreateEnvironmentOptionsBuilder(Builder);

impl CreateEnvironmentOptionsBuilder {
    /// Sets the name.
    pub fn name<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("name", v.into()))
    }

    /// Sets the description.
    pub fn description<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("description", v.into()))
    }

    /// Sets the size. See [environment_size] for the accepted values.
    pub fn size<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("size", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<CreateEnvironmentOptions, Error> {
        self.0.build().map(CreateEnvironmentOptions)
    }
}

/// The updateEnvironment options.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateEnvironmentOptions(Model);

impl UpdateEnvironmentOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(environment_id: T) -> UpdateEnvironmentOptionsBuilder {
        UpdateEnvironmentOptionsBuilder(
            Builder::new(Self::descriptor()).set("environment_id", environment_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> UpdateEnvironmentOptionsBuilder {
        UpdateEnvironmentOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The new name, if changing it.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }

    /// The new description, if changing it.
    pub fn description(&self) -> Option<&str> {
        self.0.get_str("description")
    }

    /// The new size, if resizing.
    pub fn size(&self) -> Option<&str> {
        self.0.get_str("size")
    }
}

impl TypedModel for UpdateEnvironmentOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &UPDATE_ENVIRONMENT_OPTIONS
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

/// A builder for [UpdateEnvironmentOptions].
#[derive(Clone, Debug)]
pub struct UpdateEnvironmentOptionsBuilder(Builder);

impl UpdateEnvironmentOptionsBuilder {
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

    /// Sets the size.
    pub fn size<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("size", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<UpdateEnvironmentOptions, Error> {
        self.0.build().map(UpdateEnvironmentOptions)
    }
}

/// The deleteEnvironment options.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteEnvironmentOptions(Model);

impl DeleteEnvironmentOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(environment_id: T) -> DeleteEnvironmentOptionsBuilder {
        DeleteEnvironmentOptionsBuilder(
            Builder::new(Self::descriptor()).set("environment_id", environment_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> DeleteEnvironmentOptionsBuilder {
        DeleteEnvironmentOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }
}

impl TypedModel for DeleteEnvironmentOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_ENVIRONMENT_OPTIONS
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

/// A builder for [DeleteEnvironmentOptions].
#[derive(Clone, Debug)]
pub struct DeleteEnvironmentOptionsBuilder(Builder);

impl DeleteEnvironmentOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<DeleteEnvironmentOptions, Error> {
        self.0.build().map(DeleteEnvironmentOptions)
    }
}

/// The listEnvironments options.
#[derive(Clone, Debug, PartialEq)]
pub struct ListEnvironmentsOptions(Model);

impl ListEnvironmentsOptions {
    /// Starts a builder. This operation has no required properties.
    pub fn builder() -> ListEnvironmentsOptionsBuilder {
        ListEnvironmentsOptionsBuilder(Builder::new(Self::descriptor()))
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> ListEnvironmentsOptionsBuilder {
        ListEnvironmentsOptionsBuilder(self.0.new_builder())
    }

    /// Show only environments with the given name.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }
}

impl TypedModel for ListEnvironmentsOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &LIST_ENVIRONMENTS_OPTIONS
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

/// A builder for [ListEnvironmentsOptions].
#[derive(Clone, Debug)]
pub struct ListEnvironmentsOptionsBuilder(Builder);

impl ListEnvironmentsOptionsBuilder {
    /// Show only environments with the given name.
    pub fn name<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("name", v.into()))
    }

    /// Builds the options.
    pub fn build(self) -> Result<ListEnvironmentsOptions, Error> {
        self.0.build().map(ListEnvironmentsOptions)
    }
}

/// Details about an environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment(Model);

impl Environment {
    /// The unique identifier of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The name of the environment.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }

    /// The description of the environment.
    pub fn description(&self) -> Option<&str> {
        self.0.get_str("description")
    }

    /// When the environment was created.
    pub fn created(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("created")
    }

    /// When the environment was last updated.
    pub fn updated(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("updated")
    }

    /// The current status. See [environment_status].
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }

    /// If true, the environment contains read-only collections maintained
    /// by IBM.
    pub fn read_only(&self) -> Option<bool> {
        self.0.get_boolean("read_only")
    }

    /// The current size.
    pub fn size(&self) -> Option<&str> {
        self.0.get_str("size")
    }

    /// The size the environment is being resized to, during a resize.
    pub fn requested_size(&self) -> Option<&str> {
        self.0.get_str("requested_size")
    }

    /// Details about the resource usage and capacity of the environment.
    pub fn index_capacity(&self) -> Option<&serde_json::Value> {
        self.0.get_json("index_capacity")
    }

    /// Information about the Continuous Relevancy Training for this
    /// environment.
    pub fn search_status(&self) -> Option<&serde_json::Value> {
        self.0.get_json("search_status")
    }
}

impl TypedModel for Environment {
    fn descriptor() -> &'static ModelDescriptor {
        &ENVIRONMENT
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

/// Response object containing an array of configured environments.
#[derive(Clone, Debug, PartialEq)]
pub struct ListEnvironmentsResponse(Model);

impl ListEnvironmentsResponse {
    /// The environments.
    pub fn environments(&self) -> Vec<Environment> {
        self.0
            .get_list("environments")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Environment::from_model))
            .collect()
    }
}

impl TypedModel for ListEnvironmentsResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &LIST_ENVIRONMENTS_RESPONSE
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

/// Response object after deleting an environment.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteEnvironmentResponse(Model);

impl DeleteEnvironmentResponse {
    /// The ID of the deleted environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// Status of the operation; `deleted` on success.
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }
}

impl TypedModel for DeleteEnvironmentResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_ENVIRONMENT_RESPONSE
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
