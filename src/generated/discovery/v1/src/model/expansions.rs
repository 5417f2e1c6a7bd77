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
use sdk_core::Value;
use wkt::schema::{FieldKind, FieldSchema, Location, ModelDescriptor};

lazy_static! {
    static ref EXPANSION: ModelDescriptor = ModelDescriptor::new(
        "Expansion",
        vec![
            FieldSchema::optional(
                "input_terms",
                "input_terms",
                FieldKind::ListOf(Box::new(FieldKind::Str)),
            ),
            FieldSchema::required(
                "expanded_terms",
                "expanded_terms",
                FieldKind::ListOf(Box::new(FieldKind::Str)),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref CREATE_EXPANSIONS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "CreateExpansionsOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required(
                "expansions",
                "expansions",
                FieldKind::ListOf(Box::new(FieldKind::Object(&EXPANSION))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LIST_EXPANSIONS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "ListExpansionsOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_EXPANSIONS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "DeleteExpansionsOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("collection_id", "collection_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref EXPANSIONS: ModelDescriptor = ModelDescriptor::new(
        "Expansions",
        vec![
            FieldSchema::required(
                "expansions",
                "expansions",
                FieldKind::ListOf(Box::new(FieldKind::Object(&EXPANSION))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// One query expansion: a set of terms that expand to further terms.
///
/// With `input_terms` present the expansion is unidirectional; without, the
/// expanded terms all expand to each other.
#[derive(Clone, Debug, PartialEq)]
pub struct Expansion(Model);

impl Expansion {
    /// Starts a builder. The expanded terms are required.
    pub fn builder() -> ExpansionBuilder {
        ExpansionBuilder(Builder::new(Self::descriptor()))
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> ExpansionBuilder {
        ExpansionBuilder(self.0.new_builder())
    }

    /// The terms that trigger the expansion.
    pub fn input_terms(&self) -> Vec<String> {
        self.0
            .get_list("input_terms")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    /// The terms the query is expanded with.
    pub fn expanded_terms(&self) -> Vec<String> {
        self.0
            .get_list("expanded_terms")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}

impl TypedModel for Expansion {
    fn descriptor() -> &'static ModelDescriptor {
        &EXPANSION
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

/// A builder for [Expansion].
#[derive(Clone, Debug)]
pub struct ExpansionBuilder(Builder);

impl ExpansionBuilder {
    /// Adds one input term. The order of calls is preserved.
    pub fn add_input_terms<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.append("input_terms", v.into()))
    }

    /// Adds one expanded term. The order of calls is preserved.
    pub fn add_expanded_terms<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.append("expanded_terms", v.into()))
    }

    /// Replaces the input terms.
    pub fn input_terms(self, v: Vec<String>) -> Self {
        let items = v.into_iter().map(Value::from).collect::<Vec<_>>();
        Self(self.0.set("input_terms", items))
    }

    /// Replaces the expanded terms.
    pub fn expanded_terms(self, v: Vec<String>) -> Self {
        let items = v.into_iter().map(Value::from).collect::<Vec<_>>();
        Self(self.0.set("expanded_terms", items))
    }

    /// Builds the expansion.
    pub fn build(self) -> Result<Expansion, Error> {
        self.0.build().map(Expansion)
    }
}

/// The createExpansions options.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateExpansionsOptions(Model);

impl CreateExpansionsOptions {
    /// Starts a builder with the required path properties. At least one
    /// expansion must be added before `build()`.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> CreateExpansionsOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        CreateExpansionsOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> CreateExpansionsOptionsBuilder {
        CreateExpansionsOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the collection.
    pub fn collection_id(&self) -> Option<&str> {
        self.0.get_str("collection_id")
    }

    /// The expansion definitions, in the order they were added.
    pub fn expansions(&self) -> Vec<Expansion> {
        self.0
            .get_list("expansions")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Expansion::from_model))
            .collect()
    }
}

impl TypedModel for CreateExpansionsOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &CREATE_EXPANSIONS_OPTIONS
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

/// A builder for [CreateExpansionsOptions].
#[derive(Clone, Debug)]
pub struct CreateExpansionsOptionsBuilder(Builder);

impl CreateExpansionsOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Adds one expansion. The order of calls is preserved.
    pub fn add_expansions(self, v: Expansion) -> Self {
        Self(self.0.append("expansions", v.into_model()))
    }

    /// Replaces the expansions.
    pub fn expansions(self, v: Vec<Expansion>) -> Self {
        let items = v
            .into_iter()
            .map(|e| Value::from(e.into_model()))
            .collect::<Vec<_>>();
        Self(self.0.set("expansions", items))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<CreateExpansionsOptions, Error> {
        self.0.build().map(CreateExpansionsOptions)
    }
}

/// The listExpansions options.
#[derive(Clone, Debug, PartialEq)]
pub struct ListExpansionsOptions(Model);

impl ListExpansionsOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> ListExpansionsOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        ListExpansionsOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> ListExpansionsOptionsBuilder {
        ListExpansionsOptionsBuilder(self.0.new_builder())
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

impl TypedModel for ListExpansionsOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &LIST_EXPANSIONS_OPTIONS
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

/// A builder for [ListExpansionsOptions].
#[derive(Clone, Debug)]
pub struct ListExpansionsOptionsBuilder(Builder);

impl ListExpansionsOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<ListExpansionsOptions, Error> {
        self.0.build().map(ListExpansionsOptions)
    }
}

/// The deleteExpansions options.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteExpansionsOptions(Model);

impl DeleteExpansionsOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, collection_id: C) -> DeleteExpansionsOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        DeleteExpansionsOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("collection_id", collection_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> DeleteExpansionsOptionsBuilder {
        DeleteExpansionsOptionsBuilder(self.0.new_builder())
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

impl TypedModel for DeleteExpansionsOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_EXPANSIONS_OPTIONS
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

/// A builder for [DeleteExpansionsOptions].
#[derive(Clone, Debug)]
pub struct DeleteExpansionsOptionsBuilder(Builder);

impl DeleteExpansionsOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the collection ID.
    pub fn collection_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("collection_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<DeleteExpansionsOptions, Error> {
        self.0.build().map(DeleteExpansionsOptions)
    }
}

/// The expansion definitions of a collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Expansions(Model);

impl Expansions {
    /// The expansion definitions.
    pub fn expansions(&self) -> Vec<Expansion> {
        self.0
            .get_list("expansions")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Expansion::from_model))
            .collect()
    }
}

impl TypedModel for Expansions {
    fn descriptor() -> &'static ModelDescriptor {
        &EXPANSIONS
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
