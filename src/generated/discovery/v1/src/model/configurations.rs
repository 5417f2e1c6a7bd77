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

/// The source types a configuration can crawl.
pub mod configuration_source_type {
    pub const BOX: &str = "box";
    pub const SALESFORCE: &str = "salesforce";
    pub const SHAREPOINT: &str = "sharepoint";
    pub const WEB_CRAWL: &str = "web_crawl";
    pub const CLOUD_OBJECT_STORAGE: &str = "cloud_object_storage";

    /// All documented source types.
    pub const ALL: &[&str] = &[BOX, SALESFORCE, SHAREPOINT, WEB_CRAWL, CLOUD_OBJECT_STORAGE];
}

fn configuration_body_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::required("name", "name", FieldKind::Str),
        FieldSchema::optional("description", "description", FieldKind::Str),
        FieldSchema::optional("conversions", "conversions", FieldKind::Json),
        FieldSchema::optional(
            "enrichments",
            "enrichments",
            FieldKind::ListOf(Box::new(FieldKind::Object(&ENRICHMENT))),
        ),
        FieldSchema::optional("normalizations", "normalizations", FieldKind::Json),
        FieldSchema::optional("source", "source", FieldKind::Object(&SOURCE)),
    ]
}

lazy_static! {
    static ref ENRICHMENT: ModelDescriptor = ModelDescriptor::new(
        "Enrichment",
        vec![
            FieldSchema::optional("description", "description", FieldKind::Str),
            FieldSchema::required("destination_field", "destination_field", FieldKind::Str),
            FieldSchema::required("source_field", "source_field", FieldKind::Str),
            FieldSchema::optional("overwrite", "overwrite", FieldKind::Boolean),
            FieldSchema::required("enrichment_name", "enrichment", FieldKind::Str),
            FieldSchema::optional(
                "ignore_downstream_errors",
                "ignore_downstream_errors",
                FieldKind::Boolean,
            ),
            FieldSchema::optional("options", "options", FieldKind::Json),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref SOURCE: ModelDescriptor = ModelDescriptor::new(
        "Source",
        vec![
            FieldSchema::optional("type", "type", FieldKind::Enum(configuration_source_type::ALL)),
            FieldSchema::optional("credential_id", "credential_id", FieldKind::Str),
            FieldSchema::optional("schedule", "schedule", FieldKind::Json),
            FieldSchema::optional("options", "options", FieldKind::Json),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref CREATE_CONFIGURATION_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "CreateConfigurationOptions",
        {
            let mut fields = vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
            ];
            fields.extend(configuration_body_fields());
            fields
        },
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref UPDATE_CONFIGURATION_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "UpdateConfigurationOptions",
        {
            let mut fields = vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
                FieldSchema::required("configuration_id", "configuration_id", FieldKind::Str)
                    .set_location(Location::Path),
            ];
            fields.extend(configuration_body_fields());
            fields
        },
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_CONFIGURATION_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "DeleteConfigurationOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("configuration_id", "configuration_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LIST_CONFIGURATIONS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "ListConfigurationsOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::optional("name", "name", FieldKind::Str).set_location(Location::Query),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref CONFIGURATION: ModelDescriptor = ModelDescriptor::new(
        "Configuration",
        {
            let mut fields = vec![
                FieldSchema::optional("configuration_id", "configuration_id", FieldKind::Str),
                FieldSchema::optional("created", "created", FieldKind::DateTime),
                FieldSchema::optional("updated", "updated", FieldKind::DateTime),
            ];
            fields.extend(configuration_body_fields());
            fields
        },
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LIST_CONFIGURATIONS_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "ListConfigurationsResponse",
        vec![
            FieldSchema::optional(
                "configurations",
                "configurations",
                FieldKind::ListOf(Box::new(FieldKind::Object(&CONFIGURATION))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_CONFIGURATION_RESPONSE: ModelDescriptor = ModelDescriptor::new(
        "DeleteConfigurationResponse",
        vec![
            FieldSchema::required("configuration_id", "configuration_id", FieldKind::Str),
            FieldSchema::required("status", "status", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// An enrichment step applied to documents during ingestion.
#[derive(Clone, Debug, PartialEq)]
pub struct Enrichment(Model);

impl Enrichment {
    /// Starts a builder with the required properties.
    pub fn builder<D, S, N>(destination_field: D, source_field: S, enrichment_name: N) -> EnrichmentBuilder
    where
        D: Into<String>,
        S: Into<String>,
        N: Into<String>,
    {
        EnrichmentBuilder(
            Builder::new(Self::descriptor())
                .set("destination_field", destination_field.into())
                .set("source_field", source_field.into())
                .set("enrichment_name", enrichment_name.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> EnrichmentBuilder {
        EnrichmentBuilder(self.0.new_builder())
    }

    /// The description of the enrichment.
    pub fn description(&self) -> Option<&str> {
        self.0.get_str("description")
    }

    /// The field the enrichment writes to.
    pub fn destination_field(&self) -> Option<&str> {
        self.0.get_str("destination_field")
    }

    /// The field the enrichment reads from.
    pub fn source_field(&self) -> Option<&str> {
        self.0.get_str("source_field")
    }

    /// Whether the destination field is overwritten when it exists.
    pub fn overwrite(&self) -> Option<bool> {
        self.0.get_boolean("overwrite")
    }

    /// The name of the enrichment to apply.
    pub fn enrichment_name(&self) -> Option<&str> {
        self.0.get_str("enrichment_name")
    }

    /// Whether failures in this enrichment stop later steps.
    pub fn ignore_downstream_errors(&self) -> Option<bool> {
        self.0.get_boolean("ignore_downstream_errors")
    }

    /// Enrichment-specific options.
    pub fn options(&self) -> Option<&serde_json::Value> {
        self.0.get_json("options")
    }
}

impl TypedModel for Enrichment {
    fn descriptor() -> &'static ModelDescriptor {
        &ENRICHMENT
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

/// A builder for [Enrichment].
#[derive(Clone, Debug)]
pub struct EnrichmentBuilder(Builder);

impl EnrichmentBuilder {
    /// Sets the description.
    pub fn description<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("description", v.into()))
    }

    /// Sets the field the enrichment writes to.
    pub fn destination_field<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("destination_field", v.into()))
    }

    /// Sets the field the enrichment reads from.
    pub fn source_field<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("source_field", v.into()))
    }

    /// Sets whether the destination field is overwritten.
    pub fn overwrite(self, v: bool) -> Self {
        Self(self.0.set("overwrite", v))
    }

    /// Sets the name of the enrichment to apply.
    pub fn enrichment_name<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("enrichment_name", v.into()))
    }

    /// Sets whether failures in this enrichment stop later steps.
    pub fn ignore_downstream_errors(self, v: bool) -> Self {
        Self(self.0.set("ignore_downstream_errors", v))
    }

    /// Sets enrichment-specific options.
    pub fn options(self, v: serde_json::Value) -> Self {
        Self(self.0.set("options", v))
    }

    /// Builds the enrichment.
    pub fn build(self) -> Result<Enrichment, Error> {
        self.0.build().map(Enrichment)
    }
}

/// A source to crawl for documents.
#[derive(Clone, Debug, PartialEq)]
pub struct Source(Model);

impl Source {
    /// Starts a builder. All properties are optional.
    pub fn builder() -> SourceBuilder {
        SourceBuilder(Builder::new(Self::descriptor()))
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> SourceBuilder {
        SourceBuilder(self.0.new_builder())
    }

    /// The source type. See [configuration_source_type].
    pub fn source_type(&self) -> Option<&str> {
        self.0.get_str("type")
    }

    /// The credentials used to crawl the source.
    pub fn credential_id(&self) -> Option<&str> {
        self.0.get_str("credential_id")
    }

    /// The crawl schedule.
    pub fn schedule(&self) -> Option<&serde_json::Value> {
        self.0.get_json("schedule")
    }

    /// Source-specific options.
    pub fn options(&self) -> Option<&serde_json::Value> {
        self.0.get_json("options")
    }
}

impl TypedModel for Source {
    fn descriptor() -> &'static ModelDescriptor {
        &SOURCE
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

/// A builder for [Source].
#[derive(Clone, Debug)]
pub struct SourceBuilder(Builder);

impl SourceBuilder {
    /// Sets the source type. See [configuration_source_type].
    pub fn source_type<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("type", v.into()))
    }

    /// Sets the credentials used to crawl the source.
    pub fn credential_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("credential_id", v.into()))
    }

    /// Sets the crawl schedule.
    pub fn schedule(self, v: serde_json::Value) -> Self {
        Self(self.0.set("schedule", v))
    }

    /// Sets source-specific options.
    pub fn options(self, v: serde_json::Value) -> Self {
        Self(self.0.set("options", v))
    }

    /// Builds the source.
    pub fn build(self) -> Result<Source, Error> {
        self.0.build().map(Source)
    }
}

/// The createConfiguration options.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateConfigurationOptions(Model);

impl CreateConfigurationOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, N>(environment_id: E, name: N) -> CreateConfigurationOptionsBuilder
    where
        E: Into<String>,
        N: Into<String>,
    {
        CreateConfigurationOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("name", name.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> CreateConfigurationOptionsBuilder {
        CreateConfigurationOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The name of the configuration.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }

    /// The description of the configuration.
    pub fn description(&self) -> Option<&str> {
        self.0.get_str("description")
    }

    /// The document conversion settings.
    pub fn conversions(&self) -> Option<&serde_json::Value> {
        self.0.get_json("conversions")
    }

    /// The enrichment steps, in application order.
    pub fn enrichments(&self) -> Vec<Enrichment> {
        self.0
            .get_list("enrichments")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Enrichment::from_model))
            .collect()
    }

    /// The JSON normalization operations.
    pub fn normalizations(&self) -> Option<&serde_json::Value> {
        self.0.get_json("normalizations")
    }

    /// The source to crawl.
    pub fn source(&self) -> Option<Source> {
        self.0.get_model("source").cloned().map(Source::from_model)
    }
}

impl TypedModel for CreateConfigurationOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &CREATE_CONFIGURATION_OPTIONS
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

/// A builder for [CreateConfigurationOptions].
#[derive(Clone, Debug)]
pub struct CreateConfigurationOptionsBuilder(Builder);

impl CreateConfigurationOptionsBuilder {
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

    /// Sets the document conversion settings.
    pub fn conversions(self, v: serde_json::Value) -> Self {
        Self(self.0.set("conversions", v))
    }

    /// Adds one enrichment step. The order of calls is the application
    /// order.
    pub fn add_enrichments(self, v: Enrichment) -> Self {
        Self(self.0.append("enrichments", v.into_model()))
    }

    /// Replaces the enrichment steps.
    pub fn enrichments(self, v: Vec<Enrichment>) -> Self {
        let items = v
            .into_iter()
            .map(|e| Value::from(e.into_model()))
            .collect::<Vec<_>>();
        Self(self.0.set("enrichments", items))
    }

    /// Sets the JSON normalization operations.
    pub fn normalizations(self, v: serde_json::Value) -> Self {
        Self(self.0.set("normalizations", v))
    }

    /// Sets the source to crawl.
    pub fn source(self, v: Source) -> Self {
        Self(self.0.set("source", v.into_model()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<CreateConfigurationOptions, Error> {
        self.0.build().map(CreateConfigurationOptions)
    }
}

/// The updateConfiguration options.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateConfigurationOptions(Model);

impl UpdateConfigurationOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C, N>(
        environment_id: E,
        configuration_id: C,
        name: N,
    ) -> UpdateConfigurationOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
        N: Into<String>,
    {
        UpdateConfigurationOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("configuration_id", configuration_id.into())
                .set("name", name.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> UpdateConfigurationOptionsBuilder {
        UpdateConfigurationOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the configuration.
    pub fn configuration_id(&self) -> Option<&str> {
        self.0.get_str("configuration_id")
    }

    /// The new name of the configuration.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }

    /// The enrichment steps, in application order.
    pub fn enrichments(&self) -> Vec<Enrichment> {
        self.0
            .get_list("enrichments")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Enrichment::from_model))
            .collect()
    }

    /// The source to crawl.
    pub fn source(&self) -> Option<Source> {
        self.0.get_model("source").cloned().map(Source::from_model)
    }
}

impl TypedModel for UpdateConfigurationOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &UPDATE_CONFIGURATION_OPTIONS
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

/// A builder for [UpdateConfigurationOptions].
#[derive(Clone, Debug)]
pub struct UpdateConfigurationOptionsBuilder(Builder);

impl UpdateConfigurationOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the configuration ID.
    pub fn configuration_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("configuration_id", v.into()))
    }

    /// Sets the name.
    pub fn name<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("name", v.into()))
    }

    /// Sets the description.
    pub fn description<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("description", v.into()))
    }

    /// Sets the document conversion settings.
    pub fn conversions(self, v: serde_json::Value) -> Self {
        Self(self.0.set("conversions", v))
    }

    /// Adds one enrichment step.
    pub fn add_enrichments(self, v: Enrichment) -> Self {
        Self(self.0.append("enrichments", v.into_model()))
    }

    /// Sets the JSON normalization operations.
    pub fn normalizations(self, v: serde_json::Value) -> Self {
        Self(self.0.set("normalizations", v))
    }

    /// Sets the source to crawl.
    pub fn source(self, v: Source) -> Self {
        Self(self.0.set("source", v.into_model()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<UpdateConfigurationOptions, Error> {
        self.0.build().map(UpdateConfigurationOptions)
    }
}

/// The deleteConfiguration options.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteConfigurationOptions(Model);

impl DeleteConfigurationOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, configuration_id: C) -> DeleteConfigurationOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        DeleteConfigurationOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("configuration_id", configuration_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> DeleteConfigurationOptionsBuilder {
        DeleteConfigurationOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the configuration.
    pub fn configuration_id(&self) -> Option<&str> {
        self.0.get_str("configuration_id")
    }
}

impl TypedModel for DeleteConfigurationOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_CONFIGURATION_OPTIONS
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

/// A builder for [DeleteConfigurationOptions].
#[derive(Clone, Debug)]
pub struct DeleteConfigurationOptionsBuilder(Builder);

impl DeleteConfigurationOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the configuration ID.
    pub fn configuration_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("configuration_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<DeleteConfigurationOptions, Error> {
        self.0.build().map(DeleteConfigurationOptions)
    }
}

/// The listConfigurations options.
#[derive(Clone, Debug, PartialEq)]
pub struct ListConfigurationsOptions(Model);

impl ListConfigurationsOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(environment_id: T) -> ListConfigurationsOptionsBuilder {
        ListConfigurationsOptionsBuilder(
            Builder::new(Self::descriptor()).set("environment_id", environment_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> ListConfigurationsOptionsBuilder {
        ListConfigurationsOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// Show only configurations with the given name.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }
}

impl TypedModel for ListConfigurationsOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &LIST_CONFIGURATIONS_OPTIONS
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

/// A builder for [ListConfigurationsOptions].
#[derive(Clone, Debug)]
pub struct ListConfigurationsOptionsBuilder(Builder);

impl ListConfigurationsOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Show only configurations with the given name.
    pub fn name<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("name", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<ListConfigurationsOptions, Error> {
        self.0.build().map(ListConfigurationsOptions)
    }
}

/// A configuration: how documents are converted, enriched, and normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration(Model);

impl Configuration {
    /// The unique identifier of the configuration.
    pub fn configuration_id(&self) -> Option<&str> {
        self.0.get_str("configuration_id")
    }

    /// When the configuration was created.
    pub fn created(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("created")
    }

    /// When the configuration was last updated.
    pub fn updated(&self) -> Option<wkt::Timestamp> {
        self.0.get_date_time("updated")
    }

    /// The name of the configuration.
    pub fn name(&self) -> Option<&str> {
        self.0.get_str("name")
    }

    /// The description of the configuration.
    pub fn description(&self) -> Option<&str> {
        self.0.get_str("description")
    }

    /// The document conversion settings.
    pub fn conversions(&self) -> Option<&serde_json::Value> {
        self.0.get_json("conversions")
    }

    /// The enrichment steps, in application order.
    pub fn enrichments(&self) -> Vec<Enrichment> {
        self.0
            .get_list("enrichments")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Enrichment::from_model))
            .collect()
    }

    /// The JSON normalization operations.
    pub fn normalizations(&self) -> Option<&serde_json::Value> {
        self.0.get_json("normalizations")
    }

    /// The source to crawl.
    pub fn source(&self) -> Option<Source> {
        self.0.get_model("source").cloned().map(Source::from_model)
    }
}

impl TypedModel for Configuration {
    fn descriptor() -> &'static ModelDescriptor {
        &CONFIGURATION
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

/// Response object containing an array of configurations.
#[derive(Clone, Debug, PartialEq)]
pub struct ListConfigurationsResponse(Model);

impl ListConfigurationsResponse {
    /// The configurations.
    pub fn configurations(&self) -> Vec<Configuration> {
        self.0
            .get_list("configurations")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Configuration::from_model))
            .collect()
    }
}

impl TypedModel for ListConfigurationsResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &LIST_CONFIGURATIONS_RESPONSE
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

/// Response object after deleting a configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteConfigurationResponse(Model);

impl DeleteConfigurationResponse {
    /// The ID of the deleted configuration.
    pub fn configuration_id(&self) -> Option<&str> {
        self.0.get_str("configuration_id")
    }

    /// Status of the operation; `deleted` on success.
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }
}

impl TypedModel for DeleteConfigurationResponse {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_CONFIGURATION_RESPONSE
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
