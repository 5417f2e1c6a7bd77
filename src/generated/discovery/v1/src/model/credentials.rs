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

/// The authentication mechanisms a source can be crawled with.
pub mod credential_type {
    pub const OAUTH2: &str = "oauth2";
    pub const SAML: &str = "saml";
    pub const USERNAME_PASSWORD: &str = "username_password";
    pub const NOAUTH: &str = "noauth";
    pub const BASIC: &str = "basic";
    pub const NTLM_V1: &str = "ntlm_v1";
    pub const AWS4_HMAC: &str = "aws4_hmac";

    /// All documented credential types.
    pub const ALL: &[&str] = &[
        OAUTH2,
        SAML,
        USERNAME_PASSWORD,
        NOAUTH,
        BASIC,
        NTLM_V1,
        AWS4_HMAC,
    ];
}

/// The source types credentials can connect to.
pub mod source_type {
    pub const BOX: &str = "box";
    pub const SALESFORCE: &str = "salesforce";
    pub const SHAREPOINT: &str = "sharepoint";
    pub const WEB_CRAWL: &str = "web_crawl";
    pub const CLOUD_OBJECT_STORAGE: &str = "cloud_object_storage";

    /// All documented source types.
    pub const ALL: &[&str] = &[BOX, SALESFORCE, SHAREPOINT, WEB_CRAWL, CLOUD_OBJECT_STORAGE];
}

/// The connection status of stored credentials.
pub mod credential_status {
    pub const CONNECTED: &str = "connected";
    pub const INVALID: &str = "invalid";

    /// All documented statuses.
    pub const ALL: &[&str] = &[CONNECTED, INVALID];
}

/// The SharePoint deployment flavors.
pub mod source_version {
    pub const ONLINE: &str = "online";

    /// All documented source versions.
    pub const ALL: &[&str] = &[ONLINE];
}

fn credentials_body_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::optional("source_type", "source_type", FieldKind::Enum(source_type::ALL)),
        FieldSchema::optional(
            "credential_details",
            "credential_details",
            FieldKind::Object(&CREDENTIAL_DETAILS),
        ),
        FieldSchema::optional("status", "status", FieldKind::Enum(credential_status::ALL)),
    ]
}

lazy_static! {
    static ref CREDENTIAL_DETAILS: ModelDescriptor = ModelDescriptor::new(
        "CredentialDetails",
        vec![
            FieldSchema::optional(
                "credential_type",
                "credential_type",
                FieldKind::Enum(credential_type::ALL),
            ),
            FieldSchema::optional("client_id", "client_id", FieldKind::Str),
            FieldSchema::optional("enterprise_id", "enterprise_id", FieldKind::Str),
            FieldSchema::optional("url", "url", FieldKind::Str),
            FieldSchema::optional("username", "username", FieldKind::Str),
            FieldSchema::optional("organization_url", "organization_url", FieldKind::Str),
            FieldSchema::optional(
                "site_collection_path",
                "site_collection.path",
                FieldKind::Str,
            ),
            FieldSchema::optional("client_secret", "client_secret", FieldKind::Str)
                .set_write_only(),
            FieldSchema::optional("public_key_id", "public_key_id", FieldKind::Str),
            FieldSchema::optional("private_key", "private_key", FieldKind::Str).set_write_only(),
            FieldSchema::optional("passphrase", "passphrase", FieldKind::Str).set_write_only(),
            FieldSchema::optional("password", "password", FieldKind::Str).set_write_only(),
            FieldSchema::optional("gateway_id", "gateway_id", FieldKind::Str),
            FieldSchema::optional(
                "source_version",
                "source_version",
                FieldKind::Enum(source_version::ALL),
            ),
            FieldSchema::optional("web_application_url", "web_application_url", FieldKind::Str),
            FieldSchema::optional("domain", "domain", FieldKind::Str),
            FieldSchema::optional("endpoint", "endpoint", FieldKind::Str),
            FieldSchema::optional("access_key_id", "access_key_id", FieldKind::Str),
            FieldSchema::optional("secret_access_key", "secret_access_key", FieldKind::Str)
                .set_write_only(),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref CREATE_CREDENTIALS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "CreateCredentialsOptions",
        {
            let mut fields = vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
            ];
            fields.extend(credentials_body_fields());
            fields
        },
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref UPDATE_CREDENTIALS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "UpdateCredentialsOptions",
        {
            let mut fields = vec![
                FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                    .set_location(Location::Path),
                FieldSchema::required("credential_id", "credential_id", FieldKind::Str)
                    .set_location(Location::Path),
            ];
            fields.extend(credentials_body_fields());
            fields
        },
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_CREDENTIALS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "DeleteCredentialsOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
            FieldSchema::required("credential_id", "credential_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref LIST_CREDENTIALS_OPTIONS: ModelDescriptor = ModelDescriptor::new(
        "ListCredentialsOptions",
        vec![
            FieldSchema::required("environment_id", "environment_id", FieldKind::Str)
                .set_location(Location::Path),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref CREDENTIALS: ModelDescriptor = ModelDescriptor::new(
        "Credentials",
        {
            let mut fields = vec![FieldSchema::optional(
                "credential_id",
                "credential_id",
                FieldKind::Str,
            )];
            fields.extend(credentials_body_fields());
            fields
        },
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref CREDENTIALS_LIST: ModelDescriptor = ModelDescriptor::new(
        "CredentialsList",
        vec![
            FieldSchema::optional(
                "credentials",
                "credentials",
                FieldKind::ListOf(Box::new(FieldKind::Object(&CREDENTIALS))),
            ),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
    static ref DELETE_CREDENTIALS: ModelDescriptor = ModelDescriptor::new(
        "DeleteCredentials",
        vec![
            FieldSchema::optional("credential_id", "credential_id", FieldKind::Str),
            FieldSchema::optional("status", "status", FieldKind::Str),
        ],
        vec![],
    )
    .expect("static descriptor is well-formed");
}

/// Details of the credentials used to connect to a source.
///
/// The secret-valued fields — `client_secret`, `private_key`, `passphrase`,
/// `password`, and `secret_access_key` — are accepted on requests but never
/// returned by the service.
#[derive(Clone, Debug, PartialEq)]
pub struct CredentialDetails(Model);

impl CredentialDetails {
    /// Starts a builder. All properties are optional; which ones apply
    /// depends on the source type and credential type.
    pub fn builder() -> CredentialDetailsBuilder {
        CredentialDetailsBuilder(Builder::new(Self::descriptor()))
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> CredentialDetailsBuilder {
        CredentialDetailsBuilder(self.0.new_builder())
    }

    /// The authentication mechanism. See [credential_type].
    pub fn credential_type(&self) -> Option<&str> {
        self.0.get_str("credential_type")
    }

    /// The OAuth client ID.
    pub fn client_id(&self) -> Option<&str> {
        self.0.get_str("client_id")
    }

    /// The Box enterprise ID.
    pub fn enterprise_id(&self) -> Option<&str> {
        self.0.get_str("enterprise_id")
    }

    /// The source URL.
    pub fn url(&self) -> Option<&str> {
        self.0.get_str("url")
    }

    /// The username.
    pub fn username(&self) -> Option<&str> {
        self.0.get_str("username")
    }

    /// The Salesforce organization URL.
    pub fn organization_url(&self) -> Option<&str> {
        self.0.get_str("organization_url")
    }

    /// The SharePoint site collection path.
    pub fn site_collection_path(&self) -> Option<&str> {
        self.0.get_str("site_collection_path")
    }

    /// The OAuth client secret. Never returned by the service.
    pub fn client_secret(&self) -> Option<&str> {
        self.0.get_str("client_secret")
    }

    /// The Box public key ID.
    pub fn public_key_id(&self) -> Option<&str> {
        self.0.get_str("public_key_id")
    }

    /// The private key. Never returned by the service.
    pub fn private_key(&self) -> Option<&str> {
        self.0.get_str("private_key")
    }

    /// The passphrase for the private key. Never returned by the service.
    pub fn passphrase(&self) -> Option<&str> {
        self.0.get_str("passphrase")
    }

    /// The password. Never returned by the service.
    pub fn password(&self) -> Option<&str> {
        self.0.get_str("password")
    }

    /// The gateway used to reach an on-premises source.
    pub fn gateway_id(&self) -> Option<&str> {
        self.0.get_str("gateway_id")
    }

    /// The SharePoint deployment flavor. See [source_version].
    pub fn source_version(&self) -> Option<&str> {
        self.0.get_str("source_version")
    }

    /// The SharePoint web application URL.
    pub fn web_application_url(&self) -> Option<&str> {
        self.0.get_str("web_application_url")
    }

    /// The NTLM domain.
    pub fn domain(&self) -> Option<&str> {
        self.0.get_str("domain")
    }

    /// The Cloud Object Storage endpoint.
    pub fn endpoint(&self) -> Option<&str> {
        self.0.get_str("endpoint")
    }

    /// The Cloud Object Storage access key ID.
    pub fn access_key_id(&self) -> Option<&str> {
        self.0.get_str("access_key_id")
    }

    /// The Cloud Object Storage secret access key. Never returned by the
    /// service.
    pub fn secret_access_key(&self) -> Option<&str> {
        self.0.get_str("secret_access_key")
    }
}

impl TypedModel for CredentialDetails {
    fn descriptor() -> &'static ModelDescriptor {
        &CREDENTIAL_DETAILS
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

/// A builder for [CredentialDetails].
#[derive(Clone, Debug)]
pub struct CredentialDetailsBuilder(Builder);

impl CredentialDetailsBuilder {
    /// Sets the credential type. See [credential_type].
    pub fn credential_type<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("credential_type", v.into()))
    }

    /// Sets the OAuth client ID.
    pub fn client_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("client_id", v.into()))
    }

    /// Sets the Box enterprise ID.
    pub fn enterprise_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("enterprise_id", v.into()))
    }

    /// Sets the source URL.
    pub fn url<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("url", v.into()))
    }

    /// Sets the username.
    pub fn username<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("username", v.into()))
    }

    /// Sets the Salesforce organization URL.
    pub fn organization_url<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("organization_url", v.into()))
    }

    /// Sets the SharePoint site collection path.
    pub fn site_collection_path<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("site_collection_path", v.into()))
    }

    /// Sets the OAuth client secret.
    pub fn client_secret<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("client_secret", v.into()))
    }

    /// Sets the Box public key ID.
    pub fn public_key_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("public_key_id", v.into()))
    }

    /// Sets the private key.
    pub fn private_key<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("private_key", v.into()))
    }

    /// Sets the passphrase for the private key.
    pub fn passphrase<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("passphrase", v.into()))
    }

    /// Sets the password.
    pub fn password<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("password", v.into()))
    }

    /// Sets the gateway ID.
    pub fn gateway_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("gateway_id", v.into()))
    }

    /// Sets the SharePoint deployment flavor.
    pub fn source_version<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("source_version", v.into()))
    }

    /// Sets the SharePoint web application URL.
    pub fn web_application_url<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("web_application_url", v.into()))
    }

    /// Sets the NTLM domain.
    pub fn domain<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("domain", v.into()))
    }

    /// Sets the Cloud Object Storage endpoint.
    pub fn endpoint<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("endpoint", v.into()))
    }

    /// Sets the Cloud Object Storage access key ID.
    pub fn access_key_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("access_key_id", v.into()))
    }

    /// Sets the Cloud Object Storage secret access key.
    pub fn secret_access_key<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("secret_access_key", v.into()))
    }

    /// Builds the credential details.
    pub fn build(self) -> Result<CredentialDetails, Error> {
        self.0.build().map(CredentialDetails)
    }
}

/// The createCredentials options.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateCredentialsOptions(Model);

impl CreateCredentialsOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(environment_id: T) -> CreateCredentialsOptionsBuilder {
        CreateCredentialsOptionsBuilder(
            Builder::new(Self::descriptor()).set("environment_id", environment_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> CreateCredentialsOptionsBuilder {
        CreateCredentialsOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The source the credentials connect to. See [source_type].
    pub fn source_type(&self) -> Option<&str> {
        self.0.get_str("source_type")
    }

    /// The details of the credentials.
    pub fn credential_details(&self) -> Option<CredentialDetails> {
        self.0
            .get_model("credential_details")
            .cloned()
            .map(CredentialDetails::from_model)
    }

    /// The connection status. See [credential_status].
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }
}

impl TypedModel for CreateCredentialsOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &CREATE_CREDENTIALS_OPTIONS
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

/// A builder for [CreateCredentialsOptions].
#[derive(Clone, Debug)]
pub struct CreateCredentialsOptionsBuilder(Builder);

impl CreateCredentialsOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the source type. See [source_type].
    pub fn source_type<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("source_type", v.into()))
    }

    /// Sets the credential details.
    pub fn credential_details(self, v: CredentialDetails) -> Self {
        Self(self.0.set("credential_details", v.into_model()))
    }

    /// Sets the connection status.
    pub fn status<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("status", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<CreateCredentialsOptions, Error> {
        self.0.build().map(CreateCredentialsOptions)
    }
}

/// The updateCredentials options.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateCredentialsOptions(Model);

impl UpdateCredentialsOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, credential_id: C) -> UpdateCredentialsOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        UpdateCredentialsOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("credential_id", credential_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> UpdateCredentialsOptionsBuilder {
        UpdateCredentialsOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the credentials.
    pub fn credential_id(&self) -> Option<&str> {
        self.0.get_str("credential_id")
    }

    /// The source the credentials connect to.
    pub fn source_type(&self) -> Option<&str> {
        self.0.get_str("source_type")
    }

    /// The details of the credentials.
    pub fn credential_details(&self) -> Option<CredentialDetails> {
        self.0
            .get_model("credential_details")
            .cloned()
            .map(CredentialDetails::from_model)
    }

    /// The connection status.
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }
}

impl TypedModel for UpdateCredentialsOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &UPDATE_CREDENTIALS_OPTIONS
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

/// A builder for [UpdateCredentialsOptions].
#[derive(Clone, Debug)]
pub struct UpdateCredentialsOptionsBuilder(Builder);

impl UpdateCredentialsOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the credential ID.
    pub fn credential_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("credential_id", v.into()))
    }

    /// Sets the source type.
    pub fn source_type<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("source_type", v.into()))
    }

    /// Sets the credential details.
    pub fn credential_details(self, v: CredentialDetails) -> Self {
        Self(self.0.set("credential_details", v.into_model()))
    }

    /// Sets the connection status.
    pub fn status<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("status", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<UpdateCredentialsOptions, Error> {
        self.0.build().map(UpdateCredentialsOptions)
    }
}

/// The deleteCredentials options.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteCredentialsOptions(Model);

impl DeleteCredentialsOptions {
    /// Starts a builder with the required properties.
    pub fn builder<E, C>(environment_id: E, credential_id: C) -> DeleteCredentialsOptionsBuilder
    where
        E: Into<String>,
        C: Into<String>,
    {
        DeleteCredentialsOptionsBuilder(
            Builder::new(Self::descriptor())
                .set("environment_id", environment_id.into())
                .set("credential_id", credential_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> DeleteCredentialsOptionsBuilder {
        DeleteCredentialsOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }

    /// The ID of the credentials.
    pub fn credential_id(&self) -> Option<&str> {
        self.0.get_str("credential_id")
    }
}

impl TypedModel for DeleteCredentialsOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_CREDENTIALS_OPTIONS
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

/// A builder for [DeleteCredentialsOptions].
#[derive(Clone, Debug)]
pub struct DeleteCredentialsOptionsBuilder(Builder);

impl DeleteCredentialsOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Sets the credential ID.
    pub fn credential_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("credential_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<DeleteCredentialsOptions, Error> {
        self.0.build().map(DeleteCredentialsOptions)
    }
}

/// The listCredentials options.
#[derive(Clone, Debug, PartialEq)]
pub struct ListCredentialsOptions(Model);

impl ListCredentialsOptions {
    /// Starts a builder with the required properties.
    pub fn builder<T: Into<String>>(environment_id: T) -> ListCredentialsOptionsBuilder {
        ListCredentialsOptionsBuilder(
            Builder::new(Self::descriptor()).set("environment_id", environment_id.into()),
        )
    }

    /// Creates a builder seeded with every field of this value.
    pub fn new_builder(&self) -> ListCredentialsOptionsBuilder {
        ListCredentialsOptionsBuilder(self.0.new_builder())
    }

    /// The ID of the environment.
    pub fn environment_id(&self) -> Option<&str> {
        self.0.get_str("environment_id")
    }
}

impl TypedModel for ListCredentialsOptions {
    fn descriptor() -> &'static ModelDescriptor {
        &LIST_CREDENTIALS_OPTIONS
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

/// A builder for [ListCredentialsOptions].
#[derive(Clone, Debug)]
pub struct ListCredentialsOptionsBuilder(Builder);

impl ListCredentialsOptionsBuilder {
    /// Sets the environment ID.
    pub fn environment_id<T: Into<String>>(self, v: T) -> Self {
        Self(self.0.set("environment_id", v.into()))
    }

    /// Validates the accumulated fields and builds the options.
    pub fn build(self) -> Result<ListCredentialsOptions, Error> {
        self.0.build().map(ListCredentialsOptions)
    }
}

/// Stored credentials for a source.
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials(Model);

impl Credentials {
    /// The unique identifier of the credentials.
    pub fn credential_id(&self) -> Option<&str> {
        self.0.get_str("credential_id")
    }

    /// The source the credentials connect to.
    pub fn source_type(&self) -> Option<&str> {
        self.0.get_str("source_type")
    }

    /// The details of the credentials, with the secrets omitted.
    pub fn credential_details(&self) -> Option<CredentialDetails> {
        self.0
            .get_model("credential_details")
            .cloned()
            .map(CredentialDetails::from_model)
    }

    /// The connection status.
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }
}

impl TypedModel for Credentials {
    fn descriptor() -> &'static ModelDescriptor {
        &CREDENTIALS
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

/// Response object containing an array of stored credentials.
#[derive(Clone, Debug, PartialEq)]
pub struct CredentialsList(Model);

impl CredentialsList {
    /// The stored credentials.
    pub fn credentials(&self) -> Vec<Credentials> {
        self.0
            .get_list("credentials")
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_model().cloned().map(Credentials::from_model))
            .collect()
    }
}

impl TypedModel for CredentialsList {
    fn descriptor() -> &'static ModelDescriptor {
        &CREDENTIALS_LIST
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

/// Response object after deleting credentials.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteCredentials(Model);

impl DeleteCredentials {
    /// The ID of the deleted credentials.
    pub fn credential_id(&self) -> Option<&str> {
        self.0.get_str("credential_id")
    }

    /// Status of the operation; `deleted` on success.
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("status")
    }
}

impl TypedModel for DeleteCredentials {
    fn descriptor() -> &'static ModelDescriptor {
        &DELETE_CREDENTIALS
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
