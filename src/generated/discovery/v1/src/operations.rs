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

//! The operations of the Discovery v1 API.
//!
//! Each operation pairs an HTTP method with a path template; the
//! placeholders are resolved from the request model's path fields by
//! [sdk_core::request::bind].

use http::Method;
use lazy_static::lazy_static;
use sdk_core::operation::Operation;

lazy_static! {
    pub static ref CREATE_ENVIRONMENT: Operation =
        Operation::new("createEnvironment", Method::POST, "/v1/environments");
    pub static ref LIST_ENVIRONMENTS: Operation =
        Operation::new("listEnvironments", Method::GET, "/v1/environments");
    pub static ref UPDATE_ENVIRONMENT: Operation = Operation::new(
        "updateEnvironment",
        Method::PUT,
        "/v1/environments/{environment_id}",
    );
    pub static ref DELETE_ENVIRONMENT: Operation = Operation::new(
        "deleteEnvironment",
        Method::DELETE,
        "/v1/environments/{environment_id}",
    );
    pub static ref CREATE_CONFIGURATION: Operation = Operation::new(
        "createConfiguration",
        Method::POST,
        "/v1/environments/{environment_id}/configurations",
    );
    pub static ref LIST_CONFIGURATIONS: Operation = Operation::new(
        "listConfigurations",
        Method::GET,
        "/v1/environments/{environment_id}/configurations",
    );
    pub static ref UPDATE_CONFIGURATION: Operation = Operation::new(
        "updateConfiguration",
        Method::PUT,
        "/v1/environments/{environment_id}/configurations/{configuration_id}",
    );
    pub static ref DELETE_CONFIGURATION: Operation = Operation::new(
        "deleteConfiguration",
        Method::DELETE,
        "/v1/environments/{environment_id}/configurations/{configuration_id}",
    );
    pub static ref CREATE_COLLECTION: Operation = Operation::new(
        "createCollection",
        Method::POST,
        "/v1/environments/{environment_id}/collections",
    );
    pub static ref LIST_COLLECTIONS: Operation = Operation::new(
        "listCollections",
        Method::GET,
        "/v1/environments/{environment_id}/collections",
    );
    pub static ref GET_COLLECTION: Operation = Operation::new(
        "getCollection",
        Method::GET,
        "/v1/environments/{environment_id}/collections/{collection_id}",
    );
    pub static ref UPDATE_COLLECTION: Operation = Operation::new(
        "updateCollection",
        Method::PUT,
        "/v1/environments/{environment_id}/collections/{collection_id}",
    );
    pub static ref DELETE_COLLECTION: Operation = Operation::new(
        "deleteCollection",
        Method::DELETE,
        "/v1/environments/{environment_id}/collections/{collection_id}",
    );
    pub static ref CREATE_STOPWORD_LIST: Operation = Operation::new(
        "createStopwordList",
        Method::POST,
        "/v1/environments/{environment_id}/collections/{collection_id}/word_lists/stopwords",
    );
    pub static ref ADD_DOCUMENT: Operation = Operation::new(
        "addDocument",
        Method::POST,
        "/v1/environments/{environment_id}/collections/{collection_id}/documents",
    );
    pub static ref UPDATE_DOCUMENT: Operation = Operation::new(
        "updateDocument",
        Method::POST,
        "/v1/environments/{environment_id}/collections/{collection_id}/documents/{document_id}",
    );
    pub static ref DELETE_DOCUMENT: Operation = Operation::new(
        "deleteDocument",
        Method::DELETE,
        "/v1/environments/{environment_id}/collections/{collection_id}/documents/{document_id}",
    );
    pub static ref GET_DOCUMENT_STATUS: Operation = Operation::new(
        "getDocumentStatus",
        Method::GET,
        "/v1/environments/{environment_id}/collections/{collection_id}/documents/{document_id}",
    );
    pub static ref QUERY: Operation = Operation::new(
        "query",
        Method::POST,
        "/v1/environments/{environment_id}/collections/{collection_id}/query",
    );
    pub static ref FEDERATED_QUERY: Operation = Operation::new(
        "federatedQuery",
        Method::POST,
        "/v1/environments/{environment_id}/query",
    );
    pub static ref QUERY_NOTICES: Operation = Operation::new(
        "queryNotices",
        Method::GET,
        "/v1/environments/{environment_id}/collections/{collection_id}/notices",
    );
    pub static ref GET_AUTOCOMPLETION: Operation = Operation::new(
        "getAutocompletion",
        Method::GET,
        "/v1/environments/{environment_id}/collections/{collection_id}/autocompletion",
    );
    pub static ref ADD_TRAINING_DATA: Operation = Operation::new(
        "addTrainingData",
        Method::POST,
        "/v1/environments/{environment_id}/collections/{collection_id}/training_data",
    );
    pub static ref LIST_TRAINING_DATA: Operation = Operation::new(
        "listTrainingData",
        Method::GET,
        "/v1/environments/{environment_id}/collections/{collection_id}/training_data",
    );
    pub static ref DELETE_ALL_TRAINING_DATA: Operation = Operation::new(
        "deleteAllTrainingData",
        Method::DELETE,
        "/v1/environments/{environment_id}/collections/{collection_id}/training_data",
    );
    pub static ref DELETE_TRAINING_DATA: Operation = Operation::new(
        "deleteTrainingData",
        Method::DELETE,
        "/v1/environments/{environment_id}/collections/{collection_id}/training_data/{query_id}",
    );
    pub static ref CREATE_TRAINING_EXAMPLE: Operation = Operation::new(
        "createTrainingExample",
        Method::POST,
        "/v1/environments/{environment_id}/collections/{collection_id}/training_data/{query_id}/examples",
    );
    pub static ref CREATE_EXPANSIONS: Operation = Operation::new(
        "createExpansions",
        Method::POST,
        "/v1/environments/{environment_id}/collections/{collection_id}/expansions",
    );
    pub static ref LIST_EXPANSIONS: Operation = Operation::new(
        "listExpansions",
        Method::GET,
        "/v1/environments/{environment_id}/collections/{collection_id}/expansions",
    );
    pub static ref DELETE_EXPANSIONS: Operation = Operation::new(
        "deleteExpansions",
        Method::DELETE,
        "/v1/environments/{environment_id}/collections/{collection_id}/expansions",
    );
    pub static ref CREATE_CREDENTIALS: Operation = Operation::new(
        "createCredentials",
        Method::POST,
        "/v1/environments/{environment_id}/credentials",
    );
    pub static ref LIST_CREDENTIALS: Operation = Operation::new(
        "listCredentials",
        Method::GET,
        "/v1/environments/{environment_id}/credentials",
    );
    pub static ref UPDATE_CREDENTIALS: Operation = Operation::new(
        "updateCredentials",
        Method::PUT,
        "/v1/environments/{environment_id}/credentials/{credential_id}",
    );
    pub static ref DELETE_CREDENTIALS: Operation = Operation::new(
        "deleteCredentials",
        Method::DELETE,
        "/v1/environments/{environment_id}/credentials/{credential_id}",
    );
    pub static ref CREATE_GATEWAY: Operation = Operation::new(
        "createGateway",
        Method::POST,
        "/v1/environments/{environment_id}/gateways",
    );
    pub static ref LIST_GATEWAYS: Operation = Operation::new(
        "listGateways",
        Method::GET,
        "/v1/environments/{environment_id}/gateways",
    );
    pub static ref DELETE_GATEWAY: Operation = Operation::new(
        "deleteGateway",
        Method::DELETE,
        "/v1/environments/{environment_id}/gateways/{gateway_id}",
    );
    pub static ref CREATE_EVENT: Operation =
        Operation::new("createEvent", Method::POST, "/v1/events");
    pub static ref GET_METRICS_QUERY: Operation = Operation::new(
        "getMetricsQuery",
        Method::GET,
        "/v1/metrics/number_of_queries",
    );
    pub static ref GET_METRICS_EVENT_RATE: Operation =
        Operation::new("getMetricsEventRate", Method::GET, "/v1/metrics/event_rate");
    pub static ref GET_METRICS_QUERY_TOKEN_EVENT: Operation = Operation::new(
        "getMetricsQueryTokenEvent",
        Method::GET,
        "/v1/metrics/top_query_tokens_with_event_rate",
    );
    pub static ref QUERY_LOG: Operation = Operation::new("queryLog", Method::GET, "/v1/logs");
    pub static ref DELETE_USER_DATA: Operation =
        Operation::new("deleteUserData", Method::DELETE, "/v1/user_data");
}
