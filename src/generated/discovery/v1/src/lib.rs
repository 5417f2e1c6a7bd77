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

//! Request and response models for the Discovery v1 API.
//!
//! Every shape is declared once as a [ModelDescriptor][wkt::schema] table
//! and wrapped in a typed facade: request options expose a fluent builder
//! whose constructor takes the operation's required properties, response
//! models expose typed getters and `from_json`. Validation, serialization,
//! and request binding all run off the descriptor tables in
//! [sdk_core].
//!
//! # Examples
//! ```
//! use sdk_core::model::TypedModel;
//! use watson_discovery_v1::model::CreateCollectionOptions;
//!
//! let options = CreateCollectionOptions::builder("env-1", "docs")
//!     .description("my documents")
//!     .build()?;
//! assert_eq!(options.name(), Some("docs"));
//! # Ok::<(), sdk_core::error::Error>(())
//! ```
//!
//! This crate never performs I/O: binding an options model with
//! [sdk_core::request::bind] yields a request description for whatever
//! transport the application supplies.

/// The default service address.
pub const DEFAULT_ENDPOINT: &str = "https://api.us-south.discovery.watson.cloud.ibm.com";

pub mod model;
pub mod operations;
