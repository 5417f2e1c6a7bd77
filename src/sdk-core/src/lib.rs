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

//! The model engine shared by all Watson client libraries.
//!
//! Request and response shapes are declared as [wkt::schema::ModelDescriptor]
//! tables. This crate provides everything that runs against those tables:
//!
//! - [model::Builder] accumulates field values and produces an immutable,
//!   validated [model::Model];
//! - [validator] enforces the required / non-empty / companion-field rules
//!   at build time, before any network call could be attempted;
//! - [codec] serializes models to their wire JSON and back, driven entirely
//!   by the descriptor;
//! - [request] binds a built model to an HTTP request description — path
//!   substitution, query and header routing, JSON or multipart body — and
//!   defines the [request::Invoker] seam the actual transport plugs into.
//!
//! Nothing in this crate performs I/O. Builders are meant for a single call
//! sequence and are not shared across threads; models are immutable once
//! built and can be shared freely.

pub mod codec;
pub mod error;
pub mod model;
pub mod operation;
pub mod request;
pub mod validator;
mod value;
pub use crate::value::Value;
