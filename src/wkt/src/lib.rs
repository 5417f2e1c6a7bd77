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

//! Well-known types for the Watson APIs.
//!
//! Watson services exchange a number of well-known value types with custom
//! JSON encodings: timestamps with a fixed millisecond wire format, and
//! opaque binary upload parts that travel as multipart form data rather than
//! JSON. This crate also hosts the schema vocabulary ([schema]) used to
//! declare request and response shapes once, as data, so that validation and
//! serialization can be table-driven instead of hand-written per type.

mod binary;
pub use crate::binary::*;
mod timestamp;
pub use crate::timestamp::*;
pub mod schema;
