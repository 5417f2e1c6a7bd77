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

//! The models of the Discovery v1 API.

mod collections;
pub use collections::*;
mod configurations;
pub use configurations::*;
mod credentials;
pub use credentials::*;
mod documents;
pub use documents::*;
mod environments;
pub use environments::*;
mod events;
pub use events::*;
mod expansions;
pub use expansions::*;
mod gateways;
pub use gateways::*;
mod metrics;
pub use metrics::*;
mod queries;
pub use queries::*;
mod training;
pub use training::*;
