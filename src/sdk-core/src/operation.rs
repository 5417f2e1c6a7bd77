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

//! Operation identifiers and client configuration.

/// One operation of a service: a method and a path template.
///
/// Path templates use `{wire_name}` placeholders, resolved from the
/// request model's Path-located fields when the request is bound:
///
/// ```
/// # use watson_sdk_core::operation::Operation;
/// let op = Operation::new(
///     "createCollection",
///     http::Method::POST,
///     "/v1/environments/{environment_id}/collections",
/// );
/// assert_eq!(op.name(), "createCollection");
/// ```
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Operation {
    name: &'static str,
    method: http::Method,
    path: &'static str,
}

impl Operation {
    /// Declares an operation.
    pub fn new(name: &'static str, method: http::Method, path: &'static str) -> Self {
        Self { name, method, path }
    }

    /// The operation identifier, e.g. `createCollection`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The HTTP method.
    pub fn method(&self) -> &http::Method {
        &self.method
    }

    /// The path template, e.g. `/v1/environments/{environment_id}`.
    pub fn path(&self) -> &'static str {
        self.path
    }
}

/// Client-level configuration shared by every bound request.
///
/// The service address, plus the date-based `version` parameter Watson
/// services use to pin request and response formats. When a version is set
/// it is appended to every bound request as a query parameter.
///
/// # Examples
/// ```
/// # use watson_sdk_core::operation::ClientConfig;
/// let config = ClientConfig::new("https://api.us-south.discovery.watson.cloud.ibm.com")
///     .set_version("2019-04-30");
/// assert_eq!(config.version(), Some("2019-04-30"));
/// ```
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct ClientConfig {
    endpoint: String,
    version: Option<String>,
}

impl ClientConfig {
    /// Creates a configuration for the given service address.
    pub fn new<T: Into<String>>(endpoint: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            version: None,
        }
    }

    /// Sets the version date sent with every request.
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// The service address.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The version date, if one was set.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation() {
        let op = Operation::new("listEnvironments", http::Method::GET, "/v1/environments");
        assert_eq!(op.name(), "listEnvironments");
        assert_eq!(op.method(), &http::Method::GET);
        assert_eq!(op.path(), "/v1/environments");
    }

    #[test]
    fn client_config() {
        let config = ClientConfig::new("https://example.com");
        assert_eq!(config.endpoint(), "https://example.com");
        assert_eq!(config.version(), None);
        let config = config.set_version("2019-04-30");
        assert_eq!(config.version(), Some("2019-04-30"));
    }
}
