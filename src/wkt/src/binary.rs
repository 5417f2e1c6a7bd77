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

/// An opaque binary upload, such as a document or a stopword list.
///
/// Binary parts never appear in JSON payloads. They are carried as multipart
/// form parts, and the model layer treats them as opaque: the content is not
/// inspected, and the multipart encoding itself is the transport's problem.
///
/// # Examples
/// ```
/// # use watson_sdk_wkt::BinaryPart;
/// let part = BinaryPart::new("some document text")
///     .set_filename("report.txt")
///     .set_content_type("text/plain");
/// assert_eq!(part.filename(), Some("report.txt"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct BinaryPart {
    data: bytes::Bytes,
    filename: Option<String>,
    content_type: Option<String>,
}

impl BinaryPart {
    /// Creates a part from the raw content.
    pub fn new<T: Into<bytes::Bytes>>(data: T) -> Self {
        Self {
            data: data.into(),
            filename: None,
            content_type: None,
        }
    }

    /// Sets the filename reported for this part.
    pub fn set_filename<T: Into<String>>(mut self, v: T) -> Self {
        self.filename = Some(v.into());
        self
    }

    /// Sets the media type of the content.
    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    /// The raw content.
    pub fn data(&self) -> &bytes::Bytes {
        &self.data
    }

    /// The filename, if one was provided.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// The media type, if one was provided.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluent_setters() {
        let part = BinaryPart::new(&b"{}"[..])
            .set_filename("empty.json")
            .set_content_type("application/json");
        assert_eq!(part.data().as_ref(), b"{}");
        assert_eq!(part.filename(), Some("empty.json"));
        assert_eq!(part.content_type(), Some("application/json"));
    }

    #[test]
    fn defaults() {
        let part = BinaryPart::default();
        assert!(part.data().is_empty(), "{part:?}");
        assert_eq!(part.filename(), None);
        assert_eq!(part.content_type(), None);
    }
}
