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

//! Build-time validation across the request catalog.

use sdk_core::error::ValidationError;
use sdk_core::model::{Builder, TypedModel};
use watson_discovery_v1::model::*;

type Result = anyhow::Result<()>;

#[test]
fn create_collection_requires_name() {
    let err = Builder::new(CreateCollectionOptions::descriptor())
        .set("environment_id", "env-1")
        .build()
        .expect_err("name is required");
    assert_eq!(
        err.validation_detail(),
        Some(&ValidationError::Missing { field: "name" })
    );
    assert_eq!(err.validation_detail().and_then(|d| d.field()), Some("name"));
}

#[test]
fn create_collection_with_required_fields_succeeds() -> Result {
    let options = CreateCollectionOptions::builder("env-1", "docs").build()?;
    assert_eq!(options.environment_id(), Some("env-1"));
    assert_eq!(options.name(), Some("docs"));
    assert_eq!(options.description(), None);
    Ok(())
}

#[test]
fn empty_required_string_fails_like_unset() {
    let unset = Builder::new(CreateCollectionOptions::descriptor())
        .set("environment_id", "env-1")
        .build()
        .expect_err("name is required");
    let empty = CreateCollectionOptions::builder("env-1", "")
        .build()
        .expect_err("name cannot be empty");
    assert_eq!(
        unset.validation_detail().and_then(|d| d.field()),
        empty.validation_detail().and_then(|d| d.field()),
    );
    assert_eq!(
        empty.validation_detail(),
        Some(&ValidationError::Empty { field: "name" })
    );
}

#[test]
fn validation_is_fail_fast_in_declaration_order() {
    // Both required fields are missing; the first declared one is named.
    let err = Builder::new(CreateCollectionOptions::descriptor())
        .build()
        .expect_err("everything is missing");
    assert_eq!(
        err.validation_detail(),
        Some(&ValidationError::Missing {
            field: "environment_id"
        })
    );
}

#[test]
fn update_document_file_requires_filename() -> Result {
    let err = UpdateDocumentOptions::builder("env-1", "coll-1", "doc-1")
        .file(wkt::BinaryPart::new(&b"new text"[..]))
        .build()
        .expect_err("filename must accompany file");
    assert_eq!(
        err.validation_detail(),
        Some(&ValidationError::MissingCompanion {
            field: "filename",
            companion: "file"
        })
    );

    let options = UpdateDocumentOptions::builder("env-1", "coll-1", "doc-1")
        .file(wkt::BinaryPart::new(&b"new text"[..]))
        .filename("report.txt")
        .build()?;
    assert_eq!(options.filename(), Some("report.txt"));
    Ok(())
}

#[test]
fn update_document_without_file_needs_no_filename() -> Result {
    let options = UpdateDocumentOptions::builder("env-1", "coll-1", "doc-1")
        .metadata(r#"{"Subject": "Apples"}"#)
        .build()?;
    assert_eq!(options.file(), None);
    assert_eq!(options.metadata(), Some(r#"{"Subject": "Apples"}"#));
    Ok(())
}

#[test]
fn environment_size_is_a_closed_set() -> Result {
    let err = CreateEnvironmentOptions::builder("research")
        .size("XKCD")
        .build()
        .expect_err("XKCD is not a documented size");
    assert_eq!(
        err.validation_detail(),
        Some(&ValidationError::UnknownEnumValue {
            field: "size",
            value: "XKCD".into()
        })
    );
    let options = CreateEnvironmentOptions::builder("research")
        .size(environment_size::XL)
        .build()?;
    assert_eq!(options.size(), Some("XL"));
    Ok(())
}

#[test]
fn event_data_requires_its_four_ids() {
    let err = EventData::builder("env-1", "token", "coll-1", "")
        .build()
        .expect_err("document_id cannot be empty");
    assert_eq!(
        err.validation_detail(),
        Some(&ValidationError::Empty {
            field: "document_id"
        })
    );
}

#[test]
fn create_event_requires_type_and_data() -> Result {
    let data = EventData::builder("env-1", "token", "coll-1", "doc-1").build()?;
    let err = Builder::new(CreateEventOptions::descriptor())
        .set("data", data.model().clone())
        .build()
        .expect_err("type is required");
    assert_eq!(
        err.validation_detail(),
        Some(&ValidationError::Missing { field: "type" })
    );

    let data = EventData::builder("env-1", "token", "coll-1", "doc-1").build()?;
    let options = CreateEventOptions::builder(event_type::CLICK, data).build()?;
    assert_eq!(options.event_type(), Some("click"));
    assert_eq!(
        options.data().and_then(|d| d.document_id().map(str::to_string)),
        Some("doc-1".to_string())
    );
    Ok(())
}

#[test]
fn expansions_require_expanded_terms() {
    let err = Expansion::builder()
        .add_input_terms("automobile")
        .build()
        .expect_err("expanded_terms is required");
    assert_eq!(
        err.validation_detail(),
        Some(&ValidationError::Missing {
            field: "expanded_terms"
        })
    );
}

#[test]
fn rebuilding_after_fixing_the_builder_succeeds() -> Result {
    let seed = CreateCollectionOptions::builder("env-1", "");
    let err = seed.clone().build().expect_err("name cannot be empty");
    assert!(err.is_validation(), "{err:?}");
    let options = seed.name("docs").build()?;
    assert_eq!(options.name(), Some("docs"));
    Ok(())
}

#[test]
fn new_builder_supports_clone_and_modify() -> Result {
    let original = CreateCollectionOptions::builder("env-1", "docs")
        .description("original")
        .build()?;
    let copy = original.new_builder().build()?;
    assert_eq!(copy, original);
    let changed = original.new_builder().description("updated").build()?;
    assert_ne!(changed, original);
    assert_eq!(changed.name(), Some("docs"));
    assert_eq!(changed.description(), Some("updated"));
    Ok(())
}

#[test]
fn credential_type_is_validated_on_requests() {
    let err = CredentialDetails::builder()
        .credential_type("telepathy")
        .build()
        .expect_err("telepathy is not a credential type");
    assert_eq!(
        err.validation_detail(),
        Some(&ValidationError::UnknownEnumValue {
            field: "credential_type",
            value: "telepathy".into()
        })
    );
}
