// Copyright 2025 Google LLC
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

// Code generated by sidekick. DO NOT EDIT.

//! Use these schemas with [wire::encode] and [wire::decode] to convert
//! between the JSON payloads of the service and [wire::Value] trees. Only
//! the messages with timestamps, 64-bit integers, bytes, or durations
//! (directly or in nested messages) have a schema.

use wire::{FieldType, Schema};

/// The schema for [Group][crate::model::Group].
pub fn group() -> Schema {
    Schema::new()
        .field("snippet", FieldType::Message(group_snippet()))
        .field("contentDetails", FieldType::Message(group_content_details()))
}

/// The schema for [GroupSnippet][crate::model::GroupSnippet].
pub fn group_snippet() -> Schema {
    Schema::new().field("publishedAt", FieldType::Timestamp)
}

/// The schema for [GroupContentDetails][crate::model::GroupContentDetails].
pub fn group_content_details() -> Schema {
    Schema::new().field("itemCount", FieldType::UInt64)
}

/// The schema for [ListGroupsResponse][crate::model::ListGroupsResponse].
pub fn list_groups_response() -> Schema {
    Schema::new().field("items", FieldType::array(FieldType::Message(group())))
}
