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

/// The schema for [Label][crate::model::Label].
pub fn label() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("revisionCreateTime", FieldType::Timestamp)
        .field("publishTime", FieldType::Timestamp)
        .field("disableTime", FieldType::Timestamp)
        .field("fields", FieldType::array(FieldType::Message(field())))
}

/// The schema for [Field][crate::model::Field].
pub fn field() -> Schema {
    Schema::new()
        .field("integerOptions", FieldType::Message(integer_options()))
        .field("selectionOptions", FieldType::Message(selection_options()))
        .field("createTime", FieldType::Timestamp)
        .field("updateTime", FieldType::Timestamp)
        .field("disableTime", FieldType::Timestamp)
}

/// The schema for [IntegerOptions][crate::model::IntegerOptions].
pub fn integer_options() -> Schema {
    Schema::new()
        .field("minValue", FieldType::Int64)
        .field("maxValue", FieldType::Int64)
}

/// The schema for [SelectionOptions][crate::model::SelectionOptions].
pub fn selection_options() -> Schema {
    Schema::new().field("choices", FieldType::array(FieldType::Message(choice())))
}

/// The schema for [Choice][crate::model::Choice].
pub fn choice() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("publishTime", FieldType::Timestamp)
}

/// The schema for [ListLabelsResponse][crate::model::ListLabelsResponse].
pub fn list_labels_response() -> Schema {
    Schema::new().field("labels", FieldType::array(FieldType::Message(label())))
}

/// The schema for [IntegerLimits][crate::model::IntegerLimits].
pub fn integer_limits() -> Schema {
    Schema::new()
        .field("minValue", FieldType::Int64)
        .field("maxValue", FieldType::Int64)
}

/// The schema for [FieldLimits][crate::model::FieldLimits].
pub fn field_limits() -> Schema {
    Schema::new().field("integerLimits", FieldType::Message(integer_limits()))
}

/// The schema for [LabelLimits][crate::model::LabelLimits].
pub fn label_limits() -> Schema {
    Schema::new().field("fieldLimits", FieldType::Message(field_limits()))
}
