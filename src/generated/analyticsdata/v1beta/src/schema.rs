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

/// The schema for [FilterExpression][crate::model::FilterExpression].
pub fn filter_expression() -> Schema {
    Schema::new()
        .field("andGroup", FieldType::Recursive(filter_expression_list))
        .field("orGroup", FieldType::Recursive(filter_expression_list))
        .field("notExpression", FieldType::Recursive(filter_expression))
        .field("filter", FieldType::Message(filter()))
}

/// The schema for [FilterExpressionList][crate::model::FilterExpressionList].
pub fn filter_expression_list() -> Schema {
    Schema::new().field("expressions", FieldType::array(FieldType::Recursive(filter_expression)))
}

/// The schema for [Filter][crate::model::Filter].
pub fn filter() -> Schema {
    Schema::new()
        .field("numericFilter", FieldType::Message(numeric_filter()))
        .field("betweenFilter", FieldType::Message(between_filter()))
}

/// The schema for [NumericFilter][crate::model::NumericFilter].
pub fn numeric_filter() -> Schema {
    Schema::new().field("value", FieldType::Message(numeric_value()))
}

/// The schema for [BetweenFilter][crate::model::BetweenFilter].
pub fn between_filter() -> Schema {
    Schema::new()
        .field("fromValue", FieldType::Message(numeric_value()))
        .field("toValue", FieldType::Message(numeric_value()))
}

/// The schema for [NumericValue][crate::model::NumericValue].
pub fn numeric_value() -> Schema {
    Schema::new().field("int64Value", FieldType::Int64)
}

/// The schema for [Pivot][crate::model::Pivot].
pub fn pivot() -> Schema {
    Schema::new()
        .field("offset", FieldType::Int64)
        .field("limit", FieldType::Int64)
}

/// The schema for [AudienceExport][crate::model::AudienceExport].
pub fn audience_export() -> Schema {
    Schema::new().field("beginCreatingTime", FieldType::Timestamp)
}

/// The schema for [ListAudienceExportsResponse][crate::model::ListAudienceExportsResponse].
pub fn list_audience_exports_response() -> Schema {
    Schema::new().field("audienceExports", FieldType::array(FieldType::Message(audience_export())))
}

/// The schema for [QueryAudienceExportResponse][crate::model::QueryAudienceExportResponse].
pub fn query_audience_export_response() -> Schema {
    Schema::new().field("audienceExport", FieldType::Message(audience_export()))
}
