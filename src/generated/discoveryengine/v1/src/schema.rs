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

/// The schema for [DataStore][crate::model::DataStore].
pub fn data_store() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("billingEstimation", FieldType::Message(billing_estimation()))
}

/// The schema for [BillingEstimation][crate::model::BillingEstimation].
pub fn billing_estimation() -> Schema {
    Schema::new()
        .field("structuredDataSize", FieldType::Int64)
        .field("unstructuredDataSize", FieldType::Int64)
        .field("websiteDataSize", FieldType::Int64)
        .field("structuredDataUpdateTime", FieldType::Timestamp)
        .field("unstructuredDataUpdateTime", FieldType::Timestamp)
        .field("websiteDataUpdateTime", FieldType::Timestamp)
}

/// The schema for [Document][crate::model::Document].
pub fn document() -> Schema {
    Schema::new()
        .field("content", FieldType::Message(content()))
        .field("indexTime", FieldType::Timestamp)
        .field("indexStatus", FieldType::Message(index_status()))
}

/// The schema for [Content][crate::model::Content].
pub fn content() -> Schema {
    Schema::new().field("rawBytes", FieldType::Bytes)
}

/// The schema for [IndexStatus][crate::model::IndexStatus].
pub fn index_status() -> Schema {
    Schema::new().field("indexTime", FieldType::Timestamp)
}

/// The schema for [InlineSource][crate::model::InlineSource].
pub fn inline_source() -> Schema {
    Schema::new().field("documents", FieldType::array(FieldType::Message(document())))
}

/// The schema for [ImportDocumentsMetadata][crate::model::ImportDocumentsMetadata].
pub fn import_documents_metadata() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("updateTime", FieldType::Timestamp)
        .field("successCount", FieldType::Int64)
        .field("failureCount", FieldType::Int64)
        .field("totalCount", FieldType::Int64)
}

/// The schema for [PurgeDocumentsMetadata][crate::model::PurgeDocumentsMetadata].
pub fn purge_documents_metadata() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("updateTime", FieldType::Timestamp)
        .field("successCount", FieldType::Int64)
        .field("failureCount", FieldType::Int64)
        .field("ignoredCount", FieldType::Int64)
}

/// The schema for [PurgeDocumentsResponse][crate::model::PurgeDocumentsResponse].
pub fn purge_documents_response() -> Schema {
    Schema::new().field("purgeCount", FieldType::Int64)
}

/// The schema for [ListDataStoresResponse][crate::model::ListDataStoresResponse].
pub fn list_data_stores_response() -> Schema {
    Schema::new().field("dataStores", FieldType::array(FieldType::Message(data_store())))
}

/// The schema for [ListDocumentsResponse][crate::model::ListDocumentsResponse].
pub fn list_documents_response() -> Schema {
    Schema::new().field("documents", FieldType::array(FieldType::Message(document())))
}
