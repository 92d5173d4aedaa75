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

/// The schema for [WorkstationCluster][crate::model::WorkstationCluster].
pub fn workstation_cluster() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("updateTime", FieldType::Timestamp)
        .field("deleteTime", FieldType::Timestamp)
}

/// The schema for [WorkstationConfig][crate::model::WorkstationConfig].
pub fn workstation_config() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("updateTime", FieldType::Timestamp)
        .field("deleteTime", FieldType::Timestamp)
        .field("idleTimeout", FieldType::Duration)
        .field("runningTimeout", FieldType::Duration)
}

/// The schema for [Workstation][crate::model::Workstation].
pub fn workstation() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("updateTime", FieldType::Timestamp)
        .field("deleteTime", FieldType::Timestamp)
        .field("startTime", FieldType::Timestamp)
}

/// The schema for [GenerateAccessTokenResponse][crate::model::GenerateAccessTokenResponse].
pub fn generate_access_token_response() -> Schema {
    Schema::new().field("expireTime", FieldType::Timestamp)
}

/// The schema for [OperationMetadata][crate::model::OperationMetadata].
pub fn operation_metadata() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("endTime", FieldType::Timestamp)
}

/// The schema for [ListWorkstationClustersResponse][crate::model::ListWorkstationClustersResponse].
pub fn list_workstation_clusters_response() -> Schema {
    Schema::new()
        .field("workstationClusters", FieldType::array(FieldType::Message(workstation_cluster())))
}

/// The schema for [ListWorkstationConfigsResponse][crate::model::ListWorkstationConfigsResponse].
pub fn list_workstation_configs_response() -> Schema {
    Schema::new()
        .field("workstationConfigs", FieldType::array(FieldType::Message(workstation_config())))
}

/// The schema for [ListWorkstationsResponse][crate::model::ListWorkstationsResponse].
pub fn list_workstations_response() -> Schema {
    Schema::new().field("workstations", FieldType::array(FieldType::Message(workstation())))
}
