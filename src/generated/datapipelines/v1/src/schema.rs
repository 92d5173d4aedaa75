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

/// The schema for [Pipeline][crate::model::Pipeline].
pub fn pipeline() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("lastUpdateTime", FieldType::Timestamp)
        .field("scheduleInfo", FieldType::Message(schedule_spec()))
}

/// The schema for [ScheduleSpec][crate::model::ScheduleSpec].
pub fn schedule_spec() -> Schema {
    Schema::new().field("nextJobTime", FieldType::Timestamp)
}

/// The schema for [Job][crate::model::Job].
pub fn job() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("endTime", FieldType::Timestamp)
}

/// The schema for [ListPipelinesResponse][crate::model::ListPipelinesResponse].
pub fn list_pipelines_response() -> Schema {
    Schema::new().field("pipelines", FieldType::array(FieldType::Message(pipeline())))
}

/// The schema for [ListJobsResponse][crate::model::ListJobsResponse].
pub fn list_jobs_response() -> Schema {
    Schema::new().field("jobs", FieldType::array(FieldType::Message(job())))
}

/// The schema for [RunPipelineResponse][crate::model::RunPipelineResponse].
pub fn run_pipeline_response() -> Schema {
    Schema::new().field("job", FieldType::Message(job()))
}
