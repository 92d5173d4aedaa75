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

/// The schema for [Breakpoint][crate::model::Breakpoint].
pub fn breakpoint() -> Schema {
    Schema::new()
        .field("createTime", FieldType::Timestamp)
        .field("finalTime", FieldType::Timestamp)
        .field("canaryExpireTime", FieldType::Timestamp)
}

/// The schema for [GetBreakpointResponse][crate::model::GetBreakpointResponse].
pub fn get_breakpoint_response() -> Schema {
    Schema::new().field("breakpoint", FieldType::Message(breakpoint()))
}

/// The schema for [ListBreakpointsResponse][crate::model::ListBreakpointsResponse].
pub fn list_breakpoints_response() -> Schema {
    Schema::new().field("breakpoints", FieldType::array(FieldType::Message(breakpoint())))
}

/// The schema for [SetBreakpointResponse][crate::model::SetBreakpointResponse].
pub fn set_breakpoint_response() -> Schema {
    Schema::new().field("breakpoint", FieldType::Message(breakpoint()))
}

/// The schema for [ListActiveBreakpointsResponse][crate::model::ListActiveBreakpointsResponse].
pub fn list_active_breakpoints_response() -> Schema {
    Schema::new().field("breakpoints", FieldType::array(FieldType::Message(breakpoint())))
}
